//! Input events from the Lifegrid buttons

/// Input event values sent by the input board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Next button (or encoder clockwise detent)
    Next,
    /// Previous button (or encoder counter-clockwise detent)
    Previous,
    /// Short press (<500 ms)
    Select,
    /// Long press (>=500 ms)
    Hold,
}

// Wire format values
const EVENT_NEXT: u8 = 0x01;
const EVENT_PREVIOUS: u8 = 0x02;
const EVENT_SELECT: u8 = 0x10;
const EVENT_HOLD: u8 = 0x11;

impl InputEvent {
    /// Parse an event from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            EVENT_NEXT => Some(InputEvent::Next),
            EVENT_PREVIOUS => Some(InputEvent::Previous),
            EVENT_SELECT => Some(InputEvent::Select),
            EVENT_HOLD => Some(InputEvent::Hold),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            InputEvent::Next => EVENT_NEXT,
            InputEvent::Previous => EVENT_PREVIOUS,
            InputEvent::Select => EVENT_SELECT,
            InputEvent::Hold => EVENT_HOLD,
        }
    }

    /// Returns true for directional (left/right) events
    pub fn is_directional(&self) -> bool {
        matches!(self, InputEvent::Next | InputEvent::Previous)
    }

    /// Returns true for press events
    pub fn is_press(&self) -> bool {
        matches!(self, InputEvent::Select | InputEvent::Hold)
    }

    /// Returns the direction as a signed delta (-1, 0, or +1)
    pub fn direction(&self) -> i8 {
        match self {
            InputEvent::Next => 1,
            InputEvent::Previous => -1,
            _ => 0,
        }
    }
}
