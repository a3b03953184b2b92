//! Events that trigger lifecycle transitions

/// Events that can trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Timer events
    /// Controller started
    Boot,
    /// Demo period over (or demo switched off); a new world was seeded
    DemoFinished,
    /// Stable countdown ran out with auto-reset enabled
    StabilityTimeout,
    /// Reset animation finished
    AnimationElapsed,

    // Detector events
    /// Population flat or too sparse
    BecameStable,
    /// Population started changing again
    Revived,
    /// Every cell died
    Extinct,

    // Control events
    /// Host asked for a reset
    ResetRequested,
    /// Host switched demo mode on
    DemoRequested,
    /// Host seeded a fresh world
    Reseeded,
}

impl Event {
    /// Check if this event comes from elapsed time
    pub fn is_timer_event(&self) -> bool {
        matches!(
            self,
            Event::Boot | Event::DemoFinished | Event::StabilityTimeout | Event::AnimationElapsed
        )
    }

    /// Check if this event comes from the stability detector
    pub fn is_detector_event(&self) -> bool {
        matches!(self, Event::BecameStable | Event::Revived | Event::Extinct)
    }

    /// Check if this event was requested by the host
    pub fn is_control_event(&self) -> bool {
        matches!(
            self,
            Event::ResetRequested | Event::DemoRequested | Event::Reseeded
        )
    }
}
