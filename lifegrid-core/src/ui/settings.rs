//! Settings menu
//!
//! A cursor over the settings available on the current screen. The dwell
//! time is global; speed and pattern style only appear on the automaton
//! screen.

use core::fmt::Write;

use heapless::String;

use crate::config::{GameConfig, UiConfig};

/// Adjustable setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Setting {
    /// Auto-cycle dwell time (1-10 s)
    CycleTime,
    /// Generation interval preset
    Speed,
    /// Mixed layout vs random fill
    ComplexPatterns,
}

/// Short value text for the settings overlay
pub type SettingValue = String<8>;

const GLOBAL: &[Setting] = &[Setting::CycleTime];
const AUTOMATON: &[Setting] = &[Setting::CycleTime, Setting::Speed, Setting::ComplexPatterns];

impl Setting {
    /// Settings offered on a screen
    pub fn available(on_automaton: bool) -> &'static [Setting] {
        if on_automaton {
            AUTOMATON
        } else {
            GLOBAL
        }
    }

    /// Five-character label
    pub fn label(self) -> &'static str {
        match self {
            Setting::CycleTime => "Cycle",
            Setting::Speed => "Speed",
            Setting::ComplexPatterns => "Cmplx",
        }
    }

    /// Current value as overlay text
    pub fn value(self, ui: &UiConfig, game: &GameConfig) -> SettingValue {
        let mut out = SettingValue::new();
        let _ = match self {
            Setting::CycleTime => write!(out, "{}s", ui.cycle_time_s()),
            Setting::Speed => write!(out, "{}", game.speed().short_label()),
            Setting::ComplexPatterns => {
                write!(out, "{}", if game.complex_patterns { "On" } else { "Off" })
            }
        };
        out
    }
}

/// Requested change to a setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Adjustment {
    pub setting: Setting,
    /// +1 or -1
    pub direction: i8,
}

impl Adjustment {
    /// Apply to the configuration structs
    pub fn apply(self, ui: &mut UiConfig, game: &mut GameConfig) {
        match self.setting {
            Setting::CycleTime => ui.adjust_cycle_time(self.direction),
            Setting::Speed => game.cycle_speed(self.direction),
            Setting::ComplexPatterns => game.complex_patterns = !game.complex_patterns,
        }
    }
}

/// Position in the settings list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SettingsCursor {
    index: usize,
}

impl SettingsCursor {
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Raw cursor position
    pub fn index(&self) -> usize {
        self.index
    }

    /// Selected setting among `available`
    pub fn selected(&self, available: &[Setting]) -> Option<Setting> {
        if available.is_empty() {
            return None;
        }
        available.get(self.index % available.len()).copied()
    }

    /// Move by `direction`, wrapping in both directions
    pub fn advance(&mut self, available: &[Setting], direction: i8) {
        if available.is_empty() {
            self.index = 0;
            return;
        }
        let len = available.len() as i32;
        let current = (self.index % available.len()) as i32;
        self.index = (current + direction as i32).rem_euclid(len) as usize;
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available() {
        assert_eq!(Setting::available(false), &[Setting::CycleTime]);
        assert_eq!(Setting::available(true).len(), 3);
    }

    #[test]
    fn test_cursor_wraps() {
        let settings = Setting::available(true);
        let mut cursor = SettingsCursor::new();
        assert_eq!(cursor.selected(settings), Some(Setting::CycleTime));

        cursor.advance(settings, -1);
        assert_eq!(cursor.selected(settings), Some(Setting::ComplexPatterns));
        cursor.advance(settings, 1);
        cursor.advance(settings, 1);
        assert_eq!(cursor.selected(settings), Some(Setting::Speed));
    }

    #[test]
    fn test_cursor_survives_shorter_list() {
        let mut cursor = SettingsCursor::new();
        cursor.advance(Setting::available(true), 2);
        assert_eq!(
            cursor.selected(Setting::available(false)),
            Some(Setting::CycleTime)
        );
        assert_eq!(cursor.selected(&[]), None);
    }

    #[test]
    fn test_values() {
        let mut ui = UiConfig::default();
        let mut game = GameConfig::default();
        assert_eq!(Setting::CycleTime.value(&ui, &game).as_str(), "3s");
        assert_eq!(Setting::Speed.value(&ui, &game).as_str(), "Norml");
        assert_eq!(Setting::ComplexPatterns.value(&ui, &game).as_str(), "On");

        Adjustment {
            setting: Setting::ComplexPatterns,
            direction: 1,
        }
        .apply(&mut ui, &mut game);
        assert_eq!(Setting::ComplexPatterns.value(&ui, &game).as_str(), "Off");

        for _ in 0..12 {
            Adjustment {
                setting: Setting::CycleTime,
                direction: 1,
            }
            .apply(&mut ui, &mut game);
        }
        assert_eq!(Setting::CycleTime.value(&ui, &game).as_str(), "10s");

        Adjustment {
            setting: Setting::Speed,
            direction: -1,
        }
        .apply(&mut ui, &mut game);
        assert_eq!(Setting::Speed.value(&ui, &game).as_str(), "Fast");
    }
}
