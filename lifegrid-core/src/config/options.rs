//! String option adapters
//!
//! Hosts expose settings as English option strings ("Normal (200ms)",
//! "60s", "acorn"). These helpers map them onto the typed configuration
//! values. Nothing else in the crate handles strings.

use super::types::{ConfigError, Speed};
use crate::grid::Pattern;
use crate::ui::UiMode;

/// Parse a duration such as `"200ms"`, `"60s"`, `"2min"`, `"1h"` or a bare
/// number of milliseconds
pub fn parse_duration_ms(input: &str) -> Result<u32, ConfigError> {
    let input = input.trim();
    let digits_end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    let (number, unit) = input.split_at(digits_end);
    if number.is_empty() {
        return Err(ConfigError::Malformed);
    }

    let multiplier: u32 = match unit.trim() {
        "" | "ms" => 1,
        "s" => 1_000,
        "min" => 60_000,
        "h" => 3_600_000,
        _ => return Err(ConfigError::Malformed),
    };

    let value: u32 = number.parse().map_err(|_| ConfigError::OutOfRange)?;
    value.checked_mul(multiplier).ok_or(ConfigError::OutOfRange)
}

/// Parse an on/off style flag
pub fn parse_flag(input: &str) -> Result<bool, ConfigError> {
    let input = input.trim();
    if ["on", "true", "yes", "1"]
        .iter()
        .any(|s| input.eq_ignore_ascii_case(s))
    {
        Ok(true)
    } else if ["off", "false", "no", "0"]
        .iter()
        .any(|s| input.eq_ignore_ascii_case(s))
    {
        Ok(false)
    } else {
        Err(ConfigError::UnknownOption)
    }
}

impl Speed {
    /// Option string shown by the host select entity
    pub fn option_name(self) -> &'static str {
        match self {
            Speed::Fast => "Fast (50ms)",
            Speed::Normal => "Normal (200ms)",
            Speed::Slow => "Slow (1000ms)",
        }
    }

    /// Parse a host option string (full or bare name)
    pub fn from_option(input: &str) -> Result<Self, ConfigError> {
        let input = input.trim();
        [Speed::Fast, Speed::Normal, Speed::Slow]
            .into_iter()
            .find(|speed| {
                let full = speed.option_name();
                let bare = full.split(' ').next().unwrap_or(full);
                input.eq_ignore_ascii_case(full) || input.eq_ignore_ascii_case(bare)
            })
            .ok_or(ConfigError::UnknownOption)
    }
}

impl Pattern {
    /// Lower-case option name
    pub fn name(self) -> &'static str {
        match self {
            Pattern::Random => "random",
            Pattern::RPentomino => "r-pentomino",
            Pattern::Acorn => "acorn",
            Pattern::Glider => "glider",
            Pattern::Diehard => "diehard",
            Pattern::Mixed => "mixed",
        }
    }

    /// Parse a pattern option name (case-insensitive)
    pub fn from_name(input: &str) -> Result<Self, ConfigError> {
        let input = input.trim();
        Pattern::ALL
            .into_iter()
            .find(|pattern| input.eq_ignore_ascii_case(pattern.name()))
            .ok_or(ConfigError::UnknownOption)
    }
}

impl UiMode {
    /// Option name
    pub fn name(self) -> &'static str {
        match self {
            UiMode::AutoCycle => "auto",
            UiMode::ManualBrowse => "manual",
            UiMode::Settings => "settings",
        }
    }

    /// Parse a mode option name (case-insensitive)
    pub fn from_name(input: &str) -> Result<Self, ConfigError> {
        let input = input.trim();
        [UiMode::AutoCycle, UiMode::ManualBrowse, UiMode::Settings]
            .into_iter()
            .find(|mode| input.eq_ignore_ascii_case(mode.name()))
            .ok_or(ConfigError::UnknownOption)
    }
}
