//! Configuration type definitions
//!
//! These types represent the display configuration. Every setter that takes
//! an externally supplied value validates it and leaves the previous value
//! untouched on rejection.

use crate::grid::Pattern;
use crate::ui::ScreenId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default grid width (matrix rotated to portrait)
pub const DEFAULT_GRID_WIDTH: u16 = 32;

/// Default grid height
pub const DEFAULT_GRID_HEIGHT: u16 = 120;

/// Cell capacity of the default grid
pub const GRID_CELLS: usize = DEFAULT_GRID_WIDTH as usize * DEFAULT_GRID_HEIGHT as usize;

/// Smallest accepted grid dimension
pub const MIN_GRID_DIMENSION: u16 = 8;

/// Largest accepted grid dimension
pub const MAX_GRID_DIMENSION: u16 = 256;

/// Default generation interval
pub const DEFAULT_UPDATE_INTERVAL_MS: u32 = 200;

/// Fastest accepted generation interval
pub const MIN_UPDATE_INTERVAL_MS: u32 = 10;

/// Slowest accepted generation interval
pub const MAX_UPDATE_INTERVAL_MS: u32 = 10_000;

/// Speed presets offered in the settings menu (fast, normal, slow)
pub const SPEED_PRESETS_MS: [u32; 3] = [50, 200, 1000];

/// Default time a stable world stays on screen before it is reset
pub const DEFAULT_STABILITY_TIMEOUT_MS: u32 = 60_000;

/// Shortest accepted stability timeout
pub const MIN_STABILITY_TIMEOUT_MS: u32 = 1_000;

/// Longest accepted stability timeout
pub const MAX_STABILITY_TIMEOUT_MS: u32 = 3_600_000;

/// Populations below this are too sparse to stay interesting
pub const LOW_POPULATION_FLOOR: u32 = 58;

/// Largest accepted low-population floor
pub const MAX_LOW_POPULATION_FLOOR: u32 = MAX_GRID_DIMENSION as u32 * MAX_GRID_DIMENSION as u32;

/// Number of population samples that must agree before a world is stable
pub const HISTORY_WINDOW: usize = 30;

/// How long the instructional demo is shown
pub const DEMO_DURATION_MS: u32 = 5_000;

/// How long the reset animation runs
pub const RESET_ANIMATION_MS: u32 = 1_000;

/// Default dwell time per screen in auto-cycle mode
pub const DEFAULT_CYCLE_TIME_MS: u32 = 3_000;

/// Shortest accepted dwell time
pub const MIN_CYCLE_TIME_MS: u32 = 1_000;

/// Longest accepted dwell time
pub const MAX_CYCLE_TIME_MS: u32 = 3_600_000;

/// Dwell time range reachable from the settings menu (seconds)
pub const SETTINGS_CYCLE_MIN_S: u32 = 1;
pub const SETTINGS_CYCLE_MAX_S: u32 = 10;

/// Inactivity before manual browse / settings fall back
pub const UI_IDLE_TIMEOUT_MS: u32 = 10_000;

/// Live-cell probability for random seeding (percent)
pub const RANDOM_DENSITY_PERCENT: u8 = 30;

/// Noise added on top of the mixed layout (percent)
pub const MIXED_NOISE_PERCENT: u8 = 10;

/// Rows processed between cooperative yields
pub const YIELD_EVERY_ROWS: usize = 30;

/// Default RNG seed ("LIFEGRID")
pub const DEFAULT_SEED: u64 = 0x4C49_4645_4752_4944;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Value outside its accepted range
    OutOfRange,
    /// Value could not be parsed
    Malformed,
    /// Option string not recognised
    UnknownOption,
    /// Grid does not fit the allocated cell storage
    GridTooLarge,
    /// Setting can no longer be changed (grid already in use)
    Locked,
}

/// Simulation speed as offered in the settings menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Speed {
    Fast,
    Normal,
    Slow,
}

impl Speed {
    /// Classify an arbitrary interval into the nearest preset bucket
    pub fn from_interval(interval_ms: u32) -> Self {
        if interval_ms <= SPEED_PRESETS_MS[0] {
            Speed::Fast
        } else if interval_ms <= SPEED_PRESETS_MS[1] {
            Speed::Normal
        } else {
            Speed::Slow
        }
    }

    /// Preset interval for this speed
    pub fn interval_ms(self) -> u32 {
        SPEED_PRESETS_MS[self.index()]
    }

    /// Five-character label for the settings overlay
    pub fn short_label(self) -> &'static str {
        match self {
            Speed::Fast => "Fast",
            Speed::Normal => "Norml",
            Speed::Slow => "Slow",
        }
    }

    fn index(self) -> usize {
        match self {
            Speed::Fast => 0,
            Speed::Normal => 1,
            Speed::Slow => 2,
        }
    }
}

/// Grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridConfig {
    /// Columns
    pub width: u16,
    /// Rows
    pub height: u16,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

impl GridConfig {
    /// Create validated grid dimensions
    pub fn new(width: u16, height: u16) -> Result<Self, ConfigError> {
        let range = MIN_GRID_DIMENSION..=MAX_GRID_DIMENSION;
        if !range.contains(&width) || !range.contains(&height) {
            return Err(ConfigError::OutOfRange);
        }
        Ok(Self { width, height })
    }

    /// Number of cells
    pub const fn cells(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Game of Life configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    /// Minimum time between generations
    pub update_interval_ms: u32,
    /// Seed with the mixed methuselah layout instead of random noise
    pub complex_patterns: bool,
    /// RNG seed for random fills
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
            complex_patterns: true,
            seed: DEFAULT_SEED,
        }
    }
}

impl GameConfig {
    /// Set the generation interval
    pub fn set_update_interval(&mut self, interval_ms: u32) -> Result<(), ConfigError> {
        if !(MIN_UPDATE_INTERVAL_MS..=MAX_UPDATE_INTERVAL_MS).contains(&interval_ms) {
            return Err(ConfigError::OutOfRange);
        }
        self.update_interval_ms = interval_ms;
        Ok(())
    }

    /// Current speed bucket
    pub fn speed(&self) -> Speed {
        Speed::from_interval(self.update_interval_ms)
    }

    /// Step through the speed presets, wrapping at both ends
    ///
    /// An interval that matches no preset is treated as "normal".
    pub fn cycle_speed(&mut self, direction: i8) {
        let current = SPEED_PRESETS_MS
            .iter()
            .position(|&ms| ms == self.update_interval_ms)
            .unwrap_or(1) as i32;
        let len = SPEED_PRESETS_MS.len() as i32;
        let next = (current + direction as i32).rem_euclid(len);
        self.update_interval_ms = SPEED_PRESETS_MS[next as usize];
    }

    /// Pattern used when a new world is seeded
    pub fn seed_pattern(&self) -> Pattern {
        if self.complex_patterns {
            Pattern::Mixed
        } else {
            Pattern::Random
        }
    }
}

/// Stability handling configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StabilityConfig {
    /// Reset automatically once a stable world has been shown long enough
    pub auto_reset_on_stable: bool,
    /// How long a stable world stays visible before the reset
    pub stability_timeout_ms: u32,
    /// Populations below this count as stable (only with auto-reset)
    pub low_population_floor: u32,
}

impl Default for StabilityConfig {
    fn default() -> Self {
        Self {
            auto_reset_on_stable: true,
            stability_timeout_ms: DEFAULT_STABILITY_TIMEOUT_MS,
            low_population_floor: LOW_POPULATION_FLOOR,
        }
    }
}

impl StabilityConfig {
    /// Set the stability countdown length
    pub fn set_stability_timeout(&mut self, timeout_ms: u32) -> Result<(), ConfigError> {
        if !(MIN_STABILITY_TIMEOUT_MS..=MAX_STABILITY_TIMEOUT_MS).contains(&timeout_ms) {
            return Err(ConfigError::OutOfRange);
        }
        self.stability_timeout_ms = timeout_ms;
        Ok(())
    }

    /// Set the low-population floor
    pub fn set_low_population_floor(&mut self, floor: u32) -> Result<(), ConfigError> {
        if floor > MAX_LOW_POPULATION_FLOOR {
            return Err(ConfigError::OutOfRange);
        }
        self.low_population_floor = floor;
        Ok(())
    }
}

/// UI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UiConfig {
    /// Dwell time per screen in auto-cycle mode
    pub cycle_time_ms: u32,
    /// Inactivity before manual browse / settings fall back
    pub idle_timeout_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            cycle_time_ms: DEFAULT_CYCLE_TIME_MS,
            idle_timeout_ms: UI_IDLE_TIMEOUT_MS,
        }
    }
}

impl UiConfig {
    /// Set the dwell time
    pub fn set_cycle_time(&mut self, cycle_time_ms: u32) -> Result<(), ConfigError> {
        if !(MIN_CYCLE_TIME_MS..=MAX_CYCLE_TIME_MS).contains(&cycle_time_ms) {
            return Err(ConfigError::OutOfRange);
        }
        self.cycle_time_ms = cycle_time_ms;
        Ok(())
    }

    /// Dwell time in whole seconds
    pub fn cycle_time_s(&self) -> u32 {
        self.cycle_time_ms / 1000
    }

    /// Nudge the dwell time by one second, clamped to the settings range
    pub fn adjust_cycle_time(&mut self, direction: i8) {
        let seconds = (self.cycle_time_s() as i32 + direction as i32).clamp(
            SETTINGS_CYCLE_MIN_S as i32,
            SETTINGS_CYCLE_MAX_S as i32,
        );
        self.cycle_time_ms = seconds as u32 * 1000;
    }
}

/// Complete display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatrixConfig {
    pub grid: GridConfig,
    pub game: GameConfig,
    pub stability: StabilityConfig,
    pub ui: UiConfig,
    /// Screen that shows the automaton
    pub automaton_screen: ScreenId,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            game: GameConfig::default(),
            stability: StabilityConfig::default(),
            ui: UiConfig::default(),
            automaton_screen: ScreenId::AUTOMATON,
        }
    }
}
