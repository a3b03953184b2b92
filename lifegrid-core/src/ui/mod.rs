//! Screen and UI state
//!
//! Which logical screen is shown, how input moves between modes and when
//! auto-cycling advances.

pub mod screens;
pub mod settings;
pub mod state;

pub use screens::{RegistryError, Screen, ScreenId, ScreenName, ScreenRegistry, MAX_NAME_LEN, MAX_SCREENS};
pub use settings::{Adjustment, Setting, SettingValue, SettingsCursor};
pub use state::{Indicator, UiMode, UiState};
