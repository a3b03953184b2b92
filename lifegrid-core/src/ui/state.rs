//! UI state machine
//!
//! Modes:
//!
//! - `AutoCycle`: screens advance on their own after the dwell time
//! - `ManualBrowse`: the user steps through screens; falls back to
//!   `AutoCycle` after the idle timeout
//! - `Settings`: buttons edit settings; falls back to `ManualBrowse` after
//!   the idle timeout
//!
//! The pause flag is independent of the mode and stops auto-cycling (and,
//! through the caller, automaton stepping).

use lifegrid_protocol::InputEvent;

use super::screens::{RegistryError, ScreenId, ScreenRegistry};
use super::settings::{Adjustment, Setting, SettingsCursor};
use crate::config::UiConfig;

/// UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UiMode {
    AutoCycle,
    ManualBrowse,
    Settings,
}

/// State shown on the status LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Indicator {
    Paused,
    AutoCycle,
    ManualBrowse,
    Settings,
}

/// Screen selection, mode and pause state
#[derive(Debug, Clone)]
pub struct UiState {
    mode: UiMode,
    last_input_ms: u32,
    registry: ScreenRegistry,
    /// Index into the enabled list
    current: usize,
    last_switch_ms: u32,
    paused: bool,
    cursor: SettingsCursor,
    config: UiConfig,
    automaton_screen: ScreenId,
}

impl UiState {
    /// Create an empty UI in auto-cycle mode
    pub fn new(config: UiConfig, automaton_screen: ScreenId) -> Self {
        Self {
            mode: UiMode::AutoCycle,
            last_input_ms: 0,
            registry: ScreenRegistry::new(),
            current: 0,
            last_switch_ms: 0,
            paused: false,
            cursor: SettingsCursor::new(),
            config,
            automaton_screen,
        }
    }

    /// Add or update a screen
    ///
    /// The selection follows the current screen to its new position; if it
    /// was disabled the first enabled screen is selected.
    pub fn register_screen(&mut self, id: ScreenId, enabled: bool) -> Result<(), RegistryError> {
        let before = self.current_screen_id();
        self.registry.register(id, enabled)?;
        self.reselect(before);
        debug!("screen {} registered, enabled={}", id, enabled);
        Ok(())
    }

    /// Add or update a screen with a custom name
    pub fn register_named_screen(
        &mut self,
        id: ScreenId,
        enabled: bool,
        name: &str,
    ) -> Result<(), RegistryError> {
        let before = self.current_screen_id();
        self.registry.register_named(id, enabled, name)?;
        self.reselect(before);
        Ok(())
    }

    fn reselect(&mut self, before: Option<ScreenId>) {
        self.current = before
            .and_then(|id| self.registry.position(id))
            .unwrap_or(0);
    }

    /// Switch mode
    ///
    /// Counts as input. Entering `AutoCycle` or `Settings` restarts the
    /// dwell timer; entering `Settings` puts the cursor on the first item.
    pub fn set_mode(&mut self, mode: UiMode, now_ms: u32) {
        if mode == self.mode {
            return;
        }
        info!("ui mode {} -> {}", self.mode, mode);
        self.mode = mode;
        self.handle_input(now_ms);
        match mode {
            UiMode::AutoCycle => self.last_switch_ms = now_ms,
            UiMode::Settings => {
                self.last_switch_ms = now_ms;
                self.cursor.reset();
            }
            UiMode::ManualBrowse => {}
        }
    }

    /// Record user activity
    pub fn handle_input(&mut self, now_ms: u32) {
        self.last_input_ms = now_ms;
    }

    /// Step forward through enabled screens (forces manual browse)
    pub fn next_screen(&mut self, now_ms: u32) {
        self.navigate(1, now_ms);
    }

    /// Step backward through enabled screens (forces manual browse)
    pub fn prev_screen(&mut self, now_ms: u32) {
        self.navigate(-1, now_ms);
    }

    fn navigate(&mut self, direction: i8, now_ms: u32) {
        let len = self.registry.enabled().len();
        if len == 0 {
            return;
        }
        self.handle_input(now_ms);
        if self.mode != UiMode::ManualBrowse {
            info!("ui mode {} -> {}", self.mode, UiMode::ManualBrowse);
            self.mode = UiMode::ManualBrowse;
        }
        let current = (self.current % len) as i32;
        self.current = (current + direction as i32).rem_euclid(len as i32) as usize;
        self.last_switch_ms = now_ms;
        debug!("screen {}", self.current_screen_id());
    }

    /// Select a screen by index into the enabled list (wraps)
    ///
    /// The selected screen gets a full dwell period before auto-cycle
    /// moves on.
    pub fn set_current_screen(&mut self, index: usize, now_ms: u32) {
        let len = self.registry.enabled().len();
        if len > 0 {
            self.current = index % len;
            self.last_switch_ms = now_ms;
        }
    }

    /// Flip the pause flag; returns the new value
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        info!("paused={}", self.paused);
        self.paused
    }

    /// Fall back from manual browse or settings after inactivity
    pub fn check_timeout(&mut self, now_ms: u32) {
        if now_ms.wrapping_sub(self.last_input_ms) < self.config.idle_timeout_ms {
            return;
        }
        match self.mode {
            UiMode::ManualBrowse => self.set_mode(UiMode::AutoCycle, now_ms),
            UiMode::Settings => {
                self.set_mode(UiMode::ManualBrowse, now_ms);
                self.cursor.reset();
            }
            UiMode::AutoCycle => {}
        }
    }

    /// Advance the auto-cycle if the dwell time has passed
    ///
    /// `hold` keeps the current screen (automaton demo or reset animation
    /// showing). Returns true if the screen changed.
    pub fn update_cycle(&mut self, now_ms: u32, hold: bool) -> bool {
        let len = self.registry.enabled().len();
        if self.mode != UiMode::AutoCycle || self.paused || len == 0 || hold {
            return false;
        }
        if now_ms.wrapping_sub(self.last_switch_ms) < self.config.cycle_time_ms {
            return false;
        }
        self.current = (self.current + 1) % len;
        self.last_switch_ms = now_ms;
        trace!("auto-cycle to {}", self.current_screen_id());
        true
    }

    /// Give the current screen a full dwell period from `now_ms`
    pub fn restart_dwell(&mut self, now_ms: u32) {
        self.last_switch_ms = now_ms;
    }

    /// Route a button event
    ///
    /// In browse modes the buttons navigate, `Select` toggles pause and
    /// `Hold` opens settings. In settings `Next`/`Previous` produce an
    /// [`Adjustment`] for the caller to apply, `Select` moves the cursor
    /// and `Hold` leaves.
    pub fn dispatch(&mut self, event: InputEvent, now_ms: u32) -> Option<Adjustment> {
        self.handle_input(now_ms);
        match (self.mode, event) {
            (UiMode::Settings, InputEvent::Next | InputEvent::Previous) => {
                let setting = self.selected_setting()?;
                debug!("adjust {} by {}", setting, event.direction());
                Some(Adjustment {
                    setting,
                    direction: event.direction(),
                })
            }
            (UiMode::Settings, InputEvent::Select) => {
                let available = self.available_settings();
                self.cursor.advance(available, 1);
                None
            }
            (UiMode::Settings, InputEvent::Hold) => {
                self.set_mode(UiMode::ManualBrowse, now_ms);
                None
            }
            (_, InputEvent::Next) => {
                self.next_screen(now_ms);
                None
            }
            (_, InputEvent::Previous) => {
                self.prev_screen(now_ms);
                None
            }
            (_, InputEvent::Select) => {
                self.toggle_pause();
                None
            }
            (_, InputEvent::Hold) => {
                self.set_mode(UiMode::Settings, now_ms);
                None
            }
        }
    }

    /// Settings offered on the current screen
    pub fn available_settings(&self) -> &'static [Setting] {
        Setting::available(self.is_automaton_visible())
    }

    /// Setting under the cursor
    pub fn selected_setting(&self) -> Option<Setting> {
        self.cursor.selected(self.available_settings())
    }

    /// Apply a cycle-time change from the settings menu
    pub fn adjust_cycle_time(&mut self, direction: i8) {
        self.config.adjust_cycle_time(direction);
        info!("cycle time {} s", self.config.cycle_time_s());
    }

    /// Current screen, or `None` when nothing is enabled
    pub fn current_screen_id(&self) -> Option<ScreenId> {
        let enabled = self.registry.enabled();
        if enabled.is_empty() {
            return None;
        }
        enabled.get(self.current % enabled.len()).copied()
    }

    /// Whether the automaton screen is showing
    pub fn is_automaton_visible(&self) -> bool {
        self.current_screen_id() == Some(self.automaton_screen)
    }

    /// LED state
    pub fn indicator(&self) -> Indicator {
        if self.paused {
            return Indicator::Paused;
        }
        match self.mode {
            UiMode::AutoCycle => Indicator::AutoCycle,
            UiMode::ManualBrowse => Indicator::ManualBrowse,
            UiMode::Settings => Indicator::Settings,
        }
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn last_input_ms(&self) -> u32 {
        self.last_input_ms
    }

    pub fn last_switch_ms(&self) -> u32 {
        self.last_switch_ms
    }

    pub fn registry(&self) -> &ScreenRegistry {
        &self.registry
    }

    pub fn cursor(&self) -> &SettingsCursor {
        &self.cursor
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut UiConfig {
        &mut self.config
    }

    pub fn automaton_screen(&self) -> ScreenId {
        self.automaton_screen
    }
}
