//! Display controller
//!
//! [`LifeMatrix`] owns the automaton, its lifecycle and the UI state and
//! advances all of them from a single millisecond tick. One tick runs, in
//! order:
//!
//! 1. UI idle timeout
//! 2. Visibility handling (stable countdown freeze/resume)
//! 3. Lifecycle timers (demo end seeds a new world)
//! 4. Automaton step, if visible, running or stable and not paused
//! 5. Auto-cycle advance
//!
//! Renderers read the grid and counters between ticks.

use lifegrid_protocol::InputEvent;

use crate::automaton::{Automaton, StepReport};
use crate::config::{
    parse_duration_ms, ConfigError, GameConfig, GridConfig, MatrixConfig, Speed, StabilityConfig,
    GRID_CELLS,
};
use crate::grid::{Grid, Pattern};
use crate::lifecycle::{Lifecycle, Phase};
use crate::traits::{CooperativeYield, NoYield, NullTelemetry, TelemetrySink};
use crate::ui::{
    Adjustment, Indicator, RegistryError, ScreenId, Setting, SettingValue, UiMode, UiState,
};

/// Top-level display controller
pub struct LifeMatrix<T = NullTelemetry, Y = NoYield, const N: usize = GRID_CELLS> {
    game: GameConfig,
    stability: StabilityConfig,
    automaton: Automaton<N>,
    lifecycle: Lifecycle,
    ui: UiState,
    telemetry: T,
    yielder: Y,
}

impl<const N: usize> LifeMatrix<NullTelemetry, NoYield, N> {
    /// Controller without telemetry or cooperative yielding
    pub fn headless(config: MatrixConfig) -> Result<Self, ConfigError> {
        Self::new(config, NullTelemetry, NoYield)
    }
}

impl<T: TelemetrySink, Y: CooperativeYield, const N: usize> LifeMatrix<T, Y, N> {
    /// Create a controller
    ///
    /// Fails only if the grid dimensions are invalid or exceed `N` cells.
    pub fn new(config: MatrixConfig, telemetry: T, yielder: Y) -> Result<Self, ConfigError> {
        let automaton = Automaton::new(config.grid, &config.game, config.stability)?;
        let mut game = config.game;
        game.update_interval_ms = automaton.update_interval_ms();

        Ok(Self {
            game,
            stability: config.stability,
            automaton,
            lifecycle: Lifecycle::new(),
            ui: UiState::new(config.ui, config.automaton_screen),
            telemetry,
            yielder,
        })
    }

    /// Start the demo; the first tick does this automatically
    pub fn boot(&mut self, now_ms: u32) {
        if self.lifecycle.boot(now_ms).is_some() {
            info!("boot");
            self.ui.restart_dwell(now_ms);
            self.sync_activity(now_ms);
        }
    }

    /// Advance everything by one tick
    ///
    /// Returns the report of the generation computed this tick, if any.
    pub fn tick(&mut self, now_ms: u32) -> Option<StepReport> {
        if self.lifecycle.phase() == Phase::Uninitialized {
            self.boot(now_ms);
        }

        self.ui.check_timeout(now_ms);
        self.sync_activity(now_ms);

        match self.lifecycle.poll(now_ms, &self.stability) {
            Some(Phase::Running) => self.seed_after_demo(now_ms),
            Some(Phase::ResetAnimation) => self.automaton.clear_stability(),
            _ => {}
        }

        let mut report = None;
        if self.lifecycle.is_active() && self.lifecycle.phase().steps_engine() {
            report = self
                .automaton
                .step(now_ms, &mut self.yielder, &mut self.telemetry);
            if let Some(step) = report {
                if self.lifecycle.on_verdict(step.verdict, now_ms) == Some(Phase::ResetAnimation) {
                    self.automaton.clear_stability();
                }
            }
        }

        let hold = self.ui.is_automaton_visible() && self.lifecycle.phase().holds_screen();
        if self.ui.update_cycle(now_ms, hold) {
            self.sync_activity(now_ms);
        }

        report
    }

    fn sync_activity(&mut self, now_ms: u32) {
        let active = self.ui.is_automaton_visible() && !self.ui.is_paused();
        self.lifecycle.set_active(now_ms, active);
    }

    fn seed_after_demo(&mut self, now_ms: u32) {
        self.automaton.initialize(self.game.seed_pattern(), now_ms);
        if self.ui.is_automaton_visible() {
            self.ui.restart_dwell(now_ms);
        }
    }

    // Engine control

    /// Seed a new world immediately
    pub fn initialize(&mut self, pattern: Pattern, now_ms: u32) {
        self.automaton.initialize(pattern, now_ms);
        self.lifecycle.reseeded(now_ms);
    }

    /// Seed by numeric pattern id; unknown ids are ignored
    pub fn initialize_by_id(&mut self, id: u8, now_ms: u32) {
        if self.automaton.initialize_by_id(id, now_ms) {
            self.lifecycle.reseeded(now_ms);
        }
    }

    /// Start the reset animation (followed by the demo)
    pub fn reset(&mut self, now_ms: u32) {
        info!("reset requested");
        self.lifecycle.reset(now_ms);
        self.automaton.clear_stability();
    }

    /// Show the demo again, or skip the current one
    pub fn set_demo_mode(&mut self, enabled: bool, now_ms: u32) {
        if enabled {
            self.lifecycle.request_demo(now_ms);
            self.automaton.clear_stability();
        } else if self.lifecycle.finish_demo(now_ms) {
            self.seed_after_demo(now_ms);
        }
    }

    /// Set the generation interval; invalid values are logged and ignored
    pub fn set_update_interval(&mut self, interval_ms: u32) -> Result<(), ConfigError> {
        match self.automaton.set_update_interval(interval_ms) {
            Ok(()) => {
                self.game.update_interval_ms = interval_ms;
                Ok(())
            }
            Err(e) => {
                warn!("rejected update interval {} ms: {}", interval_ms, e);
                Err(e)
            }
        }
    }

    /// Set the generation interval from a speed option string
    pub fn set_speed_option(&mut self, option: &str) -> Result<(), ConfigError> {
        let speed = Speed::from_option(option).map_err(|e| {
            warn!("rejected speed option: {}", e);
            e
        })?;
        self.set_update_interval(speed.interval_ms())
    }

    /// Choose mixed (true) or random (false) seeding for the next world
    pub fn set_complex_patterns(&mut self, enabled: bool) {
        self.game.complex_patterns = enabled;
    }

    /// Restart the random generator
    pub fn set_seed(&mut self, seed: u64) {
        self.game.seed = seed;
        self.automaton.reseed(seed);
    }

    /// Enable or disable the automatic reset of stable worlds
    pub fn set_auto_reset(&mut self, enabled: bool) {
        self.stability.auto_reset_on_stable = enabled;
        self.automaton.set_stability(self.stability);
    }

    /// Set the stable countdown length
    pub fn set_stability_timeout(&mut self, timeout_ms: u32) -> Result<(), ConfigError> {
        self.stability
            .set_stability_timeout(timeout_ms)
            .map_err(|e| {
                warn!("rejected stability timeout {} ms: {}", timeout_ms, e);
                e
            })?;
        self.automaton.set_stability(self.stability);
        Ok(())
    }

    /// Set the stable countdown from a duration string such as `"60s"`
    pub fn set_stability_timeout_str(&mut self, value: &str) -> Result<(), ConfigError> {
        let timeout_ms = parse_duration_ms(value).map_err(|e| {
            warn!("rejected stability timeout string: {}", e);
            e
        })?;
        self.set_stability_timeout(timeout_ms)
    }

    /// Set the low-population floor (must be below the grid size)
    pub fn set_low_population_floor(&mut self, floor: u32) -> Result<(), ConfigError> {
        let result = if floor as usize > self.automaton.grid().len() {
            Err(ConfigError::OutOfRange)
        } else {
            self.stability.set_low_population_floor(floor)
        };
        match result {
            Ok(()) => {
                self.automaton.set_stability(self.stability);
                Ok(())
            }
            Err(e) => {
                warn!("rejected population floor {}: {}", floor, e);
                Err(e)
            }
        }
    }

    /// Set the auto-cycle dwell time
    pub fn set_cycle_time(&mut self, cycle_time_ms: u32) -> Result<(), ConfigError> {
        self.ui.config_mut().set_cycle_time(cycle_time_ms).map_err(|e| {
            warn!("rejected cycle time {} ms: {}", cycle_time_ms, e);
            e
        })
    }

    /// Set the dwell time from a duration string such as `"5s"`
    pub fn set_cycle_time_str(&mut self, value: &str) -> Result<(), ConfigError> {
        let cycle_time_ms = parse_duration_ms(value).map_err(|e| {
            warn!("rejected cycle time string: {}", e);
            e
        })?;
        self.set_cycle_time(cycle_time_ms)
    }

    /// Resize the grid; only possible before the first world is seeded
    pub fn reconfigure_grid(&mut self, grid: GridConfig) -> Result<(), ConfigError> {
        self.automaton.reconfigure(grid).map_err(|e| {
            warn!("rejected grid {}x{}: {}", grid.width, grid.height, e);
            e
        })
    }

    // UI control

    /// Add or update a screen
    pub fn register_screen(
        &mut self,
        id: ScreenId,
        enabled: bool,
        now_ms: u32,
    ) -> Result<(), RegistryError> {
        let result = self.ui.register_screen(id, enabled);
        self.sync_activity(now_ms);
        result
    }

    /// Add or update a screen with a custom display name
    pub fn register_named_screen(
        &mut self,
        id: ScreenId,
        enabled: bool,
        name: &str,
        now_ms: u32,
    ) -> Result<(), RegistryError> {
        let result = self.ui.register_named_screen(id, enabled, name);
        self.sync_activity(now_ms);
        result
    }

    pub fn next_screen(&mut self, now_ms: u32) {
        self.ui.next_screen(now_ms);
        self.sync_activity(now_ms);
    }

    pub fn prev_screen(&mut self, now_ms: u32) {
        self.ui.prev_screen(now_ms);
        self.sync_activity(now_ms);
    }

    pub fn set_current_screen(&mut self, index: usize, now_ms: u32) {
        self.ui.set_current_screen(index, now_ms);
        self.sync_activity(now_ms);
    }

    pub fn set_mode(&mut self, mode: UiMode, now_ms: u32) {
        self.ui.set_mode(mode, now_ms);
    }

    /// Flip the global pause; returns the new value
    pub fn toggle_pause(&mut self, now_ms: u32) -> bool {
        let paused = self.ui.toggle_pause();
        self.sync_activity(now_ms);
        paused
    }

    /// Record user activity (restarts the idle timeout)
    pub fn handle_input(&mut self, now_ms: u32) {
        self.ui.handle_input(now_ms);
    }

    /// Route a button event through the UI and apply any settings change
    pub fn handle_event(&mut self, event: InputEvent, now_ms: u32) {
        if let Some(adjustment) = self.ui.dispatch(event, now_ms) {
            self.apply_adjustment(adjustment);
        }
        self.sync_activity(now_ms);
    }

    /// Route a raw event byte; unknown bytes are ignored
    pub fn handle_event_byte(&mut self, byte: u8, now_ms: u32) {
        match InputEvent::from_byte(byte) {
            Some(event) => self.handle_event(event, now_ms),
            None => debug!("ignoring input byte {=u8:#x}", byte),
        }
    }

    fn apply_adjustment(&mut self, adjustment: Adjustment) {
        adjustment.apply(self.ui.config_mut(), &mut self.game);
        match adjustment.setting {
            Setting::CycleTime => info!("cycle time {} s", self.ui.config().cycle_time_s()),
            Setting::Speed => {
                let interval_ms = self.game.update_interval_ms;
                match self.automaton.set_update_interval(interval_ms) {
                    Ok(()) => info!("speed {} ms", interval_ms),
                    Err(e) => {
                        warn!("rejected speed preset {} ms: {}", interval_ms, e);
                        self.game.update_interval_ms = self.automaton.update_interval_ms();
                    }
                }
            }
            Setting::ComplexPatterns => {
                info!("complex patterns {}", self.game.complex_patterns);
            }
        }
    }

    // Queries

    pub fn get_cell(&self, x: i32, y: i32) -> u8 {
        self.automaton.get_cell(x, y)
    }

    pub fn grid(&self) -> &Grid<N> {
        self.automaton.grid()
    }

    pub fn generation(&self) -> u32 {
        self.automaton.generation()
    }

    pub fn population(&self) -> u32 {
        self.automaton.population()
    }

    pub fn is_stable(&self) -> bool {
        self.automaton.is_stable()
    }

    pub fn last_births(&self) -> u32 {
        self.automaton.last_births()
    }

    pub fn last_deaths(&self) -> u32 {
        self.automaton.last_deaths()
    }

    pub fn max_age(&self) -> u8 {
        self.automaton.max_age()
    }

    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    /// Demo phase showing (renderer draws the instructions)
    pub fn in_demo(&self) -> bool {
        self.lifecycle.phase() == Phase::Demo
    }

    /// Reset animation showing
    pub fn in_reset_animation(&self) -> bool {
        self.lifecycle.phase() == Phase::ResetAnimation
    }

    /// Progress through the current phase in ms (demo and animation)
    pub fn phase_elapsed(&self, now_ms: u32) -> u32 {
        self.lifecycle.phase_elapsed(now_ms)
    }

    /// Time left before a stable world is reset
    pub fn countdown_remaining(&self, now_ms: u32) -> Option<u32> {
        self.lifecycle
            .countdown_remaining(now_ms, self.stability.stability_timeout_ms)
    }

    pub fn current_screen_id(&self) -> Option<ScreenId> {
        self.ui.current_screen_id()
    }

    pub fn ui_mode(&self) -> UiMode {
        self.ui.mode()
    }

    pub fn is_paused(&self) -> bool {
        self.ui.is_paused()
    }

    pub fn indicator(&self) -> Indicator {
        self.ui.indicator()
    }

    pub fn is_automaton_visible(&self) -> bool {
        self.ui.is_automaton_visible()
    }

    /// Setting under the settings cursor with its current value
    pub fn selected_setting(&self) -> Option<(Setting, SettingValue)> {
        let setting = self.ui.selected_setting()?;
        Some((setting, setting.value(self.ui.config(), &self.game)))
    }

    /// Effective configuration
    pub fn config(&self) -> MatrixConfig {
        MatrixConfig {
            grid: GridConfig {
                width: self.grid().width(),
                height: self.grid().height(),
            },
            game: self.game,
            stability: self.stability,
            ui: *self.ui.config(),
            automaton_screen: self.ui.automaton_screen(),
        }
    }

    pub fn automaton(&self) -> &Automaton<N> {
        &self.automaton
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn telemetry(&self) -> &T {
        &self.telemetry
    }

    pub fn telemetry_mut(&mut self) -> &mut T {
        &mut self.telemetry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEMO_DURATION_MS, RESET_ANIMATION_MS};
    use crate::traits::{FinalStats, RunEnd};

    #[derive(Default)]
    struct Recorder {
        reports: std::vec::Vec<FinalStats>,
    }

    impl TelemetrySink for Recorder {
        fn final_stats(&mut self, stats: FinalStats) {
            self.reports.push(stats);
        }
    }

    type TestMatrix = LifeMatrix<Recorder, NoYield>;

    fn matrix() -> TestMatrix {
        LifeMatrix::new(MatrixConfig::default(), Recorder::default(), NoYield).unwrap()
    }

    /// Matrix showing only the automaton, past the demo
    fn running_matrix() -> TestMatrix {
        let mut matrix = matrix();
        matrix.register_screen(ScreenId::AUTOMATON, true, 0).unwrap();
        matrix.tick(0);
        matrix.tick(DEMO_DURATION_MS);
        assert_eq!(matrix.phase(), Phase::Running);
        matrix
    }

    /// Replace the seeded world with a block (stable at once: below the floor)
    fn make_block(matrix: &mut TestMatrix, now_ms: u32) {
        matrix.initialize(Pattern::Glider, now_ms);
        let automaton = &mut matrix.automaton;
        automaton.initialize_cells(&[(3, 3), (4, 3), (3, 4), (4, 4)], now_ms);
    }

    #[test]
    fn test_first_tick_boots() {
        let mut matrix = matrix();
        assert_eq!(matrix.phase(), Phase::Uninitialized);
        assert!(matrix.tick(0).is_none());
        assert_eq!(matrix.phase(), Phase::Demo);
        assert!(matrix.in_demo());
    }

    #[test]
    fn test_demo_then_running() {
        let mut matrix = running_matrix();
        assert_eq!(matrix.generation(), 0);
        assert!(matrix.population() > 0);

        assert!(matrix.tick(DEMO_DURATION_MS + 100).is_none());
        let report = matrix.tick(DEMO_DURATION_MS + 200).unwrap();
        assert_eq!(report.generation, 1);
        assert_eq!(matrix.generation(), 1);
    }

    #[test]
    fn test_no_stepping_while_hidden() {
        let mut matrix = running_matrix();
        matrix.register_screen(ScreenId::YEAR, true, 5_000).unwrap();
        matrix.next_screen(5_000);
        assert_eq!(matrix.current_screen_id(), Some(ScreenId::YEAR));

        for t in (5_000..14_000).step_by(100) {
            assert!(matrix.tick(t).is_none());
        }
        assert_eq!(matrix.generation(), 0);
    }

    #[test]
    fn test_no_stepping_while_paused() {
        let mut matrix = running_matrix();
        matrix.toggle_pause(5_000);
        assert!(matrix.tick(6_000).is_none());
        assert!(matrix.is_paused());
        matrix.toggle_pause(6_000);
        assert!(matrix.tick(6_200).is_some());
    }

    #[test]
    fn test_stable_edge_then_auto_reset() {
        let mut matrix = running_matrix();
        make_block(&mut matrix, 5_000);

        let report = matrix.tick(5_200).unwrap();
        assert!(report.verdict.is_edge());
        assert_eq!(matrix.phase(), Phase::Stable);
        assert!(matrix.is_stable());
        assert_eq!(matrix.countdown_remaining(5_200), Some(60_000));
        assert_eq!(matrix.telemetry().reports.len(), 1);
        assert_eq!(matrix.telemetry().reports[0].cause, RunEnd::Stable);

        // Still stepping, no repeated telemetry
        for t in (5_400..65_200).step_by(200) {
            matrix.tick(t);
        }
        assert_eq!(matrix.phase(), Phase::Stable);
        assert_eq!(matrix.telemetry().reports.len(), 1);

        matrix.tick(65_200);
        assert_eq!(matrix.phase(), Phase::ResetAnimation);
        assert!(!matrix.is_stable());

        matrix.tick(65_200 + RESET_ANIMATION_MS);
        assert_eq!(matrix.phase(), Phase::Demo);
    }

    #[test]
    fn test_extinction_resets_without_timeout() {
        let mut matrix = running_matrix();
        matrix.initialize(Pattern::Glider, 5_000);
        matrix.automaton.initialize_cells(&[(1, 1)], 5_000);

        matrix.tick(5_200);
        assert_eq!(matrix.phase(), Phase::ResetAnimation);
        assert_eq!(matrix.population(), 0);
        assert_eq!(matrix.telemetry().reports.len(), 1);
        assert_eq!(matrix.telemetry().reports[0].cause, RunEnd::Extinct);
    }

    #[test]
    fn test_hidden_countdown_integrity() {
        let mut matrix = running_matrix();
        matrix.register_screen(ScreenId::YEAR, true, 5_000).unwrap();
        matrix.set_mode(UiMode::ManualBrowse, 5_000);
        make_block(&mut matrix, 5_000);
        matrix.tick(5_200);
        assert_eq!(matrix.phase(), Phase::Stable);

        // 10 s into the countdown, look at another screen for 5 s
        matrix.next_screen(15_200);
        assert!(!matrix.is_automaton_visible());
        matrix.tick(17_000);
        matrix.prev_screen(20_200);
        assert!(matrix.is_automaton_visible());

        assert_eq!(matrix.countdown_remaining(20_200), Some(50_000));
        matrix.tick(70_199);
        assert_eq!(matrix.phase(), Phase::Stable);
        matrix.tick(70_200);
        assert_eq!(matrix.phase(), Phase::ResetAnimation);
    }

    #[test]
    fn test_demo_holds_auto_cycle() {
        let mut matrix = matrix();
        matrix.register_screen(ScreenId::AUTOMATON, true, 0).unwrap();
        matrix.register_screen(ScreenId::YEAR, true, 0).unwrap();
        matrix.tick(0);

        // Dwell is 3 s but the demo lasts 5 s
        matrix.tick(3_000);
        assert_eq!(matrix.current_screen_id(), Some(ScreenId::AUTOMATON));

        // Demo ends: the running world gets a full dwell period
        matrix.tick(5_000);
        assert_eq!(matrix.phase(), Phase::Running);
        assert_eq!(matrix.current_screen_id(), Some(ScreenId::AUTOMATON));
        matrix.tick(7_900);
        assert_eq!(matrix.current_screen_id(), Some(ScreenId::AUTOMATON));
        matrix.tick(8_000);
        assert_eq!(matrix.current_screen_id(), Some(ScreenId::YEAR));
    }

    #[test]
    fn test_set_demo_mode() {
        let mut matrix = matrix();
        matrix.register_screen(ScreenId::AUTOMATON, true, 0).unwrap();
        matrix.tick(0);

        matrix.set_demo_mode(false, 1_000);
        assert_eq!(matrix.phase(), Phase::Running);
        assert!(matrix.population() > 0);

        matrix.set_demo_mode(true, 2_000);
        assert_eq!(matrix.phase(), Phase::Demo);
        matrix.tick(6_999);
        assert_eq!(matrix.phase(), Phase::Demo);
        matrix.tick(7_000);
        assert_eq!(matrix.phase(), Phase::Running);
    }

    #[test]
    fn test_reset_replays_demo() {
        let mut matrix = running_matrix();
        matrix.tick(5_200);
        matrix.reset(6_000);
        assert!(matrix.in_reset_animation());
        assert!(matrix.tick(6_200).is_none());
        matrix.tick(7_000);
        assert_eq!(matrix.phase(), Phase::Demo);
        matrix.tick(12_000);
        assert_eq!(matrix.phase(), Phase::Running);
        assert_eq!(matrix.generation(), 0);
    }

    #[test]
    fn test_rejected_settings_keep_previous() {
        let mut matrix = matrix();
        assert_eq!(matrix.set_update_interval(0), Err(ConfigError::OutOfRange));
        assert_eq!(matrix.config().game.update_interval_ms, 200);

        assert_eq!(
            matrix.set_cycle_time_str("soon"),
            Err(ConfigError::Malformed)
        );
        assert_eq!(matrix.config().ui.cycle_time_ms, 3_000);

        assert_eq!(
            matrix.set_stability_timeout_str("10ms"),
            Err(ConfigError::OutOfRange)
        );
        assert!(matrix.set_stability_timeout_str("2min").is_ok());
        assert_eq!(matrix.config().stability.stability_timeout_ms, 120_000);

        assert_eq!(
            matrix.set_low_population_floor(5_000),
            Err(ConfigError::OutOfRange)
        );
        assert_eq!(matrix.config().stability.low_population_floor, 58);

        assert_eq!(
            matrix.set_speed_option("Ludicrous"),
            Err(ConfigError::UnknownOption)
        );
        assert!(matrix.set_speed_option("Slow (1000ms)").is_ok());
        assert_eq!(matrix.automaton().update_interval_ms(), 1_000);
    }

    #[test]
    fn test_grid_locked_after_first_world() {
        let mut matrix: LifeMatrix<NullTelemetry, NoYield, 4096> =
            LifeMatrix::headless(MatrixConfig::default()).unwrap();
        assert!(matrix.reconfigure_grid(GridConfig::new(64, 64).unwrap()).is_ok());
        assert_eq!(matrix.config().grid.width, 64);

        matrix.register_screen(ScreenId::AUTOMATON, true, 0).unwrap();
        matrix.tick(0);
        matrix.tick(DEMO_DURATION_MS);
        assert_eq!(
            matrix.reconfigure_grid(GridConfig::default()),
            Err(ConfigError::Locked)
        );
    }

    #[test]
    fn test_settings_via_buttons() {
        let mut matrix = running_matrix();
        matrix.handle_event(InputEvent::Hold, 5_000);
        assert_eq!(matrix.ui_mode(), UiMode::Settings);
        assert_eq!(
            matrix.selected_setting().map(|(s, v)| (s, v.as_str() == "3s")),
            Some((Setting::CycleTime, true))
        );

        matrix.handle_event(InputEvent::Next, 5_100);
        assert_eq!(matrix.config().ui.cycle_time_ms, 4_000);

        matrix.handle_event(InputEvent::Select, 5_200);
        matrix.handle_event(InputEvent::Next, 5_300);
        assert_eq!(matrix.automaton().update_interval_ms(), 1_000);

        matrix.handle_event(InputEvent::Select, 5_400);
        matrix.handle_event(InputEvent::Previous, 5_500);
        assert!(!matrix.config().game.complex_patterns);

        matrix.handle_event_byte(0x11, 5_600);
        assert_eq!(matrix.ui_mode(), UiMode::ManualBrowse);
        matrix.handle_event_byte(0xEE, 5_700);
        assert_eq!(matrix.ui_mode(), UiMode::ManualBrowse);
    }

    #[test]
    fn test_speed_presets_reach_engine() {
        let mut matrix = running_matrix();
        matrix.handle_event(InputEvent::Hold, 5_000);
        matrix.handle_event(InputEvent::Select, 5_010);
        assert_eq!(matrix.selected_setting().map(|(s, _)| s), Some(Setting::Speed));

        for (i, expected) in [1_000, 50, 200, 1_000].into_iter().enumerate() {
            matrix.handle_event(InputEvent::Next, 5_100 + i as u32 * 100);
            assert_eq!(matrix.config().game.update_interval_ms, expected);
            assert_eq!(matrix.automaton().update_interval_ms(), expected);
        }

        matrix.handle_event(InputEvent::Previous, 6_000);
        assert_eq!(matrix.config().game.update_interval_ms, 200);
        assert_eq!(matrix.automaton().update_interval_ms(), 200);
    }

    #[test]
    fn test_selected_screen_not_cycled_away() {
        let mut matrix = matrix();
        matrix.register_screen(ScreenId::YEAR, true, 0).unwrap();
        matrix.register_screen(ScreenId::MONTH, true, 0).unwrap();
        matrix.register_screen(ScreenId::DAY, true, 0).unwrap();
        matrix.tick(0);

        matrix.set_current_screen(2, 2_900);
        matrix.tick(3_000);
        assert_eq!(matrix.ui_mode(), UiMode::AutoCycle);
        assert_eq!(matrix.current_screen_id(), Some(ScreenId::DAY));
        matrix.tick(5_899);
        assert_eq!(matrix.current_screen_id(), Some(ScreenId::DAY));
        matrix.tick(5_900);
        assert_eq!(matrix.current_screen_id(), Some(ScreenId::YEAR));
    }

    #[test]
    fn test_pause_from_button_freezes_countdown() {
        let mut matrix = running_matrix();
        make_block(&mut matrix, 5_000);
        matrix.tick(5_200);
        assert_eq!(matrix.phase(), Phase::Stable);

        matrix.handle_event(InputEvent::Select, 10_200);
        assert_eq!(matrix.indicator(), Indicator::Paused);
        matrix.tick(200_000);
        assert_eq!(matrix.phase(), Phase::Stable);
        assert_eq!(matrix.countdown_remaining(200_000), Some(55_000));
    }

    #[test]
    fn test_a_b_screens() {
        let mut matrix = matrix();
        let (a, b) = (ScreenId::YEAR, ScreenId::MONTH);
        matrix.register_screen(a, true, 0).unwrap();
        matrix.register_screen(b, false, 0).unwrap();
        matrix.next_screen(0);
        assert_eq!(matrix.current_screen_id(), Some(a));

        matrix.register_screen(b, true, 0).unwrap();
        matrix.next_screen(0);
        assert_eq!(matrix.current_screen_id(), Some(b));

        matrix.set_current_screen(0, 0);
        matrix.register_screen(a, false, 0).unwrap();
        assert_eq!(matrix.current_screen_id(), Some(b));
    }
}
