//! Automaton engine
//!
//! Owns the front/back grids, the RNG used for random fills, generation
//! bookkeeping and the stability detector. The engine itself knows nothing
//! about demos, resets or screens; see [`crate::lifecycle`] for that.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::rule::evolve_cell;
use crate::config::{
    ConfigError, GameConfig, GridConfig, StabilityConfig, GRID_CELLS, MAX_UPDATE_INTERVAL_MS,
    MIN_UPDATE_INTERVAL_MS, MIXED_NOISE_PERCENT, RANDOM_DENSITY_PERCENT, YIELD_EVERY_ROWS,
};
use crate::grid::{Grid, Pattern, MIXED_LAYOUT};
use crate::stability::{StabilityDetector, Verdict};
use crate::traits::{CooperativeYield, FinalStats, RunEnd, TelemetrySink};

/// Outcome of one generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepReport {
    /// Generation number after the step
    pub generation: u32,
    /// Live cells after the step
    pub population: u32,
    /// Cells born during the step
    pub births: u32,
    /// Cells that died during the step
    pub deaths: u32,
    /// Oldest cell after the step
    pub max_age: u8,
    /// Stability classification of the new generation
    pub verdict: Verdict,
}

/// Game of Life engine
#[derive(Debug, Clone)]
pub struct Automaton<const N: usize = GRID_CELLS> {
    /// Front and back grids; `front` selects the live one
    buffers: [Grid<N>; 2],
    front: usize,
    rng: ChaCha8Rng,
    initialized: bool,
    generation: u32,
    population: u32,
    last_births: u32,
    last_deaths: u32,
    max_age: u8,
    last_step_ms: u32,
    update_interval_ms: u32,
    stability: StabilityConfig,
    detector: StabilityDetector,
}

impl<const N: usize> Automaton<N> {
    /// Create an engine with an all-dead, uninitialized grid
    pub fn new(
        grid: GridConfig,
        game: &GameConfig,
        stability: StabilityConfig,
    ) -> Result<Self, ConfigError> {
        let front = Grid::new(grid)?;
        let back = front.clone();
        let mut update_interval_ms = game.update_interval_ms;
        if !(MIN_UPDATE_INTERVAL_MS..=MAX_UPDATE_INTERVAL_MS).contains(&update_interval_ms) {
            warn!("update interval {} ms out of range, using default", update_interval_ms);
            update_interval_ms = GameConfig::default().update_interval_ms;
        }

        Ok(Self {
            buffers: [front, back],
            front: 0,
            rng: ChaCha8Rng::seed_from_u64(game.seed),
            initialized: false,
            generation: 0,
            population: 0,
            last_births: 0,
            last_deaths: 0,
            max_age: 0,
            last_step_ms: 0,
            update_interval_ms,
            stability,
            detector: StabilityDetector::new(),
        })
    }

    /// Change grid dimensions
    ///
    /// Only allowed before the first seeding; afterwards returns `Locked`.
    pub fn reconfigure(&mut self, grid: GridConfig) -> Result<(), ConfigError> {
        if self.initialized {
            return Err(ConfigError::Locked);
        }
        let front = Grid::new(grid)?;
        self.buffers = [front.clone(), front];
        self.front = 0;
        info!("grid reconfigured to {}x{}", grid.width, grid.height);
        Ok(())
    }

    /// Restart the RNG from `seed`
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Clear the grid and seed it with `pattern`
    pub fn initialize(&mut self, pattern: Pattern, now_ms: u32) {
        self.front_mut().clear();

        match pattern {
            Pattern::Random => self.fill_random(RANDOM_DENSITY_PERCENT),
            Pattern::Mixed => {
                for (shape, x, y) in MIXED_LAYOUT {
                    shape.stamp(self.front_mut(), x, y);
                }
                self.fill_random(MIXED_NOISE_PERCENT);
            }
            single => {
                let x = self.grid().width() as i32 / 2 - 3;
                let y = self.grid().height() as i32 / 2 - 3;
                single.stamp(self.front_mut(), x, y);
            }
        }

        self.finish_seeding(now_ms);
        info!(
            "seeded {} on {}x{}, population {}",
            pattern,
            self.grid().width(),
            self.grid().height(),
            self.population
        );
    }

    /// Seed by numeric pattern id; unknown ids leave the world untouched
    pub fn initialize_by_id(&mut self, id: u8, now_ms: u32) -> bool {
        match Pattern::from_id(id) {
            Some(pattern) => {
                self.initialize(pattern, now_ms);
                true
            }
            None => {
                debug!("ignoring unknown pattern id {}", id);
                false
            }
        }
    }

    /// Clear the grid and seed exactly the given cells
    pub fn initialize_cells(&mut self, cells: &[(i32, i32)], now_ms: u32) {
        self.front_mut().clear();
        for &(x, y) in cells {
            self.front_mut().set(x, y, 1);
        }
        self.finish_seeding(now_ms);
    }

    fn fill_random(&mut self, percent: u8) {
        let grid = &mut self.buffers[self.front];
        for cell in grid.cells_mut() {
            if self.rng.gen_ratio(percent as u32, 100) {
                *cell = 1;
            }
        }
    }

    fn finish_seeding(&mut self, now_ms: u32) {
        self.generation = 0;
        self.last_births = 0;
        self.last_deaths = 0;
        self.population = self.grid().population();
        self.max_age = self.grid().cells().iter().copied().max().unwrap_or(0);
        self.last_step_ms = now_ms;
        self.detector.reset();
        self.initialized = true;
    }

    /// Advance one generation if the update interval has elapsed
    ///
    /// Returns `None` when the step is not yet due or the world has never
    /// been seeded.
    pub fn step<Y, T>(&mut self, now_ms: u32, yielder: &mut Y, sink: &mut T) -> Option<StepReport>
    where
        Y: CooperativeYield + ?Sized,
        T: TelemetrySink + ?Sized,
    {
        if !self.initialized || now_ms.wrapping_sub(self.last_step_ms) < self.update_interval_ms {
            return None;
        }
        self.last_step_ms = now_ms;
        Some(self.step_now(now_ms, yielder, sink))
    }

    /// Advance one generation unconditionally
    pub fn step_now<Y, T>(&mut self, now_ms: u32, yielder: &mut Y, sink: &mut T) -> StepReport
    where
        Y: CooperativeYield + ?Sized,
        T: TelemetrySink + ?Sized,
    {
        let front = self.front;
        let (left, right) = self.buffers.split_at_mut(1);
        let (src, dst) = if front == 0 {
            (&left[0], &mut right[0])
        } else {
            (&right[0], &mut left[0])
        };

        let width = src.width() as usize;
        let height = src.height() as usize;
        let current = src.cells();
        let next = dst.cells_mut();

        let mut births = 0;
        let mut deaths = 0;
        let mut population = 0;
        let mut max_age = 0;

        for y in 0..height {
            if y > 0 && y % YIELD_EVERY_ROWS == 0 {
                yielder.yield_now();
            }
            for x in 0..width {
                let i = y * width + x;
                let age = current[i];
                let neighbors = src.count_neighbors(x as i32, y as i32);
                let new_age = evolve_cell(age, neighbors);

                match (age > 0, new_age > 0) {
                    (false, true) => births += 1,
                    (true, false) => deaths += 1,
                    _ => {}
                }
                if new_age > 0 {
                    population += 1;
                    max_age = max_age.max(new_age);
                }
                next[i] = new_age;
            }
        }

        self.front ^= 1;
        self.generation = self.generation.saturating_add(1);
        self.population = population;
        self.last_births = births;
        self.last_deaths = deaths;
        self.max_age = max_age;

        let verdict = self.detector.observe(population, now_ms, &self.stability);
        self.report_edge(verdict, sink);

        trace!(
            "gen {} pop {} +{} -{}",
            self.generation,
            population,
            births,
            deaths
        );

        StepReport {
            generation: self.generation,
            population,
            births,
            deaths,
            max_age,
            verdict,
        }
    }

    fn report_edge<T: TelemetrySink + ?Sized>(&self, verdict: Verdict, sink: &mut T) {
        let cause = match verdict {
            Verdict::Stable { edge: true, reason } => {
                info!(
                    "stable at generation {} ({}), population {}",
                    self.generation,
                    reason,
                    self.population
                );
                RunEnd::Stable
            }
            Verdict::Extinct { edge: true } => {
                info!("extinct at generation {}", self.generation);
                RunEnd::Extinct
            }
            _ => return,
        };
        sink.final_stats(FinalStats {
            generation: self.generation,
            population: self.population,
            cause,
        });
    }

    /// Drop the stable flag and population history
    pub fn clear_stability(&mut self) {
        self.detector.reset();
    }

    /// Set the generation interval
    pub fn set_update_interval(&mut self, interval_ms: u32) -> Result<(), ConfigError> {
        if !(MIN_UPDATE_INTERVAL_MS..=MAX_UPDATE_INTERVAL_MS).contains(&interval_ms) {
            return Err(ConfigError::OutOfRange);
        }
        self.update_interval_ms = interval_ms;
        Ok(())
    }

    /// Replace the stability policy
    pub fn set_stability(&mut self, stability: StabilityConfig) {
        self.stability = stability;
    }

    /// Current stability policy
    pub fn stability(&self) -> &StabilityConfig {
        &self.stability
    }

    /// Live grid
    pub fn grid(&self) -> &Grid<N> {
        &self.buffers[self.front]
    }

    fn front_mut(&mut self) -> &mut Grid<N> {
        &mut self.buffers[self.front]
    }

    /// Age of the cell at `(x, y)`, 0 outside the grid
    pub fn get_cell(&self, x: i32, y: i32) -> u8 {
        self.grid().get(x, y)
    }

    /// Write a cell between steps; ignored outside the grid
    pub fn set_cell(&mut self, x: i32, y: i32, age: u8) {
        self.front_mut().set(x, y, age);
        self.population = self.grid().population();
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn population(&self) -> u32 {
        self.population
    }

    pub fn last_births(&self) -> u32 {
        self.last_births
    }

    pub fn last_deaths(&self) -> u32 {
        self.last_deaths
    }

    pub fn max_age(&self) -> u8 {
        self.max_age
    }

    pub fn is_stable(&self) -> bool {
        self.detector.is_stable()
    }

    pub fn stable_since_ms(&self) -> Option<u32> {
        self.detector.stable_since_ms()
    }

    pub fn update_interval_ms(&self) -> u32 {
        self.update_interval_ms
    }

    pub fn last_step_ms(&self) -> u32 {
        self.last_step_ms
    }

    pub fn detector(&self) -> &StabilityDetector {
        &self.detector
    }
}
