//! Stability detector
//!
//! Runs after every generation. Rules, in priority order:
//!
//! 1. Population zero: extinct.
//! 2. Auto-reset enabled and population below the floor: stable.
//! 3. History full and flat: stable.
//! 4. Otherwise evolving (stable flag cleared).

use super::history::PopulationHistory;
use crate::config::{StabilityConfig, HISTORY_WINDOW};

/// Why a world counts as stable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StableReason {
    /// Too few cells left to stay interesting
    LowPopulation,
    /// Population unchanged over the whole window
    FlatHistory,
}

/// Classification of one generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Verdict {
    /// Still changing
    Evolving,
    /// Settled; `edge` is true only on the generation that became stable
    Stable { edge: bool, reason: StableReason },
    /// Nothing alive; `edge` is true only on the first empty generation
    Extinct { edge: bool },
}

impl Verdict {
    /// True on the generation where the world first turned stable or died
    pub fn is_edge(&self) -> bool {
        matches!(
            self,
            Verdict::Stable { edge: true, .. } | Verdict::Extinct { edge: true }
        )
    }
}

/// Tracks population history and the stable flag
#[derive(Debug, Clone)]
pub struct StabilityDetector<const LEN: usize = HISTORY_WINDOW> {
    history: PopulationHistory<LEN>,
    stable: bool,
    extinct: bool,
    stable_since_ms: Option<u32>,
}

impl<const LEN: usize> Default for StabilityDetector<LEN> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const LEN: usize> StabilityDetector<LEN> {
    /// Create a detector with empty history
    pub const fn new() -> Self {
        Self {
            history: PopulationHistory::new(),
            stable: false,
            extinct: false,
            stable_since_ms: None,
        }
    }

    /// Record a generation's population and classify it
    pub fn observe(&mut self, population: u32, now_ms: u32, policy: &StabilityConfig) -> Verdict {
        self.history.push(population);

        if population == 0 {
            let edge = !self.extinct;
            self.extinct = true;
            self.stable = false;
            self.stable_since_ms = None;
            return Verdict::Extinct { edge };
        }
        self.extinct = false;

        let reason = if policy.auto_reset_on_stable && population < policy.low_population_floor {
            Some(StableReason::LowPopulation)
        } else if self.history.is_flat() {
            Some(StableReason::FlatHistory)
        } else {
            None
        };

        match reason {
            Some(reason) => {
                let edge = !self.stable;
                if edge {
                    self.stable = true;
                    self.stable_since_ms = Some(now_ms);
                }
                Verdict::Stable { edge, reason }
            }
            None => {
                self.stable = false;
                self.stable_since_ms = None;
                Verdict::Evolving
            }
        }
    }

    /// Whether the world is currently stable
    pub fn is_stable(&self) -> bool {
        self.stable
    }

    /// Timestamp of the stable edge, while stable
    pub fn stable_since_ms(&self) -> Option<u32> {
        self.stable_since_ms
    }

    /// Population samples
    pub fn history(&self) -> &PopulationHistory<LEN> {
        &self.history
    }

    /// Forget history and flags (new world)
    pub fn reset(&mut self) {
        self.history.clear();
        self.stable = false;
        self.extinct = false;
        self.stable_since_ms = None;
    }
}
