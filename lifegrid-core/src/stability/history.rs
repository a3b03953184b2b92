//! Rolling population history

use crate::config::HISTORY_WINDOW;

/// Fixed-length ring of population samples, one per generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulationHistory<const LEN: usize = HISTORY_WINDOW> {
    samples: [u32; LEN],
    next: usize,
    filled: bool,
}

impl<const LEN: usize> Default for PopulationHistory<LEN> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const LEN: usize> PopulationHistory<LEN> {
    /// Create an empty history
    pub const fn new() -> Self {
        Self {
            samples: [0; LEN],
            next: 0,
            filled: false,
        }
    }

    /// Append a sample, overwriting the oldest once full
    pub fn push(&mut self, population: u32) {
        if LEN == 0 {
            return;
        }
        self.samples[self.next] = population;
        self.next = (self.next + 1) % LEN;
        if self.next == 0 {
            self.filled = true;
        }
    }

    /// True once the ring has wrapped at least once
    pub fn is_filled(&self) -> bool {
        self.filled
    }

    /// Number of valid samples
    pub fn len(&self) -> usize {
        if self.filled {
            LEN
        } else {
            self.next
        }
    }

    /// True when no sample has been recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the ring is full and every sample is the same
    pub fn is_flat(&self) -> bool {
        self.filled && self.samples.iter().all(|&s| s == self.samples[0])
    }

    /// Most recent sample
    pub fn latest(&self) -> Option<u32> {
        if self.is_empty() {
            return None;
        }
        Some(self.samples[(self.next + LEN - 1) % LEN])
    }

    /// Forget every sample
    pub fn clear(&mut self) {
        self.samples = [0; LEN];
        self.next = 0;
        self.filled = false;
    }
}
