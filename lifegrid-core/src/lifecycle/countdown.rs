//! Freezable countdown
//!
//! Measures elapsed time against a monotonic millisecond clock. While
//! frozen the elapsed value is held; resuming rebases the start so frozen
//! time never counts.

/// Elapsed-time tracker that can be frozen and resumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Countdown {
    started_ms: u32,
    frozen_elapsed_ms: Option<u32>,
}

impl Countdown {
    /// Start counting at `now_ms`
    pub fn start(now_ms: u32) -> Self {
        Self {
            started_ms: now_ms,
            frozen_elapsed_ms: None,
        }
    }

    /// Time counted so far
    pub fn elapsed(&self, now_ms: u32) -> u32 {
        self.frozen_elapsed_ms
            .unwrap_or_else(|| now_ms.wrapping_sub(self.started_ms))
    }

    /// Time left of `duration_ms`, zero once expired
    pub fn remaining(&self, now_ms: u32, duration_ms: u32) -> u32 {
        duration_ms.saturating_sub(self.elapsed(now_ms))
    }

    /// Check whether `duration_ms` has been counted
    pub fn is_expired(&self, now_ms: u32, duration_ms: u32) -> bool {
        self.elapsed(now_ms) >= duration_ms
    }

    /// Stop counting, keeping the elapsed value
    pub fn freeze(&mut self, now_ms: u32) {
        if self.frozen_elapsed_ms.is_none() {
            self.frozen_elapsed_ms = Some(now_ms.wrapping_sub(self.started_ms));
        }
    }

    /// Continue counting from the frozen value
    pub fn resume(&mut self, now_ms: u32) {
        if let Some(elapsed) = self.frozen_elapsed_ms.take() {
            self.started_ms = now_ms.wrapping_sub(elapsed);
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen_elapsed_ms.is_some()
    }
}
