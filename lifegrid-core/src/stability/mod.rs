//! Stability detection
//!
//! Decides from the population history whether a world is still evolving,
//! has settled, or has died out.

pub mod detector;
pub mod history;

pub use detector::{StabilityDetector, StableReason, Verdict};
pub use history::PopulationHistory;
