//! Toroidal cell grid
//!
//! Fixed-capacity storage for per-cell ages plus the seed pattern catalogue.

pub mod pattern;
pub mod store;

pub use pattern::{Pattern, Shape, MIXED_LAYOUT};
pub use store::Grid;
