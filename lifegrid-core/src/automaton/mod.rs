//! Game of Life engine
//!
//! Conway's B3/S23 rule extended with a per-cell age channel, double
//! buffered over a toroidal grid.

pub mod engine;
pub mod rule;

pub use engine::{Automaton, StepReport};
pub use rule::evolve_cell;
