//! Board-agnostic core logic for Lifegrid pixel-matrix displays
//!
//! This crate contains all application logic that does not depend on
//! specific display hardware:
//!
//! - Toroidal age grid with double buffering
//! - Game of Life engine with pattern seeding
//! - Stability and extinction detection
//! - Automaton lifecycle state machine (demo, running, stable, reset)
//! - Screen/UI state machine (auto-cycle, manual browse, settings)
//! - Configuration type definitions
//!
//! [`LifeMatrix`] ties the pieces together behind a single millisecond tick.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod automaton;
pub mod config;
pub mod grid;
pub mod lifecycle;
pub mod matrix;
pub mod stability;
pub mod traits;
pub mod ui;

pub use matrix::LifeMatrix;
