//! Configuration types
//!
//! Board-agnostic configuration structures. Values arrive from the host
//! (YAML, a settings menu, a home-automation bridge) and are validated here
//! before the core ever sees them.

pub mod options;
pub mod types;

pub use options::*;
pub use types::*;
