//! Collaborator traits
//!
//! These traits define the interface between the automaton core and the
//! host environment (telemetry publishing, event-loop yielding).

pub mod cooperative;
pub mod telemetry;

pub use cooperative::{CooperativeYield, FnYield, NoYield};
pub use telemetry::{FinalStats, NullTelemetry, RunEnd, TelemetrySink};
