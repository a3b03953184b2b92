//! Automaton lifecycle
//!
//! Sequences demo, simulation, stable countdown and reset animation. The
//! state machine is explicit, finite and deterministic; timers and
//! visibility live in [`Lifecycle`].

pub mod controller;
pub mod countdown;
pub mod events;
pub mod machine;

pub use controller::Lifecycle;
pub use countdown::Countdown;
pub use events::Event;
pub use machine::Phase;
