//! Lifegrid input protocol
//!
//! Defines the button events that an input board (GPIO buttons, a rotary
//! encoder, or a home-automation bridge) delivers to the Lifegrid core.
//!
//! # Wire format
//!
//! Each event is a single byte:
//! ```text
//! ┌──────┬──────────────────────────────┐
//! │ 0x01 │ Next (right / clockwise)     │
//! │ 0x02 │ Previous (left / ccw)        │
//! │ 0x10 │ Select (short press)         │
//! │ 0x11 │ Hold (long press)            │
//! └──────┴──────────────────────────────┘
//! ```
//!
//! The input board is a dumb source. Everything mode dependent (what a
//! press means in settings versus browsing) is decided by the core.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod events;

pub use events::InputEvent;
