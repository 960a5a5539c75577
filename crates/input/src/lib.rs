//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]. Held keys rely
//! on the terminal's own auto-repeat, which arrives as repeated presses.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
