//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Input events (key names to actions, held vs just-pressed)
//! - Storage locations (see [`crate::persistence`])

pub mod input;

pub use input::{Action, InputSource, KeyState, poll};
