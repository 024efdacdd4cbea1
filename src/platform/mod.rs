//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Input events (key codes to per-frame intents)

pub mod input;

pub use input::{InputState, Key};
