//! Platform abstraction layer
//!
//! Turns raw host input (DOM key codes, clicks) into calls on the game cores.

pub mod input;

pub use input::{KeyAction, dispatch_key, dispatch_key_event, key_action, key_event_pressed};
pub use crate::sim::Direction;
