//! Terminal input harness.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and owns the
//! held-key timing the core leaves to its caller: horizontal auto-repeat and
//! the fast-drop press/release pair.

pub mod handler;
pub mod map;

pub use tetramino_core as core;
pub use tetramino_types as types;

pub use handler::{HorizontalDirection, InputHandler};
pub use map::{handle_key_event, key_action, should_quit};
