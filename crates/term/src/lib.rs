//! Terminal rendering collaborator.
//!
//! Reads plain [`GameSnapshot`](crate::core::GameSnapshot) data and never
//! touches core state. Rendering goes into a framebuffer first, which is then
//! flushed to the terminal as a diff.
//!
//! - [`GameView`] is pure and unit-testable
//! - [`TerminalRenderer`] owns the terminal and all I/O
//! - Field cells are 2 columns wide to keep blocks roughly square

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetramino_core as core;
pub use tetramino_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, RecordsView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
