//! Tetramino (workspace facade crate).
//!
//! Re-exports the member crates as `tetramino::{types, core, input, term}` and
//! hosts the records persistence used by the terminal binary.

pub mod records;

pub use tetramino_core as core;
pub use tetramino_input as input;
pub use tetramino_term as term;
pub use tetramino_types as types;
