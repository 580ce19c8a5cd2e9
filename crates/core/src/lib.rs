//! Simulation core - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game and nothing else.
//! It has **no dependencies** on terminals, audio or storage:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Synchronous**: every operation completes immediately; time only moves
//!   when the frame driver calls [`GameSession::tick`]
//! - **Silent on illegal input**: blocked moves and rotations return `false`
//!
//! # Module Structure
//!
//! - [`field`]: 10x20 occupancy grid, locking and multi-row clearing
//! - [`shapes`]: canonical offsets of the seven shapes
//! - [`piece`]: the active piece with its real-valued pivot and collision queries
//! - [`kicks`]: prioritized wall-kick offsets and the rotation resolver
//! - [`line_clear`]: detect, score and remove full rows as one event
//! - [`scoring`]: score, level and drop speed progression
//! - [`timer`]: pausable countdown timers
//! - [`rng`]: uniform next-piece queue
//! - [`session`]: the game loop controller
//!
//! # Example
//!
//! ```
//! use tetramino_core::{GameConfig, GameSession, SessionState};
//! use tetramino_core::types::GameAction;
//!
//! let mut session = GameSession::new(GameConfig::with_seed(12345));
//! session.start();
//!
//! session.apply_action(GameAction::MoveRight);
//! session.tick(1000);
//!
//! assert_eq!(session.state(), SessionState::Running);
//! assert_eq!(session.score().level(), 1);
//! ```

pub mod config;
pub mod field;
pub mod kicks;
pub mod line_clear;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;
pub mod stats;
pub mod timer;

pub use tetramino_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use field::{Block, Cell, Field, RowList};
pub use kicks::{find_kick, kick_offsets, try_rotate, Kick};
pub use line_clear::LineClear;
pub use piece::{Piece, Pivot};
pub use rng::{NextQueue, SimpleRng};
pub use scoring::Score;
pub use session::{GameSession, SessionState};
pub use snapshot::{ActiveSnapshot, GameSnapshot, ShapeGrid};
pub use stats::GameStats;
pub use timer::Timer;
