//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the simulation core, the input harness and the terminal renderer alike.
//!
//! # Field Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn pivot**: (`GRID_COLS / 2 - 1`, 0) = (4, 0)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame driver interval (~60 FPS) |
//! | `INITIAL_DROP_MS` | 1000 | Fall interval at level 1 |
//! | `FAST_DROP_MS` | 300 | Fall interval while fast drop is held |
//! | `MIN_DROP_MS` | 50 | Floor for the level-derived fall interval |
//! | `ROTATE_COOLDOWN_MS` | 150 | Minimum time between two rotations |
//! | `MOVE_REPEAT_MS` | 200 | Horizontal auto-repeat delay (input harness) |
//!
//! # Examples
//!
//! ```
//! use tetramino_types::{ShapeKind, RotationAngle, GameAction, GRID_COLS, GRID_ROWS};
//!
//! assert_eq!(ShapeKind::ALL.len(), 7);
//! assert_eq!(ShapeKind::T.color(), 0x9b59b6);
//!
//! assert_eq!(RotationAngle::Deg0.next(), RotationAngle::Deg90);
//! assert_ne!(GameAction::FastDropOn, GameAction::FastDropOff);
//!
//! assert_eq!(GRID_COLS, 10);
//! assert_eq!(GRID_ROWS, 20);
//! ```

/// Field width in cells (10 columns)
pub const GRID_COLS: u8 = 10;

/// Field height in cells (20 rows)
pub const GRID_ROWS: u8 = 20;

/// Frame driver interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Fall interval at the start of a game (1 row per second)
pub const INITIAL_DROP_MS: u32 = 1000;

/// Fall interval while the fast-drop input is held
pub const FAST_DROP_MS: u32 = 300;

/// Each level up multiplies the base fall interval by this factor
pub const LEVEL_SPEED_MULTIPLIER: f32 = 0.75;

/// The level-derived fall interval never goes below this
pub const MIN_DROP_MS: u32 = 50;

/// Rotation is rejected for this long after a successful rotation
pub const ROTATE_COOLDOWN_MS: u32 = 150;

/// Horizontal auto-repeat delay used by the input harness
pub const MOVE_REPEAT_MS: u32 = 200;

/// Cleared lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Number of upcoming shapes kept in the preview queue
pub const NEXT_QUEUE_LEN: usize = 3;

/// Line clear scoring table
///
/// Base points for clearing N lines at once, multiplied by the current level:
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Index 0 is unused; a zero-line clear is not a scoring event.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// The seven canonical shapes
///
/// Declaration order matches the shape catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    T,
    L,
    J,
    O,
    I,
    S,
    Z,
}

impl ShapeKind {
    /// Every shape, in catalog order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::O,
        ShapeKind::I,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Display colour as 0xRRGGBB.
    pub fn color(&self) -> u32 {
        match self {
            ShapeKind::T => 0x9b59b6,
            ShapeKind::L => 0xf39c12,
            ShapeKind::J => 0x3498db,
            ShapeKind::O => 0xf1c40f,
            ShapeKind::I => 0x1abc9c,
            ShapeKind::S => 0x2ecc71,
            ShapeKind::Z => 0xe74c3c,
        }
    }
}

/// Rotation angle of the active piece
///
/// Rotation only ever advances clockwise by 90°:
/// Deg0 → Deg90 → Deg180 → Deg270 → Deg0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RotationAngle {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl RotationAngle {
    /// Advance by 90° (mod 360)
    ///
    /// ```
    /// use tetramino_types::RotationAngle;
    ///
    /// assert_eq!(RotationAngle::Deg270.next(), RotationAngle::Deg0);
    /// ```
    pub fn next(&self) -> Self {
        match self {
            RotationAngle::Deg0 => RotationAngle::Deg90,
            RotationAngle::Deg90 => RotationAngle::Deg180,
            RotationAngle::Deg180 => RotationAngle::Deg270,
            RotationAngle::Deg270 => RotationAngle::Deg0,
        }
    }
}

/// A cell coordinate on the field
///
/// `x` grows to the right, `y` grows downward. Coordinates are signed so that
/// candidate positions just outside the field can be represented and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether the position lies inside [0, cols) × [0, rows).
    pub fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < GRID_COLS as i8 && self.y >= 0 && self.y < GRID_ROWS as i8
    }
}

/// Discrete inputs the harness delivers to the game session
///
/// Fast drop is a held input, so it is split into press and release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise (subject to wall kicks and cooldown)
    Rotate,
    /// Fast drop held
    FastDropOn,
    /// Fast drop released
    FastDropOff,
    /// Toggle pause state
    Pause,
    /// Start a game from the title screen
    Start,
    /// Restart after game over
    Restart,
}

/// Fire-and-forget notifications emitted by the session
///
/// Consumers (audio, effects) must not feed anything back into the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The active piece moved one cell horizontally
    PieceMoved,
    /// The active piece rotated (possibly with a kick)
    PieceRotated,
    /// A piece was transferred into the field
    PieceLocked,
    /// One line-clear event of 1..=4 rows
    LinesCleared(u8),
    /// The level increased to the given value
    LevelUp(u32),
    /// The next piece could not spawn
    GameOver,
}
