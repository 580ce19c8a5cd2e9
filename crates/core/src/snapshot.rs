use crate::piece::Piece;
use crate::session::SessionState;
use crate::types::{Position, RotationAngle, ShapeKind, GRID_COLS, GRID_ROWS, NEXT_QUEUE_LEN};

/// Shape-tagged occupancy, `[row][col]`
pub type ShapeGrid = [[Option<ShapeKind>; GRID_COLS as usize]; GRID_ROWS as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub shape: ShapeKind,
    pub rotation: RotationAngle,
    pub cells: [Position; 4],
}

impl From<&Piece> for ActiveSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            shape: value.shape(),
            rotation: value.rotation(),
            cells: *value.positions(),
        }
    }
}

impl ActiveSnapshot {
    pub fn color(&self) -> u32 {
        self.shape.color()
    }
}

/// Plain-data view of a session for renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub field: ShapeGrid,
    pub active: Option<ActiveSnapshot>,
    pub next: [ShapeKind; NEXT_QUEUE_LEN],
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub state: SessionState,
    pub fast_drop: bool,
}

impl GameSnapshot {
    /// Whether inputs currently affect the game.
    pub fn playable(&self) -> bool {
        self.state == SessionState::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            field: [[None; GRID_COLS as usize]; GRID_ROWS as usize],
            active: None,
            next: [ShapeKind::I; NEXT_QUEUE_LEN],
            score: 0,
            level: 1,
            lines: 0,
            state: SessionState::NotStarted,
            fast_drop: false,
        }
    }
}
