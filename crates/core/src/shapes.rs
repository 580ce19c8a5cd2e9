//! Shape catalog - starting offsets for the seven shapes
//!
//! Offsets are relative to the piece pivot in field coordinates (y grows downward).
//! Every piece spawns with the pivot at [`SPAWN_PIVOT`].

use crate::types::{ShapeKind, GRID_COLS};

/// Offset of a single block relative to the pivot
pub type Offset = (i8, i8);

/// The four offsets that define a shape's orientation
pub type ShapeOffsets = [Offset; 4];

/// Pivot cell for freshly spawned pieces: (⌊cols/2⌋ − 1, 0)
pub const SPAWN_PIVOT: (i8, i8) = ((GRID_COLS / 2) as i8 - 1, 0);

/// Canonical (unrotated) offsets for a shape
pub fn spawn_offsets(shape: ShapeKind) -> ShapeOffsets {
    match shape {
        ShapeKind::T => [(-1, 0), (0, 0), (1, 0), (0, 1)],
        ShapeKind::L => [(-1, 0), (0, 0), (1, 0), (1, 1)],
        ShapeKind::J => [(-1, 0), (0, 0), (1, 0), (-1, 1)],
        ShapeKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        ShapeKind::I => [(-1, 0), (0, 0), (1, 0), (2, 0)],
        ShapeKind::S => [(-1, 1), (0, 1), (0, 0), (1, 0)],
        ShapeKind::Z => [(-1, 0), (0, 0), (0, 1), (1, 1)],
    }
}

/// Rotate offsets 90° clockwise: (x, y) → (y, −x)
pub fn rotate_offsets(offsets: &ShapeOffsets) -> ShapeOffsets {
    let mut out = *offsets;
    for (dst, &(x, y)) in out.iter_mut().zip(offsets.iter()) {
        *dst = (y, -x);
    }
    out
}
