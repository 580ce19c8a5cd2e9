//! Piece module - the active falling tetromino
//!
//! A piece keeps a real-valued pivot plus four relative offsets. Block cells are
//! always `round(pivot + offset)`. Movement is unconditional; callers ask the
//! collision queries first.

use crate::field::{Block, Field};
use crate::shapes::{rotate_offsets, spawn_offsets, ShapeOffsets, SPAWN_PIVOT};
use crate::types::{Position, RotationAngle, ShapeKind, GRID_COLS, GRID_ROWS};

/// Rotation anchor in field coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pivot {
    pub x: f32,
    pub y: f32,
}

impl Pivot {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Cell reached by `offset` from this pivot, rounded to the nearest integer cell.
    fn cell(&self, (ox, oy): (i8, i8)) -> Position {
        Position::new(
            (self.x + ox as f32).round() as i8,
            (self.y + oy as f32).round() as i8,
        )
    }
}

/// The active tetromino
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    shape: ShapeKind,
    blocks: [Block; 4],
    positions: [Position; 4],
    pivot: Pivot,
    rotation: RotationAngle,
    offsets: ShapeOffsets,
}

impl Piece {
    /// Whether `shape` fits at the spawn pivot with its canonical offsets.
    pub fn can_spawn(shape: ShapeKind, field: &Field) -> bool {
        let (px, py) = SPAWN_PIVOT;
        spawn_offsets(shape).iter().all(|&(dx, dy)| {
            let pos = Position::new(px + dx, py + dy);
            pos.in_bounds() && !field.is_occupied(pos.x, pos.y)
        })
    }

    /// Spawn a piece at the top of the field.
    ///
    /// Returns `None` when any target cell is out of bounds or occupied, which is
    /// the game-over signal. Block handles get ids `first_block_id..first_block_id + 4`.
    pub fn spawn(shape: ShapeKind, field: &Field, first_block_id: u32) -> Option<Self> {
        if !Self::can_spawn(shape, field) {
            return None;
        }

        let offsets = spawn_offsets(shape);
        let pivot = Pivot::new(SPAWN_PIVOT.0 as f32, SPAWN_PIVOT.1 as f32);
        let mut blocks = [Block::new(first_block_id, shape); 4];
        for (i, block) in blocks.iter_mut().enumerate() {
            *block = Block::new(first_block_id.wrapping_add(i as u32), shape);
        }

        Some(Self {
            shape,
            blocks,
            positions: offsets.map(|offset| pivot.cell(offset)),
            pivot,
            rotation: RotationAngle::Deg0,
            offsets,
        })
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn color(&self) -> u32 {
        self.shape.color()
    }

    /// Current cells of the four blocks
    pub fn positions(&self) -> &[Position; 4] {
        &self.positions
    }

    pub fn pivot(&self) -> Pivot {
        self.pivot
    }

    pub fn rotation(&self) -> RotationAngle {
        self.rotation
    }

    /// Offsets of the current orientation
    pub fn offsets(&self) -> &ShapeOffsets {
        &self.offsets
    }

    fn shift(&mut self, dx: i8, dy: i8) {
        for pos in &mut self.positions {
            *pos = pos.offset(dx, dy);
        }
        self.pivot.x += dx as f32;
        self.pivot.y += dy as f32;
    }

    pub fn move_down(&mut self) {
        self.shift(0, 1);
    }

    pub fn move_left(&mut self) {
        self.shift(-1, 0);
    }

    pub fn move_right(&mut self) {
        self.shift(1, 0);
    }

    /// Whether shifting by `direction` columns (−1 or +1) would hit a wall or a block.
    ///
    /// Occupancy is checked on each block's current row.
    pub fn would_collide_horizontally(&self, direction: i8, field: &Field) -> bool {
        self.positions.iter().any(|pos| {
            let new_x = pos.x + direction;
            new_x < 0 || new_x >= GRID_COLS as i8 || field.is_occupied(new_x, pos.y)
        })
    }

    /// Whether moving down one row would hit the floor or a block.
    pub fn would_collide_vertically(&self, field: &Field) -> bool {
        self.positions.iter().any(|pos| {
            let new_y = pos.y + 1;
            new_y >= GRID_ROWS as i8 || field.is_occupied(pos.x, new_y)
        })
    }

    /// Offsets after one more clockwise rotation
    pub fn rotated_offsets(&self) -> ShapeOffsets {
        rotate_offsets(&self.offsets)
    }

    /// Whether the next rotation fits with the pivot shifted by (dx, dy).
    ///
    /// Cells the piece currently occupies count as free.
    pub fn can_rotate(&self, dx: i8, dy: i8, field: &Field) -> bool {
        let pivot = Pivot::new(self.pivot.x + dx as f32, self.pivot.y + dy as f32);
        self.rotated_offsets().iter().all(|&offset| {
            let pos = pivot.cell(offset);
            if !pos.in_bounds() {
                return false;
            }
            !field.is_occupied(pos.x, pos.y) || self.positions.contains(&pos)
        })
    }

    /// Commit the next rotation with the pivot shifted by (dx, dy).
    pub fn rotate_with_offset(&mut self, dx: i8, dy: i8) {
        self.pivot.x += dx as f32;
        self.pivot.y += dy as f32;
        self.offsets = self.rotated_offsets();
        let pivot = self.pivot;
        self.positions = self.offsets.map(|offset| pivot.cell(offset));
        self.rotation = self.rotation.next();
    }

    /// Dissolve the piece into its four placed blocks.
    pub fn into_blocks(self) -> [(Position, Block); 4] {
        let mut out = [(Position::default(), self.blocks[0]); 4];
        for (slot, (pos, block)) in out
            .iter_mut()
            .zip(self.positions.iter().zip(self.blocks.iter()))
        {
            *slot = (*pos, *block);
        }
        out
    }
}
