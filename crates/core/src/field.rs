//! Field module - the occupancy grid of locked blocks
//!
//! The field is a fixed 10x20 grid where each cell is empty or holds the
//! [`Block`] that was transferred into it when a piece locked.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).

use arrayvec::ArrayVec;

use crate::types::{Position, ShapeKind, GRID_COLS, GRID_ROWS};

/// Total number of cells on the field
pub const FIELD_SIZE: usize = (GRID_COLS as usize) * (GRID_ROWS as usize);

/// Row indices returned by [`Field::find_complete_rows`]
pub type RowList = ArrayVec<u8, { GRID_ROWS as usize }>;

/// Opaque handle for one locked block.
///
/// A piece owns four of these while it falls; locking moves them into the
/// field, where they are addressed by cell instead of by piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    id: u32,
    shape: ShapeKind,
}

impl Block {
    pub fn new(id: u32, shape: ShapeKind) -> Self {
        Self { id, shape }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Shape the block came from (determines its colour).
    pub fn shape(&self) -> ShapeKind {
        self.shape
    }
}

/// A single field cell
pub type Cell = Option<Block>;

/// The playing field - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Row-major (y * COLS + x)
    cells: [Cell; FIELD_SIZE],
}

impl Field {
    /// Create a new empty field
    pub fn new() -> Self {
        Self {
            cells: [None; FIELD_SIZE],
        }
    }

    #[inline(always)]
    fn index(pos: Position) -> Option<usize> {
        if !pos.in_bounds() {
            return None;
        }
        Some((pos.y as usize) * (GRID_COLS as usize) + (pos.x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_COLS
    }

    pub fn height(&self) -> u8 {
        GRID_ROWS
    }

    /// Get cell at position
    /// Returns None if out of bounds
    pub fn get(&self, pos: Position) -> Option<Cell> {
        Self::index(pos).map(|idx| self.cells[idx])
    }

    /// Set cell at position
    /// Returns false if out of bounds
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match Self::index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether a cell holds a block.
    ///
    /// Callers check bounds before asking; an out-of-range coordinate reads as
    /// unoccupied.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(Position::new(x, y)), Some(Some(_)))
    }

    /// Transfer locked blocks into the field.
    ///
    /// Positions outside the field are ignored. Returns how many blocks were stored.
    pub fn lock(&mut self, blocks: &[(Position, Block)]) -> usize {
        let mut stored = 0;
        for &(pos, block) in blocks {
            if self.set(pos, Some(block)) {
                stored += 1;
            }
        }
        stored
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: u8) -> bool {
        if y >= GRID_ROWS {
            return false;
        }
        let start = y as usize * GRID_COLS as usize;
        let end = start + GRID_COLS as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Indices of every full row, scanned top to bottom.
    pub fn find_complete_rows(&self) -> RowList {
        (0..GRID_ROWS).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Empty the given rows and let everything above them fall.
    ///
    /// Cleared rows are processed bottom-up. Each surviving block moves down
    /// once for every cleared row below its original row, so non-adjacent
    /// clears compose without double shifting. The grid is then rebuilt from
    /// the shifted positions.
    pub fn clear_rows(&mut self, rows: &[u8]) {
        let mut cleared = RowList::new();
        for &row in rows {
            if row < GRID_ROWS && !cleared.contains(&row) {
                cleared.push(row);
            }
        }
        if cleared.is_empty() {
            return;
        }
        cleared.sort_unstable_by(|a, b| b.cmp(a));

        let width = GRID_COLS as usize;
        for &row in &cleared {
            let start = row as usize * width;
            self.cells[start..start + width].fill(None);
        }

        // (original row, current position, block)
        let mut survivors: ArrayVec<(i8, Position, Block), FIELD_SIZE> = ArrayVec::new();
        for (idx, cell) in self.cells.iter().enumerate() {
            if let Some(block) = *cell {
                let pos = Position::new((idx % width) as i8, (idx / width) as i8);
                survivors.push((pos.y, pos, block));
            }
        }

        for &row in &cleared {
            for (origin_y, pos, _) in survivors.iter_mut() {
                if *origin_y < row as i8 {
                    pos.y += 1;
                }
            }
        }

        self.cells = [None; FIELD_SIZE];
        for (_, pos, block) in survivors {
            self.set(pos, Some(block));
        }
    }

    /// Empty every cell
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the field into a row-major shape grid (for renderers).
    pub fn write_shape_grid(
        &self,
        out: &mut [[Option<ShapeKind>; GRID_COLS as usize]; GRID_ROWS as usize],
    ) {
        let width = GRID_COLS as usize;
        for (y, row) in out.iter_mut().enumerate() {
            for (x, slot) in row.iter_mut().enumerate() {
                *slot = self.cells[y * width + x].map(|b| b.shape());
            }
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(id: u32) -> Block {
        Block::new(id, ShapeKind::T)
    }

    fn fill_row(field: &mut Field, y: i8) {
        for x in 0..GRID_COLS as i8 {
            field.set(Position::new(x, y), Some(block(1000 + x as u32)));
        }
    }

    #[test]
    fn index_calculation() {
        assert_eq!(Field::index(Position::new(0, 0)), Some(0));
        assert_eq!(Field::index(Position::new(9, 0)), Some(9));
        assert_eq!(Field::index(Position::new(0, 1)), Some(10));
        assert_eq!(Field::index(Position::new(9, 19)), Some(199));
        assert_eq!(Field::index(Position::new(-1, 0)), None);
        assert_eq!(Field::index(Position::new(10, 0)), None);
        assert_eq!(Field::index(Position::new(0, 20)), None);
    }

    #[test]
    fn lock_ignores_out_of_bounds() {
        let mut field = Field::new();
        let stored = field.lock(&[
            (Position::new(0, 0), block(1)),
            (Position::new(-1, 0), block(2)),
            (Position::new(3, 20), block(3)),
            (Position::new(9, 19), block(4)),
        ]);
        assert_eq!(stored, 2);
        assert_eq!(field.occupied_count(), 2);
        assert!(field.is_occupied(0, 0));
        assert!(field.is_occupied(9, 19));
    }

    #[test]
    fn clear_single_bottom_row_drops_rest() {
        let mut field = Field::new();
        fill_row(&mut field, 19);
        field.set(Position::new(4, 18), Some(block(1)));

        field.clear_rows(&[19]);

        assert_eq!(field.occupied_count(), 1);
        assert_eq!(field.get(Position::new(4, 19)), Some(Some(block(1))));
    }

    #[test]
    fn clear_rows_keeps_block_identity() {
        let mut field = Field::new();
        fill_row(&mut field, 10);
        field.set(Position::new(2, 3), Some(block(7)));
        field.set(Position::new(5, 15), Some(block(8)));

        field.clear_rows(&[10]);

        // Above the cleared row: moved down one, same handle.
        assert_eq!(field.get(Position::new(2, 4)), Some(Some(block(7))));
        // Below the cleared row: untouched.
        assert_eq!(field.get(Position::new(5, 15)), Some(Some(block(8))));
        assert_eq!(field.occupied_count(), 2);
    }

    #[test]
    fn clear_rows_handles_unsorted_and_duplicate_input() {
        let mut a = Field::new();
        let mut b = Field::new();
        for field in [&mut a, &mut b] {
            fill_row(field, 12);
            fill_row(field, 17);
            field.set(Position::new(0, 5), Some(block(1)));
            field.set(Position::new(1, 14), Some(block(2)));
        }

        a.clear_rows(&[12, 17]);
        b.clear_rows(&[17, 12, 17]);
        assert_eq!(a, b);
        assert!(a.is_occupied(0, 7));
        assert!(a.is_occupied(1, 15));
    }

    #[test]
    fn clear_rows_with_nothing_is_noop() {
        let mut field = Field::new();
        field.set(Position::new(3, 3), Some(block(1)));
        let before = field.clone();
        field.clear_rows(&[]);
        field.clear_rows(&[25]);
        assert_eq!(field, before);
    }
}
