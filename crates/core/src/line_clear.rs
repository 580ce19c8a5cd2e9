//! Line clear engine
//!
//! Runs right after a lock: find every full row, score them as one event, then
//! clear them all at once.

use crate::field::{Field, RowList};
use crate::scoring::Score;

/// Outcome of one line clear event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClear {
    /// Cleared row indices, top to bottom (pre-clear coordinates)
    pub rows: RowList,
    /// Score gained by this event
    pub points: u32,
    pub level_up: bool,
}

impl LineClear {
    pub fn count(&self) -> u8 {
        self.rows.len() as u8
    }
}

/// Detect, score and remove complete rows.
///
/// Returns `None` (field and score untouched) when no row is full.
pub fn resolve(field: &mut Field, score: &mut Score) -> Option<LineClear> {
    let rows = field.find_complete_rows();
    if rows.is_empty() {
        return None;
    }

    let before = score.score();
    let level_up = score.add_clear(rows.len() as u8);
    let points = score.score() - before;

    field.clear_rows(&rows);

    Some(LineClear {
        rows,
        points,
        level_up,
    })
}
