//! Scoring module - score, level and drop speed progression
//!
//! Classic scoring: `LINE_SCORES[n] * level` per clear event, level 1 at the
//! start, one level per `LINES_PER_LEVEL` cleared lines.

use crate::types::{LINES_PER_LEVEL, LINE_SCORES};

/// Points for clearing `lines` rows at once at `level`.
///
/// Returns `None` for anything but 1..=4 lines.
pub fn line_clear_points(lines: u8, level: u32) -> Option<u32> {
    match lines {
        1..=4 => Some(LINE_SCORES[lines as usize].saturating_mul(level)),
        _ => None,
    }
}

/// Level reached after `total_lines` cleared lines
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Base fall interval after a level up.
///
/// `max(min_ms, previous_ms * multiplier)`.
pub fn next_drop_interval_ms(previous_ms: u32, multiplier: f32, min_ms: u32) -> u32 {
    let scaled = (previous_ms as f32 * multiplier) as u32;
    scaled.max(min_ms)
}

/// Score and progression tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    score: u32,
    level: u32,
    lines: u32,
    pieces_placed: u32,
    singles: u32,
    doubles: u32,
    triples: u32,
    tetrises: u32,
    /// Running time only; paused time is not counted.
    game_time_ms: u64,
}

impl Score {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            lines: 0,
            pieces_placed: 0,
            singles: 0,
            doubles: 0,
            triples: 0,
            tetrises: 0,
            game_time_ms: 0,
        }
    }

    /// Record one clear event of `lines` rows.
    ///
    /// Counts outside 1..=4 are ignored. Returns whether the level went up.
    pub fn add_clear(&mut self, lines: u8) -> bool {
        let Some(points) = line_clear_points(lines, self.level) else {
            return false;
        };

        self.score = self.score.saturating_add(points);
        self.lines += lines as u32;

        match lines {
            1 => self.singles += 1,
            2 => self.doubles += 1,
            3 => self.triples += 1,
            _ => self.tetrises += 1,
        }

        let new_level = level_for_lines(self.lines);
        if new_level > self.level {
            self.level = new_level;
            return true;
        }
        false
    }

    pub fn record_piece(&mut self) {
        self.pieces_placed += 1;
    }

    pub fn add_time(&mut self, elapsed_ms: u32) {
        self.game_time_ms += elapsed_ms as u64;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_placed(&self) -> u32 {
        self.pieces_placed
    }

    pub fn singles(&self) -> u32 {
        self.singles
    }

    pub fn doubles(&self) -> u32 {
        self.doubles
    }

    pub fn triples(&self) -> u32 {
        self.triples
    }

    pub fn tetrises(&self) -> u32 {
        self.tetrises
    }

    pub fn game_time_ms(&self) -> u64 {
        self.game_time_ms
    }

    /// Whole seconds of running time
    pub fn game_time_secs(&self) -> u64 {
        self.game_time_ms / 1000
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::new()
    }
}
