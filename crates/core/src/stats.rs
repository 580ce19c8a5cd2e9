//! Final statistics handed to the persistence layer at game over.

use serde::Serialize;

use crate::scoring::Score;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameStats {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub pieces: u32,
    pub singles: u32,
    pub doubles: u32,
    pub triples: u32,
    pub tetrises: u32,
    /// Running time in whole seconds
    pub time_secs: u64,
}

impl From<&Score> for GameStats {
    fn from(score: &Score) -> Self {
        Self {
            score: score.score(),
            level: score.level(),
            lines: score.lines(),
            pieces: score.pieces_placed(),
            singles: score.singles(),
            doubles: score.doubles(),
            triples: score.triples(),
            tetrises: score.tetrises(),
            time_secs: score.game_time_secs(),
        }
    }
}
