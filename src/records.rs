//! High scores and lifetime statistics, stored as a JSON file.
//!
//! Consumes [`GameStats`] at game over and never feeds anything back into a
//! running session. A missing file means empty records.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::GameStats;

/// Number of high score entries kept
pub const MAX_HIGH_SCORES: usize = 10;

const DEFAULT_RECORDS_PATH: &str = "tetramino-records.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordsConfig {
    pub path: PathBuf,
    pub enabled: bool,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_RECORDS_PATH),
            enabled: true,
        }
    }
}

impl RecordsConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        let path = env::var("TETRAMINO_RECORDS_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RECORDS_PATH));

        let disabled = env::var("TETRAMINO_RECORDS_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            path,
            enabled: !disabled,
        }
    }
}

/// One high score table entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub time_secs: u64,
    /// Unix seconds when the game ended
    pub recorded_at: u64,
}

/// Totals across every recorded game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifetimeStats {
    pub games: u32,
    pub total_score: u64,
    pub total_lines: u64,
    pub total_pieces: u64,
    pub total_tetrises: u64,
    pub total_time_secs: u64,
    pub best_level: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Records {
    /// Sorted by score, highest first
    #[serde(default)]
    pub high_scores: Vec<HighScore>,
    #[serde(default)]
    pub lifetime: LifetimeStats,
}

impl Records {
    /// Fold a finished game into the records.
    ///
    /// Returns the 0-based rank if the game entered the high score table.
    pub fn record(&mut self, stats: &GameStats, recorded_at: u64) -> Option<usize> {
        let life = &mut self.lifetime;
        life.games += 1;
        life.total_score += stats.score as u64;
        life.total_lines += stats.lines as u64;
        life.total_pieces += stats.pieces as u64;
        life.total_tetrises += stats.tetrises as u64;
        life.total_time_secs += stats.time_secs;
        life.best_level = life.best_level.max(stats.level);

        // Ties rank below earlier entries.
        let rank = self
            .high_scores
            .iter()
            .position(|entry| stats.score > entry.score)
            .unwrap_or(self.high_scores.len());
        if rank >= MAX_HIGH_SCORES {
            return None;
        }

        self.high_scores.insert(
            rank,
            HighScore {
                score: stats.score,
                level: stats.level,
                lines: stats.lines,
                time_secs: stats.time_secs,
                recorded_at,
            },
        );
        self.high_scores.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn best_score(&self) -> u32 {
        self.high_scores.first().map(|e| e.score).unwrap_or(0)
    }

    /// Read records from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read records from {}", path.display()))?;
        let mut records: Records = serde_json::from_str(&text)
            .with_context(|| format!("parse records in {}", path.display()))?;
        records.high_scores.sort_by(|a, b| b.score.cmp(&a.score));
        records.high_scores.truncate(MAX_HIGH_SCORES);
        Ok(records)
    }

    /// Like [`Records::load`], but a file that does not exist yet is `Ok(None)`.
    pub fn load_existing(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Write records to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(self).context("serialize records")?;
        fs::write(path, text).with_context(|| format!("write records to {}", path.display()))
    }
}

/// Current Unix time in seconds (0 if the clock is before the epoch).
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
