//! Session tunables

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{
    FAST_DROP_MS, INITIAL_DROP_MS, LEVEL_SPEED_MULTIPLIER, MIN_DROP_MS, ROTATE_COOLDOWN_MS,
};

/// Game session configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Seed for the next-piece RNG
    pub seed: u32,
    /// Fall interval at level 1
    pub initial_drop_ms: u32,
    /// Fall interval while fast drop is held
    pub fast_drop_ms: u32,
    /// Applied to the base fall interval on every level up
    pub level_speed_multiplier: f32,
    pub min_drop_ms: u32,
    pub rotate_cooldown_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            initial_drop_ms: INITIAL_DROP_MS,
            fast_drop_ms: FAST_DROP_MS,
            level_speed_multiplier: LEVEL_SPEED_MULTIPLIER,
            min_drop_ms: MIN_DROP_MS,
            rotate_cooldown_ms: ROTATE_COOLDOWN_MS,
        }
    }
}

impl GameConfig {
    /// Same as `default()` with a fixed seed.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Create from environment variables
    ///
    /// Unset or unparsable values keep their defaults. Without `TETRAMINO_SEED`
    /// the seed comes from the system clock.
    pub fn from_env() -> Self {
        use std::env;

        fn parse_ms(key: &str, default: u32) -> u32 {
            env::var(key)
                .ok()
                .and_then(|s| s.trim().parse().ok())
                .filter(|&ms: &u32| ms > 0)
                .unwrap_or(default)
        }

        let defaults = Self::default();
        let seed = env::var("TETRAMINO_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        Self {
            seed,
            initial_drop_ms: parse_ms("TETRAMINO_INITIAL_DROP_MS", defaults.initial_drop_ms),
            fast_drop_ms: parse_ms("TETRAMINO_FAST_DROP_MS", defaults.fast_drop_ms),
            rotate_cooldown_ms: parse_ms(
                "TETRAMINO_ROTATE_COOLDOWN_MS",
                defaults.rotate_cooldown_ms,
            ),
            ..defaults
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = GameConfig::default();
        assert_eq!(config.initial_drop_ms, 1000);
        assert_eq!(config.fast_drop_ms, 300);
        assert_eq!(config.min_drop_ms, 50);
        assert_eq!(config.rotate_cooldown_ms, 150);
        assert_eq!(config.level_speed_multiplier, 0.75);
    }

    #[test]
    fn with_seed_keeps_other_defaults() {
        let config = GameConfig::with_seed(77);
        assert_eq!(config.seed, 77);
        assert_eq!(config.initial_drop_ms, INITIAL_DROP_MS);
    }
}
