use std::time::{Duration, SystemTime, UNIX_EPOCH};

use cross_clear_core::GameConfig;
use cross_clear_types::{BoardShape, GameMode, TICK_PERIOD_MS};

/// Driver configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub seed: u32,
    pub game: GameConfig,
    pub tick_period: Duration,
    /// Mode of the first game
    pub mode: GameMode,
    /// Shape of the first game
    pub shape: BoardShape,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            game: GameConfig::default(),
            tick_period: Duration::from_millis(TICK_PERIOD_MS),
            mode: GameMode::default(),
            shape: BoardShape::default(),
        }
    }
}

impl DriverConfig {
    /// Create from environment variables
    ///
    /// - `CROSS_CLEAR_SEED`: RNG seed (default: derived from the wall clock)
    /// - `CROSS_CLEAR_START_TIME`: timed-mode budget in seconds
    /// - `CROSS_CLEAR_PENALTY`: miss penalty in seconds
    /// - `CROSS_CLEAR_PALETTE`: number of colors (1-5)
    /// - `CROSS_CLEAR_TICK_MS`: clock period
    /// - `CROSS_CLEAR_MODE`: `timed` or `free`
    /// - `CROSS_CLEAR_SHAPE`: `landscape` or `portrait`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary key lookup.
    /// Missing or unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let game_defaults = GameConfig::default();

        let parsed = |key: &str| lookup(key).map(|s| s.trim().to_string());

        let seed = parsed("CROSS_CLEAR_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let game = GameConfig {
            start_time_secs: parsed("CROSS_CLEAR_START_TIME")
                .and_then(|s| s.parse().ok())
                .unwrap_or(game_defaults.start_time_secs),
            miss_penalty_secs: parsed("CROSS_CLEAR_PENALTY")
                .and_then(|s| s.parse().ok())
                .unwrap_or(game_defaults.miss_penalty_secs),
            palette_size: parsed("CROSS_CLEAR_PALETTE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(game_defaults.palette_size),
            ..game_defaults
        };

        let tick_period = parsed("CROSS_CLEAR_TICK_MS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick_period);

        let mode = parsed("CROSS_CLEAR_MODE")
            .and_then(|s| GameMode::from_str(&s))
            .unwrap_or(defaults.mode);

        let shape = parsed("CROSS_CLEAR_SHAPE")
            .and_then(|s| BoardShape::from_str(&s))
            .unwrap_or(defaults.shape);

        Self {
            seed,
            game,
            tick_period,
            mode,
            shape,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
