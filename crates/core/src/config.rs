use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{
    Color, MAX_GENERATION_ATTEMPTS, MISS_PENALTY_SECS, PALETTE, PALETTE_SIZE, START_TIME_SECS,
};

/// Tunable game rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Time budget of a timed game
    pub start_time_secs: u32,
    /// Seconds a miss costs once the clock is running
    pub miss_penalty_secs: u32,
    /// How many palette colors boards are drawn from (1..=5)
    pub palette_size: u8,
    /// Regeneration cap for the board generator
    pub max_generation_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_time_secs: START_TIME_SECS,
            miss_penalty_secs: MISS_PENALTY_SECS,
            palette_size: PALETTE_SIZE as u8,
            max_generation_attempts: MAX_GENERATION_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette_size == 0 || self.palette_size as usize > PALETTE_SIZE {
            return Err(ConfigError::Validation(format!(
                "palette_size must be in 1..={PALETTE_SIZE}"
            )));
        }
        if self.start_time_secs == 0 {
            return Err(ConfigError::Validation(
                "start_time_secs must be > 0".into(),
            ));
        }
        if self.max_generation_attempts == 0 {
            return Err(ConfigError::Validation(
                "max_generation_attempts must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Colors boards are drawn from
    pub fn palette(&self) -> &'static [Color] {
        let n = (self.palette_size as usize).clamp(1, PALETTE_SIZE);
        &PALETTE[..n]
    }
}
