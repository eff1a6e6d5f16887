/// Board generation gave up before finding a playable opening.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no playable {cols}x{rows} board after {attempts} attempt(s)")]
pub struct GenerationError {
    pub cols: u8,
    pub rows: u8,
    pub attempts: u32,
}

/// Errors surfaced by session operations.
///
/// Taps on filled cells and operations on an ended game are not errors; they
/// come back as ignored outcomes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("coordinate ({x}, {y}) is outside the {cols}x{rows} board")]
    InvalidCoordinate { x: i16, y: i16, cols: u8, rows: u8 },

    #[error("board generation failed: {0}")]
    Generation(#[from] GenerationError),
}

/// Errors that can occur when validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}
