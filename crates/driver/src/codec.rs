//! Line-delimited JSON codec between the driver and a presentation layer
//!
//! One JSON object per line in each direction, discriminated by `type`.
//!
//! ```text
//! -> {"type":"reset","mode":"timed","shape":"portrait"}
//! <- {"type":"snapshot","episode_id":1,"mode":"timed",...}
//! -> {"type":"tap","x":7,"y":12}
//! <- {"type":"tap","outcome":"hit","removed_count":3,...}
//! <- {"type":"tick","applied":true,"time_left_after":119,...}
//! ```

use serde::{Deserialize, Serialize};

use cross_clear_core::{GameError, SessionSnapshot, TapResult, TickResult};
use cross_clear_types::{BoardShape, GameMode};

/// Presentation layer -> driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    Reset {
        #[serde(default)]
        mode: GameMode,
        #[serde(default)]
        shape: BoardShape,
    },
    Restart,
    Tap {
        x: i16,
        y: i16,
    },
    Snapshot,
    Hint,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidCommand,
    InvalidCoordinate,
    GenerationFailed,
}

/// Driver -> presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    Snapshot(SessionSnapshot),
    Tap(TapResult),
    Tick(TickResult),
    Hint { cell: Option<[i16; 2]> },
    Error { code: ErrorCode, message: String },
    Bye,
}

impl Response {
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Response::Error {
            code,
            message: message.into(),
        }
    }
}

impl From<GameError> for Response {
    fn from(err: GameError) -> Self {
        let code = match err {
            GameError::InvalidCoordinate { .. } => ErrorCode::InvalidCoordinate,
            GameError::Generation(_) => ErrorCode::GenerationFailed,
        };
        Response::error(code, err.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("empty command line")]
    Empty,

    #[error("malformed command: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl CodecError {
    pub fn to_response(&self) -> Response {
        Response::error(ErrorCode::InvalidCommand, self.to_string())
    }
}

/// Parse one command line.
pub fn parse_command(line: &str) -> Result<Command, CodecError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(CodecError::Empty);
    }
    Ok(serde_json::from_str(line)?)
}

/// Encode one response line (without the trailing newline).
pub fn encode_response(response: &Response) -> Result<String, CodecError> {
    Ok(serde_json::to_string(response)?)
}
