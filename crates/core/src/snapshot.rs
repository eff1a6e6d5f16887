use serde::{Deserialize, Serialize};

use crate::types::{BoardShape, Cell, EndReason, GameMode};

/// Everything a presentation layer needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub episode_id: u32,
    pub mode: GameMode,
    pub shape: BoardShape,
    pub cols: u8,
    pub rows: u8,
    /// Row-major grid, `board[y][x]`
    pub board: Vec<Vec<Cell>>,
    pub score: u32,
    /// `None` in free mode (no clock)
    pub time_left: Option<u32>,
    pub remaining_tiles: usize,
    pub timer_started: bool,
    pub ended: bool,
    pub end_reason: Option<EndReason>,
}

impl SessionSnapshot {
    pub fn playable(&self) -> bool {
        !self.ended && self.cols > 0
    }

    /// Cell at `(x, y)`, `None` when out of range
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.board.get(y).and_then(|row| row.get(x)).copied()
    }
}
