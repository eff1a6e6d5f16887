//! Session module - one game from reset to end
//!
//! Ties together the board, generator, match engine, score and countdown.
//! Every operation is a synchronous state transition; the caller owns the
//! session and drives it with `reset`, `tap` and `tick`.
//!
//! Lifecycle:
//!
//! ```text
//! NotStarted --reset--> Active --(cleared | no moves | time up)--> Ended
//!                         ^                                          |
//!                         +------------------reset-------------------+
//! ```

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::config::GameConfig;
use crate::countdown::Countdown;
use crate::engine::{apply_removal, has_any_playable_move, pick_removable, ScanSet};
use crate::error::{ConfigError, GameError};
use crate::generator::generate;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::SessionSnapshot;
use crate::types::{BoardShape, EndReason, GameMode};

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    NotStarted,
    Active,
    Ended(EndReason),
}

/// What a tap did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TapOutcome {
    /// Tiles were removed
    Hit,
    /// No removable tiles; may cost time
    Miss,
    /// Tap on a filled cell, or no game in progress
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapResult {
    pub outcome: TapOutcome,
    pub removed: ScanSet,
    pub removed_count: usize,
    pub score_after: u32,
    pub remaining_tiles: usize,
    /// `None` in free mode
    pub time_left_after: Option<u32>,
    /// Seconds deducted by this tap
    pub penalty_secs: u32,
    /// This tap started the countdown
    pub timer_started: bool,
    pub ended: bool,
    pub end_reason: Option<EndReason>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickResult {
    /// False when the tick was ignored (no running countdown)
    pub applied: bool,
    pub time_left_after: u32,
    pub ended: bool,
    pub end_reason: Option<EndReason>,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession<R: RandomSource = SimpleRng> {
    config: GameConfig,
    rng: R,
    board: Board,
    mode: GameMode,
    shape: BoardShape,
    score: u32,
    countdown: Countdown,
    phase: Phase,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
}

impl GameSession<SimpleRng> {
    /// Session with default rules and a seeded [`SimpleRng`]
    pub fn seeded(seed: u32) -> Self {
        Self::unchecked(GameConfig::default(), SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Create a session that has not started a game yet
    pub fn new(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::unchecked(config, rng))
    }

    fn unchecked(config: GameConfig, rng: R) -> Self {
        Self {
            countdown: Countdown::new(config.start_time_secs),
            config,
            rng,
            board: Board::default(),
            mode: GameMode::default(),
            shape: BoardShape::default(),
            score: 0,
            phase: Phase::NotStarted,
            episode_id: 0,
        }
    }

    /// Start a game on a prepared board (puzzles, tests)
    ///
    /// The session's shape is the preset matching the board's orientation
    /// (see [`BoardShape::for_dims`]); `restart` generates a board of that preset.
    pub fn from_board(
        config: GameConfig,
        rng: R,
        mode: GameMode,
        board: Board,
    ) -> Result<Self, ConfigError> {
        let mut session = Self::new(config, rng)?;
        session.mode = mode;
        session.shape = BoardShape::for_dims(board.cols(), board.rows());
        session.board = board;
        session.phase = Phase::Active;
        session.episode_id = 1;
        Ok(session)
    }

    /// Start a new game. The previous game, if any, is discarded only once the
    /// new board has been generated.
    pub fn reset(&mut self, mode: GameMode, shape: BoardShape) -> Result<SessionSnapshot, GameError> {
        let board = generate(
            shape,
            self.config.palette(),
            &mut self.rng,
            self.config.max_generation_attempts,
        )?;

        self.countdown.stop();
        self.board = board;
        self.mode = mode;
        self.shape = shape;
        self.score = 0;
        self.countdown = Countdown::new(self.config.start_time_secs);
        self.phase = Phase::Active;
        self.episode_id = self.episode_id.wrapping_add(1);

        debug!(
            "episode {} started: mode={} shape={}",
            self.episode_id,
            mode.as_str(),
            shape.as_str()
        );
        Ok(self.snapshot())
    }

    /// New game with the current mode and shape
    pub fn restart(&mut self) -> Result<SessionSnapshot, GameError> {
        self.reset(self.mode, self.shape)
    }

    /// Tap the cell at `(x, y)`.
    ///
    /// Out-of-range coordinates are an error once a board exists; taps on
    /// filled cells or outside an active game are ignored.
    pub fn tap(&mut self, x: i16, y: i16) -> Result<TapResult, GameError> {
        if self.phase == Phase::NotStarted {
            return Ok(self.tap_result(TapOutcome::Ignored, ScanSet::new(), 0, false));
        }
        if !self.board.in_bounds(x, y) {
            return Err(GameError::InvalidCoordinate {
                x,
                y,
                cols: self.board.cols(),
                rows: self.board.rows(),
            });
        }
        if self.phase != Phase::Active || !self.board.is_empty_at(x, y) {
            return Ok(self.tap_result(TapOutcome::Ignored, ScanSet::new(), 0, false));
        }

        let removable = pick_removable(&self.board, x, y);
        if removable.is_empty() {
            return Ok(self.miss());
        }

        let removed = apply_removal(&mut self.board, &removable);
        self.score = self.score.saturating_add(removed as u32);
        let timer_started = self.mode.is_timed() && self.countdown.start();
        if timer_started {
            debug!("countdown started with {}s", self.countdown.remaining());
        }

        if self.board.is_cleared() {
            self.end(EndReason::BoardCleared);
        } else if !has_any_playable_move(&self.board) {
            self.end(EndReason::NoMovesLeft);
        }

        Ok(self.tap_result(TapOutcome::Hit, removable, 0, timer_started))
    }

    fn miss(&mut self) -> TapResult {
        let mut penalty = 0;
        if self.mode.is_timed() && self.countdown.is_running() {
            penalty = self.countdown.deduct(self.config.miss_penalty_secs);
            if self.countdown.is_expired() {
                self.end(EndReason::TimeExpired);
            }
        }
        self.tap_result(TapOutcome::Miss, ScanSet::new(), penalty, false)
    }

    /// One second of the clock. Ignored unless the countdown is running.
    pub fn tick(&mut self) -> TickResult {
        let applied = self.phase == Phase::Active && self.countdown.tick().is_some();
        if applied && self.countdown.is_expired() {
            self.end(EndReason::TimeExpired);
        }
        TickResult {
            applied,
            time_left_after: self.countdown.remaining(),
            ended: self.is_ended(),
            end_reason: self.end_reason(),
        }
    }

    fn end(&mut self, reason: EndReason) {
        self.countdown.stop();
        self.phase = Phase::Ended(reason);
        info!(
            "episode {} ended: {} (score {})",
            self.episode_id, reason, self.score
        );
    }

    fn tap_result(
        &self,
        outcome: TapOutcome,
        removed: ScanSet,
        penalty_secs: u32,
        timer_started: bool,
    ) -> TapResult {
        TapResult {
            outcome,
            removed_count: removed.len(),
            removed,
            score_after: self.score,
            remaining_tiles: self.board.remaining_tiles(),
            time_left_after: self.time_left(),
            penalty_secs,
            timer_started,
            ended: self.is_ended(),
            end_reason: self.end_reason(),
        }
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.episode_id = self.episode_id;
        out.mode = self.mode;
        out.shape = self.shape;
        out.cols = self.board.cols();
        out.rows = self.board.rows();
        out.board.clear();
        out.board.extend(self.board.to_rows());
        out.score = self.score;
        out.time_left = self.time_left();
        out.remaining_tiles = self.board.remaining_tiles();
        out.timer_started = self.countdown.started();
        out.ended = self.is_ended();
        out.end_reason = self.end_reason();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn shape(&self) -> BoardShape {
        self.shape
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Seconds left; `None` in free mode
    pub fn time_left(&self) -> Option<u32> {
        self.mode.is_timed().then(|| self.countdown.remaining())
    }

    /// Whether an external clock should currently be delivering ticks
    pub fn timer_running(&self) -> bool {
        self.phase == Phase::Active && self.countdown.is_running()
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn is_ended(&self) -> bool {
        matches!(self.phase, Phase::Ended(_))
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        match self.phase {
            Phase::Ended(reason) => Some(reason),
            _ => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
