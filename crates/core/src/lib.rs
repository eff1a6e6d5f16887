//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and board
//! generation. It has **zero dependencies** on rendering, clocks, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical boards
//! - **Testable**: The clock is just a `tick()` call, so timed games run in unit tests
//! - **Portable**: Can sit under any presentation layer (terminal, web, headless)
//!
//! # Module Structure
//!
//! - [`board`]: `cols x rows` grid of optional colors
//! - [`engine`]: cross scan, removal rule and playable-move search
//! - [`generator`]: random boards with a guaranteed playable opening
//! - [`countdown`]: time budget of a timed game
//! - [`session`]: one game from reset to end (score, mode, end conditions)
//! - [`snapshot`]: plain-data view of a session for presentation layers
//! - [`rng`]: injectable random source and the default seeded LCG
//! - [`config`]: tunable rules with validation
//!
//! # Game Rules
//!
//! - Every board starts with exactly one empty cell, at the center
//! - Tapping an empty cell scans outward in the four cardinal directions and
//!   takes the nearest tile in each
//! - Scanned tiles whose color appears at least twice among them are removed,
//!   one point each
//! - A tap that removes nothing is a miss; in timed mode, once the clock runs,
//!   a miss costs 10 seconds
//! - The clock starts on the first successful removal
//! - The game ends when the board is empty, no empty cell is playable, or time runs out
//!
//! # Example
//!
//! ```
//! use cross_clear_core::{GameSession, TapOutcome};
//! use cross_clear_types::{BoardShape, GameMode};
//!
//! let mut game = GameSession::seeded(12345);
//! let snap = game.reset(GameMode::Timed, BoardShape::Landscape).unwrap();
//! assert_eq!(snap.remaining_tiles, 25 * 15 - 1);
//!
//! // The opening is always playable.
//! let result = game.tap(12, 7).unwrap();
//! assert_eq!(result.outcome, TapOutcome::Hit);
//! assert!(result.score_after >= 2);
//!
//! // The first hit starts the clock; one second passes.
//! if game.timer_running() {
//!     assert_eq!(game.tick().time_left_after, 119);
//! }
//! ```

pub mod board;
pub mod config;
pub mod countdown;
pub mod engine;
pub mod error;
pub mod generator;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use cross_clear_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use countdown::{Countdown, CountdownState};
pub use engine::{
    apply_removal, find_playable_move, has_any_playable_move, pick_removable, scan_cross,
    scan_nearest, ScanSet, Tile,
};
pub use error::{ConfigError, GameError, GenerationError};
pub use generator::{generate, generate_sized};
pub use rng::{RandomSource, SimpleRng};
pub use session::{GameSession, Phase, TapOutcome, TapResult, TickResult};
pub use snapshot::SessionSnapshot;
