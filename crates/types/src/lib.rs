//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no game logic attached, making them usable
//! in any context (core rules, the async driver, a presentation layer).
//!
//! # Board Shapes
//!
//! Two presets are supported. Coordinates are `(x, y)` with `x` the column
//! and `y` the row, both zero-based from the top-left corner.
//!
//! | Shape | Columns | Rows |
//! |-------|---------|------|
//! | `Landscape` | 25 | 15 |
//! | `Portrait` | 15 | 25 |
//!
//! # Gameplay Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `START_TIME_SECS` | 120 | Time budget of a timed game |
//! | `MISS_PENALTY_SECS` | 10 | Seconds deducted by a miss once the clock runs |
//! | `TICK_PERIOD_MS` | 1000 | Clock period driving `tick()` |
//! | `MAX_GENERATION_ATTEMPTS` | 10000 | Board regeneration cap |
//!
//! # Examples
//!
//! ```
//! use cross_clear_types::{BoardShape, Color, Direction, GameMode};
//!
//! let shape = BoardShape::from_str("tall").unwrap();
//! assert_eq!(shape, BoardShape::Portrait);
//! assert_eq!(shape.dims(), (15, 25));
//!
//! assert_eq!(Color::from_str("RED"), Some(Color::Red));
//! assert_eq!(Direction::Left.delta(), (-1, 0));
//! assert_eq!(GameMode::from_str("free"), Some(GameMode::Free));
//! ```

use serde::{Deserialize, Serialize};

/// Time budget of a timed game in seconds
pub const START_TIME_SECS: u32 = 120;

/// Seconds deducted from the budget on a miss after the clock has started
pub const MISS_PENALTY_SECS: u32 = 10;

/// Clock period in milliseconds (one `tick()` per second)
pub const TICK_PERIOD_MS: u64 = 1000;

/// Upper bound on whole-board regenerations before giving up
pub const MAX_GENERATION_ATTEMPTS: u32 = 10_000;

/// Number of colors in the full palette
pub const PALETTE_SIZE: usize = 5;

/// The full palette, in a stable order
pub const PALETTE: [Color; PALETTE_SIZE] = [
    Color::Red,
    Color::Blue,
    Color::Yellow,
    Color::Green,
    Color::Purple,
];


/// A tile color. Only equality matters to the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Yellow,
    Green,
    Purple,
}

impl Color {
    /// Parse color from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(Color::Red),
            "blue" => Some(Color::Blue),
            "yellow" => Some(Color::Yellow),
            "green" => Some(Color::Green),
            "purple" => Some(Color::Purple),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Purple => "purple",
        }
    }

    /// Display color for presentation layers (Material palette)
    pub fn hex(&self) -> &'static str {
        match self {
            Color::Red => "#f44336",
            Color::Blue => "#2196f3",
            Color::Yellow => "#ffeb3b",
            Color::Green => "#4caf50",
            Color::Purple => "#9c27b0",
        }
    }

    /// Index into [`PALETTE`]
    pub fn index(&self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
            Color::Yellow => 2,
            Color::Green => 3,
            Color::Purple => 4,
        }
    }
}

/// Cell type - `None` = empty, `Some(color)` = tile
pub type Cell = Option<Color>;

/// Cardinal scan direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    /// All four directions in scan order
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// Unit step `(dx, dy)`; `y` grows downwards
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
        }
    }
}

/// Game variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Depleting time budget with a miss penalty
    #[default]
    Timed,
    /// No clock
    Free,
}

impl GameMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "timed" => Some(GameMode::Timed),
            "free" => Some(GameMode::Free),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Timed => "timed",
            GameMode::Free => "free",
        }
    }

    pub fn is_timed(&self) -> bool {
        matches!(self, GameMode::Timed)
    }
}

/// Board shape preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardShape {
    /// 25 columns x 15 rows
    Landscape,
    /// 15 columns x 25 rows
    #[default]
    Portrait,
}

impl BoardShape {
    /// Parse shape from string (case-insensitive, `wide`/`tall` accepted)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "landscape" | "wide" => Some(BoardShape::Landscape),
            "portrait" | "tall" => Some(BoardShape::Portrait),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BoardShape::Landscape => "landscape",
            BoardShape::Portrait => "portrait",
        }
    }

    /// `(cols, rows)`
    pub fn dims(&self) -> (u8, u8) {
        match self {
            BoardShape::Landscape => (25, 15),
            BoardShape::Portrait => (15, 25),
        }
    }

    pub fn cols(&self) -> u8 {
        self.dims().0
    }

    pub fn rows(&self) -> u8 {
        self.dims().1
    }

    /// Preset with the same orientation as a `cols x rows` board.
    /// Square boards map to the default, `Portrait`.
    pub fn for_dims(cols: u8, rows: u8) -> Self {
        if cols > rows {
            BoardShape::Landscape
        } else {
            BoardShape::Portrait
        }
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    TimeExpired,
    BoardCleared,
    NoMovesLeft,
}

impl EndReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndReason::TimeExpired => "time_expired",
            EndReason::BoardCleared => "board_cleared",
            EndReason::NoMovesLeft => "no_moves_left",
        }
    }
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            EndReason::TimeExpired => "time expired",
            EndReason::BoardCleared => "board cleared",
            EndReason::NoMovesLeft => "no moves left",
        };
        f.write_str(text)
    }
}
