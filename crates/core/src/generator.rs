//! Board generator
//!
//! Fills the grid with uniformly random colors, leaves the center cell
//! `(cols / 2, rows / 2)` empty, and keeps regenerating from scratch until that
//! opening is a playable move. Regeneration is capped; exceeding the cap is a
//! [`GenerationError`] rather than a hang.

use log::{debug, trace};

use crate::board::Board;
use crate::engine::has_any_playable_move;
use crate::error::GenerationError;
use crate::rng::RandomSource;
use crate::types::{BoardShape, Color};

/// Generate a board for a shape preset.
pub fn generate<R: RandomSource>(
    shape: BoardShape,
    palette: &[Color],
    rng: &mut R,
    max_attempts: u32,
) -> Result<Board, GenerationError> {
    let (cols, rows) = shape.dims();
    generate_sized(cols, rows, palette, rng, max_attempts)
}

/// Generate a `cols x rows` board with exactly one empty cell at the center
/// that is guaranteed playable.
pub fn generate_sized<R: RandomSource>(
    cols: u8,
    rows: u8,
    palette: &[Color],
    rng: &mut R,
    max_attempts: u32,
) -> Result<Board, GenerationError> {
    let failure = |attempts| GenerationError {
        cols,
        rows,
        attempts,
    };

    if palette.is_empty() || cols == 0 || rows == 0 {
        return Err(failure(0));
    }

    let center = ((cols / 2) as i16, (rows / 2) as i16);

    for attempt in 1..=max_attempts {
        let mut board = fill_random(cols, rows, palette, rng);
        board.set(center.0, center.1, None);

        if has_any_playable_move(&board) {
            debug!(
                "generated {}x{} board after {} attempt(s)",
                cols, rows, attempt
            );
            return Ok(board);
        }
        trace!("attempt {} has no playable opening, regenerating", attempt);
    }

    Err(failure(max_attempts))
}

/// Every cell drawn uniformly from `palette`, no adjacency constraint.
fn fill_random<R: RandomSource>(cols: u8, rows: u8, palette: &[Color], rng: &mut R) -> Board {
    let len = palette.len() as u32;
    Board::from_fn(cols, rows, |_, _| {
        Some(palette[rng.next_range(len) as usize])
    })
}
