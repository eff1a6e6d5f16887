//! Match engine - the removal rule
//!
//! Tapping an empty cell looks outward in the four cardinal directions and
//! picks up the nearest tile in each. Any of those (at most four) tiles whose
//! color occurs at least twice among them is removable. There is no flood
//! fill and no chaining past the scanned tiles.
//!
//! Everything here is a free function over a borrowed [`Board`]; only
//! [`apply_removal`] mutates.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::{Color, Direction};

/// A tile found by a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub x: i16,
    pub y: i16,
    pub color: Color,
}

/// Up to four tiles, one per direction. Stack-only.
pub type ScanSet = ArrayVec<Tile, 4>;

/// Walk from `(x, y)` in `direction` until a tile or the border is hit.
///
/// The starting cell itself is not inspected.
pub fn scan_nearest(board: &Board, x: i16, y: i16, direction: Direction) -> Option<Tile> {
    let (dx, dy) = direction.delta();
    let (mut cx, mut cy) = (x + dx, y + dy);

    while let Some(cell) = board.get(cx, cy) {
        if let Some(color) = cell {
            return Some(Tile {
                x: cx,
                y: cy,
                color,
            });
        }
        cx += dx;
        cy += dy;
    }

    None
}

/// Nearest tile in each direction, in [`Direction::ALL`] order, skipping misses.
pub fn scan_cross(board: &Board, x: i16, y: i16) -> ScanSet {
    Direction::ALL
        .iter()
        .filter_map(|&dir| scan_nearest(board, x, y, dir))
        .collect()
}

/// Tiles that tapping `(x, y)` would remove.
///
/// Result length is 0, 2, 3 or 4: a tile only qualifies alongside another
/// tile of its color.
pub fn pick_removable(board: &Board, x: i16, y: i16) -> ScanSet {
    let scanned = scan_cross(board, x, y);

    let mut counts = [0u8; crate::types::PALETTE_SIZE];
    for tile in &scanned {
        counts[tile.color.index()] += 1;
    }

    scanned
        .into_iter()
        .filter(|tile| counts[tile.color.index()] >= 2)
        .collect()
}

/// Empty every given tile's cell. Returns how many cells were actually cleared.
pub fn apply_removal(board: &mut Board, tiles: &[Tile]) -> usize {
    tiles
        .iter()
        .filter(|tile| board.take(tile.x, tile.y).is_some())
        .count()
}

/// First empty cell (row-major) whose tap would remove something.
pub fn find_playable_move(board: &Board) -> Option<(i16, i16)> {
    board
        .empty_cells()
        .find(|&(x, y)| !pick_removable(board, x, y).is_empty())
}

/// Whether any empty cell on the board is a playable move.
pub fn has_any_playable_move(board: &Board) -> bool {
    find_playable_move(board).is_some()
}
