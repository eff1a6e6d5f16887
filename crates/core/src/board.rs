//! Board module - manages the game grid
//!
//! The board is a `cols x rows` grid where each cell is empty or holds a color.
//! Uses a flat vector in row-major order (`y * cols + x`).
//! Coordinates: `(x, y)` where `x` is the column (left to right) and `y` the
//! row (top to bottom). Signed coordinates make off-board probes cheap to
//! express: anything outside the grid simply reads as `None`.

use crate::types::{Cell, Color};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cols: u8,
    rows: u8,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board with every cell empty
    pub fn new(cols: u8, rows: u8) -> Self {
        Self {
            cols,
            rows,
            cells: vec![None; cols as usize * rows as usize],
        }
    }

    /// Create a board by evaluating `f(x, y)` for every cell, row by row
    pub fn from_fn(cols: u8, rows: u8, mut f: impl FnMut(i16, i16) -> Cell) -> Self {
        let mut cells = Vec::with_capacity(cols as usize * rows as usize);
        for y in 0..rows as i16 {
            for x in 0..cols as i16 {
                cells.push(f(x, y));
            }
        }
        Self { cols, rows, cells }
    }

    /// Create a board from explicit rows. All rows must have the same length.
    ///
    /// Returns `None` for ragged input or dimensions above 255.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Option<Self> {
        let height = u8::try_from(rows.len()).ok()?;
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != width) {
            return None;
        }
        let width = u8::try_from(width).ok()?;
        Some(Self {
            cols: width,
            rows: height,
            cells: rows.iter().flatten().copied().collect(),
        })
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.cols as usize) + (x as usize))
    }

    /// Number of columns
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Number of rows
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Check if position is within the grid
    #[inline]
    pub fn in_bounds(&self, x: i16, y: i16) -> bool {
        x >= 0 && y >= 0 && x < self.cols as i16 && y < self.rows as i16
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Empty the cell at (x, y), returning the color it held
    pub fn take(&mut self, x: i16, y: i16) -> Option<Color> {
        let idx = self.index(x, y)?;
        self.cells[idx].take()
    }

    /// Check if position is within bounds and empty
    pub fn is_empty_at(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and holds a tile
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Number of tiles left on the board
    pub fn remaining_tiles(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Whether every cell is empty
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Iterate over the coordinates of empty cells, row by row
    pub fn empty_cells(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        let cols = self.cols as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(move |(i, _)| ((i % cols) as i16, (i / cols) as i16))
    }

    /// Raw cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid out as rows (for snapshots / presentation)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        if self.cols == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.cols as usize)
            .map(<[Cell]>::to_vec)
            .collect()
    }
}
