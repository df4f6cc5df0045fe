//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or holds one
//! player's piece. Uses a flat vector in row-major order for cache locality.
//! Coordinates: (row, col) where row ranges 0..height (top to bottom) and col
//! ranges 0..width (left to right). Pieces fall toward the bottom row.

use crate::config::GridConfig;
use crate::types::{Cell, Player};

/// The game grid - flat storage, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat vector of cells (row * width + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board
    ///
    /// Dimensions are expected to be validated by the caller (see
    /// [`GridConfig`]). Panics if `width * height` overflows.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Create an empty board sized for a configuration
    pub fn for_config(config: &GridConfig) -> Self {
        Self::new(config.width(), config.height())
    }

    /// Calculate flat index from signed (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: isize, col: isize) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.height as isize || col >= self.width as isize {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (row, col)
    /// Returns None if out of bounds; negative coordinates are out of bounds
    pub fn get(&self, row: isize, col: isize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at position (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: isize, col: isize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_empty_at(&self, row: isize, col: isize) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Lowest empty row in a column, scanning up from the bottom
    ///
    /// Returns None when the column is full or out of range.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + col].is_none())
    }

    /// Put a player's piece in an empty cell
    /// Returns false if the cell is out of bounds or already occupied
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> bool {
        let (row, col) = (row as isize, col as isize);
        if !self.is_empty_at(row, col) {
            return false;
        }
        self.set(row, col, Some(player))
    }

    /// Check if a column has no empty cell left
    pub fn is_column_full(&self, col: usize) -> bool {
        self.landing_row(col).is_none()
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Number of occupied cells
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Columns that can still accept a piece, left to right
    pub fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.width).filter(move |&col| !self.is_column_full(col))
    }

    /// Get a reference to the internal cells (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows from top to bottom
    ///
    /// A zero-width board yields no rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Build a board from text rows for tests: `.` empty, `1`/`X` player 1,
    /// `2`/`O` player 2. Row 0 first.
    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows[0].len();
        assert!(rows.iter().all(|row| row.len() == width));

        let mut board = Self::new(width, height);
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '1' | 'X' => Some(Player::Player1),
                    '2' | 'O' => Some(Player::Player2),
                    _ => None,
                };
                board.set(r as isize, c as isize, cell);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::for_config(&GridConfig::default())
    }
}
