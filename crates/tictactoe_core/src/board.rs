//! The 3x3 grid.

use crate::error::GameError;
use crate::position::Position;
use crate::types::{Cell, Marker};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order. Once a cell holds a marker it only
/// becomes empty again through [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Returns the cell at `index`.
    pub fn get(&self, index: usize) -> Result<Cell, GameError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(GameError::InvalidIndex { index })
    }

    /// Returns the cell at a named position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Places `marker` at `index` if the cell is empty.
    ///
    /// Returns `Ok(false)` without touching the board when the cell is already
    /// occupied.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidIndex`] if `index` is not in `0..9`.
    #[instrument(skip(self))]
    pub fn place_marker(&mut self, index: usize, marker: Marker) -> Result<bool, GameError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(GameError::InvalidIndex { index })?;

        if !cell.is_empty() {
            trace!(index, "Cell already occupied");
            return Ok(false);
        }

        *cell = Cell::Occupied(marker);
        Ok(true)
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Checks if every cell holds a marker.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Checks if the cell at a position is empty.
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.cell(pos).is_empty()
    }

    /// Positions that can still be played.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty_at(*pos))
            .collect()
    }

    /// Number of cells holding `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.cells
            .iter()
            .filter(|c| c.marker() == Some(marker))
            .count()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their 1-based number so a player can type it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => result.push_str(&(index + 1).to_string()),
                    Cell::Occupied(marker) => result.push(marker.symbol()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
