//! Board state representation.
//!
//! A snapshot of the nine cells. Boards are small `Copy` values: trying a
//! move produces a new board and never touches the caller's copy.

use serde::{Deserialize, Serialize};

use super::line::CELL_COUNT;
use super::mark::Mark;

/// Errors raised when building a board from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board: expected 9 cells, got {0}")]
    WrongCellCount(usize),

    #[error("invalid board: cell index {0} out of range")]
    CellOutOfRange(usize),
}

/// Complete board state at a point in time.
///
/// Cells are row-major (`index = row * 3 + col`); `None` is an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    /// Creates a board with every cell empty.
    pub const fn empty() -> Self {
        Board {
            cells: [None; CELL_COUNT],
        }
    }

    /// Builds a board from a slice of cells, rejecting anything but nine.
    pub fn from_cells(cells: &[Option<Mark>]) -> Result<Self, BoardError> {
        let cells: [Option<Mark>; CELL_COUNT] = cells
            .try_into()
            .map_err(|_| BoardError::WrongCellCount(cells.len()))?;
        Ok(Board { cells })
    }

    /// Returns the occupant of a cell, or `None` if it is empty or off the
    /// board.
    #[inline]
    pub fn get(&self, cell: usize) -> Option<Mark> {
        self.cells.get(cell).copied().flatten()
    }

    /// Returns true if the cell is on the board and holds no mark.
    #[inline]
    pub fn is_empty_cell(&self, cell: usize) -> bool {
        matches!(self.cells.get(cell), Some(None))
    }

    /// Places a mark on the board. Returns `Ok(false)` if the cell is occupied.
    pub fn place(&mut self, cell: usize, mark: Mark) -> Result<bool, BoardError> {
        let slot = self
            .cells
            .get_mut(cell)
            .ok_or(BoardError::CellOutOfRange(cell))?;
        if slot.is_some() {
            return Ok(false);
        }
        *slot = Some(mark);
        Ok(true)
    }

    /// Returns a copy of this board with `mark` written into `cell`.
    #[inline]
    pub fn with_mark(&self, cell: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[cell] = Some(mark);
        next
    }

    /// Counts the cells holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|c| **c == Some(mark)).count()
    }

    /// Counts the empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Returns true if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Returns the board with every mark swapped for its opponent.
    pub fn relabeled(&self) -> Board {
        let mut next = *self;
        for cell in next.cells.iter_mut() {
            *cell = cell.map(Mark::opponent);
        }
        next
    }

    /// Infers whose turn it is, assuming `Cross` moved first.
    pub fn side_to_move(&self) -> Mark {
        if self.count(Mark::Cross) > self.count(Mark::Nought) {
            Mark::Nought
        } else {
            Mark::Cross
        }
    }
}
