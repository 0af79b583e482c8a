//! Position notation.
//!
//! A compact single-token board encoding: three rows separated by `/`, each
//! row three cells written as `x`, `o` or `-` (empty), top row first.
//!
//! Example: `xx-/-o-/---` has crosses in cells 0 and 1 and a nought in 4.

use crate::board::{Board, BoardError, Mark, CELL_COUNT};

/// Errors that can occur during notation parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("expected 3 rows separated by '/', got {0}")]
    WrongRowCount(usize),

    #[error("row '{0}' must have exactly 3 cells")]
    WrongRowLength(String),

    #[error("invalid cell character: '{0}'")]
    InvalidCell(char),

    #[error(transparent)]
    Board(#[from] BoardError),
}

const EMPTY_CHAR: char = '-';

/// Parses a cell character.
fn parse_cell(c: char) -> Result<Option<Mark>, NotationError> {
    if c == EMPTY_CHAR {
        return Ok(None);
    }
    Mark::from_notation_char(c)
        .map(Some)
        .ok_or(NotationError::InvalidCell(c))
}

/// Parses a position string into a board.
pub fn parse_position(s: &str) -> Result<Board, NotationError> {
    let rows: Vec<&str> = s.trim().split('/').collect();
    if rows.len() != 3 {
        return Err(NotationError::WrongRowCount(rows.len()));
    }

    let mut cells = Vec::with_capacity(CELL_COUNT);
    for row in rows {
        if row.chars().count() != 3 {
            return Err(NotationError::WrongRowLength(row.to_string()));
        }
        for c in row.chars() {
            cells.push(parse_cell(c)?);
        }
    }

    Ok(Board::from_cells(&cells)?)
}

/// Encodes a board as a position string.
pub fn encode_position(board: &Board) -> String {
    let mut out = String::with_capacity(11);
    for (i, cell) in board.cells.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('/');
        }
        out.push(cell.map_or(EMPTY_CHAR, Mark::notation_char));
    }
    out
}
