//! Legal move generation.
//!
//! Enumerates the boards reachable by placing one mark in any empty cell,
//! always in ascending cell order. The search relies on that order to break
//! ties between equally scored candidates.

use rand::Rng;

use crate::board::{Board, Mark, CELL_COUNT};

/// Returns the empty cells of `board` in ascending order.
pub fn empty_cells(board: &Board) -> Vec<usize> {
    (0..CELL_COUNT).filter(|&c| board.is_empty_cell(c)).collect()
}

/// Yields `(cell, successor)` for every empty cell, ascending.
///
/// Each successor is a fresh copy of `board` with `mark` placed in `cell`.
pub fn placements(board: &Board, mark: Mark) -> impl Iterator<Item = (usize, Board)> + '_ {
    (0..CELL_COUNT)
        .filter(move |&c| board.is_empty_cell(c))
        .map(move |c| (c, board.with_mark(c, mark)))
}

/// Returns every board reachable by placing `mark` in one empty cell.
///
/// A full board yields an empty vector.
pub fn successors(board: &Board, mark: Mark) -> Vec<Board> {
    placements(board, mark).map(|(_, b)| b).collect()
}

/// Picks a uniformly random empty cell, or `None` on a full board.
pub fn random_move(board: &Board, rng: &mut impl Rng) -> Option<usize> {
    let legal = empty_cells(board);
    if legal.is_empty() {
        return None;
    }
    Some(legal[rng.gen_range(0..legal.len())])
}
