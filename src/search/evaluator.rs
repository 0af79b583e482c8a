//! Per-decision evaluator context.
//!
//! Bundles a board snapshot with the mark to move. The context is immutable:
//! the look-ahead passes the replying mark as a parameter, so one evaluator
//! can answer any number of times and always gives the same cell.

use crate::board::{Board, Mark};
use crate::eval::{evaluate, Fitness};
use crate::movegen::successors;

use super::lookahead::{select_move, SearchResult};

/// A board and the mark whose move is being decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEvaluator {
    board: Board,
    mark: Mark,
}

impl MoveEvaluator {
    /// Creates an evaluator over a copy of `board` for `mark`.
    pub fn new(board: Board, mark: Mark) -> Self {
        MoveEvaluator { board, mark }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The target mark: every score is taken from its side.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Successors of this evaluator's board for its mark.
    pub fn successors(&self) -> Vec<Board> {
        successors(&self.board, self.mark)
    }

    /// Scores an arbitrary board from the target mark's side.
    pub fn evaluate(&self, board: &Board) -> Fitness {
        evaluate(board, self.mark)
    }

    /// Runs the two-ply selection.
    pub fn search(&self) -> Option<SearchResult> {
        select_move(&self.board, self.mark)
    }

    /// Returns the chosen cell, or `None` on a full board.
    pub fn best_move(&self) -> Option<usize> {
        self.search().map(|r| r.cell)
    }
}
