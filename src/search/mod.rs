//! Search and move selection.
//!
//! Ranks every placement for the mark to move using the heuristic, adjusts
//! each by one ply of opponent replies, and returns the best cell.

pub mod evaluator;
pub mod lookahead;

pub use evaluator::MoveEvaluator;
pub use lookahead::{best_move, select_move, Candidate, SearchResult, TRAP_FITNESS};
