//! Two-ply move selection.
//!
//! Scores every placement for the mark to move, then looks one ply ahead:
//! each candidate is penalized by the summed value of every reply available
//! to the opponent, scored from the opponent's side. The best adjusted
//! candidate wins, with one tie-break for a known trap shape.

use crate::board::{Board, Mark};
use crate::eval::{evaluate, Fitness};
use crate::movegen::{placements, successors};

/// Adjusted fitness at which two equally ranked leaders are treated as a
/// trap. Tied to the diagonal weighting in the heuristic.
pub const TRAP_FITNESS: Fitness = Fitness::Score(110);

/// A first-ply placement under consideration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub cell: usize,
    pub board: Board,
    pub fitness: Fitness,
}

/// Result of a selection: the chosen cell and the final ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub cell: usize,
    pub fitness: Fitness,
    /// Candidates after look-ahead, best first.
    pub ranked: Vec<Candidate>,
    /// Boards scored across both plies.
    pub nodes: u64,
}

/// Returns the cell `mark` should play on `board`, or `None` if it is full.
pub fn best_move(board: &Board, mark: Mark) -> Option<usize> {
    select_move(board, mark).map(|r| r.cell)
}

/// Runs the full two-ply selection for `mark` on `board`.
///
/// `board` is never modified. Returns `None` when no empty cell remains.
pub fn select_move(board: &Board, mark: Mark) -> Option<SearchResult> {
    let mut candidates: Vec<Candidate> = placements(board, mark)
        .map(|(cell, next)| Candidate {
            cell,
            board: next,
            fitness: evaluate(&next, mark),
        })
        .collect();
    if candidates.is_empty() {
        return None;
    }
    let mut nodes = candidates.len() as u64;

    rank(&mut candidates);

    let replier = mark.opponent();
    for candidate in candidates.iter_mut() {
        let (fitness, scored) = penalize_replies(candidate, replier);
        candidate.fitness = fitness;
        nodes += scored;
    }

    rank(&mut candidates);

    let chosen = *pick(&candidates)?;
    Some(SearchResult {
        cell: chosen.cell,
        fitness: chosen.fitness,
        ranked: candidates,
        nodes,
    })
}

/// Stable descending sort; equal candidates keep their current order.
fn rank(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| b.fitness.cmp(&a.fitness));
}

/// Subtracts the summed reply values from a candidate's fitness.
///
/// Replies are scored from `replier`'s side. A decided candidate keeps its
/// value; a reply that completes a line decides the candidate outright.
/// Returns the adjusted fitness and the number of replies scored.
fn penalize_replies(candidate: &Candidate, replier: Mark) -> (Fitness, u64) {
    let base = match candidate.fitness {
        Fitness::Score(s) => s,
        decided => return (decided, 0),
    };

    let mut sum = 0i32;
    let mut scored = 0u64;
    for reply in successors(&candidate.board, replier) {
        scored += 1;
        match evaluate(&reply, replier) {
            Fitness::Win => return (Fitness::Loss, scored),
            Fitness::Loss => return (Fitness::Win, scored),
            Fitness::Score(s) => sum += s,
        }
    }
    (Fitness::Score(base - sum), scored)
}

/// Picks the winner from a ranked list.
///
/// When the top two are both exactly [`TRAP_FITNESS`], the third is taken
/// instead (or the first, if there is no third).
fn pick(ranked: &[Candidate]) -> Option<&Candidate> {
    match ranked {
        [first, second, third, ..]
            if first.fitness == TRAP_FITNESS && second.fitness == TRAP_FITNESS =>
        {
            Some(third)
        }
        _ => ranked.first(),
    }
}
