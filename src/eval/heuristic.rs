//! Heuristic position evaluation.
//!
//! Scores a board from a fixed target mark's perspective by tallying open
//! lines: a line holding two of one mark and one empty cell is a
//! two-in-a-row, a line holding one mark and two empty cells is a
//! one-in-a-row. Each two-in-a-row is worth 10, each one-in-a-row 1, and the
//! opponent's tally is subtracted from the target's.
//!
//! Lines are visited in three passes of (row `i`, column `i`, main diagonal,
//! anti-diagonal), so both diagonals are counted three times while rows and
//! columns are counted once. Move rankings and the selection tie-break
//! constant depend on that weighting.

use std::fmt;
use std::ops::Neg;

use crate::board::line::{column, row, Line, ANTI_DIAGONAL, MAIN_DIAGONAL};
use crate::board::{Board, Mark};

/// Weight of a two-in-a-row relative to a one-in-a-row.
const TWO_IN_A_ROW_WEIGHT: i32 = 10;

/// Order in which lines are visited; the first complete line decides.
const SCAN_ORDER: [Line; 12] = [
    row(0),
    column(0),
    MAIN_DIAGONAL,
    ANTI_DIAGONAL,
    row(1),
    column(1),
    MAIN_DIAGONAL,
    ANTI_DIAGONAL,
    row(2),
    column(2),
    MAIN_DIAGONAL,
    ANTI_DIAGONAL,
];

/// The heuristic value of a board for one mark.
///
/// `Loss` and `Win` stand in for negative and positive infinity: a board
/// holding a complete line. Ordering is `Loss < Score(_) < Win`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Fitness {
    Loss,
    Score(i32),
    Win,
}

impl Fitness {
    /// Returns true for `Win` and `Loss`.
    pub const fn is_decided(self) -> bool {
        matches!(self, Fitness::Win | Fitness::Loss)
    }
}

impl Neg for Fitness {
    type Output = Fitness;

    fn neg(self) -> Fitness {
        match self {
            Fitness::Loss => Fitness::Win,
            Fitness::Score(s) => Fitness::Score(-s),
            Fitness::Win => Fitness::Loss,
        }
    }
}

impl fmt::Display for Fitness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fitness::Loss => write!(f, "loss"),
            Fitness::Score(s) => write!(f, "{}", s),
            Fitness::Win => write!(f, "win"),
        }
    }
}

/// Open-line counts per mark, indexed by [`slot`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct LineTally {
    two: [i32; 2],
    one: [i32; 2],
}

impl LineTally {
    fn score(&self, mark: Mark) -> i32 {
        let i = slot(mark);
        TWO_IN_A_ROW_WEIGHT * self.two[i] + self.one[i]
    }
}

#[inline]
fn slot(mark: Mark) -> usize {
    match mark {
        Mark::Cross => 0,
        Mark::Nought => 1,
    }
}

/// What a single line says about the position.
enum LineState {
    Complete(Mark),
    Two(Mark),
    One(Mark),
    Dead,
}

#[inline]
fn classify(board: &Board, line: &Line) -> LineState {
    let mut empties = 0;
    let mut counts = [0u8; 2];
    for &cell in line {
        match board.get(cell) {
            Some(m) => counts[slot(m)] += 1,
            None => empties += 1,
        }
    }

    let sole_mark = match counts {
        [n, 0] if n > 0 => Mark::Cross,
        [0, n] if n > 0 => Mark::Nought,
        _ => return LineState::Dead,
    };
    match empties {
        0 => LineState::Complete(sole_mark),
        1 => LineState::Two(sole_mark),
        2 => LineState::One(sole_mark),
        _ => LineState::Dead,
    }
}

/// Evaluates `board` from `target`'s perspective.
///
/// Returns `Win`/`Loss` as soon as a complete line is found, otherwise the
/// difference between the target's and the opponent's open-line scores.
pub fn evaluate(board: &Board, target: Mark) -> Fitness {
    let mut tally = LineTally::default();

    for line in SCAN_ORDER.iter() {
        match classify(board, line) {
            LineState::Complete(m) if m == target => return Fitness::Win,
            LineState::Complete(_) => return Fitness::Loss,
            LineState::Two(m) => tally.two[slot(m)] += 1,
            LineState::One(m) => tally.one[slot(m)] += 1,
            LineState::Dead => {}
        }
    }

    Fitness::Score(tally.score(target) - tally.score(target.opponent()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ALL_MARKS;

    const X: Option<Mark> = Some(Mark::Cross);
    const O: Option<Mark> = Some(Mark::Nought);
    const E: Option<Mark> = None;

    fn board(cells: [Option<Mark>; 9]) -> Board {
        Board { cells }
    }

    #[test]
    fn empty_board_is_neutral() {
        for m in ALL_MARKS {
            assert_eq!(evaluate(&Board::empty(), m), Fitness::Score(0));
        }
    }

    #[test]
    fn lone_marks_score_by_lines_through_them() {
        // Center: row, column, and both diagonals three times each.
        let center = board([E, E, E, E, X, E, E, E, E]);
        assert_eq!(evaluate(&center, Mark::Cross), Fitness::Score(8));
        assert_eq!(evaluate(&center, Mark::Nought), Fitness::Score(-8));

        let corner = board([X, E, E, E, E, E, E, E, E]);
        assert_eq!(evaluate(&corner, Mark::Cross), Fitness::Score(5));

        let edge = board([E, X, E, E, E, E, E, E, E]);
        assert_eq!(evaluate(&edge, Mark::Cross), Fitness::Score(2));
    }

    #[test]
    fn two_in_a_row_on_a_row() {
        // row 0 two (10), column 0 one, column 1 one, main diagonal one x3.
        let b = board([X, X, E, E, E, E, E, E, E]);
        assert_eq!(evaluate(&b, Mark::Cross), Fitness::Score(15));
        assert_eq!(evaluate(&b, Mark::Nought), Fitness::Score(-15));
    }

    #[test]
    fn two_in_a_row_on_a_diagonal_counts_three_times() {
        // main diagonal two x3 (30), row 0, column 0, row 1, column 1 one
        // each, anti-diagonal one x3.
        let b = board([X, E, E, E, X, E, E, E, E]);
        assert_eq!(evaluate(&b, Mark::Cross), Fitness::Score(37));
    }

    #[test]
    fn mixed_lines_contribute_nothing() {
        // row 0 is blocked; X keeps column 0 and the main diagonal (x3),
        // O keeps column 1.
        let b = board([X, O, E, E, E, E, E, E, E]);
        assert_eq!(evaluate(&b, Mark::Cross), Fitness::Score(3));
        assert_eq!(evaluate(&b, Mark::Nought), Fitness::Score(-3));
    }

    #[test]
    fn complete_line_is_decisive() {
        let row_win = board([X, X, X, O, O, E, E, E, E]);
        assert_eq!(evaluate(&row_win, Mark::Cross), Fitness::Win);
        assert_eq!(evaluate(&row_win, Mark::Nought), Fitness::Loss);

        let column_win = board([X, E, O, X, E, O, E, X, O]);
        assert_eq!(evaluate(&column_win, Mark::Cross), Fitness::Loss);
        assert_eq!(evaluate(&column_win, Mark::Nought), Fitness::Win);

        let diagonal_win = board([O, X, X, E, X, O, X, E, O]);
        assert_eq!(evaluate(&diagonal_win, Mark::Cross), Fitness::Win);
    }

    #[test]
    fn first_complete_line_in_scan_order_decides() {
        // Not reachable in play, but the scan must stay deterministic.
        let both = board([X, X, X, O, O, O, E, E, E]);
        assert_eq!(evaluate(&both, Mark::Cross), Fitness::Win);
        assert_eq!(evaluate(&both.relabeled(), Mark::Cross), Fitness::Loss);
    }

    #[test]
    fn full_board_without_line_sums_nothing() {
        let draw = board([X, O, X, X, O, O, O, X, X]);
        assert_eq!(evaluate(&draw, Mark::Cross), Fitness::Score(0));
    }

    #[test]
    fn relabeling_is_symmetric() {
        let boards = [
            board([X, E, E, E, O, E, E, E, X]),
            board([X, X, E, O, E, E, E, E, O]),
            board([E, O, E, X, X, E, E, E, E]),
            board([X, X, X, O, O, E, E, E, E]),
        ];
        for b in boards.iter() {
            for m in ALL_MARKS {
                assert_eq!(evaluate(b, m), evaluate(&b.relabeled(), m.opponent()));
                assert_eq!(evaluate(b, m), -evaluate(&b.relabeled(), m));
                assert_eq!(evaluate(b, m), -evaluate(b, m.opponent()));
            }
        }
    }

    #[test]
    fn fitness_ordering() {
        assert!(Fitness::Loss < Fitness::Score(i32::MIN));
        assert!(Fitness::Score(-5) < Fitness::Score(3));
        assert!(Fitness::Score(i32::MAX) < Fitness::Win);
        assert!(Fitness::Win.is_decided());
        assert!(!Fitness::Score(0).is_decided());
        assert_eq!(-Fitness::Win, Fitness::Loss);
    }

    #[test]
    fn fitness_display() {
        assert_eq!(Fitness::Win.to_string(), "win");
        assert_eq!(Fitness::Loss.to_string(), "loss");
        assert_eq!(Fitness::Score(-12).to_string(), "-12");
    }
}
