//! Winning lines.
//!
//! The eight fixed cell triples (three rows, three columns, two diagonals)
//! that decide a game. Indices follow the row-major cell layout.

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Number of winning lines.
pub const LINE_COUNT: usize = 8;

/// A line as three cell indices.
pub type Line = [usize; 3];

/// All winning lines: rows, then columns, then the main and anti diagonals.
pub const LINES: [Line; LINE_COUNT] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the row `i` (0..3).
#[inline]
pub const fn row(i: usize) -> Line {
    LINES[i]
}

/// Returns the column `i` (0..3).
#[inline]
pub const fn column(i: usize) -> Line {
    LINES[3 + i]
}

/// The diagonal from the top-left corner through the center.
pub const MAIN_DIAGONAL: Line = LINES[6];

/// The diagonal from the top-right corner through the center.
pub const ANTI_DIAGONAL: Line = LINES[7];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_line_is_strictly_ascending_and_in_range() {
        for line in LINES.iter() {
            assert!(line[0] < line[1] && line[1] < line[2]);
            assert!(line[2] < CELL_COUNT);
        }
    }

    #[test]
    fn cell_line_membership() {
        let mut membership = [0usize; CELL_COUNT];
        for line in LINES.iter() {
            for &c in line {
                membership[c] += 1;
            }
        }
        // Corners sit on 3 lines, edges on 2, the center on 4.
        assert_eq!(membership, [3, 2, 3, 2, 4, 2, 3, 2, 3]);
    }

    #[test]
    fn rows_and_columns_are_row_major() {
        for i in 0..3 {
            assert_eq!(row(i), [i * 3, i * 3 + 1, i * 3 + 2]);
            assert_eq!(column(i), [i, i + 3, i + 6]);
        }
        assert_eq!(MAIN_DIAGONAL, [0, 4, 8]);
        assert_eq!(ANTI_DIAGONAL, [2, 4, 6]);
    }
}
