//! Board representation and game-state types.
//!
//! Contains the marks, the fixed winning lines, and the nine-cell board
//! snapshot the engine decides over.

pub mod line;
pub mod mark;
pub mod state;

pub use line::{Line, ANTI_DIAGONAL, CELL_COUNT, LINES, LINE_COUNT, MAIN_DIAGONAL};
pub use mark::{Mark, ALL_MARKS};
pub use state::{Board, BoardError};
