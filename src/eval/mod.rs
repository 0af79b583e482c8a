//! Position evaluation.
//!
//! Scores a board from a given mark's perspective by counting open
//! two-in-a-row and one-in-a-row lines for each side.

pub(crate) mod heuristic;

pub use heuristic::{evaluate, Fitness};
