//! Crosswise engine library.
//!
//! A deterministic tic-tac-toe move engine: board representation, successor
//! generation, heuristic evaluation and two-ply move selection, plus the
//! protocol and self-play modules used by the binaries.

pub mod board;
pub mod engine;
pub mod eval;
pub mod movegen;
pub mod protocol;
pub mod search;
pub mod selfplay;
