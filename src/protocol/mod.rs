//! TTP protocol handling.
//!
//! Parsing and serialization for the engine's line protocol: the position
//! notation and the command parser for the main loop.

pub mod notation;
pub mod parser;

pub use notation::{encode_position, parse_position, NotationError};
pub use parser::{parse_command, Command};
