//! Player marks.
//!
//! The two symbols that can occupy a cell. The engine never treats one mark
//! specially; every rule is expressed in terms of a mark and its opponent.

use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Cross,
    Nought,
}

/// Both marks, `Cross` first (it moves first in a standard game).
pub const ALL_MARKS: [Mark; 2] = [Mark::Cross, Mark::Nought];

impl Mark {
    /// Returns the other player's mark.
    pub const fn opponent(self) -> Mark {
        match self {
            Mark::Cross => Mark::Nought,
            Mark::Nought => Mark::Cross,
        }
    }

    /// Returns the lowercase full name of this mark.
    pub const fn name(self) -> &'static str {
        match self {
            Mark::Cross => "cross",
            Mark::Nought => "nought",
        }
    }

    /// Returns the single-character position notation for this mark.
    pub const fn notation_char(self) -> char {
        match self {
            Mark::Cross => 'x',
            Mark::Nought => 'o',
        }
    }

    /// Parses a mark from its notation character.
    pub fn from_notation_char(c: char) -> Option<Mark> {
        match c {
            'x' => Some(Mark::Cross),
            'o' => Some(Mark::Nought),
            _ => None,
        }
    }

    /// Parses a mark from either its full name or its notation character.
    pub fn from_name(name: &str) -> Option<Mark> {
        match name {
            "cross" | "x" => Some(Mark::Cross),
            "nought" | "o" => Some(Mark::Nought),
            _ => None,
        }
    }
}
