//! Engine state management.
//!
//! Holds the current board position, the mark to move, and engine options,
//! and answers the `go` command with either the two-ply search or a random
//! empty cell when the `Random` option is on.

use std::collections::HashMap;
use std::io::{self, Write};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::{Board, Mark};
use crate::movegen::random_move;
use crate::protocol::notation::{parse_position, NotationError};
use crate::search::select_move;

/// Option name: answer `go` with a random empty cell.
pub const OPTION_RANDOM: &str = "Random";

/// Option name: seed for the random mover (0 draws from entropy).
pub const OPTION_SEED: &str = "Seed";

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub position: Option<Board>,
    pub mark: Option<Mark>,
    pub options: HashMap<String, String>,
    rng: SmallRng,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates a new engine with no position or mark.
    pub fn new() -> Self {
        Engine {
            position: None,
            mark: None,
            options: HashMap::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Resets the position and mark for a new game. Options are kept.
    pub fn new_game(&mut self) {
        self.position = None;
        self.mark = None;
    }

    /// Sets the current board from a position string.
    pub fn set_position(&mut self, notation: &str) -> Result<(), NotationError> {
        self.position = Some(parse_position(notation)?);
        Ok(())
    }

    /// Sets the mark the engine moves for.
    pub fn set_mark(&mut self, mark: Mark) {
        self.mark = Some(mark);
    }

    /// Sets an engine option. Setting `Seed` reseeds the random mover.
    pub fn set_option(&mut self, name: &str, value: &str) {
        if name == OPTION_SEED {
            self.rng = match value.parse::<u64>() {
                Ok(0) => SmallRng::from_entropy(),
                Ok(seed) => SmallRng::seed_from_u64(seed),
                Err(_) => {
                    eprintln!("invalid Seed value: '{}'", value);
                    return;
                }
            };
        }
        self.options.insert(name.to_string(), value.to_string());
    }

    /// Returns whether the `Random` option is on (default off).
    fn random_enabled(&self) -> bool {
        self.options
            .get(OPTION_RANDOM)
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false)
    }

    /// Handles the handshake: writes id, options, protocol_version, and ttpok.
    pub fn handle_ttp<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name crosswise")?;
        writeln!(out, "id author crosswise")?;
        writeln!(out, "option name {} type check default false", OPTION_RANDOM)?;
        writeln!(
            out,
            "option name {} type spin default 0 min 0 max {}",
            OPTION_SEED,
            u64::MAX
        )?;
        writeln!(out, "protocol_version 1")?;
        writeln!(out, "ttpok")?;
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Handles the `go` command.
    ///
    /// Without an explicit mark, the side to move is inferred from the mark
    /// counts. A full board answers `bestmove none`.
    pub fn handle_go<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let board = match self.position {
            Some(b) => b,
            None => {
                eprintln!("go: no position set");
                return Ok(());
            }
        };
        let mark = self.mark.unwrap_or_else(|| board.side_to_move());

        let cell = if self.random_enabled() {
            random_move(&board, &mut self.rng)
        } else {
            match select_move(&board, mark) {
                Some(result) => {
                    writeln!(
                        out,
                        "info candidates {} nodes {} score {}",
                        result.ranked.len(),
                        result.nodes,
                        result.fitness
                    )?;
                    Some(result.cell)
                }
                None => None,
            }
        };

        match cell {
            Some(c) => writeln!(out, "bestmove {}", c)?,
            None => writeln!(out, "bestmove none")?,
        }
        out.flush()
    }
}
