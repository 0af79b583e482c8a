//! TTP command parser.
//!
//! Parses incoming protocol commands from raw text into structured
//! `Command` variants that the engine main loop can dispatch on.

use crate::board::Mark;
use crate::engine::{OPTION_RANDOM, OPTION_SEED};

/// A parsed client-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initialize the protocol handshake.
    Ttp,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set one of the engine options to a checked value.
    SetOption { name: String, value: String },

    /// Reset engine state for a new game.
    NewGame,

    /// Set the board from a position string.
    Position { notation: String },

    /// Set the mark the engine moves for.
    SetMark { mark: Mark },

    /// Choose a cell for the current position.
    Go,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let first = *tokens.first()?;

    match first {
        "ttp" => Some(Command::Ttp),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "newgame" => Some(Command::NewGame),
        "go" => {
            if tokens.len() > 1 {
                eprintln!("ignoring go arguments: {}", tokens[1..].join(" "));
            }
            Some(Command::Go)
        }

        "setoption" => parse_setoption(&tokens),
        "position" => parse_position(&tokens),
        "setmark" => parse_setmark(&tokens),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <Random|Seed> value <x>`.
///
/// Option names match case-insensitively and come back in their canonical
/// spelling. `Random` takes `true` or `false`; `Seed` takes an unsigned
/// integer.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    let (id, raw) = match tokens {
        [_, "name", id, "value", raw] => (*id, *raw),
        _ => {
            eprintln!("malformed setoption: expected 'setoption name <Random|Seed> value <x>'");
            return None;
        }
    };

    let (name, valid) = if id.eq_ignore_ascii_case(OPTION_RANDOM) {
        (OPTION_RANDOM, raw.parse::<bool>().is_ok())
    } else if id.eq_ignore_ascii_case(OPTION_SEED) {
        (OPTION_SEED, raw.parse::<u64>().is_ok())
    } else {
        eprintln!("unknown option '{}': crosswise knows Random and Seed", id);
        return None;
    };
    if !valid {
        eprintln!("bad value '{}' for option {}", raw, name);
        return None;
    }

    Some(Command::SetOption {
        name: name.to_string(),
        value: raw.to_string(),
    })
}

/// Parses `position <notation>`.
fn parse_position(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        eprintln!("malformed position: expected 'position <notation>'");
        return None;
    }
    Some(Command::Position {
        notation: tokens[1].to_string(),
    })
}

/// Parses `setmark <mark>`.
fn parse_setmark(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed setmark: expected 'setmark <x|o>'");
        return None;
    }
    match Mark::from_name(tokens[1]) {
        Some(mark) => Some(Command::SetMark { mark }),
        None => {
            eprintln!("unknown mark: '{}'", tokens[1]);
            None
        }
    }
}
