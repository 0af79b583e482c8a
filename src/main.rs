//! crosswise -- a tic-tac-toe engine speaking a line protocol (TTP).
//!
//! This binary reads commands from stdin and writes responses to stdout.

use std::io::{self, BufRead};

use crosswise::engine::Engine;
use crosswise::protocol::parser::{parse_command, Command};

/// Runs the main protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        let written = match cmd {
            Command::Ttp => engine.handle_ttp(&mut out),
            Command::IsReady => engine.handle_isready(&mut out),
            Command::SetOption { name, value } => {
                engine.set_option(&name, &value);
                Ok(())
            }
            Command::NewGame => {
                engine.new_game();
                Ok(())
            }
            Command::Position { notation } => {
                if let Err(e) = engine.set_position(&notation) {
                    eprintln!("failed to parse position: {}", e);
                }
                Ok(())
            }
            Command::SetMark { mark } => {
                engine.set_mark(mark);
                Ok(())
            }
            Command::Go => engine.handle_go(&mut out),
            Command::Quit => break,
        };

        if let Err(e) = written {
            eprintln!("output error: {}", e);
            break;
        }
    }
}
