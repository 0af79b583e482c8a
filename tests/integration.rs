//! Integration tests for the crosswise engine binary.
//!
//! Tests the full TTP session flow by spawning the engine process,
//! sending commands via stdin, and verifying stdout responses.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the engine and collects stdout lines.
fn run_engine(commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_crosswise");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start crosswise");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

fn bestmoves(lines: &[String]) -> Vec<&str> {
    lines
        .iter()
        .filter_map(|l| l.strip_prefix("bestmove "))
        .collect()
}

#[test]
fn handshake_with_protocol_version() {
    let lines = run_engine(&["ttp", "quit"]);

    assert!(lines.iter().any(|l| l == "id name crosswise"));
    assert!(lines.iter().any(|l| l == "protocol_version 1"));
    assert_eq!(lines.last().map(String::as_str), Some("ttpok"));

    let option_lines: Vec<&String> = lines.iter().filter(|l| l.starts_with("option ")).collect();
    assert_eq!(option_lines.len(), 2);
    for opt in &option_lines {
        assert!(opt.contains("type "), "option line missing type: {}", opt);
    }
}

#[test]
fn isready_response() {
    let lines = run_engine(&["isready", "quit"]);
    assert_eq!(lines, vec!["readyok".to_string()]);
}

#[test]
fn unknown_and_empty_lines_are_ignored() {
    let lines = run_engine(&["foobar", "", "  ", "setmark z", "position bad", "isready", "quit"]);
    assert_eq!(lines, vec!["readyok".to_string()]);
}

#[test]
fn go_completes_winning_row() {
    let lines = run_engine(&["newgame", "position xx-/---/---", "setmark x", "go", "quit"]);
    assert!(lines.iter().any(|l| l.starts_with("info candidates 7 ")));
    assert_eq!(bestmoves(&lines), vec!["2"]);
}

#[test]
fn go_completes_winning_column() {
    let lines = run_engine(&["position ---/--x/--x", "setmark x", "go", "quit"]);
    assert_eq!(bestmoves(&lines), vec!["2"]);
}

#[test]
fn go_on_full_board() {
    let lines = run_engine(&["position xox/xoo/oxx", "go", "quit"]);
    assert_eq!(lines, vec!["bestmove none".to_string()]);
}

#[test]
fn go_without_position_is_silent() {
    let lines = run_engine(&["go", "isready", "quit"]);
    assert_eq!(lines, vec!["readyok".to_string()]);
}

#[test]
fn repeated_go_is_deterministic() {
    let lines = run_engine(&[
        "position ---/---/---",
        "setmark x",
        "go",
        "newgame",
        "position ---/---/---",
        "setmark x",
        "go",
        "quit",
    ]);
    let moves = bestmoves(&lines);
    assert_eq!(moves.len(), 2);
    assert_eq!(moves[0], moves[1]);
    let cell: usize = moves[0].parse().unwrap();
    assert!(cell < 9);
}

#[test]
fn random_option_answers_with_empty_cell() {
    let lines = run_engine(&[
        "setoption name Random value true",
        "setoption name Seed value 99",
        "position xo-/-x-/--o",
        "go",
        "quit",
    ]);
    assert!(!lines.iter().any(|l| l.starts_with("info")));
    let moves = bestmoves(&lines);
    assert_eq!(moves.len(), 1);
    let cell: usize = moves[0].parse().unwrap();
    assert!([2, 3, 5, 6, 7].contains(&cell), "cell {} is occupied", cell);
}

#[test]
fn unsupported_options_leave_search_on() {
    let lines = run_engine(&[
        "setoption name Depth value 3",
        "setoption name Random value maybe",
        "setoption name Random",
        "position xx-/---/---",
        "setmark x",
        "go",
        "quit",
    ]);
    assert!(lines.iter().any(|l| l.starts_with("info candidates 7 ")));
    assert_eq!(bestmoves(&lines), vec!["2"]);
}

#[test]
fn option_names_ignore_case() {
    let lines = run_engine(&[
        "setoption name random value TRUE",
        "setoption name random value true",
        "position xx-/---/---",
        "go",
        "quit",
    ]);
    assert!(!lines.iter().any(|l| l.starts_with("info")));
    assert_eq!(bestmoves(&lines).len(), 1);
}

#[test]
fn quit_stops_processing() {
    let lines = run_engine(&["quit", "isready"]);
    assert!(lines.is_empty());
}
