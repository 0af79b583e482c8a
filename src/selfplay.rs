//! Random-versus-engine match play.
//!
//! Pits a uniformly random mover against the two-ply search and tallies
//! engine wins, random wins and ties. The harness owns the game: it applies
//! moves to its own board and detects three-in-a-row and full boards with
//! its own line scan.

use std::io::Write;
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::board::{Board, Mark, LINES};
use crate::movegen::random_move;
use crate::protocol::notation::encode_position;
use crate::search::best_move;

/// Configuration for a batch of games.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// The mark played by the engine; the other side moves at random.
    pub engine_mark: Mark,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy). Game `i` uses `seed + i`.
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 100,
            engine_mark: Mark::Nought,
            threads: 4,
            seed: 0,
            quiet: false,
        }
    }
}

/// How a game ended, from the harness's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Engine,
    Random,
    Tie,
}

/// A complete game record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub game_id: usize,
    pub engine_mark: Mark,
    /// Cells played in order, `Cross` first.
    pub moves: Vec<usize>,
    pub winner: Option<Mark>,
    pub outcome: Outcome,
    /// Final board in position notation.
    pub final_position: String,
}

/// Returns the mark holding a complete line, if any.
fn winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|line| {
        let first = board.get(line[0])?;
        line[1..]
            .iter()
            .all(|&c| board.get(c) == Some(first))
            .then_some(first)
    })
}

fn game_rng(config: &SelfPlayConfig, game_id: usize) -> SmallRng {
    if config.seed != 0 {
        SmallRng::seed_from_u64(config.seed.wrapping_add(game_id as u64))
    } else {
        SmallRng::from_entropy()
    }
}

/// Plays one game from the empty board.
pub fn play_game(config: &SelfPlayConfig, game_id: usize, rng: &mut SmallRng) -> GameRecord {
    let mut board = Board::empty();
    let mut to_move = Mark::Cross;
    let mut moves = Vec::with_capacity(9);

    while winner(&board).is_none() && !board.is_full() {
        let choice = if to_move == config.engine_mark {
            best_move(&board, to_move)
        } else {
            random_move(&board, rng)
        };
        let Some(cell) = choice else {
            break;
        };
        match board.place(cell, to_move) {
            Ok(true) => {}
            other => {
                eprintln!("game {}: rejected move {} ({:?})", game_id, cell, other);
                break;
            }
        }
        moves.push(cell);
        to_move = to_move.opponent();
    }

    let winner = winner(&board);
    let outcome = match winner {
        Some(m) if m == config.engine_mark => Outcome::Engine,
        Some(_) => Outcome::Random,
        None => Outcome::Tie,
    };

    GameRecord {
        game_id,
        engine_mark: config.engine_mark,
        moves,
        winner,
        outcome,
        final_position: encode_position(&board),
    }
}

fn play_logged(config: &SelfPlayConfig, game_id: usize) -> GameRecord {
    let mut rng = game_rng(config, game_id);
    let start = Instant::now();
    let game = play_game(config, game_id, &mut rng);
    if !config.quiet {
        eprintln!(
            "Game {}/{}: {:?} in {} moves ({:.2}ms)",
            game_id + 1,
            config.num_games,
            game.outcome,
            game.moves.len(),
            start.elapsed().as_secs_f64() * 1000.0,
        );
    }
    game
}

/// Plays `config.num_games` games, in parallel when `threads > 1`.
///
/// Records come back ordered by game id either way.
pub fn run_self_play(config: &SelfPlayConfig) -> Result<Vec<GameRecord>, rayon::ThreadPoolBuildError> {
    if config.threads <= 1 {
        return Ok((0..config.num_games)
            .map(|i| play_logged(config, i))
            .collect());
    }

    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;
    Ok(pool.install(|| {
        (0..config.num_games)
            .into_par_iter()
            .map(|i| play_logged(config, i))
            .collect()
    }))
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Aggregate results of a batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub engine_wins: usize,
    pub random_wins: usize,
    pub ties: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.engine_wins + self.random_wins + self.ties
    }

    fn pct(&self, n: usize) -> f64 {
        100.0 * n as f64 / self.total().max(1) as f64
    }
}

/// Counts outcomes across games.
pub fn tally(games: &[GameRecord]) -> Tally {
    let mut t = Tally::default();
    for game in games {
        match game.outcome {
            Outcome::Engine => t.engine_wins += 1,
            Outcome::Random => t.random_wins += 1,
            Outcome::Tie => t.ties += 1,
        }
    }
    t
}

/// Prints a summary of results to stderr.
pub fn print_summary(games: &[GameRecord], engine_mark: Mark) {
    let t = tally(games);
    eprintln!("=== Self-Play Summary ===");
    eprintln!("Games: {}", t.total());
    eprintln!(
        "Random ({}) wins: {} ({:.2}%)",
        engine_mark.opponent().name(),
        t.random_wins,
        t.pct(t.random_wins)
    );
    eprintln!(
        "Engine ({}) wins: {} ({:.2}%)",
        engine_mark.name(),
        t.engine_wins,
        t.pct(t.engine_wins)
    );
    eprintln!("Ties: {} ({:.2}%)", t.ties, t.pct(t.ties));
}
