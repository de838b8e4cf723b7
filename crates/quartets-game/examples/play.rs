//! Plays a Quartets session in the terminal.
//!
//! # Usage
//!
//! ```sh
//! cargo run -p quartets-game --example play
//! ```
//!
//! Type a word to select or deselect its tile. The other commands are:
//!
//! - `/submit` (or an empty line): check the selection
//! - `/shuffle`: redistribute the unsolved tiles
//! - `/clear`: deselect everything
//! - `/quit`: leave the game
//!
//! Load a puzzle file instead of the built-in one, replay a layout, or shorten
//! the lockout:
//!
//! ```sh
//! cargo run -p quartets-game --example play -- --puzzle puzzle.txt --seed <HEX> --penalty-secs 5
//! ```
//!
//! Set `RUST_LOG=debug` to see the engine's log output.

use std::{
    fs,
    io::{self, BufRead as _, Write as _},
    path::{Path, PathBuf},
    process,
    time::{Duration, Instant},
};

use clap::Parser;
use quartets_core::Puzzle;
use quartets_game::{DEFAULT_UNIT_PENALTY, Game, GameOptions, GameSeed, SubmitOutcome};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle file to play instead of the built-in puzzle.
    #[arg(long, value_name = "FILE")]
    puzzle: Option<PathBuf>,

    /// Seed for the shuffle random source, as 64 hex digits.
    #[arg(long, value_name = "HEX")]
    seed: Option<GameSeed>,

    /// Lockout after the first wrong guess, in seconds.
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_UNIT_PENALTY.as_secs())]
    penalty_secs: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let puzzle = match &args.puzzle {
        Some(path) => match load_puzzle(path) {
            Ok(puzzle) => puzzle,
            Err(message) => {
                eprintln!("{message}");
                process::exit(1);
            }
        },
        None => Puzzle::canonical(),
    };

    let mut options = GameOptions::default().unit_penalty(Duration::from_secs(args.penalty_secs));
    if let Some(seed) = args.seed {
        options = options.seed(seed);
    }
    let mut game = Game::new(puzzle, &options);
    println!("Seed: {}", game.seed());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print_board(&game);
        if game.is_won() {
            println!(
                "Solved! ({} wrong guesses)",
                game.lockout().failure_count()
            );
            return;
        }

        print!("> ");
        if io::stdout().flush().is_err() {
            return;
        }
        let Some(Ok(line)) = lines.next() else {
            return;
        };
        let input = line.trim();

        match input {
            "/quit" => return,
            "/clear" => game.clear_selection(),
            "/shuffle" => {
                game.shuffle();
            }
            "" | "/submit" => submit(&mut game),
            word => toggle(&mut game, word),
        }
    }
}

fn load_puzzle(path: &Path) -> Result<Puzzle, String> {
    let text = fs::read_to_string(path)
        .map_err(|err| format!("Failed to read {}: {err}", path.display()))?;
    text.parse()
        .map_err(|err| format!("Invalid puzzle in {}: {err}", path.display()))
}

fn toggle(game: &mut Game, word: &str) {
    let candidates: Vec<_> = game.puzzle().tiles_with_word(word).collect();
    if candidates.is_empty() {
        println!("No tile reads {word:?}.");
        return;
    }
    // prefer a selected tile so repeated words can be deselected
    let tile = candidates
        .iter()
        .copied()
        .find(|&tile| game.is_selected(tile))
        .or_else(|| {
            candidates
                .iter()
                .copied()
                .find(|&tile| game.grid().is_unsolved_tile(tile))
        })
        .unwrap_or(candidates[0]);
    if let Err(reason) = game.toggle_tile(tile) {
        println!("Cannot toggle {word}: {reason}.");
    }
}

fn submit(game: &mut Game) {
    let now = Instant::now();
    match game.submit(now) {
        Ok(SubmitOutcome::Solved { difficulty, .. }) => {
            println!("Correct! Found the {difficulty} group.");
        }
        Ok(SubmitOutcome::Mismatch { one_away, .. }) => {
            if one_away {
                println!("One away...");
            } else {
                println!("Not a group.");
            }
            println!(
                "Try again in {} minute(s).",
                game.remaining_minutes(now)
            );
        }
        Err(reason) => println!("Cannot submit: {reason}."),
    }
}

fn print_board(game: &Game) {
    println!();
    for row in game.grid().rows() {
        if let Some(group) = game.solved_group(row) {
            println!(
                "  [{}] {}: {}",
                group.difficulty(),
                group.name(),
                group.words().join(", ")
            );
            continue;
        }
        let cells: Vec<String> = row
            .tiles()
            .iter()
            .map(|&tile| {
                let word = game.puzzle().word(tile);
                if game.is_selected(tile) {
                    format!("*{word}*")
                } else {
                    word.to_owned()
                }
            })
            .collect();
        println!("  {}", cells.join("  "));
    }
    let now = Instant::now();
    if game.is_locked(now) {
        println!(
            "  (locked for {} more minute(s))",
            game.remaining_minutes(now)
        );
    }
}
