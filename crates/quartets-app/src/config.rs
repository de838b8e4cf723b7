//! Command-line configuration.

use std::{fs, path::PathBuf, time::Duration};

use clap::Parser;
use quartets_core::Puzzle;
use quartets_game::{DEFAULT_UNIT_PENALTY, GameOptions, GameSeed};

use crate::AppError;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Puzzle file to play instead of the built-in puzzle.
    #[arg(long, value_name = "FILE")]
    pub puzzle: Option<PathBuf>,

    /// Seed for the shuffle random source, as 64 hex digits.
    #[arg(long, value_name = "HEX")]
    pub seed: Option<GameSeed>,

    /// Lockout after the first wrong guess, in seconds.
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_UNIT_PENALTY.as_secs())]
    pub penalty_secs: u64,
}

impl Args {
    #[must_use]
    pub fn game_options(&self) -> GameOptions {
        let options = GameOptions::default().unit_penalty(Duration::from_secs(self.penalty_secs));
        match self.seed {
            Some(seed) => options.seed(seed),
            None => options,
        }
    }

    /// Reads the puzzle file, or returns the built-in puzzle if none was given.
    pub fn load_puzzle(&self) -> Result<Puzzle, AppError> {
        let Some(path) = &self.puzzle else {
            return Ok(Puzzle::canonical());
        };
        let text = fs::read_to_string(path).map_err(|error| AppError::ReadPuzzle {
            path: path.clone(),
            error,
        })?;
        text.parse().map_err(|error| AppError::ParsePuzzle {
            path: path.clone(),
            error,
        })
    }
}
