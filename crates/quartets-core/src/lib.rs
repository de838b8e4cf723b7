//! Core data structures for the Quartets word-grouping puzzle.
//!
//! A puzzle consists of sixteen words hidden in four groups of four. This
//! crate provides the static puzzle definition and the tile layout that the
//! game engine mutates.
//!
//! # Overview
//!
//! - [`difficulty`]: the four difficulty tiers of solution groups
//! - [`puzzle`]: solution groups, the puzzle definition and its text format
//! - [`tile`]: [`TileId`], a stable handle identifying a tile by slot
//! - [`grid`]: [`TileRow`] and [`TileGrid`], including the shuffle engine
//!
//! # Examples
//!
//! ```
//! use quartets_core::{Puzzle, TileGrid};
//!
//! let puzzle = Puzzle::canonical();
//! let grid = TileGrid::new();
//!
//! let words: Vec<&str> = grid.rows()[0]
//!     .tiles()
//!     .iter()
//!     .map(|&tile| puzzle.word(tile))
//!     .collect();
//! assert_eq!(words, ["MARK", "PATSY", "PIGEON", "SAP"]);
//! ```

pub mod difficulty;
pub mod grid;
pub mod puzzle;
pub mod tile;

pub use self::{
    difficulty::{Difficulty, ParseDifficultyError},
    grid::{TileGrid, TileRow},
    puzzle::{Puzzle, PuzzleError, PuzzleParseError, SolutionGroup},
    tile::TileId,
};

/// Number of solution groups in a puzzle.
pub const GROUP_COUNT: usize = 4;

/// Number of words in a group, and of tiles in a row.
pub const GROUP_SIZE: usize = 4;

/// Number of tiles in a puzzle.
pub const TILE_COUNT: usize = GROUP_COUNT * GROUP_SIZE;
