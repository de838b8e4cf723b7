//! Game session management for the Quartets word-grouping puzzle.
//!
//! [`Game`] is the puzzle engine: it owns the tile layout, the player's
//! [`Selection`], the [`Lockout`] clock and the won flag, and exposes the
//! operations a presentation layer drives:
//!
//! - [`Game::toggle_tile`] and [`Game::clear_selection`] edit the selection,
//! - [`Game::shuffle`] redistributes unsolved tiles,
//! - [`Game::submit`] checks the selection against the solution groups.
//!
//! Operations that do not apply in the current state (a fifth tile, a
//! submission during lockout, anything after the win) leave the session
//! untouched and return a block reason. Time is always passed in by the
//! caller, so a renderer only needs to poll [`Game::is_locked`] to re-enable
//! its submit control.

mod game;
mod lockout;
mod operation;
mod options;
mod seed;
mod selection;

pub use self::{
    game::Game,
    lockout::{DEFAULT_UNIT_PENALTY, Lockout, MAX_PENALTY},
    operation::{SelectionOperation, SubmitBlockReason, SubmitOutcome, ToggleBlockReason},
    options::GameOptions,
    seed::{GameSeed, ParseSeedError},
    selection::Selection,
};
