use quartets_core::{Difficulty, TileId};

pub mod controls;
pub mod game_screen;
pub mod grid;
pub mod input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleTile(TileId),
    Shuffle,
    ClearSelection,
    Submit,
}

/// Result of the last submission, shown until the selection changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Found(Difficulty),
    OneAway,
    NotAGroup,
}
