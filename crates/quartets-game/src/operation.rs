use std::time::{Duration, Instant};

use quartets_core::Difficulty;

/// The change a tile toggle makes to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectionOperation {
    /// The tile was added.
    Selected,
    /// The tile was removed.
    Deselected,
}

/// Why a tile toggle was ignored.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum ToggleBlockReason {
    /// Every group has been found.
    #[display("the puzzle is already solved")]
    GameWon,
    /// The tile belongs to a solved row.
    #[display("the tile is in a solved row")]
    SolvedTile,
    /// Four other tiles are already selected.
    #[display("four tiles are already selected")]
    SelectionFull,
}

/// Why a submission was rejected without being evaluated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum SubmitBlockReason {
    /// Every group has been found.
    #[display("the puzzle is already solved")]
    GameWon,
    /// Fewer than four tiles are selected.
    #[display("select four tiles to submit ({selected} selected)")]
    IncompleteSelection {
        /// Number of selected tiles.
        selected: usize,
    },
    /// A wrong guess locked submissions.
    #[display("submissions are locked for {remaining:?}")]
    Locked {
        /// Time left until submissions are accepted again.
        remaining: Duration,
    },
}

/// The result of an evaluated submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SubmitOutcome {
    /// The selection matched a group, which is now a solved row.
    Solved {
        /// Difficulty of the matched group.
        difficulty: Difficulty,
        /// `true` when this was the last group.
        won: bool,
    },
    /// The selection did not match; a failure was recorded.
    Mismatch {
        /// Total failures so far, including this one.
        failures: usize,
        /// Earliest instant the next submission is accepted.
        allow_after: Instant,
        /// `true` when three of the four tiles belong to the same group.
        one_away: bool,
    },
}
