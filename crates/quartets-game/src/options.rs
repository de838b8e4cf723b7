use std::time::Duration;

use crate::{GameSeed, lockout::DEFAULT_UNIT_PENALTY};

/// Options applied when a [`Game`](crate::Game) is created.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use quartets_game::{GameOptions, GameSeed};
///
/// let options = GameOptions::default()
///     .unit_penalty(Duration::from_secs(30))
///     .seed(GameSeed::from_bytes([0; 32]))
///     .initial_shuffle(false);
/// assert_eq!(options.unit_penalty, Duration::from_secs(30));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Lockout added per recorded failure.
    pub unit_penalty: Duration,
    /// Seed for the shuffle random source; a random seed is drawn when `None`.
    pub seed: Option<GameSeed>,
    /// Whether the grid is shuffled once when the session starts.
    pub initial_shuffle: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            unit_penalty: DEFAULT_UNIT_PENALTY,
            seed: None,
            initial_shuffle: true,
        }
    }
}

impl GameOptions {
    /// Sets the lockout added per recorded failure.
    #[must_use]
    pub fn unit_penalty(mut self, unit_penalty: Duration) -> Self {
        self.unit_penalty = unit_penalty;
        self
    }

    /// Fixes the shuffle seed.
    #[must_use]
    pub fn seed(mut self, seed: GameSeed) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables the shuffle at session start.
    #[must_use]
    pub fn initial_shuffle(mut self, initial_shuffle: bool) -> Self {
        self.initial_shuffle = initial_shuffle;
        self
    }
}
