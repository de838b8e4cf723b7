//! Difficulty tiers of solution groups.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// The difficulty tier of a solution group.
///
/// There are exactly four tiers, one per group of a puzzle. Each tier has a
/// conventional color used when a solved row is drawn.
///
/// # Examples
///
/// ```
/// use quartets_core::Difficulty;
///
/// assert_eq!(Difficulty::Yellow.tier(), 1);
/// assert_eq!(Difficulty::from_tier(4), Difficulty::Purple);
/// assert!(Difficulty::Green < Difficulty::Blue);
///
/// let parsed: Difficulty = "blue".parse().unwrap();
/// assert_eq!(parsed, Difficulty::Blue);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Difficulty {
    /// Tier 1, the most straightforward group.
    Yellow = 1,
    /// Tier 2.
    Green = 2,
    /// Tier 3.
    Blue = 3,
    /// Tier 4, the trickiest group.
    Purple = 4,
}

impl Difficulty {
    /// Array containing all tiers from easiest to hardest.
    pub const ALL: [Self; 4] = [Self::Yellow, Self::Green, Self::Blue, Self::Purple];

    /// Creates a difficulty from its tier number (1-4).
    ///
    /// # Panics
    ///
    /// Panics if `tier` is not in the range 1-4.
    ///
    /// ```should_panic
    /// use quartets_core::Difficulty;
    ///
    /// let _ = Difficulty::from_tier(5);
    /// ```
    #[must_use]
    pub fn from_tier(tier: u8) -> Self {
        Self::try_from_tier(tier).unwrap_or_else(|| panic!("Invalid difficulty tier: {tier}"))
    }

    /// Creates a difficulty from its tier number, returning `None` outside 1-4.
    #[must_use]
    pub const fn try_from_tier(tier: u8) -> Option<Self> {
        match tier {
            1 => Some(Self::Yellow),
            2 => Some(Self::Green),
            3 => Some(Self::Blue),
            4 => Some(Self::Purple),
            _ => None,
        }
    }

    /// Returns the tier number (1-4).
    #[must_use]
    pub const fn tier(self) -> u8 {
        self as u8
    }

    /// Returns the lowercase color name of this tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> u8 {
        difficulty.tier()
    }
}

/// Error returned when a string is neither a tier color nor a tier number.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty {input:?} (expected yellow, green, blue, purple or 1-4)")]
pub struct ParseDifficultyError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(difficulty) = Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
        {
            return Ok(difficulty);
        }
        s.parse::<u8>()
            .ok()
            .and_then(Self::try_from_tier)
            .ok_or_else(|| ParseDifficultyError {
                input: s.to_owned(),
            })
    }
}
