//! Session seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;

/// A 32-byte seed for the shuffle random source of a session.
///
/// Two sessions created from the same puzzle, seed and options shuffle
/// identically. The seed is written as 64 lowercase hexadecimal digits.
///
/// # Examples
///
/// ```
/// use quartets_game::GameSeed;
///
/// let text = format!("{}2a", "00".repeat(31));
/// let seed: GameSeed = text.parse().unwrap();
/// assert_eq!(seed.as_bytes()[31], 0x2a);
/// assert_eq!(seed.to_string().len(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSeed([u8; 32]);

impl GameSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random source.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl From<[u8; 32]> for GameSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl Display for GameSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors produced when parsing a [`GameSeed`] from hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The input is not 64 characters long.
    #[display("seed must be 64 hex digits, found {len}")]
    InvalidLength {
        /// Length of the input in characters.
        len: usize,
    },
    /// The input contains a non-hex character.
    #[display("invalid hex digit {ch:?} at position {position}")]
    InvalidDigit {
        /// 0-based character position.
        position: usize,
        /// The offending character.
        ch: char,
    },
}

impl FromStr for GameSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::InvalidLength { len });
        }

        let mut bytes = [0; 32];
        let mut chars = s.chars().enumerate();
        for byte in &mut bytes {
            let mut value = 0_u8;
            for (position, ch) in chars.by_ref().take(2) {
                let digit = ch
                    .to_digit(16)
                    .ok_or(ParseSeedError::InvalidDigit { position, ch })?;
                #[expect(clippy::cast_possible_truncation)]
                let digit = digit as u8;
                value = (value << 4) | digit;
            }
            *byte = value;
        }
        Ok(Self(bytes))
    }
}
