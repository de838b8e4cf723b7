//! Puzzle definitions.
//!
//! A [`Puzzle`] is the static content of a session: four [`SolutionGroup`]s,
//! each with a name, exactly four words and a [`Difficulty`]. It never changes
//! once a session has started.
//!
//! # Text format
//!
//! Puzzles can be written one group per line, with the difficulty (tier color
//! or number), the group name and four comma-separated words separated by `|`.
//! Blank lines and lines starting with `#` are ignored.
//!
//! ```
//! use quartets_core::{Difficulty, Puzzle};
//!
//! let puzzle: Puzzle = "
//!     ## colors are case-insensitive
//!     yellow | TARGET OF A SCAM | mark, patsy, pigeon, sap
//!     green  | BANDLEADERS      | KC, PRINCE, SLY, STING
//!     3      | TWELVE DAYS SINGULARS | HEN, GOOSE, PIPER, RING
//!     purple | ANIMATED FILMS MISSING A LETTER | ELO, MOAN, SOL, U
//! "
//! .parse()
//! .unwrap();
//!
//! assert_eq!(puzzle.groups()[0].words()[0], "MARK");
//! assert_eq!(puzzle.groups()[2].difficulty(), Difficulty::Blue);
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Difficulty, GROUP_COUNT, GROUP_SIZE, TileId, difficulty::ParseDifficultyError};

/// One of the four hidden groups of a puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionGroup {
    name: String,
    words: [String; GROUP_SIZE],
    difficulty: Difficulty,
}

impl SolutionGroup {
    /// Creates a group, normalizing the name and the words to trimmed uppercase.
    ///
    /// The group is validated when it is assembled into a [`Puzzle`].
    #[must_use]
    pub fn new<S>(name: &str, words: [S; GROUP_SIZE], difficulty: Difficulty) -> Self
    where
        S: AsRef<str>,
    {
        Self {
            name: name.trim().to_uppercase(),
            words: words.map(|word| word.as_ref().trim().to_uppercase()),
            difficulty,
        }
    }

    /// Returns the group's category name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the four words in authoring order.
    #[must_use]
    pub fn words(&self) -> &[String; GROUP_SIZE] {
        &self.words
    }

    /// Returns the difficulty tier.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// Reasons a set of groups does not form a valid puzzle.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    /// A group has an empty name.
    #[display("group {group} has an empty name")]
    EmptyName {
        /// Index of the offending group.
        group: usize,
    },
    /// A group contains an empty word.
    #[display("group {group} contains an empty word")]
    EmptyWord {
        /// Index of the offending group.
        group: usize,
    },
    /// A word appears twice within the same group.
    #[display("group {group} contains {word:?} more than once")]
    DuplicateWord {
        /// Index of the offending group.
        group: usize,
        /// The repeated word.
        word: String,
    },
    /// Two groups share a difficulty tier.
    #[display("more than one group has difficulty {difficulty}")]
    DuplicateDifficulty {
        /// The repeated tier.
        difficulty: Difficulty,
    },
}

/// The static content of a session: four solution groups.
///
/// Words may repeat across different groups; tiles are told apart by their
/// [`TileId`], not by their text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    groups: [SolutionGroup; GROUP_COUNT],
}

impl Puzzle {
    /// Assembles a puzzle from four groups.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError`] if a group has an empty name or word, a group
    /// repeats a word, or two groups share a difficulty.
    pub fn new(groups: [SolutionGroup; GROUP_COUNT]) -> Result<Self, PuzzleError> {
        for (i, group) in groups.iter().enumerate() {
            if group.name.is_empty() {
                return Err(PuzzleError::EmptyName { group: i });
            }
            for (j, word) in group.words.iter().enumerate() {
                if word.is_empty() {
                    return Err(PuzzleError::EmptyWord { group: i });
                }
                if group.words[..j].contains(word) {
                    return Err(PuzzleError::DuplicateWord {
                        group: i,
                        word: word.clone(),
                    });
                }
            }
            if groups[..i]
                .iter()
                .any(|other| other.difficulty == group.difficulty)
            {
                return Err(PuzzleError::DuplicateDifficulty {
                    difficulty: group.difficulty,
                });
            }
        }
        Ok(Self { groups })
    }

    /// Returns the built-in puzzle.
    ///
    /// ```
    /// use quartets_core::{Difficulty, Puzzle, TileId};
    ///
    /// let puzzle = Puzzle::canonical();
    /// assert_eq!(puzzle.word(TileId::new(0, 0)), "MARK");
    /// assert_eq!(puzzle.difficulty_of(TileId::new(3, 3)), Difficulty::Purple);
    /// ```
    #[must_use]
    #[expect(clippy::missing_panics_doc)]
    pub fn canonical() -> Self {
        let groups = [
            SolutionGroup::new(
                "TARGET OF A SCAM",
                ["MARK", "PATSY", "PIGEON", "SAP"],
                Difficulty::Yellow,
            ),
            SolutionGroup::new(
                "BANDLEADERS",
                ["KC", "PRINCE", "SLY", "STING"],
                Difficulty::Green,
            ),
            SolutionGroup::new(
                "TWELVE DAYS SINGULARS",
                ["HEN", "GOOSE", "PIPER", "RING"],
                Difficulty::Blue,
            ),
            SolutionGroup::new(
                "ANIMATED FILMS MISSING A LETTER",
                ["ELO", "MOAN", "SOL", "U"],
                Difficulty::Purple,
            ),
        ];
        Self::new(groups).expect("built-in puzzle is valid")
    }

    /// Returns the four groups in authoring order.
    #[must_use]
    pub fn groups(&self) -> &[SolutionGroup; GROUP_COUNT] {
        &self.groups
    }

    /// Returns the group the tile was authored in.
    #[must_use]
    pub fn group_of(&self, tile: TileId) -> &SolutionGroup {
        &self.groups[tile.group()]
    }

    /// Returns the group with the given difficulty.
    #[must_use]
    pub fn group_by_difficulty(&self, difficulty: Difficulty) -> Option<&SolutionGroup> {
        self.groups.iter().find(|g| g.difficulty == difficulty)
    }

    /// Returns the word shown on the tile.
    #[must_use]
    pub fn word(&self, tile: TileId) -> &str {
        &self.group_of(tile).words[tile.slot()]
    }

    /// Returns the difficulty tier of the tile's group.
    #[must_use]
    pub fn difficulty_of(&self, tile: TileId) -> Difficulty {
        self.group_of(tile).difficulty
    }

    /// Returns every tile whose word equals `word` (case-insensitive).
    ///
    /// More than one tile is returned only when groups share a word.
    pub fn tiles_with_word<'a>(&'a self, word: &'a str) -> impl Iterator<Item = TileId> + 'a {
        let word = word.trim();
        TileId::ALL
            .into_iter()
            .filter(move |tile| self.word(*tile).eq_ignore_ascii_case(word))
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in &self.groups {
            writeln!(
                f,
                "{} | {} | {}",
                group.difficulty,
                group.name,
                group.words.join(", ")
            )?;
        }
        Ok(())
    }
}

/// Errors produced when parsing the puzzle text format.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleParseError {
    /// A group line does not have exactly three `|`-separated fields.
    #[display("line {line}: expected `difficulty | name | words`")]
    MalformedLine {
        /// 1-based line number.
        line: usize,
    },
    /// The difficulty field is not recognized.
    #[display("line {line}: {error}")]
    InvalidDifficulty {
        /// 1-based line number.
        line: usize,
        /// The underlying error.
        error: ParseDifficultyError,
    },
    /// A group line does not list exactly four words.
    #[display("line {line}: expected 4 words, found {count}")]
    WrongWordCount {
        /// 1-based line number.
        line: usize,
        /// Number of words found.
        count: usize,
    },
    /// The text does not contain exactly four group lines.
    #[display("expected 4 groups, found {count}")]
    WrongGroupCount {
        /// Number of group lines found.
        count: usize,
    },
    /// The groups parsed but do not form a valid puzzle.
    #[display("{error}")]
    Invalid {
        /// The validation error.
        error: PuzzleError,
    },
}

impl FromStr for Puzzle {
    type Err = PuzzleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut groups = Vec::with_capacity(GROUP_COUNT);
        for (i, line) in s.lines().enumerate() {
            let line_no = i + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split('|').collect();
            let [difficulty, name, words] = fields.as_slice() else {
                return Err(PuzzleParseError::MalformedLine { line: line_no });
            };
            let difficulty = difficulty.parse().map_err(|error| {
                PuzzleParseError::InvalidDifficulty {
                    line: line_no,
                    error,
                }
            })?;
            let words: Vec<&str> = words.split(',').collect();
            let words: [&str; GROUP_SIZE] =
                words
                    .as_slice()
                    .try_into()
                    .map_err(|_| PuzzleParseError::WrongWordCount {
                        line: line_no,
                        count: words.len(),
                    })?;
            groups.push(SolutionGroup::new(name, words, difficulty));
        }

        let count = groups.len();
        let groups: [SolutionGroup; GROUP_COUNT] = groups
            .try_into()
            .map_err(|_| PuzzleParseError::WrongGroupCount { count })?;
        Self::new(groups).map_err(|error| PuzzleParseError::Invalid { error })
    }
}
