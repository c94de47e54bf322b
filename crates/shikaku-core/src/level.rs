//! Puzzle levels and their share code format.
//!
//! A share code is a single line of text describing a level:
//!
//! ```text
//! shikaku://{rows}x{cols}/{row},{col},{value};{row},{col},{value};...
//! ```
//!
//! The clue list may be empty (`shikaku://4x4/`). Share codes do not carry a
//! difficulty; parsing estimates one from the clue density with
//! [`Difficulty::from_clue_density`].

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Clue, ClueSet, ClueSetError, Difficulty, GridSize, Position};

const SHARE_CODE_PREFIX: &str = "shikaku://";

/// A complete puzzle description: grid size, difficulty tier, and clues.
///
/// # Examples
///
/// ```
/// use shikaku_core::{Clue, Difficulty, GridSize, Level, Position};
///
/// let level: Level = "shikaku://2x2/0,0,4".parse()?;
/// assert_eq!(level.size(), GridSize::new(2, 2));
/// assert_eq!(level.clues().as_slice(), [Clue::new(Position::new(0, 0), 4)]);
/// assert_eq!(level.to_string(), "shikaku://2x2/0,0,4");
/// # Ok::<(), shikaku_core::LevelCodeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    difficulty: Difficulty,
    clues: ClueSet,
}

impl Level {
    /// Creates a level from a validated clue set.
    #[must_use]
    pub fn new(difficulty: Difficulty, clues: ClueSet) -> Self {
        Self { difficulty, clues }
    }

    /// Creates a level from raw clues, validating them against `size`.
    ///
    /// # Errors
    ///
    /// Returns a [`ClueSetError`] if a clue is out of bounds, has a zero or
    /// oversized value, or shares a cell with another clue.
    pub fn from_clues<I>(
        size: GridSize,
        difficulty: Difficulty,
        clues: I,
    ) -> Result<Self, ClueSetError>
    where
        I: IntoIterator<Item = Clue>,
    {
        Ok(Self::new(difficulty, ClueSet::new(size, clues)?))
    }

    /// Returns the grid size.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.clues.size()
    }

    /// Returns the difficulty tier.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the clues.
    #[must_use]
    pub fn clues(&self) -> &ClueSet {
        &self.clues
    }

    /// Returns `true` if the clue values add up to the number of cells.
    ///
    /// This is necessary, but not sufficient, for the level to be solvable.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.clues.total_value() == self.size().cell_count()
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&ShareCode::new(self.size(), self.clues.as_slice()), f)
    }
}

/// Formats a grid size and a clue list as a share code.
///
/// Unlike a [`Level`], the clues are not checked, so partially authored levels
/// can be shared as well.
///
/// # Examples
///
/// ```
/// use shikaku_core::{Clue, GridSize, Position, ShareCode};
///
/// let clues = [Clue::new(Position::new(0, 1), 2), Clue::new(Position::new(1, 0), 2)];
/// let code = ShareCode::new(GridSize::new(2, 2), &clues);
/// assert_eq!(code.to_string(), "shikaku://2x2/0,1,2;1,0,2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareCode<'a> {
    size: GridSize,
    clues: &'a [Clue],
}

impl<'a> ShareCode<'a> {
    /// Creates a share code formatter.
    #[must_use]
    pub const fn new(size: GridSize, clues: &'a [Clue]) -> Self {
        Self { size, clues }
    }
}

impl Display for ShareCode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SHARE_CODE_PREFIX}{}/", self.size)?;
        for (i, clue) in self.clues.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{},{},{}", clue.position.row, clue.position.col, clue.value)?;
        }
        Ok(())
    }
}

/// Errors returned when parsing a share code.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum LevelCodeError {
    /// The text does not start with `shikaku://`.
    #[display("share code must start with `shikaku://`")]
    MissingPrefix,
    /// The size and clue sections are not separated by a single `/`.
    #[display("share code must have exactly one `/` after the prefix")]
    MissingSeparator,
    /// The size section is not `{rows}x{cols}` with dimensions in
    /// `1..=GridSize::MAX_DIM`.
    #[display("invalid grid size: {_0:?}")]
    InvalidSize(#[error(not(source))] String),
    /// A clue entry is not `{row},{col},{value}`.
    #[display("invalid clue #{index}: {text:?}")]
    InvalidClue {
        /// Zero-based index of the entry.
        index: usize,
        /// The entry text.
        text: String,
    },
    /// The clues do not form a valid clue set.
    #[display("invalid clues: {_0}")]
    Clues(#[from] ClueSetError),
}

fn parse_size(text: &str) -> Option<GridSize> {
    let (rows, cols) = text.split_once('x')?;
    GridSize::try_new(rows.trim().parse().ok()?, cols.trim().parse().ok()?)
}

fn parse_clue(text: &str) -> Option<Clue> {
    let mut parts = text.split(',').map(|part| part.trim().parse::<usize>());
    let row = parts.next()?.ok()?;
    let col = parts.next()?.ok()?;
    let value = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Clue::new(Position::new(row, col), value))
}

impl FromStr for Level {
    type Err = LevelCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .trim()
            .strip_prefix(SHARE_CODE_PREFIX)
            .ok_or(LevelCodeError::MissingPrefix)?;
        let (size_text, clues_text) = body
            .split_once('/')
            .ok_or(LevelCodeError::MissingSeparator)?;
        if clues_text.contains('/') {
            return Err(LevelCodeError::MissingSeparator);
        }

        let size = parse_size(size_text)
            .ok_or_else(|| LevelCodeError::InvalidSize(size_text.to_owned()))?;

        let mut clues = Vec::new();
        if !clues_text.trim().is_empty() {
            for (index, text) in clues_text.split(';').enumerate() {
                let clue = parse_clue(text).ok_or_else(|| LevelCodeError::InvalidClue {
                    index,
                    text: text.to_owned(),
                })?;
                clues.push(clue);
            }
        }

        let clues = ClueSet::new(size, clues)?;
        let difficulty = Difficulty::from_clue_density(clues.len(), size.cell_count());
        Ok(Self::new(difficulty, clues))
    }
}
