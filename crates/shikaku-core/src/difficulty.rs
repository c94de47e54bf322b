//! Difficulty tiers.

use std::fmt::{self, Display};

/// Error returned when converting an out-of-range value into a [`Difficulty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid difficulty value: {_0} (expected 1-5)")]
pub struct DifficultyError(#[error(not(source))] pub u8);

/// A difficulty tier in the range 1-5.
///
/// The tier selects the grid sizes and preferred rectangle areas used by the
/// level generator. Higher tiers mean larger grids and larger rectangles.
///
/// # Examples
///
/// ```
/// use shikaku_core::Difficulty;
///
/// let difficulty = Difficulty::from_value(3);
/// assert_eq!(difficulty, Difficulty::D3);
/// assert_eq!(difficulty.value(), 3);
/// assert!(Difficulty::try_from(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Difficulty {
    /// Tier 1, the easiest.
    D1 = 1,
    /// Tier 2.
    D2 = 2,
    /// Tier 3, the default.
    #[default]
    D3 = 3,
    /// Tier 4.
    D4 = 4,
    /// Tier 5, the hardest.
    D5 = 5,
}

impl Difficulty {
    /// Array containing all tiers from easiest to hardest.
    pub const ALL: [Self; 5] = [Self::D1, Self::D2, Self::D3, Self::D4, Self::D5];

    /// Creates a difficulty from a value in the range 1-5.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-5.
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match Self::try_from(value) {
            Ok(difficulty) => difficulty,
            Err(_) => panic!("invalid difficulty value: {value}"),
        }
    }

    /// Returns the numeric tier (1-5).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Estimates a tier from how densely clues populate a grid.
    ///
    /// More clues per cell means smaller rectangles and an easier puzzle:
    /// a clue ratio above 0.4 is tier 1, above 0.3 tier 2, above 0.2 tier 3,
    /// above 0.15 tier 4, and anything sparser tier 5.
    ///
    /// # Examples
    ///
    /// ```
    /// use shikaku_core::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_clue_density(10, 20), Difficulty::D1);
    /// assert_eq!(Difficulty::from_clue_density(5, 36), Difficulty::D5);
    /// ```
    #[must_use]
    pub const fn from_clue_density(clue_count: usize, cell_count: usize) -> Self {
        // ratio > p/q  <=>  clue_count * q > cell_count * p
        if clue_count * 10 > cell_count * 4 {
            Self::D1
        } else if clue_count * 10 > cell_count * 3 {
            Self::D2
        } else if clue_count * 10 > cell_count * 2 {
            Self::D3
        } else if clue_count * 20 > cell_count * 3 {
            Self::D4
        } else {
            Self::D5
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = DifficultyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::D1),
            2 => Ok(Self::D2),
            3 => Ok(Self::D3),
            4 => Ok(Self::D4),
            5 => Ok(Self::D5),
            _ => Err(DifficultyError(value)),
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> u8 {
        difficulty.value()
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}
