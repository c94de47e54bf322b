//! Cell coordinates.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A cell position in a grid, identified by `row` and `col` (both 0-based).
///
/// Positions are plain values: they are compared structurally and never mutated.
/// Ordering is row-major, so sorting positions yields reading order.
///
/// # Examples
///
/// ```
/// use shikaku_core::Position;
///
/// let a = Position::new(0, 3);
/// let b = Position::new(1, 0);
/// assert!(a < b);
/// assert_eq!(a.to_string(), "(0, 3)");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the position offset by `rows` down and `cols` right.
    #[must_use]
    pub const fn offset(self, rows: usize, cols: usize) -> Self {
        Self::new(self.row + rows, self.col + cols)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
