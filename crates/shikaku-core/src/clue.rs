//! Numbered hint cells.

use std::collections::HashSet;

use crate::{GridSize, Position, Rect};

/// A numbered hint cell.
///
/// The `value` is the area of the rectangle that must cover `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Clue {
    /// The cell holding the number.
    pub position: Position,
    /// The required area of the covering rectangle.
    pub value: usize,
}

impl Clue {
    /// Creates a new clue.
    #[must_use]
    pub const fn new(position: Position, value: usize) -> Self {
        Self { position, value }
    }
}

/// Errors detected while building a [`ClueSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ClueSetError {
    /// A clue lies outside the grid.
    #[display("clue at {position} is outside the {size} grid")]
    OutOfBounds {
        /// Position of the offending clue.
        position: Position,
        /// The grid size.
        size: GridSize,
    },
    /// A clue has a value of zero.
    #[display("clue at {position} has a zero value")]
    ZeroValue {
        /// Position of the offending clue.
        position: Position,
    },
    /// A clue asks for more cells than the grid has.
    #[display("clue at {position} has value {value}, more than the {cells} cells of the grid")]
    ValueTooLarge {
        /// Position of the offending clue.
        position: Position,
        /// The requested area.
        value: usize,
        /// Number of cells in the grid.
        cells: usize,
    },
    /// Two clues share the same cell.
    #[display("more than one clue at {position}")]
    DuplicatePosition {
        /// The shared position.
        position: Position,
    },
}

/// The clues of one puzzle, checked against the grid they belong to.
///
/// A `ClueSet` guarantees that every clue lies inside the grid, every value is
/// positive and at most the grid's cell count, and no two clues share a cell. Clues keep their insertion order.
///
/// # Examples
///
/// ```
/// use shikaku_core::{Clue, ClueSet, ClueSetError, GridSize, Position};
///
/// let size = GridSize::new(3, 3);
/// let clues = ClueSet::new(
///     size,
///     [
///         Clue::new(Position::new(0, 0), 3),
///         Clue::new(Position::new(1, 1), 3),
///         Clue::new(Position::new(2, 2), 3),
///     ],
/// )?;
/// assert_eq!(clues.len(), 3);
/// assert_eq!(clues.total_value(), 9);
///
/// let dup = ClueSet::new(
///     size,
///     [
///         Clue::new(Position::new(0, 0), 3),
///         Clue::new(Position::new(0, 0), 6),
///     ],
/// );
/// assert_eq!(
///     dup,
///     Err(ClueSetError::DuplicatePosition { position: Position::new(0, 0) })
/// );
/// # Ok::<(), ClueSetError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueSet {
    size: GridSize,
    clues: Vec<Clue>,
}

impl ClueSet {
    /// Creates a clue set for a grid of `size`.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in clue order:
    /// [`ClueSetError::OutOfBounds`], [`ClueSetError::ZeroValue`],
    /// [`ClueSetError::ValueTooLarge`], or [`ClueSetError::DuplicatePosition`].
    pub fn new<I>(size: GridSize, clues: I) -> Result<Self, ClueSetError>
    where
        I: IntoIterator<Item = Clue>,
    {
        let clues: Vec<Clue> = clues.into_iter().collect();
        let mut seen = HashSet::with_capacity(clues.len());
        for clue in &clues {
            Self::check_clue(size, *clue)?;
            if !seen.insert(clue.position) {
                return Err(ClueSetError::DuplicatePosition {
                    position: clue.position,
                });
            }
        }
        Ok(Self { size, clues })
    }

    /// Checks a single clue against a grid of `size`, ignoring other clues.
    ///
    /// # Errors
    ///
    /// Returns [`ClueSetError::OutOfBounds`], [`ClueSetError::ZeroValue`], or
    /// [`ClueSetError::ValueTooLarge`].
    ///
    /// # Examples
    ///
    /// ```
    /// use shikaku_core::{Clue, ClueSet, ClueSetError, GridSize, Position};
    ///
    /// let size = GridSize::new(2, 2);
    /// assert_eq!(ClueSet::check_clue(size, Clue::new(Position::new(1, 1), 4)), Ok(()));
    /// assert_eq!(
    ///     ClueSet::check_clue(size, Clue::new(Position::new(1, 1), 5)),
    ///     Err(ClueSetError::ValueTooLarge { position: Position::new(1, 1), value: 5, cells: 4 })
    /// );
    /// ```
    pub fn check_clue(size: GridSize, clue: Clue) -> Result<(), ClueSetError> {
        let position = clue.position;
        if !size.contains(position) {
            return Err(ClueSetError::OutOfBounds { position, size });
        }
        if clue.value == 0 {
            return Err(ClueSetError::ZeroValue { position });
        }
        let cells = size.cell_count();
        if clue.value > cells {
            return Err(ClueSetError::ValueTooLarge {
                position,
                value: clue.value,
                cells,
            });
        }
        Ok(())
    }

    /// Returns the grid size the clues were checked against.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the clues in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Clue] {
        &self.clues
    }

    /// Returns an iterator over the clues.
    pub fn iter(&self) -> std::slice::Iter<'_, Clue> {
        self.clues.iter()
    }

    /// Returns the number of clues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clues.len()
    }

    /// Returns `true` if there are no clues.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clues.is_empty()
    }

    /// Returns the clue at `pos`, if any.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Clue> {
        self.clues.iter().find(|clue| clue.position == pos)
    }

    /// Returns the sum of all clue values.
    ///
    /// A solvable puzzle needs this to equal the grid's cell count. Every value
    /// is bounded by the cell count, so the sum cannot overflow.
    #[must_use]
    pub fn total_value(&self) -> usize {
        self.clues.iter().map(|clue| clue.value).sum()
    }

    /// Returns the clues whose position lies inside `rect`.
    pub fn clues_in(&self, rect: Rect) -> impl Iterator<Item = &Clue> + '_ {
        self.clues
            .iter()
            .filter(move |clue| rect.contains(clue.position))
    }
}

impl<'a> IntoIterator for &'a ClueSet {
    type Item = &'a Clue;
    type IntoIter = std::slice::Iter<'a, Clue>;

    fn into_iter(self) -> Self::IntoIter {
        self.clues.iter()
    }
}
