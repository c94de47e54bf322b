//! Axis-aligned rectangles of grid cells.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
};

use crate::{GridSize, Position};

/// Errors returned when constructing a [`Rect`] from explicit corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RectError {
    /// The top-left corner lies below or right of the bottom-right corner.
    #[display("inverted rectangle corners: top-left {top_left}, bottom-right {bottom_right}")]
    InvertedCorners {
        /// The requested top-left corner.
        top_left: Position,
        /// The requested bottom-right corner.
        bottom_right: Position,
    },
}

/// An axis-aligned rectangle of cells, inclusive of both corners.
///
/// A rectangle always satisfies `top_left.row <= bottom_right.row` and
/// `top_left.col <= bottom_right.col`, so its width, height, and area are at least 1.
/// [`Rect::new`] rejects inverted corners, while [`Rect::from_corners`] normalizes any
/// two cells into the rectangle spanning them.
///
/// # Examples
///
/// ```
/// use shikaku_core::{Position, Rect};
///
/// let rect = Rect::from_corners(Position::new(2, 3), Position::new(1, 1));
/// assert_eq!(rect.top_left(), Position::new(1, 1));
/// assert_eq!(rect.bottom_right(), Position::new(2, 3));
/// assert_eq!((rect.height(), rect.width(), rect.area()), (2, 3, 6));
///
/// assert!(Rect::new(Position::new(2, 0), Position::new(1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    top_left: Position,
    bottom_right: Position,
}

impl Rect {
    /// Creates a rectangle from its top-left and bottom-right corners.
    ///
    /// # Errors
    ///
    /// Returns [`RectError::InvertedCorners`] if `top_left` is below or right of
    /// `bottom_right`.
    pub const fn new(top_left: Position, bottom_right: Position) -> Result<Self, RectError> {
        if top_left.row > bottom_right.row || top_left.col > bottom_right.col {
            return Err(RectError::InvertedCorners {
                top_left,
                bottom_right,
            });
        }
        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Creates the smallest rectangle containing both `a` and `b`.
    ///
    /// The corners may be given in any order, e.g. the start and end of a drag.
    #[must_use]
    pub fn from_corners(a: Position, b: Position) -> Self {
        Self {
            top_left: Position::new(a.row.min(b.row), a.col.min(b.col)),
            bottom_right: Position::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    /// Creates a rectangle anchored at `top_left` with the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if `height` or `width` is zero.
    #[must_use]
    pub fn with_size(top_left: Position, height: usize, width: usize) -> Self {
        assert!(height > 0 && width > 0, "rectangle dimensions must be positive");
        Self {
            top_left,
            bottom_right: top_left.offset(height - 1, width - 1),
        }
    }

    /// Creates a 1×1 rectangle covering a single cell.
    #[must_use]
    pub const fn single(pos: Position) -> Self {
        Self {
            top_left: pos,
            bottom_right: pos,
        }
    }

    /// Returns the top-left corner.
    #[must_use]
    pub const fn top_left(&self) -> Position {
        self.top_left
    }

    /// Returns the bottom-right corner.
    #[must_use]
    pub const fn bottom_right(&self) -> Position {
        self.bottom_right
    }

    /// Returns the number of columns spanned.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.bottom_right.col - self.top_left.col + 1
    }

    /// Returns the number of rows spanned.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.bottom_right.row - self.top_left.row + 1
    }

    /// Returns the number of cells covered.
    #[must_use]
    pub const fn area(&self) -> usize {
        self.width() * self.height()
    }

    /// Returns `true` if `pos` lies inside the rectangle (bounds inclusive).
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        self.top_left.row <= pos.row
            && pos.row <= self.bottom_right.row
            && self.top_left.col <= pos.col
            && pos.col <= self.bottom_right.col
    }

    /// Returns `true` if the two rectangles share at least one cell.
    ///
    /// Rectangles that only touch along an edge or at a corner do not overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use shikaku_core::{Position, Rect};
    ///
    /// let a = Rect::from_corners(Position::new(0, 0), Position::new(1, 1));
    /// let b = Rect::from_corners(Position::new(1, 1), Position::new(2, 2));
    /// let c = Rect::from_corners(Position::new(0, 2), Position::new(1, 3));
    /// assert!(a.overlaps(&b));
    /// assert!(!a.overlaps(&c)); // edge contact only
    /// ```
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.top_left.row <= other.bottom_right.row
            && other.top_left.row <= self.bottom_right.row
            && self.top_left.col <= other.bottom_right.col
            && other.top_left.col <= self.bottom_right.col
    }

    /// Returns `true` if every cell of the rectangle lies inside a grid of `size`.
    #[must_use]
    pub const fn fits_in(&self, size: GridSize) -> bool {
        size.contains(self.bottom_right)
    }

    /// Returns an iterator over the covered cells in row-major order.
    ///
    /// The iterator is cheap to clone, so the sequence can be restarted.
    #[must_use]
    pub fn positions(&self) -> RectPositions {
        RectPositions {
            rect: *self,
            front: 0,
            back: self.area(),
        }
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.top_left, self.bottom_right)
    }
}

/// Iterator over the cells of a [`Rect`] in row-major order.
#[derive(Debug, Clone)]
pub struct RectPositions {
    rect: Rect,
    front: usize,
    back: usize,
}

impl RectPositions {
    fn item_at(&self, index: usize) -> Position {
        let width = self.rect.width();
        self.rect.top_left.offset(index / width, index % width)
    }
}

impl Iterator for RectPositions {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.item_at(self.front);
        self.front += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for RectPositions {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.item_at(self.back))
    }
}

impl FusedIterator for RectPositions {}
impl ExactSizeIterator for RectPositions {}
