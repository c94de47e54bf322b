//! Grid dimensions.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
};

use crate::Position;

/// Dimensions of a rectangular grid, `rows × cols`.
///
/// Both dimensions lie in `1..=GridSize::MAX_DIM`, so the cell count always fits
/// comfortably in a `usize` and per-cell buffers stay small.
///
/// # Examples
///
/// ```
/// use shikaku_core::{GridSize, Position};
///
/// let size = GridSize::new(2, 3);
/// assert_eq!(size.cell_count(), 6);
/// assert!(size.contains(Position::new(1, 2)));
/// assert!(!size.contains(Position::new(2, 0)));
///
/// let cells: Vec<_> = size.positions().collect();
/// assert_eq!(cells.first(), Some(&Position::new(0, 0)));
/// assert_eq!(cells.last(), Some(&Position::new(1, 2)));
///
/// assert_eq!(GridSize::try_new(GridSize::MAX_DIM + 1, 2), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    rows: usize,
    cols: usize,
}

impl GridSize {
    /// Largest supported number of rows or columns.
    pub const MAX_DIM: usize = 64;

    /// Creates a new grid size.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or greater than [`GridSize::MAX_DIM`].
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Some(size) => size,
            None => panic!("grid dimensions must be between 1 and 64"),
        }
    }

    /// Creates a grid size, returning `None` if either dimension is zero or
    /// greater than [`GridSize::MAX_DIM`].
    #[must_use]
    pub const fn try_new(rows: usize, cols: usize) -> Option<Self> {
        if rows > 0 && cols > 0 && rows <= Self::MAX_DIM && cols <= Self::MAX_DIM {
            Some(Self { rows, cols })
        } else {
            None
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(self) -> usize {
        self.cols
    }

    /// Returns the total number of cells.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Returns the row-major index of `pos`, or `None` if it is outside the grid.
    #[must_use]
    pub const fn index_of(self, pos: Position) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }

    /// Returns an iterator over every cell in row-major order.
    #[must_use]
    pub fn positions(self) -> GridPositions {
        GridPositions {
            size: self,
            front: 0,
            back: self.cell_count(),
        }
    }
}

impl Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Iterator over all cells of a grid in row-major order.
#[derive(Debug, Clone)]
pub struct GridPositions {
    size: GridSize,
    front: usize,
    back: usize,
}

impl GridPositions {
    fn item_at(&self, index: usize) -> Position {
        Position::new(index / self.size.cols, index % self.size.cols)
    }
}

impl Iterator for GridPositions {
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

impl DoubleEndedIterator for GridPositions {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.item_at(self.back))
    }
}

impl FusedIterator for GridPositions {}
impl ExactSizeIterator for GridPositions {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_iterator_order() {
        let mut iter = GridSize::new(3, 4).positions();
        assert_eq!(iter.len(), 12);
        assert_eq!(iter.next(), Some(Position::new(0, 0)));
        assert_eq!(iter.next(), Some(Position::new(0, 1)));
        assert_eq!(iter.next_back(), Some(Position::new(2, 3)));
        assert_eq!(iter.len(), 9);
    }

    #[test]
    fn test_index_of() {
        let size = GridSize::new(3, 4);
        assert_eq!(size.index_of(Position::new(0, 0)), Some(0));
        assert_eq!(size.index_of(Position::new(2, 1)), Some(9));
        assert_eq!(size.index_of(Position::new(3, 0)), None);
        assert_eq!(size.index_of(Position::new(0, 4)), None);
    }

    #[test]
    fn test_try_new_rejects_empty() {
        assert_eq!(GridSize::try_new(0, 3), None);
        assert_eq!(GridSize::try_new(3, 0), None);
        assert_eq!(GridSize::try_new(2, 5), Some(GridSize::new(2, 5)));
    }

    #[test]
    fn test_try_new_rejects_oversized() {
        let max = GridSize::MAX_DIM;
        assert_eq!(GridSize::try_new(max + 1, 1), None);
        assert_eq!(GridSize::try_new(1, max + 1), None);
        assert_eq!(GridSize::try_new(usize::MAX, 2), None);
        let largest = GridSize::try_new(max, max).unwrap();
        assert_eq!(largest.cell_count(), max * max);
    }

    #[test]
    #[should_panic(expected = "grid dimensions must be between 1 and 64")]
    fn test_new_zero_panics() {
        let _ = GridSize::new(0, 1);
    }

    #[test]
    #[should_panic(expected = "grid dimensions must be between 1 and 64")]
    fn test_new_oversized_panics() {
        let _ = GridSize::new(65, 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(GridSize::new(9, 6).to_string(), "9x6");
    }
}
