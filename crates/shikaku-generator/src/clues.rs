//! Clue placement and consistency checks.

use rand::{Rng, RngExt as _};
use shikaku_core::{Clue, ClueSet, ClueSetError, GridSize, Position, Rect};

/// Reasons a derived clue set cannot be used for a level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum ClueCheckError {
    /// The clue values do not add up to the number of cells.
    #[display("clue sum {sum} does not match {cells} cells")]
    SumMismatch {
        /// Sum of all clue values.
        sum: usize,
        /// Number of cells in the grid.
        cells: usize,
    },
    /// A clue is out of bounds, zero, or shares a cell with another clue.
    #[display("{_0}")]
    Clues(#[from] ClueSetError),
}

/// Places one clue in each rectangle, at a uniformly random cell, valued at the
/// rectangle's area.
pub fn derive_clues<R>(rects: &[Rect], rng: &mut R) -> Vec<Clue>
where
    R: Rng + ?Sized,
{
    rects
        .iter()
        .map(|rect| {
            let top_left = rect.top_left();
            let position = Position::new(
                top_left.row + rng.random_range(0..rect.height()),
                top_left.col + rng.random_range(0..rect.width()),
            );
            Clue::new(position, rect.area())
        })
        .collect()
}

/// Checks that `clues` can form a level on a grid of `size`.
///
/// The values must add up to the cell count, and every clue must be in bounds,
/// positive, and alone on its cell.
///
/// # Errors
///
/// Returns the first violation found.
///
/// # Examples
///
/// ```
/// use shikaku_core::{Clue, GridSize, Position};
/// use shikaku_generator::{ClueCheckError, check_clues};
///
/// let size = GridSize::new(2, 2);
/// let clue = |row, col, value| Clue::new(Position::new(row, col), value);
///
/// assert!(check_clues(size, vec![clue(0, 0, 2), clue(1, 1, 2)]).is_ok());
/// assert_eq!(
///     check_clues(size, vec![clue(0, 0, 3)]),
///     Err(ClueCheckError::SumMismatch { sum: 3, cells: 4 }),
/// );
/// ```
pub fn check_clues(size: GridSize, clues: Vec<Clue>) -> Result<ClueSet, ClueCheckError> {
    let sum = clues.iter().map(|clue| clue.value).sum();
    let cells = size.cell_count();
    if sum != cells {
        return Err(ClueCheckError::SumMismatch { sum, cells });
    }
    Ok(ClueSet::new(size, clues)?)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_derive_clues_inside_rects() {
        let mut rng = Pcg64::from_seed([5; 32]);
        let rects = [
            Rect::with_size(pos(0, 0), 2, 3),
            Rect::with_size(pos(0, 3), 2, 1),
            Rect::single(pos(2, 0)),
        ];
        for _ in 0..50 {
            let clues = derive_clues(&rects, &mut rng);
            assert_eq!(clues.len(), rects.len());
            for (clue, rect) in clues.iter().zip(&rects) {
                assert!(rect.contains(clue.position));
                assert_eq!(clue.value, rect.area());
            }
        }
    }

    #[test]
    fn test_check_clues_errors() {
        let size = GridSize::new(2, 2);
        assert_eq!(
            check_clues(size, vec![Clue::new(pos(0, 0), 2), Clue::new(pos(0, 0), 2)]),
            Err(ClueCheckError::Clues(ClueSetError::DuplicatePosition {
                position: pos(0, 0)
            }))
        );
        assert_eq!(
            check_clues(size, vec![Clue::new(pos(0, 0), 2), Clue::new(pos(2, 0), 2)]),
            Err(ClueCheckError::Clues(ClueSetError::OutOfBounds {
                position: pos(2, 0),
                size,
            }))
        );
        assert_eq!(
            check_clues(size, vec![Clue::new(pos(0, 0), 4), Clue::new(pos(1, 1), 0)]),
            Err(ClueCheckError::Clues(ClueSetError::ZeroValue {
                position: pos(1, 1)
            }))
        );
        assert_eq!(
            ClueCheckError::SumMismatch { sum: 5, cells: 4 }.to_string(),
            "clue sum 5 does not match 4 cells"
        );
    }
}
