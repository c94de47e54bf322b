//! Rule checks for Shikaku.
//!
//! Every function here is pure: it looks only at its arguments, so the same
//! checks serve committed rectangles, drag previews, and solver verification.

use shikaku_core::{Clue, ClueSet, GridSize, Position, Rect};

/// Returns `true` if `rect` contains exactly one clue and that clue's value equals
/// the rectangle's area.
///
/// This depends only on the rectangle and the clues, never on other rectangles.
///
/// # Examples
///
/// ```
/// use shikaku_core::{Clue, ClueSet, GridSize, Position, Rect};
/// use shikaku_game::validate::validate_rect;
///
/// let clues = ClueSet::new(GridSize::new(2, 3), [Clue::new(Position::new(0, 0), 2)])?;
///
/// let fits = Rect::from_corners(Position::new(0, 0), Position::new(0, 1));
/// let too_big = Rect::from_corners(Position::new(0, 0), Position::new(1, 1));
/// let empty = Rect::from_corners(Position::new(1, 1), Position::new(1, 2));
/// assert!(validate_rect(fits, &clues));
/// assert!(!validate_rect(too_big, &clues));
/// assert!(!validate_rect(empty, &clues));
/// # Ok::<(), shikaku_core::ClueSetError>(())
/// ```
#[must_use]
pub fn validate_rect(rect: Rect, clues: &ClueSet) -> bool {
    let mut inside = clues.clues_in(rect);
    match (inside.next(), inside.next()) {
        (Some(clue), None) => clue.value == rect.area(),
        _ => false,
    }
}

/// Returns `true` if exactly one rectangle contains the clue and its area equals the
/// clue's value.
#[must_use]
pub fn is_clue_satisfied<I>(clue: &Clue, rects: I) -> bool
where
    I: IntoIterator<Item = Rect>,
{
    let mut containing = rects
        .into_iter()
        .filter(|rect| rect.contains(clue.position));
    match (containing.next(), containing.next()) {
        (Some(rect), None) => rect.area() == clue.value,
        _ => false,
    }
}

/// Returns how many rectangles cover each cell, indexed row-major.
///
/// Cells of a rectangle lying outside the grid are not counted; use
/// [`is_grid_fully_covered`] to reject such rectangles.
#[must_use]
pub fn coverage_counts<I>(size: GridSize, rects: I) -> Vec<usize>
where
    I: IntoIterator<Item = Rect>,
{
    let mut counts = vec![0; size.cell_count()];
    for rect in rects {
        for index in rect.positions().filter_map(|pos| size.index_of(pos)) {
            counts[index] += 1;
        }
    }
    counts
}

/// Returns `true` if every cell of the grid is covered by exactly one rectangle.
///
/// A rectangle reaching outside the grid makes the coverage invalid.
///
/// # Examples
///
/// ```
/// use shikaku_core::{GridSize, Position, Rect};
/// use shikaku_game::validate::is_grid_fully_covered;
///
/// let size = GridSize::new(2, 2);
/// let left = Rect::from_corners(Position::new(0, 0), Position::new(1, 0));
/// let right = Rect::from_corners(Position::new(0, 1), Position::new(1, 1));
/// assert!(is_grid_fully_covered(size, [left, right]));
/// assert!(!is_grid_fully_covered(size, [left]));
/// assert!(!is_grid_fully_covered(size, [left, right, right]));
/// ```
#[must_use]
pub fn is_grid_fully_covered<I>(size: GridSize, rects: I) -> bool
where
    I: IntoIterator<Item = Rect>,
{
    let mut counts = vec![0_usize; size.cell_count()];
    for rect in rects {
        if !rect.fits_in(size) {
            return false;
        }
        for pos in rect.positions() {
            let Some(index) = size.index_of(pos) else {
                return false;
            };
            counts[index] += 1;
            if counts[index] > 1 {
                return false;
            }
        }
    }
    counts.iter().all(|&count| count == 1)
}

/// Result of checking a rectangle that has not been placed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preview {
    /// The rectangle spanned by the two corners.
    pub rect: Rect,
    /// Whether the rectangle would be valid once placed.
    pub is_valid: bool,
    /// The rectangle's area.
    pub area: usize,
}

/// Checks the rectangle spanned by `start` and `end` against the clues.
///
/// The corners may be in any order. Already placed rectangles are ignored, since a
/// committed rectangle replaces whatever it overlaps.
#[must_use]
pub fn preview(start: Position, end: Position, clues: &ClueSet) -> Preview {
    let rect = Rect::from_corners(start, end);
    Preview {
        rect,
        is_valid: validate_rect(rect, clues),
        area: rect.area(),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    fn rect(a: (usize, usize), b: (usize, usize)) -> Rect {
        Rect::from_corners(a.into(), b.into())
    }

    #[test]
    fn test_validate_rect_soundness() {
        let size = GridSize::new(4, 4);
        let clues = ClueSet::new(size, [Clue::new(pos(1, 1), 6)]).unwrap();

        // One clue, matching area
        assert!(validate_rect(rect((0, 0), (1, 2)), &clues));
        assert!(validate_rect(rect((1, 0), (3, 1)), &clues));

        // Perturbed area
        assert!(!validate_rect(rect((0, 0), (1, 1)), &clues));
        assert!(!validate_rect(rect((0, 0), (1, 3)), &clues));

        // Perturbed clue count
        let two_clues =
            ClueSet::new(size, [Clue::new(pos(1, 1), 6), Clue::new(pos(0, 2), 6)]).unwrap();
        assert!(!validate_rect(rect((0, 0), (1, 2)), &two_clues));
        assert!(!validate_rect(rect((2, 0), (3, 2)), &two_clues));
    }

    #[test]
    fn test_is_clue_satisfied() {
        let clue = Clue::new(pos(0, 0), 2);
        let good = rect((0, 0), (0, 1));
        let bad = rect((0, 0), (1, 1));
        let elsewhere = rect((1, 0), (1, 1));

        assert!(is_clue_satisfied(&clue, [good, elsewhere]));
        assert!(!is_clue_satisfied(&clue, [bad]));
        assert!(!is_clue_satisfied(&clue, [elsewhere]));
        assert!(!is_clue_satisfied(&clue, Vec::<Rect>::new()));
        // Covered twice
        assert!(!is_clue_satisfied(&clue, [good, good]));
    }

    #[test]
    fn test_coverage_rejects_out_of_grid_rect() {
        let size = GridSize::new(2, 2);
        let whole = rect((0, 0), (1, 1));
        let outside = rect((0, 0), (2, 1));
        assert!(is_grid_fully_covered(size, [whole]));
        assert!(!is_grid_fully_covered(size, [outside]));
    }

    #[test]
    fn test_preview_normalizes_corners() {
        let clues = ClueSet::new(GridSize::new(3, 3), [Clue::new(pos(1, 1), 4)]).unwrap();
        let square = preview(pos(2, 2), pos(1, 1), &clues);
        assert_eq!(square.rect, rect((1, 1), (2, 2)));
        assert_eq!(square.area, 4);
        assert!(square.is_valid);

        let bottom_row = preview(pos(2, 2), pos(2, 0), &clues);
        assert_eq!(bottom_row.area, 3);
        assert!(!bottom_row.is_valid);
    }

    fn arb_rects() -> impl Strategy<Value = Vec<Rect>> {
        prop::collection::vec(
            (0..4usize, 0..4usize, 0..4usize, 0..4usize)
                .prop_map(|(r0, c0, r1, c1)| rect((r0, c0), (r1, c1))),
            0..6,
        )
    }

    proptest! {
        #[test]
        fn prop_coverage_matches_count_array(rects in arb_rects()) {
            let size = GridSize::new(4, 4);
            let counts = coverage_counts(size, rects.iter().copied());
            let expected = counts.iter().all(|&count| count == 1);
            prop_assert_eq!(is_grid_fully_covered(size, rects.iter().copied()), expected);
        }
    }
}
