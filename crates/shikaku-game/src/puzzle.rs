use shikaku_core::{Clue, ClueSet, GridSize, Level, Position, Rect};

use crate::{
    GameError,
    validate::{self, Preview},
};

/// A rectangle committed to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedRect {
    /// The covered cells.
    pub rect: Rect,
    /// Whether the rectangle holds exactly one clue whose value equals its area.
    pub is_valid: bool,
    /// Display tag (e.g. a palette index), assigned in commit order.
    pub tag: u32,
}

/// A clue together with its current satisfaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClueState {
    /// The clue.
    pub clue: Clue,
    /// Whether exactly one rectangle covers the clue with a matching area.
    pub is_satisfied: bool,
}

/// What happened when a rectangle was committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertOutcome {
    /// Previously placed rectangles that overlapped the new one and were removed.
    pub removed: Vec<Rect>,
    /// Whether the new rectangle is valid.
    pub is_valid: bool,
    /// Whether the puzzle is complete after the commit.
    pub is_complete: bool,
}

/// A Shikaku play session.
///
/// Holds the clues of a level and the rectangles placed so far. Placed rectangles
/// never overlap: committing a rectangle erases every rectangle it overlaps. After
/// every change all rectangle and clue flags are recomputed, so they always reflect
/// the current board.
///
/// # Example
///
/// ```
/// use shikaku_core::{Clue, Difficulty, GridSize, Level, Position};
/// use shikaku_game::Puzzle;
///
/// let level = Level::from_clues(
///     GridSize::new(2, 2),
///     Difficulty::D1,
///     [Clue::new(Position::new(0, 0), 4)],
/// )?;
/// let mut puzzle = Puzzle::new(&level);
///
/// let outcome = puzzle.commit_drag(Position::new(0, 0), Position::new(0, 1))?;
/// assert!(!outcome.is_valid);
/// assert!(!puzzle.clues()[0].is_satisfied);
/// assert!(!puzzle.is_complete());
///
/// // A larger rectangle replaces the one it overlaps
/// let outcome = puzzle.commit_drag(Position::new(1, 1), Position::new(0, 0))?;
/// assert_eq!(outcome.removed.len(), 1);
/// assert!(puzzle.is_complete());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    clue_set: ClueSet,
    clues: Vec<ClueState>,
    rects: Vec<PlacedRect>,
    next_tag: u32,
    is_complete: bool,
}

impl Puzzle {
    /// Creates an empty board for `level`.
    #[must_use]
    pub fn new(level: &Level) -> Self {
        Self::from_clues(level.clues().clone())
    }

    /// Creates an empty board from a clue set.
    #[must_use]
    pub fn from_clues(clue_set: ClueSet) -> Self {
        let clues = clue_set
            .iter()
            .map(|&clue| ClueState {
                clue,
                is_satisfied: false,
            })
            .collect();
        let mut this = Self {
            clue_set,
            clues,
            rects: Vec::new(),
            next_tag: 0,
            is_complete: false,
        };
        this.revalidate();
        this
    }

    /// Returns the grid size.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.clue_set.size()
    }

    /// Returns the clue set.
    #[must_use]
    pub fn clue_set(&self) -> &ClueSet {
        &self.clue_set
    }

    /// Returns the clues with their satisfaction flags, in clue set order.
    #[must_use]
    pub fn clues(&self) -> &[ClueState] {
        &self.clues
    }

    /// Returns the placed rectangles in commit order.
    #[must_use]
    pub fn rects(&self) -> &[PlacedRect] {
        &self.rects
    }

    /// Returns the placed rectangle covering `pos`, if any.
    #[must_use]
    pub fn rect_at(&self, pos: Position) -> Option<&PlacedRect> {
        self.rects.iter().find(|placed| placed.rect.contains(pos))
    }

    /// Returns `true` if every clue is satisfied, every placed rectangle is valid,
    /// and every cell is covered exactly once.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Checks the rectangle spanned by `start` and `end` without placing it.
    ///
    /// See [`validate::preview`].
    #[must_use]
    pub fn preview(&self, start: Position, end: Position) -> Preview {
        validate::preview(start, end, &self.clue_set)
    }

    /// Commits the rectangle spanned by the two drag corners, given in any order.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfGrid`] if a corner lies outside the grid.
    pub fn commit_drag(
        &mut self,
        start: Position,
        end: Position,
    ) -> Result<InsertOutcome, GameError> {
        self.insert_or_replace(Rect::from_corners(start, end))
    }

    /// Places `rect`, first removing every placed rectangle that overlaps it.
    ///
    /// All rectangle and clue flags are recomputed afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfGrid`] if `rect` does not fit in the grid. The board
    /// is left untouched in that case.
    pub fn insert_or_replace(&mut self, rect: Rect) -> Result<InsertOutcome, GameError> {
        let size = self.size();
        if !rect.fits_in(size) {
            return Err(GameError::OutOfGrid { rect, size });
        }

        let mut removed = Vec::new();
        self.rects.retain(|placed| {
            let overlaps = placed.rect.overlaps(&rect);
            if overlaps {
                removed.push(placed.rect);
            }
            !overlaps
        });

        let tag = self.next_tag;
        self.next_tag = self.next_tag.wrapping_add(1);
        self.rects.push(PlacedRect {
            rect,
            is_valid: false,
            tag,
        });
        self.revalidate();

        let is_valid = self.rects.last().is_some_and(|placed| placed.is_valid);
        Ok(InsertOutcome {
            removed,
            is_valid,
            is_complete: self.is_complete,
        })
    }

    /// Removes the rectangle covering `pos` and returns it.
    ///
    /// Returns `None` if no rectangle covers `pos`.
    pub fn remove_at(&mut self, pos: Position) -> Option<Rect> {
        let index = self
            .rects
            .iter()
            .position(|placed| placed.rect.contains(pos))?;
        let placed = self.rects.remove(index);
        self.revalidate();
        Some(placed.rect)
    }

    /// Removes every rectangle and restarts tag assignment.
    pub fn clear(&mut self) {
        self.rects.clear();
        self.next_tag = 0;
        self.revalidate();
    }

    fn placed_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.rects.iter().map(|placed| placed.rect)
    }

    // Recomputes every flag from scratch, not just those near the edit.
    fn revalidate(&mut self) {
        for placed in &mut self.rects {
            placed.is_valid = validate::validate_rect(placed.rect, &self.clue_set);
        }
        let rects: Vec<Rect> = self.placed_rects().collect();
        for state in &mut self.clues {
            state.is_satisfied = validate::is_clue_satisfied(&state.clue, rects.iter().copied());
        }

        self.is_complete = self.clues.iter().all(|state| state.is_satisfied)
            && self.rects.iter().all(|placed| placed.is_valid)
            && validate::is_grid_fully_covered(self.size(), rects);
    }
}

#[cfg(test)]
mod tests {
    use shikaku_core::Difficulty;

    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    fn rect(a: (usize, usize), b: (usize, usize)) -> Rect {
        Rect::from_corners(a.into(), b.into())
    }

    fn level(rows: usize, cols: usize, clues: &[(usize, usize, usize)]) -> Level {
        Level::from_clues(
            GridSize::new(rows, cols),
            Difficulty::D1,
            clues
                .iter()
                .map(|&(row, col, value)| Clue::new(pos(row, col), value)),
        )
        .unwrap()
    }

    fn three_by_three() -> Puzzle {
        Puzzle::new(&level(3, 3, &[(0, 1, 3), (1, 0, 3), (2, 2, 3)]))
    }

    #[test]
    fn test_new_puzzle_is_incomplete() {
        let puzzle = three_by_three();
        assert!(puzzle.rects().is_empty());
        assert!(puzzle.clues().iter().all(|state| !state.is_satisfied));
        assert!(!puzzle.is_complete());
    }

    #[test]
    fn test_completion_requires_all_conditions() {
        let mut puzzle = three_by_three();
        for row in 0..3 {
            puzzle.insert_or_replace(rect((row, 0), (row, 2))).unwrap();
        }
        assert!(puzzle.rects().iter().all(|placed| placed.is_valid));
        assert!(puzzle.clues().iter().all(|state| state.is_satisfied));
        assert!(puzzle.is_complete());

        // Removing any single rectangle breaks completion
        for row in 0..3 {
            let mut partial = puzzle.clone();
            assert_eq!(partial.remove_at(pos(row, 1)), Some(rect((row, 0), (row, 2))));
            assert!(!partial.is_complete());
        }
    }

    #[test]
    fn test_full_coverage_without_valid_rects_is_incomplete() {
        let mut puzzle = three_by_three();
        // The 2x2 block holds two clues, the strip beside it holds none
        puzzle.insert_or_replace(rect((0, 0), (1, 1))).unwrap();
        puzzle.insert_or_replace(rect((0, 2), (1, 2))).unwrap();
        puzzle.insert_or_replace(rect((2, 0), (2, 2))).unwrap();
        assert!(validate::is_grid_fully_covered(
            puzzle.size(),
            puzzle.rects().iter().map(|placed| placed.rect)
        ));
        let validity: Vec<_> = puzzle.rects().iter().map(|placed| placed.is_valid).collect();
        assert_eq!(validity, [false, false, true]);
        assert!(!puzzle.is_complete());
    }

    #[test]
    fn test_insert_replaces_overlapping_rects_only() {
        let mut puzzle = three_by_three();
        puzzle.insert_or_replace(rect((0, 0), (0, 1))).unwrap();
        puzzle.insert_or_replace(rect((1, 0), (1, 1))).unwrap();
        puzzle.insert_or_replace(rect((2, 2), (2, 2))).unwrap();
        assert_eq!(puzzle.rects().len(), 3);

        let outcome = puzzle.insert_or_replace(rect((0, 1), (1, 1))).unwrap();
        assert_eq!(
            outcome.removed,
            [rect((0, 0), (0, 1)), rect((1, 0), (1, 1))]
        );
        let remaining: Vec<_> = puzzle.rects().iter().map(|placed| placed.rect).collect();
        assert_eq!(remaining, [rect((2, 2), (2, 2)), rect((0, 1), (1, 1))]);
    }

    #[test]
    fn test_tags_follow_commit_order_and_reset_on_clear() {
        let mut puzzle = three_by_three();
        puzzle.insert_or_replace(rect((0, 0), (0, 2))).unwrap();
        puzzle.insert_or_replace(rect((1, 0), (1, 2))).unwrap();
        let tags: Vec<_> = puzzle.rects().iter().map(|placed| placed.tag).collect();
        assert_eq!(tags, [0, 1]);

        puzzle.clear();
        assert!(puzzle.rects().is_empty());
        assert!(puzzle.clues().iter().all(|state| !state.is_satisfied));
        puzzle.insert_or_replace(rect((2, 0), (2, 2))).unwrap();
        assert_eq!(puzzle.rects()[0].tag, 0);
    }

    #[test]
    fn test_out_of_grid_commit_is_rejected() {
        let mut puzzle = three_by_three();
        puzzle.insert_or_replace(rect((0, 0), (0, 2))).unwrap();
        let before = puzzle.clone();

        let result = puzzle.commit_drag(pos(2, 2), pos(3, 3));
        assert_eq!(
            result,
            Err(GameError::OutOfGrid {
                rect: rect((2, 2), (3, 3)),
                size: GridSize::new(3, 3),
            })
        );
        assert_eq!(puzzle, before);
    }

    #[test]
    fn test_remove_at_empty_cell() {
        let mut puzzle = three_by_three();
        puzzle.insert_or_replace(rect((0, 0), (0, 2))).unwrap();
        assert_eq!(puzzle.remove_at(pos(2, 2)), None);
        assert_eq!(puzzle.rects().len(), 1);
        assert!(puzzle.rect_at(pos(0, 1)).is_some());
        assert!(puzzle.rect_at(pos(1, 1)).is_none());
    }

    #[test]
    fn test_two_by_two_scenario() {
        let level = level(2, 2, &[(0, 0, 4)]);

        let mut puzzle = Puzzle::new(&level);
        let outcome = puzzle.commit_drag(pos(0, 0), pos(1, 1)).unwrap();
        assert!(outcome.is_valid);
        assert!(outcome.is_complete);
        assert!(puzzle.is_complete());

        let mut puzzle = Puzzle::new(&level);
        let outcome = puzzle.commit_drag(pos(0, 0), pos(0, 1)).unwrap();
        assert!(!outcome.is_valid);
        assert!(!puzzle.rects()[0].is_valid);
        assert!(!puzzle.clues()[0].is_satisfied);
        assert!(!puzzle.is_complete());
    }

    #[test]
    fn test_preview_ignores_placed_rects() {
        let mut puzzle = Puzzle::new(&level(2, 2, &[(0, 0, 4)]));
        puzzle.commit_drag(pos(0, 0), pos(0, 1)).unwrap();
        let preview = puzzle.preview(pos(1, 1), pos(0, 0));
        assert!(preview.is_valid);
        assert_eq!(preview.area, 4);
        // Preview does not mutate
        assert_eq!(puzzle.rects().len(), 1);
    }
}
