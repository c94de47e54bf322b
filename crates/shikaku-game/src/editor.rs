use shikaku_core::{
    Clue, ClueSet, ClueSetError, Difficulty, GridSize, Level, LevelCodeError, Position, ShareCode,
};

/// Minimum number of clues an authored level must have.
pub const MIN_CLUES: usize = 3;

/// Problems found while editing or validating an authored level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EditorError {
    /// The level has no clues at all.
    #[display("add some number clues")]
    NoClues,
    /// The level has fewer than [`MIN_CLUES`] clues.
    #[display("add at least 3 clues (currently {count})")]
    TooFewClues {
        /// Current number of clues.
        count: usize,
    },
    /// The clue values do not add up to the number of cells.
    #[display("clue sum ({sum}) doesn't match grid size ({cells})")]
    SumMismatch {
        /// Sum of all clue values.
        sum: usize,
        /// Number of cells in the grid.
        cells: usize,
    },
    /// A clue cannot be placed.
    #[display("{_0}")]
    InvalidClue(ClueSetError),
}

/// An editor for authoring levels clue by clue.
///
/// The editor keeps its clues consistent with the grid at all times: positions are
/// in bounds, values are positive and at most the cell count, and a cell holds at
/// most one clue. Whether the
/// clues form a playable level is checked by [`LevelEditor::validate`].
///
/// # Example
///
/// ```
/// use shikaku_core::{GridSize, Position};
/// use shikaku_game::{EditorError, LevelEditor};
///
/// let mut editor = LevelEditor::new(GridSize::new(3, 3));
/// editor.add_clue(Position::new(0, 0), 3)?;
/// editor.add_clue(Position::new(1, 1), 3)?;
/// assert_eq!(editor.validate(), Err(EditorError::TooFewClues { count: 2 }));
///
/// editor.add_clue(Position::new(2, 2), 3)?;
/// assert_eq!(editor.validate(), Ok(()));
/// assert_eq!(editor.export_code(), "shikaku://3x3/0,0,3;1,1,3;2,2,3");
/// # Ok::<(), EditorError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelEditor {
    size: GridSize,
    clues: Vec<Clue>,
    is_dirty: bool,
}

impl LevelEditor {
    /// Creates an empty editor for a grid of `size`.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            clues: Vec::new(),
            is_dirty: false,
        }
    }

    /// Creates an editor holding the clues of `level`.
    #[must_use]
    pub fn from_level(level: &Level) -> Self {
        Self {
            size: level.size(),
            clues: level.clues().as_slice().to_vec(),
            is_dirty: false,
        }
    }

    /// Returns the grid size.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the clues in the order they were added.
    #[must_use]
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    /// Returns `true` if the clues changed since the editor was created or last
    /// marked clean.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    /// Marks the current state as saved.
    pub fn mark_clean(&mut self) {
        self.is_dirty = false;
    }

    /// Resizes the grid, dropping clues that no longer fit.
    ///
    /// A clue no longer fits if it lies outside the new grid or asks for more
    /// cells than the new grid has.
    pub fn set_size(&mut self, size: GridSize) {
        if size == self.size {
            return;
        }
        self.size = size;
        self.clues.retain(|clue| ClueSet::check_clue(size, *clue).is_ok());
        self.is_dirty = true;
    }

    /// Places a clue, replacing any clue already at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidClue`] if `position` is outside the grid, or
    /// `value` is zero or larger than the cell count.
    pub fn add_clue(&mut self, position: Position, value: usize) -> Result<(), EditorError> {
        let clue = Clue::new(position, value);
        ClueSet::check_clue(self.size, clue).map_err(EditorError::InvalidClue)?;
        self.clues.retain(|clue| clue.position != position);
        self.clues.push(clue);
        self.is_dirty = true;
        Ok(())
    }

    /// Removes the clue at `position`, returning `true` if there was one.
    pub fn remove_clue(&mut self, position: Position) -> bool {
        let before = self.clues.len();
        self.clues.retain(|clue| clue.position != position);
        let removed = self.clues.len() != before;
        self.is_dirty |= removed;
        removed
    }

    /// Removes every clue.
    pub fn clear_all(&mut self) {
        self.clues.clear();
        self.is_dirty = true;
    }

    /// Checks that the clues could form a playable level.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NoClues`] or [`EditorError::TooFewClues`] for sparse
    /// levels, and [`EditorError::SumMismatch`] if the clue values do not add up to
    /// the cell count.
    pub fn validate(&self) -> Result<(), EditorError> {
        if self.clues.is_empty() {
            return Err(EditorError::NoClues);
        }
        if self.clues.len() < MIN_CLUES {
            return Err(EditorError::TooFewClues {
                count: self.clues.len(),
            });
        }
        let sum: usize = self.clues.iter().map(|clue| clue.value).sum();
        let cells = self.size.cell_count();
        if sum != cells {
            return Err(EditorError::SumMismatch { sum, cells });
        }
        Ok(())
    }

    /// Estimates the difficulty tier from the clue density.
    #[must_use]
    pub fn estimate_difficulty(&self) -> Difficulty {
        Difficulty::from_clue_density(self.clues.len(), self.size.cell_count())
    }

    /// Builds a level from the current clues.
    ///
    /// # Errors
    ///
    /// Returns the first problem reported by [`LevelEditor::validate`].
    pub fn to_level(&self) -> Result<Level, EditorError> {
        self.validate()?;
        let clues = ClueSet::new(self.size, self.clues.iter().copied())
            .map_err(EditorError::InvalidClue)?;
        Ok(Level::new(self.estimate_difficulty(), clues))
    }

    /// Returns the share code for the current grid and clues.
    ///
    /// The code is produced even if the level does not validate yet, so work in
    /// progress can be shared.
    #[must_use]
    pub fn export_code(&self) -> String {
        ShareCode::new(self.size, &self.clues).to_string()
    }

    /// Replaces the grid and clues with those of a share code.
    ///
    /// # Errors
    ///
    /// Returns a [`LevelCodeError`] if the code is malformed. The editor is left
    /// unchanged in that case.
    pub fn import_code(&mut self, code: &str) -> Result<(), LevelCodeError> {
        let level: Level = code.parse()?;
        self.size = level.size();
        self.clues = level.clues().as_slice().to_vec();
        self.is_dirty = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_add_clue_replaces_existing() {
        let mut editor = LevelEditor::new(GridSize::new(4, 4));
        assert!(!editor.is_dirty());
        editor.add_clue(pos(1, 1), 2).unwrap();
        editor.add_clue(pos(1, 1), 6).unwrap();
        assert_eq!(editor.clues(), [Clue::new(pos(1, 1), 6)]);
        assert!(editor.is_dirty());
    }

    #[test]
    fn test_add_clue_rejects_invalid() {
        let mut editor = LevelEditor::new(GridSize::new(2, 2));
        assert_eq!(
            editor.add_clue(pos(2, 0), 2),
            Err(EditorError::InvalidClue(ClueSetError::OutOfBounds {
                position: pos(2, 0),
                size: GridSize::new(2, 2),
            }))
        );
        assert_eq!(
            editor.add_clue(pos(0, 0), 0),
            Err(EditorError::InvalidClue(ClueSetError::ZeroValue {
                position: pos(0, 0)
            }))
        );
        assert_eq!(
            editor.add_clue(pos(1, 1), usize::MAX),
            Err(EditorError::InvalidClue(ClueSetError::ValueTooLarge {
                position: pos(1, 1),
                value: usize::MAX,
                cells: 4,
            }))
        );
        assert!(editor.clues().is_empty());
        assert!(!editor.is_dirty());
        assert_eq!(editor.validate(), Err(EditorError::NoClues));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut editor = LevelEditor::new(GridSize::new(3, 3));
        editor.add_clue(pos(0, 0), 3).unwrap();
        editor.mark_clean();
        assert!(!editor.remove_clue(pos(2, 2)));
        assert!(!editor.is_dirty());
        assert!(editor.remove_clue(pos(0, 0)));
        assert!(editor.is_dirty());

        editor.add_clue(pos(1, 1), 9).unwrap();
        editor.clear_all();
        assert!(editor.clues().is_empty());
    }

    #[test]
    fn test_validate_messages() {
        let mut editor = LevelEditor::new(GridSize::new(3, 3));
        assert_eq!(editor.validate(), Err(EditorError::NoClues));
        assert_eq!(EditorError::NoClues.to_string(), "add some number clues");

        editor.add_clue(pos(0, 0), 3).unwrap();
        editor.add_clue(pos(1, 0), 3).unwrap();
        editor.add_clue(pos(2, 0), 2).unwrap();
        let err = editor.validate().unwrap_err();
        assert_eq!(err, EditorError::SumMismatch { sum: 8, cells: 9 });
        assert_eq!(err.to_string(), "clue sum (8) doesn't match grid size (9)");
        assert_eq!(
            EditorError::TooFewClues { count: 1 }.to_string(),
            "add at least 3 clues (currently 1)"
        );
    }

    #[test]
    fn test_set_size_drops_clues_outside() {
        let mut editor = LevelEditor::new(GridSize::new(4, 4));
        editor.add_clue(pos(0, 0), 4).unwrap();
        editor.add_clue(pos(3, 3), 4).unwrap();
        editor.set_size(GridSize::new(3, 4));
        assert_eq!(editor.clues(), [Clue::new(pos(0, 0), 4)]);

        editor.add_clue(pos(1, 1), 12).unwrap();
        editor.set_size(GridSize::new(2, 3));
        assert_eq!(editor.clues(), [Clue::new(pos(0, 0), 4)]);
        assert!(editor.to_level().is_err());
    }

    #[test]
    fn test_to_level_and_difficulty() {
        let mut editor = LevelEditor::new(GridSize::new(3, 3));
        editor.add_clue(pos(0, 1), 3).unwrap();
        editor.add_clue(pos(1, 0), 3).unwrap();
        editor.add_clue(pos(2, 2), 3).unwrap();
        let level = editor.to_level().unwrap();
        assert_eq!(level.size(), GridSize::new(3, 3));
        assert_eq!(level.clues().len(), 3);
        assert_eq!(level.difficulty(), Difficulty::D2);
        assert_eq!(editor.estimate_difficulty(), Difficulty::D2);
    }

    #[test]
    fn test_export_import_code() {
        let mut editor = LevelEditor::new(GridSize::new(9, 6));
        editor.add_clue(pos(0, 1), 8).unwrap();
        editor.add_clue(pos(0, 5), 4).unwrap();
        let code = editor.export_code();
        assert_eq!(code, "shikaku://9x6/0,1,8;0,5,4");

        let mut other = LevelEditor::new(GridSize::new(2, 2));
        other.import_code(&code).unwrap();
        assert_eq!(other.size(), GridSize::new(9, 6));
        assert_eq!(other.clues(), editor.clues());
        assert!(other.is_dirty());

        let before = other.clone();
        assert_eq!(
            other.import_code("shikaku://9x6"),
            Err(LevelCodeError::MissingSeparator)
        );
        assert_eq!(other, before);
    }
}
