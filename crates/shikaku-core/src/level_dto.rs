//! JSON-friendly level representation.
//!
//! [`LevelDto`] mirrors the interchange shape used for bulk import and export:
//!
//! ```json
//! { "gridRows": 2, "gridCols": 2, "difficulty": 1,
//!   "clues": [{ "row": 0, "col": 0, "value": 4 }] }
//! ```
//!
//! Converting a DTO into a [`Level`] validates everything a level source may get
//! wrong: grid dimensions, difficulty range, clue bounds, values, and duplicates.

use serde::{Deserialize, Serialize};

use crate::{Clue, ClueSet, ClueSetError, Difficulty, DifficultyError, GridSize, Level, Position};

/// A single clue as stored in level files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueDto {
    /// Row of the clue cell.
    pub row: usize,
    /// Column of the clue cell.
    pub col: usize,
    /// Required rectangle area.
    pub value: usize,
}

/// A level as stored in level files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelDto {
    /// Number of grid rows.
    pub grid_rows: usize,
    /// Number of grid columns.
    pub grid_cols: usize,
    /// Difficulty tier (1-5).
    pub difficulty: u8,
    /// Numbered hint cells.
    pub clues: Vec<ClueDto>,
}

/// Errors that can occur when converting a [`LevelDto`] into a [`Level`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum LevelDtoError {
    /// A grid dimension is zero or larger than [`GridSize::MAX_DIM`].
    #[display("invalid grid size: {rows}x{cols} (each dimension must be 1-64)")]
    InvalidSize {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },
    /// The difficulty is outside 1-5.
    #[display("{_0}")]
    Difficulty(#[from] DifficultyError),
    /// The clues are inconsistent with the grid.
    #[display("{_0}")]
    Clues(#[from] ClueSetError),
}

impl From<&Level> for LevelDto {
    fn from(level: &Level) -> Self {
        let size = level.size();
        Self {
            grid_rows: size.rows(),
            grid_cols: size.cols(),
            difficulty: level.difficulty().value(),
            clues: level
                .clues()
                .iter()
                .map(|clue| ClueDto {
                    row: clue.position.row,
                    col: clue.position.col,
                    value: clue.value,
                })
                .collect(),
        }
    }
}

impl TryFrom<LevelDto> for Level {
    type Error = LevelDtoError;

    fn try_from(value: LevelDto) -> Result<Self, Self::Error> {
        let size = GridSize::try_new(value.grid_rows, value.grid_cols).ok_or(
            LevelDtoError::InvalidSize {
                rows: value.grid_rows,
                cols: value.grid_cols,
            },
        )?;
        let difficulty = Difficulty::try_from(value.difficulty)?;
        let clues = ClueSet::new(
            size,
            value
                .clues
                .iter()
                .map(|clue| Clue::new(Position::new(clue.row, clue.col), clue.value)),
        )?;
        Ok(Level::new(difficulty, clues))
    }
}
