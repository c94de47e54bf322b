//! Core data structures for Shikaku puzzles.
//!
//! This crate provides the grid model shared by the validator, the solver, and the
//! level generator. Everything here is plain geometry and bookkeeping; it contains no
//! game rules.
//!
//! # Overview
//!
//! 1. **Geometry**
//!    - [`position`]: Cell coordinates `(row, col)`
//!    - [`grid_size`]: Grid dimensions and row-major cell iteration
//!    - [`rect`]: Axis-aligned rectangles of cells
//!
//! 2. **Clues**
//!    - [`clue`]: Numbered hint cells and validated clue sets
//!
//! 3. **Levels**
//!    - [`difficulty`]: Difficulty tiers 1-5
//!    - [`level`]: A complete puzzle description and its share code format
//!    - [`level_dto`]: The JSON-friendly level representation
//!
//! # Examples
//!
//! ```
//! use shikaku_core::{Clue, ClueSet, GridSize, Position, Rect};
//!
//! let size = GridSize::new(2, 2);
//! let clues = ClueSet::new(size, [Clue::new(Position::new(0, 0), 4)])?;
//!
//! let rect = Rect::from_corners(Position::new(1, 1), Position::new(0, 0));
//! assert_eq!(rect.area(), 4);
//! assert_eq!(clues.clues_in(rect).count(), 1);
//! # Ok::<(), shikaku_core::ClueSetError>(())
//! ```

pub mod clue;
pub mod difficulty;
pub mod grid_size;
pub mod level;
pub mod level_dto;
pub mod position;
pub mod rect;

pub use self::{
    clue::{Clue, ClueSet, ClueSetError},
    difficulty::{Difficulty, DifficultyError},
    grid_size::{GridPositions, GridSize},
    level::{Level, LevelCodeError, ShareCode},
    level_dto::{ClueDto, LevelDto, LevelDtoError},
    position::Position,
    rect::{Rect, RectError, RectPositions},
};
