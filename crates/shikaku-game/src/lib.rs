//! Play session and rule checking for Shikaku puzzles.
//!
//! - [`validate`]: pure rule checks for rectangles, clues, and grid coverage
//! - [`Puzzle`]: a play session tracking placed rectangles and completion
//! - [`LevelEditor`]: authoring of clue sets, with share code import/export
//!
//! # Examples
//!
//! ```
//! use shikaku_core::{Clue, Difficulty, GridSize, Level, Position};
//! use shikaku_game::Puzzle;
//!
//! let level = Level::from_clues(
//!     GridSize::new(2, 2),
//!     Difficulty::D1,
//!     [Clue::new(Position::new(0, 0), 4)],
//! )?;
//! let mut puzzle = Puzzle::new(&level);
//!
//! let outcome = puzzle.commit_drag(Position::new(0, 0), Position::new(1, 1))?;
//! assert!(outcome.is_valid);
//! assert!(puzzle.is_complete());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{editor::*, error::*, puzzle::*};

mod editor;
mod error;
mod puzzle;
pub mod validate;
