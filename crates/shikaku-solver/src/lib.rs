//! Solver for Shikaku clue sets.
//!
//! [`BacktrackSolver`] searches for tilings of the grid in which every rectangle
//! holds exactly one clue whose value equals its area. It is used to verify
//! generated levels and to classify levels as unsolvable, uniquely solvable, or
//! ambiguous.
//!
//! # Examples
//!
//! ```
//! use shikaku_core::{Clue, ClueSet, GridSize, Position};
//! use shikaku_solver::{BacktrackSolver, Solvability};
//!
//! let clues = ClueSet::new(
//!     GridSize::new(2, 2),
//!     [
//!         Clue::new(Position::new(0, 0), 2),
//!         Clue::new(Position::new(1, 0), 2),
//!     ],
//! )?;
//!
//! let solver = BacktrackSolver::new();
//! let solution = solver.solve(&clues).expect("level should be solvable");
//! assert_eq!(solution.len(), 2);
//! assert_eq!(solver.solvability(&clues), Solvability::Unique);
//! # Ok::<(), shikaku_core::ClueSetError>(())
//! ```

pub use self::backtrack_solver::*;

mod backtrack_solver;
