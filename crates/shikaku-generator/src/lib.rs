//! Procedural level generation for Shikaku.
//!
//! Levels are built in reverse: the grid is first tiled with random rectangles
//! ([`tile_grid`]), then one clue is placed inside each rectangle
//! ([`derive_clues`]). Every generated level is therefore solvable, and its
//! intended solution is returned alongside it in [`GeneratedLevel`].
//!
//! Difficulty controls the grid size and the preferred rectangle areas; see
//! [`policy`].
//!
//! # Examples
//!
//! ```
//! use shikaku_core::Difficulty;
//! use shikaku_generator::{GenerationSource, LevelGenerator, LevelSeed};
//!
//! let seed: LevelSeed = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1".parse()?;
//! let generated = LevelGenerator::new().generate_with_seed(Difficulty::D3, seed);
//!
//! assert_eq!(generated.source, GenerationSource::Tiled);
//! assert_eq!(generated.solution.len(), generated.level.clues().len());
//! println!("{}", generated.level);
//! # Ok::<(), shikaku_generator::LevelSeedError>(())
//! ```

pub use self::{clues::*, generator::*, seed::*, tiling::*};

mod clues;
mod fallback;
mod generator;
pub mod policy;
mod seed;
mod tiling;
