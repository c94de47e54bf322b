use rand::RngExt as _;
use shikaku_core::{ClueSet, Difficulty, GridSize, Level, Rect};

use crate::{LevelSeed, check_clues, derive_clues, fallback, policy, tile_grid};

const SIZE_DOMAIN: &[u8] = b"shikaku/size";
const TILING_DOMAIN: &[u8] = b"shikaku/tiling";
const FALLBACK_DOMAIN: &[u8] = b"shikaku/fallback";

/// Number of tiling attempts made before falling back to strips.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// How a generated level's solution was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum GenerationSource {
    /// A random tiling using the difficulty's preferred areas.
    #[display("tiled")]
    Tiled,
    /// The strip tiling used after every regular attempt was rejected.
    #[display("fallback")]
    Fallback,
}

/// A generated level together with the data needed to reproduce and solve it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLevel {
    /// The seed the level was generated from.
    pub seed: LevelSeed,
    /// The playable level.
    pub level: Level,
    /// The tiling the clues were derived from, in placement order.
    ///
    /// Each rectangle contains exactly one clue, valued at its area. Other
    /// tilings may satisfy the clues as well.
    pub solution: Vec<Rect>,
    /// How the solution was built.
    pub source: GenerationSource,
}

/// A level generator based on reverse construction.
///
/// The generator first tiles the grid with random rectangles, then places one
/// clue inside each rectangle. The resulting level is solvable by construction.
/// Derived clue sets are checked before use; a rejected attempt is retried with a
/// fresh random stream, and once [`max_attempts`](Self::max_attempts) attempts
/// have failed the grid is cut into horizontal strips instead. Generation
/// therefore always succeeds.
///
/// All randomness comes from the [`LevelSeed`], so the same seed and parameters
/// always produce the same level.
///
/// # Examples
///
/// ```
/// use shikaku_core::Difficulty;
/// use shikaku_generator::LevelGenerator;
///
/// let generator = LevelGenerator::new();
/// let generated = generator.generate(Difficulty::D2);
///
/// let level = &generated.level;
/// assert_eq!(level.difficulty(), Difficulty::D2);
/// assert_eq!(level.clues().total_value(), level.size().cell_count());
///
/// // The same seed reproduces the level.
/// let again = generator.generate_with_seed(Difficulty::D2, generated.seed);
/// assert_eq!(again, generated);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelGenerator {
    max_attempts: u32,
}

impl Default for LevelGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelGenerator {
    /// Creates a generator making up to [`DEFAULT_MAX_ATTEMPTS`] attempts per level.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets the number of tiling attempts made before falling back to strips.
    ///
    /// With `0`, every level uses the fallback.
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Returns the number of tiling attempts made before falling back.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Generates a level of `difficulty` from a fresh random seed.
    #[must_use]
    pub fn generate(&self, difficulty: Difficulty) -> GeneratedLevel {
        self.generate_with_seed(difficulty, LevelSeed::random())
    }

    /// Generates a level of `difficulty` from `seed`.
    ///
    /// The grid size is drawn from [`policy::grid_sizes`].
    #[must_use]
    pub fn generate_with_seed(&self, difficulty: Difficulty, seed: LevelSeed) -> GeneratedLevel {
        let sizes = policy::grid_sizes(difficulty);
        let mut rng = seed.rng(SIZE_DOMAIN, 0);
        let size = sizes[rng.random_range(0..sizes.len())];
        self.generate_with_size(size, difficulty, seed)
    }

    /// Generates a level on a grid of `size`, using the preferred rectangle areas
    /// of `difficulty`.
    #[must_use]
    pub fn generate_with_size(
        &self,
        size: GridSize,
        difficulty: Difficulty,
        seed: LevelSeed,
    ) -> GeneratedLevel {
        let preferred_areas = policy::preferred_areas(difficulty);
        for attempt in 0..self.max_attempts {
            let mut rng = seed.rng(TILING_DOMAIN, u64::from(attempt));
            let solution = tile_grid(size, preferred_areas, &mut rng);
            let clues = derive_clues(&solution, &mut rng);
            match check_clues(size, clues) {
                Ok(clues) => {
                    return finish(seed, difficulty, clues, solution, GenerationSource::Tiled);
                }
                Err(err) => {
                    log::debug!("attempt {} on {size} grid rejected: {err}", attempt + 1);
                }
            }
        }

        log::debug!(
            "using strip fallback on {size} grid after {} attempts",
            self.max_attempts
        );
        let mut rng = seed.rng(FALLBACK_DOMAIN, 0);
        let solution = fallback::strip_tiling(size, &mut rng);
        let clues = derive_clues(&solution, &mut rng);
        match check_clues(size, clues) {
            Ok(clues) => finish(seed, difficulty, clues, solution, GenerationSource::Fallback),
            Err(err) => unreachable!("strip tiling produced inconsistent clues: {err}"),
        }
    }

    /// Generates `count` levels of increasing difficulty.
    ///
    /// Difficulties follow [`policy::difficulty_for_progress`], and the `i`-th
    /// level is generated from [`seed.child(i)`](LevelSeed::child).
    ///
    /// # Examples
    ///
    /// ```
    /// use shikaku_core::Difficulty;
    /// use shikaku_generator::{LevelGenerator, LevelSeed};
    ///
    /// let levels = LevelGenerator::new().generate_batch(10, LevelSeed::random());
    /// assert_eq!(levels.len(), 10);
    /// assert_eq!(levels[0].level.difficulty(), Difficulty::D1);
    /// assert_eq!(levels[9].level.difficulty(), Difficulty::D5);
    /// ```
    #[must_use]
    pub fn generate_batch(&self, count: usize, seed: LevelSeed) -> Vec<GeneratedLevel> {
        (0..count)
            .zip(0_u64..)
            .map(|(index, child)| {
                let difficulty = policy::difficulty_for_progress(index, count);
                self.generate_with_seed(difficulty, seed.child(child))
            })
            .collect()
    }
}

fn finish(
    seed: LevelSeed,
    difficulty: Difficulty,
    clues: ClueSet,
    solution: Vec<Rect>,
    source: GenerationSource,
) -> GeneratedLevel {
    log::trace!(
        "generated {} level with {} clues ({source})",
        clues.size(),
        clues.len()
    );
    GeneratedLevel {
        seed,
        level: Level::new(difficulty, clues),
        solution,
        source,
    }
}
