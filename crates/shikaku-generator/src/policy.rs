//! Difficulty-dependent generation parameters.

use shikaku_core::{Difficulty, GridSize};

/// Returns the rectangle areas the tiler prefers for `difficulty`.
///
/// Repeated entries make an area more likely to be tried first.
///
/// # Examples
///
/// ```
/// use shikaku_core::Difficulty;
/// use shikaku_generator::policy;
///
/// assert_eq!(policy::preferred_areas(Difficulty::D1), [2, 2, 3, 3, 4]);
/// assert_eq!(policy::preferred_areas(Difficulty::D5).last(), Some(&16));
/// ```
#[must_use]
pub const fn preferred_areas(difficulty: Difficulty) -> &'static [usize] {
    match difficulty {
        Difficulty::D1 => &[2, 2, 3, 3, 4],
        Difficulty::D2 => &[2, 3, 3, 4, 4, 6],
        Difficulty::D3 => &[2, 3, 4, 4, 6, 6, 8],
        Difficulty::D4 => &[3, 4, 6, 6, 8, 9, 12],
        Difficulty::D5 => &[4, 6, 8, 9, 12, 15, 16],
    }
}

/// Returns the grid sizes a level of `difficulty` is drawn from.
#[must_use]
pub const fn grid_sizes(difficulty: Difficulty) -> &'static [GridSize] {
    const D1: [GridSize; 3] = [GridSize::new(4, 4), GridSize::new(5, 4), GridSize::new(4, 5)];
    const D2: [GridSize; 3] = [GridSize::new(5, 5), GridSize::new(6, 4), GridSize::new(5, 6)];
    const D3: [GridSize; 3] = [GridSize::new(6, 5), GridSize::new(6, 6), GridSize::new(7, 5)];
    const D4: [GridSize; 3] = [GridSize::new(7, 6), GridSize::new(8, 5), GridSize::new(6, 7)];
    const D5: [GridSize; 3] = [GridSize::new(8, 6), GridSize::new(9, 6), GridSize::new(7, 7)];
    match difficulty {
        Difficulty::D1 => &D1,
        Difficulty::D2 => &D2,
        Difficulty::D3 => &D3,
        Difficulty::D4 => &D4,
        Difficulty::D5 => &D5,
    }
}

/// Returns the difficulty of the `index`-th level in a batch of `total`.
///
/// The first 10% of a batch is [`D1`](Difficulty::D1), the next 20% `D2`, the
/// next 30% `D3`, the next 20% `D4`, and the rest `D5`.
///
/// # Examples
///
/// ```
/// use shikaku_core::Difficulty;
/// use shikaku_generator::policy::difficulty_for_progress;
///
/// assert_eq!(difficulty_for_progress(0, 10), Difficulty::D1);
/// assert_eq!(difficulty_for_progress(1, 10), Difficulty::D2);
/// assert_eq!(difficulty_for_progress(9, 10), Difficulty::D5);
/// ```
#[must_use]
pub const fn difficulty_for_progress(index: usize, total: usize) -> Difficulty {
    // index / total < n / 10, without rounding
    let scaled = index.saturating_mul(10);
    if scaled < total {
        Difficulty::D1
    } else if scaled < total.saturating_mul(3) {
        Difficulty::D2
    } else if scaled < total.saturating_mul(6) {
        Difficulty::D3
    } else if scaled < total.saturating_mul(8) {
        Difficulty::D4
    } else {
        Difficulty::D5
    }
}
