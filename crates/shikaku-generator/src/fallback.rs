//! Guaranteed tiling used when every regular attempt is rejected.

use rand::{Rng, RngExt as _};
use shikaku_core::{GridSize, Position, Rect};

/// Shortest strip the fallback aims for.
const MIN_STRIP: usize = 2;
/// Longest strip the fallback produces.
const MAX_STRIP: usize = 6;

/// Cuts every row into horizontal strips of random length.
///
/// Strip lengths are drawn from `2..=6` and clamped to what is left of the row,
/// so a row may end in a shorter strip. The strips always partition the grid.
pub(crate) fn strip_tiling<R>(size: GridSize, rng: &mut R) -> Vec<Rect>
where
    R: Rng + ?Sized,
{
    let mut rects = Vec::new();
    for row in 0..size.rows() {
        let mut col = 0;
        while col < size.cols() {
            let width = rng
                .random_range(MIN_STRIP..=MAX_STRIP)
                .min(size.cols() - col);
            rects.push(Rect::with_size(Position::new(row, col), 1, width));
            col += width;
        }
    }
    rects
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;
    use shikaku_game::validate::is_grid_fully_covered;

    use super::*;

    #[test]
    fn test_strips_partition_grid() {
        let mut rng = Pcg64::from_seed([9; 32]);
        for rows in 1..10 {
            for cols in 1..10 {
                let size = GridSize::new(rows, cols);
                let rects = strip_tiling(size, &mut rng);
                assert!(is_grid_fully_covered(size, rects.iter().copied()));
                for rect in &rects {
                    assert_eq!(rect.height(), 1);
                    assert!(rect.width() <= MAX_STRIP);
                    // Only the last strip of a row may be short.
                    let ends_row = rect.bottom_right().col + 1 == cols;
                    assert!(rect.width() >= MIN_STRIP || ends_row, "{rect}");
                }
            }
        }
    }
}
