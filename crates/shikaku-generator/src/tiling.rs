//! Random tilings of a grid by rectangles.

use rand::{Rng, seq::SliceRandom as _};
use shikaku_core::{GridSize, Position, Rect};

/// Cell coverage of a partially tiled grid.
#[derive(Debug, Clone)]
pub(crate) struct Coverage {
    size: GridSize,
    covered: Vec<bool>,
}

impl Coverage {
    pub(crate) fn new(size: GridSize) -> Self {
        Self {
            size,
            covered: vec![false; size.cell_count()],
        }
    }

    pub(crate) fn is_covered(&self, pos: Position) -> bool {
        self.size
            .index_of(pos)
            .is_none_or(|index| self.covered[index])
    }

    /// Returns `true` if `rect` lies inside the grid on uncovered cells only.
    pub(crate) fn can_place(&self, rect: Rect) -> bool {
        rect.fits_in(self.size) && rect.positions().all(|pos| !self.is_covered(pos))
    }

    pub(crate) fn place(&mut self, rect: Rect) {
        for pos in rect.positions() {
            if let Some(index) = self.size.index_of(pos) {
                self.covered[index] = true;
            }
        }
    }
}

/// Returns the `(height, width)` pairs whose product is `area`, in order of
/// increasing width.
fn dimensions(area: usize) -> Vec<(usize, usize)> {
    (1..=area)
        .filter(|width| area % width == 0)
        .map(|width| (area / width, width))
        .collect()
}

/// Tiles `size` with rectangles whose areas are drawn from `preferred_areas`.
///
/// Cells are visited in row-major order. At each uncovered cell the tiler tries
/// the preferred areas that fit in the remaining bounds, in random order, and for
/// each area its shapes in random order, placing the first rectangle that covers
/// only free cells. When nothing fits the cell becomes a 1×1 rectangle, so the
/// result always partitions the grid.
///
/// Rectangles are returned in the order they were placed.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
/// use shikaku_core::GridSize;
/// use shikaku_generator::tile_grid;
///
/// let mut rng = Pcg64::from_seed([7; 32]);
/// let size = GridSize::new(4, 5);
/// let rects = tile_grid(size, &[2, 3, 4], &mut rng);
/// assert_eq!(rects.iter().map(|rect| rect.area()).sum::<usize>(), size.cell_count());
/// ```
pub fn tile_grid<R>(size: GridSize, preferred_areas: &[usize], rng: &mut R) -> Vec<Rect>
where
    R: Rng + ?Sized,
{
    let mut coverage = Coverage::new(size);
    let mut rects = Vec::new();
    for anchor in size.positions() {
        if coverage.is_covered(anchor) {
            continue;
        }
        let rect = place_preferred(&coverage, anchor, preferred_areas, rng)
            .unwrap_or_else(|| Rect::single(anchor));
        coverage.place(rect);
        rects.push(rect);
    }
    rects
}

fn place_preferred<R>(
    coverage: &Coverage,
    anchor: Position,
    preferred_areas: &[usize],
    rng: &mut R,
) -> Option<Rect>
where
    R: Rng + ?Sized,
{
    let size = coverage.size;
    let bound_area = (size.rows() - anchor.row) * (size.cols() - anchor.col);
    let mut areas = preferred_areas
        .iter()
        .copied()
        .filter(|&area| area > 0 && area <= bound_area)
        .collect::<Vec<_>>();
    areas.shuffle(rng);

    for area in areas {
        let mut shapes = dimensions(area);
        shapes.shuffle(rng);
        let placed = shapes
            .into_iter()
            .map(|(height, width)| Rect::with_size(anchor, height, width))
            .find(|&rect| coverage.can_place(rect));
        if placed.is_some() {
            return placed;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;
    use shikaku_game::validate::is_grid_fully_covered;

    use super::*;

    #[test]
    fn test_dimensions() {
        assert_eq!(dimensions(1), [(1, 1)]);
        assert_eq!(dimensions(6), [(6, 1), (3, 2), (2, 3), (1, 6)]);
        assert_eq!(dimensions(7), [(7, 1), (1, 7)]);
    }

    #[test]
    fn test_coverage() {
        let mut coverage = Coverage::new(GridSize::new(2, 3));
        let left = Rect::with_size(Position::new(0, 0), 2, 1);
        assert!(coverage.can_place(left));
        coverage.place(left);
        assert!(coverage.is_covered(Position::new(1, 0)));
        assert!(!coverage.can_place(Rect::with_size(Position::new(0, 0), 1, 2)));
        assert!(!coverage.can_place(Rect::with_size(Position::new(0, 2), 1, 2)));
        assert!(coverage.can_place(Rect::with_size(Position::new(0, 1), 2, 2)));
        // Outside the grid counts as covered.
        assert!(coverage.is_covered(Position::new(2, 0)));
    }

    #[test]
    fn test_tiling_partitions_grid() {
        let mut rng = Pcg64::from_seed([1; 32]);
        for rows in 1..8 {
            for cols in 1..8 {
                let size = GridSize::new(rows, cols);
                let rects = tile_grid(size, &[2, 3, 4, 6], &mut rng);
                assert!(is_grid_fully_covered(size, rects.iter().copied()));
            }
        }
    }

    #[test]
    fn test_areas_come_from_table_or_singletons() {
        let mut rng = Pcg64::from_seed([2; 32]);
        let preferred = [4, 6, 9];
        let rects = tile_grid(GridSize::new(7, 7), &preferred, &mut rng);
        for rect in rects {
            assert!(rect.area() == 1 || preferred.contains(&rect.area()), "{rect}");
        }
    }

    #[test]
    fn test_unusable_table_yields_singletons() {
        let mut rng = Pcg64::from_seed([3; 32]);
        let size = GridSize::new(2, 2);
        let rects = tile_grid(size, &[16], &mut rng);
        assert_eq!(rects.len(), 4);
        assert!(rects.iter().all(|rect| rect.area() == 1));
    }
}
