use shikaku_core::{ClueSet, GridSize, Position, Rect};

/// How many solutions a clue set admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum Solvability {
    /// No tiling satisfies the clues.
    #[display("unsolvable")]
    Unsolvable,
    /// Exactly one tiling satisfies the clues.
    #[display("unique")]
    Unique,
    /// Two or more tilings satisfy the clues.
    #[display("multiple solutions")]
    Multiple,
}

impl Solvability {
    /// Classifies a solution count.
    ///
    /// # Examples
    ///
    /// ```
    /// use shikaku_solver::Solvability;
    ///
    /// assert_eq!(Solvability::from_count(0), Solvability::Unsolvable);
    /// assert_eq!(Solvability::from_count(1), Solvability::Unique);
    /// assert_eq!(Solvability::from_count(7), Solvability::Multiple);
    /// ```
    #[must_use]
    pub const fn from_count(count: usize) -> Self {
        match count {
            0 => Self::Unsolvable,
            1 => Self::Unique,
            _ => Self::Multiple,
        }
    }
}

/// An exhaustive depth-first solver.
///
/// The search repeatedly takes the first uncovered cell in row-major order. Every
/// cell before it is covered, so that cell must be the top-left corner of the
/// rectangle covering it. The solver tries each rectangle anchored there that lies
/// on uncovered cells and holds exactly one clue of matching value, then recurses.
///
/// Clue sets whose values do not add up to the cell count are rejected before the
/// search starts.
///
/// # Examples
///
/// ```
/// use shikaku_core::{Clue, ClueSet, GridSize, Position};
/// use shikaku_solver::BacktrackSolver;
///
/// // Both the three rows and the three columns satisfy these clues.
/// let clues = ClueSet::new(
///     GridSize::new(3, 3),
///     (0..3).map(|i| Clue::new(Position::new(i, i), 3)),
/// )?;
/// let solver = BacktrackSolver::new();
/// assert_eq!(solver.count_solutions(&clues, 10), 2);
/// assert_eq!(solver.count_solutions(&clues, 1), 1);
/// # Ok::<(), shikaku_core::ClueSetError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackSolver {}

impl BacktrackSolver {
    /// Creates a solver.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Finds one tiling that satisfies `clues`.
    ///
    /// Rectangles are returned in the order of their top-left corners.
    /// Returns `None` if the clue set has no solution.
    #[must_use]
    pub fn solve(&self, clues: &ClueSet) -> Option<Vec<Rect>> {
        let mut solution = None;
        self.run(clues, 1, |rects| solution = Some(rects.to_vec()));
        solution
    }

    /// Counts the tilings that satisfy `clues`, stopping once `limit` have been
    /// found.
    #[must_use]
    pub fn count_solutions(&self, clues: &ClueSet, limit: usize) -> usize {
        self.run(clues, limit, |_| {})
    }

    /// Classifies `clues` by their number of solutions.
    #[must_use]
    pub fn solvability(&self, clues: &ClueSet) -> Solvability {
        Solvability::from_count(self.count_solutions(clues, 2))
    }

    fn run<F>(&self, clues: &ClueSet, limit: usize, mut on_solution: F) -> usize
    where
        F: FnMut(&[Rect]),
    {
        let size = clues.size();
        if limit == 0 {
            return 0;
        }
        if clues.total_value() != size.cell_count() {
            log::trace!(
                "clue sum {} does not match {} cells",
                clues.total_value(),
                size.cell_count()
            );
            return 0;
        }

        let mut search = Search::new(clues, limit);
        search.visit(0, &mut on_solution);
        log::trace!(
            "searched {size} grid: {} nodes, {} solutions",
            search.nodes,
            search.found
        );
        search.found
    }
}

struct Search<'a> {
    size: GridSize,
    clues: &'a ClueSet,
    covered: Vec<bool>,
    placed: Vec<Rect>,
    limit: usize,
    found: usize,
    nodes: usize,
}

impl<'a> Search<'a> {
    fn new(clues: &'a ClueSet, limit: usize) -> Self {
        let size = clues.size();
        Self {
            size,
            clues,
            covered: vec![false; size.cell_count()],
            placed: Vec::with_capacity(clues.len()),
            limit,
            found: 0,
            nodes: 0,
        }
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size.cols() + col
    }

    fn visit<F>(&mut self, start: usize, on_solution: &mut F)
    where
        F: FnMut(&[Rect]),
    {
        self.nodes += 1;
        let Some(index) = (start..self.covered.len()).find(|&i| !self.covered[i]) else {
            self.found += 1;
            on_solution(&self.placed);
            return;
        };

        let anchor = Position::new(index / self.size.cols(), index % self.size.cols());
        for rect in self.candidates(anchor) {
            self.mark(rect, true);
            self.placed.push(rect);
            self.visit(index + 1, on_solution);
            self.placed.pop();
            self.mark(rect, false);
            if self.found >= self.limit {
                return;
            }
        }
    }

    fn mark(&mut self, rect: Rect, covered: bool) {
        for pos in rect.positions() {
            let index = self.index(pos.row, pos.col);
            self.covered[index] = covered;
        }
    }

    /// Rectangles anchored at `anchor` that could be placed next.
    fn candidates(&self, anchor: Position) -> Vec<Rect> {
        let mut candidates = Vec::new();
        let mut max_width = self.size.cols() - anchor.col;
        for height in 1..=self.size.rows() - anchor.row {
            let row = anchor.row + height - 1;
            if let Some(blocked) =
                (0..max_width).find(|&dc| self.covered[self.index(row, anchor.col + dc)])
            {
                max_width = blocked;
            }
            if max_width == 0 {
                break;
            }

            for width in 1..=max_width {
                let rect = Rect::with_size(anchor, height, width);
                let mut inside = self.clues.clues_in(rect);
                match (inside.next(), inside.next()) {
                    (Some(clue), None) if clue.value == rect.area() => candidates.push(rect),
                    (Some(clue), None) if clue.value < rect.area() => break,
                    (Some(_), Some(_)) => break,
                    _ => {}
                }
            }
        }
        candidates
    }
}
