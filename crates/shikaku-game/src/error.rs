use shikaku_core::{GridSize, Rect};

/// Errors returned by [`Puzzle`](crate::Puzzle) operations.
///
/// An invalid placement is not an error: it is reported through
/// [`PlacedRect::is_valid`](crate::PlacedRect::is_valid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The rectangle reaches outside the grid.
    #[display("rectangle {rect} does not fit in the {size} grid")]
    OutOfGrid {
        /// The rejected rectangle.
        rect: Rect,
        /// The grid size.
        size: GridSize,
    },
}
