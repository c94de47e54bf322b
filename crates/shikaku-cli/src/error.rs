use std::{io, path::PathBuf};

use shikaku_core::LevelCodeError;
use shikaku_game::GameError;

/// Errors reported by the `shikaku` tool.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    /// An input file could not be opened.
    #[display("failed to read {}: {source}", path.display())]
    ReadFile {
        /// The file that failed to open.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// Reading stdin or writing stdout failed.
    #[display("I/O error: {_0}")]
    Io(#[from] io::Error),
    /// Level JSON could not be parsed or written.
    #[display("invalid level JSON: {_0}")]
    Json(#[from] serde_json::Error),
    /// A share code could not be parsed.
    #[display("invalid share code: {_0}")]
    Code(#[from] LevelCodeError),
    /// A rectangle could not be placed on the board.
    #[display("invalid placement: {_0}")]
    Game(#[from] GameError),
    /// The requested grid size is outside the supported range.
    #[display("invalid grid size: {rows}x{cols}")]
    GridSize {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },
    /// A share code describes a level with no solution.
    #[display("level has no solution")]
    Unsolvable,
}
