use std::io::Write;

use shikaku_core::Level;
use shikaku_game::Puzzle;
use shikaku_solver::BacktrackSolver;

use crate::{CliError, SolveArgs};

const LABELS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Solves the share code in `args` and writes the tiling to `out`.
///
/// The output is a letter map of the grid, one letter per rectangle, followed by
/// the list of rectangles with their clues.
///
/// # Errors
///
/// Returns [`CliError::Code`] for a malformed share code,
/// [`CliError::Unsolvable`] if the level has no solution, and [`CliError::Io`]
/// if the output cannot be written.
pub fn solve<W>(args: &SolveArgs, out: &mut W) -> Result<(), CliError>
where
    W: Write,
{
    let level: Level = args.code.trim().parse()?;
    let solver = BacktrackSolver::new();
    let solution = solver.solve(level.clues()).ok_or(CliError::Unsolvable)?;

    let mut puzzle = Puzzle::new(&level);
    for rect in solution {
        puzzle.insert_or_replace(rect)?;
    }
    log::debug!("solution complete: {}", puzzle.is_complete());

    let size = level.size();
    let mut labels = vec!['.'; size.cell_count()];
    for (i, placed) in puzzle.rects().iter().enumerate() {
        let label = char::from(LABELS[i % LABELS.len()]);
        for index in placed.rect.positions().filter_map(|pos| size.index_of(pos)) {
            labels[index] = label;
        }
    }
    for row in labels.chunks(size.cols()) {
        writeln!(out, "{}", row.iter().collect::<String>())?;
    }

    writeln!(out)?;
    writeln!(out, "{} ({})", level, solver.solvability(level.clues()))?;
    for (i, placed) in puzzle.rects().iter().enumerate() {
        let label = char::from(LABELS[i % LABELS.len()]);
        let clue = level.clues().clues_in(placed.rect).next();
        match clue {
            Some(clue) => writeln!(
                out,
                "{label}: {} area {}, clue {} at {}",
                placed.rect,
                placed.rect.area(),
                clue.value,
                clue.position
            )?,
            None => writeln!(out, "{label}: {} area {}", placed.rect, placed.rect.area())?,
        }
    }
    Ok(())
}
