use std::io::{Read, Write};

use shikaku_core::Level;
use shikaku_solver::{BacktrackSolver, Solvability};

use crate::{CliError, LevelEntry};

/// Counts gathered by [`check`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Number of levels read.
    pub total: usize,
    /// Levels rejected on ingestion.
    pub invalid: usize,
    /// Valid levels without a solution.
    pub unsolvable: usize,
    /// Valid levels with more than one solution.
    pub ambiguous: usize,
}

impl CheckSummary {
    /// Returns `true` if every level is valid and solvable.
    ///
    /// Levels with several solutions still pass.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.invalid == 0 && self.unsolvable == 0
    }
}

/// Reads a JSON array of levels from `input` and reports on each one.
///
/// Every level is converted into a [`Level`], which rejects bad dimensions,
/// difficulties, and clues, and is then classified by the solver. One line per
/// level and a final summary line are written to `out`.
///
/// # Errors
///
/// Returns [`CliError::Json`] if the input is not a JSON array of level objects,
/// or [`CliError::Io`] if the report cannot be written. Invalid or unsolvable
/// levels are counted in the summary instead.
pub fn check<R, W>(input: R, out: &mut W) -> Result<CheckSummary, CliError>
where
    R: Read,
    W: Write,
{
    let entries: Vec<LevelEntry> = serde_json::from_reader(input)?;
    let solver = BacktrackSolver::new();
    let mut summary = CheckSummary::default();

    for (number, entry) in (1..).zip(entries) {
        summary.total += 1;
        let level = match Level::try_from(entry.level) {
            Ok(level) => level,
            Err(err) => {
                log::debug!("level #{number} rejected: {err}");
                summary.invalid += 1;
                writeln!(out, "level #{number}: invalid: {err}")?;
                continue;
            }
        };

        let solvability = solver.solvability(level.clues());
        match solvability {
            Solvability::Unsolvable => summary.unsolvable += 1,
            Solvability::Multiple => summary.ambiguous += 1,
            Solvability::Unique => {}
        }
        writeln!(
            out,
            "level #{number}: {} grid, {} clues, difficulty {}: {solvability}",
            level.size(),
            level.clues().len(),
            level.difficulty(),
        )?;
    }

    writeln!(
        out,
        "checked {} levels: {} invalid, {} unsolvable, {} with multiple solutions",
        summary.total, summary.invalid, summary.unsolvable, summary.ambiguous,
    )?;
    log::info!("check finished: {summary:?}");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(json: &str) -> (CheckSummary, String) {
        let mut out = Vec::new();
        let summary = check(json.as_bytes(), &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_mixed_levels() {
        let json = r#"[
            {"gridRows":2,"gridCols":2,"difficulty":1,"clues":[{"row":0,"col":0,"value":2},{"row":1,"col":0,"value":2}]},
            {"gridRows":2,"gridCols":2,"difficulty":1,"clues":[{"row":0,"col":0,"value":2},{"row":1,"col":1,"value":2}]},
            {"gridRows":2,"gridCols":2,"difficulty":1,"clues":[{"row":0,"col":0,"value":3},{"row":1,"col":1,"value":1}]},
            {"gridRows":2,"gridCols":2,"difficulty":9,"clues":[]},
            {"gridRows":2,"gridCols":2,"difficulty":1,"clues":[{"row":5,"col":0,"value":4}]}
        ]"#;
        let (summary, report) = run(json);
        assert_eq!(
            summary,
            CheckSummary {
                total: 5,
                invalid: 2,
                unsolvable: 1,
                ambiguous: 1,
            }
        );
        assert!(!summary.all_passed());

        let lines = report.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "level #1: 2x2 grid, 2 clues, difficulty 1: unique");
        assert!(lines[1].ends_with("multiple solutions"));
        assert!(lines[2].ends_with("unsolvable"));
        assert!(lines[3].starts_with("level #4: invalid:"));
        assert_eq!(
            lines[5],
            "checked 5 levels: 2 invalid, 1 unsolvable, 1 with multiple solutions"
        );
    }

    #[test]
    fn test_oversized_levels_are_invalid() {
        let json = r#"[
            {"gridRows":2,"gridCols":2,"difficulty":1,"clues":[{"row":0,"col":0,"value":18446744073709551615},{"row":1,"col":1,"value":2}]},
            {"gridRows":100000,"gridCols":100000,"difficulty":1,"clues":[{"row":0,"col":0,"value":10000000000}]},
            {"gridRows":2,"gridCols":2,"difficulty":1,"clues":[{"row":0,"col":0,"value":4}]}
        ]"#;
        let (summary, report) = run(json);
        assert_eq!(
            summary,
            CheckSummary {
                total: 3,
                invalid: 2,
                unsolvable: 0,
                ambiguous: 0,
            }
        );
        let lines = report.lines().collect::<Vec<_>>();
        assert!(lines[0].starts_with("level #1: invalid:"));
        assert!(lines[1].starts_with("level #2: invalid: invalid grid size"));
        assert!(lines[2].ends_with("unique"));
    }

    #[test]
    fn test_empty_array_passes() {
        let (summary, _) = run("[]");
        assert_eq!(summary.total, 0);
        assert!(summary.all_passed());
    }

    #[test]
    fn test_malformed_json() {
        let mut out = Vec::new();
        let err = check(&b"{\"gridRows\": 2}"[..], &mut out).unwrap_err();
        assert!(matches!(err, CliError::Json(_)));
    }
}
