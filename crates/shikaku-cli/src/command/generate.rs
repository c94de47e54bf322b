use std::io::Write;

use shikaku_core::GridSize;
use shikaku_generator::{GeneratedLevel, LevelGenerator, LevelSeed, policy};

use crate::{CliError, GenerateArgs, LevelEntry};

/// Generates the levels described by `args` and writes them to `out` as a JSON
/// array.
///
/// # Errors
///
/// Returns [`CliError::GridSize`] if the requested size is out of range, and
/// [`CliError::Json`] or [`CliError::Io`] if the output cannot be written.
pub fn generate<W>(args: &GenerateArgs, out: &mut W) -> Result<(), CliError>
where
    W: Write,
{
    let levels = generate_levels(args)?;
    let entries = levels.iter().map(LevelEntry::from).collect::<Vec<_>>();
    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, &entries)?;
    } else {
        serde_json::to_writer(&mut *out, &entries)?;
    }
    writeln!(out)?;
    Ok(())
}

fn generate_levels(args: &GenerateArgs) -> Result<Vec<GeneratedLevel>, CliError> {
    let generator = LevelGenerator::new().with_max_attempts(args.max_attempts);
    let seed = args.seed.unwrap_or_else(LevelSeed::random);
    let size = args
        .rows
        .zip(args.cols)
        .map(|(rows, cols)| {
            GridSize::try_new(rows, cols).ok_or(CliError::GridSize { rows, cols })
        })
        .transpose()?;
    log::info!(
        "generating {} level(s) from seed {seed} (difficulty: {}, size: {})",
        args.count,
        args.difficulty.map_or_else(|| "progressive".to_owned(), |d| d.to_string()),
        size.map_or_else(|| "by difficulty".to_owned(), |s| s.to_string()),
    );

    let levels = match (args.difficulty, size) {
        (None, None) => generator.generate_batch(args.count, seed),
        (difficulty, size) => (0..args.count)
            .zip(0_u64..)
            .map(|(index, child)| {
                let seed = if args.count == 1 && difficulty.is_some() {
                    seed
                } else {
                    seed.child(child)
                };
                let difficulty = difficulty
                    .unwrap_or_else(|| policy::difficulty_for_progress(index, args.count));
                match size {
                    Some(size) => generator.generate_with_size(size, difficulty, seed),
                    None => generator.generate_with_seed(difficulty, seed),
                }
            })
            .collect(),
    };

    let fallbacks = levels
        .iter()
        .filter(|generated| generated.source.is_fallback())
        .count();
    if fallbacks > 0 {
        log::warn!("{fallbacks} level(s) used the strip fallback");
    }
    Ok(levels)
}
