use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use shikaku_core::{Difficulty, GridSize};
use shikaku_generator::{DEFAULT_MAX_ATTEMPTS, LevelSeed};

/// Generate, check, and solve Shikaku levels.
#[derive(Debug, Parser)]
#[command(name = "shikaku", author, version, about)]
pub struct Cli {
    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of the `shikaku` tool.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate levels and print them as a JSON array.
    Generate(GenerateArgs),
    /// Check a JSON array of levels for validity and solvability.
    Check(CheckArgs),
    /// Solve a level given as a share code.
    Solve(SolveArgs),
}

/// Arguments of `shikaku generate`.
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Difficulty tier (1-5) for every level.
    ///
    /// Without it, difficulty rises through the batch from 1 to 5.
    #[arg(short, long, value_name = "TIER", value_parser = parse_difficulty)]
    pub difficulty: Option<Difficulty>,

    /// Number of levels to generate.
    #[arg(short, long, value_name = "COUNT", default_value_t = 1)]
    pub count: usize,

    /// Seed as 64 hex digits. A random seed is used if omitted.
    ///
    /// A single level with an explicit difficulty is generated from this seed
    /// directly; otherwise level `i` uses a seed derived from it.
    #[arg(long, value_name = "HEX")]
    pub seed: Option<LevelSeed>,

    /// Grid rows, overriding the size chosen by difficulty.
    #[arg(long, value_name = "ROWS", requires = "cols", value_parser = parse_dimension)]
    pub rows: Option<usize>,

    /// Grid columns, overriding the size chosen by difficulty.
    #[arg(long, value_name = "COLS", requires = "rows", value_parser = parse_dimension)]
    pub cols: Option<usize>,

    /// Tiling attempts per level before falling back to strips.
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments of `shikaku check`.
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// JSON file holding an array of levels. Reads stdin if omitted.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// Arguments of `shikaku solve`.
#[derive(Debug, Clone, Args)]
pub struct SolveArgs {
    /// Share code, e.g. `shikaku://2x2/0,0,2;1,1,2`.
    #[arg(value_name = "CODE")]
    pub code: String,
}

fn parse_difficulty(text: &str) -> Result<Difficulty, String> {
    let value = text.parse::<u8>().map_err(|err| err.to_string())?;
    Difficulty::try_from(value).map_err(|err| err.to_string())
}

fn parse_dimension(text: &str) -> Result<usize, String> {
    let value = text.parse::<usize>().map_err(|err| err.to_string())?;
    if (1..=GridSize::MAX_DIM).contains(&value) {
        Ok(value)
    } else {
        Err(format!("must be between 1 and {}", GridSize::MAX_DIM))
    }
}
