//! Library side of the `shikaku` command-line tool.
//!
//! Each subcommand lives in [`command`] and writes to a caller-supplied writer,
//! so the binary only parses arguments and maps the outcome to an exit code.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write as _},
    process::ExitCode,
};

pub use self::{cli::*, entry::*, error::*};

mod cli;
pub mod command;
mod entry;
mod error;

/// Runs a parsed command line against stdin and stdout.
///
/// # Errors
///
/// Returns a [`CliError`] if input cannot be read or parsed, output cannot be
/// written, or a share code has no solution.
pub fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let code = match cli.command {
        Command::Generate(args) => {
            command::generate(&args, &mut out)?;
            ExitCode::SUCCESS
        }
        Command::Check(args) => {
            let summary = match &args.file {
                Some(path) => {
                    let file = File::open(path).map_err(|source| CliError::ReadFile {
                        path: path.clone(),
                        source,
                    })?;
                    command::check(BufReader::new(file), &mut out)?
                }
                None => command::check(io::stdin().lock(), &mut out)?,
            };
            if summary.all_passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Command::Solve(args) => {
            command::solve(&args, &mut out)?;
            ExitCode::SUCCESS
        }
    };
    out.flush()?;
    Ok(code)
}
