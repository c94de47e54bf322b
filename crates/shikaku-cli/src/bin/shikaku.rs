//! Shikaku command-line tool.
//!
//! Generates levels as JSON, checks level files, and solves share codes.

use std::process::ExitCode;

use clap::Parser as _;
use shikaku_cli::Cli;

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    match shikaku_cli::run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
