//! Example demonstrating Shikaku level generation.
//!
//! This example shows how to:
//! - Create a `LevelGenerator` with a custom attempt budget
//! - Generate levels in parallel and classify them with the solver
//! - Print a level, its seed, and its intended solution
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_level
//! ```
//!
//! Choose the difficulty (1-5, default: 3):
//!
//! ```sh
//! cargo run --example generate_level -- --difficulty 5
//! ```
//!
//! Sample many levels and report how many have a unique solution:
//!
//! ```sh
//! cargo run --example generate_level -- --samples 1000
//! ```
//!
//! Reproduce a level from its seed:
//!
//! ```sh
//! cargo run --example generate_level -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use shikaku_core::Difficulty;
use shikaku_generator::{GeneratedLevel, LevelGenerator, LevelSeed};
use shikaku_solver::{BacktrackSolver, Solvability};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty tier (1-5).
    #[arg(short, long, value_name = "TIER", default_value_t = 3)]
    difficulty: u8,

    /// Seed to reproduce, as 64 hex digits.
    #[arg(long, value_name = "HEX")]
    seed: Option<LevelSeed>,

    /// Number of levels to sample for statistics.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    samples: usize,

    /// Tiling attempts before falling back to strips.
    #[arg(long, value_name = "COUNT", default_value_t = shikaku_generator::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,
}

fn main() {
    let args = Args::parse();
    let Ok(difficulty) = Difficulty::try_from(args.difficulty) else {
        eprintln!("--difficulty must be between 1 and 5.");
        process::exit(2);
    };
    let generator = LevelGenerator::new().with_max_attempts(args.max_attempts);
    let solver = BacktrackSolver::new();

    if let Some(seed) = args.seed {
        let generated = generator.generate_with_seed(difficulty, seed);
        print_level(&generated, solver.solvability(generated.level.clues()));
        return;
    }

    if args.samples == 0 {
        eprintln!("--samples must be at least 1.");
        process::exit(1);
    }

    let results = (0..args.samples)
        .into_par_iter()
        .map(|_| {
            let generated = generator.generate(difficulty);
            let solvability = solver.solvability(generated.level.clues());
            (generated, solvability)
        })
        .collect::<Vec<_>>();

    if let Some((generated, solvability)) = results.first() {
        print_level(generated, *solvability);
    }
    if args.samples > 1 {
        print_stats(&results);
    }
}

fn print_level(generated: &GeneratedLevel, solvability: Solvability) {
    println!("Seed:");
    println!("  {}", generated.seed);
    println!();
    println!("Level:");
    println!("  {}", generated.level);
    println!("  size: {}", generated.level.size());
    println!("  clues: {}", generated.level.clues().len());
    println!("  source: {}", generated.source);
    println!("  solvability: {solvability}");
    println!();
    println!("Solution:");
    for rect in &generated.solution {
        println!("  {rect} (area {})", rect.area());
    }
}

fn print_stats(results: &[(GeneratedLevel, Solvability)]) {
    let count = |pred: fn(&(GeneratedLevel, Solvability)) -> bool| {
        results.iter().filter(|result| pred(result)).count()
    };
    println!();
    println!("Stats ({} levels):", results.len());
    println!("  fallback: {}", count(|(g, _)| g.source.is_fallback()));
    println!("  unique: {}", count(|(_, s)| s.is_unique()));
    println!("  multiple: {}", count(|(_, s)| s.is_multiple()));
    println!("  unsolvable: {}", count(|(_, s)| s.is_unsolvable()));
}
