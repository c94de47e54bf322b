//! Cross-crate checks on generated levels: the solver accepts them and the
//! intended solution completes a play session.

use shikaku_core::{Difficulty, GridSize, Level};
use shikaku_game::Puzzle;
use shikaku_generator::{GeneratedLevel, GenerationSource, LevelGenerator, LevelSeed};
use shikaku_solver::BacktrackSolver;

const LEVELS_PER_DIFFICULTY: u8 = 100;

fn seed(i: u8, difficulty: Difficulty) -> LevelSeed {
    let mut bytes = [i; 32];
    bytes[0] = difficulty.value();
    LevelSeed::from(bytes)
}

fn assert_playable(generated: &GeneratedLevel) {
    let mut puzzle = Puzzle::new(&generated.level);
    for (i, rect) in generated.solution.iter().enumerate() {
        let outcome = puzzle.insert_or_replace(*rect).unwrap();
        assert!(outcome.removed.is_empty());
        assert!(outcome.is_valid, "{rect} in {}", generated.level);
        assert_eq!(outcome.is_complete, i + 1 == generated.solution.len());
    }
    assert!(puzzle.is_complete(), "{}", generated.level);
    assert!(puzzle.clues().iter().all(|clue| clue.is_satisfied));
}

#[test]
fn generated_levels_are_solvable_and_playable() {
    let generator = LevelGenerator::new();
    let solver = BacktrackSolver::new();
    for difficulty in Difficulty::ALL {
        for i in 0..LEVELS_PER_DIFFICULTY {
            let generated = generator.generate_with_seed(difficulty, seed(i, difficulty));
            assert!(
                solver.solve(generated.level.clues()).is_some(),
                "unsolvable: {}",
                generated.level
            );
            assert_playable(&generated);
        }
    }
}

#[test]
fn fallback_levels_are_solvable_and_playable() {
    let generator = LevelGenerator::new().with_max_attempts(0);
    let solver = BacktrackSolver::new();
    for i in 0..LEVELS_PER_DIFFICULTY {
        let size = GridSize::new(usize::from(i % 9) + 1, usize::from(i / 9 % 9) + 1);
        let generated =
            generator.generate_with_size(size, Difficulty::D1, seed(i, Difficulty::D1));
        assert_eq!(generated.source, GenerationSource::Fallback);
        assert!(!solver.solvability(generated.level.clues()).is_unsolvable());
        assert_playable(&generated);
    }
}

#[test]
fn share_code_reproduces_generated_clues() {
    let generated =
        LevelGenerator::new().generate_with_seed(Difficulty::D4, seed(7, Difficulty::D4));
    let parsed: Level = generated.level.to_string().parse().unwrap();
    assert_eq!(parsed.size(), generated.level.size());
    assert_eq!(parsed.clues(), generated.level.clues());
}
