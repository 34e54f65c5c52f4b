use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use picross::puzzle::solve::{PuzzleSolver, SolveResult};
use picross::puzzle::Puzzle;

#[test]
fn solvable_puzzles() -> Result<()> {
    for path in puzzle_files(project_path("res/test/puzzles/solvable")) {
        println!("Solving {}", path.display());
        let puzzle = Puzzle::from_file(&path)?;
        let result = PuzzleSolver::new(&puzzle).solve();
        let data = result
            .solved()
            .unwrap_or_else(|| panic!("could not solve {}", path.display()));
        assert!(
            puzzle.verify_solution(&data.solution),
            "bad solution for {}",
            path.display()
        );
    }
    Ok(())
}

#[test]
fn unsolvable_puzzles() -> Result<()> {
    for path in puzzle_files(project_path("res/test/puzzles/unsolvable")) {
        println!("Solving {}", path.display());
        let puzzle = Puzzle::from_file(&path)?;
        let result = PuzzleSolver::new(&puzzle).solve();
        assert!(!result.is_solved(), "unexpectedly solved {}", path.display());
    }
    Ok(())
}

fn puzzle_files(path: impl AsRef<Path>) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(path)
        .unwrap()
        .map(|f| f.unwrap().path())
        .collect();
    files.sort_unstable();
    assert!(!files.is_empty());
    files
}

fn project_path(path: impl AsRef<Path>) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(path)
}
