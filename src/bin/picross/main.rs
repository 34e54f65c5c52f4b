#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use anyhow::{bail, Result};
use picross::puzzle::solve::{PuzzleSolver, SolveResult};
use picross::puzzle::Puzzle;

use crate::options::Options;

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args();
    println!("Reading puzzle from \"{}\"", options.input().display());
    let puzzle = Puzzle::from_file(options.input())?;
    match PuzzleSolver::new(&puzzle).solve() {
        SolveResult::Solved(data) => {
            println!(
                "Puzzle solved in {} round{}",
                data.rounds,
                if data.rounds == 1 { "" } else { "s" }
            );
            print!("{}", data.solution);
        }
        SolveResult::Unsolvable(partial) => {
            print!("{}", partial);
            bail!("the puzzle is not solvable");
        }
    }
    Ok(())
}
