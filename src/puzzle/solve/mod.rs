//! Solve picross puzzles by cross-eliminating line configurations

use log::info;

use crate::collections::square::Square;
use crate::puzzle::{CellState, Puzzle, Solution};

use self::markup::{PropagateResult, PuzzleMarkup};

mod configurations;
mod markup;

pub enum SolveResult {
    /// The puzzle was fully determined by line elimination
    Solved(SolvedData),
    /// The puzzle has no solution reachable by line elimination, either
    /// because some line ran out of configurations or because a round made
    /// no progress; carries the best-effort partial grid
    Unsolvable(Square<CellState>),
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveResult::Solved(_))
    }

    pub fn solved(&self) -> Option<&SolvedData> {
        match self {
            SolveResult::Solved(data) => Some(data),
            _ => None,
        }
    }
}

pub struct SolvedData {
    pub solution: Solution,
    /// the number of elimination rounds taken
    pub rounds: u32,
}

pub struct PuzzleSolver<'a> {
    puzzle: &'a Puzzle,
}

impl<'a> PuzzleSolver<'a> {
    pub fn new(puzzle: &'a Puzzle) -> Self {
        Self { puzzle }
    }

    pub fn solve(&self) -> SolveResult {
        let mut markup = PuzzleMarkup::new(self.puzzle);
        match markup.propagate() {
            PropagateResult::Solved(solution) => {
                let rounds = markup.rounds();
                info!("solved in {} rounds", rounds);
                debug_assert!(self.puzzle.verify_solution(&solution));
                SolveResult::Solved(SolvedData { solution, rounds })
            }
            PropagateResult::Stalled | PropagateResult::Invalid => {
                info!("puzzle is not solvable");
                SolveResult::Unsolvable(markup.into_grid())
            }
        }
    }
}
