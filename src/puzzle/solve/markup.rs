//! Cell states known so far and the surviving line configurations

use itertools::Itertools;
use log::debug;

use crate::collections::square::{Dimension, Square, VectorId};
use crate::puzzle::solve::configurations::{line_configurations, Configuration};
use crate::puzzle::{CellState, Puzzle};

/// The solver's accumulated knowledge: the partially known grid, the
/// surviving configurations of every line and the lines still open.
///
/// Known cells are monotonic: once a cell is `Blank` or `Set` it is never
/// rewritten. Candidate sets only ever shrink.
pub(crate) struct PuzzleMarkup {
    grid: Square<CellState>,
    row_candidates: Vec<Vec<Configuration>>,
    col_candidates: Vec<Vec<Configuration>>,
    open_rows: Vec<usize>,
    open_cols: Vec<usize>,
    rounds: u32,
}

pub(crate) enum PropagateResult {
    Solved(Square<CellState>),
    /// a full round forced no cell while lines remain open
    Stalled,
    /// some line has no configuration left
    Invalid,
}

impl PuzzleMarkup {
    pub fn new(puzzle: &Puzzle) -> Self {
        let width = puzzle.width();
        let candidates_of = |dimension: Dimension| -> Vec<Vec<Configuration>> {
            (0..width)
                .map(|index| {
                    line_configurations(puzzle.clue(VectorId::new(dimension, index)), width)
                })
                .collect()
        };
        Self {
            grid: Square::with_width(width),
            row_candidates: candidates_of(Dimension::Row),
            col_candidates: candidates_of(Dimension::Col),
            open_rows: (0..width).collect(),
            open_cols: (0..width).collect(),
            rounds: 0,
        }
    }

    /// Repeats rows-then-columns elimination rounds until the grid is fully
    /// determined or a round makes no progress
    pub fn propagate(&mut self) -> PropagateResult {
        loop {
            self.rounds += 1;
            let forced = match self.propagate_round() {
                Some(forced) => forced,
                None => return PropagateResult::Invalid,
            };
            debug!("round {}: {} cells forced", self.rounds, forced);
            if self.open_rows.is_empty() && self.open_cols.is_empty() {
                return PropagateResult::Solved(self.grid.clone());
            }
            if forced == 0 {
                debug!(
                    "stalled with {} open rows and {} open columns",
                    self.open_rows.len(),
                    self.open_cols.len()
                );
                return PropagateResult::Stalled;
            }
        }
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn into_grid(self) -> Square<CellState> {
        self.grid
    }

    fn propagate_round(&mut self) -> Option<usize> {
        let mut forced = 0;
        for &dimension in &[Dimension::Row, Dimension::Col] {
            // a line only retires itself, so a snapshot of this phase's
            // open set stays valid while its lines are processed
            let open = match dimension {
                Dimension::Row => self.open_rows.clone(),
                Dimension::Col => self.open_cols.clone(),
            };
            for index in open {
                forced += self.propagate_line(VectorId::new(dimension, index))?;
            }
        }
        Some(forced)
    }

    /// Filters one line's candidates against the known cells, then writes
    /// every newly unanimous cell into the grid. Returns `None` if no
    /// candidate survives.
    ///
    /// A line is only retired here, after its own filter pass has confirmed
    /// a surviving configuration. A line completed by crossing writes alone
    /// stays open until its next visit, where an inconsistent completion
    /// surfaces as an empty candidate set instead of a false solution.
    fn propagate_line(&mut self, vector_id: VectorId) -> Option<usize> {
        let known = self.grid.vector(vector_id).copied().collect_vec();
        let candidates = self.candidates_mut(vector_id);
        candidates.retain(|configuration| consistent(configuration, &known));
        if candidates.is_empty() {
            debug!("no configuration of {:?} matches the known cells", vector_id);
            return None;
        }
        let forced = forced_cells(candidates, &known);
        for &(position, state) in &forced {
            self.grid[vector_id.coord_at(position)] = state;
        }
        if self.vector_is_known(vector_id) {
            self.retire(vector_id);
        }
        Some(forced.len())
    }

    fn candidates_mut(&mut self, vector_id: VectorId) -> &mut Vec<Configuration> {
        let candidates = match vector_id.dimension() {
            Dimension::Row => &mut self.row_candidates,
            Dimension::Col => &mut self.col_candidates,
        };
        &mut candidates[vector_id.index()]
    }

    fn vector_is_known(&self, vector_id: VectorId) -> bool {
        self.grid.vector(vector_id).all(|state| state.is_known())
    }

    fn retire(&mut self, vector_id: VectorId) {
        let open = match vector_id.dimension() {
            Dimension::Row => &mut self.open_rows,
            Dimension::Col => &mut self.open_cols,
        };
        if let Some(i) = open.iter().position(|&index| index == vector_id.index()) {
            open.remove(i);
            debug!("{:?} is complete", vector_id);
        }
    }
}

/// Whether a configuration agrees with every known cell of its line
fn consistent(configuration: &[CellState], known: &[CellState]) -> bool {
    configuration
        .iter()
        .zip(known)
        .all(|(&candidate, &state)| !state.is_known() || state == candidate)
}

/// Cells that are unknown in the line but identical across all surviving
/// configurations
fn forced_cells(
    configurations: &[Configuration],
    known: &[CellState],
) -> Vec<(usize, CellState)> {
    (0..known.len())
        .filter(|&position| !known[position].is_known())
        .filter_map(|position| {
            let mut states = configurations.iter().map(|c| c[position]);
            let first = states.next()?;
            if states.all(|state| state == first) {
                Some((position, first))
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::square::Coord;

    use super::CellState::{Blank, Set, Unknown};

    #[test]
    fn consistent_respects_known_cells() {
        let known = [Unknown, Set, Unknown];
        assert!(consistent(&[Blank, Set, Set], &known));
        assert!(consistent(&[Set, Set, Blank], &known));
        assert!(!consistent(&[Set, Blank, Set], &known));
    }

    #[test]
    fn forced_cells_are_unanimous_and_unknown() {
        let configurations = vec![
            vec![Set, Set, Blank, Blank],
            vec![Blank, Set, Blank, Set],
        ];
        let known = [Unknown, Unknown, Blank, Unknown];
        // position 1 is unanimous; position 2 is already known
        assert_eq!(
            vec![(1, Set)],
            forced_cells(&configurations, &known),
        );
    }

    #[test]
    fn filter_discards_contradicted_configurations() {
        let puzzle = Puzzle::parse("r:\n1\n1\n1\nc:\n1\n1\n1\n").unwrap();
        let mut markup = PuzzleMarkup::new(&puzzle);
        markup.grid[Coord::new(0, 0)] = Blank;
        markup.propagate_line(VectorId::row(0)).unwrap();
        let known = markup.grid.vector(VectorId::row(0)).copied().collect_vec();
        assert_eq!(2, markup.row_candidates[0].len());
        for configuration in &markup.row_candidates[0] {
            assert!(consistent(configuration, &known));
        }
    }

    #[test]
    fn empty_candidate_set_is_invalid() {
        // both rows force [2], both columns only allow a single set cell
        let puzzle = Puzzle::parse("r:\n2\n2\nc:\n1\n1\n").unwrap();
        let mut markup = PuzzleMarkup::new(&puzzle);
        assert!(matches!(markup.propagate(), PropagateResult::Invalid));
    }

    #[test]
    fn ambiguous_puzzle_stalls() {
        let puzzle = Puzzle::parse("r:\n1\n1\nc:\n1\n1\n").unwrap();
        let mut markup = PuzzleMarkup::new(&puzzle);
        assert!(matches!(markup.propagate(), PropagateResult::Stalled));
    }

    #[test]
    fn known_cells_are_monotonic() {
        let puzzle =
            Puzzle::parse("r:\n1\n1\n5\n1\n1\nc:\n1\n1\n5\n1\n1\n").unwrap();
        let mut markup = PuzzleMarkup::new(&puzzle);
        let mut snapshot = markup.grid.clone();
        loop {
            let forced = markup.propagate_round().unwrap();
            for i in 0..snapshot.len() {
                if snapshot[i].is_known() {
                    assert_eq!(snapshot[i], markup.grid[i], "cell {} was rewritten", i);
                }
            }
            if forced == 0 {
                break;
            }
            snapshot = markup.grid.clone();
        }
    }
}
