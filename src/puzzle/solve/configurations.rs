//! Enumerate the cell patterns a clue allows on a line

use crate::puzzle::{CellState, Clue};

/// One fully determined candidate assignment for an entire line
pub(crate) type Configuration = Vec<CellState>;

/// Every pattern of `width` cells that satisfies `clue` in isolation.
///
/// For a clue of `k` blocks with laxity `l` this produces exactly
/// `C(l + k, k)` configurations, one per non-decreasing tuple of leftward
/// shifts.
pub(crate) fn line_configurations(clue: &Clue, width: usize) -> Vec<Configuration> {
    if clue.is_blank() {
        return vec![vec![CellState::Blank; width]];
    }
    let laxity = clue.laxity(width);
    debug_assert!(laxity >= 0, "clue does not fit in the line");

    // leftmost start position of each block
    let mut bases = Vec::with_capacity(clue.len());
    let mut position = 0;
    for &block in clue.blocks() {
        bases.push(position);
        position += block + 1;
    }

    GapShifts::new(clue.len(), laxity as usize)
        .map(|shifts| materialize(clue, &bases, &shifts, width))
        .collect()
}

fn materialize(clue: &Clue, bases: &[usize], shifts: &[usize], width: usize) -> Configuration {
    let mut cells = vec![CellState::Blank; width];
    for ((&base, &shift), &block) in bases.iter().zip(shifts).zip(clue.blocks()) {
        let start = base + shift;
        for cell in &mut cells[start..start + block] {
            *cell = CellState::Set;
        }
    }
    cells
}

/// Non-decreasing tuples of a given length with values in `[0, laxity]`,
/// in lexicographic order
struct GapShifts {
    shifts: Vec<usize>,
    laxity: usize,
    done: bool,
}

impl GapShifts {
    fn new(len: usize, laxity: usize) -> Self {
        Self {
            shifts: vec![0; len],
            laxity,
            done: false,
        }
    }
}

impl Iterator for GapShifts {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let next = self.shifts.clone();
        match self.shifts.iter().rposition(|&shift| shift < self.laxity) {
            Some(i) => {
                self.shifts[i] += 1;
                let value = self.shifts[i];
                for shift in &mut self.shifts[i + 1..] {
                    *shift = value;
                }
            }
            None => self.done = true,
        }
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use std::collections::HashSet;

    use super::CellState::{Blank, Set};

    fn clue(blocks: &[usize]) -> Clue {
        Clue::new(blocks.to_vec())
    }

    fn binomial(n: usize, k: usize) -> usize {
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }

    #[test]
    fn gap_shifts_order() {
        let shifts = GapShifts::new(2, 1).collect_vec();
        assert_eq!(vec![vec![0, 0], vec![0, 1], vec![1, 1]], shifts);
    }

    #[test]
    fn count_matches_binomial() {
        for &(blocks, width) in &[
            (&[2usize, 1][..], 5),
            (&[1, 1][..], 5),
            (&[1][..], 10),
            (&[3, 1, 2][..], 10),
        ] {
            let clue = clue(blocks);
            let laxity = clue.laxity(width) as usize;
            let configurations = line_configurations(&clue, width);
            assert_eq!(
                binomial(laxity + blocks.len(), blocks.len()),
                configurations.len(),
                "clue {:?} width {}",
                blocks,
                width,
            );
        }
    }

    #[test]
    fn configurations_are_distinct() {
        let configurations = line_configurations(&clue(&[3, 1, 2]), 10);
        let distinct: HashSet<_> = configurations.iter().cloned().collect();
        assert_eq!(configurations.len(), distinct.len());
    }

    #[test]
    fn configurations_reproduce_the_clue() {
        let clue = clue(&[2, 1]);
        for configuration in line_configurations(&clue, 5) {
            assert_eq!(5, configuration.len());
            assert!(clue.matches_line(&configuration), "{:?}", configuration);
        }
    }

    #[test]
    fn zero_laxity_yields_single_configuration() {
        let configurations = line_configurations(&clue(&[2, 2]), 5);
        assert_eq!(vec![vec![Set, Set, Blank, Set, Set]], configurations);
    }

    #[test]
    fn blank_clue_yields_all_blank() {
        let configurations = line_configurations(&clue(&[0]), 3);
        assert_eq!(vec![vec![Blank; 3]], configurations);
    }
}
