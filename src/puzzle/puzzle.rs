use std::fmt;
use std::fmt::Display;
use std::fs;
use std::path::Path;

use crate::collections::square::{Dimension, Square, VectorId};
use crate::puzzle::error::{InvalidPuzzleError, ParsePuzzleError, PuzzleFromFileError};
use crate::puzzle::parse::parse_puzzle;
use crate::puzzle::Solution;

/// The state of one grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    Unknown,
    Blank,
    Set,
}

impl CellState {
    pub fn is_known(self) -> bool {
        self != CellState::Unknown
    }

    fn symbol(self) -> char {
        match self {
            CellState::Set => '#',
            CellState::Blank | CellState::Unknown => ' ',
        }
    }
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Unknown
    }
}

/// The ordered block lengths of one row or column
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clue(Vec<usize>);

impl Clue {
    pub fn new(blocks: Vec<usize>) -> Self {
        Self(blocks)
    }

    pub fn blocks(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A single `0` denotes an entirely blank line
    pub fn is_blank(&self) -> bool {
        self.0 == [0]
    }

    /// The number of blank cells freely distributable among the gaps of a
    /// line of the given width; negative if the blocks cannot fit
    pub fn laxity(&self, width: usize) -> isize {
        let occupied = self.0.iter().sum::<usize>() + self.len() - 1;
        width as isize - occupied as isize
    }

    /// Whether a fully known line reproduces exactly these blocks
    pub fn matches_line(&self, line: &[CellState]) -> bool {
        let mut blocks = Vec::new();
        let mut run = 0;
        for &state in line {
            if state == CellState::Set {
                run += 1;
            } else if run > 0 {
                blocks.push(run);
                run = 0;
            }
        }
        if run > 0 {
            blocks.push(run);
        }
        if blocks.is_empty() {
            self.is_blank()
        } else {
            blocks == self.0
        }
    }
}

/// An unsolved picross puzzle
#[derive(Debug)]
pub struct Puzzle {
    /// the width and height of the grid
    width: usize,
    row_clues: Vec<Clue>,
    col_clues: Vec<Clue>,
}

impl Puzzle {
    /// Creates a puzzle from row and column clues, validating that the clue
    /// counts match and that every clue fits in the grid
    pub fn new(row_clues: Vec<Clue>, col_clues: Vec<Clue>) -> Result<Self, InvalidPuzzleError> {
        if row_clues.len() != col_clues.len() {
            return Err(InvalidPuzzleError::MismatchedDimensions {
                row_count: row_clues.len(),
                col_count: col_clues.len(),
            });
        }
        let width = row_clues.len();
        for &(dimension, clues) in &[(Dimension::Row, &row_clues), (Dimension::Col, &col_clues)] {
            for (index, clue) in clues.iter().enumerate() {
                if clue.laxity(width) < 0 {
                    return Err(InvalidPuzzleError::ClueTooLong { dimension, index });
                }
            }
        }
        Ok(Self {
            width,
            row_clues,
            col_clues,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PuzzleFromFileError> {
        let text = fs::read_to_string(path)?;
        let puzzle = Self::parse(&text)?;
        Ok(puzzle)
    }

    pub fn parse(str: &str) -> Result<Self, ParsePuzzleError> {
        parse_puzzle(str)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn row_clues(&self) -> &[Clue] {
        &self.row_clues
    }

    pub fn col_clues(&self) -> &[Clue] {
        &self.col_clues
    }

    /// The clue of one row or column
    pub fn clue(&self, vector_id: VectorId) -> &Clue {
        let clues = match vector_id.dimension() {
            Dimension::Row => &self.row_clues,
            Dimension::Col => &self.col_clues,
        };
        &clues[vector_id.index()]
    }

    pub fn vectors(&self) -> impl Iterator<Item = VectorId> {
        let width = self.width;
        (0..width)
            .map(VectorId::row)
            .chain((0..width).map(VectorId::col))
    }

    /// Checks that every line of a solution reproduces its clue
    pub fn verify_solution(&self, solution: &Solution) -> bool {
        solution.width() == self.width
            && self.vectors().all(|v| {
                let line: Vec<CellState> = solution.vector(v).copied().collect();
                self.clue(v).matches_line(&line)
            })
    }
}

impl Display for Square<CellState> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "+-".repeat(self.width()) + "+";
        writeln!(f, "{}", rule)?;
        for row in self.rows() {
            for &cell in row {
                write!(f, "|{}", cell.symbol())?;
            }
            writeln!(f, "|")?;
            writeln!(f, "{}", rule)?;
        }
        Ok(())
    }
}
