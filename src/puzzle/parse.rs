//! Parse puzzles from text
//!
//! The format is line oriented: an `r:` or `c:` token switches the target
//! dimension, and every other non-empty line is a whitespace-separated clue
//! for the next row or column.

use crate::collections::square::Dimension;
use crate::puzzle::error::ParsePuzzleError;
use crate::puzzle::{Clue, Puzzle};

/// parse a `Puzzle` from a string
pub(crate) fn parse_puzzle(s: &str) -> Result<Puzzle, ParsePuzzleError> {
    let mut row_clues = Vec::new();
    let mut col_clues = Vec::new();
    let mut mode = None;
    for (i, line) in s.lines().enumerate() {
        let line = line.trim();
        match line {
            "" => (),
            "r:" => mode = Some(Dimension::Row),
            "c:" => mode = Some(Dimension::Col),
            _ => {
                let dimension = mode.ok_or_else(|| ParsePuzzleError::InvalidHeader(line.into()))?;
                let clue = parse_clue(line, i + 1)?;
                match dimension {
                    Dimension::Row => row_clues.push(clue),
                    Dimension::Col => col_clues.push(clue),
                }
            }
        }
    }
    let puzzle = Puzzle::new(row_clues, col_clues)?;
    Ok(puzzle)
}

fn parse_clue(line: &str, line_number: usize) -> Result<Clue, ParsePuzzleError> {
    let blocks = line
        .split_whitespace()
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|_| ParsePuzzleError::InvalidBlockLength {
                    token: token.into(),
                    line: line_number,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    // a lone 0 marks an all-blank line; a 0 among other blocks is malformed
    if blocks.contains(&0) && blocks != [0] {
        return Err(ParsePuzzleError::ZeroBlock { line: line_number });
    }
    Ok(Clue::new(blocks))
}
