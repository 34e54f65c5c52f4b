use crate::collections::square::Dimension;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ParsePuzzleError {
    #[error("the first line must be \"r:\" or \"c:\", found \"{0}\"")]
    InvalidHeader(String),
    #[error("invalid block length \"{token}\" on line {line}")]
    InvalidBlockLength { token: String, line: usize },
    #[error("zero-length block on line {line}")]
    ZeroBlock { line: usize },
    #[error(transparent)]
    InvalidPuzzle(#[from] InvalidPuzzleError),
}

#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub enum InvalidPuzzleError {
    #[error("{row_count} row clues do not match {col_count} column clues")]
    MismatchedDimensions { row_count: usize, col_count: usize },
    #[error("the blocks of {} {} are too long to fit in the grid", .dimension, .index + 1)]
    ClueTooLong { dimension: Dimension, index: usize },
}

#[derive(Debug, Error)]
pub enum PuzzleFromFileError {
    #[error("error reading puzzle file")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParsePuzzleError),
}
