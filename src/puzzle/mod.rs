//! Picross puzzles

pub use self::puzzle::*;

pub mod error;
pub mod solve;

mod parse;
mod puzzle;

use crate::collections::square::Square;

/// A fully determined grid (no `Unknown` cells)
pub type Solution = Square<CellState>;
