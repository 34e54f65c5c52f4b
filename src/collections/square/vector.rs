//! Rows and columns of a `Square`

use self::Dimension::{Col, Row};
use super::Coord;
use std::fmt;
use std::fmt::Debug;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    Row,
    Col,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Row => "row",
            Col => "column",
        };
        write!(f, "{}", label)
    }
}

/// A row or column and its index
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VectorId(usize);

impl VectorId {
    /// Creates a column VectorId
    pub fn col(index: usize) -> VectorId {
        VectorId(index * 2 + 1)
    }

    /// Creates a row VectorId
    pub fn row(index: usize) -> VectorId {
        VectorId(index * 2)
    }

    pub fn new(dimension: Dimension, index: usize) -> VectorId {
        match dimension {
            Row => Self::row(index),
            Col => Self::col(index),
        }
    }

    pub fn dimension(self) -> Dimension {
        if self.0 % 2 == 0 {
            Row
        } else {
            Col
        }
    }

    /// Retrieves the index of the vector in its respective dimension
    pub fn index(self) -> usize {
        self.0 / 2
    }

    /// The coordinate at a position along this vector
    pub fn coord_at(self, position: usize) -> Coord {
        match self.dimension() {
            Row => Coord::new(position, self.index()),
            Col => Coord::new(self.index(), position),
        }
    }
}

impl Debug for VectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.dimension() {
            Row => "Row",
            Col => "Col",
        };
        write!(f, "{} {}", label, self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_at() {
        assert_eq!(Coord::new(3, 1), VectorId::row(1).coord_at(3));
        assert_eq!(Coord::new(1, 3), VectorId::col(1).coord_at(3));
    }

    #[test]
    fn dimension_and_index() {
        assert_eq!(Dimension::Row, VectorId::row(4).dimension());
        assert_eq!(Dimension::Col, VectorId::col(4).dimension());
        assert_eq!(4, VectorId::col(4).index());
    }
}
