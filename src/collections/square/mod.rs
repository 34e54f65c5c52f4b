mod coord;
mod vector;

pub use self::coord::Coord;
pub use self::vector::Dimension;
pub use self::vector::VectorId;

use std::ops::{Index, IndexMut};

/// A container of elements represented in a square grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Square<T> {
    width: usize,
    elements: Vec<T>,
}

impl<T> Square<T> {
    /// Creates a new square with a specified width, filled with the default value
    pub fn with_width(width: usize) -> Square<T>
    where
        T: Clone + Default,
    {
        Self {
            width,
            elements: vec![Default::default(); width.pow(2)],
        }
    }

    /// Creates a new square with a specified width, filled with a specified value
    pub fn with_width_and_value(width: usize, value: T) -> Square<T>
    where
        T: Clone,
    {
        Self {
            width,
            elements: vec![value; width.pow(2)],
        }
    }

    /// Returns the width (and height) of the grid
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over the rows of the square
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks panics on a zero chunk size; an empty square has no rows
        self.elements.chunks(self.width.max(1))
    }

    /// Returns an iterator over the elements of one row or column
    pub fn vector(&self, vector_id: VectorId) -> impl Iterator<Item = &T> + '_ {
        assert!(vector_id.index() < self.width);
        let (start, step) = match vector_id.dimension() {
            Dimension::Row => (vector_id.index() * self.width, 1),
            Dimension::Col => (vector_id.index(), self.width),
        };
        (0..self.width).map(move |i| &self.elements[start + i * step])
    }

}

impl<T> Index<Coord> for Square<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.elements[coord.row() * self.width + coord.col()]
    }
}

impl<T> IndexMut<Coord> for Square<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut Self::Output {
        &mut self.elements[coord.row() * self.width + coord.col()]
    }
}

impl<T> Index<usize> for Square<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl<T> IndexMut<usize> for Square<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.elements[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn vector_iterates_a_row() {
        let mut square = Square::with_width_and_value(3, 0);
        for i in 0..9 {
            square[i] = i;
        }
        let row: Vec<usize> = square.vector(VectorId::row(1)).copied().collect_vec();
        assert_eq!(vec![3, 4, 5], row);
    }

    #[test]
    fn vector_iterates_a_col() {
        let mut square = Square::with_width_and_value(3, 0);
        for i in 0..9 {
            square[i] = i;
        }
        let col: Vec<usize> = square.vector(VectorId::col(2)).copied().collect_vec();
        assert_eq!(vec![2, 5, 8], col);
    }

    #[test]
    fn index_by_coord() {
        let mut square = Square::with_width(2);
        square[Coord::new(1, 0)] = 7;
        assert_eq!(7, square[1]);
    }
}
