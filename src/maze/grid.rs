use super::Coord;

/// Square row-major store shared by the cell grid and the visited mask.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    pub data: Box<[T]>,
    size: usize,
}

impl<T: Copy> Grid<T> {
    pub fn new(size: usize, value: T) -> Self {
        let data = vec![value; size * size].into_boxed_slice();
        Grid { data, size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.size && coord.1 < self.size
    }

    fn ravel_index(&self, coord: Coord) -> usize {
        coord.0 * self.size + coord.1
    }

    pub fn set(&mut self, coord: Coord, value: T) {
        let idx = self.ravel_index(coord);
        self.data[idx] = value;
    }

    /// Iterates over every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<T> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| (row, col)))
    }
}

impl<T: Copy> std::ops::Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}
