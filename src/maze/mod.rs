pub mod cell;
pub mod grid;

use std::io::Write;

use crossterm::{queue, style};

pub use cell::GridCell;
use grid::Grid;

use crate::error::SearchError;

/// A `(row, col)` pair, 0-indexed from the top-left corner.
pub type Coord = (usize, usize);

/// Neighbour offsets in exploration order: up, right, down, left.
pub const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Square search grid together with its visited mask.
///
/// Both layers are mutated in place by the searcher: obstacles are written into
/// `cells` as [`GridCell::Blocked`] and mirrored as `true` in `visited`.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    cells: Grid<GridCell>,
    visited: Grid<bool>,
}

impl Maze {
    /// Largest side length a maze may have.
    pub const MAX_SIZE: usize = 4096;

    /// Creates an all-free `size` x `size` maze with nothing visited.
    ///
    /// # Panics
    /// If `size` exceeds [`Maze::MAX_SIZE`]; use [`Maze::try_new`] for untrusted sizes.
    pub fn new(size: usize) -> Self {
        assert!(
            size <= Self::MAX_SIZE,
            "Maze size {} exceeds the maximum of {}",
            size,
            Self::MAX_SIZE
        );
        Maze {
            cells: Grid::new(size, GridCell::Free),
            visited: Grid::new(size, false),
        }
    }

    /// Creates a maze, failing with [`SearchError::GridTooLarge`] above [`Maze::MAX_SIZE`].
    pub fn try_new(size: usize) -> Result<Self, SearchError> {
        if size > Self::MAX_SIZE {
            return Err(SearchError::GridTooLarge {
                size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(Self::new(size))
    }

    /// Returns the side length of the maze.
    pub fn size(&self) -> usize {
        self.cells.size()
    }

    /// Checks if the maze has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.cells.is_in_bounds(coord)
    }

    /// Admission test of the search: in bounds and not yet visited.
    ///
    /// Obstacles are not checked here; they are always marked visited too, so
    /// they fail this test anyway.
    pub fn is_valid(&self, coord: Coord) -> bool {
        self.is_in_bounds(coord) && !self.visited[coord]
    }

    pub fn is_visited(&self, coord: Coord) -> bool {
        self.is_in_bounds(coord) && self.visited[coord]
    }

    pub fn set_visited(&mut self, coord: Coord, visited: bool) {
        self.visited.set(coord, visited);
    }

    pub fn set(&mut self, coord: Coord, cell: GridCell) {
        self.cells.set(coord, cell);
    }

    /// Places an obstacle: blocked in the grid and visited in the mask.
    pub fn block(&mut self, coord: Coord) {
        self.cells.set(coord, GridCell::Blocked);
        self.visited.set(coord, true);
    }

    /// Removes an obstacle placed by [`Maze::block`].
    pub fn unblock(&mut self, coord: Coord) {
        self.cells.set(coord, GridCell::Free);
        self.visited.set(coord, false);
    }

    /// Iterates over every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        self.cells.coords()
    }

    /// Coordinates currently holding an obstacle, in row-major order.
    pub fn blocked_cells(&self) -> Vec<Coord> {
        self.coords()
            .filter(|&c| self.cells[c] == GridCell::Blocked)
            .collect()
    }

    /// Queues the maze with `path` and `destination` drawn over the grid.
    pub fn render_path<W: Write>(
        &self,
        out: &mut W,
        path: &[Coord],
        destination: Coord,
    ) -> std::io::Result<()> {
        for row in 0..self.size() {
            for col in 0..self.size() {
                let coord = (row, col);
                let cell = self.cells[coord];
                if coord == destination {
                    queue!(out, style::PrintStyledContent(cell::goal_glyph()))?;
                } else if cell != GridCell::Start && path.contains(&coord) {
                    queue!(out, style::PrintStyledContent(cell::route_glyph()))?;
                } else {
                    queue!(out, style::Print(cell))?;
                }
            }
            queue!(out, style::Print("\r\n"))?;
        }
        out.flush()
    }
}

impl std::ops::Index<Coord> for Maze {
    type Output = GridCell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.cells[index]
    }
}

/// Steps one cell from `coord` in `direction`.
/// Returns `None` when the step would leave the top or left edge; the bottom and
/// right edges are left to the bounds check.
pub fn step(coord: Coord, direction: (isize, isize)) -> Option<Coord> {
    let row = coord.0.checked_add_signed(direction.0)?;
    let col = coord.1.checked_add_signed(direction.1)?;
    Some((row, col))
}

/// Get neighbors of a cell in exploration order (up, right, down, left).
/// Neighbors off the top or left edge are skipped; the rest may still be out of bounds.
pub fn get_neighbors(coord: Coord) -> impl Iterator<Item = Coord> {
    DIRECTIONS
        .into_iter()
        .filter_map(move |direction| step(coord, direction))
}
