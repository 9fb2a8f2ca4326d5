//! Depth-first maze search that re-rolls a fixed number of random obstacles
//! every time it steps into a new cell.
pub mod config;
pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod report;
pub mod solvers;

pub use error::SearchError;
pub use maze::{Coord, GridCell, Maze};
pub use solvers::{SearchOutcome, SearchSnapshot, search, search_in};
