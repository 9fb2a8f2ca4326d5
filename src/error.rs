use thiserror::Error;

use crate::maze::Coord;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("coordinate {coord:?} is outside the {size}x{size} grid")]
    OutOfBounds { coord: Coord, size: usize },
    #[error("grid size {size} exceeds the maximum of {max}")]
    GridTooLarge { size: usize, max: usize },
    #[error("coordinate {coord:?} is already blocked")]
    Blocked { coord: Coord },
    #[error("{requested} obstacles requested but the grid can hold at most {available}")]
    ObstacleCapacity { requested: usize, available: usize },
    #[error("json error: {0}")]
    Serialize(#[from] serde_json::Error),
}
