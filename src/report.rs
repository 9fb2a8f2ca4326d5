use std::time::Instant;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    config::SearchConfig,
    error::SearchError,
    maze::{Coord, Maze},
    solvers::{SearchOutcome, SearchSnapshot, search_in},
};

/// One snapshot in the shape returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    pub moving_object_coordinate: Vec<Coord>,
    pub blocking_object_coordinates: Vec<Coord>,
}

impl From<SearchSnapshot> for SearchRecord {
    fn from(snapshot: SearchSnapshot) -> Self {
        SearchRecord {
            moving_object_coordinate: snapshot.path,
            blocking_object_coordinates: snapshot.obstacles,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    pub result: Vec<SearchRecord>,
    /// Wall-clock time of the whole search, in milliseconds.
    pub execution_time: f64,
}

impl SearchReport {
    pub fn to_json(&self) -> Result<String, SearchError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs a configured search on a fresh maze and returns the report together with
/// the maze as the search left it.
pub fn find_path<R: Rng>(
    config: &SearchConfig,
    rng: &mut R,
) -> Result<(SearchReport, Maze), SearchError> {
    let mut maze = Maze::try_new(config.grid_size)?;
    let started = Instant::now();
    let SearchOutcome { snapshots, .. } = search_in(
        &mut maze,
        config.start(),
        config.destination(),
        config.obstacle_count,
        rng,
    )?;
    let execution_time = started.elapsed().as_secs_f64() * 1000.0;

    let report = SearchReport {
        result: snapshots.into_iter().map(SearchRecord::from).collect(),
        execution_time,
    };
    Ok((report, maze))
}
