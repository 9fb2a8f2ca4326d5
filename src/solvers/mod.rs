mod shifting_dfs;

use rand::Rng;

use crate::{
    error::SearchError,
    maze::{Coord, GridCell, Maze},
};
use shifting_dfs::ShiftingDfs;

/// The path and the obstacles of one level, captured when that level reported success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSnapshot {
    pub path: Vec<Coord>,
    pub obstacles: Vec<Coord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// One snapshot per level on the successful branch, innermost level first.
    /// Empty when the destination was never reached.
    pub snapshots: Vec<SearchSnapshot>,
    /// Every obstacle set as it grew, one entry per obstacle placed.
    pub history: Vec<Vec<Coord>>,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        !self.snapshots.is_empty()
    }

    /// The path from start to destination, if one was found.
    pub fn path(&self) -> Option<&[Coord]> {
        self.snapshots.first().map(|s| s.path.as_slice())
    }
}

/// Searches a fresh `grid_size` x `grid_size` maze from `start` to `destination`.
///
/// Fails with [`SearchError::GridTooLarge`] above [`Maze::MAX_SIZE`], otherwise as
/// [`search_in`].
pub fn search<R: Rng>(
    grid_size: usize,
    start: Coord,
    destination: Coord,
    obstacle_count: usize,
    rng: &mut R,
) -> Result<SearchOutcome, SearchError> {
    let mut maze = Maze::try_new(grid_size)?;
    search_in(&mut maze, start, destination, obstacle_count, rng)
}

/// Runs the search on a caller-supplied maze.
///
/// The maze is left as the search finished it: the start cell marked and every
/// cell tried marked visited. Obstacles still in place are those of the last
/// regeneration on each branch that never got released; a neighbour entered
/// after a level regenerated frees that level's obstacles, so even the last
/// level's set may be gone if it tried a neighbour before the destination.
///
/// # Errors
/// * [`SearchError::OutOfBounds`] if `start` or `destination` is outside the maze
/// * [`SearchError::Blocked`] if either of them is already blocked
/// * [`SearchError::ObstacleCapacity`] if `obstacle_count` exceeds the cells left
///   once start and destination are reserved
pub fn search_in<R: Rng>(
    maze: &mut Maze,
    start: Coord,
    destination: Coord,
    obstacle_count: usize,
    rng: &mut R,
) -> Result<SearchOutcome, SearchError> {
    if maze.is_empty() {
        tracing::debug!("[search] empty grid, nothing to search");
        return Ok(SearchOutcome::default());
    }

    for coord in [start, destination] {
        if !maze.is_in_bounds(coord) {
            return Err(SearchError::OutOfBounds {
                coord,
                size: maze.size(),
            });
        }
        if maze[coord] == GridCell::Blocked {
            return Err(SearchError::Blocked { coord });
        }
    }

    if start != destination {
        // Two distinct cells in bounds, so the grid holds at least four.
        let available = maze.size() * maze.size() - 2;
        if obstacle_count > available {
            return Err(SearchError::ObstacleCapacity {
                requested: obstacle_count,
                available,
            });
        }
    }

    maze.set(start, GridCell::Start);
    tracing::debug!(
        "[search] {}x{} grid from {:?} to {:?} with {} obstacles",
        maze.size(),
        maze.size(),
        start,
        destination,
        obstacle_count
    );

    let outcome = ShiftingDfs::new(maze, rng, destination, obstacle_count).run(start);

    tracing::debug!(
        "[search] finished, found: {}, levels: {}, obstacles placed: {}",
        outcome.is_found(),
        outcome.snapshots.len(),
        outcome.history.len()
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;
    use crate::maze::get_neighbors;

    fn assert_is_walk(path: &[Coord]) {
        for pair in path.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_eq!(a.0.abs_diff(b.0) + a.1.abs_diff(b.1), 1, "{a:?} -> {b:?}");
        }
    }

    #[test]
    fn test_open_grid_follows_exploration_order() {
        let mut rng = get_rng(Some(0));
        let outcome = search(5, (0, 0), (4, 4), 0, &mut rng).unwrap();

        let expected = vec![
            (0, 0),
            (0, 1),
            (0, 2),
            (0, 3),
            (0, 4),
            (1, 4),
            (2, 4),
            (3, 4),
            (4, 4),
        ];
        assert_eq!(outcome.path(), Some(expected.as_slice()));
        // Every level except the destination reports once.
        assert_eq!(outcome.snapshots.len(), expected.len() - 1);
        assert!(outcome.snapshots.iter().all(|s| s.path == expected));
        assert!(outcome.snapshots.iter().all(|s| s.obstacles.is_empty()));
        assert!(outcome.history.is_empty());
    }

    #[test]
    fn test_open_grid_tries_up_first() {
        let mut rng = get_rng(Some(0));
        let outcome = search(5, (2, 2), (4, 4), 0, &mut rng).unwrap();
        let expected = [
            (2, 2),
            (1, 2),
            (0, 2),
            (0, 3),
            (0, 4),
            (1, 4),
            (2, 4),
            (3, 4),
            (4, 4),
        ];
        assert_eq!(outcome.path(), Some(expected.as_slice()));
    }

    #[test]
    fn test_open_grid_is_deterministic() {
        let first = search(6, (3, 1), (5, 5), 0, &mut get_rng(Some(1))).unwrap();
        for seed in 2..10 {
            let again = search(6, (3, 1), (5, 5), 0, &mut get_rng(Some(seed))).unwrap();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn test_open_grid_always_reaches_destination() {
        let mut rng = get_rng(Some(0));
        let maze = Maze::new(4);
        for start in maze.coords() {
            for destination in maze.coords() {
                let outcome = search(4, start, destination, 0, &mut rng).unwrap();
                let path = outcome.path().unwrap();
                assert_eq!(path.first(), Some(&start));
                assert_eq!(path.last(), Some(&destination));
                assert_is_walk(path);
            }
        }
    }

    #[test]
    fn test_single_cell_grid_without_obstacles() {
        let mut rng = get_rng(Some(0));
        let outcome = search(1, (0, 0), (0, 0), 0, &mut rng).unwrap();
        assert_eq!(outcome.path(), Some([(0, 0)].as_slice()));
        assert_eq!(outcome.snapshots.len(), 1);
    }

    #[test]
    fn test_single_cell_grid() {
        let mut rng = get_rng(Some(0));
        let outcome = search(1, (0, 0), (0, 0), 3, &mut rng).unwrap();
        assert_eq!(
            outcome.snapshots,
            vec![SearchSnapshot {
                path: vec![(0, 0)],
                obstacles: vec![],
            }]
        );
        assert!(outcome.history.is_empty());
    }

    #[test]
    fn test_empty_grid() {
        let mut rng = get_rng(Some(0));
        let outcome = search(0, (0, 0), (0, 0), 1, &mut rng).unwrap();
        assert!(!outcome.is_found());
        assert!(outcome.history.is_empty());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut rng = get_rng(Some(0));
        assert!(matches!(
            search(5, (5, 0), (4, 4), 1, &mut rng),
            Err(SearchError::OutOfBounds { coord: (5, 0), size: 5 })
        ));
        assert!(matches!(
            search(5, (0, 0), (4, 7), 1, &mut rng),
            Err(SearchError::OutOfBounds { coord: (4, 7), .. })
        ));
    }

    #[test]
    fn test_blocked_destination() {
        let mut rng = get_rng(Some(0));
        let mut maze = Maze::new(3);
        maze.block((2, 2));
        assert!(matches!(
            search_in(&mut maze, (0, 0), (2, 2), 0, &mut rng),
            Err(SearchError::Blocked { coord: (2, 2) })
        ));
    }

    #[test]
    fn test_obstacle_capacity() {
        let mut rng = get_rng(Some(0));
        assert!(matches!(
            search(5, (0, 0), (4, 4), 24, &mut rng),
            Err(SearchError::ObstacleCapacity {
                requested: 24,
                available: 23
            })
        ));
    }

    #[test]
    fn test_crowded_grid_terminates() {
        let mut rng = get_rng(Some(5));
        let mut maze = Maze::new(5);
        let outcome = search_in(&mut maze, (0, 0), (4, 4), 23, &mut rng).unwrap();

        // Only one of the destination's two sides can be blocked, so the first
        // level saturates at 22 and walls the start in.
        assert!(!outcome.is_found());
        assert_eq!(outcome.history.len(), 22);
        assert_eq!(maze.blocked_cells().len(), 22);
        assert_eq!(maze[(0, 0)], GridCell::Start);
    }

    #[test]
    fn test_random_obstacles_keep_path_invariants() {
        let start = (0, 0);
        let destination = (5, 5);
        let mut found = 0;
        for seed in 0..50 {
            let mut rng = get_rng(Some(seed));
            let mut maze = Maze::new(6);
            let outcome = search_in(&mut maze, start, destination, 2, &mut rng).unwrap();
            let Some(path) = outcome.path() else {
                continue;
            };
            found += 1;

            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&destination));
            assert_is_walk(path);
            assert_eq!(outcome.snapshots.len(), path.len() - 1);

            // Level i was placed while the path ran up to path[i]; the innermost
            // snapshot comes first.
            let levels = outcome.snapshots.len();
            for (i, snapshot) in outcome.snapshots.iter().enumerate() {
                let level = levels - 1 - i;
                assert_eq!(snapshot.path, path);
                for obstacle in &snapshot.obstacles {
                    assert_ne!(*obstacle, start);
                    assert_ne!(*obstacle, destination);
                    assert!(!path[..=level].contains(obstacle));
                }
            }

            // The last level's obstacles avoid the whole path. They survive only
            // if no neighbour could be entered before the destination.
            let innermost = path[path.len() - 2];
            let reached_first = get_neighbors(innermost)
                .take_while(|&n| n != destination)
                .all(|n| !maze.is_in_bounds(n));
            for obstacle in &outcome.snapshots[0].obstacles {
                assert!(!path.contains(obstacle));
                if reached_first {
                    assert_eq!(maze[*obstacle], GridCell::Blocked);
                }
            }
        }
        assert!(found > 0);
    }

    #[test]
    fn test_final_maze_keeps_endpoints_open() {
        for seed in 0..50 {
            let mut rng = get_rng(Some(seed));
            let mut maze = Maze::new(6);
            let start = (seed as usize % 6, 0);
            let destination = (5, 5);
            search_in(&mut maze, start, destination, 3, &mut rng).unwrap();

            assert_eq!(maze[start], GridCell::Start);
            assert_ne!(maze[destination], GridCell::Blocked);
            assert!(!maze.is_visited(destination));
        }
    }

    #[test]
    fn test_last_level_obstacles_stay_when_destination_is_next() {
        // Up is off the grid, so right onto the destination is the first
        // neighbour tried after the first regeneration.
        let mut rng = get_rng(Some(4));
        let mut maze = Maze::new(2);
        let outcome = search_in(&mut maze, (0, 0), (0, 1), 1, &mut rng).unwrap();

        assert_eq!(outcome.path(), Some([(0, 0), (0, 1)].as_slice()));
        let obstacles = &outcome.snapshots[0].obstacles;
        assert_eq!(obstacles.len(), 1);
        assert!(obstacles[0] == (1, 0) || obstacles[0] == (1, 1));
        assert_eq!(maze[obstacles[0]], GridCell::Blocked);
    }

    #[test]
    fn test_last_level_obstacles_freed_by_earlier_neighbour() {
        let mut rng = get_rng(Some(15));
        let mut maze = Maze::new(6);
        let outcome = search_in(&mut maze, (0, 0), (5, 5), 2, &mut rng).unwrap();

        let obstacles = &outcome.snapshots[0].obstacles;
        assert_eq!(obstacles.len(), 2);
        assert!(obstacles.iter().any(|&o| maze[o] != GridCell::Blocked));
    }

    #[test]
    fn test_visited_start_finds_nothing() {
        let mut rng = get_rng(Some(0));
        let mut maze = Maze::new(4);
        maze.set_visited((0, 0), true);
        let outcome = search_in(&mut maze, (0, 0), (3, 3), 0, &mut rng).unwrap();

        assert!(!outcome.is_found());
        assert!(outcome.history.is_empty());
        assert_eq!(maze[(0, 0)], GridCell::Start);
    }

    #[test]
    fn test_blocked_start() {
        let mut rng = get_rng(Some(0));
        let mut maze = Maze::new(3);
        maze.block((0, 0));
        assert!(matches!(
            search_in(&mut maze, (0, 0), (2, 2), 0, &mut rng),
            Err(SearchError::Blocked { coord: (0, 0) })
        ));
        assert_eq!(maze[(0, 0)], GridCell::Blocked);
    }

    #[test]
    fn test_grid_too_large() {
        let mut rng = get_rng(Some(0));
        assert!(matches!(
            search(usize::MAX, (0, 0), (1, 1), 0, &mut rng),
            Err(SearchError::GridTooLarge { size: usize::MAX, .. })
        ));
    }

    #[test]
    fn test_five_by_five_with_one_obstacle() {
        let mut found = 0;
        for seed in 0..20 {
            let mut rng = get_rng(Some(seed));
            let outcome = search(5, (0, 0), (4, 4), 1, &mut rng).unwrap();
            if outcome.is_found() {
                found += 1;
                assert!(outcome.snapshots.iter().all(|s| s.obstacles.len() == 1));
            }
        }
        assert!(found > 0);
    }

    #[test]
    fn test_seeded_search_is_reproducible() {
        let a = search(8, (0, 0), (7, 7), 3, &mut get_rng(Some(11))).unwrap();
        let b = search(8, (0, 0), (7, 7), 3, &mut get_rng(Some(11))).unwrap();
        assert_eq!(a, b);
    }
}
