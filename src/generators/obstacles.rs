use rand::Rng;

use crate::maze::{Coord, Maze};

/// Frees the obstacles placed one level up.
///
/// Each cell goes back to free and unvisited, whatever it holds now.
pub fn clear_obstacles(maze: &mut Maze, obstacles: &[Coord]) {
    obstacles.iter().for_each(|&coord| maze.unblock(coord));
}

/// Checks whether `candidate` may receive an obstacle while the search stands on `current`.
///
/// Rejected: the current cell, the destination, any visited cell, and the cell
/// left of (or above) the destination while the cell above (or left of) it is
/// already visited, so the destination keeps an open side.
pub fn is_admissible(maze: &Maze, candidate: Coord, current: Coord, destination: Coord) -> bool {
    if candidate == current || candidate == destination || maze.is_visited(candidate) {
        return false;
    }
    let (dest_row, dest_col) = destination;
    let left_of_dest = dest_col.checked_sub(1).map(|col| (dest_row, col));
    let above_dest = dest_row.checked_sub(1).map(|row| (row, dest_col));
    match (left_of_dest, above_dest) {
        (Some(left), Some(above)) => {
            !((candidate == left && maze.is_visited(above))
                || (candidate == above && maze.is_visited(left)))
        }
        // A destination on the top row or left column has no such pair to guard.
        _ => true,
    }
}

/// Places up to `count` obstacles uniformly at random, resampling rejected draws.
///
/// Every accepted obstacle is blocked and marked visited. A copy of the set placed
/// so far is pushed onto `history` after each placement. When no admissible cell is
/// left the level stops early instead of sampling forever.
pub fn place_obstacles<R: Rng>(
    maze: &mut Maze,
    rng: &mut R,
    current: Coord,
    destination: Coord,
    count: usize,
    history: &mut Vec<Vec<Coord>>,
) -> Vec<Coord> {
    let mut obstacles = Vec::with_capacity(count);
    if maze.is_empty() {
        return obstacles;
    }
    let size = maze.size();

    for _ in 0..count {
        if !maze
            .coords()
            .any(|c| is_admissible(maze, c, current, destination))
        {
            tracing::warn!(
                "[obstacles] no free cell left at {:?}, placed {} of {}",
                current,
                obstacles.len(),
                count
            );
            break;
        }

        let candidate = loop {
            let candidate = (rng.random_range(0..size), rng.random_range(0..size));
            if is_admissible(maze, candidate, current, destination) {
                break candidate;
            }
        };

        maze.block(candidate);
        obstacles.push(candidate);
        history.push(obstacles.clone());
    }

    obstacles
}
