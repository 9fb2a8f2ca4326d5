use rand::Rng;

use super::{SearchOutcome, SearchSnapshot};
use crate::{
    generators::{clear_obstacles, place_obstacles},
    maze::{Coord, GridCell, Maze, get_neighbors},
};

/// One cell of the active descent.
struct Frame {
    coord: Coord,
    /// Neighbours still to try, the next one last.
    pending: Vec<Coord>,
    /// Obstacles placed right after entering `coord`.
    obstacles: Vec<Coord>,
}

enum Entry {
    Rejected,
    Reached,
    Entered(Frame),
}

/// Depth-first search that re-rolls its obstacles every time it enters a cell.
///
/// Runs on an explicit frame stack, so depth is bounded by the heap rather than
/// the call stack. Cells stay visited after a dead end; only the obstacles of the
/// level directly above are ever released.
pub(super) struct ShiftingDfs<'a, R: Rng> {
    maze: &'a mut Maze,
    rng: &'a mut R,
    destination: Coord,
    obstacle_count: usize,
    path: Vec<Coord>,
    history: Vec<Vec<Coord>>,
}

impl<'a, R: Rng> ShiftingDfs<'a, R> {
    pub(super) fn new(
        maze: &'a mut Maze,
        rng: &'a mut R,
        destination: Coord,
        obstacle_count: usize,
    ) -> Self {
        ShiftingDfs {
            maze,
            rng,
            destination,
            obstacle_count,
            path: Vec::new(),
            history: Vec::new(),
        }
    }

    fn enter(&mut self, coord: Coord, parent_obstacles: &[Coord]) -> Entry {
        if !self.maze.is_valid(coord) || self.maze[coord] == GridCell::Blocked {
            return Entry::Rejected;
        }
        if coord == self.destination {
            self.path.push(coord);
            return Entry::Reached;
        }

        self.maze.set_visited(coord, true);
        self.path.push(coord);
        tracing::trace!("[search] entered {:?} at depth {}", coord, self.path.len());

        clear_obstacles(self.maze, parent_obstacles);
        let obstacles = place_obstacles(
            self.maze,
            self.rng,
            coord,
            self.destination,
            self.obstacle_count,
            &mut self.history,
        );

        let mut pending = get_neighbors(coord).collect::<Vec<_>>();
        pending.reverse();
        Entry::Entered(Frame {
            coord,
            pending,
            obstacles,
        })
    }

    pub(super) fn run(mut self, start: Coord) -> SearchOutcome {
        let mut snapshots = Vec::new();
        let mut stack = match self.enter(start, &[]) {
            Entry::Rejected => Vec::new(),
            Entry::Reached => {
                snapshots.push(SearchSnapshot {
                    path: self.path.clone(),
                    obstacles: Vec::new(),
                });
                Vec::new()
            }
            Entry::Entered(frame) => vec![frame],
        };

        while let Some(top) = stack.last_mut() {
            let Some(next) = top.pending.pop() else {
                // Dead end: backtrack, the cell stays visited.
                tracing::trace!("[search] backtracking from {:?}", top.coord);
                stack.pop();
                self.path.pop();
                continue;
            };

            let parent_obstacles = &stack[stack.len() - 1].obstacles;
            match self.enter(next, parent_obstacles) {
                Entry::Rejected => {}
                Entry::Entered(frame) => stack.push(frame),
                Entry::Reached => {
                    // Innermost level first, as the levels would unwind.
                    snapshots.extend(stack.iter().rev().map(|frame| SearchSnapshot {
                        path: self.path.clone(),
                        obstacles: frame.obstacles.clone(),
                    }));
                    break;
                }
            }
        }

        SearchOutcome {
            snapshots,
            history: self.history,
        }
    }
}
