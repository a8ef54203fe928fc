use std::collections::{HashMap, HashSet, VecDeque};

use crate::core::{Direction, MazeGrid, UNREACHABLE, Vec2};

/// Memoized shortest walkable-path distances. Pure topology: no wrap-around,
/// no hazards, no invulnerability. Used directly for exit distances and as
/// the edge weight inside the MST heuristic.
///
/// The cache is only valid for the grid geometry it was computed against;
/// the owning planner drops it whenever the grid is replaced.
pub struct DistanceOracle {
    cache: HashMap<(Vec2, Vec2), u32>,
}

impl DistanceOracle {
    pub fn new() -> DistanceOracle {
        DistanceOracle {
            cache: HashMap::new(),
        }
    }

    /// Breadth-first distance between two cells over 4-connected non-wall
    /// cells. Symmetric, so both orderings are cached per computation.
    /// Disconnected pairs yield [`UNREACHABLE`] rather than an error.
    pub fn between(&mut self, grid: &MazeGrid, a: Vec2, b: Vec2) -> u32 {
        if let Some(&dist) = self.cache.get(&(a, b)) {
            return dist;
        }

        let dist = bfs_distance(grid, a, b);
        self.cache.insert((a, b), dist);
        self.cache.insert((b, a), dist);
        dist
    }

    pub fn invalidate(&mut self) {
        self.cache.clear();
    }

    pub fn cached_pairs(&self) -> usize {
        self.cache.len()
    }
}

impl Default for DistanceOracle {
    fn default() -> Self {
        DistanceOracle::new()
    }
}

fn bfs_distance(grid: &MazeGrid, from: Vec2, to: Vec2) -> u32 {
    let mut queue = VecDeque::new();
    let mut visited = HashSet::new();
    queue.push_back((from, 0));
    visited.insert(from);

    while let Some((pos, dist)) = queue.pop_front() {
        if pos == to {
            return dist;
        }
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            let next = Vec2::new(pos.x + dx, pos.y + dy);
            if grid.in_bounds(next) && !grid.is_wall(next) && visited.insert(next) {
                queue.push_back((next, dist + 1));
            }
        }
    }

    UNREACHABLE
}
