use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};

use crate::core::{
    Action, CostPolicy, DangerMap, Direction, GoalSet, MazeGrid, SearchState, Vec2, WorldSnapshot,
    expand,
};
use crate::planner::distance::DistanceOracle;
use crate::planner::heuristic::remaining_cost_bound;
use crate::planner::models::Plan;

/// The state-space model instance bound to the current grid. Owns the
/// distance cache, so cache lifetime can never outlive the geometry it was
/// computed against: geometry changes go through `replace_grid` (or the
/// explicit `invalidate_distance_cache`), item removal goes through
/// `grid_mut` and leaves the cache alone.
pub struct Planner {
    grid: MazeGrid,
    oracle: DistanceOracle,
    policy: CostPolicy,
}

struct FrontierEntry {
    f: u32,
    seq: u64,
    g: u32,
    actions: Vec<Action>,
    state: SearchState,
}

// Min-heap on f, ties broken by insertion order so the frontier behaves as
// a stable priority queue.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for FrontierEntry {}

impl Planner {
    pub fn new(grid: MazeGrid) -> Planner {
        Planner::with_policy(grid, CostPolicy::default())
    }

    pub fn with_policy(grid: MazeGrid, policy: CostPolicy) -> Planner {
        Planner {
            grid,
            oracle: DistanceOracle::new(),
            policy,
        }
    }

    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    /// Mutable access for item removal only. Topology edits must go through
    /// [`Planner::replace_grid`] instead, or the distance cache goes stale.
    pub fn grid_mut(&mut self) -> &mut MazeGrid {
        &mut self.grid
    }

    pub fn policy(&self) -> &CostPolicy {
        &self.policy
    }

    /// Swaps in a new grid (e.g. after a rotation) and drops the distance
    /// cache with it.
    pub fn replace_grid(&mut self, grid: MazeGrid) {
        self.grid = grid;
        self.oracle.invalidate();
    }

    pub fn invalidate_distance_cache(&mut self) {
        self.oracle.invalidate();
    }

    pub fn distance(&mut self, a: Vec2, b: Vec2) -> u32 {
        self.oracle.between(&self.grid, a, b)
    }

    pub fn heuristic(&mut self, state: &SearchState, snapshot: &WorldSnapshot) -> u32 {
        remaining_cost_bound(
            &self.grid,
            &mut self.oracle,
            state,
            &snapshot.hazards,
            &self.policy,
        )
    }

    /// The caller-facing operation: runs a full search and hands back only
    /// the first action plus the planned total cost. The rest of the plan is
    /// discarded; the next tick replans against a fresh snapshot.
    pub fn compute_next_action(
        &mut self,
        agent: Vec2,
        goals: &[Vec2],
        snapshot: &WorldSnapshot,
    ) -> Option<(Action, u32)> {
        let start = SearchState::new(agent, GoalSet::new(goals.to_vec()));
        let plan = self.plan(start, snapshot);
        plan.first_action().map(|action| (action, plan.cost))
    }

    /// Best-first search over `(agent, goals)` states. On reaching an empty
    /// goal set, a plain BFS leg routes to the exit (when one exists) and a
    /// terminal `Stop` is appended. An exhausted frontier returns the empty
    /// plan: no path currently exists, which the caller treats as a
    /// replanning failure rather than a fault.
    pub fn plan(&mut self, start: SearchState, snapshot: &WorldSnapshot) -> Plan {
        let danger = DangerMap::new(&self.grid, &snapshot.hazards);
        let mut frontier = BinaryHeap::new();
        let mut explored: HashSet<SearchState> = HashSet::new();
        let mut seq = 0u64;

        frontier.push(FrontierEntry {
            f: 0,
            seq,
            g: 0,
            actions: Vec::new(),
            state: start,
        });

        while let Some(entry) = frontier.pop() {
            if explored.contains(&entry.state) {
                continue;
            }
            explored.insert(entry.state.clone());

            if entry.state.is_goal() {
                return self.finalize(entry.state.agent, entry.actions, entry.g);
            }

            for transition in expand(
                &self.grid,
                &danger,
                snapshot.invulnerable,
                &entry.state,
                &self.policy,
            ) {
                if explored.contains(&transition.state) {
                    continue;
                }
                let g = entry.g + transition.cost;
                let h = remaining_cost_bound(
                    &self.grid,
                    &mut self.oracle,
                    &transition.state,
                    &snapshot.hazards,
                    &self.policy,
                );
                seq += 1;
                let mut actions = entry.actions.clone();
                actions.push(transition.action);
                frontier.push(FrontierEntry {
                    f: g + h,
                    seq,
                    g,
                    actions,
                    state: transition.state,
                });
            }
        }

        Plan::not_found()
    }

    /// Appends the route-to-exit leg and the terminal `Stop`. The exit leg
    /// assumes the board is cleared: it ignores hazards and invulnerability,
    /// and walls always block it.
    fn finalize(&self, agent: Vec2, mut actions: Vec<Action>, cost: u32) -> Plan {
        let mut cost = cost;
        if let Some(exit) = self.grid.exit() {
            let leg = route_to_exit(&self.grid, agent, exit);
            cost += leg.len() as u32;
            actions.extend(leg);
        }
        actions.push(Action::Stop);
        Plan { actions, cost }
    }
}

/// Unweighted BFS from `from` to `exit` over non-wall cells, returning the
/// action sequence. Unreachable exits yield an empty leg.
fn route_to_exit(grid: &MazeGrid, from: Vec2, exit: Vec2) -> Vec<Action> {
    let mut queue = VecDeque::new();
    let mut visited = HashSet::new();
    queue.push_back((from, Vec::new()));
    visited.insert(from);

    while let Some((pos, path)) = queue.pop_front() {
        if pos == exit {
            return path;
        }
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            let next = Vec2::new(pos.x + dx, pos.y + dy);
            if grid.in_bounds(next) && !grid.is_wall(next) && visited.insert(next) {
                let mut next_path = path.clone();
                next_path.push(Action::Move(dir));
                queue.push_back((next, next_path));
            }
        }
    }

    Vec::new()
}
