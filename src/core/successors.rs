use std::collections::HashSet;

use crate::core::consts::CostPolicy;
use crate::core::grid::MazeGrid;
use crate::core::models::{Action, Direction, SearchState, Transition, Vec2};

/// Hazard geometry derived once per planning call from the snapshot: the
/// occupied cells, the walkable cells 4-adjacent to one, and the rows a
/// hazard patrols.
pub struct DangerMap {
    hazard_cells: HashSet<Vec2>,
    zones: HashSet<Vec2>,
    rows: HashSet<i32>,
}

impl DangerMap {
    pub fn new(grid: &MazeGrid, hazards: &[Vec2]) -> DangerMap {
        let mut hazard_cells = HashSet::new();
        let mut zones = HashSet::new();
        let mut rows = HashSet::new();
        for &hazard in hazards {
            hazard_cells.insert(hazard);
            rows.insert(hazard.y);
            for dir in Direction::ALL {
                let (dx, dy) = dir.delta();
                let near = Vec2::new(hazard.x + dx, hazard.y + dy);
                if grid.in_bounds(near) && !grid.is_wall(near) {
                    zones.insert(near);
                }
            }
        }
        DangerMap {
            hazard_cells,
            zones,
            rows,
        }
    }

    pub fn has_hazard_at(&self, pos: Vec2) -> bool {
        self.hazard_cells.contains(&pos)
    }

    /// Hazard-adjacent, or on a row a hazard patrols.
    pub fn is_dangerous(&self, pos: Vec2) -> bool {
        self.zones.contains(&pos) || self.rows.contains(&pos.y)
    }
}

/// Generates every legal transition out of `state`.
///
/// Corner teleports come first, then the four cardinal moves in fixed order.
/// The x axis wraps (cylindrical topology); y out of range is pruned. Walls
/// block unless the snapshot reported invulnerability. Costs are always
/// positive: the item-collection discount floors at 1.
pub fn expand(
    grid: &MazeGrid,
    danger: &DangerMap,
    invulnerable: bool,
    state: &SearchState,
    policy: &CostPolicy,
) -> Vec<Transition> {
    let mut successors = Vec::new();
    let corners = grid.corners();

    if corners.contains(&state.agent) {
        for &target in &corners {
            if target == state.agent || danger.has_hazard_at(target) {
                continue;
            }
            let mut cost = 1;
            if danger.is_dangerous(target) {
                cost += policy.teleport_danger_penalty;
            }
            successors.push(Transition {
                action: Action::Teleport,
                state: SearchState::new(target, state.goals.clone()),
                cost,
            });
        }
    }

    for dir in Direction::ALL {
        let (dx, dy) = dir.delta();
        let mut nx = state.agent.x + dx;
        let ny = state.agent.y + dy;

        if nx < 0 {
            nx = grid.width() - 1;
        } else if nx >= grid.width() {
            nx = 0;
        }
        if ny < 0 || ny >= grid.height() {
            continue;
        }

        let next = Vec2::new(nx, ny);
        if grid.is_wall(next) && !invulnerable {
            continue;
        }

        let mut cost = 1;
        if danger.has_hazard_at(next) {
            cost = policy.hazard_block_cost;
        } else if danger.is_dangerous(next) {
            cost = policy.hazard_zone_penalty;
        }

        let goals = if state.goals.contains(next) {
            cost = cost.saturating_sub(policy.item_discount).max(1);
            state.goals.without(next)
        } else {
            state.goals.clone()
        };

        successors.push(Transition {
            action: Action::Move(dir),
            state: SearchState::new(next, goals),
            cost,
        });
    }

    successors
}
