use serde::Serialize;

use crate::core::{Action, Direction, Vec2, WorldSnapshot};
use crate::planner::astar::Planner;

/// Per-run planning statistics, tallied by the controller for the end-of-run
/// summary export.
#[derive(Clone, Debug, Default, Serialize)]
pub struct AutopilotStats {
    pub replans: u32,
    pub north: u32,
    pub south: u32,
    pub east: u32,
    pub west: u32,
    pub teleport: u32,
    pub stop: u32,
    pub planned_cost: u64,
}

impl AutopilotStats {
    pub fn record(&mut self, action: Action, cost: u32) {
        self.replans += 1;
        self.planned_cost += u64::from(cost);
        match action {
            Action::Move(Direction::North) => self.north += 1,
            Action::Move(Direction::South) => self.south += 1,
            Action::Move(Direction::East) => self.east += 1,
            Action::Move(Direction::West) => self.west += 1,
            Action::Teleport => self.teleport += 1,
            Action::Stop => self.stop += 1,
        }
    }
}

/// Replanning controller: decides when the engine runs, feeds it a fresh
/// snapshot, and consumes only the first action of each plan. It never
/// replays a stale plan; hazards may have moved since it was computed.
pub struct Autopilot {
    planner: Planner,
    stats: AutopilotStats,
}

impl Autopilot {
    pub fn new(planner: Planner) -> Autopilot {
        Autopilot {
            planner,
            stats: AutopilotStats::default(),
        }
    }

    pub fn planner(&self) -> &Planner {
        &self.planner
    }

    pub fn planner_mut(&mut self) -> &mut Planner {
        &mut self.planner
    }

    pub fn stats(&self) -> &AutopilotStats {
        &self.stats
    }

    /// A replan is due at a decision point, or whenever a hazard is close
    /// enough that the previous action may already be unsafe.
    pub fn should_replan(
        &self,
        at_decision_point: bool,
        agent: Vec2,
        snapshot: &WorldSnapshot,
    ) -> bool {
        if at_decision_point {
            return true;
        }
        let threshold = self.planner.policy().replan_hazard_distance;
        snapshot
            .hazards
            .iter()
            .any(|&hazard| hazard.manhattan(agent) <= threshold)
    }

    /// Scans the grid for remaining items and plans toward them; once the
    /// board is clear the exit becomes the sole goal. Returns `None` when no
    /// goal exists or no path is currently open — the driver idles or bails,
    /// it does not crash.
    pub fn next_action(&mut self, agent: Vec2, snapshot: &WorldSnapshot) -> Option<(Action, u32)> {
        let mut goals = self.planner.grid().item_cells();
        if goals.is_empty() {
            let exit = self.planner.grid().exit()?;
            goals = vec![exit];
        }

        let (action, cost) = self.planner.compute_next_action(agent, &goals, snapshot)?;
        self.stats.record(action, cost);
        Some((action, cost))
    }
}
