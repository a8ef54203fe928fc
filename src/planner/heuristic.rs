use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use crate::core::{CostPolicy, MazeGrid, SearchState, Vec2};
use crate::planner::distance::DistanceOracle;

/// Lower-bound estimate of the cost remaining from `state`, plus a hazard
/// proximity term.
///
/// With goals left the bound is nearest-goal distance + MST over the goal
/// set: reach the nearest goal, then traverse a tree spanning the rest. That
/// part is admissible on an unpenalized grid. The hazard term is not a lower
/// bound at all; it deliberately trades optimality for keeping routes away
/// from hazards, and only applies while goals remain.
pub fn remaining_cost_bound(
    grid: &MazeGrid,
    oracle: &mut DistanceOracle,
    state: &SearchState,
    hazards: &[Vec2],
    policy: &CostPolicy,
) -> u32 {
    if state.goals.is_empty() {
        return match grid.exit() {
            Some(exit) => oracle.between(grid, state.agent, exit),
            None => 0,
        };
    }

    let min_dist_to_goal = state
        .goals
        .iter()
        .map(|&goal| oracle.between(grid, state.agent, goal))
        .min()
        .unwrap_or(0);

    let mst_cost = goal_tree_cost(grid, oracle, state.goals.cells());

    let mut danger_penalty = 0;
    for &hazard in hazards {
        let dist = hazard.manhattan(state.agent);
        if dist <= policy.hazard_near_radius {
            danger_penalty += policy.hazard_near_penalty;
        } else if dist <= policy.hazard_far_radius {
            danger_penalty += policy.hazard_far_penalty;
        }
    }

    min_dist_to_goal + mst_cost + danger_penalty
}

/// Total edge weight of a minimum spanning tree over the goal cells, grown
/// Prim-style from the first goal with maze distances as edge weights.
fn goal_tree_cost(grid: &MazeGrid, oracle: &mut DistanceOracle, goals: &[Vec2]) -> u32 {
    if goals.len() < 2 {
        return 0;
    }

    let mut visited = HashSet::new();
    visited.insert(goals[0]);
    let mut edges = BinaryHeap::new();
    for &goal in &goals[1..] {
        edges.push(Reverse((oracle.between(grid, goals[0], goal), goal)));
    }

    let mut total = 0;
    while let Some(Reverse((cost, nearest))) = edges.pop() {
        if visited.len() == goals.len() {
            break;
        }
        if !visited.insert(nearest) {
            continue;
        }
        total += cost;
        for &goal in goals {
            if !visited.contains(&goal) {
                edges.push(Reverse((oracle.between(grid, nearest, goal), goal)));
            }
        }
    }

    total
}
