mod astar;
mod distance;
mod heuristic;
mod json_export;
mod models;
mod replan;

pub use astar::Planner;
pub use distance::DistanceOracle;
pub use heuristic::remaining_cost_bound;
pub use json_export::{plan_json, run_summary_json};
pub use models::Plan;
pub use replan::{Autopilot, AutopilotStats};
