use serde::Serialize;

use crate::core::Action;
use crate::planner::models::Plan;
use crate::planner::replan::AutopilotStats;

#[derive(Serialize)]
struct RunSummary<'a> {
    steps: usize,
    stats: &'a AutopilotStats,
    path: &'a [Action],
}

/// End-of-run summary for the auto-mode driver, pretty-printed for the
/// exports directory.
pub fn run_summary_json(stats: &AutopilotStats, path: &[Action]) -> String {
    let summary = RunSummary {
        steps: path.len(),
        stats,
        path,
    };
    serde_json::to_string_pretty(&summary).unwrap()
}

pub fn plan_json(plan: &Plan) -> String {
    serde_json::to_string_pretty(plan).unwrap()
}
