/// Distance reported for cell pairs with no walkable path between them.
/// Large enough to push disconnected goals to the back of any frontier,
/// small enough that summing one per goal never overflows a u32.
pub const UNREACHABLE: u32 = 1_000_000;

pub const MAZE_ROTATION_STEPS: u32 = 30;
pub const POWER_UP_STEPS: u32 = 5;
pub const MAX_AUTO_ITERATIONS: u32 = 10_000;

/// Tunable cost-model knobs. The absolute values are policy, not contract:
/// tests assert their relative ordering (blocked > zone penalty > base step,
/// near hazard > far hazard) rather than the exact numbers.
#[derive(Clone, Copy, Debug)]
pub struct CostPolicy {
    /// Cost of stepping into a cell currently occupied by a hazard.
    pub hazard_block_cost: u32,
    /// Cost of stepping into a cell adjacent to a hazard or sharing its row.
    pub hazard_zone_penalty: u32,
    /// Surcharge on teleporting into a hazard-adjacent corner.
    pub teleport_danger_penalty: u32,
    /// Discount for collecting an item on entry, floored at 1.
    pub item_discount: u32,
    /// Heuristic penalty per hazard within `hazard_near_radius`.
    pub hazard_near_penalty: u32,
    /// Heuristic penalty per hazard within `hazard_far_radius`.
    pub hazard_far_penalty: u32,
    pub hazard_near_radius: u32,
    pub hazard_far_radius: u32,
    /// Manhattan distance at which a hazard forces a replan.
    pub replan_hazard_distance: u32,
}

impl Default for CostPolicy {
    fn default() -> Self {
        CostPolicy {
            hazard_block_cost: 9999,
            hazard_zone_penalty: 100,
            teleport_danger_penalty: 50,
            item_discount: 10,
            hazard_near_penalty: 1500,
            hazard_far_penalty: 500,
            hazard_near_radius: 1,
            hazard_far_radius: 3,
            replan_hazard_distance: 4,
        }
    }
}
