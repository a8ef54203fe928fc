use serde::Serialize;

use crate::core::Action;

/// Result of one planning call: the full action sequence and its total cost.
/// A non-empty plan always ends with `Stop`. An empty plan with zero cost
/// means no path currently exists; callers replan or idle, they do not
/// treat it as a fault.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Plan {
    pub actions: Vec<Action>,
    pub cost: u32,
}

impl Plan {
    pub fn not_found() -> Plan {
        Plan {
            actions: Vec::new(),
            cost: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn first_action(&self) -> Option<Action> {
        self.actions.first().copied()
    }
}
