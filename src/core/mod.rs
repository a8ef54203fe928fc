mod consts;
mod goal_set;
mod grid;
mod models;
mod successors;

pub use consts::*;
pub use goal_set::GoalSet;
pub use grid::MazeGrid;
pub use models::{Action, Cell, Direction, SearchState, Transition, Vec2, WorldSnapshot};
pub use successors::{DangerMap, expand};
