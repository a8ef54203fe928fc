use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cell {
    Wall,
    Open,
    Item,
    PowerItem,
    Exit,
}

impl Cell {
    pub fn is_walkable(self) -> bool {
        self != Cell::Wall
    }
}

/// Grid coordinate. Ordering is lexicographic (x, then y), which is what
/// keeps canonical goal sets sorted.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub fn new(x: i32, y: i32) -> Self {
        Vec2 { x, y }
    }

    pub fn manhattan(self, other: Vec2) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Rebases this coordinate onto a grid rotated 90 degrees clockwise.
    /// `old_height` is the height of the grid before rotation.
    pub fn rotated_right(self, old_height: i32) -> Vec2 {
        Vec2 {
            x: old_height - 1 - self.y,
            y: self.x,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    // Expansion order is fixed: West, East, North, South. Changing it changes
    // which of several equal-cost plans the engine returns.
    pub const ALL: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum Action {
    Move(Direction),
    Teleport,
    Stop,
}

/// Value snapshot of the mutable parts of the world, captured by the caller
/// immediately before a planning call. The engine never reads live actors.
#[derive(Clone, Debug, Default)]
pub struct WorldSnapshot {
    pub hazards: Vec<Vec2>,
    pub invulnerable: bool,
}

impl WorldSnapshot {
    pub fn calm() -> Self {
        WorldSnapshot::default()
    }

    pub fn new(hazards: Vec<Vec2>, invulnerable: bool) -> Self {
        WorldSnapshot {
            hazards,
            invulnerable,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct SearchState {
    pub agent: Vec2,
    pub goals: crate::core::GoalSet,
}

impl SearchState {
    pub fn new(agent: Vec2, goals: crate::core::GoalSet) -> Self {
        SearchState { agent, goals }
    }

    pub fn is_goal(&self) -> bool {
        self.goals.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct Transition {
    pub action: Action,
    pub state: SearchState,
    pub cost: u32,
}
