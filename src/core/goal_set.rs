use crate::core::models::Vec2;

/// Set of remaining item cells, kept sorted so that two permutations of the
/// same goals always compare and hash identically. The sorted vector IS the
/// canonical form used in explored-set keys; there is no unsorted state.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct GoalSet {
    cells: Vec<Vec2>,
}

impl GoalSet {
    pub fn new(mut cells: Vec<Vec2>) -> GoalSet {
        cells.sort_unstable();
        cells.dedup();
        GoalSet { cells }
    }

    pub fn empty() -> GoalSet {
        GoalSet { cells: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        self.cells.binary_search(&pos).is_ok()
    }

    /// Copy-on-write removal: the parent set is untouched, the child stays
    /// sorted because removal preserves order.
    pub fn without(&self, pos: Vec2) -> GoalSet {
        let mut cells = self.cells.clone();
        if let Ok(index) = cells.binary_search(&pos) {
            cells.remove(index);
        }
        GoalSet { cells }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.cells.iter()
    }

    pub fn cells(&self) -> &[Vec2] {
        &self.cells
    }
}
