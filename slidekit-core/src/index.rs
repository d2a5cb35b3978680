//! IndexModel: logical position within the clone-padded item sequence

use slidekit_model::Direction;

/// Result of planning a single step, before any side effects are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPlan {
    /// The step stays inside `[min_index, max_index]`.
    Within(isize),
    /// The step would leave the bounds on this side.
    Boundary,
}

/// Owns the logical index and the bounds derived from the item count and
/// clone depth.
///
/// Real items occupy `[clone_depth, clone_depth + item_count - 1]`. Bounds
/// are recomputed eagerly whenever the geometry changes, and the index is
/// reset to `min_index` at the same time so it is never stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexModel {
    item_count: usize,
    clone_depth: usize,
    index: isize,
    min_index: isize,
    max_index: isize,
}

impl IndexModel {
    pub fn new(item_count: usize, clone_depth: usize) -> Self {
        let mut model = Self {
            item_count,
            clone_depth,
            index: 0,
            min_index: 0,
            max_index: 0,
        };
        model.recompute_bounds();
        model.reset_to_min();
        model
    }

    pub fn index(&self) -> isize {
        self.index
    }

    pub fn min_index(&self) -> isize {
        self.min_index
    }

    pub fn max_index(&self) -> isize {
        self.max_index
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn clone_depth(&self) -> usize {
        self.clone_depth
    }

    /// Position relative to the real (unpadded) item sequence.
    pub fn slide_index(&self) -> isize {
        self.index - self.clone_depth as isize
    }

    pub fn has_multiple_items(&self) -> bool {
        self.item_count > 1
    }

    pub fn contains(&self, index: isize) -> bool {
        index >= self.min_index && index <= self.max_index
    }

    pub fn at_min(&self) -> bool {
        self.index == self.min_index
    }

    pub fn at_max(&self) -> bool {
        self.index == self.max_index
    }

    /// Replace item count and clone depth. Returns `true` when the geometry
    /// actually changed, in which case the bounds were recomputed and the
    /// index reset to `min_index`.
    pub fn set_geometry(&mut self, item_count: usize, clone_depth: usize) -> bool {
        if self.item_count == item_count && self.clone_depth == clone_depth {
            return false;
        }
        self.item_count = item_count;
        self.clone_depth = clone_depth;
        self.recompute_bounds();
        self.reset_to_min();
        true
    }

    /// Move back to the first real item. Returns `true` if the index moved.
    pub fn reset_to_min(&mut self) -> bool {
        let moved = self.index != self.min_index;
        self.index = self.min_index;
        moved
    }

    /// Decide what a single step in `direction` would do.
    pub fn plan_step(&self, direction: Direction) -> StepPlan {
        let target = self.index + direction.step();
        if self.contains(target) {
            StepPlan::Within(target)
        } else {
            StepPlan::Boundary
        }
    }

    /// The index an infinite wrap in `direction` settles on: the opposite
    /// bound.
    pub fn wrap_target(&self, direction: Direction) -> isize {
        match direction {
            Direction::Next => self.min_index,
            Direction::Prev => self.max_index,
        }
    }

    /// Set the index if it lies inside the bounds. Out-of-range targets are
    /// refused, never snapped.
    pub fn set(&mut self, index: isize) -> bool {
        if !self.contains(index) {
            return false;
        }
        self.index = index;
        true
    }

    fn recompute_bounds(&mut self) {
        let depth = isize::try_from(self.clone_depth).unwrap_or(isize::MAX);
        let count = isize::try_from(self.item_count).unwrap_or(isize::MAX);
        self.min_index = depth;
        self.max_index = count.saturating_add(depth).saturating_sub(1);
    }
}
