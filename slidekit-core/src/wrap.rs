//! WrapEngine: the seamless infinite-loop teleport
//!
//! Crossing a boundary in infinite mode happens in three phases:
//!
//! 1. Read the offset currently on screen (which may include a live drag)
//!    and shift it by one lap of real items, towards the clones on the far
//!    side.
//! 2. Write that offset unanimated. The track now shows a clone with the
//!    same content, so nothing visibly moves.
//! 3. After the paint has committed, set the logical index to the opposite
//!    bound and let the normal, animated restyle run. The real item at that
//!    bound lines up with the clone, so the only motion is the step itself.
//!
//! Between phases 2 and 3 the index still holds the old boundary value.

use slidekit_model::Direction;

use crate::offset::lap_width;

/// A teleport that has been written (phase 2) but not yet settled (phase 3).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingWrap {
    pub direction: Direction,
    /// Index phase 3 will set.
    pub target: isize,
    /// Offset written in phase 2.
    pub teleport_offset: f32,
}

#[derive(Debug, Clone, Default)]
pub struct WrapEngine {
    pending: Option<PendingWrap>,
}

impl WrapEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrapping needs at least two real items and one clone per side;
    /// otherwise navigation clamps at the boundary.
    pub fn can_wrap(item_count: usize, clone_depth: usize) -> bool {
        item_count > 1 && clone_depth > 0
    }

    /// Phase 1: where the track must jump so the clone matching the current
    /// view replaces it. Wrapping forward (max -> min) adds one lap,
    /// wrapping backward subtracts it.
    pub fn teleport_offset(
        current_offset: f32,
        direction: Direction,
        item_count: usize,
        item_width: f32,
    ) -> f32 {
        let lap = lap_width(item_count, item_width);
        match direction {
            Direction::Next => current_offset + lap,
            Direction::Prev => current_offset - lap,
        }
    }

    pub fn begin(&mut self, wrap: PendingWrap) {
        if let Some(previous) = self.pending.replace(wrap) {
            log::warn!("wrap to {} superseded before it settled", previous.target);
        }
    }

    pub fn pending(&self) -> Option<&PendingWrap> {
        self.pending.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Phase 3: hand over the pending wrap, if it is still wanted.
    pub fn take(&mut self) -> Option<PendingWrap> {
        self.pending.take()
    }

    /// Abandon the pending wrap; phase 3 will find nothing to do.
    pub fn cancel(&mut self) -> Option<PendingWrap> {
        self.pending.take()
    }
}
