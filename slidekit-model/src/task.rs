//! Deferred work handed to the host scheduler.
//!
//! The core never stores callbacks. It asks the host to hold a task and hand
//! it back through `Carousel::run_task` once the requested point in the
//! render cycle (or the requested delay) has been reached.

use crate::direction::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarouselTask {
    /// Write the calculator's offset to the track (coalesced, one per tick).
    Restyle,
    /// Commit a gesture-driven step.
    CommitStep(Direction),
    /// Phase 3 of an infinite wrap: set the boundary index, animated.
    CompleteWrap,
    /// Re-enable auto-advance after a drag released.
    ResumeAutoslide,
    /// Auto-advance timer fired.
    AutoslideTick,
}

/// Opaque handle for a delayed task, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerHandle(pub u64);

impl TimerHandle {
    pub fn raw(self) -> u64 {
        self.0
    }
}
