//! Core data model definitions shared across slidekit crates.
#![allow(missing_docs)]

pub mod alignment;
pub mod direction;
pub mod gesture;
pub mod outcome;
pub mod task;

// Intentionally curated re-exports for downstream consumers.
pub use alignment::Alignment;
pub use direction::{Direction, SwipeDirection};
pub use gesture::{GestureEvent, GestureKind};
pub use outcome::SlideOutcome;
pub use task::{CarouselTask, TimerHandle};
