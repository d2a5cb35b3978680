//! Trait surfaces that describe interactions between the carousel engine and
//! the environment it renders into.

pub mod gesture_sink;
pub mod host;

/// Frequently used trait combinators for hosts and widgets.
pub mod prelude {
    pub use super::gesture_sink::{GestureResponse, GestureSink};
    pub use super::host::{CarouselHost, FrameScheduler, TrackSurface};
}
