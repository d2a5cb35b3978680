use slidekit_model::{CarouselTask, TimerHandle};
use std::time::Duration;

// ===== Host Trait System =====
//
// The engine is headless. Everything it needs from the outside world is a
// pixel width, the ability to move the track, and a way to get a task handed
// back later. Hosts implement these two traits; `CarouselHost` is picked up
// automatically.

/// The viewport and the translated track inside it.
pub trait TrackSurface {
    /// Current rendered width of the viewport element in pixels. Hosts that
    /// have not laid out yet report `0.0`.
    fn measure_track_width(&self) -> f32;

    /// The translation currently on screen, if the host can read it back.
    fn rendered_offset(&self) -> Option<f32> {
        None
    }

    /// Write the horizontal translation of the track. `animated == false`
    /// must suppress the transition for exactly this write.
    fn apply_offset(&mut self, offset: f32, animated: bool);

    /// Write the total width of the padded track.
    fn apply_track_width(&mut self, width: f32);
}

/// Deferred execution inside the host's render cycle.
pub trait FrameScheduler {
    /// Hand `task` back after the current render pass.
    fn after_render(&mut self, task: CarouselTask);

    /// Hand `task` back once the current paint has committed (next frame or
    /// next tick).
    fn after_settle(&mut self, task: CarouselTask);

    /// Hand `task` back after `delay`.
    fn schedule_delayed(
        &mut self,
        task: CarouselTask,
        delay: Duration,
    ) -> TimerHandle;

    /// Drop a delayed task. Cancelling an expired or unknown handle is a no-op.
    fn cancel(&mut self, handle: TimerHandle);
}

/// Everything a carousel needs from its environment.
pub trait CarouselHost: TrackSurface + FrameScheduler {}

impl<T> CarouselHost for T where T: TrackSurface + FrameScheduler {}
