//! In-memory host with a virtual clock
//!
//! `ManualHost` records every style write and holds deferred tasks until the
//! caller pumps them with [`Carousel::render_frame`], [`Carousel::settle`] or
//! [`Carousel::advance_clock`]. Integration tests and the simulator drive
//! carousels through it.

use std::cell::Cell;
use std::collections::VecDeque;
use std::time::Duration;

use serde::Serialize;
use slidekit_contracts::host::{FrameScheduler, TrackSurface};
use slidekit_model::{CarouselTask, TimerHandle};

use crate::carousel::Carousel;

/// Upper bound on tasks drained per pump; a task chain longer than this is
/// a feedback loop.
const MAX_TASKS_PER_PUMP: usize = 256;

/// One `apply_offset` call as the host saw it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AppliedOffset {
    pub offset: f32,
    pub animated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingTimer {
    handle: TimerHandle,
    task: CarouselTask,
    due: Duration,
}

#[derive(Debug, Clone, Default)]
pub struct ManualHost {
    width: f32,
    offsets: Vec<AppliedOffset>,
    track_widths: Vec<f32>,
    render_queue: VecDeque<CarouselTask>,
    settle_queue: VecDeque<CarouselTask>,
    now: Duration,
    next_timer: u64,
    timers: Vec<PendingTimer>,
    cancelled: Vec<TimerHandle>,
    measurements: Cell<usize>,
}

impl ManualHost {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Change the viewport width. The carousel only notices after
    /// `on_resize`.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn offsets(&self) -> &[AppliedOffset] {
        &self.offsets
    }

    pub fn last_offset(&self) -> Option<AppliedOffset> {
        self.offsets.last().copied()
    }

    pub fn track_widths(&self) -> &[f32] {
        &self.track_widths
    }

    /// How many times the carousel queried the viewport width.
    pub fn measurements(&self) -> usize {
        self.measurements.get()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_render(&self) -> usize {
        self.render_queue.len()
    }

    pub fn pending_settle(&self) -> usize {
        self.settle_queue.len()
    }

    /// Delayed tasks still waiting, in scheduling order.
    pub fn live_timers(&self) -> Vec<(TimerHandle, CarouselTask, Duration)> {
        self.timers
            .iter()
            .map(|t| (t.handle, t.task, t.due))
            .collect()
    }

    pub fn cancelled(&self) -> &[TimerHandle] {
        &self.cancelled
    }

    /// Forget recorded writes. Queues and timers are untouched.
    pub fn clear_log(&mut self) {
        self.offsets.clear();
        self.track_widths.clear();
    }

    fn pop_render(&mut self) -> Option<CarouselTask> {
        self.render_queue.pop_front()
    }

    fn drain_settle(&mut self) -> Vec<CarouselTask> {
        self.settle_queue.drain(..).collect()
    }

    /// Remove and return the earliest timer due at or before `deadline`.
    fn pop_due(&mut self, deadline: Duration) -> Option<PendingTimer> {
        let position = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= deadline)
            .min_by_key(|(_, t)| (t.due, t.handle))
            .map(|(i, _)| i)?;
        Some(self.timers.remove(position))
    }
}

impl TrackSurface for ManualHost {
    fn measure_track_width(&self) -> f32 {
        self.measurements.set(self.measurements.get() + 1);
        self.width
    }

    fn apply_offset(&mut self, offset: f32, animated: bool) {
        self.offsets.push(AppliedOffset { offset, animated });
    }

    fn apply_track_width(&mut self, width: f32) {
        self.track_widths.push(width);
    }
}

impl FrameScheduler for ManualHost {
    fn after_render(&mut self, task: CarouselTask) {
        self.render_queue.push_back(task);
    }

    fn after_settle(&mut self, task: CarouselTask) {
        self.settle_queue.push_back(task);
    }

    fn schedule_delayed(&mut self, task: CarouselTask, delay: Duration) -> TimerHandle {
        self.next_timer += 1;
        let handle = TimerHandle(self.next_timer);
        self.timers.push(PendingTimer {
            handle,
            task,
            due: self.now + delay,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        let before = self.timers.len();
        self.timers.retain(|t| t.handle != handle);
        if self.timers.len() != before {
            self.cancelled.push(handle);
        }
    }
}

impl Carousel<ManualHost> {
    /// Run everything queued for after the current render, including tasks
    /// those tasks queue. Returns the number of tasks run.
    pub fn render_frame(&mut self) -> usize {
        let mut ran = 0;
        while let Some(task) = self.host_mut().pop_render() {
            self.run_task(task);
            ran += 1;
            if ran >= MAX_TASKS_PER_PUMP {
                log::warn!("render queue did not drain after {ran} tasks");
                break;
            }
        }
        ran
    }

    /// Finish the current frame, then let the paint commit: run the
    /// after-settle tasks and the render work they cause.
    pub fn settle(&mut self) -> usize {
        let mut ran = self.render_frame();
        let settled = self.host_mut().drain_settle();
        for task in settled {
            self.run_task(task);
            ran += 1;
        }
        ran + self.render_frame()
    }

    /// Move the virtual clock forward, firing due timers in order and
    /// settling after each one.
    pub fn advance_clock(&mut self, by: Duration) -> usize {
        self.settle();
        let deadline = self.host().now() + by;
        let mut fired = 0;
        while let Some(timer) = self.host_mut().pop_due(deadline) {
            self.host_mut().now = timer.due;
            self.run_task(timer.task);
            self.settle();
            fired += 1;
        }
        self.host_mut().now = deadline;
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_fire_in_due_order_and_cancel_cleanly() {
        let mut host = ManualHost::new(100.0);
        let late = host.schedule_delayed(CarouselTask::AutoslideTick, Duration::from_secs(2));
        let early = host.schedule_delayed(CarouselTask::ResumeAutoslide, Duration::from_secs(1));
        assert_eq!(host.pop_due(Duration::from_secs(5)).map(|t| t.handle), Some(early));

        host.cancel(late);
        host.cancel(late);
        assert_eq!(host.cancelled(), &[late]);
        assert!(host.pop_due(Duration::from_secs(5)).is_none());
    }
}
