//! One-shot auto-advance timer, re-armed on every index change

use std::time::Duration;

use slidekit_contracts::host::FrameScheduler;
use slidekit_model::{CarouselTask, TimerHandle};

#[derive(Debug, Clone)]
pub struct AutoAdvanceTimer {
    /// `isAutoslide`: the feature is configured at all.
    enabled: bool,
    /// Armed unless a drag or an explicit disable paused it.
    active: bool,
    interval: Duration,
    handle: Option<TimerHandle>,
}

impl AutoAdvanceTimer {
    pub fn new(enabled: bool, interval: Duration) -> Self {
        Self {
            enabled,
            active: enabled,
            interval,
            handle: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_active(&self) -> bool {
        self.enabled && self.active
    }

    /// Whether a tick is currently scheduled with the host.
    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Cancel any pending tick and, if still active and `eligible`, schedule
    /// a new one. Cancelling first keeps at most one tick outstanding.
    pub fn rearm<S>(&mut self, scheduler: &mut S, eligible: bool)
    where
        S: FrameScheduler + ?Sized,
    {
        self.cancel(scheduler);
        if self.is_active() && eligible {
            let handle =
                scheduler.schedule_delayed(CarouselTask::AutoslideTick, self.interval);
            log::trace!("autoslide armed ({:?}) in {:?}", handle, self.interval);
            self.handle = Some(handle);
        }
    }

    /// Drop the pending tick without changing `active`.
    pub fn cancel<S>(&mut self, scheduler: &mut S)
    where
        S: FrameScheduler + ?Sized,
    {
        if let Some(handle) = self.handle.take() {
            scheduler.cancel(handle);
        }
    }

    pub fn enable<S>(&mut self, scheduler: &mut S, eligible: bool)
    where
        S: FrameScheduler + ?Sized,
    {
        if !self.enabled {
            return;
        }
        self.active = true;
        self.rearm(scheduler, eligible);
    }

    pub fn disable<S>(&mut self, scheduler: &mut S)
    where
        S: FrameScheduler + ?Sized,
    {
        if !self.enabled {
            return;
        }
        self.active = false;
        self.cancel(scheduler);
    }

    /// The scheduled tick has been delivered; its handle is spent.
    pub fn on_fired(&mut self) {
        self.handle = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Timers {
        next: u64,
        live: Vec<TimerHandle>,
    }

    impl FrameScheduler for Timers {
        fn after_render(&mut self, _task: CarouselTask) {}

        fn after_settle(&mut self, _task: CarouselTask) {}

        fn schedule_delayed(&mut self, _task: CarouselTask, _delay: Duration) -> TimerHandle {
            self.next += 1;
            let handle = TimerHandle(self.next);
            self.live.push(handle);
            handle
        }

        fn cancel(&mut self, handle: TimerHandle) {
            self.live.retain(|h| *h != handle);
        }
    }

    #[test]
    fn rearming_never_stacks_timers() {
        let mut timers = Timers::default();
        let mut autoslide = AutoAdvanceTimer::new(true, Duration::from_millis(3500));
        autoslide.rearm(&mut timers, true);
        autoslide.rearm(&mut timers, true);
        autoslide.rearm(&mut timers, true);
        assert_eq!(timers.live.len(), 1);
        assert!(autoslide.is_armed());
    }

    #[test]
    fn disabled_feature_never_schedules() {
        let mut timers = Timers::default();
        let mut autoslide = AutoAdvanceTimer::new(false, Duration::from_millis(3500));
        autoslide.enable(&mut timers, true);
        autoslide.rearm(&mut timers, true);
        assert!(timers.live.is_empty());
        assert!(!autoslide.is_active());
    }

    #[test]
    fn disable_cancels_and_enable_rearms() {
        let mut timers = Timers::default();
        let mut autoslide = AutoAdvanceTimer::new(true, Duration::from_millis(3500));
        autoslide.rearm(&mut timers, true);
        autoslide.disable(&mut timers);
        assert!(timers.live.is_empty());
        autoslide.rearm(&mut timers, true);
        assert!(timers.live.is_empty());
        autoslide.enable(&mut timers, true);
        assert_eq!(timers.live.len(), 1);
    }

    #[test]
    fn ineligible_carousels_stay_idle() {
        let mut timers = Timers::default();
        let mut autoslide = AutoAdvanceTimer::new(true, Duration::from_millis(3500));
        autoslide.rearm(&mut timers, false);
        assert!(!autoslide.is_armed());
    }
}
