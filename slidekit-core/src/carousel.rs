//! Carousel: the orchestrator tying index, offset, gestures, wrap, timer and
//! freeze state to a host.
//!
//! Control flow for every input is the same: freeze check, index mutation
//! (or wrap teleport), offset recomputation, a coalesced style write through
//! the host, and an auto-advance re-arm when the index moved.

use slidekit_contracts::gesture_sink::{GestureResponse, GestureSink};
use slidekit_contracts::host::CarouselHost;
use slidekit_model::{
    CarouselTask, Direction, GestureEvent, GestureKind, SlideOutcome,
};

use crate::autoslide::AutoAdvanceTimer;
use crate::config::CarouselOptions;
use crate::error::Result;
use crate::freeze::{FreezeGate, FreezeTransition};
use crate::gesture::{DragPhase, GestureAction, GestureController};
use crate::index::{IndexModel, StepPlan};
use crate::layout::{self, Dot, Slot, TrackMetrics};
use crate::offset::{self, OffsetInput};
use crate::snapshot::CarouselSnapshot;
use crate::wrap::{PendingWrap, WrapEngine};

#[derive(Debug)]
pub struct Carousel<H> {
    host: H,
    options: CarouselOptions,
    index: IndexModel,
    metrics: TrackMetrics,
    gestures: GestureController,
    wrap: WrapEngine,
    autoslide: AutoAdvanceTimer,
    freeze: FreezeGate,
    /// The next style write must not animate.
    no_transition: bool,
    restyle_pending: bool,
    commit_pending: bool,
    /// Last offset written to the host.
    last_applied: Option<f32>,
    attached: bool,
}

impl<H: CarouselHost> Carousel<H> {
    /// Build a carousel over `item_count` host-owned items. Rejects
    /// malformed options.
    pub fn new(host: H, options: CarouselOptions, item_count: usize) -> Result<Self> {
        options.validate()?;
        let metrics = TrackMetrics::new();
        let depth = layout::clone_depth(&options, item_count, metrics.item_set_size);
        Ok(Self {
            host,
            index: IndexModel::new(item_count, depth),
            metrics,
            gestures: GestureController::new(options.min_drag_transition_distance),
            wrap: WrapEngine::new(),
            autoslide: AutoAdvanceTimer::new(
                options.is_autoslide,
                options.autoslide_interval,
            ),
            freeze: FreezeGate::new(),
            no_transition: true,
            restyle_pending: false,
            commit_pending: false,
            last_applied: None,
            attached: false,
            options,
        })
    }

    // ===== Host access =====

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    // ===== Derived, read-only properties =====

    pub fn index(&self) -> isize {
        self.index.index()
    }

    pub fn min_index(&self) -> isize {
        self.index.min_index()
    }

    pub fn max_index(&self) -> isize {
        self.index.max_index()
    }

    pub fn slide_index(&self) -> isize {
        self.index.slide_index()
    }

    pub fn item_count(&self) -> usize {
        self.index.item_count()
    }

    pub fn clone_depth(&self) -> usize {
        self.index.clone_depth()
    }

    pub fn item_width(&self) -> f32 {
        self.metrics.item_width
    }

    pub fn item_set_size(&self) -> usize {
        self.metrics.item_set_size
    }

    pub fn has_multiple_items(&self) -> bool {
        self.index.has_multiple_items()
    }

    pub fn is_swipeable(&self) -> bool {
        self.options
            .is_swipeable
            .unwrap_or_else(|| self.has_multiple_items())
    }

    pub fn prev_btn_disabled(&self) -> bool {
        !self.has_multiple_items() || (!self.options.is_infinite && self.index.at_min())
    }

    pub fn next_btn_disabled(&self) -> bool {
        !self.has_multiple_items() || (!self.options.is_infinite && self.index.at_max())
    }

    pub fn no_transition(&self) -> bool {
        self.no_transition
    }

    pub fn is_frozen(&self) -> bool {
        self.freeze.is_frozen()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_wrapping(&self) -> bool {
        self.wrap.is_pending()
    }

    pub fn pending_wrap(&self) -> Option<&PendingWrap> {
        self.wrap.pending()
    }

    pub fn drag_phase(&self) -> DragPhase {
        self.gestures.phase()
    }

    pub fn autoslide_armed(&self) -> bool {
        self.autoslide.is_armed()
    }

    /// Offset the calculator assigns to the current index.
    pub fn container_offset(&self) -> f32 {
        offset::container_offset(&self.offset_input())
    }

    pub fn track_width(&self) -> f32 {
        offset::track_width(self.item_width(), self.item_count(), self.clone_depth())
    }

    /// Last offset written to the host, if any.
    pub fn applied_offset(&self) -> Option<f32> {
        self.last_applied
    }

    pub fn slots(&self) -> Vec<Slot> {
        layout::slots(self.item_count(), self.clone_depth(), self.index())
    }

    pub fn dots(&self) -> Vec<Dot> {
        if !self.options.show_dot_indicators {
            return Vec::new();
        }
        layout::dots(self.item_count(), self.clone_depth(), self.index())
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            index: self.index(),
            min_index: self.min_index(),
            max_index: self.max_index(),
            slide_index: self.slide_index(),
            item_count: self.item_count(),
            clone_depth: self.clone_depth(),
            item_set_size: self.item_set_size(),
            item_width: self.item_width(),
            container_offset: self.container_offset(),
            applied_offset: self.last_applied,
            track_width: self.track_width(),
            prev_btn_disabled: self.prev_btn_disabled(),
            next_btn_disabled: self.next_btn_disabled(),
            has_multiple_items: self.has_multiple_items(),
            no_transition: self.no_transition,
            is_frozen: self.is_frozen(),
            is_wrapping: self.is_wrapping(),
            autoslide_armed: self.autoslide_armed(),
        }
    }

    // ===== Navigation =====

    pub fn slide_next(&mut self) -> SlideOutcome {
        self.advance(Direction::Next)
    }

    pub fn slide_prev(&mut self) -> SlideOutcome {
        self.advance(Direction::Prev)
    }

    /// Move one step. Wraps in infinite mode, clamps otherwise.
    pub fn advance(&mut self, direction: Direction) -> SlideOutcome {
        if !self.freeze.admits() {
            log::trace!("advance({direction}) rejected: frozen");
            return SlideOutcome::Rejected;
        }
        if self.wrap.is_pending() {
            log::trace!("advance({direction}) rejected: wrap in flight");
            return SlideOutcome::Rejected;
        }

        match self.index.plan_step(direction) {
            StepPlan::Within(target) => {
                self.index.set(target);
                self.no_transition = false;
                self.on_index_changed();
                SlideOutcome::Stepped(target)
            }
            StepPlan::Boundary
                if self.options.is_infinite
                    && WrapEngine::can_wrap(self.item_count(), self.clone_depth()) =>
            {
                self.teleport(direction)
            }
            StepPlan::Boundary => {
                // Nothing moves, but the track may be displaced by a drag.
                self.no_transition = false;
                self.request_restyle();
                SlideOutcome::Clamped
            }
        }
    }

    /// Jump straight to `target`. Out-of-range targets are refused.
    pub fn jump_to(&mut self, target: isize) -> SlideOutcome {
        if !self.freeze.admits() {
            log::trace!("jump_to({target}) rejected: frozen");
            return SlideOutcome::Rejected;
        }
        if !self.index.contains(target) {
            log::trace!(
                "jump_to({target}) rejected: outside {}..={}",
                self.min_index(),
                self.max_index()
            );
            return SlideOutcome::Rejected;
        }
        if self.cancel_wrap() {
            log::debug!("jump_to({target}) overrides wrap");
        }

        let moved = self.index.index() != target;
        self.index.set(target);
        self.no_transition = false;
        if moved {
            self.on_index_changed();
        } else {
            self.request_restyle();
        }
        SlideOutcome::Jumped(target)
    }

    /// Dot indicator click: a gated jump.
    pub fn click_dot(&mut self, index: isize) -> SlideOutcome {
        self.jump_to(index)
    }

    /// Return to the first real item.
    pub fn reset(&mut self) {
        self.cancel_wrap();
        if self.index.reset_to_min() {
            self.on_index_changed();
        } else {
            self.request_restyle();
        }
    }

    // ===== Auto-advance =====

    pub fn enable_autoslide(&mut self) {
        let eligible = self.autoslide_eligible();
        self.autoslide.enable(&mut self.host, eligible);
    }

    pub fn disable_autoslide(&mut self) {
        self.autoslide.disable(&mut self.host);
    }

    // ===== Lifecycle =====

    /// The host has inserted the widget: measure, lay out, register input.
    pub fn attach(&mut self) {
        if self.attached {
            return;
        }
        self.attached = true;
        log::debug!(
            "carousel attached: {} items, infinite={}, frozen={}",
            self.item_count(),
            self.options.is_infinite,
            self.is_frozen()
        );
        if self.freeze.admits() {
            self.register_listeners();
        } else {
            self.metrics.invalidate();
            self.refresh_geometry();
        }
    }

    /// The host is removing the widget: cancel the timer and any drag, drop
    /// pending work.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.teardown_listeners();
        self.attached = false;
        log::debug!("carousel detached at index {}", self.index());
    }

    /// Tear down and give the host back.
    pub fn destroy(mut self) -> H {
        self.detach();
        self.host
    }

    pub fn set_frozen(&mut self, frozen: bool) {
        match self.freeze.set(frozen) {
            Some(FreezeTransition::Froze) => {
                log::debug!("carousel frozen at index {}", self.index());
                if self.attached {
                    self.teardown_listeners();
                }
            }
            Some(FreezeTransition::Thawed) => {
                log::debug!("carousel thawed at index {}", self.index());
                if self.attached {
                    self.register_listeners();
                }
            }
            None => {}
        }
    }

    /// The host's viewport changed size.
    pub fn on_resize(&mut self) {
        if !self.attached || !self.freeze.admits() {
            return;
        }
        self.metrics.invalidate();
        self.refresh_geometry();
    }

    /// The item sequence was replaced, grown or shrunk.
    pub fn set_item_count(&mut self, item_count: usize) {
        let depth = layout::clone_depth(&self.options, item_count, self.metrics.item_set_size);
        let before = self.index();
        self.index.set_geometry(item_count, depth);
        self.index.reset_to_min();
        self.abandon_interaction();
        log::debug!(
            "items changed: {item_count} items, clone depth {depth}, bounds {}..={}",
            self.min_index(),
            self.max_index()
        );

        self.host.apply_track_width(self.track_width());
        if self.index() != before {
            self.on_index_changed();
        } else {
            self.request_restyle();
            self.sync_autoslide_eligibility();
        }
    }

    /// The track's CSS transition finished.
    pub fn on_transition_end(&mut self) {
        self.no_transition = true;
    }

    // ===== Deferred work =====

    /// Hand back a task the host was asked to hold.
    pub fn run_task(&mut self, task: CarouselTask) {
        if !self.attached {
            log::trace!("dropping {task:?}: carousel detached");
            match task {
                CarouselTask::Restyle => self.restyle_pending = false,
                CarouselTask::CommitStep(_) => self.commit_pending = false,
                CarouselTask::AutoslideTick => self.autoslide.on_fired(),
                CarouselTask::CompleteWrap | CarouselTask::ResumeAutoslide => {}
            }
            return;
        }

        match task {
            CarouselTask::Restyle => self.restyle(),
            CarouselTask::CommitStep(direction) => self.commit_step(direction),
            CarouselTask::CompleteWrap => self.complete_wrap(),
            CarouselTask::ResumeAutoslide => self.enable_autoslide(),
            CarouselTask::AutoslideTick => {
                self.autoslide.on_fired();
                let outcome = self.advance(Direction::Next);
                log::trace!("autoslide tick: {outcome}");
            }
        }
    }

    // ===== Internals =====

    fn offset_input(&self) -> OffsetInput {
        OffsetInput {
            index: self.index(),
            clone_depth: self.clone_depth(),
            item_width: self.item_width(),
            alignment: self.options.item_set_alignment,
            has_multiple_items: self.has_multiple_items(),
        }
    }

    /// What is on screen right now: the last offset the core wrote, then the
    /// host's own reading, then the calculator.
    fn current_rendered_offset(&self) -> f32 {
        self.last_applied
            .or_else(|| self.host.rendered_offset())
            .unwrap_or_else(|| self.container_offset())
    }

    fn write_offset(&mut self, offset: f32, animated: bool) {
        self.host.apply_offset(offset, animated);
        self.last_applied = Some(offset);
    }

    fn request_restyle(&mut self) {
        if self.restyle_pending {
            return;
        }
        self.restyle_pending = true;
        self.host.after_render(CarouselTask::Restyle);
    }

    fn restyle(&mut self) {
        self.restyle_pending = false;
        if self.wrap.is_pending() {
            log::trace!("restyle skipped: wrap in flight");
            return;
        }
        let offset = self.container_offset();
        let tracking = self.gestures.is_tracking();
        self.write_offset(offset, !self.no_transition && !tracking);
        if tracking {
            self.gestures.rebase(offset);
        }
        if self.gestures.phase() == DragPhase::Settling {
            self.gestures.finish();
        }
    }

    fn on_index_changed(&mut self) {
        log::debug!(
            "index -> {} (slide {}, bounds {}..={})",
            self.index(),
            self.slide_index(),
            self.min_index(),
            self.max_index()
        );
        self.request_restyle();
        let eligible = self.autoslide_eligible();
        self.autoslide.rearm(&mut self.host, eligible);
    }

    fn teleport(&mut self, direction: Direction) -> SlideOutcome {
        let current = self.current_rendered_offset();
        let teleport_offset = WrapEngine::teleport_offset(
            current,
            direction,
            self.item_count(),
            self.item_width(),
        );
        let target = self.index.wrap_target(direction);
        log::debug!(
            "wrap {direction}: {} -> {target}, teleport {current} -> {teleport_offset}",
            self.index()
        );

        self.no_transition = true;
        self.write_offset(teleport_offset, false);
        self.wrap.begin(PendingWrap {
            direction,
            target,
            teleport_offset,
        });
        self.host.after_settle(CarouselTask::CompleteWrap);
        SlideOutcome::Wrapped(target)
    }

    fn complete_wrap(&mut self) {
        let Some(wrap) = self.wrap.take() else {
            log::trace!("complete_wrap: nothing pending");
            return;
        };
        self.no_transition = self.gestures.is_tracking();
        if self.index.set(wrap.target) {
            self.on_index_changed();
        } else {
            log::warn!("wrap target {} no longer in bounds", wrap.target);
            self.request_restyle();
        }
    }

    fn queue_commit(&mut self, direction: Direction) {
        if self.commit_pending {
            log::trace!("commit {direction} coalesced with pending commit");
            return;
        }
        self.commit_pending = true;
        self.host.after_render(CarouselTask::CommitStep(direction));
    }

    fn commit_step(&mut self, direction: Direction) {
        self.commit_pending = false;
        let outcome = self.advance(direction);
        self.gestures.finish();
        if outcome == SlideOutcome::Rejected {
            // The drag preview is still on screen.
            self.no_transition = false;
            self.request_restyle();
        }
    }

    fn autoslide_eligible(&self) -> bool {
        self.attached && self.freeze.admits() && self.has_multiple_items()
    }

    fn sync_autoslide_eligibility(&mut self) {
        let eligible = self.autoslide_eligible();
        if eligible != self.autoslide.is_armed() {
            self.autoslide.rearm(&mut self.host, eligible);
        }
    }

    /// Re-measure and re-derive clone depth, bounds and track width.
    fn refresh_geometry(&mut self) {
        let host = &self.host;
        self.metrics
            .ensure_measured(&self.options, || host.measure_track_width());
        let item_count = self.item_count();
        let depth = layout::clone_depth(&self.options, item_count, self.metrics.item_set_size);
        let before = self.index();
        if self.index.set_geometry(item_count, depth) {
            self.abandon_interaction();
            log::debug!("clone depth -> {depth}; index reset");
        }
        self.host.apply_track_width(self.track_width());
        if self.index() != before {
            self.on_index_changed();
        } else {
            self.request_restyle();
        }
    }

    fn register_listeners(&mut self) {
        self.metrics.invalidate();
        self.refresh_geometry();
        self.host.after_render(CarouselTask::ResumeAutoslide);
    }

    fn teardown_listeners(&mut self) {
        self.autoslide.cancel(&mut self.host);
        self.abandon_interaction();
    }

    /// End any drag without committing and undo a half-finished wrap.
    fn abandon_interaction(&mut self) {
        if self.gestures.cancel() {
            log::debug!("drag session cancelled");
            self.no_transition = false;
            self.request_restyle();
        }
        if self.cancel_wrap() {
            log::debug!("wrap abandoned");
        }
    }

    /// Drop a pending wrap and move the track back from the teleported clone
    /// to the boundary index. The clone shows the same item, so the write is
    /// unanimated.
    fn cancel_wrap(&mut self) -> bool {
        let Some(wrap) = self.wrap.cancel() else {
            return false;
        };
        log::trace!("wrap to {} cancelled at {}", wrap.target, self.index());
        self.no_transition = true;
        let offset = self.container_offset();
        self.write_offset(offset, false);
        true
    }
}

impl<H: CarouselHost> GestureSink for Carousel<H> {
    fn accepts_gestures(&self) -> bool {
        self.attached && self.freeze.admits() && self.is_swipeable() && self.has_multiple_items()
    }

    fn on_gesture(&mut self, event: &GestureEvent) -> GestureResponse {
        if !self.accepts_gestures() {
            return GestureResponse::PassThrough;
        }
        log::trace!(
            "gesture {:?} dir={:?} angle={} distance={} dx={}",
            event.kind,
            event.direction,
            event.angle,
            event.distance,
            event.delta_x
        );

        match event.kind {
            GestureKind::Touch => self.autoslide.disable(&mut self.host),
            GestureKind::Release => self.host.after_render(CarouselTask::ResumeAutoslide),
            GestureKind::Drag | GestureKind::Swipe => {}
        }

        let origin = self.current_rendered_offset();
        match self.gestures.handle(event, || origin) {
            GestureAction::PassThrough => GestureResponse::PassThrough,
            GestureAction::Hold => {
                self.no_transition = true;
                GestureResponse::Observed
            }
            GestureAction::Preview(offset) => {
                self.no_transition = true;
                self.write_offset(offset, false);
                GestureResponse::Stifled
            }
            GestureAction::Commit(direction) => {
                self.queue_commit(direction);
                GestureResponse::Stifled
            }
            GestureAction::SnapBack => {
                self.no_transition = false;
                self.request_restyle();
                if event.direction.is_some_and(|d| d.is_horizontal()) {
                    GestureResponse::Stifled
                } else {
                    GestureResponse::Observed
                }
            }
        }
    }
}
