//! GestureController: drag tracking and the commit/snap-back decision
//!
//! The controller only decides. The carousel applies the resulting
//! [`GestureAction`] (offset writes, timer changes, queued commits), which
//! keeps this state machine testable without a host.

use slidekit_model::{Direction, GestureEvent, GestureKind};

use crate::constants::gesture::{VERTICAL_LOCK_MAX_ANGLE, VERTICAL_LOCK_MIN_ANGLE};

/// Transient state for one touch -> release sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Offset on screen when the finger went down.
    pub origin: f32,
    /// Most recent sample seen in this session.
    pub last: GestureEvent,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Tracking(DragSession),
    /// Released over the threshold; a step is queued.
    Committing(Direction),
    /// Released under the threshold; the track is easing back.
    Settling,
}

/// What the carousel should do in response to a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureAction {
    /// Do not intercept; let the page scroll.
    PassThrough,
    /// Keep tracking without moving the track.
    Hold,
    /// Move the track, unanimated, to this offset.
    Preview(f32),
    /// Queue a step in this direction.
    Commit(Direction),
    /// Re-settle on the offset for the unchanged index.
    SnapBack,
}

#[derive(Debug, Clone)]
pub struct GestureController {
    phase: DragPhase,
    min_transition_distance: f32,
}

impl GestureController {
    pub fn new(min_transition_distance: f32) -> Self {
        Self {
            phase: DragPhase::Idle,
            min_transition_distance,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.phase {
            DragPhase::Tracking(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.phase, DragPhase::Tracking(_))
    }

    /// Feed one sample. `origin` is only consulted when a session starts.
    pub fn handle<F>(&mut self, event: &GestureEvent, origin: F) -> GestureAction
    where
        F: FnOnce() -> f32,
    {
        match event.kind {
            GestureKind::Touch => {
                self.phase = DragPhase::Tracking(DragSession {
                    origin: origin(),
                    last: *event,
                });
                GestureAction::Hold
            }
            GestureKind::Drag => self.on_drag(event, origin),
            GestureKind::Release => self.on_release(event),
            GestureKind::Swipe => match event.direction.and_then(|d| d.commit_direction()) {
                Some(direction) => GestureAction::Commit(direction),
                None => GestureAction::PassThrough,
            },
        }
    }

    /// End a live session without committing. Returns `true` if one was live.
    pub fn cancel(&mut self) -> bool {
        let was_tracking = self.is_tracking();
        self.phase = DragPhase::Idle;
        was_tracking
    }

    /// The track was restyled under a live finger. Later previews are
    /// measured from `origin`.
    pub fn rebase(&mut self, origin: f32) {
        if let DragPhase::Tracking(session) = &mut self.phase {
            session.origin = origin;
        }
    }

    /// The queued commit or snap-back has been applied.
    pub fn finish(&mut self) {
        if !self.is_tracking() {
            self.phase = DragPhase::Idle;
        }
    }

    fn on_drag<F>(&mut self, event: &GestureEvent, origin: F) -> GestureAction
    where
        F: FnOnce() -> f32,
    {
        let session_origin = match &mut self.phase {
            DragPhase::Tracking(session) => {
                session.last = *event;
                session.origin
            }
            _ => {
                let origin = origin();
                self.phase = DragPhase::Tracking(DragSession {
                    origin,
                    last: *event,
                });
                origin
            }
        };

        if !event.has_distance() {
            return GestureAction::Hold;
        }

        match event.direction {
            Some(direction) if direction.is_horizontal() => {
                if is_vertical_scroll_attempt(event.angle) {
                    log::trace!("drag at {}deg treated as page scroll", event.angle);
                    return GestureAction::PassThrough;
                }
                GestureAction::Preview(session_origin + event.delta_x)
            }
            Some(_) => GestureAction::PassThrough,
            None => GestureAction::Hold,
        }
    }

    fn on_release(&mut self, event: &GestureEvent) -> GestureAction {
        let over_threshold = event.distance > self.min_transition_distance;
        let commit = event
            .direction
            .and_then(|d| d.commit_direction())
            .filter(|_| over_threshold);

        match commit {
            Some(direction) => {
                self.phase = DragPhase::Committing(direction);
                GestureAction::Commit(direction)
            }
            None => {
                self.phase = DragPhase::Settling;
                GestureAction::SnapBack
            }
        }
    }
}

/// A horizontal drag whose angle is this steep is the user scrolling the
/// page, not the carousel.
pub fn is_vertical_scroll_attempt(angle: f32) -> bool {
    let angle = angle.abs();
    (VERTICAL_LOCK_MIN_ANGLE..=VERTICAL_LOCK_MAX_ANGLE).contains(&angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidekit_model::SwipeDirection;

    #[test]
    fn touch_opens_a_session_at_the_origin() {
        let mut controller = GestureController::new(60.0);
        let action = controller.handle(&GestureEvent::touch(), || -300.0);
        assert_eq!(action, GestureAction::Hold);
        assert_eq!(controller.session().map(|s| s.origin), Some(-300.0));
    }

    #[test]
    fn drag_previews_relative_to_origin() {
        let mut controller = GestureController::new(60.0);
        controller.handle(&GestureEvent::touch(), || -300.0);
        let action = controller.handle(&GestureEvent::drag(-25.0), || 0.0);
        assert_eq!(action, GestureAction::Preview(-325.0));
    }

    #[test]
    fn rebase_moves_the_preview_origin() {
        let mut controller = GestureController::new(60.0);
        controller.handle(&GestureEvent::touch(), || 0.0);
        controller.rebase(-100.0);
        let action = controller.handle(&GestureEvent::drag(-10.0), || 0.0);
        assert_eq!(action, GestureAction::Preview(-110.0));

        let mut idle = GestureController::new(60.0);
        idle.rebase(-100.0);
        assert_eq!(idle.phase(), DragPhase::Idle);
    }

    #[test]
    fn first_drag_without_touch_starts_a_session() {
        let mut controller = GestureController::new(60.0);
        let action = controller.handle(&GestureEvent::drag(10.0), || -100.0);
        assert_eq!(action, GestureAction::Preview(-90.0));
        assert!(controller.is_tracking());
    }

    #[test]
    fn steep_horizontal_drags_pass_through() {
        let mut controller = GestureController::new(60.0);
        controller.handle(&GestureEvent::touch(), || 0.0);
        for angle in [60.0, 90.0, -100.0, 120.0] {
            let event = GestureEvent::drag(-20.0).with_angle(angle);
            assert_eq!(
                controller.handle(&event, || 0.0),
                GestureAction::PassThrough,
                "angle {angle}"
            );
        }
        let shallow = GestureEvent::drag(-20.0).with_angle(121.0);
        assert_eq!(controller.handle(&shallow, || 0.0), GestureAction::Preview(-20.0));
    }

    #[test]
    fn vertical_drags_are_ignored() {
        let mut controller = GestureController::new(60.0);
        controller.handle(&GestureEvent::touch(), || 0.0);
        let up = GestureEvent::drag(-5.0)
            .with_direction(SwipeDirection::Up)
            .with_angle(-90.0);
        assert_eq!(controller.handle(&up, || 0.0), GestureAction::PassThrough);
    }

    #[test]
    fn zero_distance_drag_holds() {
        let mut controller = GestureController::new(60.0);
        controller.handle(&GestureEvent::touch(), || 0.0);
        assert_eq!(
            controller.handle(&GestureEvent::drag(0.0), || 0.0),
            GestureAction::Hold
        );
    }

    #[test]
    fn release_over_threshold_commits() {
        let mut controller = GestureController::new(60.0);
        controller.handle(&GestureEvent::touch(), || 0.0);
        let action = controller.handle(&GestureEvent::release(-61.0), || 0.0);
        assert_eq!(action, GestureAction::Commit(Direction::Next));
        assert_eq!(controller.phase(), DragPhase::Committing(Direction::Next));

        controller.handle(&GestureEvent::touch(), || 0.0);
        let action = controller.handle(&GestureEvent::release(80.0), || 0.0);
        assert_eq!(action, GestureAction::Commit(Direction::Prev));
    }

    #[test]
    fn release_at_threshold_snaps_back() {
        let mut controller = GestureController::new(60.0);
        controller.handle(&GestureEvent::touch(), || 0.0);
        let action = controller.handle(&GestureEvent::release(-60.0), || 0.0);
        assert_eq!(action, GestureAction::SnapBack);
        assert_eq!(controller.phase(), DragPhase::Settling);
        controller.finish();
        assert_eq!(controller.phase(), DragPhase::Idle);
    }

    #[test]
    fn swipe_commits_without_threshold() {
        let mut controller = GestureController::new(60.0);
        let left = GestureEvent::swipe(SwipeDirection::Left);
        assert_eq!(
            controller.handle(&left, || 0.0),
            GestureAction::Commit(Direction::Next)
        );
        let down = GestureEvent::swipe(SwipeDirection::Down);
        assert_eq!(controller.handle(&down, || 0.0), GestureAction::PassThrough);
    }

    #[test]
    fn cancel_reports_live_sessions() {
        let mut controller = GestureController::new(60.0);
        assert!(!controller.cancel());
        controller.handle(&GestureEvent::touch(), || 0.0);
        assert!(controller.cancel());
        assert_eq!(controller.phase(), DragPhase::Idle);
    }
}
