mod common;

use common::{finite, last_write, mounted};
use slidekit_core::gesture::DragPhase;
use slidekit_core::{
    CarouselOptions, Direction, GestureEvent, GestureResponse, GestureSink, SwipeDirection,
};

#[test]
fn drag_previews_without_animation() {
    let mut carousel = mounted(finite(), 5, 100.0);
    assert_eq!(
        carousel.on_gesture(&GestureEvent::touch()),
        GestureResponse::Observed
    );
    let response = carousel.on_gesture(&GestureEvent::drag(-30.0));
    assert!(response.prevents_default());
    assert_eq!(last_write(&carousel), Some((-30.0, false)));
    assert!(carousel.no_transition());
    assert!(matches!(carousel.drag_phase(), DragPhase::Tracking(_)));
}

#[test]
fn drag_starts_from_the_offset_on_screen() {
    let mut carousel = mounted(finite(), 5, 100.0);
    carousel.jump_to(2);
    carousel.render_frame();

    carousel.on_gesture(&GestureEvent::touch());
    carousel.on_gesture(&GestureEvent::drag(25.0));
    assert_eq!(last_write(&carousel), Some((-175.0, false)));
}

#[test]
fn restyle_under_a_held_finger_moves_the_drag_origin() {
    let mut carousel = mounted(finite(), 5, 100.0);
    carousel.slide_next();
    carousel.on_gesture(&GestureEvent::touch());
    carousel.render_frame();
    assert_eq!(last_write(&carousel), Some((-100.0, false)));

    carousel.on_gesture(&GestureEvent::drag(-10.0));
    assert_eq!(last_write(&carousel), Some((-110.0, false)));
    assert!(matches!(carousel.drag_phase(), DragPhase::Tracking(_)));
}

#[test]
fn release_past_threshold_commits_one_step() {
    let mut carousel = mounted(finite(), 5, 100.0);
    carousel.on_gesture(&GestureEvent::touch());
    carousel.on_gesture(&GestureEvent::drag(-70.0));
    let response = carousel.on_gesture(&GestureEvent::release(-70.0));
    assert_eq!(response, GestureResponse::Stifled);
    assert_eq!(carousel.drag_phase(), DragPhase::Committing(Direction::Next));

    carousel.render_frame();
    assert_eq!(carousel.index(), 1);
    assert_eq!(last_write(&carousel), Some((-100.0, true)));
    assert_eq!(carousel.drag_phase(), DragPhase::Idle);
}

#[test]
fn rightward_release_steps_back() {
    let mut carousel = mounted(finite(), 5, 100.0);
    carousel.jump_to(3);
    carousel.render_frame();

    carousel.on_gesture(&GestureEvent::touch());
    carousel.on_gesture(&GestureEvent::drag(90.0));
    carousel.on_gesture(&GestureEvent::release(90.0));
    carousel.render_frame();
    assert_eq!(carousel.index(), 2);
}

#[test]
fn swipe_and_release_in_one_gesture_advance_once() {
    let mut carousel = mounted(finite(), 5, 100.0);
    carousel.on_gesture(&GestureEvent::touch());
    carousel.on_gesture(&GestureEvent::drag(-90.0));
    let swipe = carousel.on_gesture(&GestureEvent::swipe(SwipeDirection::Left));
    assert_eq!(swipe, GestureResponse::Stifled);
    carousel.on_gesture(&GestureEvent::release(-90.0));

    carousel.render_frame();
    assert_eq!(carousel.index(), 1);
}

#[test]
fn short_release_snaps_back() {
    let mut carousel = mounted(finite(), 5, 100.0);
    carousel.on_gesture(&GestureEvent::touch());
    carousel.on_gesture(&GestureEvent::drag(-40.0));
    let response = carousel.on_gesture(&GestureEvent::release(-40.0));
    assert_eq!(response, GestureResponse::Stifled);
    assert_eq!(carousel.drag_phase(), DragPhase::Settling);

    carousel.render_frame();
    assert_eq!(carousel.index(), 0);
    assert_eq!(last_write(&carousel), Some((0.0, true)));
    assert_eq!(carousel.drag_phase(), DragPhase::Idle);
}

#[test]
fn release_at_exactly_the_threshold_does_not_commit() {
    let mut carousel = mounted(finite(), 5, 100.0);
    carousel.on_gesture(&GestureEvent::touch());
    carousel.on_gesture(&GestureEvent::release(-60.0));
    carousel.render_frame();
    assert_eq!(carousel.index(), 0);
}

#[test]
fn steep_drags_let_the_page_scroll() {
    let mut carousel = mounted(finite(), 5, 100.0);
    carousel.on_gesture(&GestureEvent::touch());
    let response = carousel.on_gesture(&GestureEvent::drag(-20.0).with_angle(90.0));
    assert_eq!(response, GestureResponse::PassThrough);
    assert!(carousel.host().offsets().is_empty());

    let up = GestureEvent::swipe(SwipeDirection::Up);
    assert_eq!(carousel.on_gesture(&up), GestureResponse::PassThrough);
}

#[test]
fn swipe_at_a_finite_boundary_settles_in_place() {
    let mut carousel = mounted(finite(), 5, 100.0);
    carousel.jump_to(4);
    carousel.render_frame();

    carousel.on_gesture(&GestureEvent::swipe(SwipeDirection::Left));
    carousel.render_frame();
    assert_eq!(carousel.index(), 4);
    assert_eq!(last_write(&carousel), Some((-400.0, true)));
}

#[test]
fn gestures_are_ignored_when_not_swipeable() {
    let options = CarouselOptions {
        is_swipeable: Some(false),
        ..finite()
    };
    let mut carousel = mounted(options, 5, 100.0);
    assert!(!carousel.accepts_gestures());
    let response = carousel.dispatch_gesture(&GestureEvent::drag(-100.0));
    assert_eq!(response, GestureResponse::PassThrough);
    assert!(carousel.host().offsets().is_empty());

    let single = mounted(finite(), 1, 100.0);
    assert!(!single.accepts_gestures());
}

#[test]
fn freezing_mid_drag_snaps_back() {
    let mut carousel = mounted(finite(), 5, 100.0);
    carousel.on_gesture(&GestureEvent::touch());
    carousel.on_gesture(&GestureEvent::drag(-50.0));

    carousel.set_frozen(true);
    assert_eq!(carousel.drag_phase(), DragPhase::Idle);
    carousel.render_frame();
    assert_eq!(last_write(&carousel), Some((0.0, true)));

    let response = carousel.on_gesture(&GestureEvent::release(-120.0));
    assert_eq!(response, GestureResponse::PassThrough);
    carousel.render_frame();
    assert_eq!(carousel.index(), 0);
}

#[test]
fn commit_refused_by_a_freeze_snaps_back() {
    let mut carousel = mounted(finite(), 5, 100.0);
    carousel.on_gesture(&GestureEvent::touch());
    carousel.on_gesture(&GestureEvent::drag(-80.0));
    carousel.on_gesture(&GestureEvent::release(-80.0));

    carousel.set_frozen(true);
    carousel.render_frame();
    assert_eq!(carousel.index(), 0);
    assert_eq!(last_write(&carousel), Some((0.0, true)));
}
