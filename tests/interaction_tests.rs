// Host-side tests for the mouse and touch gesture state machine.
// The main crate is wasm-only, so the core modules come in via `common`.

mod common;

use common::core::interaction::*;

fn ctl() -> GestureController {
    GestureController::default()
}

fn acts(a: Actions) -> Vec<Action> {
    a.into_iter().collect()
}

#[test]
fn target_parses_marker_ids() {
    assert_eq!(Target::from_data_id(Some("12")), Target::Object(12));
    assert_eq!(Target::from_data_id(Some(" 3 ")), Target::Object(3));
    assert_eq!(Target::from_data_id(Some("x")), Target::Plank);
    assert_eq!(Target::from_data_id(Some("-1")), Target::Plank);
    assert_eq!(Target::from_data_id(None), Target::Plank);
}

// mouse

#[test]
fn click_on_empty_plank_adds() {
    let mut c = ctl();
    let out = c.handle(Input::Click { target: Target::Plank, x: -42.0 });
    assert_eq!(acts(out), vec![Action::Add { position: -42.0 }]);
    assert!(c.is_idle());
}

#[test]
fn click_on_a_marker_does_not_add() {
    let mut c = ctl();
    assert!(c.handle(Input::Click { target: Target::Object(1), x: 0.0 }).is_empty());
}

#[test]
fn primary_down_on_marker_drags_until_release() {
    let mut c = ctl();
    let out = c.handle(Input::PrimaryDown { target: Target::Object(4) });
    assert_eq!(acts(out), vec![Action::DragStarted { id: 4 }]);
    assert_eq!(
        c.state(),
        Gesture::Dragging { id: 4, source: PointerKind::Mouse }
    );
    assert_eq!(c.dragging(), Some(4));

    let out = c.handle(Input::PointerMove { x: 77.0 });
    assert_eq!(acts(out), vec![Action::Move { id: 4, position: 77.0 }]);
    let out = c.handle(Input::PointerMove { x: -10.0 });
    assert_eq!(acts(out), vec![Action::Move { id: 4, position: -10.0 }]);

    let out = c.handle(Input::PointerUp);
    assert_eq!(acts(out), vec![Action::Dropped { id: 4 }]);
    assert!(c.is_idle());
    assert_eq!(c.dragging(), None);
}

#[test]
fn moves_and_releases_without_a_drag_do_nothing() {
    let mut c = ctl();
    assert!(c.handle(Input::PointerMove { x: 5.0 }).is_empty());
    assert!(c.handle(Input::PointerUp).is_empty());
    assert!(c.handle(Input::PrimaryDown { target: Target::Plank }).is_empty());
    assert!(c.is_idle());
}

#[test]
fn context_menu_on_marker_removes() {
    let mut c = ctl();
    let out = c.handle(Input::ContextMenu { target: Target::Object(9) });
    assert_eq!(acts(out), vec![Action::Remove { id: 9 }]);
    assert!(c.handle(Input::ContextMenu { target: Target::Plank }).is_empty());
}

#[test]
fn no_new_gesture_while_dragging() {
    let mut c = ctl();
    c.handle(Input::PrimaryDown { target: Target::Object(1) });
    assert!(c.handle(Input::PrimaryDown { target: Target::Object(2) }).is_empty());
    assert!(c.handle(Input::ContextMenu { target: Target::Object(1) }).is_empty());
    assert!(c.handle(Input::TouchStart { target: Target::Plank, x: 0.0 }).is_empty());
    assert!(c.handle(Input::Click { target: Target::Plank, x: 0.0 }).is_empty());
    assert_eq!(c.dragging(), Some(1));
}

#[test]
fn click_after_a_moved_drag_is_swallowed_once() {
    let mut c = ctl();
    c.handle(Input::PrimaryDown { target: Target::Object(1) });
    c.handle(Input::PointerMove { x: 90.0 });
    c.handle(Input::PointerUp);

    assert!(c.handle(Input::Click { target: Target::Plank, x: 90.0 }).is_empty());
    let out = c.handle(Input::Click { target: Target::Plank, x: 10.0 });
    assert_eq!(acts(out), vec![Action::Add { position: 10.0 }]);
}

#[test]
fn next_press_clears_the_click_swallow() {
    let mut c = ctl();
    c.handle(Input::PrimaryDown { target: Target::Object(1) });
    c.handle(Input::PointerMove { x: 90.0 });
    c.handle(Input::PointerUp);
    // the drag ended off the plank, so no click arrived; a fresh press follows
    c.handle(Input::PrimaryDown { target: Target::Plank });
    let out = c.handle(Input::Click { target: Target::Plank, x: 10.0 });
    assert_eq!(acts(out), vec![Action::Add { position: 10.0 }]);
}

#[test]
fn stationary_press_on_marker_does_not_swallow_clicks() {
    let mut c = ctl();
    c.handle(Input::PrimaryDown { target: Target::Object(1) });
    c.handle(Input::PointerUp);
    c.handle(Input::Click { target: Target::Object(1), x: 0.0 });
    let out = c.handle(Input::Click { target: Target::Plank, x: 3.0 });
    assert_eq!(acts(out), vec![Action::Add { position: 3.0 }]);
}

// touch

#[test]
fn tap_on_empty_plank_adds() {
    let mut c = ctl();
    let out = c.handle(Input::TouchStart { target: Target::Plank, x: 33.0 });
    assert_eq!(acts(out), vec![Action::Add { position: 33.0 }]);
    assert!(c.is_idle());
    assert!(c.handle(Input::TouchEnd).is_empty());
}

#[test]
fn touch_on_marker_arms_long_press() {
    let mut c = ctl();
    let out = c.handle(Input::TouchStart { target: Target::Object(2), x: 40.0 });
    assert_eq!(acts(out), vec![Action::StartLongPress { id: 2 }]);
    assert_eq!(c.state(), Gesture::LongPressPending { id: 2, origin_x: 40.0 });
}

#[test]
fn moving_before_the_timer_turns_into_a_drag() {
    let mut c = ctl();
    c.handle(Input::TouchStart { target: Target::Object(2), x: 40.0 });
    let out = c.handle(Input::TouchMove { x: 60.0 });
    assert_eq!(
        acts(out),
        vec![
            Action::CancelLongPress,
            Action::DragStarted { id: 2 },
            Action::Move { id: 2, position: 60.0 },
        ]
    );
    assert_eq!(
        c.state(),
        Gesture::Dragging { id: 2, source: PointerKind::Touch }
    );

    let out = c.handle(Input::TouchMove { x: 70.0 });
    assert_eq!(acts(out), vec![Action::Move { id: 2, position: 70.0 }]);
    let out = c.handle(Input::TouchEnd);
    assert_eq!(acts(out), vec![Action::Dropped { id: 2 }]);
    assert!(c.is_idle());
}

#[test]
fn jitter_within_slop_keeps_long_press_armed() {
    let mut c = ctl();
    let slop = c.config().touch_slop_px;
    c.handle(Input::TouchStart { target: Target::Object(2), x: 40.0 });
    assert!(c.handle(Input::TouchMove { x: 40.0 + slop }).is_empty());
    assert!(c.handle(Input::TouchMove { x: 40.0 - slop / 2.0 }).is_empty());
    assert!(matches!(c.state(), Gesture::LongPressPending { id: 2, .. }));
}

#[test]
fn long_press_removes_and_swallows_the_rest_of_the_touch() {
    let mut c = ctl();
    c.handle(Input::TouchStart { target: Target::Object(5), x: 0.0 });
    let out = c.handle(Input::LongPressElapsed { id: 5 });
    assert_eq!(acts(out), vec![Action::Remove { id: 5 }, Action::Haptic]);
    assert_eq!(c.state(), Gesture::Consumed);

    assert!(c.handle(Input::TouchMove { x: 80.0 }).is_empty());
    assert!(c.handle(Input::TouchStart { target: Target::Plank, x: 1.0 }).is_empty());
    assert!(c.handle(Input::TouchEnd).is_empty(), "no drop after long-press");
    assert!(c.is_idle());
}

#[test]
fn touch_end_before_timer_cancels_it() {
    let mut c = ctl();
    c.handle(Input::TouchStart { target: Target::Object(5), x: 0.0 });
    let out = c.handle(Input::TouchEnd);
    assert_eq!(acts(out), vec![Action::CancelLongPress]);
    assert!(c.is_idle());
    // a late timer for the finished gesture is ignored
    assert!(c.handle(Input::LongPressElapsed { id: 5 }).is_empty());
}

#[test]
fn stale_timer_for_another_object_is_ignored() {
    let mut c = ctl();
    c.handle(Input::TouchStart { target: Target::Object(5), x: 0.0 });
    assert!(c.handle(Input::LongPressElapsed { id: 4 }).is_empty());
    assert!(matches!(c.state(), Gesture::LongPressPending { id: 5, .. }));
}

#[test]
fn timer_after_drag_started_is_ignored() {
    let mut c = ctl();
    c.handle(Input::TouchStart { target: Target::Object(5), x: 0.0 });
    c.handle(Input::TouchMove { x: 50.0 });
    assert!(c.handle(Input::LongPressElapsed { id: 5 }).is_empty());
    assert_eq!(c.dragging(), Some(5));
}

#[test]
fn mouse_release_does_not_end_a_touch_drag() {
    let mut c = ctl();
    c.handle(Input::TouchStart { target: Target::Object(3), x: 0.0 });
    c.handle(Input::TouchMove { x: 30.0 });
    assert!(c.handle(Input::PointerUp).is_empty());
    assert!(c.handle(Input::PointerMove { x: 99.0 }).is_empty());
    assert_eq!(c.dragging(), Some(3));
}

#[test]
fn touch_end_does_not_end_a_mouse_drag() {
    let mut c = ctl();
    c.handle(Input::PrimaryDown { target: Target::Object(3) });
    assert!(c.handle(Input::TouchEnd).is_empty());
    assert!(c.handle(Input::TouchMove { x: 99.0 }).is_empty());
    assert_eq!(c.dragging(), Some(3));
}

// reset

#[test]
fn reset_cancels_a_pending_long_press() {
    let mut c = ctl();
    c.handle(Input::TouchStart { target: Target::Object(1), x: 0.0 });
    assert_eq!(acts(c.reset()), vec![Action::CancelLongPress]);
    assert!(c.is_idle());
}

#[test]
fn reset_abandons_a_drag_silently() {
    let mut c = ctl();
    c.handle(Input::PrimaryDown { target: Target::Object(1) });
    assert!(c.reset().is_empty());
    assert!(c.is_idle());
    assert!(c.handle(Input::PointerUp).is_empty());
}
