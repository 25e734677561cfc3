use super::{dispatch, Wiring};
use crate::core::Input;
use crate::dom;
use web_sys as web;

/// First changed touch of a touch event, in client coordinates.
fn changed_touch_client(ev: &web::TouchEvent) -> Option<(f64, f64)> {
    ev.changed_touches()
        .get(0)
        .map(|t| (t.client_x() as f64, t.client_y() as f64))
}

pub fn wire_touch_handlers(w: &Wiring) {
    wire_touchstart(w);
    wire_touchmove(w);
    wire_touchend(w, "touchend");
    wire_touchend(w, "touchcancel");
}

fn wire_touchstart(w: &Wiring) {
    let w2 = w.clone();
    dom::add_active_listener(&w.view.plank, "touchstart", move |ev: web::TouchEvent| {
        // Suppresses the emulated mouse events and click, which would add
        // a second object for the same tap.
        ev.prevent_default();
        let Some((cx, cy)) = changed_touch_client(&ev) else {
            return;
        };
        let target = dom::event_target(&ev);
        let x = w2.local_x(cx, cy);
        dispatch(&w2, Input::TouchStart { target, x });
    });
}

fn wire_touchmove(w: &Wiring) {
    let Some(wnd) = web::window() else { return };
    let w2 = w.clone();
    dom::add_active_listener(&wnd, "touchmove", move |ev: web::TouchEvent| {
        if w2.gestures.borrow().is_idle() {
            return;
        }
        // the page must not scroll under an active gesture
        ev.prevent_default();
        if let Some((cx, cy)) = changed_touch_client(&ev) {
            let x = w2.local_x(cx, cy);
            dispatch(&w2, Input::TouchMove { x });
        }
    });
}

fn wire_touchend(w: &Wiring, event: &str) {
    let Some(wnd) = web::window() else { return };
    let w2 = w.clone();
    dom::add_active_listener(&wnd, event, move |ev: web::TouchEvent| {
        // Only the last finger lifting ends the gesture.
        if ev.touches().length() > 0 {
            return;
        }
        dispatch(&w2, Input::TouchEnd);
    });
}
