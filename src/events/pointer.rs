use super::{dispatch, Wiring};
use crate::core::{Input, Target};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_mouse_handlers(w: &Wiring) {
    wire_click(w);
    wire_mousedown(w);
    wire_contextmenu(w);
    wire_mousemove(w);
    wire_mouseup(w);
}

fn wire_click(w: &Wiring) {
    let w = w.clone();
    let plank = w.view.plank.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let target = dom::event_target(&ev);
        let x = w.local_x(ev.client_x() as f64, ev.client_y() as f64);
        dispatch(&w, Input::Click { target, x });
    }) as Box<dyn FnMut(_)>);
    _ = plank.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mousedown(w: &Wiring) {
    let w = w.clone();
    let plank = w.view.plank.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        let target = dom::event_target(&ev);
        if matches!(target, Target::Object(_)) {
            // keep the browser from starting a text selection mid-drag
            ev.prevent_default();
        }
        dispatch(&w, Input::PrimaryDown { target });
    }) as Box<dyn FnMut(_)>);
    _ = plank.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_contextmenu(w: &Wiring) {
    let w = w.clone();
    let plank = w.view.plank.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        ev.prevent_default();
        let target = dom::event_target(&ev);
        dispatch(&w, Input::ContextMenu { target });
    }) as Box<dyn FnMut(_)>);
    _ = plank.add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mousemove(w: &Wiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if w.gestures.borrow().dragging().is_none() {
            return;
        }
        let x = w.local_x(ev.client_x() as f64, ev.client_y() as f64);
        dispatch(&w, Input::PointerMove { x });
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_mouseup(w: &Wiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        dispatch(&w, Input::PointerUp);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
