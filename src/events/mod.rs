pub mod pointer;
pub mod touch;

pub use pointer::wire_mouse_handlers;
pub use touch::wire_touch_handlers;

use crate::audio::{AudioCues, Cue};
use crate::constants::HAPTIC_PULSE_MS;
use crate::core::{plank_local_x, Action, BalanceLatch, GestureController, Input, Seesaw};
use crate::render::View;
use crate::{dom, hud, storage};
use glam::DVec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared handles every listener needs.
#[derive(Clone)]
pub struct Wiring {
    pub seesaw: Rc<RefCell<Seesaw>>,
    pub gestures: Rc<RefCell<GestureController>>,
    pub view: Rc<View>,
    pub audio: Rc<AudioCues>,
    pub long_press: Rc<LongPressTimer>,
    pub balance: Rc<RefCell<BalanceLatch>>,
    // Cleared on teardown; listeners outlive the view and must go quiet.
    pub live: Rc<Cell<bool>>,
}

impl Wiring {
    /// Geometry Mapper entry point for a client-space position.
    pub fn local_x(&self, client_x: f64, client_y: f64) -> f64 {
        let frame = dom::plank_frame(&self.view.plank);
        let angle = self.seesaw.borrow().current_angle();
        plank_local_x(&frame, DVec2::new(client_x, client_y), angle)
    }
}

pub fn wire_input_handlers(w: &Wiring) {
    wire_mouse_handlers(w);
    wire_touch_handlers(w);
}

/// Feed one input through the gesture controller and apply what it asks.
pub fn dispatch(w: &Wiring, input: Input) {
    if !w.live.get() {
        return;
    }
    let actions = w.gestures.borrow_mut().handle(input);
    for action in actions {
        apply(w, action);
    }
}

fn apply(w: &Wiring, action: Action) {
    match action {
        Action::Add { position } => {
            w.seesaw.borrow_mut().add(position, None);
            redraw(w);
            w.audio.play(Cue::Add);
            w.view.shake(w.seesaw.borrow().current_angle());
            persist(w);
        }
        Action::Move { id, position } => {
            let placed = {
                let mut s = w.seesaw.borrow_mut();
                s.move_object(id, position);
                s.store()
                    .get(id)
                    .map(|o| (o.position, s.store().half_width()))
            };
            if let Some((pos, half_width)) = placed {
                w.view.move_marker(id, pos, half_width);
                refresh_hud(w);
            }
        }
        Action::Remove { id } => {
            let removed = w.seesaw.borrow_mut().remove(id);
            if removed.is_some() {
                redraw(w);
                w.audio.play(Cue::Remove);
                persist(w);
            }
        }
        Action::DragStarted { id } => w.view.set_dragging(id, true),
        Action::Dropped { id } => {
            w.view.set_dragging(id, false);
            redraw(w);
            persist(w);
        }
        Action::StartLongPress { id } => w.long_press.schedule(w, id),
        Action::CancelLongPress => w.long_press.cancel(),
        Action::Haptic => {
            if let Some(win) = web::window() {
                _ = win.navigator().vibrate_with_duration(HAPTIC_PULSE_MS);
            }
        }
    }
}

/// Update HUD text and fire the balance cue on a false -> true edge.
pub fn refresh_hud(w: &Wiring) {
    let (readout, next_weight) = {
        let s = w.seesaw.borrow();
        (*s.readout(), s.store().next_weight())
    };
    hud::update(&w.view.document, &w.view.seesaw, &readout);
    hud::update_next_weight(&w.view.document, next_weight);
    if w.balance.borrow_mut().update(readout.balanced) {
        w.audio.play(Cue::Balance);
    }
}

pub fn redraw(w: &Wiring) {
    {
        let s = w.seesaw.borrow();
        w.view.render_objects(s.objects(), s.store().half_width());
    }
    refresh_hud(w);
}

pub fn persist(w: &Wiring) {
    storage::save(&w.seesaw.borrow().snapshot());
}

/// Reset button: drop any gesture in flight, then empty the plank.
pub fn reset(w: &Wiring) {
    if !w.live.get() {
        return;
    }
    if let Some(id) = w.gestures.borrow().dragging() {
        w.view.set_dragging(id, false);
    }
    let actions = w.gestures.borrow_mut().reset();
    for action in actions {
        apply(w, action);
    }
    w.seesaw.borrow_mut().clear();
    redraw(w);
    persist(w);
}

pub fn on_resize(w: &Wiring) {
    if !w.live.get() {
        return;
    }
    let half_width = dom::plank_length(&w.view.plank) / 2.0;
    let clamped = w.seesaw.borrow_mut().set_half_width(half_width);
    redraw(w);
    if clamped {
        persist(w);
    }
}

/// The single pending long-press timer of the active touch gesture.
///
/// The timer callback is owned here and dropped on the next `schedule` or
/// `cancel`, never from inside its own invocation.
#[derive(Default)]
pub struct LongPressTimer {
    pending: RefCell<Option<(i32, Closure<dyn FnMut()>)>>,
}

impl LongPressTimer {
    pub fn schedule(&self, w: &Wiring, id: u32) {
        self.cancel();
        let Some(window) = web::window() else { return };
        let delay = w.gestures.borrow().config().long_press_ms as i32;

        let fired = w.clone();
        let cb = Closure::once(move || {
            dispatch(&fired, Input::LongPressElapsed { id });
        });
        match window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), delay)
        {
            Ok(handle) => *self.pending.borrow_mut() = Some((handle, cb)),
            Err(e) => log::warn!("[touch] could not arm long-press: {:?}", e),
        }
    }

    pub fn cancel(&self) {
        let pending = self.pending.borrow_mut().take();
        if let Some((handle, _cb)) = pending {
            if let Some(window) = web::window() {
                window.clear_timeout_with_handle(handle);
            }
        }
    }
}
