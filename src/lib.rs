#![cfg(target_arch = "wasm32")]
use crate::constants::{OBJECTS_LAYER_ID, RESET_BUTTON_ID, SEESAW_ID};
use crate::core::{BalanceLatch, GestureController, Seesaw, SeesawConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod hud;
mod render;
mod storage;

struct App {
    wiring: events::Wiring,
    animation: frame::AnimationLoop,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn wire_window_event(event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("seesaw-web starting");

    let ready = dom::window_document()
        .map(|d| d.ready_state() != "loading")
        .unwrap_or(false);
    if ready {
        run_init();
    } else {
        wire_window_event("DOMContentLoaded", run_init);
    }
    Ok(())
}

fn run_init() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

/// Stop the animation loop and any pending long-press; the page's
/// listeners stay attached but no longer touch the simulation.
#[wasm_bindgen]
pub fn teardown() {
    if let Some(app) = APP.with(|a| a.borrow_mut().take()) {
        app.wiring.live.set(false);
        app.wiring.long_press.cancel();
        _ = app.wiring.gestures.borrow_mut().reset();
        app.animation.stop();
        log::info!("seesaw-web torn down");
    }
}

fn init() -> anyhow::Result<()> {
    if APP.with(|a| a.borrow().is_some()) {
        return Ok(());
    }
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let view = Rc::new(render::View {
        document: document.clone(),
        seesaw: dom::element_by_id(&document, SEESAW_ID)?,
        plank: dom::plank(&document)?,
        objects_layer: dom::element_by_id(&document, OBJECTS_LAYER_ID)?,
    });

    let config = SeesawConfig::default();
    let mut seesaw = Seesaw::from_entropy(config);
    seesaw.set_half_width(dom::plank_length(&view.plank) / 2.0);
    if let Some(snapshot) = storage::load() {
        seesaw.restore(snapshot);
    }
    let balance = BalanceLatch::primed(seesaw.is_balanced());
    let seesaw = Rc::new(RefCell::new(seesaw));

    let wiring = events::Wiring {
        seesaw: seesaw.clone(),
        gestures: Rc::new(RefCell::new(GestureController::new(config.gestures))),
        view: view.clone(),
        audio: Rc::new(audio::AudioCues::default()),
        long_press: Rc::new(events::LongPressTimer::default()),
        balance: Rc::new(RefCell::new(balance)),
        live: Rc::new(Cell::new(true)),
    };

    events::redraw(&wiring);
    events::wire_input_handlers(&wiring);

    let w = wiring.clone();
    dom::add_click_listener(&document, RESET_BUTTON_ID, move || events::reset(&w));
    let w = wiring.clone();
    wire_window_event("resize", move || events::on_resize(&w));
    let w = wiring.clone();
    wire_window_event("pagehide", move || {
        if w.live.get() {
            events::persist(&w);
        }
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(seesaw, view)));
    let animation = frame::start_loop(frame_ctx);

    log::info!(
        "[init] {} objects restored, next weight {} kg",
        wiring.seesaw.borrow().objects().len(),
        wiring.seesaw.borrow().store().next_weight()
    );
    APP.with(|a| *a.borrow_mut() = Some(App { wiring, animation }));
    Ok(())
}
