use crate::core::Seesaw;
use crate::render::View;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame state for the angle animator.
pub struct FrameContext {
    pub seesaw: Rc<RefCell<Seesaw>>,
    pub view: Rc<View>,
    last_angle: Option<f64>,
}

impl FrameContext {
    pub fn new(seesaw: Rc<RefCell<Seesaw>>, view: Rc<View>) -> Self {
        Self {
            seesaw,
            view,
            last_angle: None,
        }
    }

    pub fn frame(&mut self) {
        let angle = self.seesaw.borrow_mut().tick();
        // settled planks cost no style writes
        if self.last_angle != Some(angle) {
            self.view.set_plank_angle(angle);
            self.last_angle = Some(angle);
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running requestAnimationFrame loop.
pub struct AnimationLoop {
    tick: Tick,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl AnimationLoop {
    /// Cancel the pending frame and release the loop closure.
    pub fn stop(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &Tick, raf_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else { return };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => raf_id.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> AnimationLoop {
    let tick: Tick = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_clone.set(None);
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &raf_clone);
    }) as Box<dyn FnMut()>));

    request_frame(&tick, &raf_id);
    AnimationLoop { tick, raf_id }
}
