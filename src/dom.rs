use crate::constants::{OBJECT_CLASS, PLANK_ID};
use crate::core::{PlankFrame, Target, PLANK_LENGTH_PX};
use glam::DVec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow::anyhow!("#{} is not an HtmlElement", id))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] no #{} to wire", element_id);
    }
}

/// Attach a listener that may call `prevent_default` (touch listeners are
/// passive by default on some browsers).
pub fn add_active_listener<E>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// Current on-screen frame of the plank. The bounding rect of a rotated
/// element grows, but its center does not move, so only the center comes
/// from it; the length is the untransformed layout width.
pub fn plank_frame(plank: &web::HtmlElement) -> PlankFrame {
    let rect = plank.get_bounding_client_rect();
    let center = DVec2::new(
        rect.left() + rect.width() / 2.0,
        rect.top() + rect.height() / 2.0,
    );
    PlankFrame::new(center, plank_length(plank))
}

pub fn plank_length(plank: &web::HtmlElement) -> f64 {
    match plank.offset_width() {
        w if w > 0 => w as f64,
        _ => PLANK_LENGTH_PX,
    }
}

/// Classify an event target: a marker (or anything inside one) or the
/// bare plank.
pub fn event_target(ev: &web::Event) -> Target {
    let marker = ev
        .target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(&format!(".{}", OBJECT_CLASS)).ok().flatten());
    Target::from_data_id(marker.and_then(|m| m.get_attribute("data-id")).as_deref())
}

pub fn plank(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    element_by_id(document, PLANK_ID)
}

pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}
