use crate::constants::{DRAGGING_CLASS, OBJECT_CLASS, SHAKE_CLASS, SHAKE_MS};
use crate::core::PlacedObject;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM handles the renderer writes to.
pub struct View {
    pub document: web::Document,
    pub seesaw: web::HtmlElement,
    pub plank: web::HtmlElement,
    pub objects_layer: web::HtmlElement,
}

#[inline]
fn marker_left(half_width: f64, position: f64) -> String {
    format!("{}px", half_width + position)
}

fn marker_selector(id: u32) -> String {
    format!(".{}[data-id=\"{}\"]", OBJECT_CLASS, id)
}

impl View {
    /// Rebuild every marker from scratch (add/remove/reset/restore).
    pub fn render_objects(&self, objects: &[PlacedObject], half_width: f64) {
        self.objects_layer.set_inner_html("");
        for o in objects {
            let el = match self.document.create_element("div") {
                Ok(el) => el,
                Err(e) => {
                    log::warn!("[render] create marker failed: {:?}", e);
                    continue;
                }
            };
            el.set_class_name(OBJECT_CLASS);
            _ = el.set_attribute("data-id", &o.id.to_string());
            _ = el.set_attribute(
                "title",
                &format!("{} kg (right-click or long-press to remove)", o.weight),
            );
            el.set_text_content(Some(&o.weight.to_string()));
            if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
                _ = h.style().set_property("left", &marker_left(half_width, o.position));
            }
            _ = self.objects_layer.append_child(&el);
        }
    }

    fn marker(&self, id: u32) -> Option<web::HtmlElement> {
        self.objects_layer
            .query_selector(&marker_selector(id))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    }

    /// Cheap per-move update of a single marker.
    pub fn move_marker(&self, id: u32, position: f64, half_width: f64) {
        if let Some(el) = self.marker(id) {
            _ = el.style().set_property("left", &marker_left(half_width, position));
        }
    }

    pub fn set_dragging(&self, id: u32, dragging: bool) {
        if let Some(el) = self.marker(id) {
            let cl = el.class_list();
            _ = if dragging {
                cl.add_1(DRAGGING_CLASS)
            } else {
                cl.remove_1(DRAGGING_CLASS)
            };
        }
        if let Some(body) = self.document.body() {
            _ = body
                .style()
                .set_property("cursor", if dragging { "grabbing" } else { "" });
        }
    }

    pub fn set_plank_angle(&self, angle_deg: f64) {
        _ = self
            .plank
            .style()
            .set_property("transform", &format!("rotate({}deg)", angle_deg));
    }

    /// Short wobble after an add; the CSS animation starts from the tilt on
    /// screen via `--current-angle`.
    pub fn shake(&self, angle_deg: f64) {
        let style = self.plank.style();
        _ = style.set_property("--current-angle", &format!("{}deg", angle_deg));
        _ = self.plank.class_list().add_1(SHAKE_CLASS);

        let plank = self.plank.clone();
        // freed by the JS side once it has run
        let done = Closure::once_into_js(move || {
            _ = plank.class_list().remove_1(SHAKE_CLASS);
        });
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                done.unchecked_ref(),
                SHAKE_MS,
            );
        }
    }
}
