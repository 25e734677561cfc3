use crate::constants::*;
use crate::core::{Readout, Tilt};
use crate::dom;
use web_sys as web;

#[inline]
fn tilt_class(tilt: Tilt) -> &'static str {
    match tilt {
        Tilt::Left => TILT_CLASSES[0],
        Tilt::Level => TILT_CLASSES[1],
        Tilt::Right => TILT_CLASSES[2],
    }
}

/// Push the latest physics readout into the HUD.
pub fn update(document: &web::Document, seesaw: &web::HtmlElement, readout: &Readout) {
    dom::set_text(
        document,
        LEFT_WEIGHT_ID,
        &format!("{:.1} kg", readout.left_weight),
    );
    dom::set_text(
        document,
        RIGHT_WEIGHT_ID,
        &format!("{:.1} kg", readout.right_weight),
    );
    dom::set_text(
        document,
        LEFT_TORQUE_ID,
        &readout.left_torque_display().to_string(),
    );
    dom::set_text(
        document,
        RIGHT_TORQUE_ID,
        &readout.right_torque_display().to_string(),
    );

    if let Some(el) = document.get_element_by_id(DIRECTION_INDICATOR_ID) {
        let cl = el.class_list();
        for c in TILT_CLASSES {
            _ = cl.remove_1(c);
        }
        _ = cl.add_1(tilt_class(readout.tilt()));
    }

    let cl = seesaw.class_list();
    _ = if readout.balanced {
        cl.add_1(BALANCED_CLASS)
    } else {
        cl.remove_1(BALANCED_CLASS)
    };
}

pub fn update_next_weight(document: &web::Document, next_weight: f64) {
    dom::set_text(document, NEXT_WEIGHT_ID, &format!("{} kg", next_weight));
}
