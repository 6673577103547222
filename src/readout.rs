use crate::constants::RATIO_READOUT_ID;
use crate::controls::format_ratio;
use lissajous_core::FramePhase;
use web_sys as web;

/// Refresh the `a/b` readout.
pub fn update_ratio(document: &web::Document, ratio: f64) {
    if let Some(el) = document.get_element_by_id(RATIO_READOUT_ID) {
        el.set_text_content(Some(&format_ratio(ratio)));
    }
}

/// Per-frame phase readout; the element is looked up once by the caller.
#[inline]
pub fn update_phase(el: &web::Element, phase: &FramePhase) {
    el.set_text_content(Some(&phase.readout()));
}
