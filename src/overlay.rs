use crate::core::OrientationSample;
use web_sys as web;

/// Raw orientation readout shown when the debug overlay is enabled.
pub fn format_readout(sample: &OrientationSample) -> String {
    let show = |v: Option<f32>| match v {
        Some(v) => format!("{:.1}", v),
        None => "n/a".to_string(),
    };
    format!("Gamma: {} | Beta: {}", show(sample.gamma), show(sample.beta))
}

#[inline]
pub fn update_readout(document: &web::Document, element_id: &str, sample: &OrientationSample) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(&format_readout(sample)));
    }
}

#[inline]
pub fn clear_readout(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(None);
    }
}
