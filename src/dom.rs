use crate::core::constants::DEFAULT_DEBUG_ELEMENT_ID;
use crate::core::MotionPolicy;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn html_element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not an HTML element: {:?}", id, e))
}

#[inline]
pub fn set_translation(el: &web::HtmlElement, offset: Vec2) {
    _ = el
        .style()
        .set_property("transform", &crate::core::transform_css(offset));
}

/// Per-mount settings read from the element's data attributes.
#[derive(Clone, Debug)]
pub struct MountConfig {
    pub policy: MotionPolicy,
    pub debug_element_id: String,
}

impl MountConfig {
    pub fn from_element(el: &web::Element) -> Self {
        let mut policy = match el.get_attribute("data-motion-policy") {
            Some(name) => MotionPolicy::from_name(&name).unwrap_or_else(|| {
                log::warn!("[mount] unknown motion policy {:?}, using calibrated", name);
                MotionPolicy::default()
            }),
            None => MotionPolicy::default(),
        };
        if el.has_attribute("data-debug") {
            policy.debug_overlay = true;
        }
        let debug_element_id = el
            .get_attribute("data-debug-target")
            .unwrap_or_else(|| DEFAULT_DEBUG_ELEMENT_ID.to_string());
        Self {
            policy,
            debug_element_id,
        }
    }
}
