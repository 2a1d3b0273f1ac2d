#![cfg(target_arch = "wasm32")]
use crate::core::constants::DEFAULT_ELEMENT_ID;
use crate::core::Composer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;

/// Everything one mounted element owns. Dropping it stops the redraw loop
/// and detaches every listener.
struct MountedView {
    element_id: String,
    document: web::Document,
    debug_element_id: Option<String>,
    _frame: frame::FrameLoop,
    _mouse: events::MouseDrag,
    _touch: events::TouchDrag,
    _motion: events::MotionWiring,
}

impl Drop for MountedView {
    fn drop(&mut self) {
        if let Some(id) = &self.debug_element_id {
            overlay::clear_readout(&self.document, id);
        }
        log::info!("[mount] unmounted #{}", self.element_id);
    }
}

thread_local! {
    static VIEW: RefCell<Option<MountedView>> = const { RefCell::new(None) };
}

fn mount_view(element_id: &str) -> anyhow::Result<MountedView> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let element = dom::html_element_by_id(&document, element_id)?;
    let config = dom::MountConfig::from_element(&element);
    log::info!("[mount] #{} policy={:?}", element_id, config.policy);

    let composer = Rc::new(RefCell::new(Composer::new(config.policy)));
    let mouse = events::wire_mouse_drag(&element, &document, composer.clone());
    let touch = events::wire_touch_drag(&element, composer.clone());
    let motion = events::wire_motion(&window, &document, composer.clone(), &config);
    let frame = frame::FrameLoop::start(composer, element);

    Ok(MountedView {
        element_id: element_id.to_string(),
        document,
        debug_element_id: config
            .policy
            .debug_overlay
            .then_some(config.debug_element_id),
        _frame: frame,
        _mouse: mouse,
        _touch: touch,
        _motion: motion,
    })
}

/// Mount the floating behavior on `element_id`, replacing any mounted view.
#[wasm_bindgen]
pub fn mount(element_id: &str) -> Result<(), JsValue> {
    unmount();
    let view = mount_view(element_id).map_err(|e| JsValue::from_str(&format!("{:#}", e)))?;
    VIEW.with(|v| *v.borrow_mut() = Some(view));
    Ok(())
}

/// Tear down the mounted view. Returns whether one was mounted.
#[wasm_bindgen]
pub fn unmount() -> bool {
    let view = VIEW.with(|v| v.borrow_mut().take());
    view.is_some()
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("drift-web starting");

    if let Err(e) = mount(DEFAULT_ELEMENT_ID) {
        log::error!("mount error: {:?}", e);
    }
    Ok(())
}
