use super::SharedComposer;
use crate::core::constants::MOTION_DENIED_MESSAGE;
use crate::core::{Authorization, TapAction};
use crate::dom::MountConfig;
use crate::{input, overlay};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum MotionError {
    #[error("motion permission denied")]
    Denied,
    #[error("motion permission request failed: {0}")]
    Rejected(String),
    #[error("device orientation is not supported")]
    Unsupported,
}

fn js_error(e: JsValue) -> MotionError {
    MotionError::Rejected(format!("{:?}", e))
}

type SampleSlot = Rc<RefCell<Option<EventListener>>>;

/// Tap-to-authorize wiring plus the orientation listener once attached.
pub struct MotionWiring {
    _click: EventListener,
    _samples: SampleSlot,
}

#[derive(Clone)]
struct SampleTarget {
    window: web::Window,
    document: web::Document,
    composer: SharedComposer,
    debug_element_id: Option<String>,
}

pub fn wire_motion(
    window: &web::Window,
    document: &web::Document,
    composer: SharedComposer,
    config: &MountConfig,
) -> MotionWiring {
    let samples: SampleSlot = Rc::new(RefCell::new(None));
    let target = SampleTarget {
        window: window.clone(),
        document: document.clone(),
        composer: composer.clone(),
        debug_element_id: config
            .policy
            .debug_overlay
            .then(|| config.debug_element_id.clone()),
    };
    let slot = Rc::downgrade(&samples);

    let click = EventListener::new(window, "click", move |_ev| {
        let action = target.composer.borrow_mut().tap();
        match action {
            TapAction::RequestAuthorization => {
                let target = target.clone();
                let slot = slot.clone();
                spawn_local(async move {
                    authorize_and_attach(target, slot).await;
                });
            }
            TapAction::Activated => log::info!("[motion] tracking activated by tap"),
            TapAction::None => {}
        }
    });

    MotionWiring {
        _click: click,
        _samples: samples,
    }
}

async fn authorize_and_attach(target: SampleTarget, slot: Weak<RefCell<Option<EventListener>>>) {
    let result = request_authorization(&target.window).await;
    // Unmounted while the prompt was open.
    let Some(slot) = slot.upgrade() else {
        return;
    };
    let auth = match result {
        Ok(auth) => auth,
        Err(MotionError::Denied) => Authorization::Denied,
        Err(e @ MotionError::Unsupported) => {
            // Leaves the request pending so later taps do not ask again.
            log::warn!("[motion] {}", e);
            return;
        }
        Err(e) => {
            log::error!("[motion] {}", e);
            target.composer.borrow_mut().authorization_failed();
            return;
        }
    };

    let effect = target.composer.borrow_mut().authorize(auth);
    log::info!(
        "[motion] authorization {:?} active={}",
        auth,
        target.composer.borrow().is_motion_active()
    );
    if effect.alert_denied {
        log::warn!("[motion] {}", MotionError::Denied);
        gloo::dialogs::alert(MOTION_DENIED_MESSAGE);
    }
    if effect.attach_listener {
        *slot.borrow_mut() = Some(listen_for_samples(target));
    }
}

async fn request_authorization(window: &web::Window) -> Result<Authorization, MotionError> {
    let ctor = js_sys::Reflect::get(window, &JsValue::from_str("DeviceOrientationEvent"))
        .map_err(js_error)?;
    if ctor.is_undefined() {
        return Err(MotionError::Unsupported);
    }
    let request = js_sys::Reflect::get(&ctor, &JsValue::from_str("requestPermission"))
        .map_err(js_error)?;
    let Some(request) = request.dyn_ref::<js_sys::Function>() else {
        return Ok(Authorization::Ungated);
    };
    let promise: js_sys::Promise = request
        .call0(&ctor)
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    let response = JsFuture::from(promise).await.map_err(js_error)?;
    match response.as_string().as_deref() {
        Some("granted") => Ok(Authorization::Granted),
        _ => Err(MotionError::Denied),
    }
}

fn listen_for_samples(target: SampleTarget) -> EventListener {
    let window = target.window.clone();
    EventListener::new(&window, "deviceorientation", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::DeviceOrientationEvent>() else {
            return;
        };
        let sample = input::orientation_sample(ev);
        if let Some(id) = &target.debug_element_id {
            overlay::update_readout(&target.document, id, &sample);
        }
        let outcome = target.composer.borrow_mut().orientation(sample);
        log::trace!("[motion] {:?} -> {:?}", sample, outcome);
    })
}
