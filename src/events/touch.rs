use super::SharedComposer;
use crate::input;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Single-finger drag on the element itself.
pub struct TouchDrag {
    _start: EventListener,
    _move: EventListener,
    _end: EventListener,
    _cancel: EventListener,
}

pub fn wire_touch_drag(el: &web::HtmlElement, composer: SharedComposer) -> TouchDrag {
    let composer_start = composer.clone();
    let start = EventListener::new(el, "touchstart", move |ev| {
        let Some(pos) = ev.dyn_ref::<web::TouchEvent>().and_then(input::touch_client_px) else {
            return;
        };
        composer_start.borrow_mut().begin_drag(pos);
        log::debug!("[drag] touch begin");
    });

    let composer_move = composer.clone();
    let mv = EventListener::new(el, "touchmove", move |ev| {
        if let Some(pos) = ev.dyn_ref::<web::TouchEvent>().and_then(input::touch_client_px) {
            composer_move.borrow_mut().drag_to(pos);
        }
    });

    let composer_end = composer.clone();
    let end = EventListener::new(el, "touchend", move |_ev| {
        composer_end.borrow_mut().end_drag();
        log::debug!("[drag] touch end");
    });

    // touchcancel arrives instead of touchend
    let cancel = EventListener::new(el, "touchcancel", move |_ev| {
        composer.borrow_mut().end_drag();
    });

    TouchDrag {
        _start: start,
        _move: mv,
        _end: end,
        _cancel: cancel,
    }
}
