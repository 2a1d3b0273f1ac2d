use super::SharedComposer;
use crate::input;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Document-level listeners that only live for the duration of one drag.
struct DragSession {
    _move: EventListener,
    _up: EventListener,
}

type SessionSlot = Rc<RefCell<Option<DragSession>>>;

/// Mouse drag wiring for one element. Dropping it detaches everything,
/// including an in-progress drag session.
pub struct MouseDrag {
    _down: EventListener,
    _session: SessionSlot,
}

pub fn wire_mouse_drag(
    el: &web::HtmlElement,
    document: &web::Document,
    composer: SharedComposer,
) -> MouseDrag {
    let session: SessionSlot = Rc::new(RefCell::new(None));
    let session_down = session.clone();
    let document = document.clone();

    let down = EventListener::new(el, "mousedown", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        composer
            .borrow_mut()
            .begin_drag(input::mouse_client_px(ev));
        log::debug!("[drag] mouse begin");
        // Replacing a stale session drops (and detaches) its listeners.
        let next = begin_session(&document, composer.clone(), Rc::downgrade(&session_down));
        *session_down.borrow_mut() = Some(next);
    });

    MouseDrag {
        _down: down,
        _session: session,
    }
}

fn begin_session(
    document: &web::Document,
    composer: SharedComposer,
    slot: std::rc::Weak<RefCell<Option<DragSession>>>,
) -> DragSession {
    let composer_move = composer.clone();
    let mv = EventListener::new(document, "mousemove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            composer_move
                .borrow_mut()
                .drag_to(input::mouse_client_px(ev));
        }
    });

    let up = EventListener::new(document, "mouseup", move |_ev| {
        composer.borrow_mut().end_mouse_drag();
        log::debug!("[drag] mouse end");
        if let Some(slot) = slot.upgrade() {
            let ended = slot.borrow_mut().take();
            drop(ended);
        }
    });

    DragSession { _move: mv, _up: up }
}
