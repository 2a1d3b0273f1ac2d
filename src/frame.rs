use crate::dom;
use crate::events::SharedComposer;
use gloo::render::{request_animation_frame, AnimationFrame};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// Redraw loop driven by requestAnimationFrame.
///
/// Each tick advances the composer once and writes the resulting translation
/// to the element. The pending frame lives in a shared slot that the tick
/// refills; `stop` (or dropping the loop) empties it, which cancels the
/// pending request and releases the callback.
pub struct FrameLoop {
    pending: FrameSlot,
}

impl FrameLoop {
    pub fn start(composer: SharedComposer, element: web::HtmlElement) -> Self {
        let pending: FrameSlot = Rc::new(RefCell::new(None));
        dom::set_translation(&element, composer.borrow().compose());
        schedule(pending.clone(), composer, element);
        Self { pending }
    }

    pub fn stop(&mut self) {
        let frame = self.pending.borrow_mut().take();
        drop(frame);
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule(slot: FrameSlot, composer: SharedComposer, element: web::HtmlElement) {
    let slot_tick = slot.clone();
    let frame = request_animation_frame(move |_timestamp| {
        let offset = composer.borrow_mut().tick();
        dom::set_translation(&element, offset);
        // Stopped between request and delivery.
        if slot_tick.borrow().is_none() {
            return;
        }
        schedule(slot_tick, composer, element);
    });
    *slot.borrow_mut() = Some(frame);
}
