pub mod orientation;
pub mod pointer;
pub mod touch;

use crate::core::Composer;
use std::cell::RefCell;
use std::rc::Rc;

/// Composer state shared by every handler of one mounted element.
pub type SharedComposer = Rc<RefCell<Composer>>;

pub use orientation::{wire_motion, MotionError, MotionWiring};
pub use pointer::{wire_mouse_drag, MouseDrag};
pub use touch::{wire_touch_drag, TouchDrag};
