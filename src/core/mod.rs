//! Position composer and input tracker for the floating element.
//!
//! Everything here is platform-free: the web layer feeds pointer positions,
//! orientation samples and authorization results in, and reads back the
//! composed offset once per animation frame.

pub mod composer;
pub mod constants;

pub use composer::*;
