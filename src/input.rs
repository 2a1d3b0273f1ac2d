use crate::core::OrientationSample;
use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn mouse_client_px(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Position of the first active touch, if any.
#[inline]
pub fn touch_client_px(ev: &web::TouchEvent) -> Option<Vec2> {
    let t = ev.touches().get(0)?;
    Some(Vec2::new(t.client_x() as f32, t.client_y() as f32))
}

// ---------------- Sensor helpers ----------------
#[inline]
pub fn orientation_sample(ev: &web::DeviceOrientationEvent) -> OrientationSample {
    OrientationSample {
        gamma: ev.gamma().map(|g| g as f32),
        beta: ev.beta().map(|b| b as f32),
    }
}
