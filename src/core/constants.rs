// Shared tuning constants for the floating element.

// Idle bounce
pub const BOUNCE_STEP: f32 = 0.3; // vertical px advanced per frame
pub const BOUNCE_AMPLITUDE: f32 = 10.0; // direction flips once |bounce| exceeds this

// Clamp bounds for drag and tilt offsets (px)
pub const MAX_OFFSET_CALIBRATED: f32 = 80.0;
pub const MAX_OFFSET_COMPACT: f32 = 60.0;

// Degrees of tilt -> px of offset, as [gamma, beta]
pub const TILT_SCALE_GENTLE: [f32; 2] = [1.5, 0.8];
pub const TILT_SCALE_RESPONSIVE: [f32; 2] = [2.2, 1.2];

// DOM wiring defaults
pub const DEFAULT_ELEMENT_ID: &str = "floatingObject";
pub const DEFAULT_DEBUG_ELEMENT_ID: &str = "debug";
pub const MOTION_DENIED_MESSAGE: &str = "Motion permission denied";
