use crate::core::constants::*;
use glam::Vec2;

/// Which of the supported motion behaviors is in force for a mounted element.
///
/// The presets differ on tap activation, drag/motion interplay, baseline
/// calibration, tilt scale and clamp range. Exactly one applies per mount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionPolicy {
    /// Clamp bound for drag and tilt offsets, in px.
    pub max_offset: f32,
    /// Degrees -> px multipliers as `[gamma, beta]`.
    pub tilt_scale: [f32; 2],
    /// Zero orientation against the first sample received.
    pub baseline_calibration: bool,
    /// Starting a drag switches motion tracking off.
    pub drag_deactivates_motion: bool,
    /// Idle bounce pauses while motion tracking is active.
    pub bounce_yields_to_motion: bool,
    /// Samples are dropped until motion tracking is active.
    pub samples_require_active: bool,
    /// A granted authorization activates tracking immediately; otherwise a
    /// later tap does.
    pub activate_on_grant: bool,
    /// Platforms without a permission gate mark tracking active on attach.
    pub activate_when_ungated: bool,
    /// Render raw gamma/beta into the debug overlay.
    pub debug_overlay: bool,
}

impl MotionPolicy {
    /// Auto-activation on grant, baseline-zeroed samples, 80px range.
    pub const fn calibrated() -> Self {
        Self {
            max_offset: MAX_OFFSET_CALIBRATED,
            tilt_scale: TILT_SCALE_GENTLE,
            baseline_calibration: true,
            drag_deactivates_motion: false,
            bounce_yields_to_motion: true,
            samples_require_active: true,
            activate_on_grant: true,
            activate_when_ungated: true,
            debug_overlay: false,
        }
    }

    /// Tracking engages on a tap after access is granted; dragging turns it off.
    pub const fn tap() -> Self {
        Self {
            max_offset: MAX_OFFSET_COMPACT,
            tilt_scale: TILT_SCALE_GENTLE,
            baseline_calibration: false,
            drag_deactivates_motion: true,
            bounce_yields_to_motion: true,
            samples_require_active: true,
            activate_on_grant: false,
            activate_when_ungated: true,
            debug_overlay: false,
        }
    }

    /// Stronger tilt, raw samples, bounce keeps running under tilt.
    pub const fn responsive() -> Self {
        Self {
            max_offset: MAX_OFFSET_COMPACT,
            tilt_scale: TILT_SCALE_RESPONSIVE,
            baseline_calibration: false,
            drag_deactivates_motion: true,
            bounce_yields_to_motion: false,
            samples_require_active: false,
            activate_on_grant: true,
            activate_when_ungated: false,
            debug_overlay: true,
        }
    }

    /// Look up a preset by the name used in `data-motion-policy`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "calibrated" | "" => Some(Self::calibrated()),
            "tap" => Some(Self::tap()),
            "responsive" => Some(Self::responsive()),
            _ => None,
        }
    }
}

impl Default for MotionPolicy {
    fn default() -> Self {
        Self::calibrated()
    }
}

/// One device-orientation reading in degrees. Either axis may be absent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrientationSample {
    pub gamma: Option<f32>,
    pub beta: Option<f32>,
}

impl OrientationSample {
    pub fn new(gamma: f32, beta: f32) -> Self {
        Self {
            gamma: Some(gamma),
            beta: Some(beta),
        }
    }

    /// Readings with missing axes treated as level.
    #[inline]
    pub fn angles(&self) -> Vec2 {
        Vec2::new(self.gamma.unwrap_or(0.0), self.beta.unwrap_or(0.0))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SampleOutcome {
    /// Dropped because of a drag or inactive tracking.
    Ignored,
    /// First sample captured as the zero point; tilt reset to zero.
    Calibrated,
    /// Tilt updated to the contained offset.
    Applied(Vec2),
}

/// Result of a platform authorization call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Authorization {
    Granted,
    Denied,
    /// The platform exposes orientation without a permission gate.
    Ungated,
}

/// What the web layer must do after an authorization result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthorizationEffect {
    pub attach_listener: bool,
    pub alert_denied: bool,
}

/// What a user tap asks of the web layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapAction {
    RequestAuthorization,
    /// Tracking switched on without a new request.
    Activated,
    None,
}

#[derive(Clone, Debug)]
pub struct Composer {
    policy: MotionPolicy,
    drag_offset: Vec2,
    tilt_offset: Vec2,
    bounce_offset_y: f32,
    bounce_direction: f32,
    drag_anchor: Vec2,
    dragging: bool,
    motion_active: bool,
    baseline: Option<Vec2>,
    listening: bool,
    authorization_pending: bool,
    drag_moved: bool,
    // Set when a mouse drag that moved ends; the click that follows is not a tap.
    drag_click_pending: bool,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new(MotionPolicy::default())
    }
}

impl Composer {
    pub fn new(policy: MotionPolicy) -> Self {
        Self {
            policy,
            drag_offset: Vec2::ZERO,
            tilt_offset: Vec2::ZERO,
            bounce_offset_y: 0.0,
            bounce_direction: 1.0,
            drag_anchor: Vec2::ZERO,
            dragging: false,
            motion_active: false,
            baseline: None,
            listening: false,
            authorization_pending: false,
            drag_moved: false,
            drag_click_pending: false,
        }
    }

    pub fn policy(&self) -> &MotionPolicy {
        &self.policy
    }
    pub fn drag_offset(&self) -> Vec2 {
        self.drag_offset
    }
    pub fn tilt_offset(&self) -> Vec2 {
        self.tilt_offset
    }
    pub fn bounce_offset(&self) -> f32 {
        self.bounce_offset_y
    }
    pub fn bounce_direction(&self) -> f32 {
        self.bounce_direction
    }
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
    pub fn is_motion_active(&self) -> bool {
        self.motion_active
    }
    pub fn is_listening(&self) -> bool {
        self.listening
    }
    pub fn baseline(&self) -> Option<Vec2> {
        self.baseline
    }

    #[inline]
    fn clamp_offset(&self, v: Vec2) -> Vec2 {
        let m = self.policy.max_offset;
        v.clamp(Vec2::splat(-m), Vec2::splat(m))
    }

    fn bounce_paused(&self) -> bool {
        self.dragging || (self.policy.bounce_yields_to_motion && self.motion_active)
    }

    /// Advance the idle bounce by one frame. Returns whether it moved.
    pub fn advance_bounce(&mut self) -> bool {
        if self.bounce_paused() {
            return false;
        }
        self.bounce_offset_y += BOUNCE_STEP * self.bounce_direction;
        if self.bounce_offset_y.abs() > BOUNCE_AMPLITUDE {
            self.bounce_direction = -self.bounce_direction;
        }
        true
    }

    /// Sum of drag, tilt and bounce offsets.
    #[inline]
    pub fn compose(&self) -> Vec2 {
        self.drag_offset + self.tilt_offset + Vec2::new(0.0, self.bounce_offset_y)
    }

    /// One animation frame: step the bounce, then compose.
    pub fn tick(&mut self) -> Vec2 {
        self.advance_bounce();
        self.compose()
    }

    pub fn begin_drag(&mut self, pointer: Vec2) {
        self.dragging = true;
        if self.policy.drag_deactivates_motion {
            self.motion_active = false;
        }
        self.drag_anchor = pointer - self.drag_offset;
        self.drag_moved = false;
        self.drag_click_pending = false;
    }

    /// Track the pointer during a drag. Moves outside a drag are ignored.
    pub fn drag_to(&mut self, pointer: Vec2) -> bool {
        if !self.dragging {
            return false;
        }
        let next = self.clamp_offset(pointer - self.drag_anchor);
        self.drag_moved |= next != self.drag_offset;
        self.drag_offset = next;
        true
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// End a mouse drag. Browsers follow mouseup with a click, which must
    /// not count as a tap when the element was actually moved.
    pub fn end_mouse_drag(&mut self) {
        self.drag_click_pending = self.dragging && self.drag_moved;
        self.end_drag();
    }

    pub fn orientation(&mut self, sample: OrientationSample) -> SampleOutcome {
        if self.dragging || (self.policy.samples_require_active && !self.motion_active) {
            return SampleOutcome::Ignored;
        }
        let mut angles = sample.angles();
        if self.policy.baseline_calibration {
            match self.baseline {
                Some(zero) => angles -= zero,
                None => {
                    self.baseline = Some(angles);
                    self.tilt_offset = Vec2::ZERO;
                    return SampleOutcome::Calibrated;
                }
            }
        }
        let [kx, ky] = self.policy.tilt_scale;
        self.tilt_offset = self.clamp_offset(angles * Vec2::new(kx, ky));
        SampleOutcome::Applied(self.tilt_offset)
    }

    /// A click/tap anywhere on the page.
    pub fn tap(&mut self) -> TapAction {
        let ends_drag = std::mem::take(&mut self.drag_click_pending);
        if self.authorization_pending {
            return TapAction::None;
        }
        if !self.listening {
            self.authorization_pending = true;
            return TapAction::RequestAuthorization;
        }
        if ends_drag {
            return TapAction::None;
        }
        if !self.motion_active && !self.policy.activate_on_grant {
            self.motion_active = true;
            return TapAction::Activated;
        }
        TapAction::None
    }

    pub fn authorize(&mut self, result: Authorization) -> AuthorizationEffect {
        self.authorization_pending = false;
        match result {
            Authorization::Granted => {
                if self.policy.activate_on_grant {
                    self.motion_active = true;
                }
                self.listening = true;
                AuthorizationEffect {
                    attach_listener: true,
                    alert_denied: false,
                }
            }
            Authorization::Ungated => {
                if self.policy.activate_when_ungated {
                    self.motion_active = true;
                }
                self.listening = true;
                AuthorizationEffect {
                    attach_listener: true,
                    alert_denied: false,
                }
            }
            Authorization::Denied => AuthorizationEffect {
                attach_listener: false,
                alert_denied: true,
            },
        }
    }

    /// The authorization call itself failed; a later tap may retry.
    pub fn authorization_failed(&mut self) {
        self.authorization_pending = false;
    }
}

/// CSS `transform` value placing the element at `offset`.
pub fn transform_css(offset: Vec2) -> String {
    format!("translateX({}px) translateY({}px)", offset.x, offset.y)
}
