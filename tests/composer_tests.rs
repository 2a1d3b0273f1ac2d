// Host-side tests for the position composer.
// The main crate is wasm-only, so we load the platform-free `core` module tree directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::constants::*;
use crate::core::*;
use glam::Vec2;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn active_composer(policy: MotionPolicy) -> Composer {
    let mut c = Composer::new(policy);
    assert_eq!(c.tap(), TapAction::RequestAuthorization);
    c.authorize(Authorization::Granted);
    c
}

#[test]
fn drag_offset_is_clamped_for_every_delta() {
    let mut c = Composer::new(MotionPolicy::calibrated());
    let max = c.policy().max_offset;
    for start in [-70.0_f32, -10.0, 0.0, 35.0, 80.0] {
        // Park the element at `start` on both axes.
        c.begin_drag(c.drag_offset());
        c.drag_to(Vec2::splat(start));
        c.end_drag();
        let anchor_offset = c.drag_offset();

        let mut d = -200.0_f32;
        while d <= 200.0 {
            let pointer = Vec2::new(500.0, 300.0);
            c.begin_drag(pointer);
            c.drag_to(pointer + Vec2::new(d, -d));
            let off = c.drag_offset();
            assert!(approx(off.x, (anchor_offset.x + d).clamp(-max, max)));
            assert!(approx(off.y, (anchor_offset.y - d).clamp(-max, max)));
            assert!(off.x.abs() <= max && off.y.abs() <= max);
            // Undo so each delta starts from the same anchor offset.
            c.drag_to(pointer);
            c.end_drag();
            d += 7.0;
        }
    }
}

#[test]
fn drag_anchor_keeps_existing_offset() {
    let mut c = Composer::default();
    c.begin_drag(Vec2::new(100.0, 100.0));
    c.drag_to(Vec2::new(130.0, 90.0));
    c.end_drag();
    assert_eq!(c.drag_offset(), Vec2::new(30.0, -10.0));

    // A new drag starting elsewhere continues from the current offset.
    c.begin_drag(Vec2::new(400.0, 20.0));
    c.drag_to(Vec2::new(405.0, 20.0));
    assert_eq!(c.drag_offset(), Vec2::new(35.0, -10.0));
}

#[test]
fn moves_after_drag_end_do_not_change_offset() {
    let mut c = Composer::default();
    c.begin_drag(Vec2::ZERO);
    assert!(c.drag_to(Vec2::new(12.0, 8.0)));
    assert!(c.is_dragging());
    c.end_drag();
    assert!(!c.is_dragging());
    assert!(!c.drag_to(Vec2::new(70.0, 70.0)));
    assert_eq!(c.drag_offset(), Vec2::new(12.0, 8.0));
}

#[test]
fn bounce_flips_direction_and_stays_bounded() {
    let mut c = Composer::default();
    assert_eq!(c.bounce_direction(), 1.0);
    let mut flips = Vec::new();
    let mut last_dir = c.bounce_direction();
    for frame in 0..2000 {
        c.tick();
        let y = c.bounce_offset();
        assert!(
            y.abs() <= BOUNCE_AMPLITUDE + BOUNCE_STEP + 1e-3,
            "frame {} out of range: {}",
            frame,
            y
        );
        if c.bounce_direction() != last_dir {
            // Flips happen only past the amplitude, toward the center.
            assert!(y.abs() > BOUNCE_AMPLITUDE);
            assert_eq!(c.bounce_direction(), -y.signum());
            flips.push(frame);
            last_dir = c.bounce_direction();
        }
    }
    assert!(flips.len() > 10);
    // First flip happens on the way up, after ~34 steps of 0.3.
    assert!((33..=35).contains(&flips[0]), "first flip at {}", flips[0]);
    // Half-periods settle at ~68 frames.
    for w in flips.windows(2).skip(1) {
        let gap = w[1] - w[0];
        assert!((66..=70).contains(&gap), "gap {}", gap);
    }
}

#[test]
fn bounce_pauses_while_dragging() {
    let mut c = Composer::default();
    for _ in 0..5 {
        c.tick();
    }
    let before = c.bounce_offset();
    c.begin_drag(Vec2::ZERO);
    for _ in 0..50 {
        assert!(!c.advance_bounce());
    }
    assert_eq!(c.bounce_offset(), before);
    c.end_drag();
    assert!(c.advance_bounce());
    assert!(c.bounce_offset() > before);
}

#[test]
fn bounce_yields_to_motion_per_policy() {
    let mut calibrated = active_composer(MotionPolicy::calibrated());
    assert!(calibrated.is_motion_active());
    assert!(!calibrated.advance_bounce());

    let mut responsive = active_composer(MotionPolicy::responsive());
    assert!(responsive.is_motion_active());
    assert!(responsive.advance_bounce());
}

#[test]
fn compose_sums_all_sources() {
    let mut c = active_composer(MotionPolicy::responsive());
    c.begin_drag(Vec2::ZERO);
    c.drag_to(Vec2::new(10.0, -5.0));
    c.end_drag();
    c.orientation(OrientationSample::new(5.0, 10.0));
    let tilt = c.tilt_offset();
    assert!(approx(tilt.x, 11.0));
    assert!(approx(tilt.y, 12.0));

    let out = c.tick();
    let bounce = c.bounce_offset();
    assert!(approx(out.x, 10.0 + 11.0));
    assert!(approx(out.y, -5.0 + 12.0 + bounce));
}

#[test]
fn orientation_maps_with_scale_and_clamp() {
    let policy = MotionPolicy {
        baseline_calibration: false,
        ..MotionPolicy::calibrated()
    };
    let mut c = active_composer(policy);
    assert_eq!(
        c.orientation(OrientationSample::new(10.0, 5.0)),
        SampleOutcome::Applied(c.tilt_offset())
    );
    assert!(approx(c.tilt_offset().x, 15.0));
    assert!(approx(c.tilt_offset().y, 4.0));

    c.orientation(OrientationSample::new(100.0, 5.0));
    assert_eq!(c.tilt_offset().x, 80.0);

    c.orientation(OrientationSample::new(-100.0, -500.0));
    assert_eq!(c.tilt_offset(), Vec2::new(-80.0, -80.0));
}

#[test]
fn missing_axes_read_as_zero() {
    let policy = MotionPolicy {
        baseline_calibration: false,
        ..MotionPolicy::calibrated()
    };
    let mut c = active_composer(policy);
    c.orientation(OrientationSample {
        gamma: None,
        beta: Some(10.0),
    });
    assert_eq!(c.tilt_offset().x, 0.0);
    assert!(approx(c.tilt_offset().y, 8.0));
    c.orientation(OrientationSample::default());
    assert_eq!(c.tilt_offset(), Vec2::ZERO);
}

#[test]
fn baseline_zeroes_first_sample() {
    let mut c = active_composer(MotionPolicy::calibrated());
    assert_eq!(
        c.orientation(OrientationSample::new(20.0, 10.0)),
        SampleOutcome::Calibrated
    );
    assert_eq!(c.tilt_offset(), Vec2::ZERO);
    assert_eq!(c.baseline(), Some(Vec2::new(20.0, 10.0)));

    c.orientation(OrientationSample::new(25.0, 10.0));
    assert!(approx(c.tilt_offset().x, 7.5));
    assert_eq!(c.tilt_offset().y, 0.0);

    // The zero point never moves once captured.
    c.orientation(OrientationSample::new(0.0, 0.0));
    assert_eq!(c.baseline(), Some(Vec2::new(20.0, 10.0)));
    assert!(approx(c.tilt_offset().x, -30.0));
    assert!(approx(c.tilt_offset().y, -8.0));
}

#[test]
fn samples_ignored_while_dragging_or_inactive() {
    let mut idle = Composer::new(MotionPolicy::calibrated());
    assert_eq!(
        idle.orientation(OrientationSample::new(10.0, 10.0)),
        SampleOutcome::Ignored
    );
    assert_eq!(idle.baseline(), None);

    let mut c = active_composer(MotionPolicy::calibrated());
    c.begin_drag(Vec2::ZERO);
    assert_eq!(
        c.orientation(OrientationSample::new(10.0, 10.0)),
        SampleOutcome::Ignored
    );
    assert_eq!(c.baseline(), None);

    // Responsive samples do not wait for activation.
    let mut responsive = Composer::new(MotionPolicy::responsive());
    assert!(matches!(
        responsive.orientation(OrientationSample::new(10.0, 0.0)),
        SampleOutcome::Applied(_)
    ));
    assert!(approx(responsive.tilt_offset().x, 22.0));
}

#[test]
fn denial_leaves_motion_inactive_without_listener() {
    let mut c = Composer::default();
    assert_eq!(c.tap(), TapAction::RequestAuthorization);
    let effect = c.authorize(Authorization::Denied);
    assert!(!effect.attach_listener);
    assert!(effect.alert_denied);
    assert!(!c.is_motion_active());
    assert!(!c.is_listening());

    // Next tap may ask again.
    assert_eq!(c.tap(), TapAction::RequestAuthorization);
}

#[test]
fn taps_while_request_pending_are_ignored() {
    let mut c = Composer::default();
    assert_eq!(c.tap(), TapAction::RequestAuthorization);
    assert_eq!(c.tap(), TapAction::None);
    c.authorization_failed();
    assert!(!c.is_motion_active());
    assert_eq!(c.tap(), TapAction::RequestAuthorization);
}

#[test]
fn grant_activates_calibrated_tracking() {
    let mut c = Composer::default();
    c.tap();
    let effect = c.authorize(Authorization::Granted);
    assert!(effect.attach_listener);
    assert!(!effect.alert_denied);
    assert!(c.is_motion_active());
    assert!(c.is_listening());
    assert_eq!(c.tap(), TapAction::None);

    // Dragging does not switch calibrated tracking off.
    c.begin_drag(Vec2::ZERO);
    assert!(c.is_motion_active());
}

#[test]
fn tap_policy_activates_on_tap_and_drag_deactivates() {
    let mut c = Composer::new(MotionPolicy::tap());
    c.tap();
    c.authorize(Authorization::Granted);
    assert!(c.is_listening());
    assert!(!c.is_motion_active());

    assert_eq!(c.tap(), TapAction::Activated);
    assert!(c.is_motion_active());

    c.begin_drag(Vec2::ZERO);
    assert!(!c.is_motion_active());
    c.end_drag();
    assert!(c.advance_bounce());
    assert_eq!(c.tap(), TapAction::Activated);
}

#[test]
fn ungated_platforms_follow_policy() {
    let mut calibrated = Composer::new(MotionPolicy::calibrated());
    calibrated.tap();
    let effect = calibrated.authorize(Authorization::Ungated);
    assert!(effect.attach_listener);
    assert!(calibrated.is_motion_active());

    let mut responsive = Composer::new(MotionPolicy::responsive());
    responsive.tap();
    let effect = responsive.authorize(Authorization::Ungated);
    assert!(effect.attach_listener);
    assert!(!responsive.is_motion_active());
}

#[test]
fn policy_presets_by_name() {
    assert_eq!(
        MotionPolicy::from_name("calibrated"),
        Some(MotionPolicy::calibrated())
    );
    assert_eq!(MotionPolicy::from_name(" TAP "), Some(MotionPolicy::tap()));
    assert_eq!(
        MotionPolicy::from_name("responsive"),
        Some(MotionPolicy::responsive())
    );
    assert_eq!(MotionPolicy::from_name(""), Some(MotionPolicy::default()));
    assert_eq!(MotionPolicy::from_name("wobbly"), None);

    let r = MotionPolicy::responsive();
    assert_eq!(r.max_offset, MAX_OFFSET_COMPACT);
    assert_eq!(r.tilt_scale, TILT_SCALE_RESPONSIVE);
    assert_eq!(MotionPolicy::default().max_offset, MAX_OFFSET_CALIBRATED);
}

#[test]
fn transform_text_uses_px_translation() {
    assert_eq!(
        transform_css(Vec2::new(1.5, -2.0)),
        "translateX(1.5px) translateY(-2px)"
    );
    assert_eq!(transform_css(Vec2::ZERO), "translateX(0px) translateY(0px)");
}

#[test]
fn core_module_exposes_composer_and_constants() {
    let c = crate::core::Composer::default();
    assert_eq!(c.policy().max_offset, crate::core::constants::MAX_OFFSET_CALIBRATED);
    assert_eq!(crate::core::constants::BOUNCE_STEP, 0.3);
    assert_eq!(
        crate::core::transform_css(c.compose()),
        "translateX(0px) translateY(0px)"
    );
}

#[test]
fn click_ending_mouse_drag_does_not_activate_tap_policy() {
    let mut c = Composer::new(MotionPolicy::tap());
    c.tap();
    c.authorize(Authorization::Granted);
    assert_eq!(c.tap(), TapAction::Activated);

    c.begin_drag(Vec2::new(100.0, 100.0));
    assert!(!c.is_motion_active());
    c.drag_to(Vec2::new(120.0, 100.0));
    c.end_mouse_drag();
    // The click the browser fires after mouseup.
    assert_eq!(c.tap(), TapAction::None);
    assert!(!c.is_motion_active());

    // A later, separate click activates again.
    assert_eq!(c.tap(), TapAction::Activated);
}

#[test]
fn click_without_drag_movement_still_counts_as_tap() {
    let mut c = Composer::new(MotionPolicy::tap());
    c.tap();
    c.authorize(Authorization::Granted);

    c.begin_drag(Vec2::new(50.0, 50.0));
    c.drag_to(Vec2::new(50.0, 50.0));
    c.end_mouse_drag();
    assert_eq!(c.tap(), TapAction::Activated);
}

#[test]
fn touch_drag_end_does_not_swallow_next_tap() {
    let mut c = Composer::new(MotionPolicy::tap());
    c.tap();
    c.authorize(Authorization::Granted);

    c.begin_drag(Vec2::ZERO);
    c.drag_to(Vec2::new(30.0, 0.0));
    c.end_drag();
    assert_eq!(c.tap(), TapAction::Activated);
}
