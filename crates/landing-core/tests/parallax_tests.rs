// Pointer target mapping, rig easing, and cursor follow behavior.

use glam::Vec2;
use landing_core::constants::*;
use landing_core::cursor::{press_pulse_scale, CursorFollow};
use landing_core::parallax::{clamp_uv, target_from_uv, ParallaxRig, PointerTarget};

const EPS: f32 = 1e-6;

#[test]
fn surface_center_gives_zero_targets() {
    // 800x600 surface, pointer dead center -> UV (0.5, 0.5).
    let uv = [400.0 / 800.0, 300.0 / 600.0];
    let t = target_from_uv(
        uv,
        PARALLAX_YAW_SWING_DEG,
        PARALLAX_PITCH_SWING_DEG,
        PARALLAX_LATERAL_SWING,
    );
    assert!(t.yaw.abs() < EPS);
    assert!(t.pitch.abs() < EPS);
    assert!(t.lateral.abs() < EPS);
}

#[test]
fn top_left_corner_pins_to_bounds() {
    let t = target_from_uv(
        [0.0, 0.0],
        PARALLAX_YAW_SWING_DEG,
        PARALLAX_PITCH_SWING_DEG,
        PARALLAX_LATERAL_SWING,
    );
    let max_yaw = (PARALLAX_YAW_SWING_DEG * 0.5).to_radians();
    let max_pitch = (PARALLAX_PITCH_SWING_DEG * 0.5).to_radians();
    assert!((t.yaw + max_yaw).abs() < EPS, "yaw should be -max at the left edge");
    assert!((t.pitch - max_pitch).abs() < EPS, "pitch should be +max at the top edge");
    assert!((t.lateral + PARALLAX_LATERAL_SWING * 0.5).abs() < EPS);
}

#[test]
fn out_of_bounds_pointer_clamps_first() {
    // Coordinates far outside the surface must not exceed the corner values.
    let corner = target_from_uv(
        [1.0, 1.0],
        PARALLAX_YAW_SWING_DEG,
        PARALLAX_PITCH_SWING_DEG,
        PARALLAX_LATERAL_SWING,
    );
    let wild = target_from_uv(
        [37.5, 12.0],
        PARALLAX_YAW_SWING_DEG,
        PARALLAX_PITCH_SWING_DEG,
        PARALLAX_LATERAL_SWING,
    );
    assert_eq!(corner, wild);
    assert_eq!(clamp_uv(-3.0, 42.0), [0.0, 1.0]);
}

#[test]
fn rig_converges_exponentially() {
    let mut rig = ParallaxRig::default();
    let target = PointerTarget { yaw: 0.05, pitch: -0.03, lateral: 0.2 };
    let mut last_err = (target.yaw - rig.yaw).abs();
    for _ in 0..240 {
        rig.step(&target, PARALLAX_ROT_EASE, PARALLAX_POS_EASE);
        let err = (target.yaw - rig.yaw).abs();
        assert!(err <= last_err, "easing must never overshoot away from the target");
        last_err = err;
    }
    // ~4 seconds of frames is plenty to converge at k = 0.08.
    assert!((rig.yaw - target.yaw).abs() < 1e-4);
    assert!((rig.pitch - target.pitch).abs() < 1e-4);
    assert!((rig.lateral - target.lateral).abs() < 1e-3);
}

#[test]
fn cursor_follower_reaches_target() {
    let mut follow = CursorFollow::new(Vec2::new(100.0, 100.0));
    follow.set_target(Vec2::new(500.0, 320.0));
    for _ in 0..120 {
        follow.step(1.0 / 60.0);
    }
    let p = follow.position();
    assert!((p - Vec2::new(500.0, 320.0)).length() < 0.5);
}

#[test]
fn cursor_step_is_stable_under_large_dt() {
    // A background tab can deliver a huge dt; the follower must land on the
    // target, never past it.
    let mut follow = CursorFollow::new(Vec2::ZERO);
    follow.set_target(Vec2::new(10.0, 0.0));
    follow.step(5.0);
    let p = follow.position();
    assert!(p.x > 9.9 && p.x <= 10.0 + EPS);
}

#[test]
fn cursor_resize_clamp_covers_position_and_target() {
    let mut follow = CursorFollow::new(Vec2::new(1900.0, -50.0));
    follow.set_target(Vec2::new(2400.0, 3000.0));
    follow.clamp_into(1280.0, 720.0, CURSOR_VIEWPORT_MARGIN);
    let p = follow.position();
    assert!(p.x <= 1280.0 - CURSOR_VIEWPORT_MARGIN && p.y >= CURSOR_VIEWPORT_MARGIN);
    // After clamping, stepping must stay inside the viewport.
    for _ in 0..60 {
        follow.step(1.0 / 60.0);
        let p = follow.position();
        assert!(p.x <= 1280.0 - CURSOR_VIEWPORT_MARGIN + EPS);
        assert!(p.y <= 720.0 - CURSOR_VIEWPORT_MARGIN + EPS);
    }
}

#[test]
fn press_pulse_dips_and_recovers() {
    assert!((press_pulse_scale(0.0) - 1.0).abs() < EPS);
    assert!((press_pulse_scale(CURSOR_PRESS_HALF_SEC) - CURSOR_PRESS_SCALE).abs() < EPS);
    assert!((press_pulse_scale(CURSOR_PRESS_HALF_SEC * 2.0) - 1.0).abs() < EPS);
    assert!((press_pulse_scale(10.0) - 1.0).abs() < EPS);
    // Halfway down the dip.
    let mid = press_pulse_scale(CURSOR_PRESS_HALF_SEC * 0.5);
    assert!(mid < 1.0 && mid > CURSOR_PRESS_SCALE);
}
