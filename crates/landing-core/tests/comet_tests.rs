// Comet state machine, trail buffer, and path sampling.

use glam::Vec3;
use landing_core::comet::{Comet, CometPhase, Trail};
use landing_core::constants::*;
use landing_core::curve::ThreePointPath;

const TICK: f32 = 0.016;

#[test]
fn path_interpolates_its_control_points() {
    let a = Vec3::new(-7.0, 1.0, 0.0);
    let b = Vec3::new(0.5, -1.0, 0.0);
    let c = Vec3::new(7.0, 0.3, 0.0);
    let path = ThreePointPath::new([a, b, c]);
    assert!((path.position(0.0) - a).length() < 1e-5);
    assert!((path.position(0.5) - b).length() < 1e-5);
    assert!((path.position(1.0) - c).length() < 1e-5);
    // Out-of-range samples clamp rather than extrapolate.
    assert!((path.position(-1.0) - a).length() < 1e-5);
    assert!((path.position(2.0) - c).length() < 1e-5);
}

#[test]
fn trail_length_is_invariant() {
    let mut comet = Comet::new(7);
    assert_eq!(comet.trail().len(), COMET_TRAIL_LEN);
    for _ in 0..2000 {
        comet.tick(TICK);
        assert_eq!(comet.trail().len(), COMET_TRAIL_LEN);
    }
}

#[test]
fn trail_drops_oldest_first() {
    let mut trail = Trail::new(3, Vec3::ZERO);
    trail.push(Vec3::new(1.0, 0.0, 0.0));
    trail.push(Vec3::new(2.0, 0.0, 0.0));
    trail.push(Vec3::new(3.0, 0.0, 0.0));
    trail.push(Vec3::new(4.0, 0.0, 0.0));
    let xs: Vec<f32> = trail.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![4.0, 3.0, 2.0]);
}

#[test]
fn progress_is_monotonic_within_a_pass() {
    let mut comet = Comet::new(42);
    let mut last = comet.progress();
    while comet.is_traveling() {
        comet.tick(TICK);
        assert!(comet.progress() >= last);
        last = comet.progress();
    }
    assert!((last - 1.0).abs() < 1e-6);
}

#[test]
fn pass_completes_in_about_one_over_speed_seconds() {
    let mut comet = Comet::new(3);
    let mut ticks = 0u32;
    while comet.is_traveling() {
        comet.tick(TICK);
        ticks += 1;
        assert!(ticks < 10_000, "comet never finished its pass");
    }
    let elapsed = ticks as f32 * TICK;
    let expected = 1.0 / COMET_SPEED;
    assert!(
        (elapsed - expected).abs() <= TICK + 1e-4,
        "pass took {elapsed}s, expected about {expected}s"
    );
}

#[test]
fn progress_resets_exactly_once_per_new_path() {
    let mut comet = Comet::new(11);
    let mut resets = 0u32;
    let mut prev = comet.progress();
    // Run through several full cycles.
    for _ in 0..4000 {
        comet.tick(TICK);
        let p = comet.progress();
        if p < prev {
            assert_eq!(p, 0.0, "progress may only go backward by resetting to 0");
            resets += 1;
        }
        prev = p;
    }
    assert!(resets >= 2, "expected multiple cycles in ~64s of ticks");
}

#[test]
fn entry_side_alternates_each_cycle() {
    let mut comet = Comet::new(99);
    let mut sides = vec![comet.path_start().x.signum()];
    let mut was_traveling = comet.is_traveling();
    for _ in 0..6000 {
        comet.tick(TICK);
        if comet.is_traveling() && !was_traveling {
            sides.push(comet.path_start().x.signum());
        }
        was_traveling = comet.is_traveling();
    }
    assert!(sides.len() >= 3);
    for pair in sides.windows(2) {
        assert_ne!(pair[0], pair[1], "entry side must alternate: {sides:?}");
    }
}

#[test]
fn pause_duration_is_within_the_configured_band() {
    let mut comet = Comet::new(5);
    while comet.is_traveling() {
        comet.tick(TICK);
    }
    match comet.phase() {
        CometPhase::Pausing { remaining } => {
            assert!(remaining >= COMET_PAUSE_MIN - MAX_FRAME_DT);
            assert!(remaining < COMET_PAUSE_MAX);
        }
        CometPhase::Traveling => panic!("expected a pause after the pass"),
    }
}

#[test]
fn oversized_dt_is_clamped() {
    let mut comet = Comet::new(1);
    comet.tick(10.0);
    assert!((comet.progress() - MAX_FRAME_DT * COMET_SPEED).abs() < 1e-6);
}

#[test]
fn head_ramps_shrink_and_fade() {
    let mut comet = Comet::new(2);
    assert!((comet.head_scale() - COMET_HEAD_SCALE_START).abs() < 1e-6);
    assert!((comet.trail_opacity() - COMET_TRAIL_OPACITY_START).abs() < 1e-6);
    while comet.is_traveling() {
        comet.tick(TICK);
    }
    assert!((comet.head_scale() - COMET_HEAD_SCALE_END).abs() < 1e-6);
    assert!((comet.trail_opacity() - COMET_TRAIL_OPACITY_END).abs() < 1e-6);
}

#[test]
fn paths_start_on_a_frame_edge() {
    let mut comet = Comet::new(13);
    for _ in 0..4 {
        let start = comet.path_start();
        assert!((start.x.abs() - COMET_EDGE_X).abs() < 1e-5);
        assert!(start.y.abs() <= COMET_FRAME_H * 0.5);
        // run to the next path
        while comet.is_traveling() {
            comet.tick(TICK);
        }
        while !comet.is_traveling() {
            comet.tick(TICK);
        }
    }
}
