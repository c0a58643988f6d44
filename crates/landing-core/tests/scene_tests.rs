// Background scene sampling and the floating sprite field.

use landing_core::constants::*;
use landing_core::scene::{rgb, sample_scene, smoothstep01, spark_positions, PaletteMode};
use landing_core::sprites::{wrap_x, SpriteField};

#[test]
fn scene_sampling_is_pure() {
    // Two queries at the same time must agree exactly: nothing accumulates.
    let a = sample_scene(12.34, 0.25);
    let b = sample_scene(12.34, 0.25);
    assert_eq!(a, b);
}

#[test]
fn idle_scene_uses_the_rest_values() {
    let f = sample_scene(0.0, 0.0);
    assert_eq!(f.grid_opacity, GRID_OPACITY);
    assert_eq!(f.mountain_opacity, RIDGE_OPACITY);
    assert_eq!(f.cam_fovy_deg, CAM_FOVY_DEG);
    assert_eq!(f.cam_eye.y, CAM_EYE_Y);
    assert_eq!(f.halo_scale, HALO_SCALE);
    assert_eq!(f.ring_angle, 0.0);
}

#[test]
fn full_zoom_reaches_the_dolly_targets() {
    let f = sample_scene(5.0, 1.0);
    assert!((f.cam_fovy_deg - CAM_ZOOM_FOVY_DEG).abs() < 1e-4);
    assert!((f.cam_eye.y - CAM_ZOOM_Y).abs() < 1e-4);
    assert!((f.cam_eye.z - CAM_ZOOM_Z).abs() < 1e-4);
    assert!((f.grid_opacity - GRID_OPACITY_ZOOMED).abs() < 1e-4);
    assert!((f.halo_scale - HALO_SCALE_ZOOMED).abs() < 1e-4);
}

#[test]
fn zoom_outside_the_unit_range_clamps() {
    assert_eq!(sample_scene(1.0, -5.0), sample_scene(1.0, 0.0));
    assert_eq!(sample_scene(1.0, 7.0), sample_scene(1.0, 1.0));
}

#[test]
fn scroll_offsets_stay_in_their_cycles() {
    for i in 0..500 {
        let f = sample_scene(i as f32 * 0.173, 0.0);
        assert!(f.grid_z <= 0.0 && f.grid_z > -GRID_SCROLL_CYCLE);
        assert!(f.mountain_z >= 0.0 && f.mountain_z < MOUNTAIN_DRIFT_CYCLE);
        assert!(f.ring_opacity > 0.0 && f.ring_opacity <= RING_OPACITY * 1.2);
    }
}

#[test]
fn smoothstep_hits_its_endpoints() {
    assert_eq!(smoothstep01(0.0), 0.0);
    assert_eq!(smoothstep01(1.0), 1.0);
    assert_eq!(smoothstep01(0.5), 0.5);
    assert!(smoothstep01(0.25) < 0.25);
    assert!(smoothstep01(0.75) > 0.75);
}

#[test]
fn palette_toggle_swaps_modes() {
    assert_eq!(PaletteMode::Cyan.toggled(), PaletteMode::Magenta);
    assert_eq!(PaletteMode::Magenta.toggled(), PaletteMode::Cyan);
    assert_ne!(
        PaletteMode::Cyan.palette().grid,
        PaletteMode::Magenta.palette().grid
    );
}

#[test]
fn rgb_unpacks_channels() {
    let c = rgb(0x00d7ff);
    assert!((c.x - 0.0).abs() < 1e-6);
    assert!((c.y - 215.0 / 255.0).abs() < 1e-6);
    assert!((c.z - 1.0).abs() < 1e-6);
}

#[test]
fn sparks_scatter_around_the_ring() {
    let sparks = spark_positions(SPARK_COUNT, 9);
    assert_eq!(sparks.len(), SPARK_COUNT);
    for p in &sparks {
        let r = (p.x * p.x + p.y * p.y).sqrt();
        assert!(r >= SPARK_RADIUS_MIN - 1e-4);
        assert!(r <= SPARK_RADIUS_MIN + SPARK_RADIUS_SPAN + 1e-4);
        assert!(p.z.abs() <= SPARK_JITTER_Y * 0.5 + 1e-4);
    }
    // Same seed, same scatter.
    assert_eq!(sparks, spark_positions(SPARK_COUNT, 9));
}

#[test]
fn sprite_positions_are_closed_form_in_time() {
    let field = SpriteField::new(SPRITE_COUNT, 4);
    assert_eq!(field.len(), SPRITE_COUNT);
    for i in 0..field.len() {
        let a = field.position_at(i, 33.3);
        let b = field.position_at(i, 33.3);
        assert_eq!(a, b);
    }
}

#[test]
fn sprites_never_leave_the_horizontal_frame() {
    let field = SpriteField::new(SPRITE_COUNT, 21);
    for i in 0..field.len() {
        for step in 0..2000 {
            let p = field.position_at(i, step as f32 * 0.25);
            assert!(p.x.abs() <= SPRITE_WRAP_X + 1e-4);
        }
    }
}

#[test]
fn wrap_is_continuous_at_the_seam() {
    assert!((wrap_x(SPRITE_WRAP_X + 0.5) - (-SPRITE_WRAP_X + 0.5)).abs() < 1e-5);
    assert!((wrap_x(-SPRITE_WRAP_X - 0.5) - (SPRITE_WRAP_X - 0.5)).abs() < 1e-5);
    assert_eq!(wrap_x(3.0), 3.0);
}

#[test]
fn sprite_fields_are_deterministic_per_seed() {
    let a = SpriteField::new(6, 77);
    let b = SpriteField::new(6, 77);
    for i in 0..6 {
        assert_eq!(a.position_at(i, 1.0), b.position_at(i, 1.0));
    }
}
