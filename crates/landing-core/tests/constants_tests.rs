// Sanity checks over the tuning defaults and their relationships.

use landing_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_factors_are_fractions() {
    assert!(PARALLAX_ROT_EASE > 0.0 && PARALLAX_ROT_EASE < 1.0);
    assert!(PARALLAX_POS_EASE > 0.0 && PARALLAX_POS_EASE < 1.0);
    assert!(SPRITE_ROT_EASE > 0.0 && SPRITE_ROT_EASE < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn swing_angles_are_small() {
    // Parallax is a subtle tilt, not a free-look camera.
    assert!(PARALLAX_YAW_SWING_DEG > 0.0 && PARALLAX_YAW_SWING_DEG <= 15.0);
    assert!(PARALLAX_PITCH_SWING_DEG > 0.0 && PARALLAX_PITCH_SWING_DEG <= 15.0);
    assert!(SPRITE_YAW_SWING_DEG <= PARALLAX_YAW_SWING_DEG);
    assert!(SPRITE_PITCH_SWING_DEG <= PARALLAX_PITCH_SWING_DEG);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn comet_path_bands_fit_the_frame() {
    assert!(COMET_EDGE_X > COMET_MID_X);
    assert!(COMET_Y1_MIN < COMET_Y1_MAX);
    assert!(COMET_Y2_MIN < COMET_Y2_MAX);
    assert!(COMET_Y3_MIN < COMET_Y3_MAX);
    assert!(COMET_Y2_MAX.abs() <= COMET_FRAME_H * 0.5);
    assert!(COMET_PAUSE_MIN < COMET_PAUSE_MAX);
    assert!(COMET_SPEED > 0.0);
    assert!(COMET_TRAIL_LEN > 1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn comet_ramps_fade_out() {
    assert!(COMET_HEAD_SCALE_START > COMET_HEAD_SCALE_END);
    assert!(COMET_TRAIL_OPACITY_START > COMET_TRAIL_OPACITY_END);
    assert!(COMET_TRAIL_OPACITY_END > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn zoom_targets_move_closer_and_tighter() {
    assert!(CAM_ZOOM_Z < CAM_IDLE_Z);
    assert!(CAM_ZOOM_Y < CAM_EYE_Y);
    assert!(CAM_ZOOM_FOVY_DEG < CAM_FOVY_DEG);
    assert!(GRID_OPACITY_ZOOMED < GRID_OPACITY);
    assert!(RIDGE_OPACITY_ZOOMED < RIDGE_OPACITY);
    assert!(HALO_OPACITY_ZOOMED > HALO_OPACITY);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_step_clamp_is_reasonable() {
    // One clamped step must stay well under a comet pause so a throttled tab
    // cannot skip a whole phase.
    assert!(MAX_FRAME_DT > 0.0);
    assert!(MAX_FRAME_DT < COMET_PAUSE_MIN);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn boot_timeline_ordering_holds() {
    assert!(BOOT_PROMPT_LEAD_MS < BOOT_DURATION_MS);
    assert!(BOOT_LOG_1_START_MS < BOOT_LOG_2_START_MS);
    assert!(BOOT_LABEL_START_MS < BOOT_DURATION_MS);
    assert!(BOOT_BLOCKS > 0);
}
