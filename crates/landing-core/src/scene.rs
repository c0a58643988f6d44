//! Per-frame background scene parameters.
//!
//! Every field of [`SceneFrame`] is a closed-form function of the time
//! accumulator and the zoom scalar — nothing integrates per-frame deltas, so
//! the scene stays stable under arbitrary frame pacing.

use crate::constants::*;
use crate::parallax::lerp;
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteMode {
    Cyan,
    Magenta,
}

impl PaletteMode {
    pub fn palette(self) -> &'static Palette {
        match self {
            PaletteMode::Cyan => &PALETTE_CYAN,
            PaletteMode::Magenta => &PALETTE_MAGENTA,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            PaletteMode::Cyan => PaletteMode::Magenta,
            PaletteMode::Magenta => PaletteMode::Cyan,
        }
    }
}

/// Scene colors as packed 0xRRGGBB values.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub grid: u32,
    pub glow: u32,
    pub mountains: [u32; 3],
    pub accents: [u32; 3],
}

pub const PALETTE_CYAN: Palette = Palette {
    grid: 0x00d7ff,
    glow: 0x00d7ff,
    mountains: [0x7aa9ff, 0x9cc2ff, 0xc7daff],
    accents: [0x00fff7, 0xff008c, 0x66fff1],
};

pub const PALETTE_MAGENTA: Palette = Palette {
    grid: 0xff2bd6,
    glow: 0xff2bd6,
    mountains: [0xff64e8, 0xff9bf0, 0xffc4ff],
    accents: [0x00fff7, 0xff008c, 0x66fff1],
};

/// Unpack 0xRRGGBB into linear-ish [0,1] RGB.
#[inline]
pub fn rgb(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

#[inline]
pub fn smoothstep01(x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    x * x * (3.0 - 2.0 * x)
}

/// All time-varying background parameters for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneFrame {
    pub grid_z: f32,
    pub grid_opacity: f32,
    pub glow_y: f32,
    pub mountain_z: f32,
    pub mountain_y: f32,
    pub mountain_roll: f32,
    pub mountain_opacity: f32,
    pub ring_angle: f32,
    pub sparks_angle: f32,
    pub ring_opacity: f32,
    pub halo_opacity: f32,
    pub halo_scale: f32,
    pub ripple_phase: f32,
    pub cam_eye: Vec3,
    pub cam_fovy_deg: f32,
}

/// Sample the scene at time `t` (seconds) with a dolly `zoom` in [0, 1].
pub fn sample_scene(t: f32, zoom: f32) -> SceneFrame {
    let ts = t * SCENE_TIME_RATE;
    let ease = smoothstep01(zoom);
    let flicker = FLICKER_BASE
        + (ts * FLICKER_FREQ_A).sin() * FLICKER_AMP_A
        + (ts * FLICKER_FREQ_B).sin() * FLICKER_AMP_B;
    let idle_z = CAM_IDLE_Z + ts.sin() * CAM_IDLE_DRIFT;
    SceneFrame {
        grid_z: -(ts * GRID_SCROLL_RATE).rem_euclid(GRID_SCROLL_CYCLE),
        grid_opacity: lerp(GRID_OPACITY, GRID_OPACITY_ZOOMED, ease),
        glow_y: (ts * GLOW_BREATH_FREQ).sin() * GLOW_BREATH_AMP,
        mountain_z: (ts * MOUNTAIN_DRIFT_RATE).rem_euclid(MOUNTAIN_DRIFT_CYCLE),
        mountain_y: (ts * MOUNTAIN_SWAY_FREQ).sin() * MOUNTAIN_SWAY_AMP,
        mountain_roll: (ts * MOUNTAIN_ROLL_FREQ).sin() * MOUNTAIN_ROLL_AMP,
        mountain_opacity: lerp(RIDGE_OPACITY, RIDGE_OPACITY_ZOOMED, ease),
        ring_angle: t * RING_SPIN_RATE,
        sparks_angle: -t * SPARKS_SPIN_RATE,
        ring_opacity: RING_OPACITY * flicker,
        halo_opacity: lerp(HALO_OPACITY, HALO_OPACITY_ZOOMED, ease) * flicker,
        halo_scale: lerp(HALO_SCALE, HALO_SCALE_ZOOMED, ease),
        ripple_phase: ts,
        cam_eye: Vec3::new(0.0, lerp(CAM_EYE_Y, CAM_ZOOM_Y, ease), lerp(idle_z, CAM_ZOOM_Z, ease)),
        cam_fovy_deg: lerp(CAM_FOVY_DEG, CAM_ZOOM_FOVY_DEG, ease),
    }
}

/// Scatter spark particles around the accretion ring, in ring-local space.
pub fn spark_positions(count: usize, seed: u64) -> Vec<Vec3> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let a = rng.gen_range(0.0..std::f32::consts::TAU);
            let r = SPARK_RADIUS_MIN + rng.gen_range(0.0..SPARK_RADIUS_SPAN);
            let y = (rng.gen_range(0.0..1.0) - 0.5) * SPARK_JITTER_Y;
            Vec3::new(a.cos() * r, a.sin() * r, y)
        })
        .collect()
}
