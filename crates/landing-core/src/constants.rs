// Visual tuning defaults shared by the landing page effects.
//
// These values were tuned by eye; they are configuration defaults kept for
// visual parity, not functional invariants.

// ---------------- Background parallax ----------------

// Full yaw/pitch swing across the surface, in degrees (bounds are half).
pub const PARALLAX_YAW_SWING_DEG: f32 = 8.0;
pub const PARALLAX_PITCH_SWING_DEG: f32 = 6.0;
// Full lateral camera slide across the surface, in world units.
pub const PARALLAX_LATERAL_SWING: f32 = 0.8;
// Per-frame lerp factors toward the pointer targets.
pub const PARALLAX_ROT_EASE: f32 = 0.08;
pub const PARALLAX_POS_EASE: f32 = 0.06;

// ---------------- Scene timing ----------------

// The scene clock advances at this fraction of wall time.
pub const SCENE_TIME_RATE: f32 = 0.18;

// Horizon grid
pub const GRID_SIZE: f32 = 200.0;
pub const GRID_DIVISIONS: u32 = 200;
pub const GRID_Y: f32 = -2.4;
pub const GRID_OPACITY: f32 = 0.35;
pub const GRID_OPACITY_ZOOMED: f32 = 0.12;
pub const GRID_SCROLL_RATE: f32 = 5.0; // scene-time units
pub const GRID_SCROLL_CYCLE: f32 = 2.0;

// Horizon glow plane
pub const GLOW_WIDTH: f32 = 200.0;
pub const GLOW_HEIGHT: f32 = 80.0;
pub const GLOW_POS: [f32; 3] = [0.0, 1.0, -40.0];
pub const GLOW_OPACITY: f32 = 0.18;
pub const GLOW_BREATH_FREQ: f32 = 0.8;
pub const GLOW_BREATH_AMP: f32 = 0.2;

// Mountain ridges
pub const RIDGE_WIDTH: f32 = 80.0;
pub const RIDGE_DEPTH: f32 = 16.0;
pub const RIDGE_COLS: u32 = 160;
pub const RIDGE_ROWS: u32 = 32;
pub const RIDGE_BASE_Y: f32 = 0.1;
// (z offset, peak amplitude, silhouette seed) per layer, back to front.
pub const RIDGE_LAYERS: [(f32, f32, f32); 3] = [(-24.0, 3.2, 3.0), (-28.0, 3.8, 11.0), (-34.0, 4.2, 20.0)];
pub const RIDGE_OPACITY: f32 = 0.18;
pub const RIDGE_OPACITY_ZOOMED: f32 = 0.08;
// Static peak shaping
pub const PEAK_NX_SCALE: f32 = 0.15;
pub const PEAK_NY_SCALE: f32 = 0.22;
// Per-frame ripple
pub const RIPPLE_AMP: f32 = 0.12;
pub const RIPPLE_FREQ: f32 = 2.0;
pub const RIPPLE_KX: f32 = 0.12;
pub const RIPPLE_KZ: f32 = 0.08;
pub const MOUNTAIN_DRIFT_RATE: f32 = 1.2; // scene-time units
pub const MOUNTAIN_DRIFT_CYCLE: f32 = 6.0;
pub const MOUNTAIN_SWAY_FREQ: f32 = 0.6;
pub const MOUNTAIN_SWAY_AMP: f32 = 0.08;
pub const MOUNTAIN_ROLL_FREQ: f32 = 0.2;
pub const MOUNTAIN_ROLL_AMP: f32 = 0.02;

// Black hole centerpiece
pub const BH_POS: [f32; 3] = [0.0, 1.2, -35.0];
pub const HOLE_RADIUS: f32 = 5.2;
pub const HOLE_SEGMENTS: u32 = 96;
pub const HOLE_OPACITY: f32 = 0.95;
pub const RING_RADIUS: f32 = 6.4;
pub const RING_TUBE: f32 = 0.35;
pub const RING_SEGMENTS: u32 = 160;
pub const RING_TILT: f32 = std::f32::consts::PI / 2.6;
pub const RING_SPIN_RATE: f32 = 0.15; // rad/s of wall time
pub const RING_OPACITY: f32 = 0.7;
pub const HALO_SCALE: f32 = 20.0;
pub const HALO_SCALE_ZOOMED: f32 = 24.0;
pub const HALO_OPACITY: f32 = 0.18;
pub const HALO_OPACITY_ZOOMED: f32 = 0.35;
pub const SPARK_COUNT: usize = 320;
pub const SPARK_RADIUS_MIN: f32 = 6.3;
pub const SPARK_RADIUS_SPAN: f32 = 0.9;
pub const SPARK_JITTER_Y: f32 = 0.15;
pub const SPARK_SIZE: f32 = 0.06;
pub const SPARK_OPACITY: f32 = 0.85;
pub const SPARKS_SPIN_RATE: f32 = 0.192; // rad/s, applied counter to the ring
// Opacity flicker: 0.9 + sin(ts*2.1)*0.08 + sin(ts*3.3)*0.05
pub const FLICKER_BASE: f32 = 0.9;
pub const FLICKER_FREQ_A: f32 = 2.1;
pub const FLICKER_AMP_A: f32 = 0.08;
pub const FLICKER_FREQ_B: f32 = 3.3;
pub const FLICKER_AMP_B: f32 = 0.05;

// Background camera
pub const CAM_FOVY_DEG: f32 = 60.0;
pub const CAM_EYE_Y: f32 = 3.2;
pub const CAM_IDLE_Z: f32 = 8.0;
pub const CAM_IDLE_DRIFT: f32 = 0.3;
pub const CAM_ZOOM_Z: f32 = 4.2;
pub const CAM_ZOOM_Y: f32 = 1.2;
pub const CAM_ZOOM_FOVY_DEG: f32 = 52.0;
pub const CAM_NEAR: f32 = 0.1;
pub const CAM_FAR: f32 = 200.0;

// ---------------- Comet ----------------

pub const COMET_SPEED: f32 = 0.35; // progress per second
pub const COMET_TRAIL_LEN: usize = 60;
pub const COMET_FRAME_W: f32 = 10.0;
pub const COMET_FRAME_H: f32 = 6.0;
pub const COMET_EDGE_X: f32 = COMET_FRAME_W * 0.7;
pub const COMET_MID_X: f32 = COMET_FRAME_W * 0.2;
pub const COMET_Y1_MIN: f32 = -COMET_FRAME_H * 0.2;
pub const COMET_Y1_MAX: f32 = COMET_FRAME_H * 0.25;
pub const COMET_Y2_MIN: f32 = -COMET_FRAME_H * 0.3;
pub const COMET_Y2_MAX: f32 = COMET_FRAME_H * 0.3;
pub const COMET_Y3_MIN: f32 = -COMET_FRAME_H * 0.25;
pub const COMET_Y3_MAX: f32 = COMET_FRAME_H * 0.2;
pub const COMET_PAUSE_MIN: f32 = 0.4;
pub const COMET_PAUSE_MAX: f32 = 1.2;
pub const COMET_HEAD_SCALE_START: f32 = 0.9;
pub const COMET_HEAD_SCALE_END: f32 = 0.4;
pub const COMET_TRAIL_OPACITY_START: f32 = 0.95;
pub const COMET_TRAIL_OPACITY_END: f32 = 0.1;
pub const COMET_CAM_Z: f32 = 10.0;
pub const COMET_FOVY_DEG: f32 = 35.0;
pub const COMET_COLOR: u32 = 0x00fff7;

// ---------------- Floating sprites ----------------

pub const SPRITE_COUNT: usize = 10;
pub const SPRITE_SIZE_MIN: f32 = 0.6;
pub const SPRITE_SIZE_SPAN: f32 = 1.8;
pub const SPRITE_SPAWN_X: f32 = 15.0; // half extents
pub const SPRITE_SPAWN_Y: f32 = 10.0;
pub const SPRITE_Z_NEAR: f32 = -5.0;
pub const SPRITE_Z_SPAN: f32 = -15.0;
pub const SPRITE_AMP_MIN: f32 = 0.4;
pub const SPRITE_AMP_SPAN: f32 = 0.8;
pub const SPRITE_SPEED_MIN: f32 = 0.3;
pub const SPRITE_SPEED_SPAN: f32 = 0.8;
pub const SPRITE_DRIFT_MAX: f32 = 0.6; // world units per second
pub const SPRITE_BOB_AMP: f32 = 0.25;
pub const SPRITE_WRAP_X: f32 = 10.0;
pub const SPRITE_OPACITY: f32 = 0.9;
pub const SPRITE_CAM_Z: f32 = 15.0;
pub const SPRITE_FOVY_DEG: f32 = 60.0;
pub const SPRITE_YAW_SWING_DEG: f32 = 6.0;
pub const SPRITE_PITCH_SWING_DEG: f32 = 4.0;
pub const SPRITE_ROT_EASE: f32 = 0.06;

// ---------------- Cursor reticle ----------------

// Smoothing time constant (seconds); approximates the original 0.18s ease-out.
pub const CURSOR_TAU: f32 = 0.06;
pub const CURSOR_PRESS_SCALE: f32 = 0.9;
pub const CURSOR_PRESS_HALF_SEC: f32 = 0.12;
pub const CURSOR_VIEWPORT_MARGIN: f32 = 4.0;

// ---------------- Boot / console timelines ----------------

pub const BOOT_DURATION_MS: f32 = 2600.0;
pub const BOOT_BLOCKS: usize = 4;
pub const BOOT_PROMPT_LEAD_MS: f32 = 700.0;
pub const TRANSITION_MS: i32 = 1200;

pub const BOOT_LOG_1: &str = "> ACCESSING PORTFOLIO MAINFRAME\u{2026}";
pub const BOOT_LOG_2: &str = "> IDENTIFYING VISITOR\u{2026}";
pub const BOOT_LOG_1_START_MS: f32 = 100.0;
pub const BOOT_LOG_2_START_MS: f32 = 1200.0;
pub const BOOT_LOG_CHAR_MS: f32 = 20.0;
pub const BOOT_LABEL: &str = "LOADING PORTFOLIO\u{2026}";
pub const BOOT_LABEL_DONE: &str = "PROCESS COMPLETED";
pub const BOOT_LABEL_START_MS: f32 = 1200.0;
pub const BOOT_LABEL_CHAR_MS: f32 = 30.0;

pub const CONSOLE_LINE_1: &str = "Hi,";
pub const CONSOLE_LINE_2: &str = "Admin is currently offline.";
pub const CONSOLE_LINE_1_START_MS: f32 = 300.0;
pub const CONSOLE_CHAR_MS: f32 = 35.0;
pub const CONSOLE_LINE_GAP_MS: f32 = 350.0;
pub const CONSOLE_PROMPT_GAP_MS: f32 = 300.0;

// ---------------- Nav scramble ----------------

pub const SCRAMBLE_HOVER_MS: f32 = 700.0;
pub const SCRAMBLE_CLICK_MS: f32 = 900.0;

// ---------------- Frame loop ----------------

// Largest dt a single tick may consume; throttled tabs advance in one clamped step.
pub const MAX_FRAME_DT: f32 = 0.05;
