//! Cursor reticle follow state: exponential approach toward the pointer and
//! the press pulse ramp.

use crate::constants::*;
use crate::parallax::lerp;
use glam::Vec2;

#[derive(Clone, Copy, Debug)]
pub struct CursorFollow {
    pos: Vec2,
    target: Vec2,
}

impl CursorFollow {
    pub fn new(initial: Vec2) -> Self {
        Self { pos: initial, target: initial }
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// One smoothing step; converges exponentially with time constant
    /// [`CURSOR_TAU`] regardless of frame pacing.
    pub fn step(&mut self, dt: f32) {
        let alpha = 1.0 - (-dt.max(0.0) / CURSOR_TAU).exp();
        self.pos += (self.target - self.pos) * alpha;
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    /// Keep both the position and the target inside the viewport, with a
    /// small margin, after a resize.
    pub fn clamp_into(&mut self, width: f32, height: f32, margin: f32) {
        let max = Vec2::new((width - margin).max(margin), (height - margin).max(margin));
        self.pos = self.pos.clamp(Vec2::splat(margin), max);
        self.target = self.target.clamp(Vec2::splat(margin), max);
    }
}

/// Reticle scale as a function of seconds since pointer-down: a quick dip to
/// [`CURSOR_PRESS_SCALE`] and back (yoyo).
pub fn press_pulse_scale(since_press: f32) -> f32 {
    if since_press < 0.0 {
        return 1.0;
    }
    if since_press < CURSOR_PRESS_HALF_SEC {
        lerp(1.0, CURSOR_PRESS_SCALE, since_press / CURSOR_PRESS_HALF_SEC)
    } else if since_press < CURSOR_PRESS_HALF_SEC * 2.0 {
        lerp(
            CURSOR_PRESS_SCALE,
            1.0,
            since_press / CURSOR_PRESS_HALF_SEC - 1.0,
        )
    } else {
        1.0
    }
}
