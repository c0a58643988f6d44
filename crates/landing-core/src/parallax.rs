//! Pointer-driven parallax: clamped unit-square UV mapped to small-angle
//! rotation targets, eased toward every frame by the render loop.

/// Targets the camera rig converges toward. Angles in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTarget {
    pub yaw: f32,
    pub pitch: f32,
    pub lateral: f32,
}

#[inline]
pub fn lerp(current: f32, target: f32, k: f32) -> f32 {
    current + (target - current) * k
}

/// Clamp raw normalized coordinates into the unit square.
#[inline]
pub fn clamp_uv(u: f32, v: f32) -> [f32; 2] {
    [u.clamp(0.0, 1.0), v.clamp(0.0, 1.0)]
}

/// Map a (possibly out-of-bounds) surface UV to rotation/offset targets.
///
/// The swing arguments are the full range across the surface; the resulting
/// targets are bounded by half the swing on each side. UV (0.5, 0.5) maps to
/// all-zero targets, (0, 0) to `(-yaw_max, +pitch_max)`.
pub fn target_from_uv(
    uv: [f32; 2],
    yaw_swing_deg: f32,
    pitch_swing_deg: f32,
    lateral_swing: f32,
) -> PointerTarget {
    let [u, v] = clamp_uv(uv[0], uv[1]);
    PointerTarget {
        yaw: (u - 0.5) * yaw_swing_deg.to_radians(),
        pitch: (0.5 - v) * pitch_swing_deg.to_radians(),
        lateral: (u - 0.5) * lateral_swing,
    }
}

/// Eased camera rotation/offset state.
///
/// `step` applies one frame of linear interpolation toward the target, which
/// converges exponentially over successive frames. Deliberately not
/// frame-rate independent.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParallaxRig {
    pub yaw: f32,
    pub pitch: f32,
    pub lateral: f32,
}

impl ParallaxRig {
    pub fn step(&mut self, target: &PointerTarget, rot_ease: f32, pos_ease: f32) {
        self.yaw = lerp(self.yaw, target.yaw, rot_ease);
        self.pitch = lerp(self.pitch, target.pitch, rot_ease);
        self.lateral = lerp(self.lateral, target.lateral, pos_ease);
    }
}
