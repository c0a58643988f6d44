//! Catmull-Rom sampling for the three-point comet paths.

use glam::Vec3;

/// Uniform Catmull-Rom interpolation between `p1` and `p2` at `u` in [0, 1].
#[inline]
pub fn catmull_rom(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, u: f32) -> Vec3 {
    let u2 = u * u;
    let u3 = u2 * u;
    (p1 * 2.0
        + (p2 - p0) * u
        + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * u2
        + ((p1 - p2) * 3.0 + p3 - p0) * u3)
        * 0.5
}

/// A smooth curve through three control points, with clamped phantom
/// endpoints so the curve starts and ends exactly on the outer points.
#[derive(Clone, Copy, Debug)]
pub struct ThreePointPath {
    points: [Vec3; 3],
}

impl ThreePointPath {
    pub fn new(points: [Vec3; 3]) -> Self {
        Self { points }
    }

    pub fn start(&self) -> Vec3 {
        self.points[0]
    }

    pub fn end(&self) -> Vec3 {
        self.points[2]
    }

    /// Sample the curve at `t` in [0, 1]; out-of-range values clamp.
    pub fn position(&self, t: f32) -> Vec3 {
        let t = t.clamp(0.0, 1.0);
        let [a, b, c] = self.points;
        let phantom_start = a * 2.0 - b;
        let phantom_end = c * 2.0 - b;
        if t < 0.5 {
            catmull_rom(phantom_start, a, b, c, t * 2.0)
        } else {
            catmull_rom(a, b, c, phantom_end, t * 2.0 - 1.0)
        }
    }
}
