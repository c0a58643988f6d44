//! Camera state shared by the render components.
//!
//! Platform-free so the math is testable on the host; the web frontend feeds
//! the matrices into its uniform buffers.

use glam::{Mat4, Vec3};

/// Right-handed perspective camera.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Update the aspect ratio from surface pixel dimensions.
    ///
    /// Zero-sized surfaces are skipped so a mid-resize frame can never poison
    /// the projection with NaN or infinity. Returns whether an update happened.
    pub fn set_aspect_from(&mut self, width: u32, height: u32) -> bool {
        match aspect_for(width, height) {
            Some(a) => {
                self.aspect = a;
                true
            }
            None => false,
        }
    }
}

/// Aspect ratio for a surface, or `None` when either dimension is zero.
#[inline]
pub fn aspect_for(width: u32, height: u32) -> Option<f32> {
    if width == 0 || height == 0 {
        return None;
    }
    Some(width as f32 / height as f32)
}
