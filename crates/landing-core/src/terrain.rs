//! Wireframe mountain ridges: a fixed-topology grid with static peaks and a
//! per-frame ripple.
//!
//! The base positions are computed once and never written again; the ripple
//! is a pure function of `(base x, base z, t)` so displacement can never
//! accumulate drift across frames.

use crate::constants::*;
use crate::GeometryError;
use glam::Vec3;

/// One mountain layer: immutable base geometry plus ripple sampling.
#[derive(Clone, Debug)]
pub struct RidgeGrid {
    cols: u32,
    rows: u32,
    base: Vec<Vec3>,
}

impl RidgeGrid {
    /// Build a `cols`×`rows`-segment grid spanning `width`×`depth` world
    /// units, standing in the XZ plane at `z_offset`, with peak heights from
    /// the two-sinusoid silhouette keyed by `seed`.
    pub fn new(
        width: f32,
        depth: f32,
        cols: u32,
        rows: u32,
        amplitude: f32,
        seed: f32,
        z_offset: f32,
    ) -> Result<Self, GeometryError> {
        if cols == 0 || rows == 0 {
            return Err(GeometryError::DegenerateGrid);
        }
        let mut base = Vec::with_capacity(((cols + 1) * (rows + 1)) as usize);
        for iy in 0..=rows {
            // plane-local coordinate before the grid is stood up
            let py = depth * (iy as f32 / rows as f32 - 0.5);
            for ix in 0..=cols {
                let px = width * (ix as f32 / cols as f32 - 0.5);
                let h = peak_height(px, py, width, depth, seed);
                base.push(Vec3::new(px, RIDGE_BASE_Y + h * amplitude, z_offset - py));
            }
        }
        Ok(Self { cols, rows, base })
    }

    /// Build one of the stock background layers.
    pub fn layer(index: usize) -> Result<Self, GeometryError> {
        let (z, amp, seed) = RIDGE_LAYERS[index % RIDGE_LAYERS.len()];
        Self::new(RIDGE_WIDTH, RIDGE_DEPTH, RIDGE_COLS, RIDGE_ROWS, amp, seed, z)
    }

    pub fn vertex_count(&self) -> usize {
        self.base.len()
    }

    pub fn base_positions(&self) -> &[Vec3] {
        &self.base
    }

    /// Write rippled positions for time `phase_t` into `out`.
    ///
    /// `out` is cleared first; the base buffer is untouched. Calling twice
    /// with the same `phase_t` yields identical output.
    pub fn displace_into(&self, phase_t: f32, out: &mut Vec<Vec3>) {
        out.clear();
        out.reserve(self.base.len());
        for p in &self.base {
            let wave = (phase_t * RIPPLE_FREQ + p.x * RIPPLE_KX + p.z * RIPPLE_KZ).sin() * RIPPLE_AMP;
            out.push(Vec3::new(p.x, p.y + wave, p.z));
        }
    }

    /// Line-list indices tracing the wireframe: both grid directions plus one
    /// diagonal per cell, matching a triangulated plane's edge set.
    pub fn wireframe_indices(&self) -> Vec<u32> {
        let stride = self.cols + 1;
        let mut indices = Vec::new();
        for iy in 0..=self.rows {
            for ix in 0..=self.cols {
                let i = iy * stride + ix;
                if ix < self.cols {
                    indices.extend_from_slice(&[i, i + 1]);
                }
                if iy < self.rows {
                    indices.extend_from_slice(&[i, i + stride]);
                }
                if ix < self.cols && iy < self.rows {
                    indices.extend_from_slice(&[i, i + stride + 1]);
                }
            }
        }
        indices
    }
}

/// Static silhouette height for an undisplaced plane-local vertex.
fn peak_height(px: f32, py: f32, width: f32, depth: f32, seed: f32) -> f32 {
    let nx = (px + width * 0.5 + seed) * PEAK_NX_SCALE;
    let ny = (py + depth * 0.5 + seed) * PEAK_NY_SCALE;
    nx.sin() * (ny * 1.3).cos() + (nx * 0.35 + ny * 0.6).sin() * 0.6
}
