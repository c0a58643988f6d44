//! Drifting HUD glyph sprites.
//!
//! Spawn parameters are drawn once from a seeded rng; positions at any time
//! are closed-form in `t`, so variable frame steps cannot compound drift.

use crate::constants::*;
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug)]
pub struct SpriteSpawn {
    pub origin: Vec3,
    pub size: f32,
    pub color_index: usize,
    pub amp: f32,
    pub speed: f32,
    pub phase: f32,
    pub drift: f32,
}

#[derive(Clone, Debug)]
pub struct SpriteField {
    spawns: Vec<SpriteSpawn>,
}

impl SpriteField {
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let spawns = (0..count)
            .map(|i| SpriteSpawn {
                origin: Vec3::new(
                    (rng.gen_range(0.0..1.0) - 0.5) * SPRITE_SPAWN_X * 2.0,
                    (rng.gen_range(0.0..1.0) - 0.5) * SPRITE_SPAWN_Y * 2.0,
                    SPRITE_Z_NEAR + rng.gen_range(0.0..1.0) * SPRITE_Z_SPAN,
                ),
                size: SPRITE_SIZE_MIN + rng.gen_range(0.0..SPRITE_SIZE_SPAN),
                color_index: i,
                amp: SPRITE_AMP_MIN + rng.gen_range(0.0..SPRITE_AMP_SPAN),
                speed: SPRITE_SPEED_MIN + rng.gen_range(0.0..SPRITE_SPEED_SPAN),
                phase: rng.gen_range(0.0..std::f32::consts::TAU),
                drift: rng.gen_range(-SPRITE_DRIFT_MAX..SPRITE_DRIFT_MAX),
            })
            .collect();
        Self { spawns }
    }

    pub fn len(&self) -> usize {
        self.spawns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spawns.is_empty()
    }

    pub fn spawns(&self) -> &[SpriteSpawn] {
        &self.spawns
    }

    /// Position of sprite `i` at time `t`: bob on Y, drift and wrap on X.
    pub fn position_at(&self, i: usize, t: f32) -> Vec3 {
        let s = &self.spawns[i];
        let bob = (t * s.speed + s.phase).sin() * SPRITE_BOB_AMP * s.amp;
        Vec3::new(
            wrap_x(s.origin.x + s.drift * t),
            s.origin.y + bob,
            s.origin.z,
        )
    }
}

/// Wrap into [-SPRITE_WRAP_X, SPRITE_WRAP_X] so sprites never leave the frame.
#[inline]
pub fn wrap_x(x: f32) -> f32 {
    (x + SPRITE_WRAP_X).rem_euclid(SPRITE_WRAP_X * 2.0) - SPRITE_WRAP_X
}
