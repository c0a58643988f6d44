//! The streaking comet: a point moving along a random three-point curve,
//! leaving a fixed-length fading trail, pausing between crossings.

use crate::constants::*;
use crate::curve::ThreePointPath;
use crate::parallax::lerp;
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Fixed-capacity history of recent head positions, newest first.
///
/// The length never changes once built: pushing drops the oldest sample.
#[derive(Clone, Debug)]
pub struct Trail {
    samples: VecDeque<Vec3>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize, fill: Vec3) -> Self {
        let capacity = capacity.max(1);
        let mut samples = VecDeque::with_capacity(capacity);
        samples.resize(capacity, fill);
        Self { samples, capacity }
    }

    pub fn push(&mut self, p: Vec3) {
        self.samples.push_front(p);
        self.samples.truncate(self.capacity);
    }

    /// Reset every sample to `fill`, keeping the capacity.
    pub fn refill(&mut self, fill: Vec3) {
        self.samples.clear();
        self.samples.resize(self.capacity, fill);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec3> {
        self.samples.iter()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CometPhase {
    Traveling,
    Pausing { remaining: f32 },
}

pub struct Comet {
    rng: SmallRng,
    path: ThreePointPath,
    t: f32,
    phase: CometPhase,
    // Side the NEXT path will enter from; flips every cycle.
    enter_left: bool,
    trail: Trail,
}

impl Comet {
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let enter_left: bool = rng.gen();
        let path = random_path(&mut rng, enter_left);
        let trail = Trail::new(COMET_TRAIL_LEN, path.start());
        Self {
            rng,
            path,
            t: 0.0,
            phase: CometPhase::Traveling,
            enter_left: !enter_left,
            trail,
        }
    }

    /// Advance the state machine by `dt` seconds (clamped to one large step).
    pub fn tick(&mut self, dt: f32) {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        match self.phase {
            CometPhase::Pausing { remaining } => {
                let left = remaining - dt;
                if left <= 0.0 {
                    self.begin_path();
                } else {
                    self.phase = CometPhase::Pausing { remaining: left };
                }
            }
            CometPhase::Traveling => {
                self.t = (self.t + dt * COMET_SPEED).min(1.0);
                self.trail.push(self.path.position(self.t));
                if self.t >= 1.0 {
                    let pause = self.rng.gen_range(COMET_PAUSE_MIN..COMET_PAUSE_MAX);
                    self.phase = CometPhase::Pausing { remaining: pause };
                }
            }
        }
    }

    fn begin_path(&mut self) {
        self.path = random_path(&mut self.rng, self.enter_left);
        log::debug!(
            "comet: new path entering from the {}",
            if self.enter_left { "left" } else { "right" }
        );
        self.enter_left = !self.enter_left;
        self.t = 0.0;
        self.trail.refill(self.path.start());
        self.phase = CometPhase::Traveling;
    }

    pub fn phase(&self) -> CometPhase {
        self.phase
    }

    pub fn is_traveling(&self) -> bool {
        matches!(self.phase, CometPhase::Traveling)
    }

    /// Progress along the current path in [0, 1].
    pub fn progress(&self) -> f32 {
        self.t
    }

    pub fn head(&self) -> Vec3 {
        self.path.position(self.t)
    }

    /// Entry point of the current path (one of the two frame edges).
    pub fn path_start(&self) -> Vec3 {
        self.path.start()
    }

    /// Head sprite scale, shrinking as the comet burns out.
    pub fn head_scale(&self) -> f32 {
        lerp(COMET_HEAD_SCALE_START, COMET_HEAD_SCALE_END, self.t)
    }

    /// Whole-trail opacity, fading as the comet burns out.
    pub fn trail_opacity(&self) -> f32 {
        lerp(COMET_TRAIL_OPACITY_START, COMET_TRAIL_OPACITY_END, self.t)
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }
}

fn random_path(rng: &mut SmallRng, enter_left: bool) -> ThreePointPath {
    let y1 = rng.gen_range(COMET_Y1_MIN..COMET_Y1_MAX);
    let y2 = rng.gen_range(COMET_Y2_MIN..COMET_Y2_MAX);
    let y3 = rng.gen_range(COMET_Y3_MIN..COMET_Y3_MAX);
    let mid_x = rng.gen_range(-COMET_MID_X..COMET_MID_X);
    let (start_x, end_x) = if enter_left {
        (-COMET_EDGE_X, COMET_EDGE_X)
    } else {
        (COMET_EDGE_X, -COMET_EDGE_X)
    };
    ThreePointPath::new([
        Vec3::new(start_x, y1, 0.0),
        Vec3::new(mid_x, y2, 0.0),
        Vec3::new(end_x, y3, 0.0),
    ])
}
