//! Active firework collection
//!
//! Owns every live [`Firework`] plus the seeded RNG that drives spawning,
//! launch speeds, hues and burst directions.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::firework::Firework;
use crate::renderer::Surface;

/// How the per-frame launch decision is made
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpawnPolicy {
    /// Launch with this probability each frame (clamped to [0, 1])
    Chance(f64),
    Always,
    Never,
}

pub struct FireworksManager {
    fireworks: Vec<Firework>,
    rng: Pcg32,
    policy: SpawnPolicy,
}

impl FireworksManager {
    pub fn new(seed: u64, policy: SpawnPolicy) -> Self {
        Self {
            fireworks: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            policy,
        }
    }

    #[cfg(test)]
    pub fn policy(&self) -> SpawnPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: SpawnPolicy) {
        self.policy = policy;
    }

    /// Roll the spawn policy; on success launch a firework from a random x
    /// in `[0, width)` at `floor_y`. Returns whether one was launched.
    pub fn maybe_spawn(&mut self, width: f32, floor_y: f32) -> bool {
        let launch = match self.policy {
            SpawnPolicy::Always => true,
            SpawnPolicy::Never => false,
            SpawnPolicy::Chance(p) => self.rng.random_bool(p.clamp(0.0, 1.0)),
        };
        if !launch {
            return false;
        }

        let x = if width > 0.0 {
            self.rng.random_range(0.0..width)
        } else {
            0.0
        };
        self.spawn_at(Vec2::new(x, floor_y));
        true
    }

    /// Launch a firework from `origin`
    pub fn spawn_at(&mut self, origin: Vec2) {
        let firework = Firework::new(origin, &mut self.rng);
        self.fireworks.push(firework);
    }

    /// Update every firework and drop the finished ones
    pub fn advance(&mut self, gravity: Vec2) {
        let rng = &mut self.rng;
        self.fireworks.retain_mut(|firework| {
            firework.update(gravity, &mut *rng);
            !firework.is_done()
        });
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        for firework in &self.fireworks {
            firework.render(surface);
        }
    }

    /// Discard every firework
    pub fn clear(&mut self) {
        if !self.fireworks.is_empty() {
            log::debug!("clearing {} fireworks", self.fireworks.len());
            self.fireworks.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.fireworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fireworks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Firework> {
        self.fireworks.iter()
    }

    /// Live particles across all fireworks (rising emitters + fragments)
    pub fn particle_count(&self) -> usize {
        self.fireworks
            .iter()
            .map(|f| f.fragments.len() + usize::from(!f.exploded))
            .sum()
    }
}
