//! Firework: a rising emitter that bursts into fragments at its apex

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::particle::Particle;
use crate::consts::*;
use crate::renderer::Surface;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Firework {
    /// Shared by the emitter and every fragment
    pub hue: f32,
    pub emitter: Particle,
    pub fragments: Vec<Particle>,
    /// Set once when the emitter reaches its apex, never cleared
    pub exploded: bool,
}

impl Firework {
    /// Launch a new firework from `origin` (normally the canvas floor)
    pub fn new<R: Rng>(origin: Vec2, rng: &mut R) -> Self {
        let hue = rng.random_range(0.0..HUE_RANGE);
        Self {
            hue,
            emitter: Particle::emitter(origin, hue, rng),
            fragments: Vec::new(),
            exploded: false,
        }
    }

    /// Advance one frame.
    ///
    /// A rising emitter climbs first and bursts the moment its vertical
    /// velocity stops being negative. Then every live fragment falls and
    /// fades, including ones born this frame.
    pub fn update<R: Rng>(&mut self, gravity: Vec2, rng: &mut R) {
        if !self.exploded {
            self.emitter.apply_force(gravity);
            self.emitter.update();

            if self.emitter.vel.y >= 0.0 {
                self.explode(rng);
            }
        }

        self.fragments.retain_mut(|fragment| {
            fragment.apply_force(gravity);
            fragment.update();
            !fragment.is_done()
        });
    }

    fn explode<R: Rng>(&mut self, rng: &mut R) {
        self.exploded = true;
        let origin = self.emitter.pos;
        let hue = self.hue;
        self.fragments
            .extend((0..FRAGMENT_COUNT).map(|_| Particle::fragment(origin, hue, rng)));
        log::trace!("firework burst at ({:.1}, {:.1})", origin.x, origin.y);
    }

    /// Exploded and every fragment has burned out
    pub fn is_done(&self) -> bool {
        self.exploded && self.fragments.is_empty()
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        if !self.exploded {
            self.emitter.render(surface);
        }
        for fragment in &self.fragments {
            fragment.render(surface);
        }
    }
}
