//! Single physical point of a firework
//!
//! A particle is either the rising emitter (the rocket) or one of the
//! fragments thrown out when the rocket explodes.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::polar_to_cartesian;
use crate::renderer::{Rgba, Surface};

/// What role a particle plays in its firework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    /// Rising rocket: no drag, never decays
    Emitter,
    /// Post-explosion piece: drag, decaying lifespan
    Fragment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Force accumulator, cleared after every update
    pub acc: Vec2,
    pub hue: f32,
    pub kind: ParticleKind,
    /// Only meaningful for fragments
    pub lifespan: f32,
}

impl Particle {
    pub fn new<R: Rng>(pos: Vec2, hue: f32, kind: ParticleKind, rng: &mut R) -> Self {
        let vel = match kind {
            ParticleKind::Emitter => Vec2::new(
                0.0,
                -rng.random_range(EMITTER_SPEED_MIN..EMITTER_SPEED_MAX),
            ),
            ParticleKind::Fragment => {
                let theta = rng.random_range(0.0..std::f32::consts::TAU);
                let speed = rng.random_range(FRAGMENT_SPEED_MIN..FRAGMENT_SPEED_MAX);
                polar_to_cartesian(speed, theta)
            }
        };

        Self {
            pos,
            vel,
            acc: Vec2::ZERO,
            hue,
            kind,
            lifespan: LIFESPAN_START,
        }
    }

    pub fn emitter<R: Rng>(pos: Vec2, hue: f32, rng: &mut R) -> Self {
        Self::new(pos, hue, ParticleKind::Emitter, rng)
    }

    pub fn fragment<R: Rng>(pos: Vec2, hue: f32, rng: &mut R) -> Self {
        Self::new(pos, hue, ParticleKind::Fragment, rng)
    }

    #[inline]
    pub fn is_emitter(&self) -> bool {
        self.kind == ParticleKind::Emitter
    }

    /// Accumulate a force for the next update
    pub fn apply_force(&mut self, force: Vec2) {
        self.acc += force;
    }

    /// Integrate one frame
    pub fn update(&mut self) {
        if self.kind == ParticleKind::Fragment {
            self.vel *= FRAGMENT_DRAG;
            self.lifespan -= LIFESPAN_DECAY;
        }
        self.vel += self.acc;
        self.pos += self.vel;
        self.acc = Vec2::ZERO;
    }

    /// Fragment has burned out; emitters are never done
    pub fn is_done(&self) -> bool {
        self.kind == ParticleKind::Fragment && self.lifespan < 0.0
    }

    /// Opacity in [0, 1]: emitters are opaque, fragments fade with lifespan
    pub fn opacity(&self) -> f32 {
        match self.kind {
            ParticleKind::Emitter => 1.0,
            ParticleKind::Fragment => (self.lifespan / LIFESPAN_START).clamp(0.0, 1.0),
        }
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let thickness = match self.kind {
            ParticleKind::Emitter => EMITTER_THICKNESS,
            ParticleKind::Fragment => FRAGMENT_THICKNESS,
        };
        let color = Rgba::from_hue(self.hue).with_alpha(self.opacity());
        surface.draw_point(self.pos, color, thickness);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{CommandBuffer, DrawCommand};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    #[test]
    fn test_emitter_launches_upward() {
        let mut rng = rng();
        for _ in 0..100 {
            let p = Particle::emitter(Vec2::new(10.0, 300.0), 42.0, &mut rng);
            assert_eq!(p.vel.x, 0.0);
            assert!(p.vel.y >= -EMITTER_SPEED_MAX && p.vel.y <= -EMITTER_SPEED_MIN);
            assert_eq!(p.acc, Vec2::ZERO);
        }
    }

    #[test]
    fn test_fragment_speed_range() {
        let mut rng = rng();
        for _ in 0..100 {
            let p = Particle::fragment(Vec2::ZERO, 42.0, &mut rng);
            let speed = p.vel.length();
            assert!(speed >= FRAGMENT_SPEED_MIN - 1e-4 && speed <= FRAGMENT_SPEED_MAX + 1e-4);
        }
    }

    #[test]
    fn test_forces_accumulate() {
        let mut p = Particle::emitter(Vec2::ZERO, 0.0, &mut rng());
        p.apply_force(GRAVITY);
        p.apply_force(GRAVITY);
        assert_eq!(p.acc, GRAVITY * 2.0);
    }

    #[test]
    fn test_emitter_update_integrates_and_clears_acc() {
        let mut p = Particle::emitter(Vec2::new(0.0, 100.0), 0.0, &mut rng());
        let vel = p.vel;
        p.apply_force(GRAVITY);
        p.update();

        assert_eq!(p.vel, vel + GRAVITY);
        assert_eq!(p.pos, Vec2::new(0.0, 100.0) + (vel + GRAVITY));
        assert_eq!(p.acc, Vec2::ZERO);
        assert_eq!(p.lifespan, LIFESPAN_START);
    }

    #[test]
    fn test_fragment_drag_applies_before_force() {
        let mut p = Particle::fragment(Vec2::ZERO, 0.0, &mut rng());
        let vel = p.vel;
        p.apply_force(GRAVITY);
        p.update();

        let expected = vel * FRAGMENT_DRAG + GRAVITY;
        assert!((p.vel - expected).length() < 1e-5);
        assert!((p.pos - expected).length() < 1e-5);
        assert_eq!(p.lifespan, LIFESPAN_START - LIFESPAN_DECAY);
    }

    #[test]
    fn test_fragment_done_exactly_when_lifespan_negative() {
        let mut p = Particle::fragment(Vec2::ZERO, 0.0, &mut rng());
        let mut updates = 0;
        while !p.is_done() {
            let before = p.lifespan;
            p.update();
            updates += 1;
            assert_eq!(p.lifespan, before - LIFESPAN_DECAY);
            assert_eq!(p.is_done(), p.lifespan < 0.0);
        }
        // 255 - 4 * 63 = 3, 255 - 4 * 64 = -1
        assert_eq!(updates, 64);
        assert_eq!(p.lifespan, -1.0);
    }

    #[test]
    fn test_emitter_never_done() {
        let mut p = Particle::emitter(Vec2::ZERO, 0.0, &mut rng());
        for _ in 0..1000 {
            p.apply_force(GRAVITY);
            p.update();
            assert!(!p.is_done());
        }
        assert_eq!(p.lifespan, LIFESPAN_START);
    }

    #[test]
    fn test_render_thickness_and_fade() {
        let mut rng = rng();
        let mut buf = CommandBuffer::new(100.0, 100.0);
        let emitter = Particle::emitter(Vec2::ZERO, 0.0, &mut rng);
        let mut fragment = Particle::fragment(Vec2::ZERO, 0.0, &mut rng);
        fragment.lifespan = LIFESPAN_START / 2.0;

        emitter.render(&mut buf);
        fragment.render(&mut buf);

        match &buf.commands()[..] {
            [
                DrawCommand::Point { color: c1, thickness: t1, .. },
                DrawCommand::Point { color: c2, thickness: t2, .. },
            ] => {
                assert_eq!(*t1, EMITTER_THICKNESS);
                assert_eq!(c1.a, 1.0);
                assert_eq!(*t2, FRAGMENT_THICKNESS);
                assert!((c2.a - 0.5).abs() < 1e-6);
            }
            other => panic!("unexpected commands: {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn prop_fragment_lifespan_strictly_decreases(seed in any::<u64>(), steps in 1usize..64) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut p = Particle::fragment(Vec2::ZERO, 10.0, &mut rng);
            for _ in 0..steps {
                let before = p.lifespan;
                p.apply_force(GRAVITY);
                p.update();
                prop_assert_eq!(p.lifespan, before - LIFESPAN_DECAY);
            }
            prop_assert!(!p.is_done());
        }
    }
}
