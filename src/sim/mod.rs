//! Widget simulation
//!
//! Score state, tier selection and the fireworks particle system. Nothing in
//! here touches the browser: drawing goes through [`crate::renderer::Surface`]
//! and loop control through [`crate::platform::FrameController`].

pub mod firework;
pub mod fireworks;
pub mod particle;
pub mod score;
pub mod state;
pub mod tick;

pub use firework::Firework;
pub use fireworks::{FireworksManager, SpawnPolicy};
pub use particle::{Particle, ParticleKind};
pub use score::{ScoreState, ScoreUpdate, Tier};
pub use state::WidgetState;
pub use tick::tick;
