//! Score Fireworks - a canvas score feedback widget
//!
//! Core modules:
//! - `sim`: Score state, tier selection and the fireworks particle simulation
//! - `renderer`: Rendering surface contract (canvas on web, command buffer headless)
//! - `platform`: Host boundary (inbound messages, frame loop control)
//! - `settings`: Widget configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Locale, Settings};

use glam::Vec2;

/// Widget configuration constants
pub mod consts {
    use glam::Vec2;

    /// Message type announcing a score from the host page; the `type` tag of
    /// `platform::HostMessage::ScoreResult`
    pub const SCORE_MESSAGE_TYPE: &str = "H5P_SCORE_RESULT";

    /// Downward pull applied to every particle each frame
    pub const GRAVITY: Vec2 = Vec2::new(0.0, 0.2);

    /// Emitter launch speed range (upward, pixels/frame)
    pub const EMITTER_SPEED_MIN: f32 = 8.0;
    pub const EMITTER_SPEED_MAX: f32 = 12.0;

    /// Fragment burst speed range (pixels/frame)
    pub const FRAGMENT_SPEED_MIN: f32 = 2.0;
    pub const FRAGMENT_SPEED_MAX: f32 = 10.0;
    /// Velocity multiplier applied to fragments every update (air drag)
    pub const FRAGMENT_DRAG: f32 = 0.9;
    /// Fragments per explosion
    pub const FRAGMENT_COUNT: usize = 100;

    /// Starting lifespan of a fragment
    pub const LIFESPAN_START: f32 = 255.0;
    /// Lifespan lost per update
    pub const LIFESPAN_DECAY: f32 = 4.0;

    /// Hue values lie in [0, HUE_RANGE)
    pub const HUE_RANGE: f32 = 255.0;

    /// Point thickness for rising emitters and fragments
    pub const EMITTER_THICKNESS: f32 = 4.0;
    pub const FRAGMENT_THICKNESS: f32 = 2.0;

    /// Per-frame probability of launching a firework in the top tier
    pub const FIREWORK_SPAWN_CHANCE: f64 = 0.05;

    /// Tier thresholds (percent)
    pub const TOP_TIER_PERCENT: f64 = 90.0;
    pub const MID_TIER_PERCENT: f64 = 60.0;

    /// Layout (pixels)
    pub const TIER_TEXT_SIZE: f32 = 80.0;
    pub const SCORE_TEXT_SIZE: f32 = 50.0;
    pub const TEXT_OFFSET: f32 = 50.0;
    pub const BADGE_SIZE: f32 = 150.0;
    pub const BADGE_OFFSET: f32 = 150.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_to_cartesian_length() {
        let v = polar_to_cartesian(5.0, 1.234);
        assert!((v.length() - 5.0).abs() < 1e-5);
    }
}
