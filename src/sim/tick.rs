//! Per-frame tick
//!
//! Reads the score, picks a tier, draws the feedback and drives the
//! fireworks. Runs to completion once per animation frame.

use glam::Vec2;

use super::score::Tier;
use super::state::WidgetState;
use crate::consts::*;
use crate::platform::FrameController;
use crate::renderer::{Rgba, ShapeKind, Surface};

const TOP_COLOR: Rgba = Rgba::rgb(0, 200, 50);
const MID_COLOR: Rgba = Rgba::rgb(255, 181, 35);
const LOW_COLOR: Rgba = Rgba::rgb(200, 0, 0);
const UNSCORED_COLOR: Rgba = Rgba::gray(150);
const SCORE_COLOR: Rgba = Rgba::gray(50);
const BADGE_ALPHA: f32 = 150.0 / 255.0;

/// Advance and draw one frame. Returns the tier that was drawn.
///
/// In the unscored tier the frame loop is asked to pause; the message
/// handler starts it again when a score arrives.
pub fn tick<S, F>(state: &mut WidgetState, surface: &mut S, frame: &mut F) -> Tier
where
    S: Surface + ?Sized,
    F: FrameController + ?Sized,
{
    let size = surface.size();
    let center = size / 2.0;
    let labels = state.settings.labels();
    let score = state.score;

    surface.fade(Rgba::gray(0).with_alpha(state.settings.trail_alpha));

    let tier = score.tier();
    let message_pos = center - Vec2::new(0.0, TEXT_OFFSET);
    match tier {
        Tier::Top => {
            surface.draw_text(labels.top, message_pos, TIER_TEXT_SIZE, TOP_COLOR);
            if state.fireworks.maybe_spawn(size.x, size.y) {
                log::trace!("firework launched ({} active)", state.fireworks.len());
            }
        }
        Tier::Mid => surface.draw_text(labels.mid, message_pos, TIER_TEXT_SIZE, MID_COLOR),
        Tier::Low => surface.draw_text(labels.low, message_pos, TIER_TEXT_SIZE, LOW_COLOR),
        Tier::Unscored => {
            let text = if score.has_score() {
                labels.final_score_line(score.final_score, score.max_score)
            } else {
                labels.waiting.to_string()
            };
            surface.draw_text(&text, center, TIER_TEXT_SIZE, UNSCORED_COLOR);
        }
    }

    surface.draw_text(
        &labels.score_line(score.final_score, score.max_score),
        center + Vec2::new(0.0, TEXT_OFFSET),
        SCORE_TEXT_SIZE,
        SCORE_COLOR,
    );

    let badge_pos = center + Vec2::new(0.0, BADGE_OFFSET);
    match tier {
        Tier::Top => {
            surface.draw_filled_shape(
                ShapeKind::Circle,
                badge_pos,
                BADGE_SIZE,
                TOP_COLOR.with_alpha(BADGE_ALPHA),
            );
            state.fireworks.advance(GRAVITY);
            state.fireworks.render(surface);
        }
        Tier::Mid => {
            surface.draw_filled_shape(
                ShapeKind::Square,
                badge_pos,
                BADGE_SIZE,
                MID_COLOR.with_alpha(BADGE_ALPHA),
            );
            state.fireworks.clear();
        }
        Tier::Low => state.fireworks.clear(),
        Tier::Unscored => {
            state.fireworks.clear();
            frame.pause();
        }
    }

    tier
}
