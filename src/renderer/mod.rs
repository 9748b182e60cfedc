//! Rendering surface contract
//!
//! The simulation draws through the [`Surface`] trait. On the web it is backed
//! by a 2D canvas context; headless runs and tests record into a
//! [`CommandBuffer`].

pub mod commands;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use commands::{CommandBuffer, DrawCommand};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::HUE_RANGE;

/// An sRGB color with straight alpha in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }

    /// Same color with a different alpha (clamped to [0, 1])
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS color string, e.g. `rgba(0,200,50,0.588)`
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a)
    }

    /// Fully saturated, full brightness color for a hue in [0, HUE_RANGE)
    pub fn from_hue(hue: f32) -> Self {
        let h = (hue / HUE_RANGE).rem_euclid(1.0) * 6.0;
        let sector = h.floor();
        let f = h - sector;
        let rise = (f * 255.0).round() as u8;
        let fall = ((1.0 - f) * 255.0).round() as u8;

        match sector as u8 {
            0 => Self::rgb(255, rise, 0),
            1 => Self::rgb(fall, 255, 0),
            2 => Self::rgb(0, 255, rise),
            3 => Self::rgb(0, fall, 255),
            4 => Self::rgb(rise, 0, 255),
            _ => Self::rgb(255, 0, fall),
        }
    }
}

/// Filled badge shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Circle; `size` is the diameter
    Circle,
    /// Axis-aligned square; `size` is the side length
    Square,
}

/// Drawing primitives consumed by the widget
pub trait Surface {
    /// Drawable size in pixels
    fn size(&self) -> Vec2;

    /// Wash the whole surface with a (usually translucent) color
    fn fade(&mut self, color: Rgba);

    /// Draw text horizontally centered on `pos`
    fn draw_text(&mut self, content: &str, pos: Vec2, size: f32, color: Rgba);

    /// Draw a filled shape centered on `center`, without outline
    fn draw_filled_shape(&mut self, kind: ShapeKind, center: Vec2, size: f32, color: Rgba);

    /// Draw a round point of the given thickness
    fn draw_point(&mut self, pos: Vec2, color: Rgba, thickness: f32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_primaries() {
        assert_eq!(Rgba::from_hue(0.0), Rgba::rgb(255, 0, 0));
        assert_eq!(Rgba::from_hue(HUE_RANGE / 3.0), Rgba::rgb(0, 255, 0));
        assert_eq!(Rgba::from_hue(HUE_RANGE * 2.0 / 3.0), Rgba::rgb(0, 0, 255));
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(Rgba::from_hue(HUE_RANGE), Rgba::from_hue(0.0));
    }

    #[test]
    fn test_with_alpha_clamps() {
        let c = Rgba::rgb(1, 2, 3);
        assert_eq!(c.with_alpha(-0.5).a, 0.0);
        assert_eq!(c.with_alpha(3.0).a, 1.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_css() {
        assert_eq!(Rgba::rgb(0, 200, 50).with_alpha(0.5).to_css(), "rgba(0,200,50,0.500)");
    }
}
