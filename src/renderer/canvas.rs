//! Canvas 2D backend (WASM only)

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Rgba, ShapeKind, Surface};

/// [`Surface`] drawing into an HTML canvas through its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("2d context has unexpected type"))?;
        ctx.set_text_align("center");
        Ok(Self { canvas, ctx })
    }

    /// Resize the backing store, then paint it white
    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        // Setting the size resets context state
        self.ctx.set_text_align("center");
        self.fade(Rgba::gray(255));
    }

    fn filled_circle(&self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.ctx.fill();
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn fade(&mut self, color: Rgba) {
        let size = self.size();
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn draw_text(&mut self, content: &str, pos: Vec2, size: f32, color: Rgba) {
        self.ctx.set_font(&format!("{}px sans-serif", size));
        self.ctx.set_fill_style_str(&color.to_css());
        if let Err(e) = self.ctx.fill_text(content, pos.x as f64, pos.y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }

    fn draw_filled_shape(&mut self, kind: ShapeKind, center: Vec2, size: f32, color: Rgba) {
        match kind {
            ShapeKind::Circle => self.filled_circle(center, size / 2.0, color),
            ShapeKind::Square => {
                let half = size / 2.0;
                self.ctx.set_fill_style_str(&color.to_css());
                self.ctx.fill_rect(
                    (center.x - half) as f64,
                    (center.y - half) as f64,
                    size as f64,
                    size as f64,
                );
            }
        }
    }

    fn draw_point(&mut self, pos: Vec2, color: Rgba, thickness: f32) {
        self.filled_circle(pos, thickness / 2.0, color);
    }
}
