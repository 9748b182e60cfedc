//! Recording surface
//!
//! Collects draw calls instead of rasterizing them. Used by the native
//! headless runner and by tests to assert what a frame drew.

use glam::Vec2;
use serde::Serialize;

use super::{Rgba, ShapeKind, Surface};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Fade {
        color: Rgba,
    },
    Text {
        content: String,
        pos: Vec2,
        size: f32,
        color: Rgba,
    },
    Shape {
        kind: ShapeKind,
        center: Vec2,
        size: f32,
        color: Rgba,
    },
    Point {
        pos: Vec2,
        color: Rgba,
        thickness: f32,
    },
}

/// Surface that records every draw call
#[derive(Debug, Clone)]
pub struct CommandBuffer {
    size: Vec2,
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop recorded commands (call between frames)
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Text strings drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Shapes drawn, in order
    pub fn shapes(&self) -> Vec<ShapeKind> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Shape { kind, .. } => Some(*kind),
                _ => None,
            })
            .collect()
    }

    pub fn point_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Point { .. }))
            .count()
    }
}

impl Surface for CommandBuffer {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn fade(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::Fade { color });
    }

    fn draw_text(&mut self, content: &str, pos: Vec2, size: f32, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            content: content.to_string(),
            pos,
            size,
            color,
        });
    }

    fn draw_filled_shape(&mut self, kind: ShapeKind, center: Vec2, size: f32, color: Rgba) {
        self.commands.push(DrawCommand::Shape {
            kind,
            center,
            size,
            color,
        });
    }

    fn draw_point(&mut self, pos: Vec2, color: Rgba, thickness: f32) {
        self.commands.push(DrawCommand::Point {
            pos,
            color,
            thickness,
        });
    }
}
