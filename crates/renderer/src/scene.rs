//! Per-frame display list.
//!
//! The simulation never touches a drawing surface directly. Each frame it
//! submits shape commands into a [`Scene`]; the attached frontend replays
//! them in submission order. Commands are already in canvas space: rotated
//! shapes are either pre-transformed polygons or carry an explicit rotation.

use crate::color::Hsb;
use glam::Vec2;

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// One drawing primitive in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Translucent full-canvas wash (used for the starfield motion trail).
    Fade { color: Hsb },
    /// Filled circle given by center and diameter.
    Circle {
        center: Vec2,
        diameter: f32,
        color: Hsb,
    },
    /// Filled ellipse, rotated about its center.
    Ellipse {
        center: Vec2,
        size: Vec2,
        rotation: f32,
        color: Hsb,
    },
    /// Axis-aligned filled rectangle (top-left corner + size).
    Rect { pos: Vec2, size: Vec2, color: Hsb },
    /// Filled convex polygon with vertices already transformed.
    Polygon { points: Vec<Vec2>, color: Hsb },
    /// Stroked point with a stroke weight in pixels.
    Point { pos: Vec2, weight: f32, color: Hsb },
    /// Text anchored at `pos`, vertically centered.
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Hsb,
        align: TextAlign,
    },
}

/// Ordered list of draw commands for one frame.
#[derive(Debug, Default)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all commands. Call at the start of each frame.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Append a command; replay order is submission order.
    pub fn submit(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replay every command through a frontend callback.
    pub fn execute<F>(&self, mut draw_fn: F)
    where
        F: FnMut(&DrawCommand),
    {
        for command in &self.commands {
            draw_fn(command);
        }
    }
}
