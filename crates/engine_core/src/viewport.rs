//! Viewport: the fixed canvas rectangle the game plays in.

use glam::Vec2;

/// Canvas bounds in pixels. All gameplay coordinates are relative to the
/// top-left corner, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center of the canvas.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Canvas extent as a vector.
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}
