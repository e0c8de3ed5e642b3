//! Point-in-circle and wall-boundary tests.

use engine_core::Viewport;
use glam::Vec2;

/// A circular collision shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Inclusive containment: a point exactly on the boundary
    /// (distance == radius) counts as a hit.
    pub fn contains(&self, point: Vec2) -> bool {
        point.distance_squared(self.center) <= self.radius * self.radius
    }
}

/// Whether a point violates the side or bottom walls of the viewport.
///
/// Bounds are inclusive: exactly x == 0, x == width, or y == height is a
/// violation. The top edge (y <= 0) is deliberately not tested here; crossing
/// it is the level-up/win condition, handled by the session after the wall
/// check so a frame that satisfies both counts as progress.
pub fn hits_wall(point: Vec2, view: &Viewport) -> bool {
    point.x <= 0.0 || point.x >= view.width || point.y >= view.height
}
