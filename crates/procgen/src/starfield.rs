//! Parallax starfield background.
//!
//! A fixed pool of stars flies toward the viewer: each star carries a depth
//! `z` that shrinks every frame and is recycled to the far plane when it
//! passes the camera. Advancing and projecting are separate steps so the
//! simulation stays testable without a drawing surface; nothing in gameplay
//! reads starfield state.

use engine_core::Viewport;
use glam::Vec2;
use rand::Rng;

/// Default star pool size.
pub const STAR_COUNT: usize = 800;
/// Projected dot diameter of a star at the near plane, in pixels.
const NEAR_SIZE: f32 = 6.0;

/// One background star. `offset` is relative to the canvas center; `z` is
/// depth in `(0, width]`, smaller = closer.
#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub offset: Vec2,
    pub z: f32,
    pub speed: f32,
    /// Brightness alpha in percent, rolled once at spawn.
    pub alpha: f32,
}

impl Star {
    /// Roll a fresh star anywhere in the depth range.
    pub fn spawn(view: &Viewport, rng: &mut impl Rng) -> Self {
        Self {
            offset: random_offset(view, rng),
            z: rng.gen_range(1.0..=view.width),
            speed: rng.gen_range(2.0..10.0),
            alpha: rng.gen_range(50.0..100.0),
        }
    }

    /// Move one step toward the viewer, recycling to the far plane once the
    /// star passes the camera.
    pub fn advance(&mut self, view: &Viewport, rng: &mut impl Rng) {
        self.z -= self.speed;
        if self.z < 1.0 {
            self.z = view.width;
            self.offset = random_offset(view, rng);
        }
    }

    /// Perspective projection: screen position relative to the canvas center
    /// and the dot diameter (near = large, far plane = 0).
    pub fn projection(&self, view: &Viewport) -> (Vec2, f32) {
        let screen = self.offset / self.z * view.extent();
        let size = (NEAR_SIZE * (1.0 - self.z / view.width)).max(0.0);
        (screen, size)
    }
}

fn random_offset(view: &Viewport, rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        rng.gen_range(-view.width * 0.5..view.width * 0.5),
        rng.gen_range(-view.height * 0.5..view.height * 0.5),
    )
}

/// The full star pool. Created once at startup; stars are mutated every
/// frame and never destroyed.
#[derive(Debug)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    pub fn new(count: usize, view: &Viewport, rng: &mut impl Rng) -> Self {
        let stars = (0..count).map(|_| Star::spawn(view, rng)).collect();
        Self { stars }
    }

    /// Advance every star by one frame.
    pub fn advance(&mut self, view: &Viewport, rng: &mut impl Rng) {
        for star in &mut self.stars {
            star.advance(view, rng);
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn pool_size_is_fixed() {
        let view = Viewport::new(1280.0, 800.0);
        let mut rng = StdRng::seed_from_u64(7);
        let mut field = Starfield::new(100, &view, &mut rng);
        for _ in 0..500 {
            field.advance(&view, &mut rng);
        }
        assert_eq!(field.stars().len(), 100);
    }

    #[test]
    fn depth_stays_in_range_across_recycles() {
        let view = Viewport::new(1280.0, 800.0);
        let mut rng = StdRng::seed_from_u64(42);
        let mut field = Starfield::new(50, &view, &mut rng);
        // Enough frames for every star to wrap several times.
        for _ in 0..2000 {
            field.advance(&view, &mut rng);
            for star in field.stars() {
                assert!(star.z > 0.0 && star.z <= view.width);
            }
        }
    }

    #[test]
    fn far_plane_projects_to_zero_size() {
        let view = Viewport::new(1280.0, 800.0);
        let star = Star {
            offset: Vec2::new(100.0, 50.0),
            z: view.width,
            speed: 5.0,
            alpha: 80.0,
        };
        let (_, size) = star.projection(&view);
        assert!(size.abs() < 1e-6);
    }

    #[test]
    fn nearer_stars_project_larger_and_further_out() {
        let view = Viewport::new(1280.0, 800.0);
        let far = Star {
            offset: Vec2::new(100.0, 50.0),
            z: 1000.0,
            speed: 5.0,
            alpha: 80.0,
        };
        let near = Star { z: 200.0, ..far };
        let (far_pos, far_size) = far.projection(&view);
        let (near_pos, near_size) = near.projection(&view);
        assert!(near_size > far_size);
        assert!(near_pos.length() > far_pos.length());
    }
}
