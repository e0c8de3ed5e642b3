//! Asteroid field generation and collision queries.

use engine_core::Viewport;
use glam::Vec2;
use physics::Circle;
use rand::Rng;
use std::f32::consts::TAU;

/// Horizontal margin kept free along both canvas edges.
pub const EDGE_MARGIN: f32 = 50.0;
/// Asteroid diameter range in pixels.
pub const DIAMETER_RANGE: std::ops::Range<f32> = 60.0..120.0;
/// Number of color slots in the asteroid palette (colors live renderer-side).
pub const PALETTE_SLOTS: usize = 3;

/// Vertical band the asteroids are laid out in.
#[derive(Debug, Clone, Copy)]
pub struct FieldRegion {
    pub width: f32,
    pub start_y: f32,
    pub height: f32,
}

impl FieldRegion {
    /// The band the game uses: full canvas width, from the top edge down to
    /// 200 px above the bottom (leaves room for the launch position).
    pub fn from_viewport(view: &Viewport) -> Self {
        Self {
            width: view.width,
            start_y: 0.0,
            height: view.height - 200.0,
        }
    }
}

/// Decorative crater on an asteroid face. Generated once, immutable, and
/// irrelevant to collision.
#[derive(Debug, Clone, Copy)]
pub struct Hole {
    /// Distance of the crater center from the asteroid center.
    pub radius: f32,
    /// Crater diameter.
    pub diameter: f32,
    /// Placement angle around the asteroid, radians.
    pub angle: f32,
    /// Alpha in percent, larger craters more opaque.
    pub alpha: f32,
}

/// A static circular obstacle. Collision uses only `position` and
/// `diameter`; everything else is surface decoration.
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub position: Vec2,
    pub diameter: f32,
    /// Index into the render palette.
    pub palette: usize,
    pub holes: Vec<Hole>,
}

impl Asteroid {
    fn generate(position: Vec2, rng: &mut impl Rng) -> Self {
        let diameter = rng.gen_range(DIAMETER_RANGE);
        let hole_count = rng.gen_range(10..25);
        let holes = (0..hole_count)
            .map(|i| {
                let hole_diameter = rng.gen_range(0.0..8.0);
                Hole {
                    radius: rng.gen_range(hole_diameter..(diameter - hole_diameter) * 0.5),
                    diameter: hole_diameter,
                    angle: i as f32 / hole_count as f32 * TAU,
                    alpha: 40.0 + hole_diameter / 8.0 * 60.0,
                }
            })
            .collect();
        Self {
            position,
            diameter,
            palette: rng.gen_range(0..PALETTE_SLOTS),
            holes,
        }
    }

    /// Collision shape of this asteroid.
    pub fn circle(&self) -> Circle {
        Circle::new(self.position, self.diameter * 0.5)
    }
}

/// The obstacle course for one level. Replaced wholesale on level-up and
/// restart.
#[derive(Debug, Clone)]
pub struct AsteroidField {
    pub asteroids: Vec<Asteroid>,
}

impl AsteroidField {
    /// Generate `count` asteroids: y spaced evenly through the region,
    /// x uniform-random inside the edge margins.
    pub fn generate(count: usize, region: FieldRegion, rng: &mut impl Rng) -> Self {
        let asteroids = (0..count)
            .map(|i| {
                let x = rng.gen_range(EDGE_MARGIN..region.width - EDGE_MARGIN);
                let y = region.start_y + i as f32 * region.height / count as f32;
                Asteroid::generate(Vec2::new(x, y), rng)
            })
            .collect();
        log::debug!("generated asteroid field of {}", count);
        Self { asteroids }
    }

    /// Whether any sample point falls inside (or exactly on) any asteroid.
    pub fn collides(&self, points: &[Vec2]) -> bool {
        self.asteroids
            .iter()
            .any(|a| points.iter().any(|p| a.circle().contains(*p)))
    }

    pub fn len(&self) -> usize {
        self.asteroids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asteroids.is_empty()
    }
}
