//! The player spacecraft: kinematics, hitbox, and boundary events.

use engine_core::{Vec2, Viewport};
use physics::hits_wall;

/// Local hitbox offsets before rotation (x right, y down).
const NOSE: Vec2 = Vec2::new(0.0, -30.0);
const TAIL: Vec2 = Vec2::new(0.0, 30.0);
const LEFT_WING: Vec2 = Vec2::new(-50.0, 11.0);
const RIGHT_WING: Vec2 = Vec2::new(50.0, 11.0);

/// The four-point collision polygon, already rotated and translated into
/// canvas space. Recomputed as a fresh value whenever the spacecraft moves
/// or turns; it is never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub nose: Vec2,
    pub tail: Vec2,
    pub left_wing: Vec2,
    pub right_wing: Vec2,
}

impl Hitbox {
    /// Rotate the fixed local offsets by `angle`, then translate by
    /// `position` (rotation-then-translation order is load-bearing).
    pub fn at(position: Vec2, angle: f32) -> Self {
        let rot = Vec2::from_angle(angle);
        Self {
            nose: position + rot.rotate(NOSE),
            tail: position + rot.rotate(TAIL),
            left_wing: position + rot.rotate(LEFT_WING),
            right_wing: position + rot.rotate(RIGHT_WING),
        }
    }

    pub fn points(&self) -> [Vec2; 4] {
        [self.nose, self.tail, self.left_wing, self.right_wing]
    }
}

/// What an advance step ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightEvent {
    /// Nothing notable; still in the field.
    Cruising,
    /// A hitbox point touched a side or bottom wall.
    WallStrike,
    /// The spacecraft reached the top boundary (level-up or win).
    CrossedTop,
}

/// Player spacecraft. One instance per session run; replaced on restart.
#[derive(Debug, Clone)]
pub struct Spacecraft {
    start: Vec2,
    pub position: Vec2,
    /// Heading in radians, 0 = straight up.
    pub angle: f32,
    /// Current speed in pixels per frame.
    pub speed: f32,
    pub max_speed: f32,
    /// Latched once a hand is first detected; drives forward motion.
    pub auto_move: bool,
    pub hitbox: Hitbox,
}

impl Spacecraft {
    pub fn new(start: Vec2, max_speed: f32) -> Self {
        Self {
            start,
            position: start,
            angle: 0.0,
            speed: 0.0,
            max_speed,
            auto_move: false,
            hitbox: Hitbox::at(start, 0.0),
        }
    }

    /// Launch position for a given canvas: centered, 80 px above the bottom.
    pub fn launch_position(view: &Viewport) -> Vec2 {
        Vec2::new(view.width * 0.5, view.height - 80.0)
    }

    /// Return to the start position with angle 0. Speed follows the
    /// auto-move latch. Calling twice in a row yields the same state.
    pub fn reset(&mut self) {
        self.position = self.start;
        self.angle = 0.0;
        self.speed = if self.auto_move { self.max_speed } else { 0.0 };
        self.hitbox = Hitbox::at(self.position, self.angle);
    }

    /// Advance one frame: apply forward motion along the current heading,
    /// recompute the hitbox, then test walls before the top boundary so a
    /// frame satisfying both counts as progress.
    pub fn advance(&mut self, view: &Viewport) -> FlightEvent {
        self.speed = if self.auto_move { self.max_speed } else { 0.0 };
        self.position += self.speed * Vec2::new(self.angle.sin(), -self.angle.cos());
        self.hitbox = Hitbox::at(self.position, self.angle);

        if self.hitbox.points().iter().any(|p| hits_wall(*p, view)) {
            return FlightEvent::WallStrike;
        }
        if self.position.y <= 0.0 {
            return FlightEvent::CrossedTop;
        }
        FlightEvent::Cruising
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    fn view() -> Viewport {
        Viewport::new(1280.0, 800.0)
    }

    fn craft() -> Spacecraft {
        Spacecraft::new(Spacecraft::launch_position(&view()), 10.0)
    }

    #[test]
    fn advances_straight_up_at_angle_zero() {
        let mut c = craft();
        c.auto_move = true;
        let before = c.position;
        assert_eq!(c.advance(&view()), FlightEvent::Cruising);
        assert_abs_diff_eq!(c.position.x, before.x, epsilon = 1e-5);
        assert_abs_diff_eq!(c.position.y, before.y - 10.0, epsilon = 1e-5);
    }

    #[test]
    fn stays_put_until_auto_move_latches() {
        let mut c = craft();
        let before = c.position;
        c.advance(&view());
        assert_eq!(c.position, before);
        assert_eq!(c.speed, 0.0);
    }

    #[test]
    fn hitbox_is_offsets_rotated_then_translated() {
        let mut c = craft();
        c.auto_move = true;
        c.angle = 0.7;
        c.advance(&view());

        let rot = Vec2::from_angle(0.7);
        for (actual, local) in c.hitbox.points().iter().zip([
            Vec2::new(0.0, -30.0),
            Vec2::new(0.0, 30.0),
            Vec2::new(-50.0, 11.0),
            Vec2::new(50.0, 11.0),
        ]) {
            let expected = c.position + rot.rotate(local);
            assert_abs_diff_eq!(actual.x, expected.x, epsilon = 1e-4);
            assert_abs_diff_eq!(actual.y, expected.y, epsilon = 1e-4);
        }
    }

    #[test]
    fn reset_is_idempotent() {
        let mut c = craft();
        c.auto_move = true;
        c.angle = 1.2;
        for _ in 0..5 {
            c.advance(&view());
        }
        c.reset();
        let first = c.clone();
        c.reset();
        assert_eq!(c.position, first.position);
        assert_eq!(c.angle, first.angle);
        assert_eq!(c.speed, first.speed);
        assert_eq!(c.hitbox, first.hitbox);
        // Speed follows the auto-move latch after reset.
        assert_eq!(c.speed, 10.0);
    }

    #[test]
    fn wing_touching_a_side_wall_is_a_strike() {
        let mut c = craft();
        c.auto_move = true;
        c.angle = -FRAC_PI_2; // due left
        c.position = Vec2::new(35.0, 400.0);
        // One 10 px step left puts the rotated nose offset past x = 0.
        assert_eq!(c.advance(&view()), FlightEvent::WallStrike);
    }

    #[test]
    fn top_boundary_is_progress_not_a_wall() {
        let mut c = craft();
        c.auto_move = true;
        c.position = Vec2::new(640.0, 10.0);
        // One step up crosses y = 0.
        assert_eq!(c.advance(&view()), FlightEvent::CrossedTop);
    }

    #[test]
    fn exactly_zero_y_counts_as_crossing() {
        let mut c = craft();
        c.auto_move = true;
        c.position = Vec2::new(640.0, 10.0);
        c.max_speed = 10.0;
        let event = c.advance(&view());
        assert_eq!(c.position.y, 0.0);
        assert_eq!(event, FlightEvent::CrossedTop);
    }
}
