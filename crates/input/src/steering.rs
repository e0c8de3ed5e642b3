//! Finger-direction to steering-angle mapping.

use crate::HandFrame;
use engine_core::Viewport;
use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

/// Canvas-space pose of the pointing finger, used to draw the on-screen
/// arrow. Present only on frames where a hand was detected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    /// Mirrored fingertip position in canvas space.
    pub position: Vec2,
    /// Steering angle in radians (0 = straight up).
    pub angle: f32,
}

/// Maps index-finger landmarks into a spacecraft steering angle.
///
/// The camera feed is shown mirrored, so landmark x coordinates are flipped
/// before scaling from camera resolution to canvas resolution. While no hand
/// is detected the mapper holds its last angle; the first detection latches
/// `engaged` so the spacecraft starts moving forward.
#[derive(Debug)]
pub struct SteeringMapper {
    camera: Viewport,
    scale: f32,
    angle: f32,
    engaged: bool,
    pointer: Option<Pointer>,
}

impl SteeringMapper {
    pub fn new(camera: Viewport, canvas: Viewport) -> Self {
        let scale = (canvas.width / camera.width).max(canvas.height / camera.height);
        Self {
            camera,
            scale,
            angle: 0.0,
            engaged: false,
            pointer: None,
        }
    }

    /// Consume the latest hand observation for this tick.
    pub fn observe(&mut self, hand: Option<&HandFrame>) {
        let Some(hand) = hand else {
            // Hand lost: freeze the last known heading.
            self.pointer = None;
            return;
        };

        let tip = hand.index_tip();
        let base = hand.index_base();

        // Mirror horizontally, then scale camera pixels to canvas pixels.
        let p1 = Vec2::new((self.camera.width - tip.x) * self.scale, tip.y * self.scale);
        let p2 = Vec2::new(
            (self.camera.width - base.x) * self.scale,
            base.y * self.scale,
        );

        // The mirrored feed flips the slope's vertical delta too: dy is
        // base-minus-tip so the angle tracks the arrow the player sees.
        let dx = p1.x - p2.x;
        let dy = p2.y - p1.y;

        // Slope angle of base->tip. A vertical finger would divide by zero;
        // use the continuous limit of the full mapping (straight up steers
        // to 0) instead of letting a non-finite value through.
        let mut direction = if dx == 0.0 {
            -FRAC_PI_2.copysign(dy)
        } else {
            (dy / dx).atan()
        };

        // atan of a slope cannot tell "pointing left" from "pointing right":
        // fold in the half-plane using the unmirrored x order of the joints.
        if base.x <= tip.x {
            direction += FRAC_PI_2;
        } else {
            direction -= FRAC_PI_2;
        }

        // Screen-space y is inverted relative to the ship rotation convention.
        self.angle = -direction;
        if !self.engaged {
            log::info!("hand detected, steering engaged");
        }
        self.engaged = true;
        self.pointer = Some(Pointer {
            position: p1,
            angle: self.angle,
        });
    }

    /// Current steering angle in radians (last known heading when no hand
    /// is in view).
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Whether a hand has ever been detected this session (forward motion
    /// does not start until it has).
    pub fn engaged(&self) -> bool {
        self.engaged
    }

    /// Arrow pose for the current frame, if a hand was seen.
    pub fn pointer(&self) -> Option<Pointer> {
        self.pointer
    }
}
