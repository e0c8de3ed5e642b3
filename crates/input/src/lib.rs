//! Hand-landmark input for Gesture Ascent.
//!
//! The hand-pose model is an external collaborator: it watches the webcam
//! and asynchronously reports, per detected hand, an ordered list of 2D
//! landmark points in camera-pixel space. This crate owns the boundary:
//! validated landmark frames, a latest-value slot the model publishes into,
//! and the mapper that turns a pointing finger into a steering angle.

pub mod steering;

pub use steering::*;

use glam::Vec2;
use thiserror::Error;

/// Landmark index of the wrist.
pub const WRIST: usize = 0;
/// Landmark index of the index-finger base joint (MCP).
pub const INDEX_BASE: usize = 5;
/// Landmark index of the index fingertip.
pub const INDEX_TIP: usize = 8;
/// Minimum landmark count for a frame to be usable (must cover the index tip).
pub const MIN_LANDMARKS: usize = 9;

/// A malformed frame from the hand-pose model.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LandmarkError {
    #[error("hand frame has {got} landmarks, expected at least {MIN_LANDMARKS}")]
    TooFewLandmarks { got: usize },
}

/// One detected hand: landmark points in camera-pixel space, indexed per the
/// fixed anatomical numbering (0 = wrist, 5 = index base, 8 = index tip).
#[derive(Debug, Clone, PartialEq)]
pub struct HandFrame {
    landmarks: Vec<Vec2>,
}

impl HandFrame {
    /// Validate a raw landmark list from the model.
    pub fn try_new(landmarks: Vec<Vec2>) -> Result<Self, LandmarkError> {
        if landmarks.len() < MIN_LANDMARKS {
            return Err(LandmarkError::TooFewLandmarks {
                got: landmarks.len(),
            });
        }
        Ok(Self { landmarks })
    }

    /// Index fingertip in camera space.
    pub fn index_tip(&self) -> Vec2 {
        self.landmarks[INDEX_TIP]
    }

    /// Index-finger base joint in camera space.
    pub fn index_base(&self) -> Vec2 {
        self.landmarks[INDEX_BASE]
    }
}

/// Single-slot "latest value" channel between the asynchronous hand-pose
/// model and the frame tick.
///
/// The producer overwrites on every detection event, including events with
/// zero hands (hand left the camera view). The consumer reads the most
/// recent value each tick; stale events are silently dropped, never queued.
#[derive(Debug, Default)]
pub struct LandmarkSlot {
    hands: Vec<HandFrame>,
}

impl LandmarkSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slot contents with the latest detection event.
    pub fn publish(&mut self, hands: Vec<HandFrame>) {
        self.hands = hands;
    }

    /// The first detected hand of the latest event, if any. Extra hands in
    /// the same event are ignored.
    pub fn primary(&self) -> Option<&HandFrame> {
        self.hands.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_at(tip: Vec2, base: Vec2) -> HandFrame {
        let mut landmarks = vec![Vec2::ZERO; MIN_LANDMARKS];
        landmarks[INDEX_BASE] = base;
        landmarks[INDEX_TIP] = tip;
        HandFrame::try_new(landmarks).unwrap()
    }

    #[test]
    fn short_frame_is_rejected() {
        let err = HandFrame::try_new(vec![Vec2::ZERO; 5]).unwrap_err();
        assert_eq!(err, LandmarkError::TooFewLandmarks { got: 5 });
    }

    #[test]
    fn slot_keeps_only_the_latest_event() {
        let mut slot = LandmarkSlot::new();
        slot.publish(vec![frame_at(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0))]);
        slot.publish(vec![frame_at(Vec2::new(9.0, 9.0), Vec2::new(8.0, 8.0))]);
        assert_eq!(slot.primary().unwrap().index_tip(), Vec2::new(9.0, 9.0));
    }

    #[test]
    fn empty_event_overwrites_to_none() {
        let mut slot = LandmarkSlot::new();
        slot.publish(vec![frame_at(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0))]);
        slot.publish(Vec::new());
        assert!(slot.primary().is_none());
    }
}
