//! Core engine types for Gesture Ascent.
//!
//! This crate provides the foundational types shared across the simulation:
//! - Viewport (the canvas bounds all gameplay coordinates live in)
//! - Frame clock for the tick loop
//!
//! The simulation is 2D and screen-space: x grows right, y grows down,
//! angle 0 points straight up.

pub mod time;
pub mod viewport;

pub use time::*;
pub use viewport::*;

// Re-export commonly used types
pub use glam::Vec2;
