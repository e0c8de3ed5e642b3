//! Collision tests for Gesture Ascent.
//!
//! The game needs no rigid-body dynamics: obstacles are static circles and
//! the spacecraft is sampled at four hitbox points, so everything reduces to
//! point-in-circle tests and the canvas wall bounds.

pub mod collision;

pub use collision::*;
