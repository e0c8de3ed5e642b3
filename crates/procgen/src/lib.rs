//! Procedural generation for the playfield: parallax starfield and the
//! asteroid obstacle course.

pub mod asteroids;
pub mod starfield;

pub use asteroids::*;
pub use starfield::*;
