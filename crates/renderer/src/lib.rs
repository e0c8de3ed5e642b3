//! Render interface for Gesture Ascent.
//!
//! The actual drawing surface (a browser canvas in production) is an external
//! collaborator, so this crate defines the boundary instead of a backend: an
//! HSB color model and a per-frame display list of draw commands. The game
//! builds a [`Scene`] each frame; whatever frontend is attached replays it.

pub mod color;
pub mod scene;

pub use color::*;
pub use scene::*;
