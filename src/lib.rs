//! A small 2D arena engine with compile-time checked units.
//!
//! Geometry and physics live in [`util`]: quantities tagged with their dimension and scale,
//! vectors, rects, circles and collision tests. [`game`] builds a headless "dodge the enemies"
//! simulation on top of them.

pub mod core;
pub mod game;
pub mod util;
