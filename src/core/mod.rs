//! Core module - pure simulation with no external dependencies
//!
//! Grid generation, the DDA raycaster, and the movement controller live
//! here. Nothing in this module does I/O or keeps wall-clock time; given
//! the same seed, pose, and inputs it always computes the same thing.

pub mod grid;
pub mod movement;
pub mod raycast;
pub mod rng;

// Re-export commonly used items
pub use grid::Grid;
pub use movement::step;
pub use raycast::{cast_column, cast_frame, cast_frame_into};
pub use rng::SimpleRng;
