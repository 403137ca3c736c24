//! Grid-based first-person raycaster rendered in the terminal.
//!
//! `core` holds the deterministic simulation (map generation, DDA
//! raycasting, movement), `engine` sequences it per frame, `input` and
//! `term` are the terminal-facing edges.

pub mod core;
pub mod engine;
pub mod input;
pub mod term;
pub mod types;
