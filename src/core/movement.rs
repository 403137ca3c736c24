//! Movement controller - integrates input into a new camera pose
//!
//! Rotation is applied first and is never gated; translation happens along
//! the already-rotated heading and is accepted or rejected whole against the
//! single destination cell. There is deliberately no axis-separated sliding:
//! walking diagonally into a corner stops the camera dead instead of letting
//! it slide along the open axis. That is the movement feel this controller
//! reproduces, so keep it.

use crate::core::grid::Grid;
use crate::types::{CameraPose, InputState, MOVE_SPEED, ROT_SPEED};

/// Advance the pose by `dt` seconds of the given input.
///
/// Always returns a valid pose and never touches the grid. Rejected moves
/// leave the position bit-identical to the input pose.
pub fn step(pose: &CameraPose, input: &InputState, grid: &Grid, dt: f64) -> CameraPose {
    let dir = pose.dir + input.rotate * ROT_SPEED * dt;

    let mut x = pose.x;
    let mut y = pose.y;

    if input.forward != 0.0 {
        let mag = input.forward * MOVE_SPEED * dt;
        let new_x = x + dir.cos() * mag;
        let new_y = y + dir.sin() * mag;

        // Whole-move gate: both axes land in one destination cell, and the
        // move only happens if that cell is passable.
        if grid.is_open(new_x.floor() as i64, new_y.floor() as i64) {
            x = new_x;
            y = new_y;
        }
    }

    CameraPose { x, y, dir }
}
