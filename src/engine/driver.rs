//! FrameDriver: sequences one frame of simulation.
//!
//! Owns the grid, the camera pose, and the wall-clock timestamp. Each frame
//! it turns the latest input snapshot into a movement step, casts one ray
//! per screen column into a reused buffer, and hands the hit records to the
//! presentation layer. No algorithmic content of its own.

use std::time::Instant;

use anyhow::{bail, Result};

use crate::core::{cast_frame_into, movement, Grid};
use crate::types::{CameraPose, InputState, RayHit, MAX_FRAME_DT};

pub struct FrameDriver {
    grid: Grid,
    pose: CameraPose,
    last_tick: Option<Instant>,
    hits: Vec<RayHit>,
}

impl FrameDriver {
    /// Start a session at the grid's spawn pose.
    pub fn new(grid: Grid) -> Self {
        let pose = grid.spawn_pose();
        Self {
            grid,
            pose,
            last_tick: None,
            hits: Vec::new(),
        }
    }

    /// Start a session at an explicit pose.
    ///
    /// The pose must sit in an open cell of the grid; anything else is
    /// rejected here, because after construction only the movement
    /// controller's collision gate ever moves the camera.
    pub fn with_pose(grid: Grid, pose: CameraPose) -> Result<Self> {
        let (cx, cy) = pose.cell();
        if !grid.is_open(cx, cy) {
            bail!(
                "camera pose ({}, {}) is not inside an open cell",
                pose.x,
                pose.y
            );
        }
        Ok(Self {
            grid,
            pose,
            last_tick: None,
            hits: Vec::new(),
        })
    }

    /// Run one frame against wall-clock time.
    ///
    /// The first frame uses dt = 0 so startup cannot jump the pose; later
    /// frames cap dt at [`MAX_FRAME_DT`] against suspend/resume gaps.
    pub fn frame(&mut self, input: InputState, columns: usize) -> &[RayHit] {
        let now = Instant::now();
        let dt = match self.last_tick {
            Some(prev) => now.duration_since(prev).as_secs_f64().min(MAX_FRAME_DT),
            None => 0.0,
        };
        self.last_tick = Some(now);
        self.advance(input, columns, dt)
    }

    /// Run one frame with an explicit dt, for deterministic callers.
    pub fn advance(&mut self, input: InputState, columns: usize, dt: f64) -> &[RayHit] {
        self.pose = movement::step(&self.pose, &input, &self.grid, dt);
        cast_frame_into(&self.pose, columns, &self.grid, &mut self.hits);
        &self.hits
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Hit records from the most recent frame.
    pub fn hits(&self) -> &[RayHit] {
        &self.hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver() -> FrameDriver {
        FrameDriver::new(Grid::generate(16, 16, 0.0, 1).unwrap())
    }

    #[test]
    fn test_first_frame_does_not_move_pose() {
        let mut drv = driver();
        let spawn = drv.pose();

        // Full-throttle input on the very first frame: dt must be 0.
        drv.frame(InputState::new(1.0, 1.0), 40);
        assert_eq!(drv.pose(), spawn);
    }

    #[test]
    fn test_advance_threads_pose_through_frames() {
        let mut drv = driver();
        let start = drv.pose();

        drv.advance(InputState::new(0.0, 1.0), 40, 0.5);
        drv.advance(InputState::new(0.0, 1.0), 40, 0.5);

        let pose = drv.pose();
        assert!((pose.dir - (start.dir + 2.0)).abs() < 1e-12);
        assert_eq!((pose.x, pose.y), (start.x, start.y));
    }

    #[test]
    fn test_advance_produces_one_hit_per_column() {
        let mut drv = driver();
        let hits = drv.advance(InputState::default(), 123, 0.016);
        assert_eq!(hits.len(), 123);
        assert_eq!(drv.hits().len(), 123);
    }

    #[test]
    fn test_with_pose_rejects_out_of_range_camera() {
        let grid = Grid::generate(16, 16, 0.0, 1).unwrap();
        assert!(FrameDriver::with_pose(grid.clone(), CameraPose::new(-1.0, 4.5, 0.0)).is_err());
        assert!(FrameDriver::with_pose(grid.clone(), CameraPose::new(4.5, 99.0, 0.0)).is_err());
        // Border cells are walls, so a pose inside one is rejected too.
        assert!(FrameDriver::with_pose(grid.clone(), CameraPose::new(0.5, 0.5, 0.0)).is_err());
        assert!(FrameDriver::with_pose(grid, CameraPose::new(4.5, 4.5, 0.0)).is_ok());
    }

    #[test]
    fn test_frame_caps_dt_after_long_stall() {
        use std::time::Duration;

        use crate::types::ROT_SPEED;

        let mut drv = driver();
        // A second of wall-clock stall (suspend, debugger, slow terminal)
        // must not rotate a full second's worth: dt clamps to MAX_FRAME_DT.
        drv.last_tick = Some(Instant::now() - Duration::from_secs(1));
        drv.frame(InputState::new(0.0, 1.0), 40);

        let capped = ROT_SPEED * MAX_FRAME_DT;
        let uncapped = ROT_SPEED * 1.0;
        assert!((drv.pose().dir - capped).abs() < 1e-9, "got {}", drv.pose().dir);
        assert!(drv.pose().dir < uncapped / 2.0);
    }

    #[test]
    fn test_hit_buffer_is_reused_across_frames() {
        let mut drv = driver();
        drv.advance(InputState::default(), 200, 0.016);
        let cap = drv.hits.capacity();
        let ptr = drv.hits.as_ptr();

        drv.advance(InputState::default(), 200, 0.016);
        assert_eq!(drv.hits.capacity(), cap);
        assert_eq!(drv.hits.as_ptr(), ptr);
    }
}
