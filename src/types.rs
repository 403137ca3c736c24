//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default map dimensions (cells)
pub const MAP_WIDTH: usize = 32;
pub const MAP_HEIGHT: usize = 32;

/// Probability that a given interior cell is generated as a wall
pub const WALL_PROBABILITY: f64 = 0.15;

/// Highest wall code the generator emits (codes 1..=WALL_KINDS pick a color)
pub const WALL_KINDS: u8 = 4;

/// Movement tuning
pub const MOVE_SPEED: f64 = 3.0; // cells per second
pub const ROT_SPEED: f64 = 2.0; // radians per second

/// Camera plane scale; controls the horizontal field of view
pub const PLANE_SCALE: f64 = 0.66;

/// Ray march gives up after this many cell crossings
pub const MAX_MARCH_DEPTH: u32 = 20;

/// Frame timing
pub const TICK_MS: u32 = 16;
/// Upper bound on a single frame's dt, so a paused or suspended session
/// does not teleport the camera on resume
pub const MAX_FRAME_DT: f64 = 0.1; // seconds

/// Which grid line a ray crossed last before hitting a wall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// A vertical grid line (constant x)
    X,
    /// A horizontal grid line (constant y)
    Y,
}

/// What a single screen column's ray struck
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Axis of the last grid line crossed; drives side shading
    pub side: Side,
    /// Occupancy code of the struck cell; 0 when the ray never hit a wall
    pub wall: u8,
    /// Perpendicular (fisheye-corrected) distance along the camera's
    /// forward axis; `f64::INFINITY` when the ray never hit a wall
    pub distance: f64,
}

impl RayHit {
    /// A ray that ran out its depth budget without striking anything.
    pub fn miss(side: Side) -> Self {
        Self {
            side,
            wall: 0,
            distance: f64::INFINITY,
        }
    }

    pub fn is_miss(&self) -> bool {
        self.distance.is_infinite()
    }
}

/// Continuous camera position and heading, in grid units / radians.
///
/// The heading is free-running; it is never normalized, the trig wraps it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub x: f64,
    pub y: f64,
    pub dir: f64,
}

impl CameraPose {
    pub fn new(x: f64, y: f64, dir: f64) -> Self {
        Self { x, y, dir }
    }

    /// Integer cell the camera currently occupies.
    pub fn cell(&self) -> (i64, i64) {
        (self.x.floor() as i64, self.y.floor() as i64)
    }
}

/// Normalized per-frame control input.
///
/// Both axes live in [-1, 1]; the constructor clamps so the simulation can
/// trust the range regardless of what the input collaborator produced.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputState {
    pub forward: f64,
    pub rotate: f64,
}

impl InputState {
    pub fn new(forward: f64, rotate: f64) -> Self {
        Self {
            forward: forward.clamp(-1.0, 1.0),
            rotate: rotate.clamp(-1.0, 1.0),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.forward == 0.0 && self.rotate == 0.0
    }
}
