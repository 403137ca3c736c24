//! Grid module - the occupancy map the camera moves through
//!
//! The map is a rectangular array of cell codes in flat row-major storage.
//! Code 0 is passable; codes 1..=WALL_KINDS are walls and pick a color
//! downstream. The grid is generated once per session and read-only after
//! that; both the raycaster and the movement controller only ever query it.

use anyhow::{bail, Result};

use crate::core::rng::SimpleRng;
use crate::types::{CameraPose, WALL_KINDS};

/// Smallest legal map side; anything below cannot hold an interior cell
/// between two border walls.
pub const MIN_DIMENSION: usize = 3;

/// Rectangular occupancy map, immutable after generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cell codes, row-major order (y * width + x)
    cells: Vec<u8>,
    /// Cell the camera spawns in; kept open by generation
    spawn: (usize, usize),
}

impl Grid {
    /// Generate a map: solid border, interior cells walled independently
    /// with `wall_probability`, and a plus-shaped neighborhood around the
    /// spawn cell forced open so the camera never starts inside a wall.
    ///
    /// Deterministic for a given seed. Rejects dimensions below
    /// [`MIN_DIMENSION`] rather than clamping. At widths or heights below
    /// 5 a plus arm would land on the border, which stays a wall; only the
    /// spawn cell itself is guaranteed open there.
    pub fn generate(width: usize, height: usize, wall_probability: f64, seed: u32) -> Result<Self> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            bail!(
                "map dimensions {}x{} below minimum {}x{}",
                width,
                height,
                MIN_DIMENSION,
                MIN_DIMENSION
            );
        }

        let mut rng = SimpleRng::new(seed);
        let mut cells = vec![0u8; width * height];

        for y in 0..height {
            for x in 0..width {
                let code = if x == 0 || x == width - 1 || y == 0 || y == height - 1 {
                    1
                } else if rng.next_f64() < wall_probability {
                    // Random building block, colored 1..=WALL_KINDS
                    rng.next_range(u32::from(WALL_KINDS)) as u8 + 1
                } else {
                    0
                };
                cells[y * width + x] = code;
            }
        }

        // Clear spawn area: the spawn cell and its four orthogonal
        // neighbors, regardless of what the dice said.
        let spawn = (width / 2, height / 2);
        let (sx, sy) = spawn;
        cells[sy * width + sx] = 0;
        if sx > 1 {
            cells[sy * width + (sx - 1)] = 0;
        }
        if sx + 2 < width {
            cells[sy * width + (sx + 1)] = 0;
        }
        if sy > 1 {
            cells[(sy - 1) * width + sx] = 0;
        }
        if sy + 2 < height {
            cells[(sy + 1) * width + sx] = 0;
        }

        Ok(Self {
            width,
            height,
            cells,
            spawn,
        })
    }

    /// Build a grid from explicit rows; for fixed test maps and scripted
    /// scenarios. Rows must be rectangular and meet the minimum dimensions.
    /// The spawn cell defaults to the center and is not forced open here.
    pub fn from_cells(rows: Vec<Vec<u8>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            bail!(
                "map dimensions {}x{} below minimum {}x{}",
                width,
                height,
                MIN_DIMENSION,
                MIN_DIMENSION
            );
        }
        if rows.iter().any(|row| row.len() != width) {
            bail!("map rows are not all {} cells wide", width);
        }

        let mut cells = Vec::with_capacity(width * height);
        for row in &rows {
            cells.extend_from_slice(row);
        }

        Ok(Self {
            width,
            height,
            cells,
            spawn: (width / 2, height / 2),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell code at (x, y), or None when out of bounds.
    ///
    /// Takes signed coordinates so callers can pass raw `floor()` results
    /// without pre-checking the range.
    pub fn get(&self, x: i64, y: i64) -> Option<u8> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(self.cells[y as usize * self.width + x as usize])
    }

    /// True when (x, y) is in bounds and passable.
    pub fn is_open(&self, x: i64, y: i64) -> bool {
        self.get(x, y) == Some(0)
    }

    /// True when (x, y) is in bounds and holds a wall.
    pub fn is_wall(&self, x: i64, y: i64) -> bool {
        matches!(self.get(x, y), Some(code) if code > 0)
    }

    /// Camera pose at the center of the spawn cell, facing +x.
    pub fn spawn_pose(&self) -> CameraPose {
        let (sx, sy) = self.spawn;
        CameraPose::new(sx as f64 + 0.5, sy as f64 + 0.5, 0.0)
    }

    /// Raw cell storage, row-major.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}
