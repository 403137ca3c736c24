//! DDA raycaster - one ray per screen column
//!
//! Each ray marches the grid one line crossing at a time, alternating axes
//! by whichever accumulated side distance is smaller, until it lands in a
//! wall cell or runs out its depth budget. The reported distance is the
//! perpendicular distance along the camera's forward axis, not the Euclidean
//! ray length; without that correction, flat walls bow outward at the
//! screen edges (fisheye).

use std::f64::consts::FRAC_PI_2;

use crate::core::grid::Grid;
use crate::types::{CameraPose, RayHit, Side, MAX_MARCH_DEPTH, PLANE_SCALE};

/// Cast the ray for one screen column.
///
/// `camera_x` is the column's offset across the field of view, in [-1, 1];
/// 0 is straight ahead. The pose must sit strictly inside a cell, never
/// exactly on a grid line.
pub fn cast_column(pose: &CameraPose, camera_x: f64, grid: &Grid) -> RayHit {
    // Ray direction: forward vector plus the camera plane (forward rotated
    // a quarter turn) scaled by the column offset.
    let ray_dir_x = pose.dir.cos() + (pose.dir + FRAC_PI_2).cos() * camera_x * PLANE_SCALE;
    let ray_dir_y = pose.dir.sin() + (pose.dir + FRAC_PI_2).sin() * camera_x * PLANE_SCALE;

    let mut map_x = pose.x.floor() as i64;
    let mut map_y = pose.y.floor() as i64;

    // Distance along the ray between consecutive grid lines of each axis.
    // A zero direction component divides to +inf, which simply means that
    // axis never wins the march comparison below.
    let delta_dist_x = (1.0 / ray_dir_x).abs();
    let delta_dist_y = (1.0 / ray_dir_y).abs();

    // Distance from the camera to the first grid line crossing per axis,
    // and which way the ray walks the map on that axis.
    let (step_x, mut side_dist_x) = if ray_dir_x < 0.0 {
        (-1, (pose.x - map_x as f64) * delta_dist_x)
    } else {
        (1, (map_x as f64 + 1.0 - pose.x) * delta_dist_x)
    };
    let (step_y, mut side_dist_y) = if ray_dir_y < 0.0 {
        (-1, (pose.y - map_y as f64) * delta_dist_y)
    } else {
        (1, (map_y as f64 + 1.0 - pose.y) * delta_dist_y)
    };

    let mut side = Side::X;
    let mut wall = 0u8;

    for _ in 0..MAX_MARCH_DEPTH {
        if side_dist_x < side_dist_y {
            side_dist_x += delta_dist_x;
            map_x += step_x;
            side = Side::X;
        } else {
            side_dist_y += delta_dist_y;
            map_y += step_y;
            side = Side::Y;
        }

        match grid.get(map_x, map_y) {
            Some(code) if code > 0 => {
                wall = code;
                break;
            }
            // Open cell, or the ray escaped the map: keep marching until
            // the depth budget runs out.
            _ => {}
        }
    }

    if wall == 0 {
        return RayHit::miss(side);
    }

    // Project the ray length onto the camera's forward axis.
    let distance = match side {
        Side::X => (map_x as f64 - pose.x + (1.0 - step_x as f64) / 2.0) / ray_dir_x,
        Side::Y => (map_y as f64 - pose.y + (1.0 - step_y as f64) / 2.0) / ray_dir_y,
    };

    RayHit {
        side,
        wall,
        distance,
    }
}

/// Cast one ray per screen column into a caller-owned buffer.
///
/// Column `x` of `columns` maps to `camera_x = 2x/columns - 1`, sweeping the
/// field of view left to right. Reusing the buffer keeps the per-frame hot
/// path allocation-free.
pub fn cast_frame_into(pose: &CameraPose, columns: usize, grid: &Grid, out: &mut Vec<RayHit>) {
    out.clear();
    out.reserve(columns);
    for x in 0..columns {
        let camera_x = 2.0 * x as f64 / columns as f64 - 1.0;
        out.push(cast_column(pose, camera_x, grid));
    }
}

/// Convenience wrapper allocating a fresh hit buffer.
pub fn cast_frame(pose: &CameraPose, columns: usize, grid: &Grid) -> Vec<RayHit> {
    let mut out = Vec::with_capacity(columns);
    cast_frame_into(pose, columns, grid, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn bordered_room(width: usize, height: usize) -> Grid {
        let rows: Vec<Vec<u8>> = (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| {
                        u8::from(x == 0 || x == width - 1 || y == 0 || y == height - 1)
                    })
                    .collect()
            })
            .collect();
        Grid::from_cells(rows).unwrap()
    }

    #[test]
    fn test_center_column_east_hits_border() {
        let grid = bordered_room(5, 5);
        let pose = CameraPose::new(2.5, 2.5, 0.0);

        let hit = cast_column(&pose, 0.0, &grid);
        assert_eq!(hit.side, Side::X);
        assert_eq!(hit.wall, 1);
        assert!((hit.distance - 1.5).abs() < 1e-12, "got {}", hit.distance);
    }

    #[test]
    fn test_straight_cast_matches_analytic_distance_all_axes() {
        let grid = bordered_room(9, 9);
        let pose = CameraPose::new(3.25, 4.75, 0.0);

        // East: wall face at x=8, distance 8 - 3.25.
        let east = cast_column(&CameraPose { dir: 0.0, ..pose }, 0.0, &grid);
        assert!((east.distance - 4.75).abs() < 1e-12);
        assert_eq!(east.side, Side::X);

        // West: wall face at x=1, distance 3.25 - 1.
        let west = cast_column(&CameraPose { dir: PI, ..pose }, 0.0, &grid);
        assert!((west.distance - 2.25).abs() < 1e-9);
        assert_eq!(west.side, Side::X);

        // South (+y): wall face at y=8, distance 8 - 4.75.
        let south = cast_column(
            &CameraPose {
                dir: PI / 2.0,
                ..pose
            },
            0.0,
            &grid,
        );
        assert!((south.distance - 3.25).abs() < 1e-9);
        assert_eq!(south.side, Side::Y);

        // North (-y): wall face at y=1, distance 4.75 - 1.
        let north = cast_column(
            &CameraPose {
                dir: -PI / 2.0,
                ..pose
            },
            0.0,
            &grid,
        );
        assert!((north.distance - 3.75).abs() < 1e-9);
        assert_eq!(north.side, Side::Y);
    }

    #[test]
    fn test_diagonal_perpendicular_distance_is_forward_projection() {
        // Heading east, off-center column: the ray is oblique but the
        // reported distance is still measured along the forward (+x) axis,
        // so it equals the x gap to whichever vertical wall face it hits.
        let grid = bordered_room(9, 9);
        let pose = CameraPose::new(4.5, 4.5, 0.0);

        let hit = cast_column(&pose, 0.5, &grid);
        if hit.side == Side::X {
            let wall_face_x = 8.0;
            assert!((hit.distance - (wall_face_x - pose.x)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_axis_aligned_ray_does_not_crash_on_zero_component() {
        // dir=0 makes ray_dir_y exactly 0 at camera_x=0: delta_dist_y is
        // infinite and the y axis must simply never advance.
        let grid = bordered_room(5, 5);
        let pose = CameraPose::new(2.5, 2.5, 0.0);
        let hit = cast_column(&pose, 0.0, &grid);
        assert!(hit.distance.is_finite());
    }

    #[test]
    fn test_miss_beyond_depth_cap() {
        // Long open corridor: east wall is 30 cells away, past the cap.
        let width = 40;
        let rows: Vec<Vec<u8>> = (0..5)
            .map(|y| {
                (0..width)
                    .map(|x| u8::from(x == 0 || x == width - 1 || y == 0 || y == 4))
                    .collect()
            })
            .collect();
        let grid = Grid::from_cells(rows).unwrap();
        let pose = CameraPose::new(1.5, 2.5, 0.0);

        let hit = cast_column(&pose, 0.0, &grid);
        assert!(hit.is_miss());
        assert_eq!(hit.wall, 0);
    }

    #[test]
    fn test_cast_is_bit_deterministic() {
        let grid = Grid::generate(32, 32, 0.15, 42).unwrap();
        let pose = CameraPose::new(16.5, 16.5, 1.234);

        let a = cast_frame(&pose, 160, &grid);
        let b = cast_frame(&pose, 160, &grid);
        for (ha, hb) in a.iter().zip(&b) {
            assert_eq!(ha.side, hb.side);
            assert_eq!(ha.wall, hb.wall);
            assert_eq!(ha.distance.to_bits(), hb.distance.to_bits());
        }
    }

    #[test]
    fn test_cast_frame_into_reuses_buffer() {
        let grid = bordered_room(5, 5);
        let pose = CameraPose::new(2.5, 2.5, 0.0);

        let mut buf = Vec::new();
        cast_frame_into(&pose, 80, &grid, &mut buf);
        assert_eq!(buf.len(), 80);
        let cap = buf.capacity();

        cast_frame_into(&pose, 80, &grid, &mut buf);
        assert_eq!(buf.len(), 80);
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn test_frame_covers_field_of_view() {
        // Facing east in a square room every column lands on the same east
        // wall, and fisheye correction makes every distance exactly the x
        // gap to that wall face.
        let grid = bordered_room(7, 7);
        let pose = CameraPose::new(3.5, 3.5, 0.0);

        let hits = cast_frame(&pose, 64, &grid);
        assert_eq!(hits.len(), 64);
        for h in &hits {
            assert_eq!(h.side, Side::X);
            assert_eq!(h.wall, 1);
            assert!((h.distance - 2.5).abs() < 1e-12, "got {}", h.distance);
        }
    }

    #[test]
    fn test_frame_edge_columns_strike_corridor_sides() {
        // Down a long corridor the sweep fans out: the outermost columns
        // run into the side walls while the center column reaches the far
        // end, so the frame mixes both hit sides.
        let grid = bordered_room(20, 5);
        let pose = CameraPose::new(1.5, 2.5, 0.0);

        let hits = cast_frame(&pose, 64, &grid);
        assert_eq!(hits[0].side, Side::Y);
        assert_eq!(hits[63].side, Side::Y);
        // Column 32 is camera_x = 0, dead ahead: east wall face at x=19.
        assert_eq!(hits[32].side, Side::X);
        assert!((hits[32].distance - 17.5).abs() < 1e-9);
    }
}
