//! SceneView: maps per-column hit records into a terminal framebuffer.
//!
//! This module is pure (no I/O). Each hit record becomes one vertical wall
//! strip whose height is `viewport.height / distance`, centered on the
//! horizon, with the ceiling filled above and the floor below. Miss columns
//! collapse to a zero-height strip, leaving background only.

use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CameraPose, RayHit, Side};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const CEILING: Rgb = Rgb::new(51, 51, 51);
const FLOOR: Rgb = Rgb::new(17, 17, 17);
/// Flat shade for walls hit on a horizontal grid line; the binary side
/// shading that keeps adjacent faces distinguishable.
const SIDE_SHADE: Rgb = Rgb::new(127, 140, 141);

/// View-space color for one hit record.
fn wall_color(hit: &RayHit) -> Rgb {
    if hit.side == Side::Y {
        return SIDE_SHADE;
    }
    match hit.wall {
        1 => Rgb::new(231, 76, 60),   // red
        2 => Rgb::new(52, 152, 219),  // blue
        3 => Rgb::new(46, 204, 113),  // green
        4 => Rgb::new(241, 196, 15),  // yellow
        _ => Rgb::new(255, 255, 255),
    }
}

/// Vertical extent of the wall strip for one column: `[start, end)` rows.
fn strip_bounds(distance: f64, screen_h: u16) -> (u16, u16) {
    let h = i32::from(screen_h);
    // h / inf collapses to a zero-height strip for miss columns.
    let line_height = (f64::from(h) / distance) as i32;
    let start = (-line_height / 2 + h / 2).max(0);
    let end = (line_height / 2 + h / 2).min(h);
    (start as u16, end.max(start) as u16)
}

/// A lightweight terminal renderer for the first-person scene.
#[derive(Debug, Default)]
pub struct SceneView;

impl SceneView {
    /// Render one frame's hit records into a framebuffer.
    ///
    /// Expects one hit per viewport column; extra hits are ignored and
    /// uncovered columns stay background.
    pub fn render(&self, hits: &[RayHit], pose: &CameraPose, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let ceiling = CellStyle {
            fg: CEILING,
            bg: CEILING,
            bold: false,
        };
        let floor = CellStyle {
            fg: FLOOR,
            bg: FLOOR,
            bold: false,
        };

        let columns = (hits.len() as u16).min(viewport.width);
        for x in 0..viewport.width {
            let (start, end) = if x < columns {
                strip_bounds(hits[x as usize].distance, viewport.height)
            } else {
                let mid = viewport.height / 2;
                (mid, mid)
            };

            fb.fill_column(x, 0, start, ' ', ceiling);
            if x < columns && start < end {
                let style = CellStyle {
                    fg: wall_color(&hits[x as usize]),
                    bg: Rgb::new(0, 0, 0),
                    bold: false,
                };
                fb.fill_column(x, start, end, '█', style);
            }
            fb.fill_column(x, end, viewport.height, ' ', floor);
        }

        self.draw_hud(&mut fb, pose);
        fb
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, pose: &CameraPose) {
        let style = CellStyle {
            fg: Rgb::new(0, 255, 0),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let (cx, cy) = pose.cell();
        fb.put_str(0, 0, &format!("Pos: {},{}", cx, cy), style);
    }
}
