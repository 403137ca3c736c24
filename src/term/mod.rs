//! Terminal presentation module.
//!
//! Pure view first, I/O last: `SceneView` turns hit records into a styled
//! framebuffer that unit tests can inspect, and `TerminalRenderer` is the
//! only piece that touches the real terminal.

pub mod fb;
pub mod renderer;
pub mod view;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
pub use view::{SceneView, Viewport};
