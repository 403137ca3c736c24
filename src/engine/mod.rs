//! Engine module - per-frame sequencing on top of `core`.

pub mod driver;

pub use driver::FrameDriver;
