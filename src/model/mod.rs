//! Geometry and sizing types shared by the probe and the fitter.

mod geometry;
mod window;

pub use geometry::{ExtractionResult, MediaBox, PageGeometry, PageSize, Rotation};
pub use window::WindowSize;
