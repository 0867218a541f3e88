//! Fitting page geometry to a host window and viewport.

mod options;
mod viewport;

pub use options::{FitOptions, DENSITY_RATIO};
pub use viewport::ViewportFitter;

use crate::model::{ExtractionResult, WindowSize};

/// Preferred host window size for a document, using default options.
///
/// # Example
///
/// ```
/// use pagefit::{compute_preferred_size, ExtractionResult, PageSize, WindowSize};
///
/// let letter = ExtractionResult::Found(PageSize::letter());
/// let size = compute_preferred_size(&letter, WindowSize::new(1000.0, 1200.0));
/// assert_eq!(size.width, 1100.0);
/// assert_eq!(size.height.round(), 1424.0);
/// ```
pub fn compute_preferred_size(geometry: &ExtractionResult, fallback: WindowSize) -> WindowSize {
    ViewportFitter::new().preferred_size(geometry, fallback)
}

/// Fit-to-width zoom for a live viewport, using default options.
///
/// # Example
///
/// ```
/// use pagefit::{compute_zoom, ExtractionResult, PageSize};
///
/// let letter = ExtractionResult::Found(PageSize::letter());
/// let zoom = compute_zoom(&letter, 1000.0, 800.0).unwrap();
/// assert!((zoom - 1.20).abs() < 0.01);
/// assert_eq!(compute_zoom(&letter, 0.0, 800.0), None);
/// ```
pub fn compute_zoom(
    geometry: &ExtractionResult,
    viewport_width: f64,
    viewport_height: f64,
) -> Option<f64> {
    ViewportFitter::new().zoom_for(geometry, WindowSize::new(viewport_width, viewport_height))
}
