//! Window sizing and fit-to-width zoom.

use crate::model::{ExtractionResult, PageSize, WindowSize};

use super::options::FitOptions;

/// Turns page geometry into display parameters.
///
/// Fitting is width-only: the page is scaled so its width fills the
/// viewport and any vertical overflow is left to the viewer's scrolling.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewportFitter {
    options: FitOptions,
}

impl ViewportFitter {
    /// Create a fitter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fitter with custom options.
    pub fn with_options(options: FitOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> &FitOptions {
        &self.options
    }

    /// Convert points to density units.
    pub fn to_density_units(&self, points: f64) -> f64 {
        points * self.options.density_ratio
    }

    /// Window size to request before the viewport exists.
    ///
    /// The width starts at the base width and the height follows the page's
    /// aspect ratio; both are then clamped to their bounds. Without usable
    /// geometry the fallback is returned unchanged.
    pub fn preferred_size(&self, geometry: &ExtractionResult, fallback: WindowSize) -> WindowSize {
        let Some(page) = usable(geometry) else {
            return fallback;
        };

        let page_width = self.to_density_units(page.width);
        let page_height = self.to_density_units(page.height);
        let o = &self.options;

        let target_height = o.base_width * (page_height / page_width);
        WindowSize::new(
            clamp(o.base_width, o.min_width, o.max_width),
            clamp(target_height, o.min_height, o.max_height),
        )
    }

    /// Zoom factor that fits the page width into the viewport.
    ///
    /// Returns `None` when there is no geometry or the viewport has not been
    /// realized yet (either side zero, negative or not finite).
    pub fn zoom_for(&self, geometry: &ExtractionResult, viewport: WindowSize) -> Option<f64> {
        let page = usable(geometry)?;
        if !viewport.is_realized() {
            return None;
        }

        let o = &self.options;
        let page_width = self.to_density_units(page.width);
        let zoom = viewport.width * o.width_padding / page_width;
        Some(clamp(zoom, o.min_zoom, o.max_zoom))
    }
}

fn usable(geometry: &ExtractionResult) -> Option<PageSize> {
    geometry
        .page_size()
        .filter(|p| p.width.is_finite() && p.height.is_finite() && p.width > 0.0 && p.height > 0.0)
}

/// Clamp without panicking on NaN or an inverted range; the upper bound wins.
fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter() -> ExtractionResult {
        ExtractionResult::Found(PageSize::letter())
    }

    #[test]
    fn test_zoom_letter_in_1000x800() {
        let zoom = ViewportFitter::new()
            .zoom_for(&letter(), WindowSize::new(1000.0, 800.0))
            .unwrap();
        assert!((zoom - 980.0 / 816.0).abs() < 1e-9);
        assert!((zoom - 1.20).abs() < 0.01);
    }

    #[test]
    fn test_zoom_ignores_height() {
        let fitter = ViewportFitter::new();
        let short = fitter.zoom_for(&letter(), WindowSize::new(1000.0, 10.0));
        let tall = fitter.zoom_for(&letter(), WindowSize::new(1000.0, 10_000.0));
        assert_eq!(short, tall);
    }

    #[test]
    fn test_zoom_no_op_cases() {
        let fitter = ViewportFitter::new();
        let viewport = WindowSize::new(1000.0, 800.0);
        assert_eq!(fitter.zoom_for(&ExtractionResult::NotFound, viewport), None);
        assert_eq!(fitter.zoom_for(&letter(), WindowSize::new(0.0, 800.0)), None);
        assert_eq!(fitter.zoom_for(&letter(), WindowSize::new(1000.0, 0.0)), None);
        assert_eq!(fitter.zoom_for(&letter(), WindowSize::new(-5.0, 800.0)), None);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let fitter = ViewportFitter::new();
        let tiny_page = ExtractionResult::Found(PageSize::new(1.0, 1.0));
        assert_eq!(fitter.zoom_for(&tiny_page, WindowSize::new(4000.0, 100.0)), Some(5.0));

        let huge_page = ExtractionResult::Found(PageSize::new(14_400.0, 14_400.0));
        assert_eq!(fitter.zoom_for(&huge_page, WindowSize::new(10.0, 10.0)), Some(0.10));
    }

    #[test]
    fn test_preferred_size_letter() {
        let size = ViewportFitter::new().preferred_size(&letter(), WindowSize::new(1000.0, 1200.0));
        assert_eq!(size.width, 1100.0);
        assert!((size.height - 1100.0 * 1056.0 / 816.0).abs() < 1e-9);
        assert_eq!(size.height.round(), 1424.0);
    }

    #[test]
    fn test_preferred_size_clamps_extreme_aspect() {
        let fitter = ViewportFitter::new();
        let fallback = WindowSize::new(1000.0, 1200.0);

        let banner = ExtractionResult::Found(PageSize::new(5000.0, 100.0));
        assert_eq!(fitter.preferred_size(&banner, fallback).height, 500.0);

        let scroll = ExtractionResult::Found(PageSize::new(100.0, 5000.0));
        assert_eq!(fitter.preferred_size(&scroll, fallback).height, 1800.0);
    }

    #[test]
    fn test_preferred_size_fallback() {
        let fallback = WindowSize::new(1000.0, 1200.0);
        let size = ViewportFitter::new().preferred_size(&ExtractionResult::NotFound, fallback);
        assert_eq!(size, fallback);

        let zero = ExtractionResult::Found(PageSize::new(0.0, 792.0));
        assert_eq!(ViewportFitter::new().preferred_size(&zero, fallback), fallback);
    }

    #[test]
    fn test_base_width_is_clamped() {
        let options = FitOptions::new().with_base_width(2400.0);
        let size = ViewportFitter::with_options(options)
            .preferred_size(&letter(), WindowSize::new(1.0, 1.0));
        assert_eq!(size.width, 1800.0);
    }

    #[test]
    fn test_clamp_handles_nan_and_inverted_range() {
        assert_eq!(clamp(f64::NAN, 1.0, 2.0), 1.0);
        assert_eq!(clamp(1.5, 3.0, 2.0), 2.0);
        assert_eq!(clamp(f64::INFINITY, 0.1, 5.0), 5.0);
    }
}
