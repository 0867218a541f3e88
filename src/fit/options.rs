//! Fit options and configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Density units (1/96 in) per PDF point (1/72 in).
pub const DENSITY_RATIO: f64 = 96.0 / 72.0;

/// Options controlling window sizing and fit-to-width zoom.
///
/// Defaults reproduce the stock behaviour; a host can override any subset
/// from JSON:
///
/// ```
/// use pagefit::FitOptions;
///
/// let options = FitOptions::from_json(r#"{ "base_width": 900 }"#).unwrap();
/// assert_eq!(options.base_width, 900.0);
/// assert_eq!(options.max_zoom, 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitOptions {
    /// Density units per point
    pub density_ratio: f64,

    /// Width the preferred window starts from
    pub base_width: f64,

    /// Minimum preferred window width
    pub min_width: f64,

    /// Maximum preferred window width
    pub max_width: f64,

    /// Minimum preferred window height
    pub min_height: f64,

    /// Maximum preferred window height
    pub max_height: f64,

    /// Share of the viewport width the page may fill
    pub width_padding: f64,

    /// Smallest zoom factor ever returned
    pub min_zoom: f64,

    /// Largest zoom factor ever returned
    pub max_zoom: f64,
}

impl FitOptions {
    /// Create new fit options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self =
            serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Set the base window width.
    pub fn with_base_width(mut self, width: f64) -> Self {
        self.base_width = width;
        self
    }

    /// Set the preferred width bounds.
    pub fn with_width_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_width = min;
        self.max_width = max;
        self
    }

    /// Set the preferred height bounds.
    pub fn with_height_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_height = min;
        self.max_height = max;
        self
    }

    /// Set the viewport width padding factor.
    pub fn with_width_padding(mut self, padding: f64) -> Self {
        self.width_padding = padding;
        self
    }

    /// Set the zoom bounds.
    pub fn with_zoom_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_zoom = min;
        self.max_zoom = max;
        self
    }

    /// Check that every value is finite and positive and every range ordered.
    pub fn validate(&self) -> Result<()> {
        let values = [
            ("density_ratio", self.density_ratio),
            ("base_width", self.base_width),
            ("min_width", self.min_width),
            ("max_width", self.max_width),
            ("min_height", self.min_height),
            ("max_height", self.max_height),
            ("width_padding", self.width_padding),
            ("min_zoom", self.min_zoom),
            ("max_zoom", self.max_zoom),
        ];
        for (name, value) in values {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        let ranges = [
            ("width", self.min_width, self.max_width),
            ("height", self.min_height, self.max_height),
            ("zoom", self.min_zoom, self.max_zoom),
        ];
        for (name, min, max) in ranges {
            if min > max {
                return Err(Error::InvalidConfig(format!(
                    "{} range is inverted: {} > {}",
                    name, min, max
                )));
            }
        }

        Ok(())
    }
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            density_ratio: DENSITY_RATIO,
            base_width: 1100.0,
            min_width: 700.0,
            max_width: 1800.0,
            min_height: 500.0,
            max_height: 1800.0,
            width_padding: 0.98,
            min_zoom: 0.10,
            max_zoom: 5.00,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = FitOptions::default();
        assert!((options.density_ratio - 4.0 / 3.0).abs() < 1e-12);
        assert_eq!(options.base_width, 1100.0);
        assert_eq!((options.min_width, options.max_width), (700.0, 1800.0));
        assert_eq!((options.min_height, options.max_height), (500.0, 1800.0));
        assert_eq!(options.width_padding, 0.98);
        assert_eq!((options.min_zoom, options.max_zoom), (0.10, 5.00));
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_fit_options_builder() {
        let options = FitOptions::new()
            .with_base_width(800.0)
            .with_width_bounds(600.0, 1200.0)
            .with_height_bounds(400.0, 1000.0)
            .with_width_padding(1.0)
            .with_zoom_bounds(0.5, 2.0);

        assert_eq!(options.base_width, 800.0);
        assert_eq!(options.max_width, 1200.0);
        assert_eq!(options.min_height, 400.0);
        assert_eq!(options.width_padding, 1.0);
        assert_eq!(options.max_zoom, 2.0);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(matches!(
            FitOptions::from_json(r#"{ "min_zoom": 3.0, "max_zoom": 2.0 }"#),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            FitOptions::from_json(r#"{ "width_padding": 0 }"#),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            FitOptions::from_json("not json"),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_from_json_empty_object_is_default() {
        assert_eq!(FitOptions::from_json("{}").unwrap(), FitOptions::default());
    }
}
