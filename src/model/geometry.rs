//! Page geometry types.

use serde::{Deserialize, Serialize};

/// Visible extent of a page in points (1 point = 1/72 inch).
///
/// Always post-rotation: for pages rotated by 90 or 270 degrees the box
/// sides are already swapped. Both sides are at least one point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    /// Visible width in points
    pub width: f64,

    /// Visible height in points
    pub height: f64,
}

impl PageSize {
    /// Create a page size from visible width and height.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// US Letter (8.5 x 11 inches).
    pub fn letter() -> Self {
        Self::new(612.0, 792.0)
    }

    /// A4 (210 x 297 mm).
    pub fn a4() -> Self {
        Self::new(595.0, 842.0)
    }

    /// Height divided by width.
    pub fn aspect_ratio(&self) -> f64 {
        self.height / self.width
    }

    /// Check if the page is in landscape orientation.
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    /// Swap width and height.
    pub fn transposed(self) -> Self {
        Self::new(self.height, self.width)
    }
}

/// Page rotation, normalized to a quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    /// Upright
    #[default]
    Deg0,
    /// Quarter turn clockwise
    Deg90,
    /// Upside down
    Deg180,
    /// Quarter turn counter-clockwise
    Deg270,
}

impl Rotation {
    /// Normalize an arbitrary `/Rotate` value.
    ///
    /// The value is reduced modulo 360 into `0..360`. Values that are not a
    /// multiple of 90 are illegal in a page dictionary and are treated as
    /// upright, so only an exact quarter turn ever swaps the axes.
    pub fn from_degrees(degrees: i64) -> Self {
        match degrees.rem_euclid(360) {
            90 => Rotation::Deg90,
            180 => Rotation::Deg180,
            270 => Rotation::Deg270,
            _ => Rotation::Deg0,
        }
    }

    /// Rotation in degrees, one of 0, 90, 180, 270.
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Whether the visible page has width and height exchanged.
    pub fn swaps_axes(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

/// Raw `/MediaBox` rectangle as declared: `[x0 y0 x1 y1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MediaBox {
    /// First corner x
    pub x0: f64,
    /// First corner y
    pub y0: f64,
    /// Opposite corner x
    pub x1: f64,
    /// Opposite corner y
    pub y1: f64,
}

impl MediaBox {
    /// Create a box from its two corners.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Absolute horizontal extent.
    pub fn width(&self) -> f64 {
        (self.x1 - self.x0).abs()
    }

    /// Absolute vertical extent.
    pub fn height(&self) -> f64 {
        (self.y1 - self.y0).abs()
    }
}

/// Everything the probe learned about the first page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    /// The declared box
    pub media_box: MediaBox,

    /// Governing rotation (nearest preceding `/Rotate`)
    pub rotation: Rotation,

    /// Byte offset of the `/MediaBox` match in the file
    pub offset: usize,

    /// Visible size after rotation
    pub page_size: PageSize,

    /// Header version (e.g. "1.7") when the buffer starts with `%PDF-`
    pub pdf_version: Option<String>,
}

/// Outcome of a first-page size extraction.
///
/// `NotFound` never carries partial data; callers substitute their own
/// default size rather than treating it as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExtractionResult {
    /// A usable page size
    Found(PageSize),

    /// Geometry is unavailable for any reason
    #[default]
    NotFound,
}

impl ExtractionResult {
    /// The page size, if found.
    pub fn page_size(&self) -> Option<PageSize> {
        match self {
            ExtractionResult::Found(size) => Some(*size),
            ExtractionResult::NotFound => None,
        }
    }

    /// Whether a page size was found.
    pub fn is_found(&self) -> bool {
        matches!(self, ExtractionResult::Found(_))
    }
}

impl From<Option<PageSize>> for ExtractionResult {
    fn from(size: Option<PageSize>) -> Self {
        size.map_or(ExtractionResult::NotFound, ExtractionResult::Found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_normalization() {
        assert_eq!(Rotation::from_degrees(0), Rotation::Deg0);
        assert_eq!(Rotation::from_degrees(90), Rotation::Deg90);
        assert_eq!(Rotation::from_degrees(180), Rotation::Deg180);
        assert_eq!(Rotation::from_degrees(270), Rotation::Deg270);
        assert_eq!(Rotation::from_degrees(360), Rotation::Deg0);
        assert_eq!(Rotation::from_degrees(450), Rotation::Deg90);
        assert_eq!(Rotation::from_degrees(-90), Rotation::Deg270);
        assert_eq!(Rotation::from_degrees(-180), Rotation::Deg180);
        assert_eq!(Rotation::from_degrees(-450), Rotation::Deg270);
    }

    #[test]
    fn test_rotation_is_periodic() {
        for r in -1080..=1080 {
            let a = Rotation::from_degrees(r);
            assert_eq!(a, Rotation::from_degrees(r + 360));
            assert!([0, 90, 180, 270].contains(&a.degrees()));
        }
    }

    #[test]
    fn test_rotation_off_quarter_is_upright() {
        assert_eq!(Rotation::from_degrees(45), Rotation::Deg0);
        assert_eq!(Rotation::from_degrees(135), Rotation::Deg0);
        assert_eq!(Rotation::from_degrees(-1), Rotation::Deg0);
    }

    #[test]
    fn test_rotation_extremes() {
        assert_eq!(Rotation::from_degrees(i64::MIN).degrees() % 90, 0);
        assert_eq!(Rotation::from_degrees(i64::MAX).degrees() % 90, 0);
    }

    #[test]
    fn test_swaps_axes() {
        assert!(!Rotation::Deg0.swaps_axes());
        assert!(Rotation::Deg90.swaps_axes());
        assert!(!Rotation::Deg180.swaps_axes());
        assert!(Rotation::Deg270.swaps_axes());
    }

    #[test]
    fn test_media_box_extent() {
        let mb = MediaBox::new(612.0, 792.0, 0.0, 0.0);
        assert_eq!(mb.width(), 612.0);
        assert_eq!(mb.height(), 792.0);

        let mb = MediaBox::new(-10.5, 20.0, 100.0, -30.0);
        assert!((mb.width() - 110.5).abs() < 1e-9);
        assert!((mb.height() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_page_size_helpers() {
        let letter = PageSize::letter();
        assert!(!letter.is_landscape());
        assert!(letter.transposed().is_landscape());
        assert!((letter.aspect_ratio() - 792.0 / 612.0).abs() < 1e-12);
    }

    #[test]
    fn test_extraction_result_json() {
        let found = ExtractionResult::Found(PageSize::letter());
        let json = serde_json::to_string(&found).unwrap();
        assert_eq!(json, r#"{"status":"found","width":612.0,"height":792.0}"#);

        let json = serde_json::to_string(&ExtractionResult::NotFound).unwrap();
        assert_eq!(json, r#"{"status":"not_found"}"#);
    }

    #[test]
    fn test_extraction_result_from_option() {
        assert!(ExtractionResult::from(Some(PageSize::a4())).is_found());
        assert_eq!(ExtractionResult::from(None), ExtractionResult::NotFound);
        assert_eq!(ExtractionResult::NotFound.page_size(), None);
    }
}
