//! # pagefit
//!
//! Best-effort PDF page geometry for document previews.
//!
//! This library reads the first page's size straight from a document's
//! leading bytes, without a PDF parser, and turns it into display
//! parameters: a preferred host window size and a fit-to-width zoom factor
//! for an embedded viewer.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pagefit::{compute_preferred_size, compute_zoom, extract_first_page_size, WindowSize};
//!
//! let geometry = extract_first_page_size("document.pdf");
//!
//! // Before the viewer exists: size the host window.
//! let window = compute_preferred_size(&geometry, WindowSize::new(1000.0, 1200.0));
//! println!("window: {}", window);
//!
//! // Once the viewer reports its viewport: fit the page width.
//! if let Some(zoom) = compute_zoom(&geometry, 1000.0, 800.0) {
//!     println!("zoom: {:.2}", zoom);
//! }
//! ```
//!
//! ## Features
//!
//! - **Bounded probe**: at most 2 MiB is read, scanned as raw bytes
//! - **Rotation aware**: `/Rotate 90` and `/Rotate 270` swap the visible sides
//! - **Fails closed**: unreadable or unusual documents give `NotFound`, never an error
//! - **Viewer agnostic**: [`session::RenderSurface`] abstracts the embedded viewer
//! - **C ABI** behind the `ffi` feature, async probing behind `async`

pub mod detect;
pub mod error;
pub mod fit;
pub mod model;
pub mod probe;
pub mod session;
pub mod uri;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types
pub use error::{Error, Result};
pub use fit::{compute_preferred_size, compute_zoom, FitOptions, ViewportFitter};
pub use model::{ExtractionResult, MediaBox, PageGeometry, PageSize, Rotation, WindowSize};
pub use probe::{
    extract_first_page_size, extract_first_page_size_with_options, probe_bytes,
    probe_bytes_with_options, probe_file, probe_file_with_options, PageProbe, ProbeOptions,
};
pub use session::{PreviewSession, RenderSurface, SurfaceEvent, WindowSizeMemory};

#[cfg(feature = "async")]
pub use probe::extract_first_page_size_async;

/// Extract geometry for a path or `file:` URI.
///
/// An unusable locator is reported as `NotFound` like every other failure.
///
/// # Example
///
/// ```no_run
/// use pagefit::extract_from_locator;
///
/// let geometry = extract_from_locator("file:///home/me/Letter.pdf");
/// println!("{:?}", geometry.page_size());
/// ```
pub fn extract_from_locator(locator: &str) -> ExtractionResult {
    match uri::resolve_locator(locator) {
        Ok(path) => extract_first_page_size(path),
        Err(e) => {
            log::debug!("{}", e);
            ExtractionResult::NotFound
        }
    }
}
