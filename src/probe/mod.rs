//! First-page geometry probing.
//!
//! A best-effort scan of a document's leading bytes for the first
//! `/MediaBox` and the nearest preceding `/Rotate`. No object graph is
//! resolved, so compressed object streams and encrypted documents simply
//! produce no geometry.

mod options;
mod reader;
mod scanner;

pub use options::{ProbeOptions, DEFAULT_PROBE_WINDOW, DEFAULT_ROTATION_LOOKBACK};
pub use reader::PageProbe;

use std::path::Path;

use crate::error::Result;
use crate::model::{ExtractionResult, PageGeometry};

/// Visible size of a document's first page, or `NotFound`.
///
/// Never fails: missing files, I/O errors, absent or degenerate boxes and
/// malformed numbers all yield [`ExtractionResult::NotFound`].
///
/// # Example
///
/// ```no_run
/// use pagefit::{extract_first_page_size, ExtractionResult};
///
/// match extract_first_page_size("document.pdf") {
///     ExtractionResult::Found(size) => println!("{} x {} pt", size.width, size.height),
///     ExtractionResult::NotFound => println!("using default size"),
/// }
/// ```
pub fn extract_first_page_size<P: AsRef<Path>>(path: P) -> ExtractionResult {
    extract_first_page_size_with_options(path, ProbeOptions::default())
}

/// [`extract_first_page_size`] with custom probe options.
pub fn extract_first_page_size_with_options<P: AsRef<Path>>(
    path: P,
    options: ProbeOptions,
) -> ExtractionResult {
    let path = path.as_ref();
    collapse(path, probe_file_with_options(path, options))
}

/// Probe a file and report why geometry is unavailable, if it is.
pub fn probe_file<P: AsRef<Path>>(path: P) -> Result<PageGeometry> {
    probe_file_with_options(path, ProbeOptions::default())
}

/// [`probe_file`] with custom probe options.
pub fn probe_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ProbeOptions,
) -> Result<PageGeometry> {
    PageProbe::open_with_options(path, options)?.geometry()
}

/// Probe an in-memory document. Only the probe window prefix is scanned.
pub fn probe_bytes(data: &[u8]) -> Result<PageGeometry> {
    probe_bytes_with_options(data, ProbeOptions::default())
}

/// [`probe_bytes`] with custom probe options.
pub fn probe_bytes_with_options(data: &[u8], options: ProbeOptions) -> Result<PageGeometry> {
    let end = data.len().min(options.probe_window);
    scanner::scan(&data[..end], &options)
}

/// Async variant of [`extract_first_page_size`].
#[cfg(feature = "async")]
pub async fn extract_first_page_size_async<P: AsRef<Path>>(
    path: P,
    options: ProbeOptions,
) -> ExtractionResult {
    let path = path.as_ref();
    let result = match read_window_async(path, options.probe_window).await {
        Ok(buffer) => scanner::scan(&buffer, &options),
        Err(e) => Err(e),
    };
    collapse(path, result)
}

#[cfg(feature = "async")]
async fn read_window_async(path: &Path, limit: usize) -> Result<Vec<u8>> {
    use tokio::io::AsyncReadExt;

    let file = tokio::fs::File::open(path).await?;
    let mut buffer = Vec::new();
    file.take(limit as u64).read_to_end(&mut buffer).await?;
    Ok(buffer)
}

fn collapse(path: &Path, result: Result<PageGeometry>) -> ExtractionResult {
    match result {
        Ok(geometry) => {
            log::debug!(
                "{}: {} x {} pt (rotate {})",
                path.display(),
                geometry.page_size.width,
                geometry.page_size.height,
                geometry.rotation.degrees()
            );
            ExtractionResult::Found(geometry.page_size)
        }
        Err(e) => {
            log::debug!("{}: no page geometry: {}", path.display(), e);
            ExtractionResult::NotFound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::PageSize;

    #[test]
    fn test_probe_bytes_respects_window() {
        let mut data = vec![b' '; 64];
        data.extend_from_slice(b"/MediaBox [0 0 612 792]");

        let options = ProbeOptions::new().with_probe_window(64);
        assert!(matches!(
            probe_bytes_with_options(&data, options),
            Err(Error::GeometryNotFound(64))
        ));
        assert_eq!(probe_bytes(&data).unwrap().page_size, PageSize::letter());
    }

    #[test]
    fn test_box_straddling_window_edge() {
        let data = b"/MediaBox [0 0 612 792]";
        let options = ProbeOptions::new().with_probe_window(data.len() - 1);
        assert!(probe_bytes_with_options(data, options).is_err());
    }

    #[test]
    fn test_extract_missing_file_is_not_found() {
        let result = extract_first_page_size("/no/such/dir/missing.pdf");
        assert_eq!(result, ExtractionResult::NotFound);
    }
}
