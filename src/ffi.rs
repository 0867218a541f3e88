//! C-ABI FFI bindings for preview hosts written in other languages.
//!
//! A host calls `pagefit_extract` once per document, `pagefit_preferred_size`
//! before creating its window, and `pagefit_zoom` on every load or resize of
//! its viewer.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::model::{ExtractionResult, PageSize, WindowSize};
use crate::{compute_preferred_size, compute_zoom, extract_from_locator, uri};

/// Result structure returned by string-producing FFI functions.
#[repr(C)]
pub struct PagefitResult {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The result data (null if failed). Must be freed with `pagefit_free_result`.
    pub data: *mut c_char,
    /// Error message (null if succeeded). Must be freed with `pagefit_free_result`.
    pub error: *mut c_char,
}

impl PagefitResult {
    fn success(data: String) -> Self {
        Self {
            success: true,
            data: CString::new(data).unwrap_or_default().into_raw(),
            error: ptr::null_mut(),
        }
    }

    fn error(message: String) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            error: CString::new(message).unwrap_or_default().into_raw(),
        }
    }
}

/// First-page geometry as seen from C. `width`/`height` are 0 when not found.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct PagefitExtraction {
    /// Whether a page size was found.
    pub found: bool,
    /// Visible width in points.
    pub width: f64,
    /// Visible height in points.
    pub height: f64,
}

impl From<ExtractionResult> for PagefitExtraction {
    fn from(result: ExtractionResult) -> Self {
        match result {
            ExtractionResult::Found(size) => Self {
                found: true,
                width: size.width,
                height: size.height,
            },
            ExtractionResult::NotFound => Self {
                found: false,
                width: 0.0,
                height: 0.0,
            },
        }
    }
}

impl From<PagefitExtraction> for ExtractionResult {
    fn from(ext: PagefitExtraction) -> Self {
        if ext.found {
            ExtractionResult::Found(PageSize::new(ext.width, ext.height))
        } else {
            ExtractionResult::NotFound
        }
    }
}

/// A window size in density units.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct PagefitSize {
    /// Width in density units.
    pub width: f64,
    /// Height in density units.
    pub height: f64,
}

/// Extract the first page's visible size.
///
/// Accepts a path or a `file:` URI. Never fails; `found` is false when the
/// geometry is unavailable for any reason, including a null locator.
///
/// # Safety
///
/// The `locator` must be null or a valid null-terminated UTF-8 string.
#[no_mangle]
pub unsafe extern "C" fn pagefit_extract(locator: *const c_char) -> PagefitExtraction {
    match locator_str(locator) {
        Some(s) => extract_from_locator(s).into(),
        None => ExtractionResult::NotFound.into(),
    }
}

/// Preferred host window size for extracted geometry.
#[no_mangle]
pub extern "C" fn pagefit_preferred_size(
    extraction: PagefitExtraction,
    fallback: PagefitSize,
) -> PagefitSize {
    let size = compute_preferred_size(
        &extraction.into(),
        WindowSize::new(fallback.width, fallback.height),
    );
    PagefitSize {
        width: size.width,
        height: size.height,
    }
}

/// Fit-to-width zoom for a viewport.
///
/// Returns -1.0 when no zoom applies (no geometry, or viewport not realized).
#[no_mangle]
pub extern "C" fn pagefit_zoom(
    extraction: PagefitExtraction,
    viewport_width: f64,
    viewport_height: f64,
) -> f64 {
    compute_zoom(&extraction.into(), viewport_width, viewport_height).unwrap_or(-1.0)
}

/// Probe a document and describe the outcome as JSON.
///
/// On success `data` holds the full geometry (box, rotation, offset, size).
/// On failure `error` explains why no geometry is available.
///
/// # Safety
///
/// The `locator` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `pagefit_free_result`.
#[no_mangle]
pub unsafe extern "C" fn pagefit_probe_json(locator: *const c_char) -> PagefitResult {
    if locator.is_null() {
        return PagefitResult::error("Locator cannot be null".to_string());
    }
    let Some(locator) = locator_str(locator) else {
        return PagefitResult::error("Invalid UTF-8 locator".to_string());
    };

    match probe_json_internal(locator) {
        Ok(json) => PagefitResult::success(json),
        Err(e) => PagefitResult::error(e.to_string()),
    }
}

fn probe_json_internal(locator: &str) -> crate::Result<String> {
    let path = uri::resolve_locator(locator)?;
    let geometry = crate::probe_file(path)?;
    serde_json::to_string(&geometry).map_err(|e| crate::Error::Serialize(e.to_string()))
}

/// Free a result returned by any pagefit function.
///
/// # Safety
///
/// The `result` must have been returned by a pagefit function.
/// This function should only be called once per result.
#[no_mangle]
pub unsafe extern "C" fn pagefit_free_result(result: PagefitResult) {
    if !result.data.is_null() {
        drop(CString::from_raw(result.data));
    }
    if !result.error.is_null() {
        drop(CString::from_raw(result.error));
    }
}

/// Get the version of the pagefit library.
///
/// The returned string is statically allocated and should not be freed.
#[no_mangle]
pub extern "C" fn pagefit_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}

unsafe fn locator_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let version = pagefit_version();
        assert!(!version.is_null());
    }

    #[test]
    fn test_null_locator() {
        unsafe {
            let ext = pagefit_extract(ptr::null());
            assert!(!ext.found);

            let result = pagefit_probe_json(ptr::null());
            assert!(!result.success);
            assert!(!result.error.is_null());
            pagefit_free_result(result);
        }
    }

    #[test]
    fn test_zoom_and_size() {
        let letter = PagefitExtraction {
            found: true,
            width: 612.0,
            height: 792.0,
        };
        let zoom = pagefit_zoom(letter, 1000.0, 800.0);
        assert!((zoom - 1.2).abs() < 0.01);
        assert_eq!(pagefit_zoom(letter, 0.0, 800.0), -1.0);

        let size = pagefit_preferred_size(
            letter,
            PagefitSize {
                width: 1000.0,
                height: 1200.0,
            },
        );
        assert_eq!(size.width, 1100.0);
    }

    #[test]
    fn test_missing_file_reports_error() {
        let path = CString::new("/no/such/file.pdf").unwrap();
        unsafe {
            let result = pagefit_probe_json(path.as_ptr());
            assert!(!result.success);
            let message = CStr::from_ptr(result.error).to_str().unwrap().to_string();
            assert!(message.starts_with("File unavailable"));
            pagefit_free_result(result);
        }
    }
}
