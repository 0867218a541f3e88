//! PDF header sniffing.
//!
//! The probe never requires a header: a document with leading junk or a
//! missing `%PDF-` line still gets scanned for its page box. The header is
//! only reported for diagnostics.

use std::fmt;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// Readers accept the header anywhere in the first kilobyte.
const HEADER_SEARCH_LIMIT: usize = 1024;

/// Header information found at the start of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfHeader {
    /// PDF version (e.g., "1.7", "2.0")
    pub version: String,

    /// Byte offset of `%PDF-`; non-zero when junk precedes the header
    pub offset: usize,
}

impl fmt::Display for PdfHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PDF {}", self.version)
    }
}

/// Find the `%PDF-x.y` header within the first kilobyte of `data`.
///
/// # Example
/// ```
/// use pagefit::detect::detect_header;
///
/// let header = detect_header(b"%PDF-1.7\n%\xe2\xe3\xcf\xd3").unwrap();
/// assert_eq!(header.version, "1.7");
/// ```
pub fn detect_header(data: &[u8]) -> Option<PdfHeader> {
    let window = &data[..data.len().min(HEADER_SEARCH_LIMIT)];
    let offset = window
        .windows(PDF_MAGIC.len())
        .position(|w| w == PDF_MAGIC)?;

    let start = offset + PDF_MAGIC.len();
    let version_bytes = data.get(start..start + VERSION_LEN)?;
    if !is_valid_version(version_bytes) {
        return None;
    }

    // Checked ASCII above.
    let version = version_bytes.iter().map(|&b| b as char).collect();
    Some(PdfHeader { version, offset })
}

/// Check if bytes carry a PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    detect_header(data).is_some()
}

fn is_valid_version(version: &[u8]) -> bool {
    matches!(version, [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit())
}
