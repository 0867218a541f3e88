//! Document locators: plain paths and `file:` URIs.
//!
//! Preview hosts hand over either a filesystem path or a file URI. The probe
//! needs a path; the rendering surface wants a URI.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Resolve a host-supplied locator to a filesystem path.
///
/// Accepts plain paths (including Windows drive paths such as `C:\doc.pdf`)
/// and `file:` URIs with an empty or `localhost` authority. Any other
/// authority is kept as a UNC-style `//host/share` path. Other schemes are
/// rejected.
///
/// # Example
///
/// ```
/// use pagefit::uri::resolve_locator;
/// use std::path::PathBuf;
///
/// let path = resolve_locator("file:///tmp/My%20Report.pdf").unwrap();
/// assert_eq!(path, PathBuf::from("/tmp/My Report.pdf"));
/// ```
pub fn resolve_locator(locator: &str) -> Result<PathBuf> {
    let locator = locator.trim();
    if locator.is_empty() {
        return Err(Error::InvalidUri("empty locator".to_string()));
    }

    match scheme(locator) {
        None => Ok(PathBuf::from(locator)),
        // An existing file such as `report:v2.pdf` is a path, not a URI.
        Some(_) if Path::new(locator).exists() => Ok(PathBuf::from(locator)),
        Some(s) if s.eq_ignore_ascii_case("file") => parse_file_uri(&locator[s.len() + 1..]),
        Some(s) => Err(Error::InvalidUri(format!(
            "unsupported scheme '{}' in {}",
            s, locator
        ))),
    }
}

/// Build a `file:` URI for a path, percent-encoding each path segment.
///
/// Relative paths are resolved against the current directory first.
pub fn file_uri(path: &Path) -> String {
    let absolute = if path.is_relative() {
        std::env::current_dir()
            .map(|dir| dir.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    } else {
        path.to_path_buf()
    };

    let raw = absolute.to_string_lossy().replace('\\', "/");
    let mut uri = String::from("file://");
    if !raw.starts_with('/') {
        uri.push('/');
    }
    let segments: Vec<String> = raw
        .split('/')
        .map(|segment| {
            if is_drive(segment) {
                segment.to_string()
            } else {
                urlencoding::encode(segment).into_owned()
            }
        })
        .collect();
    uri.push_str(&segments.join("/"));
    uri
}

/// `C:` as a path segment.
fn is_drive(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// URI scheme of `s`, if it has one. Single letters are drive letters.
fn scheme(s: &str) -> Option<&str> {
    let (candidate, _) = s.split_once(':')?;
    let mut chars = candidate.chars();
    let first = chars.next()?;
    let valid = first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    (valid && candidate.len() > 1).then_some(candidate)
}

fn parse_file_uri(rest: &str) -> Result<PathBuf> {
    // Drop any query or fragment.
    let rest = rest.split(['?', '#']).next().unwrap_or_default();

    let (host, path) = match rest.strip_prefix("//") {
        Some(after) => match after.find('/') {
            Some(i) => (&after[..i], &after[i..]),
            None => (after, "/"),
        },
        None => ("", rest),
    };

    let decoded = urlencoding::decode(path)
        .map_err(|_| Error::InvalidUri(format!("{} is not UTF-8", path)))?;
    if host.is_empty() || host.eq_ignore_ascii_case("localhost") {
        Ok(PathBuf::from(strip_drive_slash(&decoded)))
    } else {
        Ok(PathBuf::from(format!("//{}{}", host, decoded)))
    }
}

/// `/C:/dir` names a drive path on Windows; elsewhere it stays as is.
fn strip_drive_slash(path: &str) -> &str {
    let bytes = path.as_bytes();
    let is_drive = cfg!(windows)
        && bytes.len() >= 3
        && bytes[0] == b'/'
        && bytes[1].is_ascii_alphabetic()
        && bytes[2] == b':';
    if is_drive {
        &path[1..]
    } else {
        path
    }
}
