//! Byte-level search for the first page box and its rotation.
//!
//! The buffer is matched as raw bytes: every byte is one matching unit and
//! nothing is validated or substituted, so binary stream data between the
//! ASCII-delimited dictionaries can never shift or hide a match. This is the
//! same view a Latin-1 decode of the buffer would give.

use std::sync::OnceLock;

use regex::bytes::Regex;

use crate::detect::detect_header;
use crate::error::{Error, Result};
use crate::model::{MediaBox, PageGeometry, PageSize, Rotation};

use super::options::ProbeOptions;

/// PDF whitespace, plus the two Latin-1 space characters (NEL, NBSP).
const WS: &str = r"[\x00\t\n\x0B\x0C\r \x85\xA0]";

/// Optionally signed, optionally fractional number: `612`, `-0.5`, `.25`, `+3.`
const NUM: &str = r"[+-]?(?:\d+(?:\.\d*)?|\.\d+)";

/// Boxes narrower or shorter than this are placeholders.
const MIN_SIDE: f64 = 1.0;

// Patterns are compiled once per process and shared by every probe.
fn media_box_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(
            r"(?-u)/MediaBox{ws}*\[{ws}*({num}){ws}+({num}){ws}+({num}){ws}+({num}){ws}*\]",
            ws = WS,
            num = NUM
        );
        Regex::new(&pattern).expect("MediaBox pattern is valid")
    })
}

fn rotate_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(r"(?-u)/Rotate{ws}*([+-]?\d+)", ws = WS);
        Regex::new(&pattern).expect("Rotate pattern is valid")
    })
}

/// A `/MediaBox` declaration found in the buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BoxMatch {
    pub media_box: MediaBox,
    pub offset: usize,
}

/// Run the full scan over an already-bounded buffer.
pub(crate) fn scan(buffer: &[u8], options: &ProbeOptions) -> Result<PageGeometry> {
    if buffer.is_empty() {
        return Err(Error::Empty);
    }

    let found = find_media_box(buffer)?.ok_or(Error::GeometryNotFound(buffer.len()))?;
    let media_box = found.media_box;
    let (width, height) = (media_box.width(), media_box.height());
    log::debug!(
        "MediaBox at byte {}: [{} {} {} {}]",
        found.offset,
        media_box.x0,
        media_box.y0,
        media_box.x1,
        media_box.y1
    );

    if width < MIN_SIDE || height < MIN_SIDE {
        return Err(Error::DegenerateBox { width, height });
    }

    let rotation = find_rotation(buffer, found.offset, options.rotation_lookback)?;
    let mut page_size = PageSize::new(width, height);
    if rotation.swaps_axes() {
        page_size = page_size.transposed();
    }

    Ok(PageGeometry {
        media_box,
        rotation,
        offset: found.offset,
        page_size,
        pdf_version: detect_header(buffer).map(|h| h.version),
    })
}

/// Locate the first `/MediaBox [a b c d]` in the buffer.
///
/// Later declarations are ignored even when they belong to the first page
/// object; ownership is never checked.
pub(crate) fn find_media_box(buffer: &[u8]) -> Result<Option<BoxMatch>> {
    let Some(caps) = media_box_regex().captures(buffer) else {
        return Ok(None);
    };

    let mut coords = [0.0f64; 4];
    for (i, coord) in coords.iter_mut().enumerate() {
        *coord = parse_number(&caps[i + 1])?;
    }
    let [x0, y0, x1, y1] = coords;

    // Group 0 always participates in a match.
    let offset = caps.get(0).map_or(0, |m| m.start());

    Ok(Some(BoxMatch {
        media_box: MediaBox::new(x0, y0, x1, y1),
        offset,
    }))
}

/// Rotation governing a page box that starts at `box_offset`.
///
/// Looks back at most `lookback` bytes and takes the last `/Rotate` there,
/// i.e. the one nearest the box in document order. This is a proximity
/// guess: the entry may belong to a neighbouring object, and a `/Rotate`
/// written after the box is not seen.
pub(crate) fn find_rotation(buffer: &[u8], box_offset: usize, lookback: usize) -> Result<Rotation> {
    let end = box_offset.min(buffer.len());
    let start = end.saturating_sub(lookback);

    let Some(caps) = rotate_regex().captures_iter(&buffer[start..end]).last() else {
        return Ok(Rotation::Deg0);
    };

    let raw = &caps[1];
    let text = ascii(raw)?;
    let degrees = text
        .parse::<i64>()
        .map_err(|e| Error::ParseMalformed(format!("/Rotate {}: {}", text, e)))?;

    let rotation = Rotation::from_degrees(degrees);
    log::debug!("Rotate {} normalized to {}", degrees, rotation.degrees());
    Ok(rotation)
}

fn parse_number(raw: &[u8]) -> Result<f64> {
    let text = ascii(raw)?;
    let value = text
        .parse::<f64>()
        .map_err(|e| Error::ParseMalformed(format!("'{}': {}", text, e)))?;
    if !value.is_finite() {
        return Err(Error::ParseMalformed(format!("'{}' is out of range", text)));
    }
    Ok(value)
}

fn ascii(raw: &[u8]) -> Result<&str> {
    std::str::from_utf8(raw).map_err(|e| Error::ParseMalformed(e.to_string()))
}
