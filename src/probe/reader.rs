//! Bounded document reader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Result;
use crate::model::PageGeometry;

use super::options::ProbeOptions;
use super::scanner::scan;

/// The probe window of a document, ready to be scanned.
///
/// Only the first [`ProbeOptions::probe_window`] bytes are ever read; a page
/// box that starts beyond that point is invisible to the probe.
#[derive(Debug, Clone)]
pub struct PageProbe {
    buffer: Vec<u8>,
    options: ProbeOptions,
}

impl PageProbe {
    /// Read the probe window of a file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ProbeOptions::default())
    }

    /// Read the probe window of a file with custom options.
    ///
    /// `File::open` requests shared read access on every platform (on Windows
    /// it passes read, write and delete sharing), so a viewer holding the same
    /// document open neither blocks nor is blocked by the probe.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ProbeOptions) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;

        let capacity = file
            .metadata()
            .map(|m| (m.len() as usize).min(options.probe_window))
            .unwrap_or(0);
        let buffer = read_window(file, options.probe_window, capacity)?;
        log::debug!("Read {} bytes from {}", buffer.len(), path.display());

        Ok(Self { buffer, options })
    }

    /// Probe an in-memory document.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self::from_bytes_with_options(data, ProbeOptions::default())
    }

    /// Probe an in-memory document with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ProbeOptions) -> Self {
        let end = data.len().min(options.probe_window);
        Self {
            buffer: data[..end].to_vec(),
            options,
        }
    }

    /// Read the probe window from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ProbeOptions::default())
    }

    /// Read the probe window from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(reader: R, options: ProbeOptions) -> Result<Self> {
        let buffer = read_window(reader, options.probe_window, 0)?;
        Ok(Self { buffer, options })
    }

    /// Scan the window for the first page's geometry.
    pub fn geometry(&self) -> Result<PageGeometry> {
        scan(&self.buffer, &self.options)
    }

    /// Number of bytes held, never more than the probe window.
    pub fn window_len(&self) -> usize {
        self.buffer.len()
    }

    /// The options this probe was created with.
    pub fn options(&self) -> &ProbeOptions {
        &self.options
    }
}

fn read_window<R: Read>(reader: R, limit: usize, capacity: usize) -> Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(capacity);
    reader.take(limit as u64).read_to_end(&mut buffer)?;
    Ok(buffer)
}
