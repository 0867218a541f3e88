//! Probe options and configuration.

use serde::{Deserialize, Serialize};

/// Bytes read from the start of a document: 2 MiB.
pub const DEFAULT_PROBE_WINDOW: usize = 2 * 1024 * 1024;

/// Bytes scanned backwards from the page box for a `/Rotate` entry.
pub const DEFAULT_ROTATION_LOOKBACK: usize = 800;

/// Options for probing a document's first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeOptions {
    /// Maximum number of bytes read from the start of the file
    pub probe_window: usize,

    /// How far before the page box to look for a rotation
    pub rotation_lookback: usize,
}

impl ProbeOptions {
    /// Create new probe options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the probe window size in bytes.
    pub fn with_probe_window(mut self, bytes: usize) -> Self {
        self.probe_window = bytes;
        self
    }

    /// Set the rotation lookback distance in bytes.
    pub fn with_rotation_lookback(mut self, bytes: usize) -> Self {
        self.rotation_lookback = bytes;
        self
    }
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            probe_window: DEFAULT_PROBE_WINDOW,
            rotation_lookback: DEFAULT_ROTATION_LOOKBACK,
        }
    }
}
