//! Host window sizing types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A window or viewport size in density units (1/96 inch).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    /// Width in density units
    pub width: f64,

    /// Height in density units
    pub height: f64,
}

impl WindowSize {
    /// Create a new window size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both sides are positive finite numbers.
    pub fn is_realized(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parses `WIDTHxHEIGHT`, e.g. `1000x800`.
impl FromStr for WindowSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
        let width = w
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid width '{}': {}", w, e))?;
        let height = h
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid height '{}': {}", h, e))?;
        Ok(Self::new(width, height))
    }
}
