//! Wiring between a preview host, the probe, and a rendering surface.
//!
//! The rendering surface is whatever embedded viewer actually draws the
//! document. It is modelled as a trait so hosts plug in their own viewer and
//! tests plug in a fake.
//!
//! Typical lifecycle:
//!
//! ```no_run
//! use pagefit::session::{PreviewSession, RenderSurface, SurfaceEvent, WindowSizeMemory};
//! # fn run(surface: &mut dyn RenderSurface) -> pagefit::Result<()> {
//! let mut memory = WindowSizeMemory::default();
//!
//! let mut session = PreviewSession::open("file:///tmp/report.pdf", &memory)?;
//! let window = session.preferred_size();   // host sizes its window
//! session.attach(surface)?;                // viewer starts loading
//! session.handle(surface, SurfaceEvent::LoadCompleted);
//! session.handle(surface, SurfaceEvent::Resized);
//! session.close(window, &mut memory);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fit::ViewportFitter;
use crate::model::{ExtractionResult, WindowSize};
use crate::probe::{extract_first_page_size_with_options, ProbeOptions};
use crate::uri::{file_uri, resolve_locator};

/// An embedded document viewer, treated as a black box.
pub trait RenderSurface {
    /// Start loading a document from a `file:` URI.
    fn load_document(&mut self, uri: &str) -> Result<()>;

    /// Current viewport size; zero or negative while not yet laid out.
    fn viewport_size(&self) -> WindowSize;

    /// Apply a zoom factor. May fail where programmatic zoom is blocked.
    fn set_zoom_factor(&mut self, zoom: f64) -> Result<()>;
}

/// Notifications the host forwards from its rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The document finished loading
    LoadCompleted,
    /// The viewport changed size
    Resized,
}

/// Last preferred window size, carried by the host between document views.
///
/// Read when a view opens (as the fallback for documents without geometry)
/// and written when it closes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSizeMemory {
    last: WindowSize,
}

impl WindowSizeMemory {
    /// Initial size before any view has closed.
    pub const DEFAULT_SIZE: WindowSize = WindowSize {
        width: 1000.0,
        height: 1200.0,
    };

    /// Start from a specific size.
    pub fn new(initial: WindowSize) -> Self {
        Self { last: initial }
    }

    /// The remembered size.
    pub fn last_known(&self) -> WindowSize {
        self.last
    }

    /// Remember a size. Unrealized sizes (minimized, collapsed) are ignored.
    pub fn remember(&mut self, size: WindowSize) {
        if size.is_realized() {
            self.last = size;
        }
    }
}

impl Default for WindowSizeMemory {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}

/// One document view: probed once, refitted on every surface event.
#[derive(Debug, Clone)]
pub struct PreviewSession {
    path: PathBuf,
    geometry: ExtractionResult,
    fallback: WindowSize,
    fitter: ViewportFitter,
    zoom: Option<f64>,
}

impl PreviewSession {
    /// Open a view for a path or `file:` URI with default options.
    ///
    /// Only an unusable locator is an error; a document without readable
    /// geometry still opens and falls back to the remembered size.
    pub fn open(locator: &str, memory: &WindowSizeMemory) -> Result<Self> {
        Self::open_with(
            locator,
            memory,
            ProbeOptions::default(),
            ViewportFitter::default(),
        )
    }

    /// Open a view with custom probe options and fitter.
    pub fn open_with(
        locator: &str,
        memory: &WindowSizeMemory,
        probe: ProbeOptions,
        fitter: ViewportFitter,
    ) -> Result<Self> {
        let path = resolve_locator(locator)?;
        let geometry = extract_first_page_size_with_options(&path, probe);
        Ok(Self::with_geometry(path, geometry, memory, fitter))
    }

    /// Build a view from geometry the host already has.
    pub fn with_geometry(
        path: PathBuf,
        geometry: ExtractionResult,
        memory: &WindowSizeMemory,
        fitter: ViewportFitter,
    ) -> Self {
        Self {
            path,
            geometry,
            fallback: memory.last_known(),
            fitter,
            zoom: None,
        }
    }

    /// Resolved document path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Cached first-page geometry.
    pub fn geometry(&self) -> ExtractionResult {
        self.geometry
    }

    /// Zoom factor last applied successfully, if any.
    pub fn zoom(&self) -> Option<f64> {
        self.zoom
    }

    /// Window size to request from the host before the surface exists.
    pub fn preferred_size(&self) -> WindowSize {
        self.fitter.preferred_size(&self.geometry, self.fallback)
    }

    /// Hand the document to the surface.
    pub fn attach<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) -> Result<()> {
        surface.load_document(&file_uri(&self.path))
    }

    /// React to a surface event. Returns the zoom applied, if any.
    pub fn handle<S: RenderSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        event: SurfaceEvent,
    ) -> Option<f64> {
        match event {
            SurfaceEvent::LoadCompleted | SurfaceEvent::Resized => self.refit(surface),
        }
    }

    /// Recompute the fit-to-width zoom and apply it.
    ///
    /// A surface that refuses the zoom keeps its previous factor; the
    /// failure is logged and otherwise ignored.
    pub fn refit<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) -> Option<f64> {
        let viewport = surface.viewport_size();
        let zoom = self.fitter.zoom_for(&self.geometry, viewport)?;

        match surface.set_zoom_factor(zoom) {
            Ok(()) => {
                log::debug!("Applied zoom {:.3} for viewport {}", zoom, viewport);
                self.zoom = Some(zoom);
                Some(zoom)
            }
            Err(e) => {
                log::debug!("Surface rejected zoom {:.3}: {}", zoom, e);
                None
            }
        }
    }

    /// End the view, remembering the final window size for the next one.
    pub fn close(self, final_size: WindowSize, memory: &mut WindowSizeMemory) {
        memory.remember(final_size);
    }
}
