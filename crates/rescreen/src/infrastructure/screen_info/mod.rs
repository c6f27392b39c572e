//! Sources of connected-monitor snapshots.
//!
//! The layout engine never talks to a display server directly; it consumes a
//! [`SnapshotCatalog`] produced by a [`MonitorSource`].  Two sources live here:
//!
//! | Source                 | Used by           | Data                          |
//! |------------------------|-------------------|-------------------------------|
//! | [`SnapshotFileSource`] | the `rescreen` CLI | a TOML or JSON snapshot file  |
//! | [`MockMonitorSource`]  | tests             | a fixed in-memory monitor list |
//!
//! A snapshot file looks like:
//!
//! ```toml
//! [[monitors]]
//! id = "DP-1"
//! size = { width = 597.7, height = 336.2 }
//!
//! [[monitors.modes]]
//! resolution = { width = 3840, height = 2160 }
//! refresh_rates = [{ value = 60.0, current = true, preferred = true }]
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rescreen_core::{Mode, Monitor, Size, SnapshotCatalog};
use tracing::debug;

use crate::application::arrange::{MonitorSource, ScreenError};
use crate::infrastructure::storage::document::read_document;

// ── File-backed source ────────────────────────────────────────────────────────

/// Reads the monitor snapshot from a TOML or JSON file on every call.
#[derive(Debug, Clone)]
pub struct SnapshotFileSource {
    path: PathBuf,
}

impl SnapshotFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MonitorSource for SnapshotFileSource {
    fn snapshot(&self) -> Result<SnapshotCatalog, ScreenError> {
        let catalog: SnapshotCatalog =
            read_document(&self.path).map_err(|e| ScreenError::Unavailable {
                origin: self.path.display().to_string(),
                source: Box::new(e),
            })?;
        check_unique_ids(&catalog)?;
        debug!(path = %self.path.display(), monitors = catalog.len(), "monitor snapshot read");
        Ok(catalog)
    }
}

fn check_unique_ids(catalog: &SnapshotCatalog) -> Result<(), ScreenError> {
    let mut seen = HashSet::new();
    for monitor in catalog.monitors() {
        if !seen.insert(monitor.id.as_str()) {
            return Err(ScreenError::DuplicateMonitor(monitor.id.clone()));
        }
    }
    Ok(())
}

// ── Mock implementation (always compiled for tests) ───────────────────────────

/// A source that always returns the same monitors.
///
/// Makes no file or display server calls, so tests run anywhere.
#[derive(Debug, Clone, Default)]
pub struct MockMonitorSource {
    /// The fixed list of monitors returned by every snapshot.
    pub monitors: Vec<Monitor>,
}

impl MockMonitorSource {
    pub fn new(monitors: Vec<Monitor>) -> Self {
        Self { monitors }
    }

    /// One 27" 3840×2160 monitor on `DP-1`.
    pub fn single_4k() -> Self {
        Self::new(vec![uhd_27("DP-1")])
    }

    /// Two 27" 3840×2160 monitors on `DP-1` and `DP-2`.
    pub fn dual_4k() -> Self {
        Self::new(vec![uhd_27("DP-1"), uhd_27("DP-2")])
    }
}

impl MonitorSource for MockMonitorSource {
    fn snapshot(&self) -> Result<SnapshotCatalog, ScreenError> {
        let catalog = SnapshotCatalog::new(self.monitors.clone());
        check_unique_ids(&catalog)?;
        Ok(catalog)
    }
}

fn uhd_27(id: &str) -> Monitor {
    Monitor::new(
        id,
        vec![
            Mode::new(1920.0, 1080.0),
            Mode::new(2560.0, 1440.0),
            Mode::current(3840.0, 2160.0),
        ],
        Size::new(597.7, 336.2),
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────
