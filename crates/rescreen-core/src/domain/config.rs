//! Layout configuration as declared by the user.
//!
//! ```toml
//! layout = [
//!     "DP-1", "HDMI-1", "", "",
//!     "eDP-1", "",      "", "",
//! ]
//!
//! [grid]
//! rows = 4
//! cols = 4
//!
//! [monitors.DP-1]
//! scale = 1.5
//! primary = true
//! ```
//!
//! Every field has a serde default so that a file containing only `layout` is
//! complete.  Reading the file from disk is the caller's job.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::grid::{GridError, GridSize, LayoutGrid};

/// Per-monitor hints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MonitorSettings {
    /// Scale factor applied to the current resolution; `0` (or anything
    /// non-positive) means "not scaled".
    #[serde(default)]
    pub scale: f32,
    /// Whether this monitor should become the primary output.
    #[serde(default)]
    pub primary: bool,
}

impl MonitorSettings {
    /// Returns `true` when an explicit positive scale is configured.
    pub fn is_scaled(&self) -> bool {
        self.scale > 0.0
    }

    /// The effective scale factor: the configured scale, or `1` when unscaled.
    pub fn scaling(&self) -> f32 {
        if self.is_scaled() {
            self.scale
        } else {
            1.0
        }
    }
}

/// The user-declared layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Grid dimensions used to interpret `layout`.
    #[serde(default)]
    pub grid: GridSize,
    /// Flat, row-major list of monitor identifiers; `""` marks an empty cell.
    #[serde(default)]
    pub layout: Vec<String>,
    /// Per-monitor hints keyed by monitor identifier.
    #[serde(default)]
    pub monitors: HashMap<String, MonitorSettings>,
}

impl LayoutConfig {
    /// Builds the grid model described by this configuration.
    ///
    /// The grid is not validated here; see [`LayoutGrid::validate`].
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TooLarge`] for an oversized `grid`, or
    /// [`GridError::TooManyCells`] when `layout` overflows it.
    pub fn grid(&self) -> Result<LayoutGrid, GridError> {
        LayoutGrid::new(self.grid, self.layout.clone())
    }

    /// Settings for `id`, or the defaults when the monitor has no entry.
    pub fn settings(&self, id: &str) -> MonitorSettings {
        self.monitors.get(id).copied().unwrap_or_default()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
