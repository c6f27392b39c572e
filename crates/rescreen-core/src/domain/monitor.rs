//! Live monitor metadata and the catalog that supplies it.
//!
//! A [`Monitor`] is what the display subsystem reports for one output: its
//! identifier (e.g. `"DP-1"`), the modes it supports, and its physical size in
//! millimetres.  The layout engine only ever reads monitors; it never changes
//! them.
//!
//! The [`MonitorCatalog`] trait is the single boundary between the layout
//! engine and the display subsystem.  Production code hands in a complete
//! [`SnapshotCatalog`]; tests use the generated `MockMonitorCatalog`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Millimetres per inch, used to turn physical sizes into DPI.
const MM_PER_INCH: f32 = 25.4;

/// Errors raised while reading geometry from a monitor.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MonitorError {
    /// None of the monitor's modes is flagged as current.
    #[error("monitor \"{0}\" current mode not found")]
    CurrentModeNotFound(String),

    /// The monitor reports a zero (or negative) physical size, so DPI is undefined.
    #[error("monitor \"{id}\" reports no usable physical size ({width}mm x {height}mm)")]
    MissingPhysicalSize { id: String, width: f32, height: f32 },
}

/// A width/height pair.
///
/// Used for pixel resolutions and for physical sizes in millimetres, both of
/// which may be fractional (scaled resolutions, EDID sizes).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Multiplies both dimensions by `factor`.
    pub fn rescale(&self, factor: f32) -> Size {
        Size {
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// Returns `true` if either dimension is zero or negative.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Absolute pixel offset of a monitor from the layout origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One refresh rate offered by a mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RefreshRate {
    /// Refresh rate in Hz.
    #[serde(default)]
    pub value: f32,
    /// The monitor is running at this rate right now.
    #[serde(default)]
    pub current: bool,
    /// The rate the monitor advertises as preferred.
    #[serde(default)]
    pub preferred: bool,
}

/// A display mode: a pixel resolution and the refresh rates available at it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mode {
    pub resolution: Size,
    #[serde(default)]
    pub refresh_rates: Vec<RefreshRate>,
}

impl Mode {
    /// A mode that is not in use.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            resolution: Size::new(width, height),
            refresh_rates: Vec::new(),
        }
    }

    /// A mode the monitor is currently running, at 60 Hz.
    pub fn current(width: f32, height: f32) -> Self {
        Self {
            resolution: Size::new(width, height),
            refresh_rates: vec![RefreshRate {
                value: 60.0,
                current: true,
                preferred: true,
            }],
        }
    }

    /// A mode is current when any of its refresh rates is current.
    pub fn is_current(&self) -> bool {
        self.refresh_rates.iter().any(|r| r.current)
    }

    /// The refresh rate currently in use, if this is the current mode.
    pub fn current_rate(&self) -> Option<&RefreshRate> {
        self.refresh_rates.iter().find(|r| r.current)
    }
}

/// A connected monitor as reported by the display subsystem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Monitor {
    /// Output identifier, e.g. `"DP-1"`.
    pub id: String,
    /// Supported modes.
    #[serde(default)]
    pub modes: Vec<Mode>,
    /// Physical size in millimetres.
    #[serde(default)]
    pub size: Size,
}

impl Monitor {
    pub fn new(id: impl Into<String>, modes: Vec<Mode>, size: Size) -> Self {
        Self {
            id: id.into(),
            modes,
            size,
        }
    }

    /// Returns the first mode flagged as current.
    pub fn current_mode(&self) -> Option<&Mode> {
        self.modes.iter().find(|m| m.is_current())
    }

    /// Horizontal dots per inch at the current mode.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::CurrentModeNotFound`] without a current mode, or
    /// [`MonitorError::MissingPhysicalSize`] when the physical size is unknown.
    pub fn dpi(&self) -> Result<f32, MonitorError> {
        let mode = self
            .current_mode()
            .ok_or_else(|| MonitorError::CurrentModeNotFound(self.id.clone()))?;

        if self.size.is_degenerate() {
            return Err(MonitorError::MissingPhysicalSize {
                id: self.id.clone(),
                width: self.size.width,
                height: self.size.height,
            });
        }

        Ok(mode.resolution.width / (self.size.width / MM_PER_INCH))
    }
}

/// Lookup of live monitors by identifier.
#[cfg_attr(test, mockall::automock)]
pub trait MonitorCatalog {
    /// Returns the monitor with the given identifier, or `None` when it is not
    /// connected.
    fn by_id(&self, id: &str) -> Option<Monitor>;
}

/// A complete, immutable snapshot of the connected monitors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotCatalog {
    #[serde(default)]
    monitors: Vec<Monitor>,
}

impl SnapshotCatalog {
    pub fn new(monitors: Vec<Monitor>) -> Self {
        Self { monitors }
    }

    pub fn monitors(&self) -> &[Monitor] {
        &self.monitors
    }

    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl MonitorCatalog for SnapshotCatalog {
    fn by_id(&self, id: &str) -> Option<Monitor> {
        self.monitors.iter().find(|m| m.id == id).cloned()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
