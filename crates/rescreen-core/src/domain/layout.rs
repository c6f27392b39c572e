//! The resolved layout: every placed monitor plus the canvas size and DPI.
//!
//! [`Layout::build`] is the single entry point that runs the whole pipeline:
//!
//! ```text
//! LayoutConfig ─► LayoutGrid::validate ─► build_nodes ─► canvas_resolution
//!                                              │               unified_dpi
//!                                              └─ MonitorCatalog
//! ```
//!
//! Either the whole pipeline succeeds or the first error is returned; callers
//! never see a partially resolved layout.

use thiserror::Error;

use super::config::LayoutConfig;
use super::geometry::{canvas_resolution, unified_dpi};
use super::graph::{build_nodes, Node, Nodes};
use super::grid::GridError;
use super::monitor::{MonitorCatalog, MonitorError, Size};

/// Errors that abort building a layout.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    /// The configured grid is invalid.
    #[error("invalid layout config: {0}")]
    Grid(#[from] GridError),

    /// A connected monitor lacks the data needed for geometry.
    #[error(transparent)]
    Monitor(#[from] MonitorError),

    /// None of the configured monitors is connected.
    #[error("none of the configured monitors is connected")]
    NoConnectedMonitors,
}

/// A fully resolved monitor arrangement.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    nodes: Nodes,
    resolution: Size,
    dpi: i32,
}

impl Layout {
    /// Resolves `config` against the monitors in `catalog`.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::Grid`] if the grid overflows or fails validation.
    /// - [`LayoutError::Monitor`] if a connected monitor has no current mode
    ///   or no physical size.
    /// - [`LayoutError::NoConnectedMonitors`] if no configured monitor is in
    ///   the catalog.
    pub fn build(config: &LayoutConfig, catalog: &dyn MonitorCatalog) -> Result<Self, LayoutError> {
        let grid = config.grid()?;
        grid.validate()?;

        let nodes = build_nodes(config, &grid, catalog)?;
        let resolution = canvas_resolution(&nodes);
        let dpi = unified_dpi(&nodes)?.ok_or(LayoutError::NoConnectedMonitors)?;

        Ok(Self {
            nodes,
            resolution,
            dpi,
        })
    }

    /// All placed nodes in row-major order.
    pub fn nodes(&self) -> &Nodes {
        &self.nodes
    }

    /// Total canvas size.
    pub fn resolution(&self) -> Size {
        self.resolution
    }

    /// The lowest DPI among the placed monitors.
    pub fn dpi(&self) -> i32 {
        self.dpi
    }

    /// The node for monitor `id`, if it was placed.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.find_by_monitor(id).map(|n| &self.nodes[n])
    }

    /// The first node flagged as primary, in row-major order.
    pub fn primary(&self) -> Option<&Node> {
        self.nodes.iter().map(|(_, n)| n).find(|n| n.is_primary())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
