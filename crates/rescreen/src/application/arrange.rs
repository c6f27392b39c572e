//! ArrangeUseCase: resolves the configured layout against the connected monitors.
//!
//! The entry point is [`arrange`].  It takes one snapshot of the connected
//! monitors from a [`MonitorSource`], hands it to
//! [`Layout::build`](rescreen_core::Layout::build), and logs the outcome.
//!
//! # Why a snapshot? (for beginners)
//!
//! Monitors can be plugged in or out at any moment.  Taking one complete
//! snapshot up front means every step of the calculation sees the same set of
//! monitors, and running the use case twice on the same snapshot always
//! produces the same layout.

use rescreen_core::{Layout, LayoutConfig, LayoutError, MonitorCatalog, SnapshotCatalog};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Error type for monitor snapshot sources.
#[derive(Debug, Error)]
pub enum ScreenError {
    /// The snapshot could not be obtained.
    #[error("monitor snapshot unavailable from {origin}: {source}")]
    Unavailable {
        origin: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The snapshot lists the same monitor identifier more than once.
    #[error("monitor \"{0}\" is listed twice in the snapshot")]
    DuplicateMonitor(String),
}

/// Supplies the complete set of connected monitors.
pub trait MonitorSource: Send + Sync {
    /// Returns a snapshot of every connected monitor.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenError`] if monitor information cannot be retrieved.
    fn snapshot(&self) -> Result<SnapshotCatalog, ScreenError>;
}

/// Error type for the arrange use case.
#[derive(Debug, Error)]
pub enum ArrangeError {
    #[error(transparent)]
    Screens(#[from] ScreenError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Resolves `config` against the monitors reported by `source`.
///
/// Configured monitors that are not connected are skipped with a warning.
///
/// # Errors
///
/// Returns [`ArrangeError::Screens`] if the snapshot fails, or
/// [`ArrangeError::Layout`] if the layout cannot be resolved.
pub fn arrange(config: &LayoutConfig, source: &dyn MonitorSource) -> Result<Layout, ArrangeError> {
    let catalog = source.snapshot()?;
    debug!(monitors = catalog.len(), "monitor snapshot taken");

    for id in config.layout.iter().filter(|id| !id.is_empty()) {
        if catalog.by_id(id).is_none() {
            warn!(monitor = %id, "monitor is configured but not connected");
        }
    }

    let layout = Layout::build(config, &catalog)?;

    for (_, node) in layout.nodes().iter() {
        debug!(
            monitor = %node.id(),
            x = node.position().x,
            y = node.position().y,
            width = node.resolution().width,
            height = node.resolution().height,
            scale = node.scale(),
            primary = node.is_primary(),
            "output placed"
        );
    }
    info!(
        outputs = layout.nodes().len(),
        width = layout.resolution().width,
        height = layout.resolution().height,
        dpi = layout.dpi(),
        "layout resolved"
    );

    Ok(layout)
}
