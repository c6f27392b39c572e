//! # rescreen-core
//!
//! Layout engine for rescreen: turns a logical grid of monitor identifiers and
//! the live monitor metadata into absolute positions, scaled resolutions, a
//! total canvas size, and a unified DPI.
//!
//! The crate performs no I/O.  Reading configuration files, querying the
//! display server, and applying the layout are left to the caller.
//!
//! ```
//! use rescreen_core::{Layout, LayoutConfig, Mode, Monitor, Size, SnapshotCatalog};
//!
//! let config = LayoutConfig {
//!     layout: vec!["DP-1".into(), "HDMI-1".into()],
//!     ..LayoutConfig::default()
//! };
//! let catalog = SnapshotCatalog::new(vec![
//!     Monitor::new("DP-1", vec![Mode::current(2560.0, 1440.0)], Size::new(597.0, 336.0)),
//!     Monitor::new("HDMI-1", vec![Mode::current(1920.0, 1080.0)], Size::new(527.0, 296.0)),
//! ]);
//!
//! let layout = Layout::build(&config, &catalog).unwrap();
//! assert_eq!(layout.resolution(), Size::new(4480.0, 1440.0));
//! assert_eq!(layout.node("HDMI-1").unwrap().position().x, 2560);
//! ```

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `rescreen_core::Layout` instead of `rescreen_core::domain::layout::Layout`.
pub use domain::config::{LayoutConfig, MonitorSettings};
pub use domain::graph::{Direction, Node, NodeId, Nodes};
pub use domain::grid::{GridError, GridSize, LayoutGrid};
pub use domain::layout::{Layout, LayoutError};
pub use domain::monitor::{
    Mode, Monitor, MonitorCatalog, MonitorError, Position, RefreshRate, Size, SnapshotCatalog,
};
