//! Shared builders for the domain unit tests.

use super::config::LayoutConfig;
use super::graph::{build_nodes, NodeId, Nodes};
use super::grid::GridSize;
use super::monitor::{Mode, Monitor, SnapshotCatalog, Size};

/// A monitor running `width × height`, physically 500 × 300 mm.
pub(crate) fn monitor(id: &str, width: f32, height: f32) -> Monitor {
    Monitor::new(
        id,
        vec![Mode::current(width, height)],
        Size::new(500.0, 300.0),
    )
}

/// A default (4 × 4) configuration with the given flat layout and no
/// per-monitor settings.
pub(crate) fn config_for(cells: &[&str]) -> LayoutConfig {
    LayoutConfig {
        layout: cells.iter().map(|c| c.to_string()).collect(),
        ..LayoutConfig::default()
    }
}

/// Builds a graph from a picture of per-cell resolutions.  `None` marks an
/// empty cell; occupied cells get the identifier `"<row>:<col>"`.
pub(crate) fn nodes_from(rows: &[&[Option<(f32, f32)>]]) -> Nodes {
    let cols = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    let mut cfg = LayoutConfig {
        grid: GridSize::new(rows.len(), cols),
        ..LayoutConfig::default()
    };
    let mut monitors = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        for j in 0..cols {
            match row.get(j).copied().flatten() {
                Some((w, h)) => {
                    let id = cell_id(i, j);
                    monitors.push(monitor(&id, w, h));
                    cfg.layout.push(id);
                }
                None => cfg.layout.push(String::new()),
            }
        }
    }

    let grid = cfg.grid().expect("fixture fits its grid");
    build_nodes(&cfg, &grid, &SnapshotCatalog::new(monitors)).expect("fixture builds")
}

/// Identifier of the node created for cell `(row, col)` by [`nodes_from`].
pub(crate) fn at(nodes: &Nodes, row: usize, col: usize) -> NodeId {
    nodes
        .find_by_monitor(&cell_id(row, col))
        .unwrap_or_else(|| panic!("no node at {row}:{col}"))
}

fn cell_id(row: usize, col: usize) -> String {
    format!("{row}:{col}")
}
