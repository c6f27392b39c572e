//! Geometry derived from the node graph: scaled resolutions, absolute
//! positions, the canvas size, and the unified DPI.
//!
//! # Heterogeneous rows and columns (for beginners)
//!
//! Monitors in the same grid column need not be equally wide, and monitors in
//! the same row need not be equally tall.  A monitor is therefore offset by the
//! widest occupant of each column to its left and the tallest occupant of each
//! row above it, not just by its immediate neighbour:
//!
//! ```text
//!   *---------*---------*---------*
//!   | 300x400 | 400x500 | 200x600 |
//!   | 500x600 | 200x550 | 300x200 |
//!   | 400x200 | 400x700 |   (N)   |   N is placed at (800, 1200)
//!   *---------*---------*---------*
//! ```
//!
//! Missing cells are simply absent from these walks; they never count as
//! zero-sized monitors.

use std::iter;

use super::graph::{Direction, NodeId, Nodes};
use super::monitor::{Monitor, MonitorError, Position, Size};

/// Current-mode resolution of `monitor` multiplied by `scale` on both axes.
///
/// # Errors
///
/// Returns [`MonitorError::CurrentModeNotFound`] if no mode is current.
pub fn scaled_resolution(monitor: &Monitor, scale: f32) -> Result<Size, MonitorError> {
    let mode = monitor
        .current_mode()
        .ok_or_else(|| MonitorError::CurrentModeNotFound(monitor.id.clone()))?;
    Ok(mode.resolution.rescale(scale))
}

/// Absolute position of node `id`.
///
/// X accumulates, for every node on the left chain, the wider of that node and
/// the nodes stacked above `id`.  Y accumulates, for every node on the upward
/// chain, the tallest node of that node's row (walking left).  Each addend is
/// truncated to whole pixels and the sums saturate at `i32::MAX`.
pub fn node_position(nodes: &Nodes, id: NodeId) -> Position {
    let above_width = nodes
        .chain(id, Direction::Top)
        .map(|n| nodes[n].resolution().width)
        .fold(0.0, f32::max);

    let x = nodes
        .chain(id, Direction::Left)
        .map(|left| nodes[left].resolution().width.max(above_width) as i32)
        .fold(0, i32::saturating_add);

    let y = nodes
        .chain(id, Direction::Top)
        .map(|top| {
            nodes
                .chain(top, Direction::Left)
                .map(|n| nodes[n].resolution().height)
                .fold(nodes[top].resolution().height, f32::max) as i32
        })
        .fold(0, i32::saturating_add);

    Position { x, y }
}

/// Total canvas covered by the layout.
///
/// Starting from the top-left anchor, sums the widest node of every column
/// reachable to the right and the tallest node of every row reachable
/// downwards.  An empty graph has a zero-sized canvas.
pub fn canvas_resolution(nodes: &Nodes) -> Size {
    let Some(first) = nodes.ids().next() else {
        return Size::default();
    };

    let anchor = nodes.chain(first, Direction::Left).last().unwrap_or(first);
    let anchor = nodes.chain(anchor, Direction::Top).last().unwrap_or(anchor);

    let width = iter::once(anchor)
        .chain(nodes.chain(anchor, Direction::Right))
        .map(|column| line_extent(nodes, column, Direction::Top, Direction::Bottom).width)
        .sum();

    let height = iter::once(anchor)
        .chain(nodes.chain(anchor, Direction::Bottom))
        .map(|row| line_extent(nodes, row, Direction::Left, Direction::Right).height)
        .sum();

    Size { width, height }
}

/// Largest width and largest height (independently) along the row or column
/// containing `id`, walked from its `start` end towards `end`.
fn line_extent(nodes: &Nodes, id: NodeId, start: Direction, end: Direction) -> Size {
    let first = nodes.chain(id, start).last().unwrap_or(id);
    iter::once(first)
        .chain(nodes.chain(first, end))
        .map(|n| nodes[n].resolution())
        .fold(Size::default(), |acc, r| {
            Size::new(acc.width.max(r.width), acc.height.max(r.height))
        })
}

/// The lowest DPI among all nodes, truncated to an integer.
///
/// Returns `Ok(None)` for an empty graph.
///
/// # Errors
///
/// Propagates the first [`MonitorError`] raised by [`Monitor::dpi`].
pub fn unified_dpi(nodes: &Nodes) -> Result<Option<i32>, MonitorError> {
    let mut lowest: Option<f32> = None;
    for (_, node) in nodes.iter() {
        let dpi = node.monitor().dpi()?;
        lowest = Some(lowest.map_or(dpi, |l| l.min(dpi)));
    }
    Ok(lowest.map(|dpi| dpi as i32))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
