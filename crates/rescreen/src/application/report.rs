//! Printable view of a resolved [`Layout`].
//!
//! [`LayoutReport`] flattens the node graph into one row per output.  The
//! `right_of` / `below` fields name the neighbour an output is placed against,
//! which is the relationship a display server command line needs
//! (`--right-of DP-1`, `--below DP-1`).  The report serializes to JSON for
//! scripts and implements [`Display`](fmt::Display) as a text table for humans.

use std::fmt;

use rescreen_core::{Layout, Nodes, Position, Size};
use serde::Serialize;

/// The current mode of an output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeReport {
    pub width: f32,
    pub height: f32,
    /// Refresh rate in Hz, when the current mode reports one.
    pub refresh: Option<f32>,
}

/// One placed output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputReport {
    pub id: String,
    pub mode: Option<ModeReport>,
    /// Resolution after scaling.
    pub resolution: Size,
    pub position: Position,
    pub scale: f32,
    pub primary: bool,
    /// Output directly to the left, if any.
    pub right_of: Option<String>,
    /// Output directly above, if any.
    pub below: Option<String>,
}

/// Every placed output plus the canvas size and unified DPI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutReport {
    pub outputs: Vec<OutputReport>,
    pub canvas: Size,
    pub dpi: i32,
}

impl LayoutReport {
    /// Builds the report for `layout`, listing outputs in row-major order.
    pub fn from_layout(layout: &Layout) -> Self {
        let nodes = layout.nodes();
        let outputs = nodes
            .iter()
            .map(|(_, node)| {
                let mode = node.monitor().current_mode().map(|m| ModeReport {
                    width: m.resolution.width,
                    height: m.resolution.height,
                    refresh: m.current_rate().map(|r| r.value),
                });
                OutputReport {
                    id: node.id().to_string(),
                    mode,
                    resolution: node.resolution(),
                    position: node.position(),
                    scale: node.scale(),
                    primary: node.is_primary(),
                    right_of: neighbour_id(nodes, node.left()),
                    below: neighbour_id(nodes, node.top()),
                }
            })
            .collect();

        Self {
            outputs,
            canvas: layout.resolution(),
            dpi: layout.dpi(),
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn neighbour_id(nodes: &Nodes, id: Option<rescreen_core::NodeId>) -> Option<String> {
    id.and_then(|id| nodes.get(id)).map(|n| n.id().to_string())
}

impl fmt::Display for LayoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "canvas {}x{}, {} dpi",
            self.canvas.width, self.canvas.height, self.dpi
        )?;
        writeln!(
            f,
            "{:<10} {:<16} {:<12} {:<12} {:>5}  {:<7} {:<10} {:<10}",
            "OUTPUT", "MODE", "RESOLUTION", "POSITION", "SCALE", "PRIMARY", "RIGHT-OF", "BELOW"
        )?;
        for out in &self.outputs {
            let mode = match &out.mode {
                Some(ModeReport {
                    width,
                    height,
                    refresh: Some(hz),
                }) => format!("{width}x{height}@{hz}"),
                Some(ModeReport { width, height, .. }) => format!("{width}x{height}"),
                None => "-".to_string(),
            };
            writeln!(
                f,
                "{:<10} {:<16} {:<12} {:<12} {:>5.2}  {:<7} {:<10} {:<10}",
                out.id,
                mode,
                format!("{}x{}", out.resolution.width, out.resolution.height),
                format!("{},{}", out.position.x, out.position.y),
                out.scale,
                if out.primary { "yes" } else { "no" },
                out.right_of.as_deref().unwrap_or("-"),
                out.below.as_deref().unwrap_or("-"),
            )?;
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
