//! Spatial node graph built from the grid.
//!
//! Each occupied grid cell whose monitor is connected becomes a [`Node`].  Nodes
//! live in a single arena ([`Nodes`]) and refer to their neighbours by
//! [`NodeId`] rather than by reference, so the graph can be freely moved and
//! shared without lifetimes or reference counting.
//!
//! # Link symmetry
//!
//! Links are only ever created in pairs through [`Nodes::link_horizontal`] and
//! [`Nodes::link_vertical`]:
//!
//! ```text
//!   A.right == B  ⇔  B.left == A
//!   A.bottom == B ⇔  B.top == A
//! ```
//!
//! A missing cell simply produces a missing link; algorithms treat an absent
//! neighbour as "no further extent in that direction".
//!
//! # Bounded chain walks
//!
//! [`Nodes::chain`] follows links in one direction.  The walk is capped at the
//! grid dimension for that axis, so a corrupted link can never loop forever.

use std::ops::Index;

use tracing::debug;

use super::config::LayoutConfig;
use super::geometry;
use super::grid::{GridSize, LayoutGrid};
use super::monitor::{Monitor, MonitorCatalog, MonitorError, Position, Size};

/// Index of a node inside its [`Nodes`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in creation (row-major) order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// The four neighbour directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Top,
    Bottom,
}

/// A resolved grid cell bound to a connected monitor.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    monitor: Monitor,
    resolution: Size,
    position: Position,
    primary: bool,
    scale: f32,
    left: Option<NodeId>,
    right: Option<NodeId>,
    top: Option<NodeId>,
    bottom: Option<NodeId>,
}

impl Node {
    fn new(monitor: Monitor) -> Self {
        Self {
            monitor,
            resolution: Size::default(),
            position: Position::default(),
            primary: false,
            scale: 1.0,
            left: None,
            right: None,
            top: None,
            bottom: None,
        }
    }

    /// The monitor identifier, which doubles as the node identifier.
    pub fn id(&self) -> &str {
        &self.monitor.id
    }

    pub fn monitor(&self) -> &Monitor {
        &self.monitor
    }

    /// Current-mode resolution after scaling.
    pub fn resolution(&self) -> Size {
        self.resolution
    }

    /// Absolute offset from the layout origin.
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_primary(&self) -> bool {
        self.primary
    }

    /// Effective scale factor (always positive).
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    pub fn top(&self) -> Option<NodeId> {
        self.top
    }

    pub fn bottom(&self) -> Option<NodeId> {
        self.bottom
    }

    /// The neighbour in `direction`, if any.
    pub fn neighbor(&self, direction: Direction) -> Option<NodeId> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Top => self.top,
            Direction::Bottom => self.bottom,
        }
    }
}

/// Arena of all nodes of one layout, in creation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Nodes {
    nodes: Vec<Node>,
    grid: GridSize,
}

impl Nodes {
    fn new(grid: GridSize, expected: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(expected),
            grid,
        }
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Links `left` and `right` as horizontal neighbours (both directions).
    fn link_horizontal(&mut self, left: NodeId, right: NodeId) {
        debug_assert_ne!(left, right, "a node cannot neighbour itself");
        self.nodes[left.0].right = Some(right);
        self.nodes[right.0].left = Some(left);
    }

    /// Links `top` and `bottom` as vertical neighbours (both directions).
    fn link_vertical(&mut self, top: NodeId, bottom: NodeId) {
        debug_assert_ne!(top, bottom, "a node cannot neighbour itself");
        self.nodes[top.0].bottom = Some(bottom);
        self.nodes[bottom.0].top = Some(top);
    }

    /// Dimensions of the grid the nodes were built from.
    pub fn grid_size(&self) -> GridSize {
        self.grid
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Node identifiers in creation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Nodes with their identifiers, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Finds the node bound to the monitor with identifier `monitor_id`.
    pub fn find_by_monitor(&self, monitor_id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.id() == monitor_id)
            .map(NodeId)
    }

    /// Walks from `start` in `direction`, yielding every node passed (not
    /// `start` itself) until the chain ends.
    pub fn chain(&self, start: NodeId, direction: Direction) -> Chain<'_> {
        let bound = match direction {
            Direction::Left | Direction::Right => self.grid.cols,
            Direction::Top | Direction::Bottom => self.grid.rows,
        };
        Chain {
            nodes: self,
            next: self.get(start).and_then(|n| n.neighbor(direction)),
            direction,
            remaining: bound,
        }
    }
}

impl Index<NodeId> for Nodes {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

/// Iterator over a directional chain of neighbours.  See [`Nodes::chain`].
pub struct Chain<'a> {
    nodes: &'a Nodes,
    next: Option<NodeId>,
    direction: Direction,
    remaining: usize,
}

impl Iterator for Chain<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;
        self.next = self
            .nodes
            .get(current)
            .and_then(|n| n.neighbor(self.direction));
        Some(current)
    }
}

/// Builds the node graph for `grid`, resolving every cell against `catalog`.
///
/// Cells whose monitor is not in the catalog are skipped without error.  Every
/// created node receives its scaled resolution and, once the whole graph
/// exists, its absolute position.
///
/// # Errors
///
/// Returns [`MonitorError::CurrentModeNotFound`] if a resolved monitor has no
/// current mode.  No partial graph is returned.
pub fn build_nodes(
    config: &LayoutConfig,
    grid: &LayoutGrid,
    catalog: &dyn MonitorCatalog,
) -> Result<Nodes, MonitorError> {
    let matrix = grid.matrix();
    let mut nodes = Nodes::new(grid.size(), grid.occupied().count());

    for (i, row) in matrix.iter().enumerate() {
        for (j, id) in row.iter().enumerate() {
            if id.is_empty() {
                continue;
            }

            let Some(monitor) = catalog.by_id(id) else {
                debug!(monitor = %id, row = i, col = j, "monitor not connected, skipping cell");
                continue;
            };

            let node = nodes.push(Node::new(monitor));

            if j > 0 {
                if let Some(left) = nodes.find_by_monitor(&matrix[i][j - 1]) {
                    nodes.link_horizontal(left, node);
                }
            }

            if i > 0 {
                if let Some(top) = nodes.find_by_monitor(&matrix[i - 1][j]) {
                    nodes.link_vertical(top, node);
                }
            }

            let settings = config.settings(id);
            let entry = &mut nodes.nodes[node.0];
            entry.primary = settings.primary;
            entry.scale = settings.scaling();
            entry.resolution = geometry::scaled_resolution(&entry.monitor, entry.scale)?;
        }
    }

    let positions: Vec<Position> = nodes
        .ids()
        .map(|id| geometry::node_position(&nodes, id))
        .collect();
    for (node, position) in nodes.nodes.iter_mut().zip(positions) {
        node.position = position;
        debug!(
            monitor = %node.id(),
            x = position.x,
            y = position.y,
            width = node.resolution.width,
            height = node.resolution.height,
            "resolved node geometry"
        );
    }

    Ok(nodes)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::MonitorSettings;
    use crate::domain::fixtures::{config_for, monitor};
    use crate::domain::monitor::{MockMonitorCatalog, Mode, SnapshotCatalog};

    fn assert_links_symmetric(nodes: &Nodes) {
        for (id, node) in nodes.iter() {
            if let Some(r) = node.right() {
                assert_eq!(nodes[r].left(), Some(id), "{}.right.left", node.id());
            }
            if let Some(l) = node.left() {
                assert_eq!(nodes[l].right(), Some(id), "{}.left.right", node.id());
            }
            if let Some(b) = node.bottom() {
                assert_eq!(nodes[b].top(), Some(id), "{}.bottom.top", node.id());
            }
            if let Some(t) = node.top() {
                assert_eq!(nodes[t].bottom(), Some(id), "{}.top.bottom", node.id());
            }
        }
    }

    fn catalog(ids: &[&str]) -> SnapshotCatalog {
        SnapshotCatalog::new(ids.iter().map(|id| monitor(id, 1920.0, 1080.0)).collect())
    }

    #[test]
    fn test_find_by_monitor_returns_matching_node() {
        // Arrange
        let cfg = config_for(&["Node1", "Node2", "Node3", "Node4"]);
        let nodes = build_nodes(
            &cfg,
            &cfg.grid().unwrap(),
            &catalog(&["Node1", "Node2", "Node3", "Node4"]),
        )
        .unwrap();

        // Act
        let id = nodes.find_by_monitor("Node3").expect("Node3 present");

        // Assert
        assert_eq!(nodes[id].id(), "Node3");
        assert!(nodes.find_by_monitor("Node5").is_none());
    }

    #[test]
    fn test_build_nodes_links_row_and_column_neighbours() {
        // Arrange: 2 × 2 block in the top-left corner of a 4 × 4 grid
        let cfg = config_for(&["A", "B", "", "", "C", "D", "", ""]);
        let grid = cfg.grid().unwrap();

        // Act
        let nodes = build_nodes(&cfg, &grid, &catalog(&["A", "B", "C", "D"])).unwrap();

        // Assert
        let [a, b, c, d] = ["A", "B", "C", "D"].map(|id| nodes.find_by_monitor(id).unwrap());
        assert_eq!(nodes[a].right(), Some(b));
        assert_eq!(nodes[a].bottom(), Some(c));
        assert_eq!(nodes[d].left(), Some(c));
        assert_eq!(nodes[d].top(), Some(b));
        assert_eq!(nodes[a].left(), None);
        assert_eq!(nodes[a].top(), None);
        assert_links_symmetric(&nodes);
    }

    #[test]
    fn test_build_nodes_preserves_row_major_creation_order() {
        let cfg = config_for(&["", "B", "", "", "A", "", "", "C"]);
        let nodes = build_nodes(&cfg, &cfg.grid().unwrap(), &catalog(&["A", "B", "C"])).unwrap();

        let order: Vec<&str> = nodes.iter().map(|(_, n)| n.id()).collect();
        assert_eq!(order, vec!["B", "A", "C"]);
        assert_eq!(nodes.grid_size(), GridSize::new(4, 4));
    }

    #[test]
    fn test_build_nodes_skips_monitors_missing_from_catalog() {
        // Arrange: "B" is configured but not connected
        let cfg = config_for(&["A", "B", "C", "", "D", "E", "", ""]);
        let grid = cfg.grid().unwrap();

        // Act
        let nodes = build_nodes(&cfg, &grid, &catalog(&["A", "C", "D", "E"])).unwrap();

        // Assert
        assert_eq!(nodes.len(), 4);
        assert!(nodes.find_by_monitor("B").is_none());
        let [a, c, d, e] = ["A", "C", "D", "E"].map(|id| nodes.find_by_monitor(id).unwrap());
        assert_eq!(nodes[a].right(), None, "no link across the missing cell");
        assert_eq!(nodes[c].left(), None);
        assert_eq!(nodes[a].bottom(), Some(d));
        assert_eq!(nodes[d].right(), Some(e));
        assert_eq!(nodes[e].top(), None, "B would have been above E");
        assert_links_symmetric(&nodes);
    }

    #[test]
    fn test_build_nodes_applies_scale_and_primary_settings() {
        // Arrange
        let mut cfg = config_for(&["A", "B"]);
        cfg.monitors.insert(
            "A".to_string(),
            MonitorSettings {
                scale: 1.5,
                primary: true,
            },
        );
        cfg.monitors.insert(
            "B".to_string(),
            MonitorSettings {
                scale: 0.0,
                primary: false,
            },
        );

        // Act
        let nodes = build_nodes(&cfg, &cfg.grid().unwrap(), &catalog(&["A", "B"])).unwrap();

        // Assert
        let a = &nodes[nodes.find_by_monitor("A").unwrap()];
        let b = &nodes[nodes.find_by_monitor("B").unwrap()];
        assert!(a.is_primary());
        assert_eq!(a.scale(), 1.5);
        assert_eq!(a.resolution(), Size::new(2880.0, 1620.0));
        assert!(!b.is_primary());
        assert_eq!(b.scale(), 1.0);
        assert_eq!(b.resolution(), Size::new(1920.0, 1080.0));
        assert_eq!(b.position(), Position::new(2880, 0));
    }

    #[test]
    fn test_build_nodes_fails_when_monitor_has_no_current_mode() {
        let cfg = config_for(&["A", "B"]);
        let catalog = SnapshotCatalog::new(vec![
            monitor("A", 1920.0, 1080.0),
            Monitor::new("B", vec![Mode::new(1920.0, 1080.0)], Size::new(500.0, 300.0)),
        ]);

        let result = build_nodes(&cfg, &cfg.grid().unwrap(), &catalog);

        assert_eq!(
            result,
            Err(MonitorError::CurrentModeNotFound("B".to_string()))
        );
    }

    #[test]
    fn test_build_nodes_queries_catalog_once_per_occupied_cell() {
        // Arrange
        let cfg = config_for(&["A", "", "", "", "", "B"]);
        let mut catalog = MockMonitorCatalog::new();
        catalog
            .expect_by_id()
            .times(2)
            .returning(|id| Some(monitor(id, 1000.0, 1000.0)));

        // Act
        let nodes = build_nodes(&cfg, &cfg.grid().unwrap(), &catalog).unwrap();

        // Assert: diagonal cells are not neighbours
        assert_eq!(nodes.len(), 2);
        assert!(nodes.iter().all(|(_, n)| n.left().is_none() && n.top().is_none()));
        let b = &nodes[nodes.find_by_monitor("B").unwrap()];
        assert_eq!(b.position(), Position::new(0, 0));
    }

    #[test]
    fn test_chain_walks_until_the_end_of_the_row() {
        let cfg = config_for(&["A", "B", "C", "D"]);
        let nodes = build_nodes(&cfg, &cfg.grid().unwrap(), &catalog(&["A", "B", "C", "D"])).unwrap();
        let d = nodes.find_by_monitor("D").unwrap();

        let walked: Vec<&str> = nodes
            .chain(d, Direction::Left)
            .map(|id| nodes[id].id())
            .collect();

        assert_eq!(walked, vec!["C", "B", "A"]);
        assert_eq!(nodes.chain(d, Direction::Right).count(), 0);
    }

    #[test]
    fn test_chain_is_bounded_by_grid_dimension() {
        // Arrange: corrupt the arena with a two-node cycle
        let mut nodes = Nodes::new(GridSize::new(4, 4), 2);
        let a = nodes.push(Node::new(monitor("A", 1.0, 1.0)));
        let b = nodes.push(Node::new(monitor("B", 1.0, 1.0)));
        nodes.link_horizontal(a, b);
        nodes.link_horizontal(b, a);

        // Act
        let steps = nodes.chain(a, Direction::Right).count();

        // Assert
        assert_eq!(steps, 4);
    }
}
