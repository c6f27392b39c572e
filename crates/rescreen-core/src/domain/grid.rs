//! Logical monitor grid entered by the user.
//!
//! The configuration lists monitor identifiers as a flat, row-major sequence.
//! [`LayoutGrid`] interprets that sequence as a fixed `rows × cols` matrix,
//! where an empty string marks an unoccupied cell:
//!
//! ```text
//! ["DP-1", "HDMI-1", "", "",      *-------------------------------*
//!  "eDP-1", "",      "", "",  ->  | DP-1  | HDMI-1 |       |       |
//!  ...]                           | eDP-1 |        |       |       |
//!                                 *-------------------------------*
//! ```
//!
//! The grid dimensions come from the configuration ([`GridSize`]); the default
//! 4 × 4 matches the historical behaviour of the tool.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of grid rows.
pub const DEFAULT_ROWS: usize = 4;

/// Default number of grid columns.
pub const DEFAULT_COLS: usize = 4;

/// Largest accepted number of rows or columns.
pub const MAX_DIMENSION: usize = 64;

/// Errors raised by the grid model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The same monitor identifier occupies more than one cell.
    #[error("\"{0}\" appears twice")]
    Duplicate(String),

    /// No cell holds a monitor identifier.
    #[error("empty layout")]
    Empty,

    /// A row index outside `[0, rows)` was requested.
    #[error("index must be between 0 and {}", .rows.saturating_sub(1))]
    RowOutOfRange { index: usize, rows: usize },

    /// A configured dimension exceeds [`MAX_DIMENSION`].
    #[error("grid of {rows}x{cols} exceeds the {max}x{max} limit")]
    TooLarge { rows: usize, cols: usize, max: usize },

    /// The flat list holds more identifiers than the grid has cells.
    #[error("layout lists {len} cells but the grid only has {capacity}")]
    TooManyCells { len: usize, capacity: usize },
}

/// Dimensions of the logical grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    #[serde(default = "default_rows")]
    pub rows: usize,
    #[serde(default = "default_cols")]
    pub cols: usize,
}

fn default_rows() -> usize {
    DEFAULT_ROWS
}

fn default_cols() -> usize {
    DEFAULT_COLS
}

impl GridSize {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells, or `None` if the product overflows.
    pub fn capacity(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// Returns `true` when both dimensions are within [`MAX_DIMENSION`].
    pub fn is_bounded(&self) -> bool {
        self.rows <= MAX_DIMENSION && self.cols <= MAX_DIMENSION
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

/// The user's logical layout: a bounded matrix of monitor identifiers.
///
/// Immutable once constructed.  Call [`LayoutGrid::validate`] before handing
/// the grid to the graph builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutGrid {
    size: GridSize,
    cells: Vec<String>,
}

impl LayoutGrid {
    /// Creates a grid from a flat row-major list.  A list shorter than the grid
    /// leaves the trailing cells unoccupied.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TooLarge`] if a dimension exceeds
    /// [`MAX_DIMENSION`], or [`GridError::TooManyCells`] if `cells` does not
    /// fit in `size`.
    pub fn new(size: GridSize, cells: Vec<String>) -> Result<Self, GridError> {
        let too_large = GridError::TooLarge {
            rows: size.rows,
            cols: size.cols,
            max: MAX_DIMENSION,
        };
        if !size.is_bounded() {
            return Err(too_large);
        }
        let capacity = size.capacity().ok_or(too_large)?;
        if cells.len() > capacity {
            return Err(GridError::TooManyCells {
                len: cells.len(),
                capacity,
            });
        }
        Ok(Self { size, cells })
    }

    /// Returns the grid dimensions as configured.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// The flat cell list as supplied.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Iterates over the non-empty identifiers in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = &str> {
        self.cells
            .iter()
            .map(String::as_str)
            .filter(|id| !id.is_empty())
    }

    /// Checks the grid invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Duplicate`] for the first identifier that repeats,
    /// or [`GridError::Empty`] when no cell is occupied.
    pub fn validate(&self) -> Result<(), GridError> {
        let mut seen = HashSet::new();
        for id in self.occupied() {
            if !seen.insert(id) {
                return Err(GridError::Duplicate(id.to_string()));
            }
        }

        if seen.is_empty() {
            return Err(GridError::Empty);
        }

        Ok(())
    }

    /// Returns row `index` with exactly `cols` entries; unoccupied or missing
    /// cells are empty strings.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RowOutOfRange`] when `index >= rows`.
    pub fn row(&self, index: usize) -> Result<Vec<String>, GridError> {
        let GridSize { rows, cols } = self.size;
        if index >= rows {
            return Err(GridError::RowOutOfRange { index, rows });
        }

        let start = index * cols;
        Ok((start..start + cols)
            .map(|i| self.cells.get(i).cloned().unwrap_or_default())
            .collect())
    }

    /// Materialises every row of the grid.
    pub fn matrix(&self) -> Vec<Vec<String>> {
        (0..self.size.rows)
            .map(|i| {
                self.row(i)
                    .unwrap_or_else(|e| unreachable!("row {i} of a {:?} grid: {e}", self.size))
            })
            .collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
