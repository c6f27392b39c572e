//! Domain entities for rescreen.
//!
//! This module contains the pure layout engine with no infrastructure
//! dependencies: nothing here touches files, processes, or the display server.
//!
//! # Pipeline (for beginners)
//!
//! ```text
//! LayoutConfig ──► grid ──► graph ──► geometry ──► layout
//!                             ▲
//!                  MonitorCatalog (live monitors)
//! ```
//!
//! - **`grid`** – the user's flat list of monitor IDs viewed as a matrix.
//! - **`monitor`** – what the display subsystem reports per monitor, and the
//!   [`monitor::MonitorCatalog`] trait through which it is looked up.
//! - **`config`** – the user's per-monitor scale and primary hints.
//! - **`graph`** – one node per connected monitor, linked to its grid
//!   neighbours.
//! - **`geometry`** – scaled resolutions, positions, canvas size, and DPI.
//! - **`layout`** – the facade that runs the whole pipeline.

pub mod config;
pub mod geometry;
pub mod graph;
pub mod grid;
pub mod layout;
pub mod monitor;

#[cfg(test)]
pub(crate) mod fixtures;
