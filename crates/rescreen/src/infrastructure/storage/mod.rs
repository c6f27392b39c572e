//! Storage infrastructure: configuration and snapshot files.
//!
//! - `document` reads any serde document from disk, choosing TOML or JSON from
//!   the file extension.
//! - `config` locates, loads, and validates the layout configuration.

pub mod config;
pub mod document;
