//! Infrastructure layer for rescreen.
//!
//! Contains the file-facing adapters.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `rescreen_core`, but MUST NOT be imported by the `application` or domain
//! layers.
//!
//! # Sub-modules
//!
//! - **`storage`** – Reads the layout configuration (TOML or JSON) from the
//!   platform config directory or an explicit path.
//!
//! - **`screen_info`** – Implementations of the application's
//!   `MonitorSource` trait: a snapshot file written by an external tool, and a
//!   mock for tests.

pub mod screen_info;
pub mod storage;
