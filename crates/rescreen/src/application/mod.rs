//! Application layer use cases for the `rescreen` tool.
//!
//! Use cases in this layer orchestrate the core layout engine and depend only
//! on traits for their inputs, so the infrastructure (files, display server)
//! can be swapped without changing this code.
//!
//! # Sub-modules
//!
//! - **`arrange`** – Takes a monitor snapshot from a [`MonitorSource`] and
//!   resolves the configured layout against it.
//!
//! - **`report`** – Turns a resolved layout into a printable text table or
//!   JSON document.
//!
//! [`MonitorSource`]: arrange::MonitorSource

pub mod arrange;
pub mod report;
