//! Common utilities for the selkit workspace.
//!
//! This crate provides shared infrastructure used by the builder and the CLI:
//! - **Warning System** - colored, de-duplicated stderr diagnostics

pub mod warning;
