//! Common utilities for the cssel workspace.
//!
//! This crate provides shared infrastructure used by the selector builder and the CLI:
//! - **Warning System** - colored terminal output for suspicious input, printed once
//! - **JSON** - text (de)serialization of any serde value

pub mod json;
pub mod warning;
