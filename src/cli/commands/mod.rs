//! CLI command handlers for `musicgraph`.
//!
//! Each command is implemented in its own submodule. Handlers print results to stdout,
//! report failures on stderr and return `false` so `main` can pick the exit code.

pub mod config;
pub mod exercises;
pub mod network;
pub mod report;
