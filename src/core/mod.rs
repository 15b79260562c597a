//! Core module: data structures, the music network, and everything built on top of them

pub mod config;
pub mod exercises;
pub mod loader;
pub mod models;
pub mod report;
pub mod samples;

/// Returns the current version of the `music-graph` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
