//! Shared library for `music-graph`.
//!
//! Recursive data structures (linked list, binary search tree, directed graph) and a
//! music metadata network built on the graph. The CLI in `src/cli` is a thin layer over
//! this crate.

pub mod core;
pub mod logger;

pub use crate::core::*;
