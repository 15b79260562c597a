//! Loaders that turn files on disk into networks

pub mod network_toml;

pub use network_toml::{network_from_toml_str, parse_network_toml};
