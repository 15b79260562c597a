//! Visualization generation for music networks
//!
//! Provides a generator for Mermaid diagrams, used by both report formats.

pub mod mermaid;

pub use mermaid::MermaidGenerator;
