//! Mermaid diagram generator for music networks
//!
//! Generates Mermaid flowchart syntax that can be embedded in Markdown files
//! and rendered by GitHub, GitLab, and other Markdown viewers.

use crate::core::models::{MusicNetwork, MusicNode, Named};
use std::collections::{HashMap, HashSet};
use std::fmt::Write;

/// Generator for Mermaid diagram syntax
pub struct MermaidGenerator;

impl MermaidGenerator {
    /// Generate a Mermaid flowchart of a whole network, fenced for Markdown
    #[must_use]
    pub fn generate_network(network: &MusicNetwork) -> String {
        let mut output = String::from("```mermaid\n");
        output.push_str(&Self::flowchart(network));
        output.push_str("```\n");
        output
    }

    /// Generate the bare flowchart without a Markdown fence
    ///
    /// Artists are drawn as stadiums, releases as rectangles and studios as cylinders.
    /// Each edge is labelled with its relation.
    #[must_use]
    pub fn flowchart(network: &MusicNetwork) -> String {
        let mut output = String::from("flowchart LR\n");
        let graph = network.graph();
        let ids = Self::node_ids(network);

        for node in graph.nodes() {
            let id = Self::id_of(&ids, node.name());
            let label = Self::escape_label(node.name());
            let shape = match node {
                MusicNode::Artist(_) => format!("([\"{label}\"])"),
                MusicNode::Release(_) => format!("[\"{label}\"]"),
                MusicNode::Studio(_) => format!("[(\"{label}\")]"),
            };
            let _ = writeln!(output, "    {id}{shape}");
        }

        if graph.num_edges() > 0 {
            output.push('\n');
        }

        for edge in graph.edges() {
            let start = Self::id_of(&ids, &edge.start);
            let end = Self::id_of(&ids, &edge.end);
            let _ = writeln!(output, "    {start} -- {} --> {end}", edge.meaning);
        }

        output
    }

    /// Assign every entity a distinct node ID
    ///
    /// IDs are the sanitized names. When two names sanitize to the same ID, the later
    /// entity gets its position in the network appended.
    fn node_ids(network: &MusicNetwork) -> HashMap<&str, String> {
        let mut taken = HashSet::new();
        let mut ids = HashMap::new();
        for (position, node) in network.graph().nodes().enumerate() {
            let base = Self::sanitize_id(node.name());
            let mut id = base.clone();
            let mut attempt = position;
            while !taken.insert(id.clone()) {
                id = format!("{base}_{attempt}");
                attempt += 1;
            }
            ids.insert(node.name().as_str(), id);
        }
        ids
    }

    fn id_of(ids: &HashMap<&str, String>, name: &str) -> String {
        ids.get(name)
            .cloned()
            .unwrap_or_else(|| Self::sanitize_id(name))
    }

    /// Quotes inside labels would end the label early
    fn escape_label(name: &str) -> String {
        name.replace('"', "#quot;")
    }

    /// Sanitize an entity name for use as a Mermaid node ID
    fn sanitize_id(key: &str) -> String {
        key.chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect()
    }
}
