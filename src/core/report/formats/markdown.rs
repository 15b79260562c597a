//! Markdown report generator
//!
//! Generates network reports in Markdown format with an embedded Mermaid diagram.
//! These reports render well in GitHub, GitLab, and VS Code.

use crate::core::get_version;
use crate::core::models::{EntityKind, Named, Relation};
use crate::core::report::visualization::MermaidGenerator;
use crate::core::report::{fill_template, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let graph = ctx.network.graph();
        let values = [
            ("network_name", Self::escape(ctx.title())),
            ("version", get_version().to_string()),
            ("entity_count", graph.num_nodes().to_string()),
            ("artist_count", ctx.count(EntityKind::Artist).to_string()),
            ("release_count", ctx.count(EntityKind::Release).to_string()),
            ("studio_count", ctx.count(EntityKind::Studio).to_string()),
            ("relation_count", graph.num_edges().to_string()),
            ("component_count", ctx.components.len().to_string()),
            ("relation_breakdown", Self::generate_breakdown(ctx)),
            ("mermaid_diagram", MermaidGenerator::generate_network(ctx.network)),
            ("entity_table", Self::generate_entity_table(ctx)),
            ("relation_table", Self::generate_relation_table(ctx)),
            ("component_list", Self::generate_component_list(ctx)),
        ];
        fill_template(MARKDOWN_TEMPLATE, &values)
    }

    /// Pipes and line breaks would split a table cell
    fn escape(text: &str) -> String {
        text.replace('|', "\\|")
            .replace("\r\n", "<br>")
            .replace('\n', "<br>")
    }

    fn generate_breakdown(ctx: &ReportContext) -> String {
        let mut list = String::new();
        for relation in Relation::ALL {
            let _ = writeln!(list, "- `{relation}`: {}", ctx.relation_count(relation));
        }
        list
    }

    /// Generate the entity table, one row per node in insertion order
    fn generate_entity_table(ctx: &ReportContext) -> String {
        let mut table = String::new();
        table.push_str("| Name | Kind | Details | Discogs ID |\n");
        table.push_str("|---|---|---|---|\n");

        for node in ctx.network.graph().nodes() {
            let discogs = node
                .discogs_id()
                .map_or_else(|| "-".to_string(), |id| id.to_string());
            let _ = writeln!(
                table,
                "| {} | {} | {} | {discogs} |",
                Self::escape(node.name()),
                node.kind(),
                Self::escape(&ReportContext::details(node)),
            );
        }

        table
    }

    /// Generate the relation table
    fn generate_relation_table(ctx: &ReportContext) -> String {
        let graph = ctx.network.graph();
        if graph.num_edges() == 0 {
            return "_No relations._\n".to_string();
        }

        let mut table = String::new();
        table.push_str("| From | Relation | To | Weight |\n");
        table.push_str("|---|---|---|---|\n");
        for edge in graph.edges() {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} |",
                Self::escape(&edge.start),
                edge.meaning,
                Self::escape(&edge.end),
                edge.weight
            );
        }
        table
    }

    fn generate_component_list(ctx: &ReportContext) -> String {
        if ctx.components.is_empty() {
            return "_Empty network._\n".to_string();
        }
        let mut list = String::new();
        for (index, group) in ctx.components.iter().enumerate() {
            let _ = writeln!(
                list,
                "{}. ({} entities) {}",
                index + 1,
                group.len(),
                group.join(", ")
            );
        }
        list
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Artist, MusicNetwork};
    use crate::core::samples;

    #[test]
    fn test_markdown_report_contents() {
        let network = samples::jazz_network();
        let ctx = ReportContext::new(&network);
        let report = MarkdownReporter::new().render(&ctx).unwrap();

        assert!(report.starts_with("# Kind of Blue sessions\n"));
        assert!(report.contains("| 14 | 8 | 4 | 2 | 25 | 1 |"));
        assert!(report.contains("- `PLAYED_ON`: 15"));
        assert!(report.contains("| Miles Davis | artist |  | 23755 |"));
        assert!(report.contains("| Kind of Blue | release | 1959 | - |"));
        assert!(report.contains("| Giant Steps | RECORDED_AT | Atlantic Studios | 1 |"));
        assert!(report.contains("```mermaid"));
        assert!(!report.contains("{{"));
    }

    #[test]
    fn test_markdown_report_for_empty_network() {
        let network = MusicNetwork::new("Nothing | yet");
        let report = MarkdownReporter::new()
            .render(&ReportContext::new(&network))
            .unwrap();
        assert!(report.starts_with("# Nothing \\| yet"));
        assert!(report.contains("_No relations._"));
        assert!(report.contains("_Empty network._"));
    }

    #[test]
    fn test_multiline_profile_stays_in_its_cell() {
        let mut network = MusicNetwork::new("profiles");
        let mut artist = Artist::named("Miles Davis");
        artist.profile = "Trumpeter.\nBandleader.\r\nComposer.".to_string();
        network.add(artist).unwrap();

        let report = MarkdownReporter::new()
            .render(&ReportContext::new(&network))
            .unwrap();
        assert!(report
            .contains("| Miles Davis | artist | Trumpeter.<br>Bandleader.<br>Composer. | - |\n"));
    }

    #[test]
    fn test_placeholder_in_name_is_not_expanded() {
        let network = MusicNetwork::new("Set {{entity_table}} list");
        let report = MarkdownReporter::new()
            .render(&ReportContext::new(&network))
            .unwrap();
        assert!(report.starts_with("# Set {{entity_table}} list\n"));
        assert_eq!(report.matches("| Name | Kind | Details | Discogs ID |").count(), 1);
    }

    #[test]
    fn test_generate_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.md");
        let network = samples::jazz_network();
        MarkdownReporter::new()
            .generate(&ReportContext::new(&network), &path)
            .unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("## Connected groups"));
    }
}
