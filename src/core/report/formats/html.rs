//! HTML report generator
//!
//! Generates network reports as a single self-contained HTML page. The diagram is the
//! same Mermaid flowchart the Markdown report uses, rendered in the browser.

use crate::core::get_version;
use crate::core::models::{EntityKind, Named};
use crate::core::report::visualization::MermaidGenerator;
use crate::core::report::{fill_template, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let graph = ctx.network.graph();
        let values = [
            ("network_name", escape_html(ctx.title())),
            ("version", get_version().to_string()),
            ("entity_count", graph.num_nodes().to_string()),
            ("artist_count", ctx.count(EntityKind::Artist).to_string()),
            ("release_count", ctx.count(EntityKind::Release).to_string()),
            ("studio_count", ctx.count(EntityKind::Studio).to_string()),
            ("relation_count", graph.num_edges().to_string()),
            ("component_count", ctx.components.len().to_string()),
            // Mermaid reads the raw text of the <pre>, so only markup characters are escaped
            (
                "mermaid_diagram",
                escape_html(&MermaidGenerator::flowchart(ctx.network)),
            ),
            ("entity_table", Self::generate_entity_html(ctx)),
            ("relation_table", Self::generate_relation_html(ctx)),
            ("component_list", Self::generate_component_html(ctx)),
        ];
        fill_template(HTML_TEMPLATE, &values)
    }

    fn generate_entity_html(ctx: &ReportContext) -> String {
        let mut html = String::from(
            "<table>\n<tr><th>Name</th><th>Kind</th><th>Details</th><th>Discogs ID</th></tr>\n",
        );
        for node in ctx.network.graph().nodes() {
            let kind = node.kind();
            let discogs = node
                .discogs_id()
                .map_or_else(|| "-".to_string(), |id| id.to_string());
            let _ = writeln!(
                html,
                "<tr><td>{}</td><td class=\"kind-{kind}\">{kind}</td><td>{}</td><td>{discogs}</td></tr>",
                escape_html(node.name()),
                escape_html(&ReportContext::details(node)),
            );
        }
        html.push_str("</table>\n");
        html
    }

    fn generate_relation_html(ctx: &ReportContext) -> String {
        let graph = ctx.network.graph();
        if graph.num_edges() == 0 {
            return "<p><em>No relations.</em></p>\n".to_string();
        }
        let mut html = String::from(
            "<table>\n<tr><th>From</th><th>Relation</th><th>To</th><th>Weight</th></tr>\n",
        );
        for edge in graph.edges() {
            let _ = writeln!(
                html,
                "<tr><td>{}</td><td><code>{}</code></td><td>{}</td><td>{}</td></tr>",
                escape_html(&edge.start),
                escape_html(&edge.meaning),
                escape_html(&edge.end),
                edge.weight
            );
        }
        html.push_str("</table>\n");
        html
    }

    fn generate_component_html(ctx: &ReportContext) -> String {
        if ctx.components.is_empty() {
            return "<p><em>Empty network.</em></p>\n".to_string();
        }
        let mut html = String::from("<ol>\n");
        for group in &ctx.components {
            let names: Vec<String> = group.iter().map(|name| escape_html(name)).collect();
            let _ = writeln!(
                html,
                "<li>({} entities) {}</li>",
                group.len(),
                names.join(", ")
            );
        }
        html.push_str("</ol>\n");
        html
    }
}

/// Escape the characters HTML treats as markup
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
