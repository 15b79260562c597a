//! Report generation for music networks
//!
//! Reports summarise a network (entity and relation counts, connected groups, every
//! entity and relation) and embed a diagram of the whole graph. Markdown and HTML are
//! supported; both fill an embedded template.

pub mod formats;
pub mod visualization;

use crate::core::models::{EntityKind, MusicNetwork, MusicNode, Relation};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};
pub use visualization::MermaidGenerator;

/// Data context for report generation
///
/// Everything the templates need is derived here once so both formats agree.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Network being reported
    pub network: &'a MusicNetwork,
    /// Weakly connected groups of entity names, largest first
    pub components: Vec<Vec<String>>,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub fn new(network: &'a MusicNetwork) -> Self {
        let mut components = network.graph().connected_components();
        components.sort_by(|a, b| b.len().cmp(&a.len()));
        Self {
            network,
            components,
        }
    }

    /// Network name, or a placeholder for unnamed networks
    #[must_use]
    pub fn title(&self) -> &str {
        if self.network.name.is_empty() {
            "Untitled network"
        } else {
            &self.network.name
        }
    }

    /// Number of entities of `kind`
    #[must_use]
    pub fn count(&self, kind: EntityKind) -> usize {
        self.network.kind_counts().get(&kind).copied().unwrap_or(0)
    }

    /// Number of edges of `relation`
    #[must_use]
    pub fn relation_count(&self, relation: Relation) -> usize {
        self.network
            .relation_counts()
            .get(&relation)
            .copied()
            .unwrap_or(0)
    }

    /// Human-readable details column for an entity
    #[must_use]
    pub fn details(node: &MusicNode) -> String {
        match node {
            MusicNode::Artist(artist) => artist.profile.clone(),
            MusicNode::Release(release) => release
                .year
                .map(|year| year.to_string())
                .unwrap_or_default(),
            MusicNode::Studio(studio) => studio.city.clone(),
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// Substitute `{{key}}` placeholders in one pass
///
/// Substituted text is never scanned again, so values may contain `{{...}}` themselves.
/// Placeholders without a value are left as they are.
pub(crate) fn fill_template(template: &str, values: &[(&str, String)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find("{{") {
        output.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let Some(close) = after.find("}}") else {
            rest = &rest[open..];
            break;
        };
        let key = &after[..close];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => output.push_str(value),
            None => output.push_str(&rest[open..open + close + 4]),
        }
        rest = &after[close + 2..];
    }
    output.push_str(rest);
    output
}

/// Reporter for a given format
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::samples;

    #[test]
    fn test_context_components_largest_first() {
        let mut network = samples::jazz_network();
        network
            .add(crate::core::models::Studio::new("Rudy's Living Room", "Hackensack"))
            .unwrap();
        let ctx = ReportContext::new(&network);
        assert_eq!(ctx.components.len(), 2);
        assert_eq!(ctx.components[0].len(), 14);
        assert_eq!(ctx.components[1], vec!["Rudy's Living Room".to_string()]);
    }

    #[test]
    fn test_fill_template_single_pass() {
        let values = [
            ("name", "{{table}}".to_string()),
            ("table", "| a |".to_string()),
        ];
        assert_eq!(
            fill_template("# {{name}}\n{{table}}\n{{missing}} {{open", &values),
            "# {{table}}\n| a |\n{{missing}} {{open"
        );
    }

    #[test]
    fn test_context_counts() {
        let network = samples::jazz_network();
        let ctx = ReportContext::new(&network);
        assert_eq!(ctx.title(), "Kind of Blue sessions");
        assert_eq!(ctx.count(EntityKind::Studio), 2);
        assert_eq!(ctx.relation_count(Relation::RecordedAt), 3);
        assert_eq!(ReportContext::new(&MusicNetwork::default()).title(), "Untitled network");
    }
}
