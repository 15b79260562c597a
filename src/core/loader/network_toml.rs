//! TOML network file parser
//!
//! A network file lists entities in `[[artists]]`, `[[releases]]` and `[[studios]]`
//! tables and links them with `[[relations]]`:
//!
//! ```toml
//! name = "Kind of Blue sessions"
//!
//! [[artists]]
//! name = "Miles Davis"
//!
//! [[releases]]
//! name = "Kind of Blue"
//! year = 1959
//!
//! [[relations]]
//! start = "Miles Davis"
//! kind = "PLAYED_ON"
//! end = "Kind of Blue"
//! ```

use crate::core::models::{Artist, MusicNetwork, MusicNode, Relation, Release, Studio};
use crate::{debug, warn};
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

/// On-disk layout of a network file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NetworkFile {
    #[serde(default)]
    name: String,
    #[serde(default)]
    artists: Vec<Artist>,
    #[serde(default)]
    releases: Vec<Release>,
    #[serde(default)]
    studios: Vec<Studio>,
    #[serde(default)]
    relations: Vec<RelationEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RelationEntry {
    start: String,
    end: String,
    kind: String,
    #[serde(default = "default_weight")]
    weight: f64,
}

const fn default_weight() -> f64 {
    1.0
}

/// Parse a network file
///
/// Falls back to the file stem for the network name when the file has none.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid network TOML
pub fn parse_network_toml<P: AsRef<Path>>(path: P) -> Result<MusicNetwork, Box<dyn Error>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let mut network = network_from_toml_str(&content)?;
    if network.name.is_empty() {
        network.name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
    }
    debug!("Loaded network '{}' from {}", network.name, path.display());
    Ok(network)
}

/// Build a network from TOML text
///
/// Entities that clash with an earlier name and relations the network refuses are
/// skipped with a warning. Malformed TOML and unknown fields are errors.
///
/// # Errors
/// Returns an error if the text is not valid network TOML
pub fn network_from_toml_str(content: &str) -> Result<MusicNetwork, Box<dyn Error>> {
    let file: NetworkFile = toml::from_str(content)?;
    let mut network = MusicNetwork::new(file.name);

    let entities = file
        .artists
        .into_iter()
        .map(MusicNode::from)
        .chain(file.releases.into_iter().map(MusicNode::from))
        .chain(file.studios.into_iter().map(MusicNode::from));
    for entity in entities {
        if let Err(e) = network.add(entity) {
            warn!("Skipping entity: {e}");
        }
    }

    for entry in file.relations {
        let relation = match entry.kind.parse::<Relation>() {
            Ok(relation) => relation,
            Err(e) => {
                warn!("Skipping relation {} -> {}: {e}", entry.start, entry.end);
                continue;
            }
        };
        if let Err(e) = network.relate(&entry.start, relation, &entry.end, entry.weight) {
            warn!("Skipping relation {} -> {}: {e}", entry.start, entry.end);
        }
    }

    Ok(network)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::EntityKind;
    use std::io::Write;

    const SESSION: &str = r#"
name = "Test session"

[[artists]]
name = "Bill Evans"
discogs_id = 25280

[[artists]]
name = "Paul Chambers"

[[releases]]
name = "Kind of Blue"
year = 1959

[[studios]]
name = "30th Street"
city = "New York"

[[relations]]
start = "Bill Evans"
kind = "PLAYED_ON"
end = "Kind of Blue"

[[relations]]
start = "Paul Chambers"
kind = "played on"
end = "Kind of Blue"
weight = 2.5

[[relations]]
start = "Kind of Blue"
kind = "RECORDED_AT"
end = "30th Street"
"#;

    #[test]
    fn test_parse_full_network() {
        let network = network_from_toml_str(SESSION).unwrap();
        assert_eq!(network.name, "Test session");
        assert_eq!(network.graph().num_nodes(), 4);
        assert_eq!(network.graph().num_edges(), 3);
        assert_eq!(network.kind_counts()[&EntityKind::Artist], 2);
        assert_eq!(
            network.get("Bill Evans").and_then(MusicNode::discogs_id),
            Some(25280)
        );
        assert_eq!(network.studios_of("Kind of Blue")[0].city, "New York");
    }

    #[test]
    fn test_bad_entries_are_skipped() {
        let content = r#"
[[artists]]
name = "A"

[[artists]]
name = "A"

[[releases]]
name = "R"

[[relations]]
start = "A"
kind = "PRODUCED"
end = "R"

[[relations]]
start = "R"
kind = "PLAYED_ON"
end = "A"

[[relations]]
start = "A"
kind = "PLAYED_ON"
end = "Missing"

[[relations]]
start = "A"
kind = "PLAYED_ON"
end = "R"
"#;
        let network = network_from_toml_str(content).unwrap();
        assert_eq!(network.graph().num_nodes(), 2);
        assert_eq!(network.graph().num_edges(), 1);
        assert!(network.name.is_empty());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(network_from_toml_str("[[artists]\nname = ").is_err());
        assert!(network_from_toml_str("surprise = true").is_err());
    }

    #[test]
    fn test_misspelled_fields_are_errors() {
        let entity = "[[artists]]\nname = \"Bill Evans\"\ndiscog_id = 25280\n";
        let error = network_from_toml_str(entity).unwrap_err();
        assert!(error.to_string().contains("discog_id"));

        let relation = r#"
[[artists]]
name = "A"

[[releases]]
name = "R"

[[relations]]
start = "A"
kind = "PLAYED_ON"
end = "R"
wieght = 2.0
"#;
        let error = network_from_toml_str(relation).unwrap_err();
        assert!(error.to_string().contains("wieght"));
    }

    #[test]
    fn test_parse_file_uses_stem_as_default_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("late_night.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[[artists]]\nname = \"Solo\"").unwrap();

        let network = parse_network_toml(&path).unwrap();
        assert_eq!(network.name, "late_night");
        assert_eq!(network.graph().num_nodes(), 1);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(parse_network_toml("/definitely/not/here.toml").is_err());
    }
}
