//! Music metadata network
//!
//! Artists, releases and studios are nodes of a [`Graph`]; typed [`Relation`]s between
//! them are its edges. Every relation only makes sense between particular kinds of
//! entity (an artist plays on a release, a release is recorded at a studio), and the
//! network refuses edges that break those rules.

use super::graph::{Edge, Graph, GraphError, Named};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// A performer or group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Artist {
    /// Display name, unique within a network
    pub name: String,
    /// Discogs artist id, if known
    #[serde(default)]
    pub discogs_id: Option<u64>,
    /// Free-form notes about the artist
    #[serde(default)]
    pub profile: String,
}

/// A published recording
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Release {
    /// Title, unique within a network
    pub name: String,
    /// Discogs release id, if known
    #[serde(default)]
    pub discogs_id: Option<u64>,
    /// Year of release
    #[serde(default)]
    pub year: Option<u16>,
}

/// A recording studio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Studio {
    /// Studio name, unique within a network
    pub name: String,
    /// Discogs label/studio id, if known
    #[serde(default)]
    pub discogs_id: Option<u64>,
    /// City the studio is in
    #[serde(default)]
    pub city: String,
}

impl Artist {
    /// Artist with only a name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            discogs_id: None,
            profile: String::new(),
        }
    }
}

impl Release {
    /// Release with a title and year
    #[must_use]
    pub fn new(name: impl Into<String>, year: Option<u16>) -> Self {
        Self {
            name: name.into(),
            discogs_id: None,
            year,
        }
    }
}

impl Studio {
    /// Studio with a name and city
    #[must_use]
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            discogs_id: None,
            city: city.into(),
        }
    }
}

/// Kind of entity stored in a network node
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    /// An [`Artist`]
    Artist,
    /// A [`Release`]
    Release,
    /// A [`Studio`]
    Studio,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Artist => write!(f, "artist"),
            Self::Release => write!(f, "release"),
            Self::Studio => write!(f, "studio"),
        }
    }
}

/// A node of a [`MusicNetwork`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MusicNode {
    /// Artist data
    Artist(Artist),
    /// Release data
    Release(Release),
    /// Studio data
    Studio(Studio),
}

impl MusicNode {
    /// Which kind of entity this is
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Artist(_) => EntityKind::Artist,
            Self::Release(_) => EntityKind::Release,
            Self::Studio(_) => EntityKind::Studio,
        }
    }

    /// Discogs id of the entity, if known
    #[must_use]
    pub const fn discogs_id(&self) -> Option<u64> {
        match self {
            Self::Artist(a) => a.discogs_id,
            Self::Release(r) => r.discogs_id,
            Self::Studio(s) => s.discogs_id,
        }
    }

    /// The artist payload, if this is an artist
    #[must_use]
    pub const fn as_artist(&self) -> Option<&Artist> {
        match self {
            Self::Artist(a) => Some(a),
            _ => None,
        }
    }

    /// The release payload, if this is a release
    #[must_use]
    pub const fn as_release(&self) -> Option<&Release> {
        match self {
            Self::Release(r) => Some(r),
            _ => None,
        }
    }

    /// The studio payload, if this is a studio
    #[must_use]
    pub const fn as_studio(&self) -> Option<&Studio> {
        match self {
            Self::Studio(s) => Some(s),
            _ => None,
        }
    }
}

impl Named for MusicNode {
    type Name = String;

    fn name(&self) -> &String {
        match self {
            Self::Artist(a) => &a.name,
            Self::Release(r) => &r.name,
            Self::Studio(s) => &s.name,
        }
    }
}

impl From<Artist> for MusicNode {
    fn from(artist: Artist) -> Self {
        Self::Artist(artist)
    }
}

impl From<Release> for MusicNode {
    fn from(release: Release) -> Self {
        Self::Release(release)
    }
}

impl From<Studio> for MusicNode {
    fn from(studio: Studio) -> Self {
        Self::Studio(studio)
    }
}

/// Typed relationship between two network entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Relation {
    /// Artist `start` is a member of artist (group) `end`
    MemberOf,
    /// Artist `start` played on release `end`
    PlayedOn,
    /// Release `start` was recorded at studio `end`
    RecordedAt,
    /// Release `start` appeared on release `end` (e.g. a compilation)
    AppearedOn,
}

impl Relation {
    /// Every relation, in declaration order
    pub const ALL: [Self; 4] = [
        Self::MemberOf,
        Self::PlayedOn,
        Self::RecordedAt,
        Self::AppearedOn,
    ];

    /// Edge meaning string stored in the graph
    #[must_use]
    pub const fn meaning(self) -> &'static str {
        match self {
            Self::MemberOf => "MEMBER_OF",
            Self::PlayedOn => "PLAYED_ON",
            Self::RecordedAt => "RECORDED_AT",
            Self::AppearedOn => "APPEARED_ON",
        }
    }

    /// Entity kinds expected at the start and end of the edge
    #[must_use]
    pub const fn endpoints(self) -> (EntityKind, EntityKind) {
        match self {
            Self::MemberOf => (EntityKind::Artist, EntityKind::Artist),
            Self::PlayedOn => (EntityKind::Artist, EntityKind::Release),
            Self::RecordedAt => (EntityKind::Release, EntityKind::Studio),
            Self::AppearedOn => (EntityKind::Release, EntityKind::Release),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.meaning())
    }
}

impl FromStr for Relation {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|relation| relation.meaning() == wanted)
            .ok_or_else(|| NetworkError::UnknownRelation(s.to_string()))
    }
}

/// Reasons a network refuses a node or relation
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// The underlying graph refused the change
    Graph(GraphError),
    /// The relation does not fit the kinds of its endpoints
    InvalidEndpoints {
        /// Relation being added
        relation: Relation,
        /// Kind found at the start node
        start: EntityKind,
        /// Kind found at the end node
        end: EntityKind,
    },
    /// The relation name is not one of the known relations
    UnknownRelation(String),
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Graph(e) => write!(f, "{e}"),
            Self::InvalidEndpoints {
                relation,
                start,
                end,
            } => {
                let (want_start, want_end) = relation.endpoints();
                write!(
                    f,
                    "{relation} links a {want_start} to a {want_end}, got {start} -> {end}"
                )
            }
            Self::UnknownRelation(name) => write!(f, "Unknown relation: '{name}'"),
        }
    }
}

impl std::error::Error for NetworkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Graph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GraphError> for NetworkError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}

/// A graph of artists, releases and studios
#[derive(Debug, Clone, Default)]
pub struct MusicNetwork {
    /// Human-readable network name
    pub name: String,
    graph: Graph<MusicNode>,
}

impl MusicNetwork {
    /// Create an empty network
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            graph: Graph::new(),
        }
    }

    /// The underlying graph, for generic queries
    #[must_use]
    pub const fn graph(&self) -> &Graph<MusicNode> {
        &self.graph
    }

    /// Add an artist, release or studio
    ///
    /// # Errors
    ///
    /// Returns an error if an entity with the same name already exists.
    pub fn add(&mut self, node: impl Into<MusicNode>) -> Result<(), NetworkError> {
        Ok(self.graph.add_node(node.into(), false)?)
    }

    /// Look up an entity by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MusicNode> {
        self.graph.node(&name.to_string())
    }

    /// Add a typed relation between two existing entities
    ///
    /// # Errors
    ///
    /// Returns an error if either entity is missing, the weight is invalid, or the
    /// entity kinds do not match what the relation expects.
    pub fn relate(
        &mut self,
        start: &str,
        relation: Relation,
        end: &str,
        weight: f64,
    ) -> Result<(), NetworkError> {
        let edge = Edge::with_meaning(start.to_string(), end.to_string(), relation.meaning(), weight);
        if let (Some(start_node), Some(end_node)) = (self.get(start), self.get(end)) {
            let found = (start_node.kind(), end_node.kind());
            if found != relation.endpoints() {
                return Err(NetworkError::InvalidEndpoints {
                    relation,
                    start: found.0,
                    end: found.1,
                });
            }
        }
        Ok(self.graph.add_edge(edge)?)
    }

    /// Names of entities reached from `name` along `relation` edges
    fn targets(&self, name: &str, relation: Relation) -> Vec<&MusicNode> {
        self.graph
            .edges_from(&name.to_string())
            .iter()
            .filter(|edge| edge.meaning == relation.meaning())
            .filter_map(|edge| self.graph.node(&edge.end))
            .collect()
    }

    /// Entities with a `relation` edge pointing at `name`
    fn sources(&self, name: &str, relation: Relation) -> Vec<&MusicNode> {
        self.graph
            .edges()
            .filter(|edge| edge.end == name && edge.meaning == relation.meaning())
            .filter_map(|edge| self.graph.node(&edge.start))
            .collect()
    }

    /// Artists that are members of the group `group`
    #[must_use]
    pub fn members_of(&self, group: &str) -> Vec<&Artist> {
        self.sources(group, Relation::MemberOf)
            .into_iter()
            .filter_map(MusicNode::as_artist)
            .collect()
    }

    /// Groups that `artist` is a member of
    #[must_use]
    pub fn groups_of(&self, artist: &str) -> Vec<&Artist> {
        self.targets(artist, Relation::MemberOf)
            .into_iter()
            .filter_map(MusicNode::as_artist)
            .collect()
    }

    /// Releases `artist` played on
    #[must_use]
    pub fn releases_by(&self, artist: &str) -> Vec<&Release> {
        self.targets(artist, Relation::PlayedOn)
            .into_iter()
            .filter_map(MusicNode::as_release)
            .collect()
    }

    /// Artists who played on `release`
    #[must_use]
    pub fn personnel(&self, release: &str) -> Vec<&Artist> {
        self.sources(release, Relation::PlayedOn)
            .into_iter()
            .filter_map(MusicNode::as_artist)
            .collect()
    }

    /// Studios `release` was recorded at
    #[must_use]
    pub fn studios_of(&self, release: &str) -> Vec<&Studio> {
        self.targets(release, Relation::RecordedAt)
            .into_iter()
            .filter_map(MusicNode::as_studio)
            .collect()
    }

    /// Releases (e.g. compilations) that `release` appeared on
    #[must_use]
    pub fn appearances_of(&self, release: &str) -> Vec<&Release> {
        self.targets(release, Relation::AppearedOn)
            .into_iter()
            .filter_map(MusicNode::as_release)
            .collect()
    }

    /// Other artists who played on at least one release with `artist`, sorted by name
    #[must_use]
    pub fn collaborators(&self, artist: &str) -> Vec<String> {
        let names: BTreeSet<String> = self
            .releases_by(artist)
            .into_iter()
            .flat_map(|release| self.personnel(&release.name))
            .filter(|other| other.name != artist)
            .map(|other| other.name.clone())
            .collect();
        names.into_iter().collect()
    }

    /// Shortest chain of entities linking `from` and `to`, regardless of edge direction
    #[must_use]
    pub fn connection(&self, from: &str, to: &str) -> Option<Vec<String>> {
        self.graph.find_link(&from.to_string(), &to.to_string())
    }

    /// Number of entities of each kind
    #[must_use]
    pub fn kind_counts(&self) -> BTreeMap<EntityKind, usize> {
        let mut counts = BTreeMap::new();
        for node in self.graph.nodes() {
            *counts.entry(node.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// Number of edges of each relation
    #[must_use]
    pub fn relation_counts(&self) -> BTreeMap<Relation, usize> {
        let mut counts = BTreeMap::new();
        for edge in self.graph.edges() {
            if let Ok(relation) = edge.meaning.parse::<Relation>() {
                *counts.entry(relation).or_insert(0) += 1;
            }
        }
        counts
    }
}

impl fmt::Display for MusicNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = if self.name.is_empty() {
            "Music network"
        } else {
            &self.name
        };
        writeln!(
            f,
            "{title} ({} entities, {} relations)",
            self.graph.num_nodes(),
            self.graph.num_edges()
        )?;
        for (kind, count) in self.kind_counts() {
            writeln!(f, "  {kind}s: {count}")?;
        }
        for (relation, count) in self.relation_counts() {
            writeln!(f, "  {relation}: {count}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quintet() -> MusicNetwork {
        let mut net = MusicNetwork::new("test quintet");
        for artist in ["Miles Davis", "John Coltrane", "Red Garland", "Quintet"] {
            net.add(Artist::named(artist)).unwrap();
        }
        net.add(Release::new("Cookin'", Some(1957))).unwrap();
        net.add(Release::new("Relaxin'", Some(1958))).unwrap();
        net.add(Release::new("Best Of", None)).unwrap();
        net.add(Studio::new("Van Gelder Studio", "Hackensack")).unwrap();

        for member in ["Miles Davis", "John Coltrane", "Red Garland"] {
            net.relate(member, Relation::MemberOf, "Quintet", 1.0).unwrap();
        }
        net.relate("Miles Davis", Relation::PlayedOn, "Cookin'", 1.0).unwrap();
        net.relate("John Coltrane", Relation::PlayedOn, "Cookin'", 1.0).unwrap();
        net.relate("Miles Davis", Relation::PlayedOn, "Relaxin'", 1.0).unwrap();
        net.relate("Red Garland", Relation::PlayedOn, "Relaxin'", 1.0).unwrap();
        net.relate("Cookin'", Relation::RecordedAt, "Van Gelder Studio", 1.0).unwrap();
        net.relate("Cookin'", Relation::AppearedOn, "Best Of", 1.0).unwrap();
        net
    }

    #[test]
    fn test_relation_meaning_round_trip() {
        for relation in Relation::ALL {
            assert_eq!(relation.meaning().parse::<Relation>(), Ok(relation));
        }
        assert_eq!("played on".parse::<Relation>(), Ok(Relation::PlayedOn));
        assert!(matches!(
            "PRODUCED".parse::<Relation>(),
            Err(NetworkError::UnknownRelation(_))
        ));
    }

    #[test]
    fn test_duplicate_entity_rejected() {
        let mut net = quintet();
        let err = net.add(Release::new("Miles Davis", None)).unwrap_err();
        assert_eq!(
            err,
            NetworkError::Graph(GraphError::DuplicateNode("Miles Davis".to_string()))
        );
    }

    #[test]
    fn test_relation_endpoint_kinds_enforced() {
        let mut net = quintet();
        let err = net
            .relate("Cookin'", Relation::PlayedOn, "Miles Davis", 1.0)
            .unwrap_err();
        assert_eq!(
            err,
            NetworkError::InvalidEndpoints {
                relation: Relation::PlayedOn,
                start: EntityKind::Release,
                end: EntityKind::Artist,
            }
        );
        assert!(err.to_string().contains("PLAYED_ON links a artist to a release"));
    }

    #[test]
    fn test_relation_to_missing_entity() {
        let mut net = quintet();
        let err = net
            .relate("Paul Chambers", Relation::PlayedOn, "Cookin'", 1.0)
            .unwrap_err();
        assert!(matches!(
            err,
            NetworkError::Graph(GraphError::UnknownStart { .. })
        ));
    }

    #[test]
    fn test_membership_queries() {
        let net = quintet();
        let members: Vec<&str> = net
            .members_of("Quintet")
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(members, vec!["Miles Davis", "John Coltrane", "Red Garland"]);
        let groups: Vec<&str> = net
            .groups_of("Red Garland")
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(groups, vec!["Quintet"]);
    }

    #[test]
    fn test_release_queries() {
        let net = quintet();
        let releases: Vec<&str> = net
            .releases_by("Miles Davis")
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(releases, vec!["Cookin'", "Relaxin'"]);

        let personnel: Vec<&str> = net
            .personnel("Relaxin'")
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(personnel, vec!["Miles Davis", "Red Garland"]);

        assert_eq!(net.studios_of("Cookin'")[0].city, "Hackensack");
        assert!(net.studios_of("Relaxin'").is_empty());
        assert_eq!(net.appearances_of("Cookin'")[0].name, "Best Of");
    }

    #[test]
    fn test_collaborators() {
        let net = quintet();
        assert_eq!(
            net.collaborators("Miles Davis"),
            vec!["John Coltrane".to_string(), "Red Garland".to_string()]
        );
        assert_eq!(net.collaborators("John Coltrane"), vec!["Miles Davis".to_string()]);
        assert!(net.collaborators("Quintet").is_empty());
    }

    #[test]
    fn test_connection_crosses_edge_direction() {
        let net = quintet();
        let path = net.connection("John Coltrane", "Van Gelder Studio").unwrap();
        assert_eq!(path, vec!["John Coltrane", "Cookin'", "Van Gelder Studio"]);
        assert!(net.connection("John Coltrane", "Nobody").is_none());
    }

    #[test]
    fn test_counts_and_display() {
        let net = quintet();
        let kinds = net.kind_counts();
        assert_eq!(kinds[&EntityKind::Artist], 4);
        assert_eq!(kinds[&EntityKind::Release], 3);
        assert_eq!(kinds[&EntityKind::Studio], 1);
        assert_eq!(net.relation_counts()[&Relation::PlayedOn], 4);

        let display = net.to_string();
        assert!(display.starts_with("test quintet (8 entities, 9 relations)"));
        assert!(display.contains("MEMBER_OF: 3"));
    }
}
