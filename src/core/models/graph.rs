//! Finite, explicit, directed graphs
//!
//! A graph is a set of named nodes plus directed edges between them. Each edge carries
//! a `meaning` (what kind of relationship it is) and a `weight`.
//!
//! Nodes are stored by name in insertion order. Edges are bucketed by their start node:
//! every start name maps to the list of edges leaving it. This makes "where can I go
//! from here" a single lookup, which is all the search algorithms need.

use crate::warn;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use std::fmt;
use std::hash::Hash;

/// Meaning given to edges created without one
pub const DEFAULT_MEANING: &str = "EXAMPLE";

/// Anything that can be stored as a graph node
///
/// The name is the node's identity: two nodes with the same name are the same node.
pub trait Named {
    /// Type of the node's name
    type Name: Clone + Eq + Hash + fmt::Display;

    /// The node's name
    fn name(&self) -> &Self::Name;
}

/// A node that is nothing but its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K> {
    /// Node name
    pub name: K,
}

impl<K> Node<K> {
    /// Create a node
    #[must_use]
    pub const fn new(name: K) -> Self {
        Self { name }
    }
}

impl<K: Clone + Eq + Hash + fmt::Display> Named for Node<K> {
    type Name = K;

    fn name(&self) -> &K {
        &self.name
    }
}

/// A directed edge from `start` to `end`
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<K> {
    /// Name of the node the edge leaves
    pub start: K,
    /// Name of the node the edge enters
    pub end: K,
    /// Kind of relationship, e.g. `"PLAYED_ON"`
    pub meaning: String,
    /// Cost of traversing the edge
    pub weight: f64,
}

impl<K> Edge<K> {
    /// An edge with the default meaning and weight 1
    #[must_use]
    pub fn new(start: K, end: K) -> Self {
        Self::with_meaning(start, end, DEFAULT_MEANING, 1.0)
    }

    /// An edge with an explicit meaning and weight
    #[must_use]
    pub fn with_meaning(start: K, end: K, meaning: impl Into<String>, weight: f64) -> Self {
        Self {
            start,
            end,
            meaning: meaning.into(),
            weight,
        }
    }
}

/// Order in which candidate paths are explored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchOrder {
    /// Explore the oldest candidate first (queue); finds a path with the fewest edges
    #[default]
    BreadthFirst,
    /// Explore the newest candidate first (stack)
    DepthFirst,
}

impl std::str::FromStr for SearchOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth" | "breadth-first" => Ok(Self::BreadthFirst),
            "dfs" | "depth" | "depth-first" => Ok(Self::DepthFirst),
            _ => Err(format!("Unknown search order: '{s}' (expected bfs or dfs)")),
        }
    }
}

impl fmt::Display for SearchOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BreadthFirst => write!(f, "bfs"),
            Self::DepthFirst => write!(f, "dfs"),
        }
    }
}

/// Reasons a node or edge is refused by a graph
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A node with this name already exists and updates were not allowed
    DuplicateNode(String),
    /// The edge's start node is not in the graph
    UnknownStart {
        /// Edge meaning
        meaning: String,
        /// Missing node name
        name: String,
    },
    /// The edge's end node is not in the graph
    UnknownEnd {
        /// Edge meaning
        meaning: String,
        /// Missing node name
        name: String,
    },
    /// Edge weights must be finite and non-negative
    InvalidWeight(f64),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateNode(name) => write!(
                f,
                "Node already exists with name '{name}' and updates are not enabled"
            ),
            Self::UnknownStart { meaning, name } => {
                write!(f, "Unknown start node in {meaning} edge: '{name}'")
            }
            Self::UnknownEnd { meaning, name } => {
                write!(f, "Unknown end node in {meaning} edge: '{name}'")
            }
            Self::InvalidWeight(weight) => {
                write!(f, "Edge weight must be finite and non-negative, got {weight}")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// A finite, explicit, directed graph
#[derive(Debug, Clone)]
pub struct Graph<N: Named> {
    /// Node name -> node payload
    nodes: HashMap<N::Name, N>,
    /// Node names in insertion order
    order: Vec<N::Name>,
    /// Start node name -> all edges leaving it
    edges: HashMap<N::Name, Vec<Edge<N::Name>>>,
    num_edges: usize,
}

impl<N: Named> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Named> Graph<N> {
    /// Create an empty graph
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            order: Vec::new(),
            edges: HashMap::new(),
            num_edges: 0,
        }
    }

    /// Build a graph from initial nodes and edges
    ///
    /// Nodes are added before edges. Anything the graph refuses (duplicate nodes, edges
    /// with unknown endpoints) is logged as a warning and skipped.
    pub fn from_parts<I, E>(nodes: I, edges: E) -> Self
    where
        I: IntoIterator<Item = N>,
        E: IntoIterator<Item = Edge<N::Name>>,
    {
        let mut graph = Self::new();
        for node in nodes {
            if let Err(e) = graph.add_node(node, false) {
                warn!("Ignoring node insert: {e}");
            }
        }
        for edge in edges {
            if let Err(e) = graph.add_edge(edge) {
                warn!("{e}, skipping");
            }
        }
        graph
    }

    /// Add a node
    ///
    /// With `allow_update`, a node whose name already exists replaces the stored payload
    /// and keeps its position.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNode`] if the name exists and `allow_update` is false.
    pub fn add_node(&mut self, node: N, allow_update: bool) -> Result<(), GraphError> {
        let name = node.name().clone();
        if self.nodes.contains_key(&name) {
            if !allow_update {
                return Err(GraphError::DuplicateNode(name.to_string()));
            }
        } else {
            self.order.push(name.clone());
        }
        self.nodes.insert(name, node);
        Ok(())
    }

    /// Add a directed edge between two existing nodes
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is unknown or the weight is negative or not finite.
    pub fn add_edge(&mut self, edge: Edge<N::Name>) -> Result<(), GraphError> {
        if !self.nodes.contains_key(&edge.start) {
            return Err(GraphError::UnknownStart {
                meaning: edge.meaning,
                name: edge.start.to_string(),
            });
        }
        if !self.nodes.contains_key(&edge.end) {
            return Err(GraphError::UnknownEnd {
                meaning: edge.meaning,
                name: edge.end.to_string(),
            });
        }
        if !edge.weight.is_finite() || edge.weight < 0.0 {
            return Err(GraphError::InvalidWeight(edge.weight));
        }
        self.edges.entry(edge.start.clone()).or_default().push(edge);
        self.num_edges += 1;
        Ok(())
    }

    /// Look up a node by name
    #[must_use]
    pub fn node(&self, name: &N::Name) -> Option<&N> {
        self.nodes.get(name)
    }

    /// Whether a node with this name exists
    #[must_use]
    pub fn contains_node(&self, name: &N::Name) -> bool {
        self.nodes.contains_key(name)
    }

    /// All nodes, in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.order.iter().filter_map(|name| self.nodes.get(name))
    }

    /// All node names, in insertion order
    #[must_use]
    pub fn node_names(&self) -> &[N::Name] {
        &self.order
    }

    /// All edges, grouped by start node in node insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge<N::Name>> {
        self.order.iter().flat_map(|name| self.edges_from(name))
    }

    /// Edges leaving `name` (empty for unknown names)
    #[must_use]
    pub fn edges_from(&self, name: &N::Name) -> &[Edge<N::Name>] {
        self.edges.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Edges entering `name`
    pub fn edges_into<'a>(&'a self, name: &'a N::Name) -> impl Iterator<Item = &'a Edge<N::Name>> {
        self.edges().filter(move |edge| edge.end == *name)
    }

    /// Number of nodes
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.order.len()
    }

    /// Number of edges
    #[must_use]
    pub const fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Breadth-first path search; see [`Graph::find_path_with`]
    #[must_use]
    pub fn find_path(&self, start: &N::Name, end: &N::Name) -> Option<Vec<N::Name>> {
        self.find_path_with(start, end, SearchOrder::BreadthFirst)
    }

    /// Find a directed path from `start` to `end`
    ///
    /// Returns the node names along the path, `start` first and `end` last. Nodes wait on
    /// a frontier; each step takes one off (front for BFS, back for DFS) and follows
    /// every outgoing edge. A node is queued at most once, so each node and edge is
    /// looked at once and cycles cannot trap the search. Breadth-first returns a path
    /// with the fewest hops. `start == end` is only found through a cycle.
    ///
    /// Returns `None` when either node is unknown or no path exists.
    #[must_use]
    pub fn find_path_with(
        &self,
        start: &N::Name,
        end: &N::Name,
        order: SearchOrder,
    ) -> Option<Vec<N::Name>> {
        if !self.contains_node(start) || !self.contains_node(end) {
            return None;
        }

        let mut seen: HashSet<&N::Name> = HashSet::from([start]);
        let mut previous: HashMap<&N::Name, &N::Name> = HashMap::new();
        let mut frontier: VecDeque<&N::Name> = VecDeque::from([start]);
        while let Some(current) = match order {
            SearchOrder::BreadthFirst => frontier.pop_front(),
            SearchOrder::DepthFirst => frontier.pop_back(),
        } {
            for edge in self.edges_from(current) {
                if edge.end == *end {
                    let mut path = Self::walk_back(&previous, start, current)?;
                    path.push(end.clone());
                    return Some(path);
                }
                if seen.insert(&edge.end) {
                    previous.insert(&edge.end, current);
                    frontier.push_back(&edge.end);
                }
            }
        }
        None
    }

    /// Follow `previous` links from `last` back to `start`, returned start first
    fn walk_back(
        previous: &HashMap<&N::Name, &N::Name>,
        start: &N::Name,
        last: &N::Name,
    ) -> Option<Vec<N::Name>> {
        let mut path = vec![last.clone()];
        let mut cursor = last;
        while cursor != start {
            cursor = previous.get(cursor)?;
            path.push(cursor.clone());
        }
        path.reverse();
        Some(path)
    }

    /// Whether a directed path leads from `start` to `end`
    #[must_use]
    pub fn path_exists(&self, start: &N::Name, end: &N::Name) -> bool {
        self.find_path(start, end).is_some()
    }

    /// Cheapest directed path by total edge weight (Dijkstra)
    ///
    /// Returns the total cost and the node names along the path. A node is its own
    /// cheapest path at cost 0.
    #[must_use]
    pub fn cheapest_path(&self, start: &N::Name, end: &N::Name) -> Option<(f64, Vec<N::Name>)> {
        if !self.contains_node(start) || !self.contains_node(end) {
            return None;
        }

        let mut best: HashMap<&N::Name, f64> = HashMap::from([(start, 0.0)]);
        let mut previous: HashMap<&N::Name, &N::Name> = HashMap::new();
        let mut settled: HashSet<&N::Name> = HashSet::new();
        let mut heap = BinaryHeap::from([Frontier { cost: 0.0, name: start }]);

        while let Some(Frontier { cost, name }) = heap.pop() {
            if !settled.insert(name) {
                continue;
            }
            if name == end {
                let mut path = vec![end.clone()];
                let mut cursor = end;
                while let Some(prev) = previous.get(cursor) {
                    path.push((*prev).clone());
                    cursor = *prev;
                }
                path.reverse();
                return Some((cost, path));
            }
            for edge in self.edges_from(name) {
                let next_cost = cost + edge.weight;
                if best.get(&edge.end).is_none_or(|known| next_cost < *known) {
                    best.insert(&edge.end, next_cost);
                    previous.insert(&edge.end, name);
                    heap.push(Frontier {
                        cost: next_cost,
                        name: &edge.end,
                    });
                }
            }
        }
        None
    }

    /// Shortest path between two nodes, ignoring edge direction
    ///
    /// Useful for "how are these two things connected at all" questions where the
    /// edges point the wrong way for a directed search.
    #[must_use]
    pub fn find_link(&self, start: &N::Name, end: &N::Name) -> Option<Vec<N::Name>> {
        if !self.contains_node(start) || !self.contains_node(end) {
            return None;
        }
        if start == end {
            return Some(vec![start.clone()]);
        }

        let adjacency = self.undirected_adjacency();
        let mut previous: HashMap<&N::Name, &N::Name> = HashMap::new();
        let mut visited: HashSet<&N::Name> = HashSet::from([start]);
        let mut queue: VecDeque<&N::Name> = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            for &next in adjacency.get(current).into_iter().flatten() {
                if !visited.insert(next) {
                    continue;
                }
                previous.insert(next, current);
                if next == end {
                    let mut path = vec![end.clone()];
                    let mut cursor = end;
                    while let Some(prev) = previous.get(cursor) {
                        path.push((*prev).clone());
                        cursor = *prev;
                    }
                    path.reverse();
                    return Some(path);
                }
                queue.push_back(next);
            }
        }
        None
    }

    /// Split all nodes into disjoint, weakly connected groups
    ///
    /// Two nodes share a group when some chain of edges, followed in either direction,
    /// joins them. Groups come out in order of their earliest inserted node; members are
    /// listed in discovery order.
    #[must_use]
    pub fn connected_components(&self) -> Vec<Vec<N::Name>> {
        let adjacency = self.undirected_adjacency();
        let mut visited: HashSet<&N::Name> = HashSet::new();
        let mut components = Vec::new();

        for root in &self.order {
            if !visited.insert(root) {
                continue;
            }
            let mut component = vec![root.clone()];
            let mut queue = VecDeque::from([root]);
            while let Some(current) = queue.pop_front() {
                for &next in adjacency.get(current).into_iter().flatten() {
                    if visited.insert(next) {
                        component.push(next.clone());
                        queue.push_back(next);
                    }
                }
            }
            components.push(component);
        }
        components
    }

    fn undirected_adjacency(&self) -> HashMap<&N::Name, Vec<&N::Name>> {
        let mut adjacency: HashMap<&N::Name, Vec<&N::Name>> = HashMap::new();
        for edge in self.edges() {
            adjacency.entry(&edge.start).or_default().push(&edge.end);
            adjacency.entry(&edge.end).or_default().push(&edge.start);
        }
        adjacency
    }
}

impl<N: Named> fmt::Display for Graph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph ({} nodes, {} edges):",
            self.num_nodes(),
            self.num_edges()
        )?;
        for name in &self.order {
            let targets: Vec<String> = self
                .edges_from(name)
                .iter()
                .map(|edge| format!("{} ({})", edge.end, edge.meaning))
                .collect();
            if targets.is_empty() {
                writeln!(f, "  {name}")?;
            } else {
                writeln!(f, "  {name} → {}", targets.join(", "))?;
            }
        }
        Ok(())
    }
}

/// Heap entry for the cheapest-path search; ordered so the smallest cost pops first
struct Frontier<'a, K> {
    cost: f64,
    name: &'a K,
}

impl<K> PartialEq for Frontier<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        self.cost.total_cmp(&other.cost) == Ordering::Equal
    }
}

impl<K> Eq for Frontier<'_, K> {}

impl<K> PartialOrd for Frontier<'_, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for Frontier<'_, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.total_cmp(&self.cost)
    }
}
