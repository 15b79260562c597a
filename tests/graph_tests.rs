//! Integration tests for the graph model on the sample graphs

use music_graph::models::{Edge, Graph, GraphError, Node, SearchOrder};
use music_graph::samples::{g1, g2};

fn sorted_components(graph: &Graph<Node<u32>>) -> Vec<Vec<u32>> {
    let mut groups = graph.connected_components();
    for group in &mut groups {
        group.sort_unstable();
    }
    groups.sort_unstable_by_key(|group| group[0]);
    groups
}

#[test]
fn g1_paths_follow_edge_direction() {
    let graph = g1();
    for (start, end) in [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (1, 0), (2, 0), (3, 2), (6, 4), (4, 5)] {
        assert!(graph.path_exists(&start, &end), "{start} -> {end}");
    }
    for (start, end) in [(4, 6), (5, 6), (0, 6), (0, 4)] {
        assert!(!graph.path_exists(&start, &end), "{start} -/-> {end}");
    }
}

#[test]
fn g2_paths_follow_edge_direction() {
    let graph = g2();
    for (start, end) in [(9, 1), (5, 1), (4, 0), (7, 3)] {
        assert!(graph.path_exists(&start, &end), "{start} -> {end}");
    }
    for (start, end) in [(2, 9), (5, 4), (9, 6), (7, 8)] {
        assert!(!graph.path_exists(&start, &end), "{start} -/-> {end}");
    }
}

#[test]
fn paths_include_both_ends() {
    let graph = g2();
    assert_eq!(graph.find_path(&5, &2), Some(vec![5, 9, 1, 2]));
    assert_eq!(
        graph.find_path_with(&5, &2, SearchOrder::DepthFirst),
        Some(vec![5, 9, 1, 2])
    );
}

#[test]
fn cycle_returns_to_start() {
    let graph = g1();
    assert_eq!(graph.find_path(&0, &0), Some(vec![0, 1, 2, 3, 0]));
    assert_eq!(graph.find_path(&4, &4), None);
}

#[test]
fn components_match_sample_answers() {
    assert_eq!(sorted_components(&g1()), vec![vec![0, 1, 2, 3], vec![4, 5, 6]]);
    assert_eq!(
        sorted_components(&g2()),
        vec![vec![0, 4, 6], vec![1, 2, 5, 9], vec![3, 7], vec![8]]
    );
}

#[test]
fn components_cover_every_node_once() {
    let graph = g2();
    let mut all: Vec<u32> = graph.connected_components().into_iter().flatten().collect();
    all.sort_unstable();
    assert_eq!(all, (0..10).collect::<Vec<_>>());
}

#[test]
fn cheapest_path_prefers_light_edges() {
    let mut graph: Graph<Node<&str>> = Graph::new();
    for name in ["a", "b", "c", "d"] {
        graph.add_node(Node::new(name), false).unwrap();
    }
    graph.add_edge(Edge::with_meaning("a", "d", "DIRECT", 10.0)).unwrap();
    graph.add_edge(Edge::with_meaning("a", "b", "HOP", 1.0)).unwrap();
    graph.add_edge(Edge::with_meaning("b", "c", "HOP", 1.0)).unwrap();
    graph.add_edge(Edge::with_meaning("c", "d", "HOP", 1.0)).unwrap();

    let (cost, path) = graph.cheapest_path(&"a", &"d").unwrap();
    assert!((cost - 3.0).abs() < f64::EPSILON);
    assert_eq!(path, vec!["a", "b", "c", "d"]);
    assert_eq!(graph.find_path(&"a", &"d"), Some(vec!["a", "d"]));
}

#[test]
fn rejected_edges_leave_graph_unchanged() {
    let mut graph = g1();
    let before = graph.num_edges();
    assert!(matches!(
        graph.add_edge(Edge::new(0, 42)),
        Err(GraphError::UnknownEnd { .. })
    ));
    assert!(matches!(
        graph.add_edge(Edge::with_meaning(0, 1, "BAD", f64::NAN)),
        Err(GraphError::InvalidWeight(_))
    ));
    assert_eq!(graph.num_edges(), before);
}
