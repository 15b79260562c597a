//! Sample data used by the exercises, the tests and the CLI demos
//!
//! Each function builds a fresh value so callers may mutate what they get.

use crate::core::models::{
    Artist, BinarySearchTree, Edge, Graph, List, ListNode, MusicNetwork, MusicNode, Node, Relation,
    Release, Studio, Tree, TreeNode,
};
use crate::warn;

/// `"hello" -> None`
#[must_use]
pub fn ls1() -> List<&'static str> {
    List::from_node(ListNode::new("hello"))
}

/// `1 -> 2 -> 3 -> None`
#[must_use]
pub fn ls2() -> List<i32> {
    List::from_node(ListNode::with_next(1, ListNode::with_next(2, ListNode::new(3))))
}

/// `2 -> 1 -> 3 -> None`, the same values as [`ls2`] in another order
#[must_use]
pub fn ls3() -> List<i32> {
    List::from_node(ListNode::with_next(2, ListNode::with_next(1, ListNode::new(3))))
}

/// A tree holding a single bud
#[must_use]
pub fn t0() -> Tree<f64> {
    Tree::new(TreeNode::bud())
}

/// A tree holding a single leaf `1`
#[must_use]
pub fn t1() -> Tree<f64> {
    Tree::new(TreeNode::leaf(1.0))
}

/// `[.] <- 4 -> [1]`, which breaks the BST property
#[must_use]
pub fn t2() -> Tree<f64> {
    Tree::new(TreeNode::branch(4.0, TreeNode::bud(), TreeNode::leaf(1.0)))
}

/// A nine element BST of height four:
///
/// ```text
///               2
///           /      \
///          0        3
///         / \      /  \
///       -1   1    2    5
///                     / \
///                    4   6
/// ```
#[must_use]
pub fn t3() -> Tree<f64> {
    Tree::new(TreeNode::branch(
        2.0,
        TreeNode::branch(0.0, TreeNode::leaf(-1.0), TreeNode::leaf(1.0)),
        TreeNode::branch(
            3.0,
            TreeNode::leaf(2.0),
            TreeNode::branch(5.0, TreeNode::leaf(4.0), TreeNode::leaf(6.0)),
        ),
    ))
}

/// The values of [`t3`] arranged out of order, rebuilt into a BST
#[must_use]
pub fn t4() -> BinarySearchTree<f64> {
    BinarySearchTree::new(TreeNode::branch(
        3.0,
        TreeNode::branch(4.0, TreeNode::leaf(-1.0), TreeNode::leaf(5.0)),
        TreeNode::branch(
            2.0,
            TreeNode::leaf(2.0),
            TreeNode::branch(1.0, TreeNode::leaf(0.0), TreeNode::leaf(6.0)),
        ),
    ))
}

fn numbered_graph(count: u32, edges: &[(u32, u32)]) -> Graph<Node<u32>> {
    Graph::from_parts(
        (0..count).map(Node::new),
        edges.iter().map(|&(start, end)| Edge::new(start, end)),
    )
}

/// Seven nodes in two components, one of them a cycle:
///
/// ```text
///    0 ----> 1      4 ----> 5
///    ^       |      ^
///    |       v      |
///    3 <---- 2      6
/// ```
#[must_use]
pub fn g1() -> Graph<Node<u32>> {
    numbered_graph(7, &[(0, 1), (1, 2), (2, 3), (3, 0), (4, 5), (6, 4)])
}

/// Ten nodes in four components, no cycles:
///
/// ```text
///    5 --> 9 --> 1 --> 2      6 --> 4 --> 0
///
///    7 --> 3                  8
/// ```
#[must_use]
pub fn g2() -> Graph<Node<u32>> {
    numbered_graph(10, &[(9, 1), (1, 2), (5, 9), (4, 0), (6, 4), (7, 3)])
}

/// A small network around the 1959 Kind of Blue sessions
#[must_use]
pub fn jazz_network() -> MusicNetwork {
    let mut network = MusicNetwork::new("Kind of Blue sessions");

    let artists = [
        ("Miles Davis", Some(23755)),
        ("John Coltrane", Some(97545)),
        ("Cannonball Adderley", Some(88549)),
        ("Bill Evans", Some(25280)),
        ("Wynton Kelly", None),
        ("Paul Chambers", Some(66541)),
        ("Jimmy Cobb", None),
        ("Miles Davis Sextet", None),
    ];
    for (name, discogs_id) in artists {
        let mut artist = Artist::named(name);
        artist.discogs_id = discogs_id;
        add_or_warn(&mut network, artist);
    }
    add_or_warn(&mut network, Release::new("Kind of Blue", Some(1959)));
    add_or_warn(&mut network, Release::new("Milestones", Some(1958)));
    add_or_warn(&mut network, Release::new("Giant Steps", Some(1960)));
    add_or_warn(&mut network, Release::new("Jazz at the Plaza", Some(1973)));
    add_or_warn(&mut network, Studio::new("Columbia 30th Street Studio", "New York"));
    add_or_warn(&mut network, Studio::new("Atlantic Studios", "New York"));

    let relations = [
        ("Miles Davis", Relation::MemberOf, "Miles Davis Sextet"),
        ("John Coltrane", Relation::MemberOf, "Miles Davis Sextet"),
        ("Cannonball Adderley", Relation::MemberOf, "Miles Davis Sextet"),
        ("Bill Evans", Relation::MemberOf, "Miles Davis Sextet"),
        ("Paul Chambers", Relation::MemberOf, "Miles Davis Sextet"),
        ("Jimmy Cobb", Relation::MemberOf, "Miles Davis Sextet"),
        ("Miles Davis", Relation::PlayedOn, "Kind of Blue"),
        ("John Coltrane", Relation::PlayedOn, "Kind of Blue"),
        ("Cannonball Adderley", Relation::PlayedOn, "Kind of Blue"),
        ("Bill Evans", Relation::PlayedOn, "Kind of Blue"),
        ("Wynton Kelly", Relation::PlayedOn, "Kind of Blue"),
        ("Paul Chambers", Relation::PlayedOn, "Kind of Blue"),
        ("Jimmy Cobb", Relation::PlayedOn, "Kind of Blue"),
        ("Miles Davis", Relation::PlayedOn, "Milestones"),
        ("John Coltrane", Relation::PlayedOn, "Milestones"),
        ("Cannonball Adderley", Relation::PlayedOn, "Milestones"),
        ("Paul Chambers", Relation::PlayedOn, "Milestones"),
        ("John Coltrane", Relation::PlayedOn, "Giant Steps"),
        ("Paul Chambers", Relation::PlayedOn, "Giant Steps"),
        ("Wynton Kelly", Relation::PlayedOn, "Giant Steps"),
        ("Jimmy Cobb", Relation::PlayedOn, "Giant Steps"),
        ("Kind of Blue", Relation::RecordedAt, "Columbia 30th Street Studio"),
        ("Milestones", Relation::RecordedAt, "Columbia 30th Street Studio"),
        ("Giant Steps", Relation::RecordedAt, "Atlantic Studios"),
        ("Milestones", Relation::AppearedOn, "Jazz at the Plaza"),
    ];
    for (start, relation, end) in relations {
        if let Err(e) = network.relate(start, relation, end, 1.0) {
            warn!("Sample relation {start} -> {end} refused: {e}");
        }
    }
    network
}

fn add_or_warn(network: &mut MusicNetwork, entity: impl Into<MusicNode>) {
    if let Err(e) = network.add(entity) {
        warn!("Sample entity refused: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::EntityKind;

    #[test]
    fn test_sample_graph_sizes() {
        assert_eq!(g1().num_nodes(), 7);
        assert_eq!(g1().num_edges(), 6);
        assert_eq!(g2().num_nodes(), 10);
        assert_eq!(g2().num_edges(), 6);
    }

    #[test]
    fn test_jazz_network_is_complete() {
        let network = jazz_network();
        let kinds = network.kind_counts();
        assert_eq!(kinds[&EntityKind::Artist], 8);
        assert_eq!(kinds[&EntityKind::Release], 4);
        assert_eq!(kinds[&EntityKind::Studio], 2);
        assert_eq!(network.graph().num_edges(), 25);
    }

    #[test]
    fn test_sample_trees() {
        assert_eq!(t3().len(), 9);
        assert!(!t2().is_bst());
        assert_eq!(t4().to_vec(), t3().to_vec());
    }
}
