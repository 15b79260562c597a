//! Data models for `music-graph`

pub mod graph;
pub mod list;
pub mod music;
pub mod tree;

pub use graph::{Edge, Graph, GraphError, Named, Node, SearchOrder};
pub use list::{List, ListNode};
pub use music::{
    Artist, EntityKind, MusicNetwork, MusicNode, NetworkError, Relation, Release, Studio,
};
pub use tree::{BinarySearchTree, Tree, TreeNode};
