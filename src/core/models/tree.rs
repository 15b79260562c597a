//! Binary trees and binary search trees
//!
//! A tree node is either a leaf or a branch. A leaf may or may not carry a value; a
//! leaf without one is a *bud*. A branch carries a value and exactly two children.
//!
//! ```text
//!                 2
//!             /      \
//!            0        3
//!           / \      /  \
//!         -1   1    2    5
//!                       / \
//!                      4   6
//! ```
//!
//! prints on one line as `[[-1] <- 0 -> [1]] <- 2 -> [[2] <- 3 -> [[4] <- 5 -> [6]]]`.
//!
//! A tree has the BST property when, for every branch, all values on its left are
//! `<=` the branch value and all values on its right are `>=` it.

use std::fmt;

/// A node of a binary tree
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode<T> {
    /// Terminal node, holding zero or one value
    Leaf(Option<T>),
    /// Non-terminal node with two children
    Branch {
        /// Value held by the branch
        value: T,
        /// Left subtree
        left: Box<TreeNode<T>>,
        /// Right subtree
        right: Box<TreeNode<T>>,
    },
}

impl<T> Default for TreeNode<T> {
    fn default() -> Self {
        Self::bud()
    }
}

impl<T> TreeNode<T> {
    /// A leaf with no value
    #[must_use]
    pub const fn bud() -> Self {
        Self::Leaf(None)
    }

    /// A leaf holding `value`
    #[must_use]
    pub const fn leaf(value: T) -> Self {
        Self::Leaf(Some(value))
    }

    /// A branch holding `value` with the given children
    #[must_use]
    pub fn branch(value: T, left: Self, right: Self) -> Self {
        Self::Branch {
            value,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Whether this node is a leaf without a value
    #[must_use]
    pub const fn is_bud(&self) -> bool {
        matches!(self, Self::Leaf(None))
    }

    /// Value held directly by this node
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Leaf(value) => value.as_ref(),
            Self::Branch { value, .. } => Some(value),
        }
    }

    /// Number of values in this subtree
    #[must_use]
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            match node {
                Self::Leaf(value) => count += usize::from(value.is_some()),
                Self::Branch { left, right, .. } => {
                    count += 1;
                    pending.push(&**left);
                    pending.push(&**right);
                }
            }
        }
        count
    }

    /// Number of values on the longest root-to-leaf path
    #[must_use]
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut pending = vec![(self, 0)];
        while let Some((node, above)) = pending.pop() {
            match node {
                Self::Leaf(value) => {
                    tallest = tallest.max(above + usize::from(value.is_some()));
                }
                Self::Branch { left, right, .. } => {
                    tallest = tallest.max(above + 1);
                    pending.push((&**left, above + 1));
                    pending.push((&**right, above + 1));
                }
            }
        }
        tallest
    }

    /// In-order values of this subtree
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        enum Visit<'a, T> {
            Node(&'a TreeNode<T>),
            Value(&'a T),
        }

        let mut out = Vec::new();
        let mut pending = vec![Visit::Node(self)];
        while let Some(visit) = pending.pop() {
            match visit {
                Visit::Value(value) => out.push(value.clone()),
                Visit::Node(Self::Leaf(Some(value))) => out.push(value.clone()),
                Visit::Node(Self::Leaf(None)) => {}
                Visit::Node(Self::Branch { value, left, right }) => {
                    pending.push(Visit::Node(&**right));
                    pending.push(Visit::Value(value));
                    pending.push(Visit::Node(&**left));
                }
            }
        }
        out
    }
}

impl<T: PartialOrd> TreeNode<T> {
    /// Whether this subtree satisfies the BST property within `[min, max]`
    ///
    /// Either bound may be open.
    #[must_use]
    pub fn is_bst(&self, min: Option<&T>, max: Option<&T>) -> bool {
        let mut pending = vec![(self, min, max)];
        while let Some((node, min, max)) = pending.pop() {
            let within = |value: &T| {
                min.is_none_or(|lo| value >= lo) && max.is_none_or(|hi| value <= hi)
            };
            match node {
                Self::Leaf(None) => {}
                Self::Leaf(Some(value)) => {
                    if !within(value) {
                        return false;
                    }
                }
                Self::Branch { value, left, right } => {
                    if !within(value) {
                        return false;
                    }
                    pending.push((&**left, min, Some(value)));
                    pending.push((&**right, Some(value), max));
                }
            }
        }
        true
    }

    /// Insert `value` below this node without rebuilding the path to it
    ///
    /// Walks down one root-to-leaf path, then grows the leaf it reaches as
    /// [`with_inserted`](Self::with_inserted) does.
    pub fn insert(&mut self, value: T) {
        let mut cursor = self;
        while let Self::Branch {
            value: here,
            left,
            right,
        } = cursor
        {
            cursor = if value < *here {
                &mut **left
            } else {
                &mut **right
            };
        }
        *cursor = std::mem::take(cursor).with_inserted(value);
    }

    /// Insert `value` as a new leaf, keeping the BST property if it already holds
    ///
    /// A valued leaf grows into a branch holding the new value, with the old value
    /// moved to whichever side keeps the ordering.
    #[must_use]
    pub fn with_inserted(self, value: T) -> Self {
        match self {
            Self::Leaf(None) => Self::leaf(value),
            Self::Leaf(Some(existing)) => {
                if existing < value {
                    Self::branch(value, Self::leaf(existing), Self::bud())
                } else {
                    Self::branch(value, Self::bud(), Self::leaf(existing))
                }
            }
            Self::Branch {
                value: here,
                left,
                right,
            } => {
                if value < here {
                    Self::Branch {
                        left: Box::new((*left).with_inserted(value)),
                        value: here,
                        right,
                    }
                } else {
                    Self::Branch {
                        right: Box::new((*right).with_inserted(value)),
                        value: here,
                        left,
                    }
                }
            }
        }
    }
}

impl<T: fmt::Display> fmt::Display for TreeNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(Some(value)) => write!(f, "{value}"),
            Self::Leaf(None) => write!(f, "."),
            Self::Branch { value, left, right } => write!(f, "[{left}] <- {value} -> [{right}]"),
        }
    }
}

/// A binary tree with a cached element count
#[derive(Debug, Clone, PartialEq)]
pub struct Tree<T> {
    root: TreeNode<T>,
    num_elements: usize,
}

impl<T> Tree<T> {
    /// Wrap a root node, counting its values
    #[must_use]
    pub fn new(root: TreeNode<T>) -> Self {
        let num_elements = root.size();
        Self { root, num_elements }
    }

    /// Root node
    #[must_use]
    pub const fn root(&self) -> &TreeNode<T> {
        &self.root
    }

    /// Number of values in the tree
    #[must_use]
    pub const fn len(&self) -> usize {
        self.num_elements
    }

    /// Whether the tree holds no values
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.num_elements == 0
    }

    /// Longest root-to-leaf path, counted in values
    #[must_use]
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// In-order values; sorted whenever the tree is a BST
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.root.to_vec()
    }
}

impl<T: PartialOrd> Tree<T> {
    /// Whether the whole tree satisfies the BST property
    #[must_use]
    pub fn is_bst(&self) -> bool {
        self.root.is_bst(None, None)
    }

    /// Insert a value as a new leaf
    pub fn insert(&mut self, value: T) {
        self.root.insert(value);
        self.num_elements += 1;
    }
}

/// Chains built from sorted input are as deep as they are long; take them apart
/// without recursing
impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        let mut pending = vec![std::mem::take(&mut self.root)];
        while let Some(node) = pending.pop() {
            if let TreeNode::Branch { left, right, .. } = node {
                pending.push(*left);
                pending.push(*right);
            }
        }
    }
}

impl<T: PartialOrd + Clone> Tree<T> {
    /// Convert into a [`BinarySearchTree`], rebuilding it when out of order
    #[must_use]
    pub fn to_bst(&self) -> BinarySearchTree<T> {
        BinarySearchTree::new(self.root.clone())
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

/// A binary tree that always satisfies the BST property
#[derive(Debug, Clone, PartialEq)]
pub struct BinarySearchTree<T> {
    tree: Tree<T>,
}

impl<T: PartialOrd + Clone> BinarySearchTree<T> {
    /// Build from a root, re-inserting every value in order if the root is not a BST
    #[must_use]
    pub fn new(root: TreeNode<T>) -> Self {
        let mut tree = Tree::new(root);
        if !tree.is_bst() {
            let values = tree.to_vec();
            tree = Tree::new(TreeNode::bud());
            for value in values {
                tree.insert(value);
            }
        }
        debug_assert!(tree.is_bst());
        Self { tree }
    }
}

impl<T: PartialOrd> BinarySearchTree<T> {
    /// An empty search tree
    #[must_use]
    pub fn empty() -> Self {
        Self {
            tree: Tree::new(TreeNode::bud()),
        }
    }

    /// Insert a value, preserving the BST property
    pub fn insert(&mut self, value: T) {
        self.tree.insert(value);
    }

    /// Whether `value` is stored in the tree
    ///
    /// Follows a single root-to-leaf path.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        let mut current = &self.tree.root;
        loop {
            match current {
                TreeNode::Leaf(held) => return held.as_ref() == Some(value),
                TreeNode::Branch {
                    value: here,
                    left,
                    right,
                } => {
                    if here == value {
                        return true;
                    }
                    current = if here < value { &**right } else { &**left };
                }
            }
        }
    }
}

impl<T> BinarySearchTree<T> {
    /// Number of values in the tree
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether the tree holds no values
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Longest root-to-leaf path, counted in values
    #[must_use]
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Sorted values
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.tree.to_vec()
    }

    /// Borrow as a plain tree
    #[must_use]
    pub const fn as_tree(&self) -> &Tree<T> {
        &self.tree
    }

    /// Give up the ordering guarantee
    #[must_use]
    pub fn into_tree(self) -> Tree<T> {
        self.tree
    }
}

impl<T: PartialOrd> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bst = Self::empty();
        for value in iter {
            bst.insert(value);
        }
        bst
    }
}

impl<T: fmt::Display> fmt::Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tree)
    }
}
