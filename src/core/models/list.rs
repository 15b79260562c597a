//! Singly linked list
//!
//! A list is either empty or a node holding a value and the rest of the list:
//!
//! ```text
//! ListNode(2, ListNode(-1, ListNode(1, ListNode(3, None))))
//! ```
//!
//! displays as `2 -> -1 -> 1 -> 3 -> None`.
//!
//! The recursive operations live on [`ListNode`]; [`List`] owns the optional head so
//! the empty list is an ordinary value instead of a special case for callers.

use std::fmt;

/// One cell of a linked list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode<T> {
    /// Value stored in this cell
    pub value: T,
    /// Remainder of the list
    pub next: Option<Box<ListNode<T>>>,
}

impl<T> ListNode<T> {
    /// Create a node with no successor
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self { value, next: None }
    }

    /// Create a node in front of an existing chain
    #[must_use]
    pub fn with_next(value: T, next: Self) -> Self {
        Self {
            value,
            next: Some(Box::new(next)),
        }
    }

    /// Number of nodes from this one to the end
    #[must_use]
    pub fn length(&self) -> usize {
        self.next.as_ref().map_or(1, |next| 1 + next.length())
    }

    /// Whether `value` appears at or after this node
    #[must_use]
    pub fn member(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.value == *value || self.next.as_ref().is_some_and(|next| next.member(value))
    }

    /// Value `index` steps after this node, or `None` when the chain is shorter
    #[must_use]
    pub fn val_at(&self, index: usize) -> Option<&T> {
        if index == 0 {
            Some(&self.value)
        } else {
            self.next.as_ref().and_then(|next| next.val_at(index - 1))
        }
    }

    /// Insert `value` at `index`, shifting later values back.
    ///
    /// Past the end the value is appended.
    pub fn insert(&mut self, value: T, index: usize) {
        if index == 0 {
            let previous = std::mem::replace(&mut self.value, value);
            let rest = self.next.take();
            self.next = Some(Box::new(Self {
                value: previous,
                next: rest,
            }));
        } else if let Some(next) = self.next.as_mut() {
            next.insert(value, index - 1);
        } else {
            self.next = Some(Box::new(Self::new(value)));
        }
    }
}

/// A singly linked list that may be empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List<T> {
    head: Option<Box<ListNode<T>>>,
}

impl<T> List<T> {
    /// The empty list
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Wrap an existing node chain
    #[must_use]
    pub fn from_node(node: ListNode<T>) -> Self {
        Self {
            head: Some(Box::new(node)),
        }
    }

    /// First node, if any
    #[must_use]
    pub fn head(&self) -> Option<&ListNode<T>> {
        self.head.as_deref()
    }

    /// Number of elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether the list has no elements
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Whether `value` is an element of the list
    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|candidate| candidate == value)
    }

    /// Value at `index`, or `None` when out of bounds
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Insert `value` at `index`; indices past the end append
    pub fn insert(&mut self, index: usize, value: T) {
        match self.head.as_mut() {
            Some(node) => node.insert(value, index),
            None => self.head = Some(Box::new(ListNode::new(value))),
        }
    }

    /// Prepend a value
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(ListNode { value, next }));
    }

    /// Iterate over the values front to back
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlinking node by node keeps long lists from recursing once per element on drop.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Vec<T> = iter.into_iter().collect();
        let mut list = Self::new();
        for value in values.into_iter().rev() {
            list.push_front(value);
        }
        list
    }
}

impl<T: fmt::Display> fmt::Display for ListNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> ", self.value)?;
        match &self.next {
            Some(next) => write!(f, "{next}"),
            None => write!(f, "None"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{value} -> ")?;
        }
        write!(f, "None")
    }
}

/// Borrowing iterator over a [`List`]
pub struct Iter<'a, T> {
    next: Option<&'a ListNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
