//! The building block of a tree: a key and two exclusively owned children.
//!
//! # Examples
//!
//! ```
//! use bintree::node::{node, tree};
//! use bintree::insert;
//!
//! // `tree` and `node` build the same thing; the names only say where the node is headed.
//! let root = tree(2);
//! let root = insert(Some(root), node(1));
//!
//! assert_eq!(root.key(), 2);
//! assert_eq!(root.left().map(|n| n.key()), Some(1));
//! assert!(root.right().is_none());
//! ```

use std::fmt;

/// An optional, owned child. `None` marks the bottom of a subtree.
pub type Link = Option<Box<Node>>;

/// A single element of a tree. Every key in the left subtree is strictly less than `key` and
/// every key in the right subtree is greater than or equal to it.
pub struct Node {
    pub(crate) key: i32,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    /// Allocates a detached node holding `key`, with no children.
    pub fn new(key: i32) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// The key this node is ordered by.
    pub fn key(&self) -> i32 {
        self.key
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl fmt::Debug for Node {
    // Only the child keys are shown; formatting never descends.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left().map(Node::key))
            .field("right", &self.right().map(Node::key))
            .finish()
    }
}

/// Two nodes are equal when their subtrees have the same shape and keys.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.key != b.key {
                return false;
            }
            for (x, y) in [(a.left(), b.left()), (a.right(), b.right())].iter().copied() {
                match (x, y) {
                    (Some(x), Some(y)) => pending.push((x, y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for Node {}

impl Drop for Node {
    // Children are released from an explicit stack so a degenerate chain (sorted insertion)
    // doesn't recurse once per level.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Creates the node that will become the root of a new tree.
pub fn tree(key: i32) -> Box<Node> {
    Node::new(key)
}

/// Creates a node to be inserted into an existing tree.
pub fn node(key: i32) -> Box<Node> {
    Node::new(key)
}
