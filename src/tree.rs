//! Building and querying a tree.
//!
//! The free functions work on a bare root so the caller decides where it lives. [`BinaryTree`]
//! owns a root and wraps the same functions for callers that don't want to thread it by hand.
//!
//! # Examples
//!
//! ```
//! use bintree::node::{node, tree};
//! use bintree::{height, insert, search};
//!
//! let mut root = tree(5);
//! for key in [3, 8, 1] {
//!     root = insert(Some(root), node(key));
//! }
//!
//! assert_eq!(search(8, Some(&root)).map(|n| n.key()), Some(8));
//! assert!(search(100, Some(&root)).is_none());
//! assert_eq!(height(Some(&root)), 3);
//! ```

use std::fmt;
use std::io::{self, Write};
use std::iter::FromIterator;

use tracing::{debug, trace};

use crate::error::Result;
use crate::node::{self, Link, Node};
use crate::traversal::Order;

/// Inserts `new_node` into the subtree rooted at `root` and returns the root to use for that
/// subtree afterwards. An empty subtree is replaced by `new_node`; otherwise the root is
/// unchanged and handed back.
///
/// Keys strictly less than a node's key go left. Equal keys go right. The descent is a loop, so
/// a degenerate chain of any length can be grown one key at a time.
pub fn insert(root: Link, new_node: Box<Node>) -> Box<Node> {
    let mut root = match root {
        None => return new_node,
        Some(root) => root,
    };

    let mut parent: &mut Box<Node> = &mut root;
    loop {
        let slot = if new_node.key < parent.key {
            trace!(key = new_node.key, parent = parent.key, "descending left");
            &mut parent.left
        } else {
            trace!(key = new_node.key, parent = parent.key, "descending right");
            &mut parent.right
        };
        match slot {
            Some(child) => parent = child,
            None => {
                *slot = Some(new_node);
                break;
            }
        }
    }
    root
}

/// Finds the shallowest node holding `key`, or `None` if the tree doesn't contain it.
pub fn search(key: i32, root: Option<&Node>) -> Option<&Node> {
    let mut current = root;
    while let Some(n) = current {
        if key == n.key {
            return Some(n);
        }
        current = if key < n.key { n.left() } else { n.right() };
    }
    trace!(key, "key not found");
    None
}

/// The number of nodes on the longest path from `root` down to a leaf. A single node has a
/// height of 1 and an empty tree has a height of 0.
pub fn height(root: Option<&Node>) -> usize {
    let mut tallest = 0;
    let mut stack: Vec<(&Node, usize)> = root.into_iter().map(|n| (n, 1)).collect();
    while let Some((n, depth)) = stack.pop() {
        tallest = tallest.max(depth);
        stack.extend(n.left().map(|l| (l, depth + 1)));
        stack.extend(n.right().map(|r| (r, depth + 1)));
    }
    tallest
}

/// A tree that owns its root.
///
/// # Examples
///
/// ```
/// use bintree::{BinaryTree, Order};
///
/// let tree: BinaryTree = vec![4, 2, 6, 1, 3, 5, 7].into_iter().collect();
///
/// assert_eq!(tree.len(), 7);
/// assert_eq!(tree.height(), 3);
/// assert_eq!(tree.keys(Order::In), vec![1, 2, 3, 4, 5, 6, 7]);
/// assert!(tree.contains(5));
/// assert!(!tree.contains(8));
/// ```
#[derive(Default)]
pub struct BinaryTree {
    root: Link,
}

impl BinaryTree {
    /// Generates a new, empty `BinaryTree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Generates a tree holding a single root node with the given key.
    pub fn with_root(key: i32) -> Self {
        Self {
            root: Some(node::tree(key)),
        }
    }

    /// The root node, if anything has been inserted.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Whether nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Adds `key` to the tree. Inserting a key that is already present adds another node for it
    /// in the right subtree of the existing one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn insert(&mut self, key: i32) {
        debug!(key, "inserting key");
        self.root = Some(insert(self.root.take(), node::node(key)));
    }

    /// Finds the node holding `key`, if any.
    pub fn search(&self, key: i32) -> Option<&Node> {
        search(key, self.root())
    }

    /// Whether some node holds `key`.
    pub fn contains(&self, key: i32) -> bool {
        self.search(key).is_some()
    }

    /// See [`height`].
    pub fn height(&self) -> usize {
        height(self.root())
    }

    /// The number of nodes in the tree, which is also the number of keys ever inserted.
    pub fn len(&self) -> usize {
        self.count(Order::In)
    }

    /// Counts the nodes by walking the tree in the given order. Unlike [`crate::traversal::count`] this
    /// doesn't recurse, so it is safe on a chain of any depth.
    pub fn count(&self, order: Order) -> usize {
        let mut nodes = 0;
        order.visit(self.root(), &mut |_| nodes += 1);
        nodes
    }

    /// Collects the keys in the given order.
    pub fn keys(&self, order: Order) -> Vec<i32> {
        order.keys(self.root())
    }

    /// Writes the keys to `out`, one per line, in the given order.
    pub fn write<W: Write>(&self, order: Order, out: &mut W) -> Result<()> {
        order.write(self.root(), out)
    }

    /// Prints the keys to standard output, one per line, in the given order.
    pub fn print(&self, order: Order) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write(order, &mut out)
    }
}

impl fmt::Debug for BinaryTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTree")
            .field("preorder", &self.keys(Order::Pre))
            .finish()
    }
}

impl Extend<i32> for BinaryTree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl FromIterator<i32> for BinaryTree {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
