//! Walking a tree in preorder, inorder, or postorder, either to display its keys or to count its
//! nodes.
//!
//! Display functions write one decimal key per line. The `write_*` forms take any
//! [`Write`] sink and the bare forms print to standard output. Walking an empty tree writes
//! nothing.
//!
//! # Examples
//!
//! ```
//! use bintree::node::{node, tree};
//! use bintree::traversal::{by_inorder, by_posorder, by_preorder, count, write_inorder};
//! use bintree::insert;
//!
//! let mut root = tree(2);
//! root = insert(Some(root), node(3));
//! root = insert(Some(root), node(1));
//!
//! let mut out: Vec<u8> = Vec::new();
//! write_inorder(Some(&root), &mut out).unwrap();
//! assert_eq!(out, b"1\n2\n3\n");
//!
//! // The order doesn't change the count.
//! assert_eq!(count(Some(&root), by_preorder), 3);
//! assert_eq!(count(Some(&root), by_inorder), 3);
//! assert_eq!(count(Some(&root), by_posorder), 3);
//! ```

use std::convert::Infallible;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use tracing::instrument;

use crate::error::{ParseOrderError, Result};
use crate::node::Node;

/// A node-counting function, selected by the caller to decide the order [`count`] walks in.
pub type Strategy = fn(Option<&Node>) -> usize;

/// Counts the nodes under `root` with the given strategy.
pub fn count(root: Option<&Node>, strategy: Strategy) -> usize {
    strategy(root)
}

/// Counts a node before its subtrees.
///
/// The `by_*` counters recurse once per level; for very deep trees count with
/// [`Order::visit`] instead.
pub fn by_preorder(root: Option<&Node>) -> usize {
    match root {
        None => 0,
        Some(n) => 1 + by_preorder(n.left()) + by_preorder(n.right()),
    }
}

/// Counts a node between its left and right subtrees.
pub fn by_inorder(root: Option<&Node>) -> usize {
    match root {
        None => 0,
        Some(n) => by_inorder(n.left()) + 1 + by_inorder(n.right()),
    }
}

/// Counts a node after both of its subtrees.
pub fn by_posorder(root: Option<&Node>) -> usize {
    match root {
        None => 0,
        Some(n) => by_posorder(n.left()) + by_posorder(n.right()) + 1,
    }
}

/// The order nodes are visited in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    Pre,
    /// Left subtree, then node, then right subtree. Yields keys in non-decreasing order.
    In,
    /// Left subtree, then right subtree, then node.
    Post,
}

impl Order {
    /// All orders, in the order they're usually listed.
    pub const ALL: [Order; 3] = [Order::Pre, Order::In, Order::Post];

    /// Calls `f` on every node under `root` in this order.
    pub fn visit<'a, F>(self, root: Option<&'a Node>, f: &mut F)
    where
        F: FnMut(&'a Node),
    {
        let walked: std::result::Result<(), Infallible> = self.walk(root, |n| {
            f(n);
            Ok(())
        });
        match walked {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Calls `f` on every node under `root` in this order, stopping at the first error.
    ///
    /// The walk keeps its pending nodes on an explicit stack, so its depth is bounded by the heap
    /// rather than the call stack.
    fn walk<'a, E, F>(self, root: Option<&'a Node>, mut f: F) -> std::result::Result<(), E>
    where
        F: FnMut(&'a Node) -> std::result::Result<(), E>,
    {
        match self {
            Order::Pre => {
                let mut stack: Vec<&Node> = root.into_iter().collect();
                while let Some(n) = stack.pop() {
                    f(n)?;
                    stack.extend(n.right());
                    stack.extend(n.left());
                }
            }
            Order::In => {
                let mut stack: Vec<&Node> = Vec::new();
                let mut current = root;
                loop {
                    while let Some(n) = current {
                        stack.push(n);
                        current = n.left();
                    }
                    match stack.pop() {
                        Some(n) => {
                            f(n)?;
                            current = n.right();
                        }
                        None => break,
                    }
                }
            }
            Order::Post => {
                // The flag marks a node whose children have already been scheduled.
                let mut stack: Vec<(&Node, bool)> = root.into_iter().map(|n| (n, false)).collect();
                while let Some((n, expanded)) = stack.pop() {
                    if expanded {
                        f(n)?;
                    } else {
                        stack.push((n, true));
                        stack.extend(n.right().map(|r| (r, false)));
                        stack.extend(n.left().map(|l| (l, false)));
                    }
                }
            }
        }
        Ok(())
    }

    /// The keys under `root` in this order.
    pub fn keys(self, root: Option<&Node>) -> Vec<i32> {
        let mut keys = Vec::new();
        self.visit(root, &mut |n| keys.push(n.key()));
        keys
    }

    /// Writes the keys under `root` to `out` in this order, one per line. Stops walking at the
    /// first failed write.
    pub fn write<W: Write>(self, root: Option<&Node>, out: &mut W) -> Result<()> {
        self.walk(root, |n| writeln!(out, "{}", n.key()))?;
        Ok(())
    }

    /// The counting function that walks in this order.
    pub fn counter(self) -> Strategy {
        match self {
            Order::Pre => by_preorder,
            Order::In => by_inorder,
            Order::Post => by_posorder,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Order::Pre => "preorder",
            Order::In => "inorder",
            Order::Post => "postorder",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Order {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Order::ALL
            .iter()
            .copied()
            .find(|order| order.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseOrderError(s.to_owned()))
    }
}

/// Writes the keys under `root` to `out` in preorder.
pub fn write_preorder<W: Write>(root: Option<&Node>, out: &mut W) -> Result<()> {
    Order::Pre.write(root, out)
}

/// Writes the keys under `root` to `out` in inorder, i.e. sorted.
pub fn write_inorder<W: Write>(root: Option<&Node>, out: &mut W) -> Result<()> {
    Order::In.write(root, out)
}

/// Writes the keys under `root` to `out` in postorder.
pub fn write_postorder<W: Write>(root: Option<&Node>, out: &mut W) -> Result<()> {
    Order::Post.write(root, out)
}

/// Prints the keys under `root` in preorder.
#[instrument(level = "debug", skip(root))]
pub fn preorder(root: Option<&Node>) -> Result<()> {
    write_preorder(root, &mut io::stdout().lock())
}

/// Prints the keys under `root` in inorder, i.e. sorted.
#[instrument(level = "debug", skip(root))]
pub fn inorder(root: Option<&Node>) -> Result<()> {
    write_inorder(root, &mut io::stdout().lock())
}

/// Prints the keys under `root` in postorder.
#[instrument(level = "debug", skip(root))]
pub fn postorder(root: Option<&Node>) -> Result<()> {
    write_postorder(root, &mut io::stdout().lock())
}
