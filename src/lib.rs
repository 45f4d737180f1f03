//! An unbalanced Binary Search Tree (BST) over integer keys, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored keys. BSTs are typically defined recursively
//! using the notion of a [`Node`]. A `Node` stores a key and will sometimes
//! have child `Node`s. The invariants of this BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than or equal to its own key. Duplicates are kept, not
//!    overwritten, and always go right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is the number of
//! `Node`s on the longest path from the root `Node` to a leaf `Node`). This
//! tree does nothing to keep its height down, so inserting keys in sorted
//! order produces a chain with a height equal to the number of keys. BSTs
//! naturally support sorted iteration by visiting the left subtree, then the
//! subtree root, then the right subtree; see [`traversal`].
//!
//! # Examples
//!
//! ```
//! use bintree::{count, BinaryTree, Order};
//! use bintree::traversal::by_posorder;
//!
//! let mut tree = BinaryTree::new();
//! for key in vec![1, 2, 3, 4, 5] {
//!     tree.insert(key);
//! }
//!
//! // Sorted input, so the tree is a chain.
//! assert_eq!(tree.height(), 5);
//! assert_eq!(count(tree.root(), by_posorder), 5);
//!
//! let mut out: Vec<u8> = Vec::new();
//! tree.write(Order::Pre, &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "1\n2\n3\n4\n5\n");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod node;
pub mod traversal;
pub mod tree;

pub use error::{ParseOrderError, Result, TreeError};
pub use node::{Link, Node};
pub use traversal::{count, inorder, postorder, preorder, Order, Strategy};
pub use tree::{height, insert, search, BinaryTree};
