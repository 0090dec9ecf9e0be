//! This crate exposes a Binary Search Tree (BST) that is kept balanced by
//! rebuilding it from scratch on demand rather than by rotating nodes on
//! every mutation.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that these comparisons are strict, so a value is stored at most once.
//!
//! Searching takes `O(depth)` where `depth` is the longest path from the root
//! `Node` to a leaf `Node`. A [`Tree`] built from a collection of values is
//! balanced by construction: the sorted values are split around their middle
//! element, which becomes the root, and each half is built the same way.
//! Inserting and deleting do not preserve that shape. Once the caller notices
//! the tree has drifted (see [`Tree::is_balanced`]) it can call
//! [`Tree::rebalance`] to snapshot every value and rebuild the whole tree.
//!
//! # Examples
//!
//! ```
//! use rebuild_bst::Tree;
//!
//! let mut tree = Tree::new(vec![5, 1, 4, 2, 3]);
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
//! assert_eq!(tree.depth(), 2);
//!
//! // Walking off to the right one value at a time skews the tree.
//! for value in 6..10 {
//!     tree.insert(value).unwrap();
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.depth(), 3);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod traversal;
pub mod tree;

#[cfg(test)]
mod test;

pub use error::Error;
pub use traversal::Order;
pub use tree::{Node, Tree};
