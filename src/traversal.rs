//! Iterators over the values of a [`Tree`][crate::Tree] or of any subtree.
//!
//! Each iterator walks the nodes with its own queue or stack, so a deep
//! (unbalanced) tree doesn't grow the call stack, and every call to one of
//! the traversal methods starts a fresh walk.
//!
//! # Examples
//!
//! ```
//! use rebuild_bst::Tree;
//!
//! let tree = Tree::new(vec![1, 2, 3]);
//!
//! assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), [2, 1, 3]);
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 2, 3]);
//! assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), [2, 1, 3]);
//! assert_eq!(tree.post_order().copied().collect::<Vec<_>>(), [1, 3, 2]);
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::tree::{Link, Node};

/// The order in which [`Tree::traverse`][crate::Tree::traverse] visits
/// values. For a node with left subtree `L`, value `V` and right subtree `R`:
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Breadth first, each level from left to right.
    LevelOrder,
    /// `L`, `V`, `R`. Values come out sorted.
    InOrder,
    /// `V`, `L`, `R`.
    PreOrder,
    /// `L`, `R`, `V`.
    PostOrder,
}

/// Breadth first iterator. See [`Tree::level_order`][crate::Tree::level_order].
#[derive(Debug, Clone)]
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node.value())
    }
}

impl<T> FusedIterator for LevelOrder<'_, T> {}

/// Sorted iterator. See [`Tree::in_order`][crate::Tree::in_order].
#[derive(Debug, Clone)]
pub struct InOrder<'a, T> {
    /// Nodes whose left subtree is being (or has been) visited, innermost on
    /// top.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value())
    }
}

impl<T> FusedIterator for InOrder<'_, T> {}

/// Parent-first iterator. See [`Tree::pre_order`][crate::Tree::pre_order].
#[derive(Debug, Clone)]
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree is popped first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.value())
    }
}

impl<T> FusedIterator for PreOrder<'_, T> {}

/// Children-first iterator. See [`Tree::post_order`][crate::Tree::post_order].
#[derive(Debug, Clone)]
pub struct PostOrder<'a, T> {
    /// Each node is paired with whether its children have been pushed yet.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().map(|n| (n, false)).collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node.value());
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }
}

impl<T> FusedIterator for PostOrder<'_, T> {}

/// Owning breadth first iterator. See
/// [`Tree::into_level_order`][crate::Tree::into_level_order].
pub struct IntoLevelOrder<T> {
    queue: VecDeque<Box<Node<T>>>,
}

impl<T> IntoLevelOrder<T> {
    pub(crate) fn new(root: Link<T>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<T> Iterator for IntoLevelOrder<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        let Node { value, left, right } = *node;
        self.queue.extend(left);
        self.queue.extend(right);
        Some(value)
    }
}

impl<T> FusedIterator for IntoLevelOrder<T> {}

impl<T> Drop for IntoLevelOrder<T> {
    // Subtrees left in the queue are drained instead of dropped recursively.
    fn drop(&mut self) {
        for _ in self {}
    }
}
