//! The tree itself. A [`Tree`] owns an optional root [`Node`] and every
//! `Node` exclusively owns its children, so replacing a subtree drops it.
//!
//! # Examples
//!
//! ```
//! use rebuild_bst::{Error, Tree};
//!
//! let mut tree = Tree::new(vec![1, 2, 3, 4, 5, 6, 7]);
//!
//! // Values can only be stored once.
//! assert_eq!(tree.insert(4), Err(Error::DuplicateValue(4)));
//!
//! // Deleting a value hands it back.
//! assert_eq!(tree.delete(&4), Some(4));
//! assert!(tree.find(&4).is_none());
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 2, 3, 5, 6, 7]);
//!
//! // Deleting something that isn't there does nothing.
//! assert_eq!(tree.delete(&42), None);
//! assert_eq!(tree.len(), 6);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::mem;

use tracing::{debug, trace};

use crate::error::Error;
use crate::traversal::{InOrder, IntoLevelOrder, LevelOrder, Order, PostOrder, PreOrder};

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree holding each value at most once. It is balanced when
/// built with [`Tree::new`] or [`Tree::rebalance`] but mutations are free to
/// skew it.
#[derive(Clone)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<T> Drop for Tree<T> {
    // One box at a time, not one stack frame per level.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

impl<T> Tree<T> {
    /// Builds a balanced tree from the given values. Duplicates are dropped
    /// and the values are sorted before the middle value of each range is
    /// picked as the root of that range.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::new(vec![5, 1, 4, 2, 3, 3]);
    ///
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(3));
    /// assert_eq!(tree.len(), 5);
    /// assert!(Tree::<i32>::new(vec![]).is_empty());
    /// ```
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();

        let len = values.len();
        trace!(len, "building tree");
        Self {
            root: Node::build(values),
            len,
        }
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Inserts the value as a new leaf. The new leaf goes wherever the search
    /// for the value ends, so inserting never reshapes the rest of the tree
    /// and may leave it unbalanced. Inserting into an empty tree makes the
    /// value the root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateValue`] with the value if it is already in
    /// the tree. The tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::{Error, Tree};
    ///
    /// let mut tree = Tree::default();
    ///
    /// tree.insert(1).unwrap();
    /// assert!(tree.contains(&1));
    ///
    /// assert_eq!(tree.insert(1), Err(Error::DuplicateValue(1)));
    /// ```
    pub fn insert(&mut self, value: T) -> Result<(), Error<T>>
    where
        T: Ord,
    {
        Node::insert(&mut self.root, value)?;
        self.len += 1;
        Ok(())
    }

    /// Deletes the value from the tree and returns it. If the tree does not
    /// contain the value nothing happens and `None` is returned.
    ///
    /// A node with two children takes the smallest value of its right
    /// subtree, which is removed from down there instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let mut tree = Tree::new(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.delete(&2), Some(2));
    /// assert_eq!(tree.delete(&2), None);
    /// assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), [3, 1]);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let (root, deleted) = Node::delete(self.root.take(), value);
        self.root = root;

        if deleted.is_some() {
            self.len -= 1;
        }
        deleted
    }

    /// Finds the node holding the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::new(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&1).map(|n| *n.value()), Some(1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.root().and_then(|root| root.find(value))
    }

    /// Whether the tree holds the given value.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        self.root().map(|root| root.find_min().value())
    }

    /// Number of edges on the longest path from the root down to a leaf. A
    /// tree with just a root has a depth of 0 and an empty tree a depth of -1.
    pub fn depth(&self) -> isize {
        depth_of(self.root())
    }

    /// Whether the depths of the root's two subtrees differ by at most one.
    /// An empty tree is balanced.
    ///
    /// **Note** This only looks at the root. Subtrees further down can be
    /// badly skewed as long as the two sides of the root have similar depths.
    /// Use [`Node::is_balanced`] to check any other node.
    pub fn is_balanced(&self) -> bool {
        self.root().is_none_or(Node::is_balanced)
    }

    /// Rebuilds the tree into a balanced shape. Every value is collected in
    /// level order and the tree is built again from them as in [`Tree::new`],
    /// dropping every old node.
    pub fn rebalance(&mut self)
    where
        T: Ord,
    {
        let depth_before = self.depth();
        let values: Vec<T> = mem::take(self).into_level_order().collect();
        *self = Self::new(values);

        debug!(
            len = self.len,
            depth_before,
            depth_after = self.depth(),
            "rebalanced tree"
        );
    }

    /// Visits every value in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::{Order, Tree};
    ///
    /// let tree = Tree::new(vec![1, 2, 3]);
    /// let mut visited = Vec::new();
    ///
    /// tree.traverse(Order::PostOrder, |value| visited.push(*value));
    /// assert_eq!(visited, [1, 3, 2]);
    /// ```
    pub fn traverse<F>(&self, order: Order, visit: F)
    where
        F: FnMut(&T),
    {
        match order {
            Order::LevelOrder => self.level_order().for_each(visit),
            Order::InOrder => self.in_order().for_each(visit),
            Order::PreOrder => self.pre_order().for_each(visit),
            Order::PostOrder => self.post_order().for_each(visit),
        }
    }

    /// Iterates breadth first, each level from left to right.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root())
    }

    /// Iterates the values in ascending order.
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self.root())
    }

    /// Iterates each node before its left and then its right subtree.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root())
    }

    /// Iterates each node after its left and then its right subtree.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root())
    }

    /// Same as [`Tree::in_order`].
    pub fn iter(&self) -> InOrder<'_, T> {
        self.in_order()
    }

    /// Consumes the tree yielding its values breadth first.
    pub fn into_level_order(mut self) -> IntoLevelOrder<T> {
        IntoLevelOrder::new(self.root.take())
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Inserts each value one after the other. Values already in the tree are
/// skipped.
impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if self.insert(value).is_err() {
                trace!("skipped duplicate value while extending");
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

/// A `Node` holds a value and owns up to two children.
#[derive(Clone)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// Builds a balanced subtree out of sorted, deduplicated values.
    fn build(mut values: Vec<T>) -> Link<T> {
        if values.is_empty() {
            return None;
        }

        // Lower middle on even lengths.
        let mid = values.len() / 2;
        let right = values.split_off(mid + 1);
        let value = values.pop()?;

        Some(Box::new(Self {
            value,
            left: Self::build(values),
            right: Self::build(right),
        }))
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Walks down from `link` to the empty slot the value belongs in and
    /// puts a new leaf there.
    fn insert(link: &mut Link<T>, value: T) -> Result<(), Error<T>>
    where
        T: Ord,
    {
        let mut slot = link;
        while let Some(node) = slot {
            slot = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    trace!("rejected duplicate value");
                    return Err(Error::DuplicateValue(value));
                }
                Ordering::Greater => &mut node.right,
            };
        }

        *slot = Some(Self::new_boxed(value));
        Ok(())
    }

    /// Deletes the value from the subtree rooted at `link` and returns the
    /// new root of that subtree, which the caller puts back where `link` came
    /// from, along with the deleted value.
    fn delete(mut link: Link<T>, value: &T) -> (Link<T>, Option<T>)
    where
        T: Ord,
    {
        let deleted = Self::delete_in_place(&mut link, value);
        (link, deleted)
    }

    fn delete_in_place(link: &mut Link<T>, value: &T) -> Option<T>
    where
        T: Ord,
    {
        // Only step into a child once the comparison says to, so that `slot`
        // is still free to use when the value is found.
        let mut slot = link;
        loop {
            match slot.as_deref().map(|node| value.cmp(&node.value)) {
                None => return None,
                Some(Ordering::Equal) => break,
                Some(ord) => {
                    if let Some(node) = slot {
                        slot = match ord {
                            Ordering::Less => &mut node.left,
                            _ => &mut node.right,
                        };
                    }
                }
            }
        }

        let mut node = slot.take()?;
        let (replacement, deleted) = match (node.left.take(), node.right.take()) {
            (None, None) => (None, node.value),
            (Some(child), None) | (None, Some(child)) => (Some(child), node.value),

            // With two children the successor (the minimum of the right
            // subtree) moves up into this node.
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                let successor = Self::delete_min(&mut right)?;
                let deleted = mem::replace(&mut node.value, successor);
                node.left = Some(left);
                node.right = right;
                trace!("replaced deleted value with its successor");
                (Some(node), deleted)
            }
        };

        *slot = replacement;
        Some(deleted)
    }

    /// Removes the smallest node of the subtree at `link`, leaving its right
    /// child in its place, and returns its value.
    fn delete_min(link: &mut Link<T>) -> Option<T> {
        let mut slot = link;
        while slot.as_ref()?.left.is_some() {
            if let Some(node) = slot {
                slot = &mut node.left;
            }
        }

        let Node { value, right, .. } = *slot.take()?;
        *slot = right;
        Some(value)
    }

    /// The node holding the smallest value of this subtree, reached by
    /// following left children until there are none.
    pub fn find_min(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// Finds the node holding the given value in this subtree.
    pub fn find(&self, value: &T) -> Option<&Self>
    where
        T: Ord,
    {
        let mut node = self;
        loop {
            node = match value.cmp(&node.value) {
                Ordering::Less => node.left()?,
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right()?,
            };
        }
    }

    /// Number of edges on the longest path from this node down to a leaf.
    pub fn depth(&self) -> isize {
        let mut depth = 0;
        let mut queue = VecDeque::from([(self, 0)]);

        while let Some((node, node_depth)) = queue.pop_front() {
            depth = depth.max(node_depth);
            queue.extend(node.left().map(|n| (n, node_depth + 1)));
            queue.extend(node.right().map(|n| (n, node_depth + 1)));
        }

        depth
    }

    /// Whether the depths of this node's two subtrees differ by at most one.
    /// Nodes further down are not checked.
    pub fn is_balanced(&self) -> bool {
        (depth_of(self.left()) - depth_of(self.right())).abs() <= 1
    }

    /// Iterates this subtree breadth first.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(Some(self))
    }

    /// Iterates this subtree in ascending order.
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(Some(self))
    }

    /// Iterates this subtree visiting each node before its children.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(Some(self))
    }

    /// Iterates this subtree visiting each node after its children.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(Some(self))
    }
}

/// Depth of a possibly empty subtree. Empty subtrees are -1 deep so that a
/// leaf is 0 deep.
fn depth_of<T>(node: Option<&Node<T>>) -> isize {
    node.map_or(-1, Node::depth)
}
