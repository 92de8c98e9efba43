//! Balanced-by-construction binary search tree.
//!
//! [`Tree::from_values`] and [`Tree::rebalance`] produce a
//! height-balanced shape; `insert`/`remove` keep the ordering invariant
//! but deliberately do not rebalance, so repeated mutation can degrade
//! the shape until the caller invokes `rebalance` again. Callers observe
//! the state with [`Tree::is_balanced`].

use std::cmp::Ordering;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::node::Node;

/// Binary search tree over a set of unique ordered values.
///
/// Every node's left subtree holds strictly smaller values and its right
/// subtree strictly larger ones; duplicates never enter the tree. The
/// node graph is owned exclusively by the tree, no sharing and no
/// parent pointers.
///
/// Structural equality (`==`) compares shape as well as values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<T> {
    pub(crate) root: Option<Box<Node<T>>>,
    pub(crate) len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Tree { root: None, len: 0 }
    }

    /// Number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops all values.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Root node, `None` for the empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Height of the tree: edges on the longest root-to-leaf path.
    /// The empty tree has height -1, a single node height 0.
    pub fn height(&self) -> i32 {
        self.root.as_deref().map_or(-1, Node::height)
    }

    /// True when every node's child subtrees differ in height by at
    /// most 1. The empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        self.root.as_deref().map_or(true, Node::is_balanced)
    }

    /// Consumes `len` items from an ascending iterator into a balanced
    /// subtree. The split point is `len / 2`, the same upper-middle
    /// index an explicit slice bisection would pick: everything before
    /// the midpoint becomes the left subtree, the midpoint the root,
    /// the rest the right subtree.
    fn build_balanced<I>(values: &mut I, len: usize) -> Option<Box<Node<T>>>
    where
        I: Iterator<Item = T>,
    {
        if len == 0 {
            return None;
        }
        let mid = len / 2;
        let left = Self::build_balanced(values, mid);
        let data = values.next().expect("iterator holds `len` more items");
        let right = Self::build_balanced(values, len - mid - 1);
        Some(Box::new(Node { data, left, right }))
    }

    /// Moves all values out of a subtree in ascending order.
    pub(crate) fn drain_inorder(node: Option<Box<Node<T>>>, values: &mut Vec<T>) {
        if let Some(n) = node {
            Self::drain_inorder(n.left, values);
            values.push(n.data);
            Self::drain_inorder(n.right, values);
        }
    }
}

impl<T: Ord> Tree<T> {
    /// Builds a balanced tree from an arbitrary collection.
    ///
    /// The input is sorted ascending and deduplicated, then bisected
    /// recursively around the `len / 2` midpoint. An empty input yields
    /// the empty tree. The resulting shape is deterministic for a given
    /// value set.
    #[instrument(level = "debug", skip_all)]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let sorted: Vec<T> = values.into_iter().sorted().dedup().collect();
        let len = sorted.len();
        let root = Self::build_balanced(&mut sorted.into_iter(), len);
        debug!(len, "tree built");
        Tree { root, len }
    }

    /// Inserts `value`, keeping the ordering invariant but not the
    /// balance. Returns `true` if the value was added, `false` if it
    /// was already present (the tree holds a set, duplicates are
    /// rejected).
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, value: T) -> bool {
        let mut inserted = false;
        self.root = Self::insert_node(self.root.take(), value, &mut inserted);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Recursive descent insert; returns the possibly new subtree root
    /// so the caller reattaches it into the parent slot.
    fn insert_node(
        node: Option<Box<Node<T>>>,
        value: T,
        inserted: &mut bool,
    ) -> Option<Box<Node<T>>> {
        match node {
            None => {
                *inserted = true;
                Some(Box::new(Node::new(value)))
            }
            Some(mut n) => {
                match value.cmp(&n.data) {
                    Ordering::Less => n.left = Self::insert_node(n.left.take(), value, inserted),
                    Ordering::Greater => {
                        n.right = Self::insert_node(n.right.take(), value, inserted)
                    }
                    Ordering::Equal => {}
                }
                Some(n)
            }
        }
    }

    /// Removes `value` from the tree. Returns `false` when the value
    /// was not present; the tree is untouched in that case.
    ///
    /// A node with two children is replaced by its in-order successor,
    /// the minimum of its right subtree, which is detached from its old
    /// position in the same pass.
    #[instrument(level = "trace", skip_all)]
    pub fn remove(&mut self, value: &T) -> bool {
        let mut removed = false;
        self.root = Self::remove_node(self.root.take(), value, &mut removed);
        if removed {
            self.len -= 1;
        }
        removed
    }

    fn remove_node(
        node: Option<Box<Node<T>>>,
        value: &T,
        removed: &mut bool,
    ) -> Option<Box<Node<T>>> {
        match node {
            None => None,
            Some(mut n) => match value.cmp(&n.data) {
                Ordering::Less => {
                    n.left = Self::remove_node(n.left.take(), value, removed);
                    Some(n)
                }
                Ordering::Greater => {
                    n.right = Self::remove_node(n.right.take(), value, removed);
                    Some(n)
                }
                Ordering::Equal => {
                    *removed = true;
                    match (n.left.take(), n.right.take()) {
                        (None, None) => None,
                        (Some(left), None) => Some(left),
                        (None, Some(right)) => Some(right),
                        (Some(left), Some(right)) => {
                            let (right, successor) = Self::detach_min(right);
                            Some(Box::new(Node {
                                data: successor,
                                left: Some(left),
                                right,
                            }))
                        }
                    }
                }
            },
        }
    }

    /// Detaches the minimum node of a subtree, returning the remaining
    /// subtree and the detached value.
    fn detach_min(mut node: Box<Node<T>>) -> (Option<Box<Node<T>>>, T) {
        match node.left.take() {
            None => (node.right.take(), node.data),
            Some(left) => {
                let (new_left, min) = Self::detach_min(left);
                node.left = new_left;
                (Some(node), min)
            }
        }
    }

    /// Looks up the node holding `value` by comparison-directed
    /// descent, O(height). `None` when the value is absent.
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match value.cmp(&node.data) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return Some(node),
            }
        }
        None
    }

    /// True when `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        self.root.as_deref().map(|n| n.min().data())
    }

    /// Largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        self.root.as_deref().map(|n| n.max().data())
    }

    /// Height of the subtree rooted at the node holding `value`;
    /// -1 when the value is absent.
    pub fn height_of(&self, value: &T) -> i32 {
        self.find(value).map_or(-1, Node::height)
    }

    /// Edge count from the root down to the node holding `target`;
    /// -1 when the target is absent.
    pub fn depth(&self, target: &T) -> i32 {
        self.root
            .as_deref()
            .map_or(-1, |root| Self::depth_below(root, target))
    }

    /// Like [`Tree::depth`], but measured from the node holding `from`.
    /// -1 when either node is absent or `target` does not live in
    /// `from`'s subtree.
    pub fn depth_from(&self, from: &T, target: &T) -> i32 {
        self.find(from)
            .map_or(-1, |node| Self::depth_below(node, target))
    }

    fn depth_below(node: &Node<T>, target: &T) -> i32 {
        let mut edges = 0;
        let mut current = node;
        loop {
            match target.cmp(&current.data) {
                Ordering::Equal => return edges,
                Ordering::Less => match current.left.as_deref() {
                    Some(left) => current = left,
                    None => return -1,
                },
                Ordering::Greater => match current.right.as_deref() {
                    Some(right) => current = right,
                    None => return -1,
                },
            }
            edges += 1;
        }
    }

    /// Rebuilds the tree from its in-order value sequence, discarding
    /// the old node graph wholesale.
    ///
    /// The in-order drain of a BST is already ascending and free of
    /// duplicates, so the bisection runs on it directly. Shape is
    /// deterministic for the value set, which makes the operation
    /// idempotent: a second call reproduces the identical tree.
    #[instrument(level = "debug", skip_all)]
    pub fn rebalance(&mut self) {
        let mut values = Vec::with_capacity(self.len);
        Self::drain_inorder(self.root.take(), &mut values);
        let len = values.len();
        self.root = Self::build_balanced(&mut values.into_iter(), len);
        self.len = len;
        debug!(len, height = self.height(), "tree rebalanced");
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}
