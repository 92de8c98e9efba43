//! Tree vertex with exclusively owned children.

/// A single vertex of a binary search tree.
///
/// Children are owned via `Box`; an absent child is `None`. The fields
/// stay crate-private so callers cannot rewrite `data` through a node
/// handle and break the ordering invariant; read access goes through
/// the accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub(crate) data: T,
    pub(crate) left: Option<Box<Node<T>>>,
    pub(crate) right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub(crate) fn new(data: T) -> Self {
        Node {
            data,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Left child, `None` when absent.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// Right child, `None` when absent.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// True when the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Edge count of the longest downward path to a leaf.
    ///
    /// A leaf has height 0; an absent child counts as -1, so the
    /// convention composes with [`crate::Tree::height`] returning -1
    /// for the empty tree.
    pub fn height(&self) -> i32 {
        1 + i32::max(
            self.left.as_deref().map_or(-1, Node::height),
            self.right.as_deref().map_or(-1, Node::height),
        )
    }

    /// AVL balance check: the children's heights differ by at most 1,
    /// and both subtrees are themselves balanced. Absent subtrees are
    /// vacuously balanced.
    ///
    /// Heights are recomputed per node rather than cached; fine for the
    /// tree sizes this crate targets.
    pub fn is_balanced(&self) -> bool {
        let left_height = self.left.as_deref().map_or(-1, Node::height);
        let right_height = self.right.as_deref().map_or(-1, Node::height);
        (left_height - right_height).abs() <= 1
            && self.left.as_deref().map_or(true, Node::is_balanced)
            && self.right.as_deref().map_or(true, Node::is_balanced)
    }

    /// Leftmost node of this subtree (the smallest value).
    pub fn min(&self) -> &Node<T> {
        let mut current = self;
        while let Some(ref left) = current.left {
            current = left;
        }
        current
    }

    /// Rightmost node of this subtree (the largest value).
    pub fn max(&self) -> &Node<T> {
        let mut current = self;
        while let Some(ref right) = current.right {
            current = right;
        }
        current
    }
}
