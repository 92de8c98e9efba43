//! Tree traversals: collecting, visitor, and iterator forms.
//!
//! Each traversal order comes as two explicit operations instead of one
//! callback-optional function: `inorder()` and friends materialize the
//! value sequence, `for_each_inorder` and friends drive a visitor over
//! the nodes. On an empty tree the collectors return an empty vector
//! and the visitors are never invoked.

use std::collections::VecDeque;

use crate::node::Node;
use crate::tree::Tree;

impl<T> Tree<T> {
    /// Values in ascending order (left subtree, node, right subtree).
    pub fn inorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        self.for_each_inorder(|node| values.push(node.data()));
        values
    }

    /// Values in preorder (node, left subtree, right subtree).
    pub fn preorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        self.for_each_preorder(|node| values.push(node.data()));
        values
    }

    /// Values in postorder (left subtree, right subtree, node).
    pub fn postorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        self.for_each_postorder(|node| values.push(node.data()));
        values
    }

    /// Values level by level, left to right within each level.
    pub fn level_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        self.for_each_level_order(|node| values.push(node.data()));
        values
    }

    /// Calls `visit` on every node, in-order.
    pub fn for_each_inorder<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Node<T>),
    {
        visit_inorder(self.root(), &mut visit);
    }

    /// Calls `visit` on every node, preorder.
    pub fn for_each_preorder<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Node<T>),
    {
        visit_preorder(self.root(), &mut visit);
    }

    /// Calls `visit` on every node, postorder.
    pub fn for_each_postorder<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Node<T>),
    {
        visit_postorder(self.root(), &mut visit);
    }

    /// Calls `visit` on every node in breadth-first order: dequeue a
    /// node, visit it, enqueue its children left before right.
    pub fn for_each_level_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Node<T>),
    {
        let mut queue: VecDeque<&Node<T>> = VecDeque::new();
        if let Some(root) = self.root() {
            queue.push_back(root);
        }
        while let Some(node) = queue.pop_front() {
            visit(node);
            if let Some(left) = node.left() {
                queue.push_back(left);
            }
            if let Some(right) = node.right() {
                queue.push_back(right);
            }
        }
    }

    /// Borrowing in-order iterator over the values, ascending.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root())
    }
}

fn visit_inorder<'a, T, F>(node: Option<&'a Node<T>>, visit: &mut F)
where
    F: FnMut(&'a Node<T>),
{
    if let Some(n) = node {
        visit_inorder(n.left(), visit);
        visit(n);
        visit_inorder(n.right(), visit);
    }
}

fn visit_preorder<'a, T, F>(node: Option<&'a Node<T>>, visit: &mut F)
where
    F: FnMut(&'a Node<T>),
{
    if let Some(n) = node {
        visit(n);
        visit_preorder(n.left(), visit);
        visit_preorder(n.right(), visit);
    }
}

fn visit_postorder<'a, T, F>(node: Option<&'a Node<T>>, visit: &mut F)
where
    F: FnMut(&'a Node<T>),
{
    if let Some(n) = node {
        visit_postorder(n.left(), visit);
        visit_postorder(n.right(), visit);
        visit(n);
    }
}

/// Stack-based in-order iterator.
///
/// The stack holds the path to the next value; popping a node pushes
/// the left spine of its right subtree, so values come out ascending
/// without recursion.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Iter { stack: Vec::new() };
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

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.data())
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Consumes the tree, yielding its values in ascending order.
    fn into_iter(mut self) -> Self::IntoIter {
        let mut values = Vec::with_capacity(self.len());
        Tree::drain_inorder(self.root.take(), &mut values);
        values.into_iter()
    }
}
