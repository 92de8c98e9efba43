//! Tree rendering: a sideways connector diagram and a termtree outline.
//!
//! The diagram draws the tree rotated left: the right subtree appears
//! above its parent, the left subtree below, and the root sits at the
//! bottom-left edge. A right child hangs from `┌── `, a left child
//! (and the root) from `└── `, with `│   ` carrying ancestor lines
//! through intermediate rows. The outline is the top-down form used
//! elsewhere in the CLI, with `·` marking the absent side of a
//! single-child node so left and right stay distinguishable.

use std::fmt;

use crate::node::Node;
use crate::tree::Tree;

impl<T> Tree<T> {
    /// Borrowing view that renders the sideways diagram via [`fmt::Display`].
    pub fn diagram(&self) -> Diagram<'_, T> {
        Diagram { root: self.root() }
    }
}

impl<T: fmt::Display> Tree<T> {
    /// Top-down outline of the tree for terminal display.
    pub fn outline(&self) -> termtree::Tree<String> {
        match self.root() {
            Some(root) => outline_node(root),
            None => termtree::Tree::new("(empty tree)".to_string()),
        }
    }
}

/// Sideways rendering of a tree, produced by [`Tree::diagram`].
///
/// An empty tree renders as the empty string.
pub struct Diagram<'a, T> {
    root: Option<&'a Node<T>>,
}

impl<T: fmt::Display> fmt::Display for Diagram<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(root) => write_node(f, root, "", true),
            None => Ok(()),
        }
    }
}

fn write_node<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<T>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result {
    if let Some(right) = node.right() {
        let extended = format!("{prefix}{}", if is_left { "│   " } else { "    " });
        write_node(f, right, &extended, false)?;
    }
    writeln!(
        f,
        "{prefix}{}{}",
        if is_left { "└── " } else { "┌── " },
        node.data()
    )?;
    if let Some(left) = node.left() {
        let extended = format!("{prefix}{}", if is_left { "    " } else { "│   " });
        write_node(f, left, &extended, true)?;
    }
    Ok(())
}

fn outline_node<T: fmt::Display>(node: &Node<T>) -> termtree::Tree<String> {
    let mut out = termtree::Tree::new(node.data().to_string());
    if !node.is_leaf() {
        out.push(child_or_placeholder(node.left()));
        out.push(child_or_placeholder(node.right()));
    }
    out
}

fn child_or_placeholder<T: fmt::Display>(node: Option<&Node<T>>) -> termtree::Tree<String> {
    match node {
        Some(n) => outline_node(n),
        None => termtree::Tree::new("·".to_string()),
    }
}
