//! Balanced binary search trees with traversals, rebalancing, and
//! terminal rendering.
//!
//! The core type is [`Tree`]: a set-like binary search tree that is
//! built balanced from any collection of values and can be rebalanced
//! on demand after mutation. Traversals come in collecting, visitor,
//! and iterator forms. The `cli` module wraps the library in a small
//! command line tool.

pub mod cli;
pub mod config;
pub mod demo;
pub mod display;
pub mod exitcode;
pub mod node;
pub mod traversal;
pub mod tree;
pub mod util;

pub use display::Diagram;
pub use node::Node;
pub use traversal::Iter;
pub use tree::Tree;
