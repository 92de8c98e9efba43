//! Demo driver: build a balanced tree from random values, push it out
//! of balance with larger inserts, rebalance, and record every phase.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use crate::config::DemoSettings;
use crate::tree::Tree;

/// The four traversal sequences of a tree at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversals {
    pub level_order: Vec<u64>,
    pub preorder: Vec<u64>,
    pub postorder: Vec<u64>,
    pub inorder: Vec<u64>,
}

impl Traversals {
    fn capture(tree: &Tree<u64>) -> Self {
        Self {
            level_order: tree.level_order().into_iter().copied().collect(),
            preorder: tree.preorder().into_iter().copied().collect(),
            postorder: tree.postorder().into_iter().copied().collect(),
            inorder: tree.inorder().into_iter().copied().collect(),
        }
    }
}

/// Shape summary of a tree at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub balanced: bool,
    pub height: i32,
    pub len: usize,
}

impl Snapshot {
    fn capture(tree: &Tree<u64>) -> Self {
        Self {
            balanced: tree.is_balanced(),
            height: tree.height(),
            len: tree.len(),
        }
    }
}

/// Everything a demo run produced, phase by phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    /// Random values the tree was built from (duplicates included)
    pub initial_values: Vec<u64>,
    /// Values above `max_value` inserted to unbalance the tree
    pub extra_values: Vec<u64>,
    pub after_build: Snapshot,
    pub initial_traversals: Traversals,
    pub after_insert: Snapshot,
    pub after_rebalance: Snapshot,
    pub final_traversals: Traversals,
    /// The rebalanced tree, ready for rendering
    pub final_tree: Tree<u64>,
}

/// Runs the full demo cycle: build, traverse, unbalance, rebalance,
/// traverse again.
///
/// With `seed` set the run is fully deterministic; otherwise the RNG is
/// seeded from entropy. A `count` of zero is allowed and starts the run
/// from an empty tree.
///
/// # Panics
/// Panics if `max_value` is zero; initial values are drawn from
/// `1..=max_value`.
#[instrument(level = "debug", skip_all)]
pub fn run(settings: &DemoSettings) -> DemoReport {
    assert!(settings.max_value >= 1, "max_value must be at least 1");

    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let initial_values: Vec<u64> = (0..settings.count)
        .map(|_| rng.gen_range(1..=settings.max_value))
        .collect();
    debug!(count = initial_values.len(), max_value = settings.max_value, "drew initial values");

    let mut tree = Tree::from_values(initial_values.clone());
    let after_build = Snapshot::capture(&tree);
    let initial_traversals = Traversals::capture(&tree);

    // Values strictly above max_value land on the right edge and tip
    // the tree out of balance once there are enough of them.
    let low = settings.max_value.saturating_add(1);
    let high = settings.max_value.saturating_mul(2).max(low);
    let extra_values: Vec<u64> = (0..settings.extra_count)
        .map(|_| rng.gen_range(low..=high))
        .collect();
    for value in &extra_values {
        tree.insert(*value);
    }
    let after_insert = Snapshot::capture(&tree);
    debug!(
        balanced = after_insert.balanced,
        height = after_insert.height,
        "inserted extras"
    );

    tree.rebalance();
    let after_rebalance = Snapshot::capture(&tree);
    let final_traversals = Traversals::capture(&tree);
    debug!(
        balanced = after_rebalance.balanced,
        height = after_rebalance.height,
        "rebalanced"
    );

    DemoReport {
        initial_values,
        extra_values,
        after_build,
        initial_traversals,
        after_insert,
        after_rebalance,
        final_traversals,
        final_tree: tree,
    }
}
