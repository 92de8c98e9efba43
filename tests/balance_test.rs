//! Tests for height, depth, balance checking, and rebalancing

use rstest::rstest;

use rsbst::Tree;

// ============================================================
// Height Tests
// ============================================================

#[rstest]
#[case(vec![], -1)]
#[case(vec![5], 0)]
#[case(vec![1, 2], 1)]
#[case((1..=7).collect::<Vec<i32>>(), 2)]
#[case((1..=8).collect::<Vec<i32>>(), 3)]
#[case((1..=15).collect::<Vec<i32>>(), 3)]
#[case((1..=16).collect::<Vec<i32>>(), 4)]
fn given_value_sets_when_building_then_height_is_floor_log2(
    #[case] values: Vec<i32>,
    #[case] expected: i32,
) {
    let tree = Tree::from_values(values);
    assert_eq!(tree.height(), expected);
}

#[test]
fn given_subtree_values_when_measuring_height_of_then_matches_position() {
    let tree = Tree::from_values(1..=7);
    assert_eq!(tree.height_of(&4), 2, "root carries the full height");
    assert_eq!(tree.height_of(&6), 1);
    assert_eq!(tree.height_of(&3), 0, "leaves have height 0");
    assert_eq!(tree.height_of(&42), -1, "absent values report -1");
}

// ============================================================
// Depth Tests
// ============================================================

#[test]
fn given_bisected_seven_tree_when_measuring_depth_then_levels_match() {
    let tree = Tree::from_values(1..=7);
    assert_eq!(tree.depth(&4), 0);
    assert_eq!(tree.depth(&2), 1);
    assert_eq!(tree.depth(&6), 1);
    assert_eq!(tree.depth(&1), 2);
    assert_eq!(tree.depth(&7), 2);
    assert_eq!(tree.depth(&9), -1, "absent values report -1");
}

#[test]
fn given_empty_tree_when_measuring_depth_then_minus_one() {
    let tree: Tree<i32> = Tree::new();
    assert_eq!(tree.depth(&1), -1);
}

#[test]
fn given_inner_start_node_when_measuring_relative_depth_then_counts_from_there() {
    let tree = Tree::from_values(1..=7);
    assert_eq!(tree.depth_from(&2, &2), 0);
    assert_eq!(tree.depth_from(&2, &3), 1);
    assert_eq!(tree.depth_from(&6, &7), 1);
}

#[test]
fn given_target_outside_subtree_when_measuring_relative_depth_then_minus_one() {
    let tree = Tree::from_values(1..=7);
    // 7 lives under 6, not under 2; the descent from 2 dead-ends
    assert_eq!(tree.depth_from(&2, &7), -1);
    assert_eq!(tree.depth_from(&9, &1), -1, "absent start reports -1");
}

// ============================================================
// Balance Tests
// ============================================================

#[rstest]
#[case(1)]
#[case(2)]
#[case(10)]
#[case(33)]
#[case(100)]
fn given_fresh_tree_of_any_size_when_checking_then_balanced(#[case] size: i32) {
    let tree = Tree::from_values(1..=size);
    assert!(tree.is_balanced(), "fresh tree of {} values", size);
}

#[test]
fn given_empty_tree_when_checking_balance_then_vacuously_balanced() {
    let tree: Tree<i32> = Tree::new();
    assert!(tree.is_balanced());
}

#[test]
fn given_lopsided_but_even_depth_tree_when_checking_then_inner_imbalance_detected() {
    // 50 is balanced at the root (both sides height 2) but its left
    // child 20 carries a grandchild chain, unbalanced locally
    let mut tree = Tree::from_values([50]);
    for value in [20, 10, 5, 60, 70, 80] {
        tree.insert(value);
    }
    assert!(!tree.is_balanced());
}

// ============================================================
// Rebalance Tests
// ============================================================

#[test]
fn given_degraded_chain_when_rebalancing_then_height_collapses() {
    let mut tree = Tree::from_values([10]);
    for value in [20, 30, 40, 50] {
        tree.insert(value);
    }
    assert!(!tree.is_balanced());
    assert_eq!(tree.height(), 4);

    tree.rebalance();

    assert!(tree.is_balanced());
    assert_eq!(tree.height(), 2);
    let inorder: Vec<i32> = tree.iter().copied().collect();
    assert_eq!(inorder, vec![10, 20, 30, 40, 50]);
}

#[test]
fn given_rebalanced_tree_when_rebalancing_again_then_shape_is_identical() {
    let mut tree = Tree::from_values([3, 1, 4, 1, 5, 9, 2, 6]);
    tree.rebalance();
    let first = tree.clone();

    tree.rebalance();

    // Shape equality, not just content: the rebuild is deterministic
    assert_eq!(tree, first);
}

#[test]
fn given_mutated_tree_when_rebalancing_then_same_shape_as_fresh_build() {
    let mut tree = Tree::from_values([2, 4, 6]);
    for value in [1, 3, 5, 7] {
        tree.insert(value);
    }

    tree.rebalance();

    assert_eq!(tree, Tree::from_values(1..=7));
}

#[test]
fn given_removals_when_rebalancing_then_remaining_values_form_balanced_tree() {
    let mut tree = Tree::from_values(1..=15);
    tree.remove(&8);
    tree.remove(&1);
    tree.remove(&15);

    tree.rebalance();

    assert!(tree.is_balanced());
    assert_eq!(tree.len(), 12);
    let inorder: Vec<i32> = tree.iter().copied().collect();
    assert_eq!(inorder, vec![2, 3, 4, 5, 6, 7, 9, 10, 11, 12, 13, 14]);
}

#[test]
fn given_empty_tree_when_rebalancing_then_still_empty() {
    let mut tree: Tree<i32> = Tree::new();
    tree.rebalance();
    assert!(tree.is_empty());
    assert_eq!(tree.height(), -1);
}
