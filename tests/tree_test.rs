//! Tests for tree construction, mutation, and lookup

use rsbst::Tree;
use rsbst::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

// ============================================================
// Construction Tests
// ============================================================

#[test]
fn given_one_to_seven_when_building_then_shape_is_bisected() {
    let tree = Tree::from_values(1..=7);

    // Bisection puts the upper-middle element at every root: 4 on top,
    // 2 and 6 below, leaves 1 3 5 7.
    let root = tree.root().expect("non-empty tree");
    assert_eq!(*root.data(), 4);

    let left = root.left().expect("left subtree");
    assert_eq!(*left.data(), 2);
    assert_eq!(left.left().map(|n| *n.data()), Some(1));
    assert_eq!(left.right().map(|n| *n.data()), Some(3));

    let right = root.right().expect("right subtree");
    assert_eq!(*right.data(), 6);
    assert_eq!(right.left().map(|n| *n.data()), Some(5));
    assert_eq!(right.right().map(|n| *n.data()), Some(7));
}

#[test]
fn given_reverse_sorted_input_when_building_then_inorder_is_ascending() {
    let tree = Tree::from_values((1..=100).rev());
    let inorder: Vec<i32> = tree.iter().copied().collect();
    let expected: Vec<i32> = (1..=100).collect();
    assert_eq!(inorder, expected);
    assert!(tree.is_balanced());
}

#[test]
fn given_two_element_input_when_building_then_second_becomes_root() {
    // len 2 splits at index 1, so the larger value is the root
    let tree = Tree::from_values([1, 2]);
    let root = tree.root().expect("non-empty tree");
    assert_eq!(*root.data(), 2);
    assert_eq!(root.left().map(|n| *n.data()), Some(1));
    assert!(root.right().is_none());
}

#[test]
fn given_all_equal_values_when_building_then_single_node_remains() {
    let tree = Tree::from_values([9, 9, 9, 9]);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.root().map(|n| *n.data()), Some(9));
}

#[test]
fn given_string_values_when_building_then_lexicographic_order_applies() {
    let tree = Tree::from_values(["pear", "apple", "plum", "fig"]);
    let inorder: Vec<&str> = tree.iter().copied().collect();
    assert_eq!(inorder, vec!["apple", "fig", "pear", "plum"]);
}

// ============================================================
// Insert Tests
// ============================================================

#[test]
fn given_new_smallest_value_when_inserting_then_it_becomes_leftmost_leaf() {
    let mut tree = Tree::from_values(1..=7);

    assert!(tree.insert(0));

    assert_eq!(tree.len(), 8);
    assert_eq!(tree.min(), Some(&0));
    let node = tree.find(&0).expect("0 was inserted");
    assert!(node.is_leaf());
}

#[test]
fn given_duplicate_value_when_inserting_then_tree_is_unchanged() {
    let mut tree = Tree::from_values(1..=7);
    let before = tree.clone();

    assert!(!tree.insert(4));

    assert_eq!(tree, before);
    assert_eq!(tree.len(), 7);
}

#[test]
fn given_ascending_inserts_when_growing_then_order_holds_but_balance_degrades() {
    let mut tree = Tree::from_values([10]);
    for value in [20, 30, 40, 50] {
        assert!(tree.insert(value));
    }

    let inorder: Vec<i32> = tree.iter().copied().collect();
    assert_eq!(inorder, vec![10, 20, 30, 40, 50]);
    // Every insert lands on the right edge, so the tree is a chain now
    assert_eq!(tree.height(), 4);
    assert!(!tree.is_balanced());
}

#[test]
fn given_empty_tree_when_inserting_then_value_becomes_root() {
    let mut tree = Tree::new();
    assert!(tree.insert(42));
    assert_eq!(tree.root().map(|n| *n.data()), Some(42));
    assert_eq!(tree.len(), 1);
}

// ============================================================
// Remove Tests
// ============================================================

#[test]
fn given_leaf_value_when_removing_then_parent_slot_is_cleared() {
    let mut tree = Tree::from_values(1..=7);

    assert!(tree.remove(&1));

    assert_eq!(tree.len(), 6);
    assert!(!tree.contains(&1));
    let two = tree.find(&2).expect("2 still present");
    assert!(two.left().is_none());
}

#[test]
fn given_single_child_node_when_removing_then_child_is_spliced_up() {
    // Shape: 2 has only the left child 1
    let mut tree = Tree::from_values([1, 2]);

    assert!(tree.remove(&2));

    assert_eq!(tree.root().map(|n| *n.data()), Some(1));
    assert_eq!(tree.len(), 1);
}

#[test]
fn given_two_child_root_when_removing_then_successor_takes_its_place() {
    let mut tree = Tree::from_values(1..=7);

    assert!(tree.remove(&4));

    // The in-order successor of 4 is 5, promoted from the right subtree
    assert_eq!(tree.root().map(|n| *n.data()), Some(5));
    let inorder: Vec<i32> = tree.iter().copied().collect();
    assert_eq!(inorder, vec![1, 2, 3, 5, 6, 7]);
    // 5 left its old slot under 6
    let six = tree.find(&6).expect("6 still present");
    assert!(six.left().is_none());
}

#[test]
fn given_last_value_when_removing_then_tree_becomes_empty() {
    let mut tree = Tree::from_values([42]);
    assert!(tree.remove(&42));
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), -1);
}

#[test]
fn given_every_value_when_removing_one_by_one_then_rest_stay_reachable() {
    let mut tree = Tree::from_values(1..=15);
    for value in 1..=15 {
        assert!(tree.remove(&value), "remove {}", value);
        for remaining in (value + 1)..=15 {
            assert!(tree.contains(&remaining), "{} must survive", remaining);
        }
    }
    assert!(tree.is_empty());
}

// ============================================================
// Lookup Tests
// ============================================================

#[test]
fn given_present_value_when_finding_then_subtree_handle_is_returned() {
    let tree = Tree::from_values(1..=7);
    let node = tree.find(&6).expect("6 is present");
    assert_eq!(*node.data(), 6);
    assert_eq!(node.left().map(|n| *n.data()), Some(5));
    assert_eq!(node.right().map(|n| *n.data()), Some(7));
}

#[test]
fn given_absent_value_when_finding_then_none() {
    let tree = Tree::from_values([1, 3, 5]);
    assert!(tree.find(&2).is_none());
    assert!(!tree.contains(&4));
}

#[test]
fn given_populated_tree_when_asking_extremes_then_min_and_max_match() {
    let tree = Tree::from_values([12, 7, 99, 4, 31]);
    assert_eq!(tree.min(), Some(&4));
    assert_eq!(tree.max(), Some(&99));

    let empty: Tree<i32> = Tree::new();
    assert_eq!(empty.min(), None);
    assert_eq!(empty.max(), None);
}

#[test]
fn given_cleared_tree_when_inspecting_then_it_reads_as_empty() {
    let mut tree = Tree::from_values(1..=7);
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert!(tree.root().is_none());
}
