//! Unit tests for AvlTree.

use rstest::rstest;
use simple_trees::tree::{AvlNode, AvlTree, SearchTree, TraversalOrder, TreeError, TreeNode};

fn build_tree() -> AvlTree<i32, i32> {
    let mut tree = AvlTree::new();
    for key in 1..=7 {
        tree.insert(key, key).unwrap();
    }
    tree
}

fn keys(tree: &AvlTree<i32, i32>, order: TraversalOrder, reverse: bool) -> Vec<i32> {
    tree.traversal(order, reverse)
        .map(|node| *node.key())
        .collect()
}

/// Recomputes subtree heights from the structure and asserts that every
/// cached height matches and every balance factor is in {-1, 0, 1}.
/// Returns the real height of the subtree.
fn assert_balanced<K: Ord, V>(node: &AvlNode<K, V>) -> usize {
    let left_height = node.left().map_or(0, assert_balanced);
    let right_height = node.right().map_or(0, assert_balanced);

    if let Some(left) = node.left() {
        assert!(left.key() < node.key(), "left subtree key out of order");
    }
    if let Some(right) = node.right() {
        assert!(right.key() > node.key(), "right subtree key out of order");
    }

    let height = 1 + left_height.max(right_height);
    assert_eq!(node.height(), height, "cached height is stale");
    assert!(
        (-1..=1).contains(&node.balance_factor()),
        "balance factor out of range"
    );

    height
}

fn assert_tree_balanced<K: Ord, V>(tree: &AvlTree<K, V>) {
    if let Some(root) = tree.root() {
        assert_balanced(root);
    }
}

// =============================================================================
// Construction Tests
// =============================================================================

#[rstest]
fn test_new_creates_empty_tree() {
    let tree: AvlTree<i32, String> = AvlTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), 0);
    assert!(tree.root().is_none());
}

#[rstest]
fn test_single_insert_makes_a_unit_height_root() {
    let mut tree = AvlTree::new();
    tree.insert(1, "one").unwrap();
    assert_eq!(tree.height(), 1);
    assert_eq!(tree.len(), 1);
    assert_tree_balanced(&tree);
}

// =============================================================================
// Insert and Rebalancing Tests
// =============================================================================

#[rstest]
fn test_ascending_insertion_stays_balanced() {
    let tree = build_tree();
    assert_eq!(tree.len(), 7);
    assert_eq!(tree.height(), 3);
    assert_eq!(tree.root().map(|node| *node.key()), Some(4));
    assert_tree_balanced(&tree);
}

#[rstest]
fn test_descending_insertion_stays_balanced() {
    let mut tree = AvlTree::new();
    for key in (1..=7).rev() {
        tree.insert(key, key).unwrap();
    }
    assert_eq!(tree.height(), 3);
    assert_eq!(tree.root().map(|node| *node.key()), Some(4));
    assert_eq!(
        keys(&tree, TraversalOrder::InOrder, false),
        vec![1, 2, 3, 4, 5, 6, 7]
    );
    assert_tree_balanced(&tree);
}

#[rstest]
#[case::left_left([3, 2, 1])]
#[case::right_right([1, 2, 3])]
#[case::left_right([3, 1, 2])]
#[case::right_left([1, 3, 2])]
fn test_single_and_double_rotations(#[case] insertion_order: [i32; 3]) {
    let mut tree = AvlTree::new();
    for key in insertion_order {
        tree.insert(key, key).unwrap();
    }

    // All four cases settle into the same perfectly balanced shape.
    assert_eq!(keys(&tree, TraversalOrder::PreOrder, false), vec![2, 1, 3]);
    assert_eq!(tree.height(), 2);
    assert_tree_balanced(&tree);
}

#[rstest]
fn test_larger_sequential_insertion_is_perfectly_balanced() {
    let mut tree = AvlTree::new();
    for key in 1..=15 {
        tree.insert(key, key).unwrap();
    }
    assert_eq!(tree.height(), 4);
    assert_eq!(tree.root().map(|node| *node.key()), Some(8));
    assert_tree_balanced(&tree);
}

#[rstest]
fn test_insert_duplicate_key_is_rejected() {
    let mut tree = build_tree();
    let before = keys(&tree, TraversalOrder::PreOrder, false);

    assert_eq!(tree.insert(4, -4), Err(TreeError::KeyAlreadyExists));
    assert_eq!(
        tree.insert_node(AvlNode::new(1, -1)),
        Err(TreeError::KeyAlreadyExists)
    );

    // The tree, its shape and the resident values are unchanged.
    assert_eq!(tree.len(), 7);
    assert_eq!(keys(&tree, TraversalOrder::PreOrder, false), before);
    assert_eq!(tree.search(&4).map(|node| *node.value()), Some(4));
    assert_tree_balanced(&tree);
}

// =============================================================================
// Traversal Tests
// =============================================================================

#[rstest]
#[case::pre_order(TraversalOrder::PreOrder, false, vec![4, 2, 1, 3, 6, 5, 7])]
#[case::pre_order_reverse(TraversalOrder::PreOrder, true, vec![4, 6, 7, 5, 2, 3, 1])]
#[case::in_order(TraversalOrder::InOrder, false, vec![1, 2, 3, 4, 5, 6, 7])]
#[case::in_order_reverse(TraversalOrder::InOrder, true, vec![7, 6, 5, 4, 3, 2, 1])]
#[case::post_order(TraversalOrder::PostOrder, false, vec![1, 3, 2, 5, 7, 6, 4])]
#[case::post_order_reverse(TraversalOrder::PostOrder, true, vec![7, 5, 6, 3, 1, 2, 4])]
fn test_traversal_orders(
    #[case] order: TraversalOrder,
    #[case] reverse: bool,
    #[case] expected: Vec<i32>,
) {
    let tree = build_tree();
    assert_eq!(keys(&tree, order, reverse), expected);
}

#[rstest]
fn test_repeated_traversals_are_identical() {
    let tree = build_tree();
    let first = keys(&tree, TraversalOrder::InOrder, false);
    let second = keys(&tree, TraversalOrder::InOrder, false);
    assert_eq!(first, second);
}

// =============================================================================
// Search Tests
// =============================================================================

#[rstest]
fn test_search_finds_every_inserted_key() {
    let tree = build_tree();
    for key in 1..=7 {
        assert_eq!(tree.search(&key).map(|node| *node.value()), Some(key));
    }
    assert!(tree.search(&0).is_none());
    assert!(tree.search(&8).is_none());
}

#[rstest]
fn test_search_accepts_borrowed_key_forms() {
    let mut tree = AvlTree::new();
    tree.insert("alpha".to_string(), 1).unwrap();
    tree.insert("beta".to_string(), 2).unwrap();

    assert_eq!(tree.search("beta").map(|node| *node.value()), Some(2));
    assert!(!tree.contains_key("gamma"));
}

// =============================================================================
// Update Tests
// =============================================================================

#[rstest]
fn test_update_replaces_value_in_place() {
    let mut tree = build_tree();
    let shape_before = keys(&tree, TraversalOrder::PreOrder, false);

    tree.update(4, -4).unwrap();

    assert_eq!(tree.root().map(|node| *node.key()), Some(4));
    assert_eq!(tree.root().map(|node| *node.value()), Some(-4));
    assert_eq!(keys(&tree, TraversalOrder::PreOrder, false), shape_before);
    assert_tree_balanced(&tree);
}

#[rstest]
fn test_update_missing_key_fails() {
    let mut tree = build_tree();
    assert_eq!(tree.update(42, 0), Err(TreeError::KeyNotFound));
    assert_eq!(
        tree.update_node(AvlNode::new(0, 0)),
        Err(TreeError::KeyNotFound)
    );
    assert_eq!(tree.len(), 7);
}

// =============================================================================
// Remove Tests
// =============================================================================

#[rstest]
fn test_remove_leaf() {
    let mut tree = build_tree();
    assert_eq!(tree.remove(&1), Ok(1));
    assert!(tree.search(&1).is_none());
    assert_eq!(tree.len(), 6);
    assert_tree_balanced(&tree);
}

#[rstest]
fn test_remove_node_with_two_children_uses_in_order_successor() {
    let mut tree = build_tree();

    assert_eq!(tree.remove(&4), Ok(4));

    assert!(tree.search(&4).is_none());
    // The successor (5) takes over the removed node's position.
    assert_eq!(tree.root().map(|node| *node.key()), Some(5));
    assert_eq!(
        keys(&tree, TraversalOrder::InOrder, false),
        vec![1, 2, 3, 5, 6, 7]
    );
    assert_tree_balanced(&tree);
}

#[rstest]
fn test_remove_rebalances_with_a_rotation() {
    let mut tree = build_tree();

    // Empty out the left subtree; the root tips right-heavy and a left
    // rotation promotes 6.
    tree.remove(&1).unwrap();
    tree.remove(&3).unwrap();
    tree.remove(&2).unwrap();

    assert_eq!(keys(&tree, TraversalOrder::PreOrder, false), vec![6, 4, 5, 7]);
    assert_tree_balanced(&tree);
}

#[rstest]
fn test_remove_missing_key_fails_and_leaves_tree_unchanged() {
    let mut tree = build_tree();
    let before = keys(&tree, TraversalOrder::PreOrder, false);

    assert_eq!(tree.remove(&42), Err(TreeError::KeyNotFound));

    assert_eq!(tree.len(), 7);
    assert_eq!(keys(&tree, TraversalOrder::PreOrder, false), before);
    assert_tree_balanced(&tree);
}

#[rstest]
fn test_remove_every_key_empties_the_tree() {
    let mut tree = build_tree();
    for key in 1..=7 {
        assert_eq!(tree.remove(&key), Ok(key));
        assert_tree_balanced(&tree);
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
}

#[rstest]
fn test_interleaved_inserts_and_removes_stay_balanced() {
    let mut tree = AvlTree::new();
    for key in 1..=31 {
        tree.insert(key, key).unwrap();
        assert_tree_balanced(&tree);
    }
    for key in (1..=31).filter(|key| key % 2 == 0) {
        tree.remove(&key).unwrap();
        assert_tree_balanced(&tree);
    }

    let remaining: Vec<i32> = tree.keys().copied().collect();
    let expected: Vec<i32> = (1..=31).filter(|key| key % 2 == 1).collect();
    assert_eq!(remaining, expected);
}

// =============================================================================
// Min/Max and Accessor Tests
// =============================================================================

#[rstest]
fn test_min_and_max() {
    let tree = build_tree();
    assert_eq!(tree.min(), Some((&1, &1)));
    assert_eq!(tree.max(), Some((&7, &7)));

    let empty: AvlTree<i32, i32> = AvlTree::new();
    assert_eq!(empty.min(), None);
    assert_eq!(empty.max(), None);
}

#[rstest]
fn test_node_accessors_expose_cached_heights() {
    let tree = build_tree();
    let root = tree.root().unwrap();
    assert_eq!(root.height(), 3);
    assert_eq!(root.balance_factor(), 0);
    assert_eq!(root.left().map(|node| node.height()), Some(2));
    assert_eq!(root.right().map(|node| node.height()), Some(2));
}

#[rstest]
fn test_keys_and_values_iterate_in_key_order() {
    let tree = build_tree();
    let keys: Vec<i32> = tree.keys().copied().collect();
    let values: Vec<i32> = tree.values().copied().collect();
    assert_eq!(keys, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7]);
}

// =============================================================================
// Standard Trait Tests
// =============================================================================

#[rstest]
fn test_equality_ignores_insertion_order() {
    let mut first = AvlTree::new();
    let mut second = AvlTree::new();
    for key in [1, 2, 3] {
        first.insert(key, key).unwrap();
    }
    for key in [3, 2, 1] {
        second.insert(key, key).unwrap();
    }
    assert_eq!(first, second);
}

#[rstest]
fn test_debug_formats_as_a_map() {
    let mut tree = AvlTree::new();
    tree.insert(2, "two").unwrap();
    tree.insert(1, "one").unwrap();
    assert_eq!(format!("{tree:?}"), r#"{1: "one", 2: "two"}"#);
}

// =============================================================================
// SearchTree Trait Tests
// =============================================================================

fn generic_round_trip<T>(tree: &mut T)
where
    T: SearchTree<Key = i32, Value = i32>,
{
    for key in [2, 1, 3] {
        tree.insert(key, key * 10).unwrap();
    }
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.search(&3).map(|node| *node.value()), Some(30));
    assert_eq!(tree.remove(&2), Ok(20));
    assert!(!tree.contains_key(&2));
}

#[rstest]
fn test_search_tree_trait_round_trip() {
    let mut tree = AvlTree::new();
    generic_round_trip(&mut tree);
}
