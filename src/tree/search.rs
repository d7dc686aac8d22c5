//! The ordered search tree abstraction.
//!
//! [`SearchTree`] is the common contract of
//! [`BinarySearchTree`](crate::tree::BinarySearchTree) and
//! [`AvlTree`](crate::tree::AvlTree): keyed insertion, update, lookup,
//! removal and traversal over a tree whose in-order walk yields keys in
//! ascending order. Code written against the trait runs unchanged on either
//! tree, which is also how the shared law tests exercise both.
//!
//! # Examples
//!
//! ```rust
//! use simple_trees::tree::{AvlTree, BinarySearchTree, SearchTree, TraversalOrder, TreeNode};
//!
//! fn sorted_keys<T: SearchTree<Key = i32>>(tree: &T) -> Vec<i32> {
//!     tree.traversal(TraversalOrder::InOrder, false)
//!         .map(|node| *node.key())
//!         .collect()
//! }
//!
//! let mut bst = BinarySearchTree::new();
//! let mut avl = AvlTree::new();
//! for key in [3, 1, 2] {
//!     bst.insert(key, ()).unwrap();
//!     avl.insert(key, ()).unwrap();
//! }
//!
//! assert_eq!(sorted_keys(&bst), vec![1, 2, 3]);
//! assert_eq!(sorted_keys(&avl), vec![1, 2, 3]);
//! ```

use super::error::TreeError;
use super::node::TreeNode;
use super::traversal::{Traversal, TraversalOrder};

/// An ordered map from unique keys to values, stored as a binary search
/// tree.
///
/// For every node, all keys in its left subtree compare less than the node's
/// key and all keys in its right subtree compare greater; no two nodes share
/// an equal key. Implementations may additionally keep the tree balanced,
/// but the observable contract is the same.
///
/// All operations run on the caller's thread and complete synchronously;
/// mutation takes `&mut self`, so exclusive access per mutating call is
/// enforced at compile time.
pub trait SearchTree {
    /// The key type; the total order of `Key` is the tree order.
    type Key: Ord + Clone;
    /// The value type carried alongside each key.
    type Value: Clone;
    /// The concrete node kind this tree is made of.
    type Node: TreeNode<Key = Self::Key, Value = Self::Value>;

    /// Returns the root node, or `None` for an empty tree.
    fn root(&self) -> Option<&Self::Node>;

    /// Returns the number of nodes in the tree.
    fn len(&self) -> usize;

    /// Returns `true` if the tree contains no nodes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts a caller-constructed node, taking ownership of it.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyAlreadyExists`] if a node with an equal key
    /// is already present; the tree and the resident value are unchanged.
    fn insert_node(&mut self, node: Self::Node) -> Result<(), TreeError>;

    /// Inserts a key/value pair, constructing the node internally.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyAlreadyExists`] if a node with an equal key
    /// is already present; the tree and the resident value are unchanged.
    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Result<(), TreeError> {
        self.insert_node(Self::Node::leaf(key, value))
    }

    /// Replaces the key and value of the node holding an equal key,
    /// preserving the node's position and child links.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyNotFound`] if no node holds an equal key.
    fn update_node(&mut self, node: Self::Node) -> Result<(), TreeError>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyNotFound`] if no node holds an equal key.
    fn update(&mut self, key: Self::Key, value: Self::Value) -> Result<(), TreeError> {
        self.update_node(Self::Node::leaf(key, value))
    }

    /// Returns the node holding an equal key, or `None`.
    ///
    /// Absence is a normal outcome, not an error.
    fn search(&self, key: &Self::Key) -> Option<&Self::Node>;

    /// Returns `true` if a node holds an equal key.
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.search(key).is_some()
    }

    /// Removes the node holding an equal key and returns its value.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyNotFound`] if no node holds an equal key;
    /// the tree is unchanged.
    fn remove(&mut self, key: &Self::Key) -> Result<Self::Value, TreeError>;

    /// Starts a fresh lazy traversal in the given order and direction.
    fn traversal(&self, order: TraversalOrder, reverse: bool) -> Traversal<'_, Self::Node> {
        Traversal::new(self.root(), order, reverse)
    }
}
