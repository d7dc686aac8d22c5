//! Unbalanced binary search tree.
//!
//! [`BinarySearchTree`] maintains the classic ordering invariant with no
//! rebalancing: for every node, all keys in the left subtree compare less
//! than the node's key and all keys in the right subtree greater. Lookups
//! and mutations are O(height): O(log N) for well-shuffled input, O(N) for
//! sorted input, which degenerates the tree into a chain. When the shape of
//! the input is not under your control, prefer
//! [`AvlTree`](crate::tree::AvlTree), which keeps the height logarithmic.
//!
//! # Examples
//!
//! ```rust
//! use simple_trees::tree::{BinarySearchTree, TraversalOrder};
//!
//! let mut tree = BinarySearchTree::new();
//! for key in [4, 2, 6, 1, 7, 5, 3] {
//!     tree.insert(key, key * 10).unwrap();
//! }
//!
//! assert_eq!(tree.search(&5).map(|node| *node.value()), Some(50));
//!
//! let keys: Vec<i32> = tree.keys().copied().collect();
//! assert_eq!(keys, vec![1, 2, 3, 4, 5, 6, 7]);
//!
//! let removed = tree.remove(&4).unwrap();
//! assert_eq!(removed, 40);
//! assert!(tree.search(&4).is_none());
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::mem;

use super::error::TreeError;
use super::node::{leftmost, rightmost, BinaryNode, LEFT, RIGHT};
use super::search::SearchTree;
use super::traversal::{Traversal, TraversalOrder};

/// An unbalanced binary search tree mapping unique keys to values.
///
/// Mutation descends recursively by key comparison and relinks the traversed
/// child slot with the (possibly new) subtree root on the way back up; nodes
/// carry no parent pointers. The tree exclusively owns its node graph.
///
/// # Time Complexity
///
/// | Operation      | Complexity                 |
/// |----------------|----------------------------|
/// | `new`          | O(1)                       |
/// | `insert`       | O(height), worst case O(N) |
/// | `update`       | O(height), worst case O(N) |
/// | `search`       | O(height), worst case O(N) |
/// | `remove`       | O(height), worst case O(N) |
/// | `min`/`max`    | O(height), worst case O(N) |
/// | `len`          | O(1)                       |
/// | `is_empty`     | O(1)                       |
#[derive(Clone)]
pub struct BinarySearchTree<K, V> {
    /// Root node of the tree.
    root: Option<Box<BinaryNode<K, V>>>,
    /// Number of nodes.
    length: usize,
}

impl<K, V> BinarySearchTree<K, V> {
    /// Creates an empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_trees::tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<i32, String> = BinarySearchTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    /// Returns the number of nodes in the tree.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree contains no nodes.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the root node, or `None` for an empty tree.
    #[inline]
    #[must_use]
    pub fn root(&self) -> Option<&BinaryNode<K, V>> {
        self.root.as_deref()
    }

    /// Returns the entry with the smallest key.
    #[must_use]
    pub fn min(&self) -> Option<(&K, &V)> {
        self.root().map(|root| {
            let node = leftmost(root);
            (node.key(), node.value())
        })
    }

    /// Returns the entry with the largest key.
    #[must_use]
    pub fn max(&self) -> Option<(&K, &V)> {
        self.root().map(|root| {
            let node = rightmost(root);
            (node.key(), node.value())
        })
    }

    /// Starts a fresh lazy traversal in the given order and direction.
    ///
    /// Repeated calls without intervening mutation produce identical
    /// sequences; an empty tree yields nothing.
    #[must_use]
    pub fn traversal(
        &self,
        order: TraversalOrder,
        reverse: bool,
    ) -> Traversal<'_, BinaryNode<K, V>> {
        Traversal::new(self.root(), order, reverse)
    }

    /// Returns an iterator over entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.traversal(TraversalOrder::InOrder, false)
            .map(|node| (node.key(), node.value()))
    }

    /// Returns an iterator over keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over values in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }
}

impl<K: Ord + Clone, V: Clone> BinarySearchTree<K, V> {
    /// Inserts a key/value pair, constructing the node internally.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyAlreadyExists`] if a node with an equal key
    /// is already present; the tree and the resident value are unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_trees::tree::{BinarySearchTree, TreeError};
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert!(tree.insert(1, "one").is_ok());
    /// assert_eq!(tree.insert(1, "uno"), Err(TreeError::KeyAlreadyExists));
    /// assert_eq!(tree.search(&1).map(|node| *node.value()), Some("one"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<(), TreeError> {
        self.insert_node(BinaryNode::new(key, value))
    }

    /// Inserts a caller-constructed node, taking ownership of it.
    ///
    /// The duplicate check happens during descent, before any link is
    /// rewritten, so a failed insert leaves the tree untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyAlreadyExists`] if a node with an equal key
    /// is already present.
    pub fn insert_node(&mut self, node: BinaryNode<K, V>) -> Result<(), TreeError> {
        let (root, result) = Self::insert_into(self.root.take(), node);
        self.root = Some(root);
        if result.is_ok() {
            self.length += 1;
        }
        result
    }

    /// Recursive helper for insert: returns the (possibly new) subtree root
    /// for the caller to relink, plus the outcome of the descent.
    fn insert_into(
        node: Option<Box<BinaryNode<K, V>>>,
        incoming: BinaryNode<K, V>,
    ) -> (Box<BinaryNode<K, V>>, Result<(), TreeError>) {
        let Some(mut current) = node else {
            return (Box::new(incoming), Ok(()));
        };

        let result = match incoming.key.cmp(&current.key) {
            Ordering::Equal => Err(TreeError::KeyAlreadyExists),
            Ordering::Less => {
                let (child, result) = Self::insert_into(current.children[LEFT].take(), incoming);
                current.children[LEFT] = Some(child);
                result
            }
            Ordering::Greater => {
                let (child, result) = Self::insert_into(current.children[RIGHT].take(), incoming);
                current.children[RIGHT] = Some(child);
                result
            }
        };

        (current, result)
    }

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyNotFound`] if no node holds an equal key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_trees::tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(4, 4).unwrap();
    /// tree.update(4, -4).unwrap();
    /// assert_eq!(tree.search(&4).map(|node| *node.value()), Some(-4));
    /// ```
    pub fn update(&mut self, key: K, value: V) -> Result<(), TreeError> {
        self.update_node(BinaryNode::new(key, value))
    }

    /// Replaces the key and value of the node holding an equal key with the
    /// incoming node's key and value.
    ///
    /// This is a field-level merge: the resident node keeps its structural
    /// position and its child links, so no subtree is orphaned.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyNotFound`] if no node holds an equal key.
    pub fn update_node(&mut self, node: BinaryNode<K, V>) -> Result<(), TreeError> {
        Self::update_in(self.root.as_deref_mut(), node)
    }

    /// Recursive helper for update.
    fn update_in(
        node: Option<&mut BinaryNode<K, V>>,
        incoming: BinaryNode<K, V>,
    ) -> Result<(), TreeError> {
        let Some(current) = node else {
            return Err(TreeError::KeyNotFound);
        };

        match incoming.key.cmp(&current.key) {
            Ordering::Less => Self::update_in(current.children[LEFT].as_deref_mut(), incoming),
            Ordering::Greater => Self::update_in(current.children[RIGHT].as_deref_mut(), incoming),
            Ordering::Equal => {
                let BinaryNode { key, value, .. } = incoming;
                current.key = key;
                current.value = value;
                Ok(())
            }
        }
    }

    /// Returns the node holding an equal key, or `None`.
    ///
    /// The key may be any borrowed form of the tree's key type, as long as
    /// the ordering on the borrowed form matches the ordering on the key
    /// type. Absence is a normal outcome, not an error.
    #[must_use]
    pub fn search<Q>(&self, key: &Q) -> Option<&BinaryNode<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::search_in(self.root(), key)
    }

    /// Recursive helper for search.
    fn search_in<'a, Q>(
        node: Option<&'a BinaryNode<K, V>>,
        key: &Q,
    ) -> Option<&'a BinaryNode<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        node.and_then(|current| match key.cmp(current.key.borrow()) {
            Ordering::Less => Self::search_in(current.left(), key),
            Ordering::Greater => Self::search_in(current.right(), key),
            Ordering::Equal => Some(current),
        })
    }

    /// Returns `true` if a node holds an equal key.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).is_some()
    }

    /// Removes the node holding an equal key and returns its value.
    ///
    /// A leaf is detached; a node with one child is replaced by that child;
    /// a node with two children receives its in-order successor's key and
    /// value, after which the successor is removed from the right subtree.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyNotFound`] if no node holds an equal key;
    /// the tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_trees::tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// for key in [4, 2, 6, 1, 7, 5, 3] {
    ///     tree.insert(key, ()).unwrap();
    /// }
    ///
    /// tree.remove(&4).unwrap();
    /// assert!(tree.search(&4).is_none());
    /// let keys: Vec<i32> = tree.keys().copied().collect();
    /// assert_eq!(keys, vec![1, 2, 3, 5, 6, 7]);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V, TreeError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (root, removed) = Self::remove_from(self.root.take(), key);
        self.root = root;
        let value = removed.ok_or(TreeError::KeyNotFound)?;
        self.length -= 1;
        Ok(value)
    }

    /// Recursive helper for remove: returns the re-threaded subtree root and
    /// the removed value, if the key was found.
    fn remove_from<Q>(
        node: Option<Box<BinaryNode<K, V>>>,
        key: &Q,
    ) -> (Option<Box<BinaryNode<K, V>>>, Option<V>)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(mut current) = node else {
            return (None, None);
        };

        match key.cmp(current.key.borrow()) {
            Ordering::Less => {
                let (child, removed) = Self::remove_from(current.children[LEFT].take(), key);
                current.children[LEFT] = child;
                (Some(current), removed)
            }
            Ordering::Greater => {
                let (child, removed) = Self::remove_from(current.children[RIGHT].take(), key);
                current.children[RIGHT] = child;
                (Some(current), removed)
            }
            Ordering::Equal => match (current.children[LEFT].take(), current.children[RIGHT].take())
            {
                (None, right) => {
                    let BinaryNode { value, .. } = *current;
                    (right, Some(value))
                }
                (left @ Some(_), None) => {
                    let BinaryNode { value, .. } = *current;
                    (left, Some(value))
                }
                (Some(left), Some(right)) => {
                    // Two children: adopt the in-order successor's entry,
                    // then remove the successor from the right subtree.
                    let successor = leftmost(right.as_ref());
                    let successor_key = successor.key.clone();
                    let successor_value = successor.value.clone();

                    let (new_right, _) = Self::remove_from(Some(right), successor_key.borrow());
                    current.children[LEFT] = Some(left);
                    current.children[RIGHT] = new_right;

                    let removed_value = mem::replace(&mut current.value, successor_value);
                    current.key = successor_key;
                    (Some(current), Some(removed_value))
                }
            },
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for BinarySearchTree<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BinarySearchTree<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for BinarySearchTree<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for BinarySearchTree<K, V> {}

impl<K: Ord + Clone, V: Clone> SearchTree for BinarySearchTree<K, V> {
    type Key = K;
    type Value = V;
    type Node = BinaryNode<K, V>;

    fn root(&self) -> Option<&BinaryNode<K, V>> {
        self.root()
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn insert_node(&mut self, node: BinaryNode<K, V>) -> Result<(), TreeError> {
        self.insert_node(node)
    }

    fn update_node(&mut self, node: BinaryNode<K, V>) -> Result<(), TreeError> {
        self.update_node(node)
    }

    fn search(&self, key: &K) -> Option<&BinaryNode<K, V>> {
        self.search(key)
    }

    fn remove(&mut self, key: &K) -> Result<V, TreeError> {
        self.remove(key)
    }
}
