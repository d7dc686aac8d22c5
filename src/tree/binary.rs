//! Plain binary tree over caller-built nodes.
//!
//! [`BinaryTree`] imposes no ordering on its nodes: the caller assembles a
//! shape out of [`BinaryNode`]s and the tree provides the traversal surface
//! over it. The search trees add ordering on top; this type exists for the
//! cases where the shape itself is the data.

use super::node::BinaryNode;
use super::traversal::{Traversal, TraversalOrder};

/// A binary tree owning an optional caller-built root.
///
/// # Examples
///
/// ```rust
/// use simple_trees::tree::{BinaryNode, BinaryTree, TraversalOrder};
///
/// let mut root = BinaryNode::new(1, "a");
/// root.set_left(BinaryNode::new(2, "b"));
/// root.set_right(BinaryNode::new(3, "c"));
///
/// let tree = BinaryTree::with_root(root);
/// let keys: Vec<i32> = tree
///     .traversal(TraversalOrder::PreOrder, false)
///     .map(|node| *node.key())
///     .collect();
/// assert_eq!(keys, vec![1, 2, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct BinaryTree<K, V> {
    root: Option<Box<BinaryNode<K, V>>>,
}

impl<K, V> BinaryTree<K, V> {
    /// Creates an empty tree.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Creates a tree rooted at `root`, taking ownership of the whole
    /// subtree hanging off it.
    #[inline]
    #[must_use]
    pub fn with_root(root: BinaryNode<K, V>) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    /// Returns the root node, or `None` for an empty tree.
    #[inline]
    #[must_use]
    pub fn root(&self) -> Option<&BinaryNode<K, V>> {
        self.root.as_deref()
    }

    /// Returns a mutable reference to the root node, if present, so a
    /// tree can keep growing after construction.
    #[inline]
    pub fn root_mut(&mut self) -> Option<&mut BinaryNode<K, V>> {
        self.root.as_deref_mut()
    }

    /// Returns `true` if the tree has no root.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
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
}

impl<K, V> Default for BinaryTree<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
