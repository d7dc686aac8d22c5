//! Ordered tree data structures.
//!
//! This module provides binary trees built from exclusively owned nodes,
//! from shape-only up to self-balancing:
//!
//! - [`BinaryTree`]: a plain binary tree over caller-built nodes, traversal
//!   only.
//! - [`BinarySearchTree`]: an unbalanced binary search tree with keyed
//!   insert/update/search/remove.
//! - [`AvlTree`]: a binary search tree that rebalances itself with rotations
//!   on every insert and removal, keeping operations O(log N).
//!
//! All three share one traversal engine ([`Traversal`]), which walks any
//! node kind implementing [`TreeNode`] in pre-, in- or post-order, forward
//! or reversed, lazily. The [`SearchTree`] trait abstracts over the two
//! search trees so callers can swap one for the other.
//!
//! # Ownership
//!
//! A tree exclusively owns every node reachable from its root; children are
//! `Box`ed and there are no parent pointers. Mutation descends recursively
//! and rewires child links while unwinding, so no shared or cyclic ownership
//! ever arises. Inserting hands a node to the tree; removing hands the value
//! back and drops the node.
//!
//! # Examples
//!
//! ## Keyed storage with balancing
//!
//! ```rust
//! use simple_trees::tree::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for (key, name) in [(3, "three"), (1, "one"), (2, "two")] {
//!     tree.insert(key, name).unwrap();
//! }
//!
//! assert_eq!(tree.search(&2).map(|node| *node.value()), Some("two"));
//! assert_eq!(tree.min().map(|(key, _)| *key), Some(1));
//!
//! let keys: Vec<i32> = tree.keys().copied().collect();
//! assert_eq!(keys, vec![1, 2, 3]);
//! ```
//!
//! ## Configurable traversal
//!
//! ```rust
//! use simple_trees::tree::{BinarySearchTree, TraversalOrder};
//!
//! let mut tree = BinarySearchTree::new();
//! for key in [4, 2, 6, 1, 7, 5, 3] {
//!     tree.insert(key, ()).unwrap();
//! }
//!
//! let post_order: Vec<i32> = tree
//!     .traversal(TraversalOrder::PostOrder, false)
//!     .map(|node| *node.key())
//!     .collect();
//! assert_eq!(post_order, vec![1, 3, 2, 5, 7, 6, 4]);
//! ```

mod avl;
mod binary;
mod bst;
mod error;
mod node;
mod search;
mod traversal;

pub use avl::AvlTree;
pub use binary::BinaryTree;
pub use bst::BinarySearchTree;
pub use error::TreeError;
pub use node::{AvlNode, BinaryNode, TreeNode};
pub use search::SearchTree;
pub use traversal::{Traversal, TraversalOrder};
