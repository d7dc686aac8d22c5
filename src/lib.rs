//! # simple-trees
//!
//! A small library of ordered tree data structures: a plain binary tree
//! with configurable traversals, an unbalanced binary search tree, and a
//! self-balancing AVL tree.
//!
//! ## Overview
//!
//! - **Binary trees**: caller-built shapes walked by a shared, lazy
//!   traversal engine in pre-, in- or post-order, forward or reversed.
//! - **Binary search tree**: keyed insert/update/search/remove over the
//!   classic ordering invariant, with no rebalancing.
//! - **AVL tree**: the same contract plus rotation-based rebalancing on
//!   every mutation, keeping all operations O(log N).
//!
//! Everything runs synchronously on the caller's thread; mutation requires
//! `&mut` access, so exclusive use per mutating call is a compile-time
//! property rather than a runtime discipline.
//!
//! ## Example
//!
//! ```rust
//! use simple_trees::prelude::*;
//!
//! let mut tree = AvlTree::new();
//! for key in 1..=7 {
//!     tree.insert(key, key * 10).unwrap();
//! }
//!
//! // Ascending insertion would produce a chain in an unbalanced tree;
//! // rotations leave this one rooted at the median instead.
//! assert_eq!(tree.root().map(|node| *node.key()), Some(4));
//! assert_eq!(tree.search(&6).map(|node| *node.value()), Some(60));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the tree types, the traversal engine and the error type.
///
/// # Usage
///
/// ```rust
/// use simple_trees::prelude::*;
/// ```
pub mod prelude {
    pub use crate::tree::*;
}

pub mod tree;
