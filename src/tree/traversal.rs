//! Lazy traversal engine shared by every tree in the crate.
//!
//! [`Traversal`] walks any binary-shaped tree (anything whose nodes
//! implement [`TreeNode`]) in one of three classical orderings, optionally
//! with left/right priority reversed. It is implemented once, generically,
//! with an explicit stack, so the same engine serves
//! [`BinaryTree`](crate::tree::BinaryTree),
//! [`BinarySearchTree`](crate::tree::BinarySearchTree) and
//! [`AvlTree`](crate::tree::AvlTree).
//!
//! Traversal is read-only and lazy: nodes are produced on demand and a
//! partially consumed iterator does no work for the part never requested.
//! Each call to a tree's `traversal` method starts a fresh sequence.
//!
//! # Examples
//!
//! ```rust
//! use simple_trees::tree::{BinarySearchTree, TraversalOrder};
//!
//! let mut tree = BinarySearchTree::new();
//! for key in [4, 2, 6, 1, 7, 5, 3] {
//!     tree.insert(key, ()).unwrap();
//! }
//!
//! let ascending: Vec<i32> = tree
//!     .traversal(TraversalOrder::InOrder, false)
//!     .map(|node| *node.key())
//!     .collect();
//! assert_eq!(ascending, vec![1, 2, 3, 4, 5, 6, 7]);
//!
//! let descending: Vec<i32> = tree
//!     .traversal(TraversalOrder::InOrder, true)
//!     .map(|node| *node.key())
//!     .collect();
//! assert_eq!(descending, vec![7, 6, 5, 4, 3, 2, 1]);
//! ```

use smallvec::SmallVec;

use super::node::TreeNode;

/// Inline capacity of the traversal stack.
///
/// The stack holds at most a couple of frames per level of the walked path,
/// so trees up to a few hundred nodes traverse without a heap allocation.
const STACK_CAPACITY: usize = 16;

/// The three classical orderings a traversal can produce.
///
/// The placement of the current node relative to its subtrees is what
/// distinguishes the orderings; the subtree priority (left-first or
/// right-first) is chosen separately by the `reverse` flag of
/// [`Traversal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Visit the node, then its subtrees.
    PreOrder,
    /// Visit one subtree, the node, then the other subtree. For a search
    /// tree this yields keys in ascending order (descending when reversed).
    InOrder,
    /// Visit both subtrees, then the node.
    PostOrder,
}

/// A pending unit of traversal work.
enum Step<'a, N> {
    /// Expand a subtree root into its visit/descend steps.
    Descend(&'a N),
    /// Emit a node whose subtrees have already been scheduled.
    Visit(&'a N),
}

/// A lazy iterator over the nodes of a binary-shaped tree.
///
/// Produced by the `traversal` methods of the tree types. Yields shared
/// references, never mutates the tree, and terminates after at most one
/// step per node. An empty tree yields nothing; empty child slots contribute
/// no elements and are simply skipped.
pub struct Traversal<'a, N> {
    stack: SmallVec<[Step<'a, N>; STACK_CAPACITY]>,
    order: TraversalOrder,
    reverse: bool,
}

impl<'a, N: TreeNode> Traversal<'a, N> {
    /// Starts a fresh traversal from `root`.
    pub(crate) fn new(root: Option<&'a N>, order: TraversalOrder, reverse: bool) -> Self {
        let mut stack = SmallVec::new();
        if let Some(root) = root {
            stack.push(Step::Descend(root));
        }
        Self {
            stack,
            order,
            reverse,
        }
    }
}

impl<'a, N: TreeNode> Iterator for Traversal<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(step) = self.stack.pop() {
            let node = match step {
                Step::Visit(node) => return Some(node),
                Step::Descend(node) => node,
            };

            let (first, second) = if self.reverse {
                (node.right(), node.left())
            } else {
                (node.left(), node.right())
            };

            // Steps are pushed in reverse of the order they should run.
            match self.order {
                TraversalOrder::PreOrder => {
                    if let Some(second) = second {
                        self.stack.push(Step::Descend(second));
                    }
                    if let Some(first) = first {
                        self.stack.push(Step::Descend(first));
                    }
                    return Some(node);
                }
                TraversalOrder::InOrder => {
                    if let Some(second) = second {
                        self.stack.push(Step::Descend(second));
                    }
                    self.stack.push(Step::Visit(node));
                    if let Some(first) = first {
                        self.stack.push(Step::Descend(first));
                    }
                }
                TraversalOrder::PostOrder => {
                    self.stack.push(Step::Visit(node));
                    if let Some(second) = second {
                        self.stack.push(Step::Descend(second));
                    }
                    if let Some(first) = first {
                        self.stack.push(Step::Descend(first));
                    }
                }
            }
        }

        None
    }
}
