//! A height-balanced binary search tree ("AVL tree").
//!
//! Every node caches the height of the subtree rooted at it. After each
//! insert, the ancestors of the new leaf are re-heightened bottom-up and any
//! node whose subtrees differ in height by more than one is corrected with a
//! single or double rotation, keeping the tree height within
//! `~1.44 * log2(n + 2)` for `n` values regardless of insertion order.
//!
//! ```
//! use avltree::{balance_factor, AvlTree};
//!
//! let mut t = AvlTree::new();
//! for v in [10, 20, 30] {
//!     t.insert(v);
//! }
//!
//! let root = t.root().unwrap();
//! assert_eq!(*root.value(), 20);
//! assert_eq!(balance_factor(Some(root)), Ok(0));
//! assert_eq!(t.inorder(), [10, 20, 30]);
//! ```
//!
//! The tree performs no internal synchronisation; concurrent mutation must be
//! serialised by the caller. Rotations are logged at `trace` level through the
//! [`log`] facade.

#![warn(missing_docs)]

mod dot;
mod error;
mod iter;
mod node;
mod tree;
mod verify;

#[cfg(test)]
mod test_utils;

pub use error::Error;
pub use iter::{IntoIter, Iter};
pub use node::{balance_factor, height, Node};
pub use tree::{AvlTree, DuplicatePolicy};
