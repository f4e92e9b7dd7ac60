use std::cmp::Ordering;

use log::trace;

use crate::{error::Error, tree::DuplicatePolicy};

/// A single cell of an [`AvlTree`](crate::AvlTree).
///
/// Each node exclusively owns its children, and caches the height of the
/// subtree rooted at it. Nodes are only ever created by inserting into a tree,
/// and are read-only to callers.
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// Child nodes pointers.
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 1, an absent node is considered to have a
    /// height of 0.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of more entries than can ever be addressed.
    height: u8,

    value: T,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Insert `value` into the subtree rooted at `self`, rebalancing every
    /// ancestor of the new leaf on the way back up.
    ///
    /// Returns false if the value was not stored because `policy` rejects
    /// duplicates and an equal value already exists.
    pub(crate) fn insert(self: &mut Box<Self>, value: T, policy: DuplicatePolicy) -> bool
    where
        T: Ord,
    {
        let child = match value.cmp(&self.value) {
            Ordering::Less => &mut self.left,
            Ordering::Equal if policy == DuplicatePolicy::Reject => return false,
            // Equal values descend right, placing them after all existing
            // equal values in an in-order traversal.
            Ordering::Equal | Ordering::Greater => &mut self.right,
        };

        match child {
            Some(v) => {
                if !v.insert(value, policy) {
                    // The tree structure has not been modified, so it does
                    // not require rebalancing.
                    return false;
                }
            }
            None => {
                // Linking a new leaf directly beneath self can change the
                // balance factor of self by at most 1 in the direction of the
                // new leaf, which never requires a rotation at self.
                *child = Some(Box::new(Self::new(value)));
                update_height(self);
                return true;
            }
        }

        update_height(self);
        rebalance(self);

        // Invariant: the absolute difference between tree heights ("balance
        // factor") cannot exceed 1.
        debug_assert!(balance(self).abs() <= 1);

        true
    }

    pub(crate) fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut ptr = Some(self);
        while let Some(n) = ptr {
            ptr = match value.cmp(&n.value) {
                Ordering::Less => n.left(),
                Ordering::Equal => return true,
                Ordering::Greater => n.right(),
            };
        }
        false
    }

    /// Return the left-most (minimum) value in the subtree rooted at `self`.
    pub(crate) fn min(&self) -> &T {
        let mut n = self;
        while let Some(l) = n.left() {
            n = l;
        }
        &n.value
    }

    /// Return the right-most (maximum) value in the subtree rooted at `self`.
    pub(crate) fn max(&self) -> &T {
        let mut n = self;
        while let Some(r) = n.right() {
            n = r;
        }
        &n.value
    }

    /// The value held in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The height of the subtree rooted at this node, where a leaf is 1.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// The left child, holding values ordered before this node's value.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, holding values ordered at or after this node's value.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }

    /// Assemble a node verbatim, without computing heights or checking any
    /// invariant.
    #[cfg(test)]
    pub(crate) fn from_parts(
        value: T,
        left: Option<Self>,
        right: Option<Self>,
        height: u8,
    ) -> Self {
        Self {
            left: left.map(Box::new),
            right: right.map(Box::new),
            height,
            value,
        }
    }
}

/// Return the cached height of `n`, or 0 if `n` is [`None`].
pub fn height<T>(n: Option<&Node<T>>) -> u8 {
    n.map(|v| v.height()).unwrap_or_default()
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// The result is positive when left heavy, and negative when right heavy.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `n` is [`None`], as an absent node
/// has no balance factor.
pub fn balance_factor<T>(n: Option<&Node<T>>) -> Result<i8, Error> {
    n.map(balance)
        .ok_or(Error::InvalidArgument("balance factor of an absent node"))
}

fn balance<T>(n: &Node<T>) -> i8 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    (height(n.left()) as i16 - height(n.right()) as i16) as i8
}

fn update_height<T>(n: &mut Node<T>) {
    n.height = 1 + height(n.left()).max(height(n.right()));
}

/// Restore the AVL property at `n` after an insert into one of its subtrees
/// changed its balance factor to +/-2.
///
/// The inner vs. outer case is selected by the sign of the heavy child's
/// balance factor: a child leaning away from the heavy side means the insert
/// went into the inner grandchild, which needs a double rotation.
fn rebalance<T>(n: &mut Box<Node<T>>) {
    match balance(n) {
        // Left-heavy
        2 => {
            if n.left().map(balance).unwrap_or_default() < 0 {
                trace!("rebalancing left-right case at height {}", n.height);
                if let Some(l) = n.left.as_mut() {
                    rotate_left(l);
                }
            } else {
                trace!("rebalancing left-left case at height {}", n.height);
            }
            rotate_right(n);
        }
        // Right-heavy
        -2 => {
            if n.right().map(balance).unwrap_or_default() > 0 {
                trace!("rebalancing right-left case at height {}", n.height);
                if let Some(r) = n.right.as_mut() {
                    rotate_right(r);
                }
            } else {
                trace!("rebalancing right-right case at height {}", n.height);
            }
            rotate_left(n);
        }
        -1..=1 => { /* The tree is well balanced */ }
        v => unreachable!("balance factor {v} after a single insert"),
    }
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// After the call, the slot that held `x` holds `P`.
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
fn rotate_left<T>(x: &mut Box<Node<T>>) {
    let mut p = x
        .right
        .take()
        .expect("rotate_left requires a right child");
    std::mem::swap(x, &mut p);

    // "p" is now the old subtree root, and must be updated before the new
    // root that becomes its parent.
    p.right = x.left.take();
    update_height(&mut p);

    x.left = Some(p);
    update_height(x);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// After the call, the slot that held `y` holds `P`.
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
fn rotate_right<T>(y: &mut Box<Node<T>>) {
    let mut p = y.left.take().expect("rotate_right requires a left child");
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);

    y.right = Some(p);
    update_height(y);
}
