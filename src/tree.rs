use crate::{
    iter::{IntoIter, Iter},
    node::Node,
};

/// Selects what [`AvlTree::insert()`] does with a value equal to one already
/// in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Store every value. Equal values are ordered by insertion, earliest
    /// first, making the tree an ordered multiset.
    #[default]
    Allow,

    /// Discard values equal to one already in the tree.
    Reject,
}

/// A self-balancing binary search tree.
///
/// After every [`insert()`](AvlTree::insert) returns, the heights of the two
/// subtrees of every node differ by at most 1, bounding the tree height to
/// roughly `1.44 * log2(n + 2)` for `n` values.
#[derive(Debug, Clone)]
pub struct AvlTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
    duplicates: DuplicatePolicy,
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::with_duplicates(DuplicatePolicy::default())
    }
}

impl<T> AvlTree<T> {
    /// Construct an empty tree that stores duplicate values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an empty tree that handles equal values as `policy` dictates.
    pub fn with_duplicates(policy: DuplicatePolicy) -> Self {
        Self {
            root: None,
            len: 0,
            duplicates: policy,
        }
    }

    /// The duplicate handling this tree was constructed with.
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    /// The root node of the tree, or [`None`] if the tree is empty.
    ///
    /// Combined with [`height()`](crate::height) and
    /// [`balance_factor()`](crate::balance_factor) this allows the tree shape
    /// to be inspected without mutating it.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The height of the tree, which is 0 when empty.
    pub fn height(&self) -> u8 {
        crate::node::height(self.root())
    }

    /// The number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Iterate over references to all values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root())
    }

    /// The smallest value in the tree, if any.
    pub fn min(&self) -> Option<&T> {
        self.root().map(Node::min)
    }

    /// The largest value in the tree, if any.
    pub fn max(&self) -> Option<&T> {
        self.root().map(Node::max)
    }

    /// Return a copy of all values in ascending order.
    ///
    /// Equal values appear in the order they were inserted.
    pub fn inorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Insert `value` into the tree, rebalancing as necessary.
    ///
    /// Returns false if the value was discarded because the tree uses
    /// [`DuplicatePolicy::Reject`] and an equal value is already present.
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = match self.root {
            Some(ref mut v) => v.insert(value, self.duplicates),
            None => {
                self.root = Some(Box::new(Node::new(value)));
                true
            }
        };

        if inserted {
            self.len += 1;
        }

        inserted
    }

    /// Returns true if a value equal to `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.root()
            .map(|v| v.contains(value))
            .unwrap_or_default()
    }
}

#[cfg(test)]
impl<T> AvlTree<T> {
    /// Wrap a hand-built (and potentially invalid) node structure.
    pub(crate) fn from_root(root: Node<T>) -> Self {
        let mut this = Self {
            root: Some(Box::new(root)),
            len: 0,
            duplicates: DuplicatePolicy::Allow,
        };
        this.len = this.iter().count();
        this
    }
}

impl<T> FromIterator<T> for AvlTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}

impl<T> Extend<T> for AvlTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<T> IntoIterator for AvlTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root)
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
