use crate::{
    error::Error,
    node::{balance_factor, height},
    AvlTree,
};

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Assert the BST and AVL properties of the tree, ensuring it is
    /// well-formed.
    ///
    /// This audit is built only from the read-only introspection operations
    /// ([`AvlTree::iter()`], [`height()`](crate::height) and
    /// [`balance_factor()`](crate::balance_factor)) and never modifies the
    /// tree. It runs in O(n) time.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), Error> {
        // Invariant 1: an in-order traversal yields values in non-descending
        // order. This covers the ordering of every node against its entire
        // left and right subtrees, not only its direct children.
        let mut iter = self.iter();
        if let Some(mut last) = iter.next() {
            for v in iter {
                if v < last {
                    return Err(Error::Unordered);
                }
                last = v;
            }
        }

        let root = match self.root() {
            Some(v) => v,
            None => return Ok(()),
        };

        // Perform a pre-order traversal of the tree.
        let mut stack = vec![root];
        while let Some(n) = stack.pop() {
            // Prepare to visit the children
            stack.extend(n.left().into_iter().chain(n.right()));

            // Invariant 2: the height of this node is always +1 of the
            // maximum child height.
            let expected = 1 + height(n.left()).max(height(n.right()));
            if n.height() != expected {
                return Err(Error::HeightMismatch {
                    expected,
                    actual: n.height(),
                });
            }

            // Invariant 3: the absolute height difference between the left
            // subtree and right subtree (the "balance factor") cannot
            // exceed 1.
            let balance = balance_factor(Some(n))?;
            if !(-1..=1).contains(&balance) {
                return Err(Error::Unbalanced { balance });
            }
        }

        Ok(())
    }
}
