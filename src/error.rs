use thiserror::Error;

/// Errors returned by the introspection and validation operations of an
/// [`AvlTree`](crate::AvlTree).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The operation was given an input for which it has no meaningful
    /// result, such as the balance factor of an absent node.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A child node holds a value on the wrong side of its parent.
    #[error("binary search ordering violated")]
    Unordered,

    /// A node's cached height does not match the height computed from its
    /// children.
    #[error("cached height {actual} does not match computed height {expected}")]
    HeightMismatch {
        /// The height derived from the node's children.
        expected: u8,
        /// The height stored in the node.
        actual: u8,
    },

    /// A node's subtrees differ in height by more than 1.
    #[error("balance factor {balance} outside [-1, 1]")]
    Unbalanced {
        /// The offending balance factor.
        balance: i8,
    },
}
