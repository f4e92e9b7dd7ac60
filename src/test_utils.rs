use std::cmp::Ordering;

use proptest::prelude::*;

const VALUE_MAX: usize = 50;
const N_VALUES: usize = 200;

/// Generate a sequence of values from a small domain, encouraging repeated
/// values.
pub(crate) fn arbitrary_values() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..VALUE_MAX, 0..N_VALUES)
}

/// The maximum height of an AVL tree holding `n` values.
pub(crate) fn height_bound(n: usize) -> u8 {
    (1.44 * ((n + 2) as f64).log2()).ceil() as u8
}

/// A value ordered only by `key`, carrying its insertion sequence number so
/// the relative order of equal values can be observed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Tagged {
    pub(crate) key: u8,
    pub(crate) seq: usize,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}
