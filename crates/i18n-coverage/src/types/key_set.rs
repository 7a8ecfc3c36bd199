use std::collections::BTreeSet;
use std::collections::btree_set::Iter;

use serde::Serialize;

/// A set of translation keys.
///
/// Keys are kept in sorted order so that anything derived from a set (missing
/// key lists, JSON output) is stable between runs.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct KeySet(BTreeSet<String>);

impl KeySet {
    /// Create an empty key set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key, returning `true` if it was not present yet.
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        self.0.insert(key.into())
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set has no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate keys in sorted order.
    pub fn iter(&self) -> Iter<'_, String> {
        self.0.iter()
    }

    /// Whether every key of `self` is also in `other`.
    pub fn is_subset(&self, other: &KeySet) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Keys of `self` that are absent from `other`, in sorted order.
    pub fn missing_from(&self, other: &KeySet) -> Vec<String> {
        self.0.difference(&other.0).cloned().collect()
    }
}
