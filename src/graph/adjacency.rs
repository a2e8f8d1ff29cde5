//! Ordered multiset of neighbor IDs, stored as neighbor -> multiplicity.

use std::collections::BTreeMap;

/// Ordered multiset of neighbor IDs.
///
/// Parallel links to the same neighbor are a multiplicity count, and `len`
/// caches the total so degree queries stay O(1).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency {
    counts: BTreeMap<u64, usize>,
    len: usize,
}

impl Adjacency {
    /// Create an empty multiset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one occurrence of `id`.
    pub fn insert(&mut self, id: u64) {
        *self.counts.entry(id).or_insert(0) += 1;
        self.len += 1;
    }

    /// Whether `id` occurs at least once.
    pub fn contains(&self, id: u64) -> bool {
        self.counts.contains_key(&id)
    }

    /// Number of occurrences of `id`.
    pub fn multiplicity(&self, id: u64) -> usize {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    /// Total number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the multiset holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct neighbors.
    pub fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    /// Iterate entries in ascending order, repeating each neighbor by its multiplicity.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.counts
            .iter()
            .flat_map(|(&id, &count)| std::iter::repeat(id).take(count))
    }

    /// Iterate distinct neighbors with their multiplicity.
    pub fn iter_counts(&self) -> impl Iterator<Item = (u64, usize)> + '_ {
        self.counts.iter().map(|(&id, &count)| (id, count))
    }
}
