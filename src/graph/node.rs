//! Node record: lazily allocated in/out adjacency.

use super::adjacency::Adjacency;

/// A node of the graph.
///
/// A node does not know its own ID; identity is the key it is stored under in
/// [`Graph`](super::Graph). Both adjacency multisets stay unallocated until the
/// first link in that direction, keeping low-degree nodes small.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    /// Sources of incoming links, one entry per link.
    in_links: Option<Box<Adjacency>>,
    /// Targets of outgoing links, one entry per link.
    out_links: Option<Box<Adjacency>>,
}

impl Node {
    /// Create a node with no links.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of links touching this node. A self-loop counts twice.
    pub fn degree(&self) -> usize {
        self.in_degree() + self.out_degree()
    }

    /// Number of incoming links, parallel links included.
    pub fn in_degree(&self) -> usize {
        self.in_links.as_ref().map_or(0, |adj| adj.len())
    }

    /// Number of outgoing links, parallel links included.
    pub fn out_degree(&self) -> usize {
        self.out_links.as_ref().map_or(0, |adj| adj.len())
    }

    /// Whether there is at least one link from this node to `id`.
    pub fn has_out_link(&self, id: u64) -> bool {
        self.out_links.as_ref().is_some_and(|adj| adj.contains(id))
    }

    /// Whether there is at least one link from `id` to this node.
    pub fn has_in_link(&self, id: u64) -> bool {
        self.in_links.as_ref().is_some_and(|adj| adj.contains(id))
    }

    /// Number of parallel links from this node to `id`.
    pub fn out_multiplicity(&self, id: u64) -> usize {
        self.out_links.as_ref().map_or(0, |adj| adj.multiplicity(id))
    }

    /// Number of parallel links from `id` to this node.
    pub fn in_multiplicity(&self, id: u64) -> usize {
        self.in_links.as_ref().map_or(0, |adj| adj.multiplicity(id))
    }

    /// Targets of outgoing links in ascending order, repeated per parallel link.
    pub fn out_neighbors(&self) -> impl Iterator<Item = u64> + '_ {
        self.out_links.iter().flat_map(|adj| adj.iter())
    }

    /// Sources of incoming links in ascending order, repeated per parallel link.
    pub fn in_neighbors(&self) -> impl Iterator<Item = u64> + '_ {
        self.in_links.iter().flat_map(|adj| adj.iter())
    }

    /// Whether no link touches this node.
    pub fn is_isolated(&self) -> bool {
        self.degree() == 0
    }

    pub(crate) fn out_adjacency(&self) -> Option<&Adjacency> {
        self.out_links.as_deref()
    }

    pub(crate) fn in_adjacency(&self) -> Option<&Adjacency> {
        self.in_links.as_deref()
    }

    pub(crate) fn add_out_link(&mut self, id: u64) {
        self.out_links.get_or_insert_with(Box::default).insert(id);
    }

    pub(crate) fn add_in_link(&mut self, id: u64) {
        self.in_links.get_or_insert_with(Box::default).insert(id);
    }
}
