//! Core graph structure — node map, link counter and enumeration protocols.

use std::collections::HashMap;

use crate::types::{Direction, Link, LinkId};

use super::node::Node;

/// In-memory directed multigraph keyed by caller-chosen node IDs.
///
/// Links are not stored as entities: a link `from -> to` is the presence of
/// `to` in the out-adjacency of `from` and of `from` in the in-adjacency of
/// `to`. Both sides are always updated together.
///
/// Enumeration borrows the graph immutably, so the borrow checker rules out
/// mutating the graph from inside an enumeration callback.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// All nodes, indexed by ID.
    nodes: HashMap<u64, Node>,
    /// Running total of added links, parallel links included.
    links_count: usize,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `nodes` nodes before reallocating.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: HashMap::with_capacity(nodes),
            links_count: 0,
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of links added so far. Each parallel link counts.
    pub fn link_count(&self) -> usize {
        self.links_count
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether a node with this ID exists.
    pub fn contains_node(&self, id: u64) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Add a node, or return the existing one. Never creates duplicates.
    pub fn add_node(&mut self, id: u64) -> &Node {
        self.node_entry(id)
    }

    /// Get a node by ID.
    pub fn get_node(&self, id: u64) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Add a link from `from_id` to `to_id`, creating missing endpoints.
    ///
    /// Parallel links and self-loops are allowed; every call counts as one
    /// more link. Returns the same ID as [`Graph::link_id`].
    pub fn add_link(&mut self, from_id: u64, to_id: u64) -> LinkId {
        self.node_entry(to_id);
        self.node_entry(from_id).add_out_link(to_id);
        self.node_entry(to_id).add_in_link(from_id);
        self.links_count += 1;

        let link_id = LinkId::new(from_id, to_id);
        log::trace!("added link {} -> {} ({})", from_id, to_id, link_id);
        link_id
    }

    /// Identity of the link `from_id -> to_id`. Pure; neither node has to exist.
    pub fn link_id(&self, from_id: u64, to_id: u64) -> LinkId {
        LinkId::new(from_id, to_id)
    }

    /// Whether at least one link `from_id -> to_id` exists.
    pub fn has_link(&self, from_id: u64, to_id: u64) -> bool {
        self.nodes
            .get(&from_id)
            .is_some_and(|node| node.has_out_link(to_id))
    }

    /// Iterate node IDs in unspecified order.
    pub fn node_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.nodes.keys().copied()
    }

    /// Iterate `(id, node)` pairs in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = (u64, &Node)> + '_ {
        self.nodes.iter().map(|(&id, node)| (id, node))
    }

    /// Iterate every link instance exactly once.
    ///
    /// Outer order follows the node map (unspecified); within a node, targets
    /// come in ascending order with parallel links repeated.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        self.nodes.iter().flat_map(|(&from, node)| {
            node.out_adjacency()
                .into_iter()
                .flat_map(|adj| adj.iter())
                .map(move |to| Link::new(from, to))
        })
    }

    /// Iterate the neighbors of `id` in the given direction, repeated per parallel link.
    ///
    /// An unknown node, or one with no links in that direction, yields nothing.
    pub fn linked_nodes(&self, id: u64, direction: Direction) -> impl Iterator<Item = u64> + '_ {
        self.nodes
            .get(&id)
            .and_then(|node| match direction {
                Direction::Outgoing => node.out_adjacency(),
                Direction::Incoming => node.in_adjacency(),
            })
            .into_iter()
            .flat_map(|adj| adj.iter())
    }

    /// Call `callback(node_id)` for each node until it returns `false`.
    ///
    /// Returns `false` if enumeration was stopped early, `true` otherwise.
    pub fn for_each_node<F>(&self, callback: F) -> bool
    where
        F: FnMut(u64) -> bool,
    {
        self.node_ids().all(callback)
    }

    /// Call `callback(link_id, from_id, to_id)` for each link instance until it returns `false`.
    ///
    /// Parallel links produce separate calls with identical arguments.
    /// Returns `false` if enumeration was stopped early, `true` otherwise.
    pub fn for_each_link<F>(&self, mut callback: F) -> bool
    where
        F: FnMut(LinkId, u64, u64) -> bool,
    {
        self.links().all(|link| callback(link.id, link.from, link.to))
    }

    /// Call `callback(id, neighbor_id)` for each neighbor of `id` until it returns `false`.
    ///
    /// An unknown node or an empty adjacency is a no-op returning `true`.
    pub fn for_each_linked_node<F>(&self, id: u64, direction: Direction, mut callback: F) -> bool
    where
        F: FnMut(u64, u64) -> bool,
    {
        self.linked_nodes(id, direction)
            .all(|neighbor| callback(id, neighbor))
    }

    /// Get or create the node for `id`.
    fn node_entry(&mut self, id: u64) -> &mut Node {
        self.nodes.entry(id).or_insert_with(|| {
            log::trace!("created node {}", id);
            Node::new()
        })
    }
}

impl Extend<(u64, u64)> for Graph {
    fn extend<T: IntoIterator<Item = (u64, u64)>>(&mut self, links: T) {
        for (from_id, to_id) in links {
            self.add_link(from_id, to_id);
        }
    }
}

impl FromIterator<(u64, u64)> for Graph {
    fn from_iter<T: IntoIterator<Item = (u64, u64)>>(links: T) -> Self {
        let mut graph = Graph::new();
        graph.extend(links);
        graph
    }
}
