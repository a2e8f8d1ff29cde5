//! Fluent API for building Graph instances.

use super::Graph;

/// Fluent builder for constructing a Graph.
pub struct GraphBuilder {
    nodes: Vec<u64>,
    links: Vec<(u64, u64)>,
    capacity: usize,
}

impl GraphBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            links: Vec::new(),
            capacity: 0,
        }
    }

    /// Create a builder that preallocates room for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Vec::new(),
            links: Vec::new(),
            capacity: nodes,
        }
    }

    /// Declare a node, which may stay isolated.
    pub fn node(&mut self, id: u64) -> &mut Self {
        self.nodes.push(id);
        self
    }

    /// Add a link between two nodes.
    pub fn link(&mut self, from_id: u64, to_id: u64) -> &mut Self {
        self.links.push((from_id, to_id));
        self
    }

    /// Add several links at once.
    pub fn links(&mut self, links: impl IntoIterator<Item = (u64, u64)>) -> &mut Self {
        self.links.extend(links);
        self
    }

    /// Build the final Graph. Nodes are added before links.
    pub fn build(&self) -> Graph {
        let mut graph = Graph::with_capacity(self.capacity.max(self.nodes.len()));
        for &id in &self.nodes {
            graph.add_node(id);
        }
        graph.extend(self.links.iter().copied());
        log::debug!(
            "built graph with {} nodes and {} links",
            graph.node_count(),
            graph.link_count()
        );
        graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
