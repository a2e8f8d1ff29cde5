//! Summary statistics computed through the public enumeration protocols.

use serde::Serialize;

use super::Graph;

/// Aggregate counts describing a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Number of nodes.
    pub nodes: usize,
    /// Number of links, parallel links included.
    pub links: usize,
    /// Number of distinct `(from, to)` pairs.
    pub distinct_links: usize,
    /// Links whose endpoints coincide.
    pub self_loops: usize,
    /// Nodes with no links at all.
    pub isolated_nodes: usize,
    /// Highest in-degree of any node.
    pub max_in_degree: usize,
    /// Highest out-degree of any node.
    pub max_out_degree: usize,
}

impl GraphStats {
    /// Walk the graph once and collect its statistics.
    pub fn collect(graph: &Graph) -> Self {
        let mut stats = Self {
            nodes: graph.node_count(),
            links: graph.link_count(),
            ..Self::default()
        };

        for (_, node) in graph.nodes() {
            if node.is_isolated() {
                stats.isolated_nodes += 1;
            }
            stats.max_in_degree = stats.max_in_degree.max(node.in_degree());
            stats.max_out_degree = stats.max_out_degree.max(node.out_degree());
            if let Some(adj) = node.out_adjacency() {
                stats.distinct_links += adj.distinct_len();
            }
        }

        graph.for_each_link(|_, from, to| {
            if from == to {
                stats.self_loops += 1;
            }
            true
        });

        stats
    }
}
