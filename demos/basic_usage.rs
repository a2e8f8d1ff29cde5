//! Basic build -> query -> enumerate flow.

use nangraph::*;

fn main() {
    let mut graph = Graph::new();

    graph.add_node(1);
    graph.add_node(2);
    let first = graph.add_link(1, 2);
    let second = graph.add_link(1, 2);
    graph.add_link(2, 3);
    graph.add_link(3, 3);

    println!(
        "Graph has {} nodes and {} links",
        graph.node_count(),
        graph.link_count()
    );
    println!(
        "Parallel links share an id: {} == {} -> {}",
        first,
        second,
        first == second
    );

    if let Some(node) = graph.get_node(1) {
        println!(
            "Node 1: out-degree {}, in-degree {}",
            node.out_degree(),
            node.in_degree()
        );
    }

    println!("Links:");
    graph.for_each_link(|link_id, from, to| {
        println!("  {} -> {} ({})", from, to, link_id);
        true
    });

    // Stop after the first incoming neighbor of node 3
    let completed = graph.for_each_linked_node(3, Direction::Incoming, |node, neighbor| {
        println!("First incoming neighbor of {}: {}", node, neighbor);
        false
    });
    println!("Enumeration completed: {}", completed);

    let stats = GraphStats::collect(&graph);
    println!("Self-loops: {}", stats.self_loops);
}
