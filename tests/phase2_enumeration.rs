//! Phase 2 tests: node, link and linked-node enumeration.

use std::collections::{HashMap, HashSet};

use nangraph::graph::Graph;
use nangraph::types::{Direction, Link, LinkId};

// ==================== Helper ====================

/// Small graph with a parallel link, a self-loop and an isolated node.
fn sample_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_link(1, 2);
    graph.add_link(1, 2);
    graph.add_link(1, 3);
    graph.add_link(2, 3);
    graph.add_link(3, 3);
    graph.add_node(4);
    graph
}

// ==================== forEachNode ====================

#[test]
fn test_for_each_node_visits_all() {
    let graph = sample_graph();
    let mut seen = Vec::new();
    let completed = graph.for_each_node(|id| {
        seen.push(id);
        true
    });

    assert!(completed);
    seen.sort_unstable();
    assert_eq!(seen, vec![1, 2, 3, 4]);
}

#[test]
fn test_for_each_node_empty_graph() {
    let graph = Graph::new();
    let mut calls = 0;
    assert!(graph.for_each_node(|_| {
        calls += 1;
        true
    }));
    assert_eq!(calls, 0);
}

#[test]
fn test_for_each_node_stops_early() {
    let graph = sample_graph();
    let mut calls = 0;
    let completed = graph.for_each_node(|_| {
        calls += 1;
        calls < 2
    });

    assert!(!completed);
    assert_eq!(calls, 2);
}

#[test]
fn test_for_each_node_stops_on_first() {
    let graph = sample_graph();
    let mut calls = 0;
    assert!(!graph.for_each_node(|_| {
        calls += 1;
        false
    }));
    assert_eq!(calls, 1);
}

// ==================== forEachLink ====================

#[test]
fn test_for_each_link_visits_every_instance() {
    let graph = sample_graph();
    let mut seen: HashMap<(u64, u64), usize> = HashMap::new();
    let completed = graph.for_each_link(|link_id, from, to| {
        assert_eq!(link_id, LinkId::new(from, to));
        *seen.entry((from, to)).or_insert(0) += 1;
        true
    });

    assert!(completed);
    assert_eq!(seen.values().sum::<usize>(), graph.link_count());
    assert_eq!(seen[&(1, 2)], 2);
    assert_eq!(seen[&(1, 3)], 1);
    assert_eq!(seen[&(2, 3)], 1);
    assert_eq!(seen[&(3, 3)], 1);
    assert_eq!(seen.len(), 4);
}

#[test]
fn test_for_each_link_parallel_calls_identical() {
    let mut graph = Graph::new();
    graph.add_link(8, 9);
    graph.add_link(8, 9);

    let mut calls = Vec::new();
    graph.for_each_link(|link_id, from, to| {
        calls.push((link_id, from, to));
        true
    });

    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
}

#[test]
fn test_for_each_link_stops_early() {
    let graph = sample_graph();
    let mut calls = 0;
    let completed = graph.for_each_link(|_, _, _| {
        calls += 1;
        calls < 3
    });

    assert!(!completed);
    assert_eq!(calls, 3);
}

#[test]
fn test_for_each_link_no_links() {
    let mut graph = Graph::new();
    graph.add_node(1);
    graph.add_node(2);
    let mut calls = 0;
    assert!(graph.for_each_link(|_, _, _| {
        calls += 1;
        true
    }));
    assert_eq!(calls, 0);
}

#[test]
fn test_links_iterator_matches_callback() {
    let graph = sample_graph();
    let mut from_iter: Vec<Link> = graph.links().collect();
    let mut from_callback = Vec::new();
    graph.for_each_link(|_, from, to| {
        from_callback.push(Link::new(from, to));
        true
    });

    from_iter.sort_by_key(|l| l.id);
    from_callback.sort_by_key(|l| l.id);
    assert_eq!(from_iter, from_callback);
    assert_eq!(from_iter.iter().filter(|l| l.is_self_loop()).count(), 1);
}

// ==================== forEachLinkedNode ====================

#[test]
fn test_linked_nodes_outgoing_repeats_parallel() {
    let mut graph = Graph::new();
    for _ in 0..3 {
        graph.add_link(1, 2);
    }
    graph.add_link(1, 5);

    let mut visits = Vec::new();
    let completed = graph.for_each_linked_node(1, Direction::Outgoing, |from, neighbor| {
        assert_eq!(from, 1);
        visits.push(neighbor);
        true
    });

    assert!(completed);
    assert_eq!(visits.iter().filter(|&&n| n == 2).count(), 3);
    assert_eq!(visits.iter().filter(|&&n| n == 5).count(), 1);
}

#[test]
fn test_linked_nodes_incoming() {
    let graph = sample_graph();
    let incoming: Vec<u64> = graph.linked_nodes(3, Direction::Incoming).collect();
    assert_eq!(incoming, vec![1, 2, 3]);

    let incoming: Vec<u64> = graph.linked_nodes(2, Direction::Incoming).collect();
    assert_eq!(incoming, vec![1, 1]);
}

#[test]
fn test_linked_nodes_unknown_or_empty_is_noop() {
    let graph = sample_graph();
    let mut calls = 0;

    assert!(graph.for_each_linked_node(99, Direction::Outgoing, |_, _| {
        calls += 1;
        false
    }));
    assert!(graph.for_each_linked_node(4, Direction::Incoming, |_, _| {
        calls += 1;
        false
    }));
    // node 1 has no incoming links
    assert!(graph.for_each_linked_node(1, Direction::Incoming, |_, _| {
        calls += 1;
        false
    }));
    assert_eq!(calls, 0);
}

#[test]
fn test_linked_nodes_stops_early() {
    let mut graph = Graph::new();
    for to in 10..20 {
        graph.add_link(1, to);
    }

    let mut visits = Vec::new();
    let completed = graph.for_each_linked_node(1, Direction::Outgoing, |_, neighbor| {
        visits.push(neighbor);
        visits.len() < 4
    });

    assert!(!completed);
    assert_eq!(visits, vec![10, 11, 12, 13]);
}

#[test]
fn test_linked_nodes_consistent_with_has_link() {
    let graph = sample_graph();
    let out: HashSet<u64> = graph.linked_nodes(1, Direction::Outgoing).collect();
    for id in graph.node_ids() {
        assert_eq!(out.contains(&id), graph.has_link(1, id));
    }
}

#[test]
fn test_iterators_are_restartable() {
    let graph = sample_graph();
    assert_eq!(graph.links().count(), graph.links().count());
    assert_eq!(
        graph.linked_nodes(1, Direction::Outgoing).collect::<Vec<_>>(),
        graph.linked_nodes(1, Direction::Outgoing).collect::<Vec<_>>()
    );
    let mut first: Vec<u64> = graph.node_ids().collect();
    let mut second: Vec<u64> = graph.node_ids().collect();
    first.sort_unstable();
    second.sort_unstable();
    assert_eq!(first, second);
}

#[test]
fn test_randomized_counts() {
    use rand::Rng;

    let mut rng = rand::thread_rng();
    let mut graph = Graph::new();
    let mut expected: HashMap<(u64, u64), usize> = HashMap::new();

    for _ in 0..500 {
        let from = rng.gen_range(0..40u64);
        let to = rng.gen_range(0..40u64);
        graph.add_link(from, to);
        *expected.entry((from, to)).or_insert(0) += 1;
    }

    assert_eq!(graph.link_count(), 500);
    for (&(from, to), &count) in &expected {
        assert!(graph.has_link(from, to));
        let visits = graph
            .linked_nodes(from, Direction::Outgoing)
            .filter(|&n| n == to)
            .count();
        assert_eq!(visits, count);
        assert_eq!(graph.get_node(to).unwrap().in_multiplicity(from), count);
    }
}
