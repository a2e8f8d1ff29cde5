//! CLI command implementations.

use std::path::Path;

use crate::format::EdgeListReader;
use crate::graph::GraphStats;
use crate::types::{Direction, GraphError, GraphResult, Link};

/// Print summary statistics for an edge-list file.
pub fn cmd_stats(path: &Path, json: bool) -> GraphResult<()> {
    let graph = EdgeListReader::read_from_file(path)?;
    let stats = GraphStats::collect(&graph);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Nodes: {}", stats.nodes);
        println!("Links: {}", stats.links);
        println!("Distinct links: {}", stats.distinct_links);
        println!("Self-loops: {}", stats.self_loops);
        println!("Isolated nodes: {}", stats.isolated_nodes);
        println!("Max in-degree: {}", stats.max_in_degree);
        println!("Max out-degree: {}", stats.max_out_degree);
    }
    Ok(())
}

/// Show the degrees of a single node.
pub fn cmd_node(path: &Path, node_id: u64, json: bool) -> GraphResult<()> {
    let graph = EdgeListReader::read_from_file(path)?;
    let node = graph
        .get_node(node_id)
        .ok_or(GraphError::NodeNotFound(node_id))?;

    if json {
        let info = serde_json::json!({
            "id": node_id,
            "degree": node.degree(),
            "in_degree": node.in_degree(),
            "out_degree": node.out_degree(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Node {}", node_id);
        println!("  Degree: {}", node.degree());
        println!("  In-degree: {}", node.in_degree());
        println!("  Out-degree: {}", node.out_degree());
    }
    Ok(())
}

/// List the nodes linked to `node_id` in one direction.
pub fn cmd_neighbors(
    path: &Path,
    node_id: u64,
    direction: Direction,
    json: bool,
) -> GraphResult<()> {
    let graph = EdgeListReader::read_from_file(path)?;
    if !graph.contains_node(node_id) {
        return Err(GraphError::NodeNotFound(node_id));
    }

    let mut neighbors = Vec::new();
    graph.for_each_linked_node(node_id, direction, |_, neighbor| {
        neighbors.push(neighbor);
        true
    });

    if json {
        let info = serde_json::json!({
            "id": node_id,
            "direction": direction,
            "neighbors": neighbors,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("{} neighbors of node {}: {}", direction, node_id, neighbors.len());
        for neighbor in &neighbors {
            println!("  {}", neighbor);
        }
    }
    Ok(())
}

/// Check whether a link exists.
pub fn cmd_has_link(path: &Path, from_id: u64, to_id: u64, json: bool) -> GraphResult<()> {
    let graph = EdgeListReader::read_from_file(path)?;
    let exists = graph.has_link(from_id, to_id);
    let link_id = graph.link_id(from_id, to_id);
    let multiplicity = graph
        .get_node(from_id)
        .map_or(0, |node| node.out_multiplicity(to_id));

    if json {
        println!(
            "{}",
            serde_json::json!({
                "from": from_id,
                "to": to_id,
                "link_id": link_id.to_string(),
                "exists": exists,
                "multiplicity": multiplicity,
            })
        );
    } else if exists {
        println!(
            "Link {} -> {} exists ({} parallel), id {}",
            from_id, to_id, multiplicity, link_id
        );
    } else {
        println!("No link {} -> {} (id would be {})", from_id, to_id, link_id);
    }
    Ok(())
}

/// Enumerate links, stopping after `limit` of them when given.
pub fn cmd_links(path: &Path, limit: Option<usize>, json: bool) -> GraphResult<()> {
    let graph = EdgeListReader::read_from_file(path)?;
    let limit = limit.unwrap_or(usize::MAX);

    let mut links: Vec<Link> = Vec::new();
    let completed = graph.for_each_link(|_, from, to| {
        if links.len() >= limit {
            return false;
        }
        links.push(Link::new(from, to));
        true
    });

    if json {
        let rows: Vec<serde_json::Value> = links
            .iter()
            .map(|link| {
                serde_json::json!({
                    "link_id": link.id.to_string(),
                    "from": link.from,
                    "to": link.to,
                })
            })
            .collect();
        let info = serde_json::json!({
            "total": graph.link_count(),
            "truncated": !completed,
            "links": rows,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        for link in &links {
            println!("{} {} {}", link.id, link.from, link.to);
        }
        if !completed {
            println!("... {} of {} links shown", links.len(), graph.link_count());
        }
    }
    Ok(())
}
