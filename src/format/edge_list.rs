//! Reads plain-text edge lists into an in-memory graph.
//!
//! One link per line as two whitespace-separated node IDs (`from to`). A line
//! with a single ID declares an isolated node. Blank lines are skipped and
//! everything after `#` is a comment.

use std::io::BufRead;
use std::path::Path;

use crate::graph::Graph;
use crate::types::error::{GraphError, GraphResult};
use crate::types::COMMENT_MARKER;

/// One meaningful line of an edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeListEntry {
    /// A node with no links on this line.
    Node(u64),
    /// A directed link.
    Link(u64, u64),
}

/// Reader for edge-list text files.
pub struct EdgeListReader;

impl EdgeListReader {
    /// Read an edge-list file into a Graph.
    pub fn read_from_file(path: &Path) -> GraphResult<Graph> {
        let file = std::fs::File::open(path)?;
        let mut reader = std::io::BufReader::new(file);
        let graph = Self::read_from(&mut reader)?;
        log::debug!(
            "loaded {}: {} nodes, {} links",
            path.display(),
            graph.node_count(),
            graph.link_count()
        );
        Ok(graph)
    }

    /// Read from any buffered reader into a Graph.
    pub fn read_from(reader: &mut impl BufRead) -> GraphResult<Graph> {
        let mut graph = Graph::new();
        let mut line = String::new();
        let mut line_no = 0;

        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            line_no += 1;

            match parse_line(&line, line_no)? {
                Some(EdgeListEntry::Node(id)) => {
                    graph.add_node(id);
                }
                Some(EdgeListEntry::Link(from_id, to_id)) => {
                    graph.add_link(from_id, to_id);
                }
                None => {}
            }
        }

        Ok(graph)
    }
}

/// Parse a single line. Returns `None` for blank and comment-only lines.
pub fn parse_line(line: &str, line_no: usize) -> GraphResult<Option<EdgeListEntry>> {
    let content = match line.find(COMMENT_MARKER) {
        Some(pos) => &line[..pos],
        None => line,
    };

    let mut fields = content.split_whitespace();
    let first = match fields.next() {
        Some(field) => parse_id(field, line_no)?,
        None => return Ok(None),
    };
    let second = match fields.next() {
        Some(field) => parse_id(field, line_no)?,
        None => return Ok(Some(EdgeListEntry::Node(first))),
    };

    if let Some(extra) = fields.next() {
        return Err(GraphError::Parse {
            line: line_no,
            message: format!("unexpected trailing field {:?}", extra),
        });
    }

    Ok(Some(EdgeListEntry::Link(first, second)))
}

fn parse_id(field: &str, line_no: usize) -> GraphResult<u64> {
    field.parse::<u64>().map_err(|e| GraphError::Parse {
        line: line_no,
        message: format!("invalid node ID {:?}: {}", field, e),
    })
}
