//! Text input adapters that populate a graph.

pub mod edge_list;

pub use edge_list::{parse_line, EdgeListEntry, EdgeListReader};
