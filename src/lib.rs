//! nangraph — minimal in-memory directed multigraph.
//!
//! Maps caller-chosen `u64` node IDs to nodes that track incoming and outgoing
//! adjacency as lazily allocated multisets. Links are identified by a pure
//! function of their endpoints and enumerated through short-circuiting
//! callbacks or plain iterators.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{EdgeListEntry, EdgeListReader};
pub use graph::{Adjacency, Graph, GraphBuilder, GraphStats, Node};
pub use types::{Direction, GraphError, GraphResult, Link, LinkId};
