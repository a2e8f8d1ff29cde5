//! In-memory graph operations — the core data structure.

pub mod adjacency;
pub mod builder;
pub mod multigraph;
pub mod node;
pub mod stats;

pub use adjacency::Adjacency;
pub use builder::GraphBuilder;
pub use multigraph::Graph;
pub use node::Node;
pub use stats::GraphStats;
