//! Error types for the nangraph library.

use thiserror::Error;

/// Errors raised by the fallible surfaces around the graph (edge-list input, CLI queries).
///
/// The graph container itself never fails: absent ids yield `None`, `false` or a no-op.
#[derive(Error, Debug)]
pub enum GraphError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed edge-list line (1-based line number).
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Node not found by ID.
    #[error("Node ID {0} not found")]
    NodeNotFound(u64),
}

/// Convenience result type for nangraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
