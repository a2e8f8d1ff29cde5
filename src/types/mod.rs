//! All data types for the nangraph library.

pub mod error;
pub mod link;

pub use error::{GraphError, GraphResult};
pub use link::{Direction, Link, LinkId};

/// Marker that starts a comment in edge-list input.
pub const COMMENT_MARKER: char = '#';
