//! Link identity and the link value yielded by enumeration.

use serde::Serialize;

/// Deterministic identifier of a directed link `(from, to)`.
///
/// The encoding is the 128-bit concatenation `from << 64 | to`. It is
/// order-sensitive and collision-free over the whole `u64` id space, so two
/// link ids are equal exactly when both endpoints are equal. Parallel links
/// between the same pair share one id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LinkId(u128);

impl LinkId {
    /// Combine two endpoint ids. Pure; neither node needs to exist.
    pub const fn new(from_id: u64, to_id: u64) -> Self {
        Self(((from_id as u128) << 64) | to_id as u128)
    }

    /// The raw 128-bit value.
    pub const fn as_u128(&self) -> u128 {
        self.0
    }

    /// Source endpoint encoded in this id.
    pub const fn from_id(&self) -> u64 {
        (self.0 >> 64) as u64
    }

    /// Target endpoint encoded in this id.
    pub const fn to_id(&self) -> u64 {
        self.0 as u64
    }
}

impl std::fmt::Display for LinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

/// One link instance as seen by link enumeration.
///
/// Not stored anywhere: the graph reconstructs these from out-adjacency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Identity of the link.
    pub id: LinkId,
    /// Source node ID.
    pub from: u64,
    /// Target node ID.
    pub to: u64,
}

impl Link {
    /// Create a link value for a pair of endpoints.
    pub fn new(from: u64, to: u64) -> Self {
        Self {
            id: LinkId::new(from, to),
            from,
            to,
        }
    }

    /// Whether both endpoints are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Which adjacency of a node to walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Follow outgoing links (node -> neighbor).
    Outgoing,
    /// Follow incoming links (neighbor -> node).
    Incoming,
}

impl Direction {
    /// Map the conventional `is_out` flag onto a direction.
    pub fn from_is_out(is_out: bool) -> Self {
        if is_out {
            Self::Outgoing
        } else {
            Self::Incoming
        }
    }

    /// Return a human-readable name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Outgoing => "outgoing",
            Self::Incoming => "incoming",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
