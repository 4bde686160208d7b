//! Edge direction and directedness markers.

use serde::{Deserialize, Serialize};

/// Selects which incident edges of a node to walk.
///
/// For a node `a`, `Outgoing` edges are those whose source is `a` and
/// `Incoming` edges are those whose target is `a`. Undirected graphs report
/// every edge in both directions, oriented so that the convention still holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(usize)]
pub enum Direction {
    /// Edges leaving the node.
    Outgoing = 0,
    /// Edges entering the node.
    Incoming = 1,
}

impl Direction {
    /// Returns the other direction.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Outgoing => Direction::Incoming,
            Direction::Incoming => Direction::Outgoing,
        }
    }

    /// Returns `0` for `Outgoing` and `1` for `Incoming`.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

pub use Direction::{Incoming, Outgoing};

/// Marker trait for graph edge directionality.
pub trait EdgeType {
    /// Returns true if the graph is directed.
    fn is_directed() -> bool;
}

/// Marker for directed graphs.
#[derive(Copy, Clone, Debug, Default)]
pub struct Directed;

/// Marker for undirected graphs.
#[derive(Copy, Clone, Debug, Default)]
pub struct Undirected;

impl EdgeType for Directed {
    #[inline]
    fn is_directed() -> bool {
        true
    }
}

impl EdgeType for Undirected {
    #[inline]
    fn is_directed() -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        assert_eq!(Outgoing.opposite(), Incoming);
        assert_eq!(Incoming.opposite(), Outgoing);
        assert_eq!(Outgoing.opposite().opposite(), Outgoing);
    }

    #[test]
    fn test_index() {
        assert_eq!(Outgoing.index(), 0);
        assert_eq!(Incoming.index(), 1);
    }

    #[test]
    fn test_edge_type_markers() {
        assert!(Directed::is_directed());
        assert!(!Undirected::is_directed());
    }

    #[test]
    fn test_direction_serde() {
        let json = serde_json::to_string(&Incoming).unwrap();
        assert_eq!(json, "\"Incoming\"");
        let back: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Incoming);
    }
}
