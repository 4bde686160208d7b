//! Iteration capabilities: neighbors, edges and nodes.
//!
//! These traits take `self` by value and are implemented for cheap graph
//! handles (`&G`, adaptors over `&G`). Every returned iterator is lazy and
//! finite, and borrows the graph rather than copying it.

use crate::direction::Direction;
use crate::visit::traits::{Data, GraphRef};

/// A transient reference to a node and its data.
pub trait NodeRef: Copy {
    /// Node identifier type.
    type NodeId;
    /// Node data type.
    type Weight;
    /// The node identifier.
    fn id(&self) -> Self::NodeId;
    /// The node data.
    fn weight(&self) -> &Self::Weight;
}

impl<'a, Id: Copy, W> NodeRef for (Id, &'a W) {
    type NodeId = Id;
    type Weight = W;

    #[inline]
    fn id(&self) -> Id {
        self.0
    }

    #[inline]
    fn weight(&self) -> &W {
        self.1
    }
}

/// A transient `(source, target, weight)` reference produced during edge
/// iteration.
pub trait EdgeRef: Copy {
    /// Node identifier type.
    type NodeId;
    /// Edge identifier type.
    type EdgeId;
    /// Edge data type.
    type Weight;
    /// The source node.
    fn source(&self) -> Self::NodeId;
    /// The target node.
    fn target(&self) -> Self::NodeId;
    /// The edge data.
    fn weight(&self) -> &Self::Weight;
    /// The edge identifier.
    fn id(&self) -> Self::EdgeId;
}

/// Plain triples carry no edge identifier.
impl<'a, N: Copy, E> EdgeRef for (N, N, &'a E) {
    type NodeId = N;
    type EdgeId = ();
    type Weight = E;

    #[inline]
    fn source(&self) -> N {
        self.0
    }

    #[inline]
    fn target(&self) -> N {
        self.1
    }

    #[inline]
    fn weight(&self) -> &E {
        self.2
    }

    #[inline]
    fn id(&self) {}
}

/// Enumerates the neighbors of a node.
///
/// For directed graphs these are the outgoing neighbors; undirected graphs
/// report every adjacent node.
pub trait IntoNeighbors: GraphRef {
    /// Neighbor iterator.
    type Neighbors: Iterator<Item = Self::NodeId>;
    /// Returns the neighbors of `a`, in the graph's native order.
    fn neighbors(self, a: Self::NodeId) -> Self::Neighbors;
}

/// Enumerates the neighbors of a node in a chosen direction.
///
/// Undirected graphs treat both directions alike.
pub trait IntoNeighborsDirected: IntoNeighbors {
    /// Directed neighbor iterator.
    type NeighborsDirected: Iterator<Item = Self::NodeId>;
    /// Returns the neighbors of `n` reached by following edges in `d`.
    fn neighbors_directed(self, n: Self::NodeId, d: Direction) -> Self::NeighborsDirected;
}

/// Enumerates every edge of the graph.
pub trait IntoEdgeReferences: Data + GraphRef {
    /// Edge reference type.
    type EdgeRef: EdgeRef<NodeId = Self::NodeId, EdgeId = Self::EdgeId, Weight = Self::EdgeWeight>;
    /// Edge reference iterator.
    type EdgeReferences: Iterator<Item = Self::EdgeRef>;
    /// Returns all edges of the graph.
    fn edge_references(self) -> Self::EdgeReferences;
}

/// Enumerates the edges of a node.
pub trait IntoEdges: IntoEdgeReferences + IntoNeighbors {
    /// Edge iterator.
    type Edges: Iterator<Item = Self::EdgeRef>;
    /// Returns the edges whose source is `a`.
    ///
    /// Undirected graphs orient every incident edge so that `a` is the source.
    fn edges(self, a: Self::NodeId) -> Self::Edges;
}

/// Enumerates the edges of a node in a chosen direction.
pub trait IntoEdgesDirected: IntoEdges + IntoNeighborsDirected {
    /// Directed edge iterator.
    type EdgesDirected: Iterator<Item = Self::EdgeRef>;
    /// `Outgoing` yields edges whose source is `a`; `Incoming` yields edges
    /// whose target is `a`.
    fn edges_directed(self, a: Self::NodeId, dir: Direction) -> Self::EdgesDirected;
}

/// Enumerates every node identifier.
pub trait IntoNodeIdentifiers: GraphRef {
    /// Node identifier iterator.
    type NodeIdentifiers: Iterator<Item = Self::NodeId>;
    /// Returns all node identifiers.
    fn node_identifiers(self) -> Self::NodeIdentifiers;
}

/// Enumerates every node paired with its data.
pub trait IntoNodeReferences: Data + IntoNodeIdentifiers {
    /// Node reference type.
    type NodeRef: NodeRef<NodeId = Self::NodeId, Weight = Self::NodeWeight>;
    /// Node reference iterator.
    type NodeReferences: Iterator<Item = Self::NodeRef>;
    /// Returns all nodes with their data.
    fn node_references(self) -> Self::NodeReferences;
}
