//! Core capability traits: identity, data, counts, indexing, properties.
//!
//! A graph type opts into exactly the capabilities it can honestly support.
//! Every trait here is forwarded through shared references, so algorithms can
//! take `&G` and still see the capabilities of `G`.

use crate::direction::EdgeType;
use crate::visit::visited::VisitMap;

/// Base trait: the node and edge identifier types of a graph.
pub trait GraphBase {
    /// Identifies a node. Cheap to copy and compare.
    type NodeId: Copy + PartialEq;
    /// Identifies an edge. Cheap to copy and compare.
    type EdgeId: Copy + PartialEq;
}

/// A copyable handle to a graph, typically `&G` or an adaptor over `&G`.
///
/// The `Into*` capability traits consume `self`, so they are implemented for
/// these lightweight handles rather than for the owning graph type.
pub trait GraphRef: Copy + GraphBase {}

impl<'a, G: GraphBase + ?Sized> GraphBase for &'a G {
    type NodeId = G::NodeId;
    type EdgeId = G::EdgeId;
}

impl<'a, G: GraphBase + ?Sized> GraphRef for &'a G {}

/// Associates node-data and edge-data types with a graph.
pub trait Data: GraphBase {
    /// Data attached to each node.
    type NodeWeight;
    /// Data attached to each edge.
    type EdgeWeight;
}

impl<'a, G: Data + ?Sized> Data for &'a G {
    type NodeWeight = G::NodeWeight;
    type EdgeWeight = G::EdgeWeight;
}

/// Direct lookup of node and edge data by identifier.
pub trait DataMap: Data {
    /// Returns the data of `id`, or `None` if the node is absent.
    fn node_weight(&self, id: Self::NodeId) -> Option<&Self::NodeWeight>;
    /// Returns the data of `id`, or `None` if the edge is absent.
    fn edge_weight(&self, id: Self::EdgeId) -> Option<&Self::EdgeWeight>;
}

impl<'a, G: DataMap + ?Sized> DataMap for &'a G {
    fn node_weight(&self, id: Self::NodeId) -> Option<&Self::NodeWeight> {
        (**self).node_weight(id)
    }

    fn edge_weight(&self, id: Self::EdgeId) -> Option<&Self::EdgeWeight> {
        (**self).edge_weight(id)
    }
}

/// Looks up the endpoints of an edge by identifier.
pub trait EdgeEndpoints: GraphBase {
    /// Returns `(source, target)` of `id`, or `None` if the edge is absent.
    fn edge_endpoints(&self, id: Self::EdgeId) -> Option<(Self::NodeId, Self::NodeId)>;
}

impl<'a, G: EdgeEndpoints + ?Sized> EdgeEndpoints for &'a G {
    fn edge_endpoints(&self, id: Self::EdgeId) -> Option<(Self::NodeId, Self::NodeId)> {
        (**self).edge_endpoints(id)
    }
}

/// Reports the number of nodes.
pub trait NodeCount: GraphBase {
    /// Number of nodes.
    fn node_count(&self) -> usize;
}

impl<'a, G: NodeCount + ?Sized> NodeCount for &'a G {
    fn node_count(&self) -> usize {
        (**self).node_count()
    }
}

/// Reports the number of edges.
pub trait EdgeCount: GraphBase {
    /// Number of edges.
    fn edge_count(&self) -> usize;
}

impl<'a, G: EdgeCount + ?Sized> EdgeCount for &'a G {
    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }
}

/// Maps node identifiers to dense integer indices in `[0, node_bound)`.
///
/// Graphs whose identifiers cannot be mapped this way (arbitrary keys) must
/// not implement this trait; algorithms that require it are then unavailable.
pub trait NodeIndexable: GraphBase {
    /// Exclusive upper bound of every index returned by `to_index`.
    fn node_bound(&self) -> usize;
    /// Converts a node identifier to its index.
    fn to_index(&self, a: Self::NodeId) -> usize;
    /// Converts an index back into a node identifier.
    ///
    /// # Panics
    /// May panic if `i` was not produced by `to_index`.
    fn from_index(&self, i: usize) -> Self::NodeId;
}

impl<'a, G: NodeIndexable + ?Sized> NodeIndexable for &'a G {
    fn node_bound(&self) -> usize {
        (**self).node_bound()
    }

    fn to_index(&self, a: Self::NodeId) -> usize {
        (**self).to_index(a)
    }

    fn from_index(&self, i: usize) -> Self::NodeId {
        (**self).from_index(i)
    }
}

/// Maps edge identifiers to dense integer indices in `[0, edge_bound)`.
pub trait EdgeIndexable: GraphBase {
    /// Exclusive upper bound of every index returned by `to_index`.
    fn edge_bound(&self) -> usize;
    /// Converts an edge identifier to its index.
    fn to_index(&self, a: Self::EdgeId) -> usize;
    /// Converts an index back into an edge identifier.
    ///
    /// # Panics
    /// May panic if `i` was not produced by `to_index`.
    fn from_index(&self, i: usize) -> Self::EdgeId;
}

impl<'a, G: EdgeIndexable + ?Sized> EdgeIndexable for &'a G {
    fn edge_bound(&self) -> usize {
        (**self).edge_bound()
    }

    fn to_index(&self, a: Self::EdgeId) -> usize {
        (**self).to_index(a)
    }

    fn from_index(&self, i: usize) -> Self::EdgeId {
        (**self).from_index(i)
    }
}

/// Marker: node indices are exactly `0..node_count()`, with no holes.
///
/// Implementors guarantee `node_bound() == node_count()`, which lets
/// algorithms pre-size arrays without wasting slots.
pub trait NodeCompactIndexable: NodeIndexable + NodeCount {}

impl<'a, G: NodeCompactIndexable + ?Sized> NodeCompactIndexable for &'a G {}

/// Reports whether edges are directed.
pub trait GraphProp: GraphBase {
    /// `Directed` or `Undirected`.
    type EdgeType: EdgeType;

    /// Returns `true` if the graph's edges are directed.
    fn is_directed(&self) -> bool {
        <Self::EdgeType as EdgeType>::is_directed()
    }
}

impl<'a, G: GraphProp + ?Sized> GraphProp for &'a G {
    type EdgeType = G::EdgeType;
}

/// Builds a matrix for O(1) edge-existence queries.
///
/// Construction is a potentially expensive precomputation; build it once and
/// reuse it across `is_adjacent` calls.
pub trait GetAdjacencyMatrix: GraphBase {
    /// The matrix representation.
    type AdjMatrix;

    /// Builds the adjacency matrix.
    fn adjacency_matrix(&self) -> Self::AdjMatrix;

    /// Returns `true` if an edge `a -> b` exists according to `matrix`.
    fn is_adjacent(&self, matrix: &Self::AdjMatrix, a: Self::NodeId, b: Self::NodeId) -> bool;
}

impl<'a, G: GetAdjacencyMatrix + ?Sized> GetAdjacencyMatrix for &'a G {
    type AdjMatrix = G::AdjMatrix;

    fn adjacency_matrix(&self) -> Self::AdjMatrix {
        (**self).adjacency_matrix()
    }

    fn is_adjacent(&self, matrix: &Self::AdjMatrix, a: Self::NodeId, b: Self::NodeId) -> bool {
        (**self).is_adjacent(matrix, a, b)
    }
}

/// Factory for correctly-sized visit maps.
pub trait Visitable: GraphBase {
    /// The visit map type used by traversals of this graph.
    type Map: VisitMap<Self::NodeId>;

    /// Creates a fresh, empty visit map.
    fn visit_map(&self) -> Self::Map;

    /// Clears `map` and resizes it to fit the graph's current nodes.
    fn reset_map(&self, map: &mut Self::Map);
}

impl<'a, G: Visitable + ?Sized> Visitable for &'a G {
    type Map = G::Map;

    fn visit_map(&self) -> Self::Map {
        (**self).visit_map()
    }

    fn reset_map(&self, map: &mut Self::Map) {
        (**self).reset_map(map);
    }
}
