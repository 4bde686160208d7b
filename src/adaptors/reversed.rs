//! Edge-reversing adaptor.

use crate::direction::{Direction, Incoming};
use crate::visit::{
    Data, DataMap, EdgeCount, EdgeEndpoints, EdgeIndexable, EdgeRef, GetAdjacencyMatrix,
    GraphBase, GraphProp, GraphRef, IntoEdgeReferences, IntoEdges, IntoEdgesDirected,
    IntoNeighbors, IntoNeighborsDirected, IntoNodeIdentifiers, IntoNodeReferences,
    NodeCompactIndexable, NodeCount, NodeIndexable, Visitable,
};

/// A view of `G` with every edge reversed.
///
/// Sources and targets swap in every edge reference, and every `Direction`
/// argument is flipped before it reaches the inner graph. Node identity,
/// counts, indices, data and visit maps pass through unchanged.
/// `Reversed(Reversed(g))` behaves exactly like `g`.
///
/// ```
/// use halo_visit::adaptors::Reversed;
/// use halo_visit::graph::CsrGraph;
/// use halo_visit::visit::IntoNeighbors;
///
/// let g = CsrGraph::from_adjacency(&[vec![1], vec![2], vec![]]);
/// assert_eq!(Reversed(&g).neighbors(2).collect::<Vec<_>>(), vec![1]);
/// assert_eq!(Reversed(&g).neighbors(0).count(), 0);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Reversed<G>(pub G);

impl<G: GraphBase> GraphBase for Reversed<G> {
    type NodeId = G::NodeId;
    type EdgeId = G::EdgeId;
}

impl<G: GraphRef> GraphRef for Reversed<G> {}

impl<G: Data> Data for Reversed<G> {
    type NodeWeight = G::NodeWeight;
    type EdgeWeight = G::EdgeWeight;
}

impl<G: DataMap> DataMap for Reversed<G> {
    fn node_weight(&self, id: G::NodeId) -> Option<&G::NodeWeight> {
        self.0.node_weight(id)
    }

    fn edge_weight(&self, id: G::EdgeId) -> Option<&G::EdgeWeight> {
        self.0.edge_weight(id)
    }
}

impl<G: EdgeEndpoints> EdgeEndpoints for Reversed<G> {
    fn edge_endpoints(&self, id: G::EdgeId) -> Option<(G::NodeId, G::NodeId)> {
        self.0.edge_endpoints(id).map(|(s, t)| (t, s))
    }
}

impl<G: NodeCount> NodeCount for Reversed<G> {
    fn node_count(&self) -> usize {
        self.0.node_count()
    }
}

impl<G: EdgeCount> EdgeCount for Reversed<G> {
    fn edge_count(&self) -> usize {
        self.0.edge_count()
    }
}

impl<G: NodeIndexable> NodeIndexable for Reversed<G> {
    fn node_bound(&self) -> usize {
        self.0.node_bound()
    }

    fn to_index(&self, a: G::NodeId) -> usize {
        NodeIndexable::to_index(&self.0, a)
    }

    fn from_index(&self, i: usize) -> G::NodeId {
        NodeIndexable::from_index(&self.0, i)
    }
}

impl<G: NodeCompactIndexable> NodeCompactIndexable for Reversed<G> {}

impl<G: EdgeIndexable> EdgeIndexable for Reversed<G> {
    fn edge_bound(&self) -> usize {
        self.0.edge_bound()
    }

    fn to_index(&self, a: G::EdgeId) -> usize {
        EdgeIndexable::to_index(&self.0, a)
    }

    fn from_index(&self, i: usize) -> G::EdgeId {
        EdgeIndexable::from_index(&self.0, i)
    }
}

impl<G: GraphProp> GraphProp for Reversed<G> {
    type EdgeType = G::EdgeType;
}

impl<G: Visitable> Visitable for Reversed<G> {
    type Map = G::Map;

    fn visit_map(&self) -> G::Map {
        self.0.visit_map()
    }

    fn reset_map(&self, map: &mut G::Map) {
        self.0.reset_map(map);
    }
}

/// Reuses the inner matrix; adjacency is queried transposed.
impl<G: GetAdjacencyMatrix> GetAdjacencyMatrix for Reversed<G> {
    type AdjMatrix = G::AdjMatrix;

    fn adjacency_matrix(&self) -> G::AdjMatrix {
        self.0.adjacency_matrix()
    }

    fn is_adjacent(&self, matrix: &G::AdjMatrix, a: G::NodeId, b: G::NodeId) -> bool {
        self.0.is_adjacent(matrix, b, a)
    }
}

impl<G: IntoNeighborsDirected> IntoNeighbors for Reversed<G> {
    type Neighbors = G::NeighborsDirected;

    fn neighbors(self, n: G::NodeId) -> G::NeighborsDirected {
        self.0.neighbors_directed(n, Incoming)
    }
}

impl<G: IntoNeighborsDirected> IntoNeighborsDirected for Reversed<G> {
    type NeighborsDirected = G::NeighborsDirected;

    fn neighbors_directed(self, n: G::NodeId, d: Direction) -> G::NeighborsDirected {
        self.0.neighbors_directed(n, d.opposite())
    }
}

impl<G: IntoEdgeReferences> IntoEdgeReferences for Reversed<G> {
    type EdgeRef = ReversedEdgeReference<G::EdgeRef>;
    type EdgeReferences = ReversedEdges<G::EdgeReferences>;

    fn edge_references(self) -> Self::EdgeReferences {
        ReversedEdges {
            iter: self.0.edge_references(),
        }
    }
}

impl<G: IntoEdgesDirected> IntoEdges for Reversed<G> {
    type Edges = ReversedEdges<G::EdgesDirected>;

    fn edges(self, a: G::NodeId) -> Self::Edges {
        ReversedEdges {
            iter: self.0.edges_directed(a, Incoming),
        }
    }
}

impl<G: IntoEdgesDirected> IntoEdgesDirected for Reversed<G> {
    type EdgesDirected = ReversedEdges<G::EdgesDirected>;

    fn edges_directed(self, a: G::NodeId, dir: Direction) -> Self::EdgesDirected {
        ReversedEdges {
            iter: self.0.edges_directed(a, dir.opposite()),
        }
    }
}

impl<G: IntoNodeIdentifiers> IntoNodeIdentifiers for Reversed<G> {
    type NodeIdentifiers = G::NodeIdentifiers;

    fn node_identifiers(self) -> G::NodeIdentifiers {
        self.0.node_identifiers()
    }
}

impl<G: IntoNodeReferences> IntoNodeReferences for Reversed<G> {
    type NodeRef = G::NodeRef;
    type NodeReferences = G::NodeReferences;

    fn node_references(self) -> G::NodeReferences {
        self.0.node_references()
    }
}

/// An edge reference with source and target swapped.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ReversedEdgeReference<R>(R);

impl<R> ReversedEdgeReference<R> {
    /// The inner, unreversed reference.
    pub fn as_unreversed(&self) -> &R {
        &self.0
    }

    /// Unwraps the inner, unreversed reference.
    pub fn into_unreversed(self) -> R {
        self.0
    }
}

impl<R: EdgeRef> EdgeRef for ReversedEdgeReference<R> {
    type NodeId = R::NodeId;
    type EdgeId = R::EdgeId;
    type Weight = R::Weight;

    #[inline]
    fn source(&self) -> R::NodeId {
        self.0.target()
    }

    #[inline]
    fn target(&self) -> R::NodeId {
        self.0.source()
    }

    #[inline]
    fn weight(&self) -> &R::Weight {
        self.0.weight()
    }

    #[inline]
    fn id(&self) -> R::EdgeId {
        self.0.id()
    }
}

/// Wraps every edge reference of `I` in `ReversedEdgeReference`.
#[derive(Clone, Debug)]
pub struct ReversedEdges<I> {
    iter: I,
}

impl<I> Iterator for ReversedEdges<I>
where
    I: Iterator,
    I::Item: EdgeRef,
{
    type Item = ReversedEdgeReference<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(ReversedEdgeReference)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}
