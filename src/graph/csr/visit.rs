//! Capability trait implementations for `CsrGraph`.

use std::ops::Range;

use super::{CsrGraph, EdgeReference, EdgeReferences, Edges, Neighbors, NodeReferences};
use crate::direction::{Direction, EdgeType, Outgoing};
use crate::visit::{
    Data, DataMap, EdgeCount, EdgeEndpoints, EdgeIndexable, EdgeRef, GetAdjacencyMatrix,
    GraphBase, GraphProp, IntoEdgeReferences, IntoEdges, IntoEdgesDirected, IntoNeighbors,
    IntoNeighborsDirected, IntoNodeIdentifiers, IntoNodeReferences, NodeCompactIndexable,
    NodeCount, NodeIndexable, VisitedBits, Visitable,
};

impl<'a, E> EdgeRef for EdgeReference<'a, E> {
    type NodeId = usize;
    type EdgeId = usize;
    type Weight = E;

    #[inline]
    fn source(&self) -> usize {
        self.source
    }

    #[inline]
    fn target(&self) -> usize {
        self.target
    }

    #[inline]
    fn weight(&self) -> &E {
        self.weight
    }

    #[inline]
    fn id(&self) -> usize {
        self.index
    }
}

impl<N, E, Ty> GraphBase for CsrGraph<N, E, Ty> {
    type NodeId = usize;
    type EdgeId = usize;
}

impl<N, E, Ty> Data for CsrGraph<N, E, Ty> {
    type NodeWeight = N;
    type EdgeWeight = E;
}

impl<N, E, Ty: EdgeType> DataMap for CsrGraph<N, E, Ty> {
    fn node_weight(&self, id: usize) -> Option<&N> {
        CsrGraph::node_weight(self, id)
    }

    fn edge_weight(&self, id: usize) -> Option<&E> {
        CsrGraph::edge_weight(self, id)
    }
}

impl<N, E, Ty: EdgeType> EdgeEndpoints for CsrGraph<N, E, Ty> {
    fn edge_endpoints(&self, id: usize) -> Option<(usize, usize)> {
        CsrGraph::edge_endpoints(self, id)
    }
}

impl<N, E, Ty: EdgeType> NodeCount for CsrGraph<N, E, Ty> {
    fn node_count(&self) -> usize {
        CsrGraph::node_count(self)
    }
}

impl<N, E, Ty: EdgeType> EdgeCount for CsrGraph<N, E, Ty> {
    fn edge_count(&self) -> usize {
        CsrGraph::edge_count(self)
    }
}

impl<N, E, Ty: EdgeType> NodeIndexable for CsrGraph<N, E, Ty> {
    fn node_bound(&self) -> usize {
        CsrGraph::node_count(self)
    }

    fn to_index(&self, a: usize) -> usize {
        a
    }

    fn from_index(&self, i: usize) -> usize {
        i
    }
}

impl<N, E, Ty: EdgeType> NodeCompactIndexable for CsrGraph<N, E, Ty> {}

impl<N, E, Ty: EdgeType> EdgeIndexable for CsrGraph<N, E, Ty> {
    fn edge_bound(&self) -> usize {
        CsrGraph::edge_count(self)
    }

    fn to_index(&self, a: usize) -> usize {
        a
    }

    fn from_index(&self, i: usize) -> usize {
        i
    }
}

impl<N, E, Ty: EdgeType> GraphProp for CsrGraph<N, E, Ty> {
    type EdgeType = Ty;
}

impl<N, E, Ty: EdgeType> Visitable for CsrGraph<N, E, Ty> {
    type Map = VisitedBits;

    fn visit_map(&self) -> VisitedBits {
        VisitedBits::new(CsrGraph::node_count(self))
    }

    fn reset_map(&self, map: &mut VisitedBits) {
        map.clear_all();
        map.resize(CsrGraph::node_count(self));
    }
}

/// The matrix is a flattened `n * n` bitset; row `a`, column `b` is bit
/// `a * n + b`.
impl<N, E, Ty: EdgeType> GetAdjacencyMatrix for CsrGraph<N, E, Ty> {
    type AdjMatrix = VisitedBits;

    /// # Panics
    ///
    /// Panics if `node_count() * node_count()` overflows `usize`.
    fn adjacency_matrix(&self) -> VisitedBits {
        let n = CsrGraph::node_count(self);
        let bits = n
            .checked_mul(n)
            .unwrap_or_else(|| panic!("adjacency matrix of {n} nodes overflows usize"));
        let mut matrix = VisitedBits::new(bits);
        for e in &self.edges {
            matrix.set(e.source * n + e.target);
            if !Ty::is_directed() {
                matrix.set(e.target * n + e.source);
            }
        }
        matrix
    }

    fn is_adjacent(&self, matrix: &VisitedBits, a: usize, b: usize) -> bool {
        let n = CsrGraph::node_count(self);
        a < n && b < n && matrix.is_set(a * n + b)
    }
}

impl<'a, N, E, Ty: EdgeType> IntoNeighbors for &'a CsrGraph<N, E, Ty> {
    type Neighbors = Neighbors<'a, E>;

    fn neighbors(self, a: usize) -> Self::Neighbors {
        CsrGraph::neighbors_directed(self, a, Outgoing)
    }
}

impl<'a, N, E, Ty: EdgeType> IntoNeighborsDirected for &'a CsrGraph<N, E, Ty> {
    type NeighborsDirected = Neighbors<'a, E>;

    fn neighbors_directed(self, a: usize, d: Direction) -> Self::NeighborsDirected {
        CsrGraph::neighbors_directed(self, a, d)
    }
}

impl<'a, N, E, Ty: EdgeType> IntoEdgeReferences for &'a CsrGraph<N, E, Ty> {
    type EdgeRef = EdgeReference<'a, E>;
    type EdgeReferences = EdgeReferences<'a, E>;

    fn edge_references(self) -> Self::EdgeReferences {
        EdgeReferences {
            iter: self.edges.iter().enumerate(),
        }
    }
}

impl<'a, N, E, Ty: EdgeType> IntoEdges for &'a CsrGraph<N, E, Ty> {
    type Edges = Edges<'a, E>;

    fn edges(self, a: usize) -> Self::Edges {
        CsrGraph::edges_directed(self, a, Outgoing)
    }
}

impl<'a, N, E, Ty: EdgeType> IntoEdgesDirected for &'a CsrGraph<N, E, Ty> {
    type EdgesDirected = Edges<'a, E>;

    fn edges_directed(self, a: usize, dir: Direction) -> Self::EdgesDirected {
        CsrGraph::edges_directed(self, a, dir)
    }
}

impl<'a, N, E, Ty: EdgeType> IntoNodeIdentifiers for &'a CsrGraph<N, E, Ty> {
    type NodeIdentifiers = Range<usize>;

    fn node_identifiers(self) -> Range<usize> {
        0..CsrGraph::node_count(self)
    }
}

impl<'a, N, E, Ty: EdgeType> IntoNodeReferences for &'a CsrGraph<N, E, Ty> {
    type NodeRef = (usize, &'a N);
    type NodeReferences = NodeReferences<'a, N>;

    fn node_references(self) -> Self::NodeReferences {
        NodeReferences {
            iter: self.nodes.iter().enumerate(),
        }
    }
}
