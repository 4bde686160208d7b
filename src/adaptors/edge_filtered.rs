//! Edge-filtering adaptor.

use crate::adaptors::filter::FilterEdge;
use crate::direction::{Direction, Outgoing};
use crate::visit::{
    Data, EdgeIndexable, EdgeRef, GraphBase, GraphProp, IntoEdgeReferences, IntoEdges,
    IntoEdgesDirected, IntoNeighbors, IntoNeighborsDirected, IntoNodeIdentifiers,
    IntoNodeReferences, NodeCompactIndexable, NodeCount, NodeIndexable, Visitable,
};

/// A view of `G` containing only the edges accepted by `F`.
///
/// Edge and neighbor enumeration skip rejected edges. Nodes are unaffected,
/// so a node whose edges are all rejected stays visible as an isolated node.
/// Neighbor enumeration is derived from edge enumeration, so the inner graph
/// must implement `IntoEdges` (and `IntoEdgesDirected` for directed queries).
///
/// The filter only sees edge references, never bare edge ids, so this view
/// cannot answer id-based queries about edges: it implements neither
/// `DataMap`, `EdgeEndpoints`, `EdgeCount` nor `GetAdjacencyMatrix`. Node
/// counts and indices pass through unchanged.
///
/// ```
/// use halo_visit::adaptors::EdgeFiltered;
/// use halo_visit::graph::CsrGraph;
/// use halo_visit::traverse::Dfs;
/// use halo_visit::visit::{EdgeRef, Walker};
///
/// // 0 -(1)-> 1 -(5)-> 2
/// let g: CsrGraph<(), u32> = CsrGraph::from_edges(vec![(); 3], vec![(0, 1, 1), (1, 2, 5)]);
/// let light = EdgeFiltered::from_fn(&g, |e| *e.weight() < 3);
/// let seen: Vec<_> = Dfs::new(&light, 0).iter(&light).collect();
/// assert_eq!(seen, vec![0, 1]);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct EdgeFiltered<G, F>(pub G, pub F);

impl<F, G> EdgeFiltered<G, F>
where
    G: IntoEdgeReferences,
    F: Fn(G::EdgeRef) -> bool,
{
    /// Filters `graph` with a closure over edge references.
    pub fn from_fn(graph: G, filter: F) -> Self {
        EdgeFiltered(graph, filter)
    }
}

impl<G: GraphBase, F> GraphBase for EdgeFiltered<G, F> {
    type NodeId = G::NodeId;
    type EdgeId = G::EdgeId;
}

impl<G: Data, F> Data for EdgeFiltered<G, F> {
    type NodeWeight = G::NodeWeight;
    type EdgeWeight = G::EdgeWeight;
}

impl<G: NodeCount, F> NodeCount for EdgeFiltered<G, F> {
    fn node_count(&self) -> usize {
        self.0.node_count()
    }
}

impl<G: NodeIndexable, F> NodeIndexable for EdgeFiltered<G, F> {
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

impl<G: NodeCompactIndexable, F> NodeCompactIndexable for EdgeFiltered<G, F> {}

impl<G: EdgeIndexable, F> EdgeIndexable for EdgeFiltered<G, F> {
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

impl<G: GraphProp, F> GraphProp for EdgeFiltered<G, F> {
    type EdgeType = G::EdgeType;
}

impl<G: Visitable, F> Visitable for EdgeFiltered<G, F> {
    type Map = G::Map;

    fn visit_map(&self) -> G::Map {
        self.0.visit_map()
    }

    fn reset_map(&self, map: &mut G::Map) {
        self.0.reset_map(map);
    }
}

impl<'a, G, F> IntoNeighbors for &'a EdgeFiltered<G, F>
where
    G: IntoEdges,
    F: FilterEdge<G::EdgeRef>,
{
    type Neighbors = EdgeFilteredNeighbors<'a, G::Edges, F>;

    fn neighbors(self, n: G::NodeId) -> Self::Neighbors {
        EdgeFilteredNeighbors {
            iter: self.0.edges(n),
            filter: &self.1,
            dir: Outgoing,
        }
    }
}

impl<'a, G, F> IntoNeighborsDirected for &'a EdgeFiltered<G, F>
where
    G: IntoEdgesDirected,
    F: FilterEdge<G::EdgeRef>,
{
    type NeighborsDirected = EdgeFilteredNeighbors<'a, G::EdgesDirected, F>;

    fn neighbors_directed(self, n: G::NodeId, dir: Direction) -> Self::NeighborsDirected {
        EdgeFilteredNeighbors {
            iter: self.0.edges_directed(n, dir),
            filter: &self.1,
            dir,
        }
    }
}

impl<'a, G, F> IntoEdgeReferences for &'a EdgeFiltered<G, F>
where
    G: IntoEdgeReferences,
    F: FilterEdge<G::EdgeRef>,
{
    type EdgeRef = G::EdgeRef;
    type EdgeReferences = EdgeFilteredEdges<'a, G::EdgeReferences, F>;

    fn edge_references(self) -> Self::EdgeReferences {
        EdgeFilteredEdges {
            iter: self.0.edge_references(),
            filter: &self.1,
        }
    }
}

impl<'a, G, F> IntoEdges for &'a EdgeFiltered<G, F>
where
    G: IntoEdges,
    F: FilterEdge<G::EdgeRef>,
{
    type Edges = EdgeFilteredEdges<'a, G::Edges, F>;

    fn edges(self, n: G::NodeId) -> Self::Edges {
        EdgeFilteredEdges {
            iter: self.0.edges(n),
            filter: &self.1,
        }
    }
}

impl<'a, G, F> IntoEdgesDirected for &'a EdgeFiltered<G, F>
where
    G: IntoEdgesDirected,
    F: FilterEdge<G::EdgeRef>,
{
    type EdgesDirected = EdgeFilteredEdges<'a, G::EdgesDirected, F>;

    fn edges_directed(self, n: G::NodeId, dir: Direction) -> Self::EdgesDirected {
        EdgeFilteredEdges {
            iter: self.0.edges_directed(n, dir),
            filter: &self.1,
        }
    }
}

impl<'a, G, F> IntoNodeIdentifiers for &'a EdgeFiltered<G, F>
where
    G: IntoNodeIdentifiers,
{
    type NodeIdentifiers = G::NodeIdentifiers;

    fn node_identifiers(self) -> G::NodeIdentifiers {
        self.0.node_identifiers()
    }
}

impl<'a, G, F> IntoNodeReferences for &'a EdgeFiltered<G, F>
where
    G: IntoNodeReferences,
{
    type NodeRef = G::NodeRef;
    type NodeReferences = G::NodeReferences;

    fn node_references(self) -> G::NodeReferences {
        self.0.node_references()
    }
}

/// Neighbors reached through accepted edges.
pub struct EdgeFilteredNeighbors<'a, I, F> {
    iter: I,
    filter: &'a F,
    dir: Direction,
}

impl<'a, I, F> Iterator for EdgeFilteredNeighbors<'a, I, F>
where
    I: Iterator,
    I::Item: EdgeRef,
    F: FilterEdge<I::Item>,
{
    type Item = <I::Item as EdgeRef>::NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let filter = self.filter;
        let edge = self.iter.find(|&e| filter.include_edge(e))?;
        Some(match self.dir {
            Direction::Outgoing => edge.target(),
            Direction::Incoming => edge.source(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

/// Accepted edges.
pub struct EdgeFilteredEdges<'a, I, F> {
    iter: I,
    filter: &'a F,
}

impl<'a, I, F> Iterator for EdgeFilteredEdges<'a, I, F>
where
    I: Iterator,
    I::Item: EdgeRef,
    F: FilterEdge<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let filter = self.filter;
        self.iter.find(|&e| filter.include_edge(e))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}
