//! Node-filtering adaptor.

use crate::adaptors::filter::FilterNode;
use crate::direction::Direction;
use crate::visit::{
    Data, DataMap, EdgeEndpoints, EdgeIndexable, EdgeRef, GetAdjacencyMatrix, GraphBase,
    GraphProp, IntoEdgeReferences, IntoEdges, IntoEdgesDirected, IntoNeighbors,
    IntoNeighborsDirected, IntoNodeIdentifiers, IntoNodeReferences, NodeIndexable, NodeRef,
    VisitMap, Visitable,
};

/// A view of `G` containing only the nodes accepted by `F`.
///
/// Excluded nodes are invisible: they are skipped by node enumeration, and
/// every neighbor or edge touching them is skipped too. Asking for the
/// neighbors of an excluded node yields nothing. Visit maps of this view
/// refuse excluded nodes, so a traversal started from one emits nothing.
///
/// Indices pass through unchanged; since the filtered index range has holes,
/// this view implements `NodeIndexable` but not `NodeCount` or
/// `NodeCompactIndexable`.
///
/// ```
/// use halo_visit::adaptors::NodeFiltered;
/// use halo_visit::graph::CsrGraph;
/// use halo_visit::traverse::Bfs;
/// use halo_visit::visit::Walker;
///
/// // 0 -> 1 -> 2, 0 -> 3
/// let g = CsrGraph::from_adjacency(&[vec![1, 3], vec![2], vec![], vec![]]);
/// let without_1 = NodeFiltered::from_fn(&g, |n: usize| n != 1);
/// let seen: Vec<_> = Bfs::new(&without_1, 0).iter(&without_1).collect();
/// assert_eq!(seen, vec![0, 3]);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct NodeFiltered<G, F>(pub G, pub F);

impl<F, G> NodeFiltered<G, F>
where
    G: GraphBase,
    F: Fn(G::NodeId) -> bool,
{
    /// Filters `graph` with a closure.
    pub fn from_fn(graph: G, filter: F) -> Self {
        NodeFiltered(graph, filter)
    }
}

impl<G: GraphBase, F> GraphBase for NodeFiltered<G, F> {
    type NodeId = G::NodeId;
    type EdgeId = G::EdgeId;
}

impl<G: Data, F> Data for NodeFiltered<G, F> {
    type NodeWeight = G::NodeWeight;
    type EdgeWeight = G::EdgeWeight;
}

/// Lookups of excluded nodes, and of edges touching them, return `None`.
impl<G, F> DataMap for NodeFiltered<G, F>
where
    G: DataMap + EdgeEndpoints,
    F: FilterNode<G::NodeId>,
{
    fn node_weight(&self, id: G::NodeId) -> Option<&G::NodeWeight> {
        if self.1.include_node(id) {
            self.0.node_weight(id)
        } else {
            None
        }
    }

    fn edge_weight(&self, id: G::EdgeId) -> Option<&G::EdgeWeight> {
        self.edge_endpoints(id)?;
        self.0.edge_weight(id)
    }
}

impl<G, F> EdgeEndpoints for NodeFiltered<G, F>
where
    G: EdgeEndpoints,
    F: FilterNode<G::NodeId>,
{
    fn edge_endpoints(&self, id: G::EdgeId) -> Option<(G::NodeId, G::NodeId)> {
        self.0
            .edge_endpoints(id)
            .filter(|&(s, t)| self.1.include_node(s) && self.1.include_node(t))
    }
}

impl<G: NodeIndexable, F> NodeIndexable for NodeFiltered<G, F> {
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

impl<G: EdgeIndexable, F> EdgeIndexable for NodeFiltered<G, F> {
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

impl<G: GraphProp, F> GraphProp for NodeFiltered<G, F> {
    type EdgeType = G::EdgeType;
}

/// Each map carries its own copy of the filter.
impl<G, F> Visitable for NodeFiltered<G, F>
where
    G: Visitable,
    F: FilterNode<G::NodeId> + Clone,
{
    type Map = NodeFilteredMap<G::Map, F>;

    fn visit_map(&self) -> Self::Map {
        NodeFilteredMap {
            inner: self.0.visit_map(),
            filter: self.1.clone(),
        }
    }

    fn reset_map(&self, map: &mut Self::Map) {
        self.0.reset_map(&mut map.inner);
    }
}

impl<G, F> GetAdjacencyMatrix for NodeFiltered<G, F>
where
    G: GetAdjacencyMatrix,
    F: FilterNode<G::NodeId>,
{
    type AdjMatrix = G::AdjMatrix;

    fn adjacency_matrix(&self) -> G::AdjMatrix {
        self.0.adjacency_matrix()
    }

    fn is_adjacent(&self, matrix: &G::AdjMatrix, a: G::NodeId, b: G::NodeId) -> bool {
        self.1.include_node(a) && self.1.include_node(b) && self.0.is_adjacent(matrix, a, b)
    }
}

impl<'a, G, F> IntoNeighbors for &'a NodeFiltered<G, F>
where
    G: IntoNeighbors,
    F: FilterNode<G::NodeId>,
{
    type Neighbors = NodeFilteredNeighbors<'a, G::Neighbors, F>;

    fn neighbors(self, n: G::NodeId) -> Self::Neighbors {
        NodeFilteredNeighbors {
            include_source: self.1.include_node(n),
            iter: self.0.neighbors(n),
            filter: &self.1,
        }
    }
}

impl<'a, G, F> IntoNeighborsDirected for &'a NodeFiltered<G, F>
where
    G: IntoNeighborsDirected,
    F: FilterNode<G::NodeId>,
{
    type NeighborsDirected = NodeFilteredNeighbors<'a, G::NeighborsDirected, F>;

    fn neighbors_directed(self, n: G::NodeId, d: Direction) -> Self::NeighborsDirected {
        NodeFilteredNeighbors {
            include_source: self.1.include_node(n),
            iter: self.0.neighbors_directed(n, d),
            filter: &self.1,
        }
    }
}

impl<'a, G, F> IntoEdgeReferences for &'a NodeFiltered<G, F>
where
    G: IntoEdgeReferences,
    F: FilterNode<G::NodeId>,
{
    type EdgeRef = G::EdgeRef;
    type EdgeReferences = NodeFilteredEdges<'a, G::EdgeReferences, F>;

    fn edge_references(self) -> Self::EdgeReferences {
        NodeFilteredEdges {
            include_source: true,
            iter: self.0.edge_references(),
            filter: &self.1,
        }
    }
}

impl<'a, G, F> IntoEdges for &'a NodeFiltered<G, F>
where
    G: IntoEdges,
    F: FilterNode<G::NodeId>,
{
    type Edges = NodeFilteredEdges<'a, G::Edges, F>;

    fn edges(self, a: G::NodeId) -> Self::Edges {
        NodeFilteredEdges {
            include_source: self.1.include_node(a),
            iter: self.0.edges(a),
            filter: &self.1,
        }
    }
}

impl<'a, G, F> IntoEdgesDirected for &'a NodeFiltered<G, F>
where
    G: IntoEdgesDirected,
    F: FilterNode<G::NodeId>,
{
    type EdgesDirected = NodeFilteredEdges<'a, G::EdgesDirected, F>;

    fn edges_directed(self, a: G::NodeId, dir: Direction) -> Self::EdgesDirected {
        NodeFilteredEdges {
            include_source: self.1.include_node(a),
            iter: self.0.edges_directed(a, dir),
            filter: &self.1,
        }
    }
}

impl<'a, G, F> IntoNodeIdentifiers for &'a NodeFiltered<G, F>
where
    G: IntoNodeIdentifiers,
    F: FilterNode<G::NodeId>,
{
    type NodeIdentifiers = NodeFilteredNodes<'a, G::NodeIdentifiers, F>;

    fn node_identifiers(self) -> Self::NodeIdentifiers {
        NodeFilteredNodes {
            iter: self.0.node_identifiers(),
            filter: &self.1,
        }
    }
}

impl<'a, G, F> IntoNodeReferences for &'a NodeFiltered<G, F>
where
    G: IntoNodeReferences,
    F: FilterNode<G::NodeId>,
{
    type NodeRef = G::NodeRef;
    type NodeReferences = NodeFilteredNodeReferences<'a, G::NodeReferences, F>;

    fn node_references(self) -> Self::NodeReferences {
        NodeFilteredNodeReferences {
            iter: self.0.node_references(),
            filter: &self.1,
        }
    }
}

/// Visit map of a `NodeFiltered` view: refuses excluded nodes.
#[derive(Clone, Debug)]
pub struct NodeFilteredMap<M, F> {
    inner: M,
    filter: F,
}

impl<N, M, F> VisitMap<N> for NodeFilteredMap<M, F>
where
    N: Copy,
    M: VisitMap<N>,
    F: FilterNode<N>,
{
    fn visit(&mut self, a: N) -> bool {
        self.filter.include_node(a) && self.inner.visit(a)
    }

    fn is_visited(&self, a: N) -> bool {
        self.inner.is_visited(a)
    }
}

/// Neighbors of a node in a `NodeFiltered` view.
pub struct NodeFilteredNeighbors<'a, I, F> {
    include_source: bool,
    iter: I,
    filter: &'a F,
}

impl<'a, I, F> Iterator for NodeFilteredNeighbors<'a, I, F>
where
    I: Iterator,
    I::Item: Copy,
    F: FilterNode<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if !self.include_source {
            return None;
        }
        let filter = self.filter;
        self.iter.find(|&n| filter.include_node(n))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.include_source {
            (0, self.iter.size_hint().1)
        } else {
            (0, Some(0))
        }
    }
}

/// Edges of a `NodeFiltered` view: both endpoints must be included.
pub struct NodeFilteredEdges<'a, I, F> {
    include_source: bool,
    iter: I,
    filter: &'a F,
}

impl<'a, I, F> Iterator for NodeFilteredEdges<'a, I, F>
where
    I: Iterator,
    I::Item: EdgeRef,
    F: FilterNode<<I::Item as EdgeRef>::NodeId>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if !self.include_source {
            return None;
        }
        let filter = self.filter;
        self.iter
            .find(|e| filter.include_node(e.source()) && filter.include_node(e.target()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.include_source {
            (0, self.iter.size_hint().1)
        } else {
            (0, Some(0))
        }
    }
}

/// Node identifiers of a `NodeFiltered` view.
pub struct NodeFilteredNodes<'a, I, F> {
    iter: I,
    filter: &'a F,
}

impl<'a, I, F> Iterator for NodeFilteredNodes<'a, I, F>
where
    I: Iterator,
    I::Item: Copy,
    F: FilterNode<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let filter = self.filter;
        self.iter.find(|&n| filter.include_node(n))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

/// Node references of a `NodeFiltered` view.
pub struct NodeFilteredNodeReferences<'a, I, F> {
    iter: I,
    filter: &'a F,
}

impl<'a, I, F> Iterator for NodeFilteredNodeReferences<'a, I, F>
where
    I: Iterator,
    I::Item: NodeRef,
    F: FilterNode<<I::Item as NodeRef>::NodeId>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let filter = self.filter;
        self.iter.find(|r| filter.include_node(r.id()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}
