//! A read-only CSR (compressed sparse row) graph with a CSC transpose.
//!
//! This is the crate's reference implementation of the capability traits: it
//! is built once from an edge list and never mutated.
//!
//! Memory layout:
//! - `edges`: edge records (`source`, `target`, `weight`) in insertion order;
//!   the position is the edge id
//! - `out_offsets` / `out_edges`: edge ids grouped by source (row-major)
//! - `in_offsets` / `in_edges`: edge ids grouped by target (column-major)
//!
//! Grouping is stable, so a node's edges appear in insertion order in both
//! directions.

use std::marker::PhantomData;
use std::slice;

use crate::direction::{Directed, Direction, EdgeType};

mod visit;

pub(crate) struct EdgeData<E> {
    pub(crate) source: usize,
    pub(crate) target: usize,
    pub(crate) weight: E,
}

/// An immutable graph stored as CSR plus its transpose.
///
/// Node ids are `0..node_count()` and edge ids are `0..edge_count()`, in the
/// order they were supplied. With `Ty = Undirected`, every edge is reported
/// from both endpoints.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_edges` | \(O(n + m)\) | Counting sort into rows and columns |
/// | `neighbors` | \(O(1)\) | Lazy iterator over a contiguous row |
/// | `neighbors_directed(_, Incoming)` | \(O(1)\) | Lazy iterator over the transpose |
/// | `out_degree` / `in_degree` | \(O(1)\) | Offset difference |
/// | `adjacency_matrix` | \(O(n^2 / w + m)\) | Flattened bitset |
pub struct CsrGraph<N = (), E = (), Ty = Directed> {
    nodes: Vec<N>,
    edges: Vec<EdgeData<E>>,
    out_offsets: Vec<usize>,
    out_edges: Vec<usize>,
    in_offsets: Vec<usize>,
    in_edges: Vec<usize>,
    ty: PhantomData<Ty>,
}

impl CsrGraph<(), (), Directed> {
    /// Builds a directed, unweighted graph from an adjacency list.
    ///
    /// # Panics
    ///
    /// Panics if any edge references a node index out of bounds.
    pub fn from_adjacency(adjacency: &[Vec<usize>]) -> Self {
        let edges = adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, nbrs)| nbrs.iter().map(move |&v| (u, v, ())));
        CsrGraph::from_edges(vec![(); adjacency.len()], edges)
    }
}

/// Groups edge ids by `key`, keeping insertion order within each group.
fn group_by<E>(n: usize, edges: &[EdgeData<E>], key: impl Fn(&EdgeData<E>) -> usize) -> (Vec<usize>, Vec<usize>) {
    let mut offsets = vec![0usize; n + 1];
    for e in edges {
        offsets[key(e) + 1] += 1;
    }
    for i in 0..n {
        offsets[i + 1] += offsets[i];
    }

    let mut cursor = offsets.clone();
    let mut grouped = vec![0usize; edges.len()];
    for (id, e) in edges.iter().enumerate() {
        let slot = &mut cursor[key(e)];
        grouped[*slot] = id;
        *slot += 1;
    }
    (offsets, grouped)
}

/// Edge ids of row `a`; empty for ids outside the graph.
fn row<'s>(offsets: &[usize], ids: &'s [usize], a: usize) -> &'s [usize] {
    match (offsets.get(a), offsets.get(a + 1)) {
        (Some(&start), Some(&end)) => &ids[start..end],
        _ => &[],
    }
}

impl<N, E, Ty: EdgeType> CsrGraph<N, E, Ty> {
    /// Builds a graph from node weights and `(source, target, weight)` triples.
    ///
    /// # Panics
    ///
    /// Panics if any edge references a node index out of bounds.
    pub fn from_edges<I>(nodes: Vec<N>, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, E)>,
    {
        let n = nodes.len();
        let edges: Vec<EdgeData<E>> = edges
            .into_iter()
            .map(|(source, target, weight)| {
                assert!(
                    source < n && target < n,
                    "edge {source}->{target} is out of bounds for n={n}"
                );
                EdgeData {
                    source,
                    target,
                    weight,
                }
            })
            .collect();

        let (out_offsets, out_edges) = group_by(n, &edges, |e| e.source);
        let (in_offsets, in_edges) = group_by(n, &edges, |e| e.target);

        Self {
            nodes,
            edges,
            out_offsets,
            out_edges,
            in_offsets,
            in_edges,
            ty: PhantomData,
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` for directed graphs.
    pub fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    /// Returns `true` if `a` is a node of this graph.
    pub fn contains_node(&self, a: usize) -> bool {
        a < self.nodes.len()
    }

    /// Returns the data of node `a`.
    pub fn node_weight(&self, a: usize) -> Option<&N> {
        self.nodes.get(a)
    }

    /// Returns the data of edge `e`.
    pub fn edge_weight(&self, e: usize) -> Option<&E> {
        self.edges.get(e).map(|d| &d.weight)
    }

    /// Returns `(source, target)` of edge `e`.
    pub fn edge_endpoints(&self, e: usize) -> Option<(usize, usize)> {
        self.edges.get(e).map(|d| (d.source, d.target))
    }

    fn out_row(&self, a: usize) -> &[usize] {
        row(&self.out_offsets, &self.out_edges, a)
    }

    fn in_row(&self, a: usize) -> &[usize] {
        row(&self.in_offsets, &self.in_edges, a)
    }

    /// Number of edges whose source is `a` (ignores directedness).
    pub fn out_degree(&self, a: usize) -> usize {
        self.out_row(a).len()
    }

    /// Number of edges whose target is `a` (ignores directedness).
    pub fn in_degree(&self, a: usize) -> usize {
        self.in_row(a).len()
    }

    /// Returns the edges of `a` in direction `dir`.
    ///
    /// `Outgoing` references have `a` as source and `Incoming` references have
    /// `a` as target. Undirected graphs report every incident edge, reoriented
    /// as needed; a self-loop is reported once. Ids outside the graph yield an
    /// empty iterator.
    pub fn edges_directed(&self, a: usize, dir: Direction) -> Edges<'_, E> {
        let (primary, secondary) = match dir {
            Direction::Outgoing => (self.out_row(a), self.in_row(a)),
            Direction::Incoming => (self.in_row(a), self.out_row(a)),
        };
        let secondary: &[usize] = if Ty::is_directed() { &[] } else { secondary };
        Edges {
            edges: &self.edges,
            primary: primary.iter(),
            secondary: secondary.iter(),
        }
    }

    /// Returns the neighbors of `a` reached by following edges in `dir`.
    pub fn neighbors_directed(&self, a: usize, dir: Direction) -> Neighbors<'_, E> {
        Neighbors {
            edges: self.edges_directed(a, dir),
            dir,
        }
    }

    /// Returns `true` if some edge `a -> b` exists (either way if undirected).
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.neighbors_directed(a, Direction::Outgoing).any(|v| v == b)
    }
}

/// A transient reference to one edge of a `CsrGraph`.
#[derive(Debug)]
pub struct EdgeReference<'a, E> {
    index: usize,
    source: usize,
    target: usize,
    weight: &'a E,
}

impl<'a, E> Clone for EdgeReference<'a, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, E> Copy for EdgeReference<'a, E> {}

impl<'a, E> PartialEq for EdgeReference<'a, E> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.source == other.source && self.target == other.target
    }
}

impl<'a, E> EdgeReference<'a, E> {
    fn new(index: usize, data: &'a EdgeData<E>, flip: bool) -> Self {
        let (source, target) = if flip {
            (data.target, data.source)
        } else {
            (data.source, data.target)
        };
        EdgeReference {
            index,
            source,
            target,
            weight: &data.weight,
        }
    }
}

/// Edges incident to one node. See `CsrGraph::edges_directed`.
pub struct Edges<'a, E> {
    edges: &'a [EdgeData<E>],
    primary: slice::Iter<'a, usize>,
    /// Reoriented edges; only non-empty for undirected graphs.
    secondary: slice::Iter<'a, usize>,
}

impl<'a, E> Iterator for Edges<'a, E> {
    type Item = EdgeReference<'a, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(&id) = self.primary.next() {
            return Some(EdgeReference::new(id, &self.edges[id], false));
        }
        for &id in self.secondary.by_ref() {
            let data = &self.edges[id];
            if data.source != data.target {
                return Some(EdgeReference::new(id, data, true));
            }
        }
        None
    }
}

/// Neighbors of one node. See `CsrGraph::neighbors_directed`.
pub struct Neighbors<'a, E> {
    edges: Edges<'a, E>,
    dir: Direction,
}

impl<'a, E> Iterator for Neighbors<'a, E> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let e = self.edges.next()?;
        Some(match self.dir {
            Direction::Outgoing => e.target,
            Direction::Incoming => e.source,
        })
    }
}

/// All edges of a `CsrGraph`, in id order.
pub struct EdgeReferences<'a, E> {
    iter: std::iter::Enumerate<slice::Iter<'a, EdgeData<E>>>,
}

impl<'a, E> Iterator for EdgeReferences<'a, E> {
    type Item = EdgeReference<'a, E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(id, data)| EdgeReference::new(id, data, false))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// All nodes of a `CsrGraph` with their data, in id order.
pub struct NodeReferences<'a, N> {
    iter: std::iter::Enumerate<slice::Iter<'a, N>>,
}

impl<'a, N> Iterator for NodeReferences<'a, N> {
    type Item = (usize, &'a N);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}
