//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Arc;

use halo_visit::direction::{Direction, Incoming, Outgoing};
use halo_visit::visit::{
    GraphBase, IntoNeighbors, IntoNeighborsDirected, IntoNodeIdentifiers, KeyedVisitMap,
    Visitable,
};
use proptest::prelude::*;

/// A directed graph keyed by arbitrary `u64` ids.
///
/// Ids are sparse, so the graph is not `NodeIndexable` and traversals use a
/// hash-based visit map bounded by the graph's key set.
#[derive(Clone, Debug, Default)]
pub struct KeyedGraph {
    out: BTreeMap<u64, Vec<u64>>,
    inc: BTreeMap<u64, Vec<u64>>,
    keys: Arc<HashSet<u64>>,
}

impl KeyedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, id: u64) {
        self.out.entry(id).or_default();
        self.inc.entry(id).or_default();
        if !self.keys.contains(&id) {
            Arc::make_mut(&mut self.keys).insert(id);
        }
    }

    pub fn add_edge(&mut self, a: u64, b: u64) {
        self.add_node(a);
        self.add_node(b);
        self.out.entry(a).or_default().push(b);
        self.inc.entry(b).or_default().push(a);
    }

    pub fn from_edges(edges: &[(u64, u64)]) -> Self {
        let mut g = Self::new();
        for &(a, b) in edges {
            g.add_edge(a, b);
        }
        g
    }

    fn row(&self, a: u64, dir: Direction) -> &[u64] {
        let map = match dir {
            Outgoing => &self.out,
            Incoming => &self.inc,
        };
        map.get(&a).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl GraphBase for KeyedGraph {
    type NodeId = u64;
    type EdgeId = (u64, u64);
}

impl Visitable for KeyedGraph {
    type Map = KeyedVisitMap<u64>;

    fn visit_map(&self) -> KeyedVisitMap<u64> {
        KeyedVisitMap::new(Arc::clone(&self.keys))
    }

    fn reset_map(&self, map: &mut KeyedVisitMap<u64>) {
        map.clear();
    }
}

impl<'a> IntoNeighbors for &'a KeyedGraph {
    type Neighbors = std::iter::Copied<std::slice::Iter<'a, u64>>;

    fn neighbors(self, a: u64) -> Self::Neighbors {
        self.row(a, Outgoing).iter().copied()
    }
}

impl<'a> IntoNeighborsDirected for &'a KeyedGraph {
    type NeighborsDirected = std::iter::Copied<std::slice::Iter<'a, u64>>;

    fn neighbors_directed(self, a: u64, dir: Direction) -> Self::NeighborsDirected {
        self.row(a, dir).iter().copied()
    }
}

impl<'a> IntoNodeIdentifiers for &'a KeyedGraph {
    type NodeIdentifiers = std::iter::Copied<std::collections::btree_map::Keys<'a, u64, Vec<u64>>>;

    fn node_identifiers(self) -> Self::NodeIdentifiers {
        self.out.keys().copied()
    }
}

/// Every node reachable from `starts` along out-edges, by naive fixpoint.
pub fn reachable(adjacency: &[Vec<usize>], starts: &[usize]) -> BTreeSet<usize> {
    let mut seen: BTreeSet<usize> = starts.iter().copied().filter(|&s| s < adjacency.len()).collect();
    loop {
        let next: BTreeSet<usize> = seen
            .iter()
            .flat_map(|&u| adjacency[u].iter().copied())
            .chain(seen.iter().copied())
            .collect();
        if next.len() == seen.len() {
            return seen;
        }
        seen = next;
    }
}

/// Subgraph induced by `mask`: rows of excluded nodes are emptied and edges
/// into excluded nodes dropped. Row order is kept.
pub fn induced(adjacency: &[Vec<usize>], mask: &[bool]) -> Vec<Vec<usize>> {
    adjacency
        .iter()
        .enumerate()
        .map(|(u, row)| {
            if mask[u] {
                row.iter().copied().filter(|&v| mask[v]).collect()
            } else {
                Vec::new()
            }
        })
        .collect()
}

/// Flattens an adjacency list into `(source, target)` pairs.
pub fn edge_list(adjacency: &[Vec<usize>]) -> Vec<(usize, usize)> {
    adjacency
        .iter()
        .enumerate()
        .flat_map(|(u, row)| row.iter().map(move |&v| (u, v)))
        .collect()
}

/// Arbitrary directed graph (self-loops and parallel edges allowed).
pub fn arb_graph(max_nodes: usize) -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1..=max_nodes).prop_flat_map(|n| {
        proptest::collection::vec(proptest::collection::vec(0..n, 0..4), n)
    })
}

/// Arbitrary DAG: every edge goes from a lower to a higher index.
pub fn arb_dag(max_nodes: usize) -> impl Strategy<Value = Vec<Vec<usize>>> {
    arb_graph(max_nodes).prop_map(|adjacency| {
        adjacency
            .into_iter()
            .enumerate()
            .map(|(u, row)| row.into_iter().filter(|&v| v > u).collect::<Vec<_>>())
            .collect::<Vec<_>>()
    })
}

/// Arbitrary graph plus a node subset mask.
pub fn arb_graph_with_mask(max_nodes: usize) -> impl Strategy<Value = (Vec<Vec<usize>>, Vec<bool>)> {
    arb_graph(max_nodes).prop_flat_map(|adjacency| {
        let n = adjacency.len();
        (Just(adjacency), proptest::collection::vec(any::<bool>(), n))
    })
}
