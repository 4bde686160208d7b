//! Node and edge predicates used by the filtering adaptors.

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

use crate::visit::VisitedBits;

/// Decides which nodes a `NodeFiltered` graph keeps.
pub trait FilterNode<N> {
    /// Returns `true` to keep `node`.
    fn include_node(&self, node: N) -> bool;
}

impl<F, N> FilterNode<N> for F
where
    F: Fn(N) -> bool,
{
    #[inline]
    fn include_node(&self, node: N) -> bool {
        (*self)(node)
    }
}

/// Keeps exactly the members of the set.
impl<N, S> FilterNode<N> for HashSet<N, S>
where
    N: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn include_node(&self, node: N) -> bool {
        self.contains(&node)
    }
}

impl<'a, N, S> FilterNode<N> for &'a HashSet<N, S>
where
    N: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn include_node(&self, node: N) -> bool {
        self.contains(&node)
    }
}

/// Keeps exactly the set bits.
impl FilterNode<usize> for VisitedBits {
    #[inline]
    fn include_node(&self, node: usize) -> bool {
        self.is_set(node)
    }
}

impl<'a> FilterNode<usize> for &'a VisitedBits {
    #[inline]
    fn include_node(&self, node: usize) -> bool {
        self.is_set(node)
    }
}

/// Decides which edges an `EdgeFiltered` graph keeps.
pub trait FilterEdge<Edge> {
    /// Returns `true` to keep `edge`.
    fn include_edge(&self, edge: Edge) -> bool;
}

impl<F, Edge> FilterEdge<Edge> for F
where
    F: Fn(Edge) -> bool,
{
    #[inline]
    fn include_edge(&self, edge: Edge) -> bool {
        (*self)(edge)
    }
}
