//! Topological-order walker.

use std::collections::VecDeque;

use crate::direction::Incoming;
use crate::macros::trace_event;
use crate::visit::{
    GraphRef, IntoNeighborsDirected, IntoNodeIdentifiers, VisitMap, Visitable, Walker,
};

/// A topological-order walk (Kahn's algorithm).
///
/// A node is *ready* once every incoming neighbor has been emitted, which is
/// exactly "remaining in-degree zero". Rather than storing a counter per node,
/// readiness is re-derived from the `ordered` visit map when an out-neighbor
/// of an emitted node is examined, so the walk needs no `NodeIndexable`.
///
/// Ties are broken in FIFO order: seeds (nodes with no incoming neighbors) in
/// node-identifier order, then nodes in the order they became ready.
///
/// Cyclic input is not an error. Nodes on a cycle, including self-loops, never
/// become ready, and neither does anything reachable only through them; the
/// walk ends after emitting the acyclic prefix. Undirected graphs report every
/// edge as incoming too, so only isolated nodes are emitted.
#[derive(Clone, Debug)]
pub struct Topo<N, VM> {
    tovisit: VecDeque<N>,
    ordered: VM,
}

impl<N, VM> Default for Topo<N, VM>
where
    VM: Default,
{
    fn default() -> Self {
        Topo {
            tovisit: VecDeque::new(),
            ordered: VM::default(),
        }
    }
}

impl<N, VM> Topo<N, VM>
where
    N: Copy + PartialEq,
    VM: VisitMap<N>,
{
    /// Creates a walk over the whole graph.
    pub fn new<G>(graph: G) -> Self
    where
        G: IntoNodeIdentifiers + IntoNeighborsDirected + Visitable<NodeId = N, Map = VM>,
    {
        let mut topo = Self::unseeded(graph);
        topo.extend_with_initials(graph);
        topo
    }

    fn unseeded<G>(graph: G) -> Self
    where
        G: GraphRef + Visitable<NodeId = N, Map = VM>,
    {
        Topo {
            tovisit: VecDeque::new(),
            ordered: graph.visit_map(),
        }
    }

    fn extend_with_initials<G>(&mut self, graph: G)
    where
        G: IntoNodeIdentifiers + IntoNeighborsDirected<NodeId = N>,
    {
        self.tovisit.extend(
            graph
                .node_identifiers()
                .filter(move |&n| graph.neighbors_directed(n, Incoming).next().is_none()),
        );
        trace_event!(seeds = self.tovisit.len(), "topo seeded");
    }

    /// Clears the walk and re-seeds it from the graph's source nodes.
    pub fn reset<G>(&mut self, graph: G)
    where
        G: IntoNodeIdentifiers + IntoNeighborsDirected + Visitable<NodeId = N, Map = VM>,
    {
        graph.reset_map(&mut self.ordered);
        self.tovisit.clear();
        self.extend_with_initials(graph);
    }

    /// Returns the next node in topological order, or `None` when done.
    pub fn next<G>(&mut self, graph: G) -> Option<N>
    where
        G: IntoNeighborsDirected<NodeId = N>,
    {
        while let Some(node) = self.tovisit.pop_front() {
            // Parallel edges can enqueue a node more than once.
            if !self.ordered.visit(node) {
                continue;
            }
            for succ in graph.neighbors(node) {
                if self.ordered.is_visited(succ) {
                    continue;
                }
                let ready = graph
                    .neighbors_directed(succ, Incoming)
                    .all(|pred| self.ordered.is_visited(pred));
                if ready {
                    self.tovisit.push_back(succ);
                }
            }
            return Some(node);
        }
        None
    }
}

impl<G> Walker<G> for Topo<G::NodeId, G::Map>
where
    G: IntoNeighborsDirected + Visitable,
{
    type Item = G::NodeId;

    fn walk_next(&mut self, context: G) -> Option<Self::Item> {
        self.next(context)
    }
}
