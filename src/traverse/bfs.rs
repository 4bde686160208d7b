//! Breadth-first walker.

use std::collections::VecDeque;

use crate::macros::trace_event;
use crate::visit::{GraphRef, IntoNeighbors, VisitMap, Visitable, Walker};

/// A breadth-first walk.
///
/// Holds a FIFO queue of discovered nodes and a visit map; the graph is passed
/// to every `next` call. Nodes are marked visited when they are enqueued, so
/// each reachable node is emitted exactly once, in non-decreasing distance
/// from the start set. Within a layer, order follows the graph's native
/// neighbor order.
///
/// ```
/// use halo_visit::graph::CsrGraph;
/// use halo_visit::traverse::Bfs;
///
/// // 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3
/// let g = CsrGraph::from_adjacency(&[vec![1, 2], vec![3], vec![3], vec![]]);
/// let mut bfs = Bfs::new(&g, 0);
/// let mut order = Vec::new();
/// while let Some(n) = bfs.next(&g) {
///     order.push(n);
/// }
/// assert_eq!(order, vec![0, 1, 2, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct Bfs<N, VM> {
    /// Discovered nodes awaiting emission.
    pub stack: VecDeque<N>,
    /// Nodes already discovered.
    pub discovered: VM,
}

impl<N, VM> Default for Bfs<N, VM>
where
    VM: Default,
{
    fn default() -> Self {
        Bfs {
            stack: VecDeque::new(),
            discovered: VM::default(),
        }
    }
}

impl<N, VM> Bfs<N, VM>
where
    N: Copy + PartialEq,
    VM: VisitMap<N>,
{
    /// Creates a walk seeded with `start`.
    ///
    /// A start the visit map refuses (absent or filtered out) yields an empty
    /// walk.
    pub fn new<G>(graph: G, start: N) -> Self
    where
        G: GraphRef + Visitable<NodeId = N, Map = VM>,
    {
        Self::with_starts(graph, std::iter::once(start))
    }

    /// Creates a walk seeded with every node of `starts`, all in layer zero.
    pub fn with_starts<G, I>(graph: G, starts: I) -> Self
    where
        G: GraphRef + Visitable<NodeId = N, Map = VM>,
        I: IntoIterator<Item = N>,
    {
        let mut discovered = graph.visit_map();
        let stack: VecDeque<N> = starts.into_iter().filter(|&s| discovered.visit(s)).collect();
        trace_event!(seeds = stack.len(), "bfs seeded");
        Bfs { stack, discovered }
    }

    /// Returns the next node in breadth-first order, or `None` when done.
    pub fn next<G>(&mut self, graph: G) -> Option<N>
    where
        G: IntoNeighbors<NodeId = N>,
    {
        let node = self.stack.pop_front()?;
        for succ in graph.neighbors(node) {
            if self.discovered.visit(succ) {
                self.stack.push_back(succ);
            }
        }
        Some(node)
    }
}

impl<G> Walker<G> for Bfs<G::NodeId, G::Map>
where
    G: IntoNeighbors + Visitable,
{
    type Item = G::NodeId;

    fn walk_next(&mut self, context: G) -> Option<Self::Item> {
        self.next(context)
    }
}
