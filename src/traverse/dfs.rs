//! Depth-first walkers: preorder (`Dfs`) and postorder (`DfsPostOrder`).

use crate::macros::trace_event;
use crate::visit::{GraphRef, IntoNeighbors, VisitMap, Visitable, Walker};

/// A preorder depth-first walk.
///
/// The stack may hold several copies of a node that was pushed from different
/// parents before its first visit; popping skips entries that are already
/// visited. Neighbors are pushed in native order, so the last-pushed neighbor
/// is explored next.
#[derive(Clone, Debug)]
pub struct Dfs<N, VM> {
    /// Nodes waiting to be visited.
    pub stack: Vec<N>,
    /// Nodes already emitted.
    pub discovered: VM,
}

impl<N, VM> Default for Dfs<N, VM>
where
    VM: Default,
{
    fn default() -> Self {
        Dfs {
            stack: Vec::new(),
            discovered: VM::default(),
        }
    }
}

impl<N, VM> Dfs<N, VM>
where
    N: Copy + PartialEq,
    VM: VisitMap<N>,
{
    /// Creates a walk seeded with `start`.
    pub fn new<G>(graph: G, start: N) -> Self
    where
        G: GraphRef + Visitable<NodeId = N, Map = VM>,
    {
        let mut dfs = Dfs::empty(graph);
        dfs.move_to(start);
        dfs
    }

    /// Creates a walk with no start; call `move_to` to seed it.
    pub fn empty<G>(graph: G) -> Self
    where
        G: GraphRef + Visitable<NodeId = N, Map = VM>,
    {
        Dfs {
            stack: Vec::new(),
            discovered: graph.visit_map(),
        }
    }

    /// Builds a walk from an existing stack and visit map.
    pub fn from_parts(stack: Vec<N>, discovered: VM) -> Self {
        Dfs { stack, discovered }
    }

    /// Clears the stack and the visit map.
    pub fn reset<G>(&mut self, graph: G)
    where
        G: GraphRef + Visitable<NodeId = N, Map = VM>,
    {
        graph.reset_map(&mut self.discovered);
        self.stack.clear();
    }

    /// Restarts the walk from `start`, keeping the visit map.
    ///
    /// Nodes visited by earlier walks are not emitted again.
    pub fn move_to(&mut self, start: N) {
        self.stack.clear();
        self.stack.push(start);
    }

    /// Returns the next node in depth-first preorder, or `None` when done.
    pub fn next<G>(&mut self, graph: G) -> Option<N>
    where
        G: IntoNeighbors<NodeId = N>,
    {
        while let Some(node) = self.stack.pop() {
            if self.discovered.visit(node) {
                for succ in graph.neighbors(node) {
                    if !self.discovered.is_visited(succ) {
                        self.stack.push(succ);
                    }
                }
                return Some(node);
            }
        }
        None
    }
}

impl<G> Walker<G> for Dfs<G::NodeId, G::Map>
where
    G: IntoNeighbors + Visitable,
{
    type Item = G::NodeId;

    fn walk_next(&mut self, context: G) -> Option<Self::Item> {
        self.next(context)
    }
}

/// A postorder depth-first walk.
///
/// Each stack entry carries a flag recording whether the node's children have
/// already been pushed. A node is emitted only after every descendant it
/// reached first in this walk has been emitted.
#[derive(Clone, Debug)]
pub struct DfsPostOrder<N, VM> {
    /// Pending nodes and their "children pushed" flag.
    pub stack: Vec<(N, bool)>,
    /// Nodes whose children have been pushed.
    pub discovered: VM,
    /// Nodes already emitted.
    pub finished: VM,
}

impl<N, VM> Default for DfsPostOrder<N, VM>
where
    VM: Default,
{
    fn default() -> Self {
        DfsPostOrder {
            stack: Vec::new(),
            discovered: VM::default(),
            finished: VM::default(),
        }
    }
}

impl<N, VM> DfsPostOrder<N, VM>
where
    N: Copy + PartialEq,
    VM: VisitMap<N>,
{
    /// Creates a walk seeded with `start`.
    pub fn new<G>(graph: G, start: N) -> Self
    where
        G: GraphRef + Visitable<NodeId = N, Map = VM>,
    {
        let mut dfs = DfsPostOrder::empty(graph);
        dfs.move_to(start);
        dfs
    }

    /// Creates a walk with no start; call `move_to` to seed it.
    pub fn empty<G>(graph: G) -> Self
    where
        G: GraphRef + Visitable<NodeId = N, Map = VM>,
    {
        DfsPostOrder {
            stack: Vec::new(),
            discovered: graph.visit_map(),
            finished: graph.visit_map(),
        }
    }

    /// Clears the stack and both visit maps.
    pub fn reset<G>(&mut self, graph: G)
    where
        G: GraphRef + Visitable<NodeId = N, Map = VM>,
    {
        graph.reset_map(&mut self.discovered);
        graph.reset_map(&mut self.finished);
        self.stack.clear();
    }

    /// Restarts the walk from `start`, keeping both visit maps.
    pub fn move_to(&mut self, start: N) {
        self.stack.clear();
        self.stack.push((start, false));
    }

    /// Returns the next node in depth-first postorder, or `None` when done.
    pub fn next<G>(&mut self, graph: G) -> Option<N>
    where
        G: IntoNeighbors<NodeId = N>,
    {
        while let Some(&(node, expanded)) = self.stack.last() {
            if expanded {
                self.stack.pop();
                if self.finished.visit(node) {
                    return Some(node);
                }
            } else if self.discovered.visit(node) {
                if let Some(top) = self.stack.last_mut() {
                    top.1 = true;
                }
                for succ in graph.neighbors(node) {
                    if !self.discovered.is_visited(succ) {
                        self.stack.push((succ, false));
                    }
                }
            } else {
                // Duplicate of a node already expanded elsewhere.
                trace_event!(stack = self.stack.len(), "postorder skip");
                self.stack.pop();
            }
        }
        None
    }
}

impl<G> Walker<G> for DfsPostOrder<G::NodeId, G::Map>
where
    G: IntoNeighbors + Visitable,
{
    type Item = G::NodeId;

    fn walk_next(&mut self, context: G) -> Option<Self::Item> {
        self.next(context)
    }
}
