//! Event-driven depth-first search.
//!
//! `depth_first_search` pushes structured events to a caller-supplied
//! callback instead of returning a node sequence. The callback steers the
//! search through its return value (`Control`, `()`, or `Result`).

use serde::{Deserialize, Serialize};

use crate::macros::trace_event;
use crate::visit::{IntoNeighbors, VisitMap, Visitable};

/// A discovery or finish timestamp.
///
/// One counter is shared by the whole search and advances once per
/// `Discover` and once per `Finish`, so timestamps are unique and strictly
/// increasing in event order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Time(pub usize);

/// An event reported by `depth_first_search`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DfsEvent<N> {
    /// First time the node is reached.
    Discover(N, Time),
    /// An edge to a node not yet discovered; the search descends into it.
    TreeEdge(N, N),
    /// An edge to a node that is discovered but not finished (an ancestor).
    BackEdge(N, N),
    /// An edge to a node that is already finished.
    CrossForwardEdge(N, N),
    /// All of the node's edges have been processed.
    Finish(N, Time),
}

/// Tri-state callback result steering `depth_first_search`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control<B> {
    /// Keep searching.
    Continue,
    /// Skip the subtree below the current event.
    ///
    /// Honored on `Discover` and `TreeEdge`; elsewhere it means `Continue`.
    Prune,
    /// Stop the whole search and return this value.
    Break(B),
}

impl Control<()> {
    /// A `Break` carrying no value.
    pub fn breaking() -> Control<()> {
        Control::Break(())
    }
}

impl<B> Default for Control<B> {
    fn default() -> Self {
        Control::Continue
    }
}

impl<B> Control<B> {
    /// Returns the break value, if any.
    pub fn break_value(self) -> Option<B> {
        match self {
            Control::Continue | Control::Prune => None,
            Control::Break(b) => Some(b),
        }
    }
}

/// Values a search callback may return.
pub trait ControlFlow {
    /// The value meaning "keep going".
    fn continuing() -> Self;
    /// Returns `true` if the search must stop and return this value.
    fn should_break(&self) -> bool;
    /// Returns `true` if the current subtree must be skipped.
    fn should_prune(&self) -> bool;
}

impl ControlFlow for () {
    fn continuing() {}

    #[inline]
    fn should_break(&self) -> bool {
        false
    }

    #[inline]
    fn should_prune(&self) -> bool {
        false
    }
}

impl<B> ControlFlow for Control<B> {
    fn continuing() -> Self {
        Control::Continue
    }

    #[inline]
    fn should_break(&self) -> bool {
        matches!(self, Control::Break(_))
    }

    #[inline]
    fn should_prune(&self) -> bool {
        matches!(self, Control::Prune)
    }
}

/// `Err` breaks the search; `Ok` defers to the inner value.
impl<C: ControlFlow, E> ControlFlow for Result<C, E> {
    fn continuing() -> Self {
        Ok(C::continuing())
    }

    fn should_break(&self) -> bool {
        match self {
            Ok(c) => c.should_break(),
            Err(_) => true,
        }
    }

    fn should_prune(&self) -> bool {
        match self {
            Ok(c) => c.should_prune(),
            Err(_) => false,
        }
    }
}

/// Runs a depth-first search from each node of `starts`, reporting events to
/// `visitor`.
///
/// Starts already reached by an earlier start are skipped. The search state
/// is shared across starts, so edges into earlier trees are reported as
/// `CrossForwardEdge`.
///
/// Event rules:
/// - `Discover` on entry, one edge event per neighbor, `Finish` on exit.
/// - A breaking return value is returned immediately; no further events.
/// - `Prune` on `Discover` skips the node's edges, but its `Finish` is still
///   reported, so every `Discover` is matched by a `Finish`.
/// - `Prune` on `TreeEdge(u, v)` leaves `v` undiscovered; it may still be
///   reached later through another edge.
///
/// The search keeps an explicit frame stack on the heap, so graph depth is
/// not limited by the thread's call stack.
///
/// ```
/// use halo_visit::graph::CsrGraph;
/// use halo_visit::traverse::{depth_first_search, Control, DfsEvent};
///
/// // 0 -> 1 -> 2 -> 3
/// let g = CsrGraph::from_adjacency(&[vec![1], vec![2], vec![3], vec![]]);
/// let found = depth_first_search(&g, Some(0), |event| match event {
///     DfsEvent::Discover(2, time) => Control::Break(time),
///     _ => Control::Continue,
/// });
/// assert_eq!(found.break_value().map(|t| t.0), Some(2));
/// ```
pub fn depth_first_search<G, I, F, C>(graph: G, starts: I, mut visitor: F) -> C
where
    G: IntoNeighbors + Visitable,
    I: IntoIterator<Item = G::NodeId>,
    F: FnMut(DfsEvent<G::NodeId>) -> C,
    C: ControlFlow,
{
    let mut search = Search {
        graph,
        discovered: graph.visit_map(),
        finished: graph.visit_map(),
        time: Time(0),
        frames: Vec::new(),
    };

    for start in starts {
        let ret = search.run(start, &mut visitor);
        if ret.should_break() {
            trace_event!(time = search.time.0, "depth-first search stopped early");
            return ret;
        }
    }
    C::continuing()
}

struct Frame<N, I> {
    node: N,
    neighbors: I,
}

struct Search<G>
where
    G: IntoNeighbors + Visitable,
{
    graph: G,
    discovered: G::Map,
    finished: G::Map,
    time: Time,
    frames: Vec<Frame<G::NodeId, G::Neighbors>>,
}

impl<G> Search<G>
where
    G: IntoNeighbors + Visitable,
{
    fn tick(&mut self) -> Time {
        let now = self.time;
        self.time.0 += 1;
        now
    }

    /// Reports `Discover` for an already-marked node and opens its frame.
    fn enter<F, C>(&mut self, node: G::NodeId, visitor: &mut F) -> C
    where
        F: FnMut(DfsEvent<G::NodeId>) -> C,
        C: ControlFlow,
    {
        let now = self.tick();
        let ret = visitor(DfsEvent::Discover(node, now));
        if ret.should_break() {
            return ret;
        }
        if ret.should_prune() {
            return self.leave(node, visitor);
        }
        self.frames.push(Frame {
            node,
            neighbors: self.graph.neighbors(node),
        });
        C::continuing()
    }

    fn leave<F, C>(&mut self, node: G::NodeId, visitor: &mut F) -> C
    where
        F: FnMut(DfsEvent<G::NodeId>) -> C,
        C: ControlFlow,
    {
        self.finished.visit(node);
        let now = self.tick();
        let ret = visitor(DfsEvent::Finish(node, now));
        if ret.should_break() {
            ret
        } else {
            C::continuing()
        }
    }

    fn run<F, C>(&mut self, start: G::NodeId, visitor: &mut F) -> C
    where
        F: FnMut(DfsEvent<G::NodeId>) -> C,
        C: ControlFlow,
    {
        if !self.discovered.visit(start) {
            return C::continuing();
        }
        let ret = self.enter(start, visitor);
        if ret.should_break() {
            return ret;
        }

        while let Some(frame) = self.frames.last_mut() {
            let u = frame.node;
            let ret = match frame.neighbors.next() {
                Some(v) if !self.discovered.is_visited(v) => {
                    let ret = visitor(DfsEvent::TreeEdge(u, v));
                    if ret.should_break() {
                        return ret;
                    }
                    if ret.should_prune() || !self.discovered.visit(v) {
                        continue;
                    }
                    self.enter(v, visitor)
                }
                Some(v) if !self.finished.is_visited(v) => visitor(DfsEvent::BackEdge(u, v)),
                Some(v) => visitor(DfsEvent::CrossForwardEdge(u, v)),
                None => {
                    self.frames.pop();
                    self.leave(u, visitor)
                }
            };
            if ret.should_break() {
                return ret;
            }
        }
        C::continuing()
    }
}
