//! # `halo-visit` - Capability-Based Graph Traversal
//!
//! Graph traversal algorithms written once, against small capability traits,
//! and reusable over any graph representation that implements them.
//!
//! ## Key Features
//!
//! - **Capability traits**: algorithms ask only for what they use
//!   (`IntoNeighbors`, `Visitable`, `NodeIndexable`, ...)
//! - **Pull-based walkers**: `Bfs`, `Dfs`, `DfsPostOrder` and `Topo` hold
//!   their own state and borrow the graph per step, so the graph stays free
//!   between steps
//! - **Event-driven search**: `depth_first_search` reports discovery, edge
//!   classification and finish events with discovery/finish times, steered by
//!   a `Control` value returned from the visitor
//! - **Adaptors**: `Reversed`, `NodeFiltered` and `EdgeFiltered` compose
//!   without copying the graph
//! - **Reference graph**: `CsrGraph`, a compressed-sparse-row graph with its
//!   transpose, implementing every capability
//!
//! ## Architecture
//!
//! ### Layers
//!
//! 1. **`visit`**: capability traits, `VisitMap`/`VisitedBits` and the
//!    `Walker` abstraction
//! 2. **`traverse`**: the walkers and `depth_first_search`
//! 3. **`adaptors`**: views over another graph
//! 4. **`graph`**: concrete graphs
//!
//! ### Conventions
//!
//! - `edges_directed(a, Outgoing)` yields references with `source() == a`;
//!   `edges_directed(a, Incoming)` yields references with `target() == a`.
//!   Undirected graphs honor this too, reorienting edges as needed.
//! - A visit map may refuse an id (`visit` returns `false`) when the id is not
//!   part of the graph. Walkers only ever emit ids whose `visit` succeeded, so
//!   starting from an absent or filtered-out node emits nothing. `VisitedBits`
//!   and `KeyedVisitMap` refuse absent ids; a bare `HashSet` accepts any id,
//!   so graphs that use one as their map will emit an absent start.
//! - Traversal order among a node's neighbors is the order the graph reports
//!   them in.
//!
//! ## Features
//!
//! - `tracing`: emits `trace`-level events from the walkers and the search
//!
//! ## Example
//!
//! ```rust
//! use halo_visit::graph::CsrGraph;
//! use halo_visit::traverse::{depth_first_search, Bfs, Control, DfsEvent, Topo};
//! use halo_visit::visit::Walker;
//!
//! // A -> B, A -> C, B -> D, C -> D
//! let g = CsrGraph::from_adjacency(&[vec![1, 2], vec![3], vec![3], vec![]]);
//!
//! let bfs: Vec<_> = Bfs::new(&g, 0).iter(&g).collect();
//! assert_eq!(bfs, vec![0, 1, 2, 3]);
//!
//! let order: Vec<_> = Topo::new(&g).iter(&g).collect();
//! assert_eq!(order, vec![0, 1, 2, 3]);
//!
//! // Stop as soon as D is discovered.
//! let found = depth_first_search(&g, Some(0), |event| match event {
//!     DfsEvent::Discover(3, t) => Control::Break(t),
//!     _ => Control::Continue,
//! });
//! assert!(found.break_value().is_some());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod macros;

pub mod adaptors;
pub mod direction;
pub mod graph;
pub mod traverse;
pub mod visit;

pub use adaptors::{EdgeFiltered, NodeFiltered, Reversed};
pub use direction::{Directed, Direction, EdgeType, Incoming, Outgoing, Undirected};
pub use graph::CsrGraph;
pub use traverse::{depth_first_search, Bfs, Control, ControlFlow, Dfs, DfsEvent, DfsPostOrder, Time, Topo};
pub use visit::{KeyedVisitMap, VisitMap, VisitedBits, Walker};

// Compile-time assertions for the small value types handed to visitors.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<Time>() == mem::size_of::<usize>());
    assert!(mem::size_of::<Control<()>>() == 1);
    assert!(mem::size_of::<DfsEvent<u32>>() <= 3 * mem::size_of::<usize>());
};
