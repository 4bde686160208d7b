//! Graph capability traits, visit maps and the walker abstraction.
//!
//! Algorithms in this crate never name a concrete graph type. They declare the
//! minimal set of capabilities they need as generic bounds:
//!
//! | Capability | Trait |
//! |------------|-------|
//! | node / edge identity | `GraphBase`, `GraphRef` |
//! | node / edge data | `Data`, `DataMap`, `IntoNodeReferences` |
//! | counts | `NodeCount`, `EdgeCount` |
//! | dense indices | `NodeIndexable`, `EdgeIndexable`, `NodeCompactIndexable` |
//! | neighbors | `IntoNeighbors`, `IntoNeighborsDirected` |
//! | edges | `IntoEdgeReferences`, `IntoEdges`, `IntoEdgesDirected`, `EdgeEndpoints` |
//! | nodes | `IntoNodeIdentifiers` |
//! | directedness | `GraphProp` |
//! | O(1) adjacency | `GetAdjacencyMatrix` |
//! | visited sets | `Visitable`, `VisitMap` |
//!
//! Concrete graphs and adaptors implement only the traits they can honestly
//! support; a missing capability is a compile error at the call site.

pub(crate) mod into;
pub(crate) mod traits;
pub(crate) mod visited;
pub(crate) mod walker;

pub use into::{
    EdgeRef, IntoEdgeReferences, IntoEdges, IntoEdgesDirected, IntoNeighbors,
    IntoNeighborsDirected, IntoNodeIdentifiers, IntoNodeReferences, NodeRef,
};
pub use traits::{
    Data, DataMap, EdgeCount, EdgeEndpoints, EdgeIndexable, GetAdjacencyMatrix, GraphBase,
    GraphProp, GraphRef, NodeCompactIndexable, NodeCount, NodeIndexable, Visitable,
};
pub use visited::{KeyedVisitMap, VisitMap, VisitedBits};
pub use walker::{Walker, WalkerIter};
