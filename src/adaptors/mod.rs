//! Graph views that wrap another graph and alter what it exposes.
//!
//! - `Reversed`: every edge points the other way
//! - `NodeFiltered`: only nodes accepted by a `FilterNode` are visible
//! - `EdgeFiltered`: only edges accepted by a `FilterEdge` are visible
//!
//! Adaptors take the inner graph by value; pass `&g` to wrap a borrowed
//! graph. Each adaptor implements a capability only when the inner graph
//! does, so adaptors compose freely (`Reversed(&NodeFiltered(..))` is a
//! valid graph for every walker its capabilities allow).

mod edge_filtered;
mod filter;
mod node_filtered;
mod reversed;

pub use edge_filtered::{EdgeFiltered, EdgeFilteredEdges, EdgeFilteredNeighbors};
pub use filter::{FilterEdge, FilterNode};
pub use node_filtered::{
    NodeFiltered, NodeFilteredEdges, NodeFilteredMap, NodeFilteredNeighbors,
    NodeFilteredNodeReferences, NodeFilteredNodes,
};
pub use reversed::{ReversedEdgeReference, ReversedEdges, Reversed};
