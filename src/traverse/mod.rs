//! Traversal algorithms generic over the capability traits.
//!
//! - `Bfs`, `Dfs`, `DfsPostOrder`, `Topo`: pull-based walkers that borrow the
//!   graph per step and implement `Walker`
//! - `depth_first_search`: push-based DFS reporting `DfsEvent`s
//!
//! ### Requirements
//! | Algorithm | Bounds |
//! |-----------|--------|
//! | `Bfs`, `Dfs`, `DfsPostOrder` | `IntoNeighbors + Visitable` |
//! | `Topo` | `IntoNodeIdentifiers + IntoNeighborsDirected + Visitable` |
//! | `depth_first_search` | `IntoNeighbors + Visitable` |

pub mod bfs;
pub mod dfs;
pub mod search;
pub mod topo;

pub use bfs::Bfs;
pub use dfs::{Dfs, DfsPostOrder};
pub use search::{depth_first_search, Control, ControlFlow, DfsEvent, Time};
pub use topo::Topo;

#[cfg(test)]
mod tests;
