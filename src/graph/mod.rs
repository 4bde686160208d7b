//! Concrete graph representations implementing the capability traits.
//!
//! - `csr`: an immutable compressed-sparse-row graph with its transpose

pub mod csr;

pub use csr::CsrGraph;
