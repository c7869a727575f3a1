// #![warn(missing_docs)]

//! # dfs_graphs
//!
//! Structural analysis of small graphs whose vertices are the dense range
//! `0..n`: reachability, connected components, depth-first timestamps,
//! bridges, directed cycles, trees and forests.
//!
//! Everything is built on one depth-first search engine and two numberings
//! derived from it:
//! - visit/finish timestamps ([`Graph::dfs_num`]), used for directed cycles,
//! - low-link numbers ([`Graph::low_link_num`]), used for bridges.
//!
//! Topology is fixed when the graph is built. Per-vertex and per-edge payloads
//! can be attached afterwards, see `mod augment`.
//!
//! ```
//! use dfs_graphs::Graph;
//!
//! let g: Graph = Graph::new(6, &[(0, 1), (1, 2), (3, 1), (3, 4), (5, 2), (2, 3)], false);
//! assert!(g.reachable_from(0));
//! assert_eq!(g.critical_edges(), vec![(0, 1), (2, 5), (3, 4)]);
//! assert!(!g.is_tree());
//! ```
//!
//! Interop with [`petgraph`](https://docs.rs/petgraph) lives in `mod interop`.

pub mod augment;
pub mod config;
pub mod debugging;
pub mod error;
pub mod graph;
pub mod interop;
pub mod low_link;
pub mod numbering;
pub mod queries;
pub mod traversal;
pub mod types;

#[cfg(test)]
mod testing;

pub use config::{Descent, GraphConfig};
pub use error::GraphError;
pub use graph::Graph;
pub use low_link::LowLink;
pub use types::{Edge, Timestamps, Vertex};
