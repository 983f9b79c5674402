#![forbid(unsafe_code)]

//! In-memory graph toolkit.
//!
//! A [`Graph`] is built from a flat list of `(from, to, weight?)` triples and exposes:
//! - depth/width traversal ([`Graph::traverse`])
//! - single-source shortest distances via Dijkstra ([`Graph::min_path_map`])
//! - a minimum spanning forest via Kruskal ([`Graph::min_spanning_tree`])
//! - topological depth ranking ([`Graph::topology_depths`])
//!
//! The heap and union-find backing those algorithms live in `narwhal-collections`, re-exported
//! here as [`collections`].

pub mod error;
mod graph;

pub use narwhal_collections as collections;

pub use error::{Error, Result};
pub use graph::alg::{self, NodeMap, SpanningForest, Traversal};
pub use graph::{Degree, Edge, EdgeId, EdgeSpec, Graph, GraphDocument, GraphOptions, Node, NodeId};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
