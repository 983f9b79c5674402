//! Algorithms over [`Graph`](super::Graph).
//!
//! Each entry point is an inherent method on `Graph`; the auxiliary structures (heap,
//! union-find, work stacks) are built per call and dropped when it returns.

use super::NodeId;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

mod shortest_path;
mod spanning_tree;
mod topology;
mod traverse;

pub use spanning_tree::SpanningForest;
pub use traverse::Traversal;

/// Per-node algorithm output.
pub type NodeMap<T> = IndexMap<NodeId, T, FxBuildHasher>;
