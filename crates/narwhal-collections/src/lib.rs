#![forbid(unsafe_code)]

//! Auxiliary collections used by `narwhal`'s graph algorithms.
//!
//! - [`IndexedPriorityQueue`]: a binary heap whose items can be re-prioritized or removed
//!   by handle in `O(log n)` (Dijkstra's relaxation step).
//! - [`UnionFind`]: weighted quick-union with full path compression (Kruskal's cycle check).

pub mod error;
pub mod priority_queue;
pub mod union_find;

pub use error::{Error, Result};
pub use priority_queue::{IndexedPriorityQueue, ItemHandle};
pub use union_find::UnionFind;
