//! Single-source shortest distances (Dijkstra) on an indexed priority queue.

use super::NodeMap;
use crate::error::Result;
use crate::graph::{Graph, NodeId};
use narwhal_collections::IndexedPriorityQueue;
use std::hash::Hash;

#[derive(Debug, Clone, Copy)]
struct QueueItem {
    node: NodeId,
    distance: f64,
}

impl<V> Graph<V>
where
    V: Eq + Hash + Clone,
{
    /// Shortest distance from `start` to every reachable node.
    ///
    /// Unreachable nodes are absent from the result; entries appear in the order nodes are
    /// settled (non-decreasing distance). Directed graphs follow edge direction. All edges must
    /// carry a non-negative weight.
    pub fn min_path_map(&self, start: Option<&V>) -> Result<NodeMap<f64>> {
        let Some(start) = self.start_node(start) else {
            return Ok(NodeMap::default());
        };
        let weights = self.edge_weights(true)?;

        let mut queue = IndexedPriorityQueue::new(|a: &QueueItem, b: &QueueItem| {
            a.distance.total_cmp(&b.distance)
        });
        // `handles[i]` is the queue entry of `NodeId(i)`.
        let handles = queue.init(self.node_ids().map(|node| QueueItem {
            node,
            distance: if node == start { 0.0 } else { f64::INFINITY },
        }))?;

        let mut settled = vec![false; self.nodes.len()];
        let mut distances: NodeMap<f64> = NodeMap::default();
        while let Some(QueueItem { node, distance }) = queue.offer() {
            if distance.is_infinite() {
                // Everything left in the queue is unreachable.
                break;
            }
            settled[node.0] = true;
            distances.insert(node, distance);

            for edge_id in self.nodes[node.0].edges() {
                let edge = &self.edges[edge_id.0];
                let Some(next) = self.step(edge, node) else {
                    continue;
                };
                if settled[next.0] {
                    continue;
                }
                let handle = handles[next.0];
                let candidate = distance + weights[edge_id.0];
                let improved = queue
                    .get(handle)
                    .is_some_and(|item| candidate < item.distance);
                if improved {
                    queue.update_with(handle, |item| item.distance = candidate)?;
                    tracing::trace!(from = ?node, to = ?next, distance = candidate, "relaxed");
                }
            }
        }

        tracing::debug!(
            start = ?start,
            reachable = distances.len(),
            nodes = self.nodes.len(),
            "shortest paths computed"
        );
        Ok(distances)
    }
}
