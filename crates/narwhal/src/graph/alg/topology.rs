//! Topological depth: `1 + max(depth(successor))`, `1` for sinks.

use super::NodeMap;
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    Open,
    Done,
}

struct Frame {
    node: NodeId,
    cursor: usize,
}

impl<V> Graph<V>
where
    V: Eq + Hash + Clone,
{
    /// Longest path (counted in nodes) from each node to a sink, following each edge's stored
    /// `from -> to` direction.
    ///
    /// Uses an explicit post-order stack, so depth is not bounded by the call stack. A cycle
    /// (including a self-loop) is reported as [`Error::Cycle`].
    pub fn topology_depths(&self) -> Result<NodeMap<usize>> {
        let n = self.nodes.len();
        let mut marks = vec![Mark::Unvisited; n];
        let mut depth = vec![0usize; n];

        for root in self.node_ids() {
            if marks[root.0] != Mark::Unvisited {
                continue;
            }
            marks[root.0] = Mark::Open;
            let mut stack = vec![Frame {
                node: root,
                cursor: 0,
            }];

            while let Some(frame) = stack.last_mut() {
                let node = frame.node;
                let next_edge = self.nodes[node.0].edges.get_index(frame.cursor).copied();
                frame.cursor += 1;

                let Some(edge_id) = next_edge else {
                    // All successors are done.
                    let deepest = self.nodes[node.0]
                        .edges()
                        .map(|e| &self.edges[e.0])
                        .filter(|e| e.from == node)
                        .map(|e| depth[e.to.0])
                        .max();
                    depth[node.0] = deepest.map_or(1, |d| d + 1);
                    marks[node.0] = Mark::Done;
                    stack.pop();
                    continue;
                };

                let edge = &self.edges[edge_id.0];
                if edge.from != node {
                    continue;
                }
                match marks[edge.to.0] {
                    Mark::Unvisited => {
                        marks[edge.to.0] = Mark::Open;
                        stack.push(Frame {
                            node: edge.to,
                            cursor: 0,
                        });
                    }
                    Mark::Open => return Err(Error::Cycle { node: edge.to }),
                    Mark::Done => {}
                }
            }
        }

        tracing::debug!(nodes = n, "topological depths computed");
        Ok(self.node_ids().map(|id| (id, depth[id.0])).collect())
    }
}
