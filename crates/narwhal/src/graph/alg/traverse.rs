//! Depth-first and width-first (breadth-first) walks.

use crate::graph::{Graph, Node, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Traversal {
    #[default]
    Depth,
    Width,
}

struct Frame {
    successors: Vec<NodeId>,
    cursor: usize,
}

impl<V> Graph<V>
where
    V: Eq + Hash + Clone,
{
    /// Visits every node reachable from `start` exactly once and returns them in visit order.
    ///
    /// `start` falls back to the first inserted node when it is `None` or unknown. An empty
    /// graph yields an empty sequence without calling `visit`.
    pub fn traverse<F>(&self, kind: Traversal, start: Option<&V>, mut visit: F) -> Vec<NodeId>
    where
        F: FnMut(NodeId, &Node<V>),
    {
        let Some(start) = self.start_node(start) else {
            return Vec::new();
        };
        let order = match kind {
            Traversal::Depth => self.depth_first(start, &mut visit),
            Traversal::Width => self.width_first(start, &mut visit),
        };
        tracing::debug!(?kind, visited = order.len(), "traversal finished");
        order
    }

    fn depth_first<F>(&self, start: NodeId, visit: &mut F) -> Vec<NodeId>
    where
        F: FnMut(NodeId, &Node<V>),
    {
        let mut seen = vec![false; self.nodes.len()];
        let mut order = vec![start];
        seen[start.0] = true;
        visit(start, &self.nodes[start.0]);

        let mut stack = vec![Frame {
            successors: self.successors(start),
            cursor: 0,
        }];
        while let Some(frame) = stack.last_mut() {
            let next = frame.successors.get(frame.cursor).copied();
            frame.cursor += 1;
            match next {
                None => {
                    stack.pop();
                }
                Some(next) if !seen[next.0] => {
                    seen[next.0] = true;
                    visit(next, &self.nodes[next.0]);
                    order.push(next);
                    stack.push(Frame {
                        successors: self.successors(next),
                        cursor: 0,
                    });
                }
                Some(_) => {}
            }
        }
        order
    }

    fn width_first<F>(&self, start: NodeId, visit: &mut F) -> Vec<NodeId>
    where
        F: FnMut(NodeId, &Node<V>),
    {
        let mut seen = vec![false; self.nodes.len()];
        let mut order = vec![start];
        seen[start.0] = true;

        let mut queue = VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            visit(node, &self.nodes[node.0]);
            for next in self.successors(node) {
                if !seen[next.0] {
                    seen[next.0] = true;
                    queue.push_back(next);
                    order.push(next);
                }
            }
        }
        order
    }
}
