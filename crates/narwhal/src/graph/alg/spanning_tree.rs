//! Minimum spanning forest (Kruskal).

use crate::error::Result;
use crate::graph::{EdgeId, Graph};
use narwhal_collections::UnionFind;
use serde::Serialize;
use std::hash::Hash;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpanningForest {
    /// Accepted edges in the order Kruskal kept them (non-decreasing weight).
    pub edges: Vec<EdgeId>,
    pub total_weight: f64,
}

impl SpanningForest {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<V> Graph<V>
where
    V: Eq + Hash + Clone,
{
    /// Kruskal over the whole edge set. Disconnected graphs yield one tree per component.
    ///
    /// Edge direction is ignored. Equal weights keep edge insertion order.
    pub fn min_spanning_tree(&self) -> Result<SpanningForest> {
        let weights = self.edge_weights(false)?;
        let mut order: Vec<EdgeId> = self.edges().map(|(id, _)| id).collect();
        order.sort_by(|a, b| weights[a.0].total_cmp(&weights[b.0]));

        let mut sets = UnionFind::new(self.node_ids());
        let mut forest = SpanningForest::default();
        for id in order {
            let edge = &self.edges[id.0];
            if sets.union(&edge.from, &edge.to)? {
                forest.edges.push(id);
                forest.total_weight += weights[id.0];
            } else {
                tracing::trace!(edge = ?id, "edge would close a cycle");
            }
        }

        tracing::debug!(
            kept = forest.edges.len(),
            components = sets.sets_num(),
            total_weight = forest.total_weight,
            "spanning forest computed"
        );
        Ok(forest)
    }
}
