//! Node and edge storage for [`Graph`](super::Graph).
//!
//! Both live in arenas owned by the graph and refer to each other through [`NodeId`] /
//! [`EdgeId`] indices.

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};

type IdSet<T> = IndexSet<T, FxBuildHasher>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub(in crate::graph) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub(in crate::graph) usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Degree bookkeeping. Only directed graphs track in/out counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Degree {
    Directed { in_degree: usize, out_degree: usize },
    Undirected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::graph) enum Incidence {
    Outgoing,
    Incoming,
}

#[derive(Debug, Clone)]
pub struct Node<V> {
    pub(in crate::graph) value: V,
    pub(in crate::graph) nexts: IdSet<NodeId>,
    pub(in crate::graph) edges: IdSet<EdgeId>,
    pub(in crate::graph) degree: Degree,
}

impl<V> Node<V> {
    pub(in crate::graph) fn new(value: V, directed: bool) -> Self {
        let degree = if directed {
            Degree::Directed {
                in_degree: 0,
                out_degree: 0,
            }
        } else {
            Degree::Undirected
        };
        Self {
            value,
            nexts: IdSet::default(),
            edges: IdSet::default(),
            degree,
        }
    }

    /// Links `edge` into this node; `neighbor` is the edge's opposite endpoint.
    pub(in crate::graph) fn attach(&mut self, edge: EdgeId, neighbor: NodeId, side: Incidence) {
        self.edges.insert(edge);
        self.nexts.insert(neighbor);
        if let Degree::Directed {
            in_degree,
            out_degree,
        } = &mut self.degree
        {
            match side {
                Incidence::Outgoing => *out_degree += 1,
                Incidence::Incoming => *in_degree += 1,
            }
        }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    /// Adjacent nodes in either direction, in first-linked order.
    pub fn nexts(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        self.nexts.iter().copied()
    }

    /// Incident edges in either direction, in insertion order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = EdgeId> + '_ {
        self.edges.iter().copied()
    }

    pub fn degree(&self) -> Degree {
        self.degree
    }

    pub fn in_degree(&self) -> Option<usize> {
        match self.degree {
            Degree::Directed { in_degree, .. } => Some(in_degree),
            Degree::Undirected => None,
        }
    }

    pub fn out_degree(&self) -> Option<usize> {
        match self.degree {
            Degree::Directed { out_degree, .. } => Some(out_degree),
            Degree::Undirected => None,
        }
    }
}

/// A connection between two nodes. Undirected graphs keep `from`/`to` as given but do not
/// treat them as a direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub(in crate::graph) from: NodeId,
    pub(in crate::graph) to: NodeId,
    pub(in crate::graph) weight: Option<f64>,
}

impl Edge {
    pub fn from(&self) -> NodeId {
        self.from
    }

    pub fn to(&self) -> NodeId {
        self.to
    }

    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// The endpoint opposite to `node`. For a self-loop this is `node` itself.
    pub fn other(&self, node: NodeId) -> NodeId {
        if self.from == node { self.to } else { self.from }
    }
}
