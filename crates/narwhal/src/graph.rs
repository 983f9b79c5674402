//! Graph container.
//!
//! Nodes and edges are stored in insertion-ordered arenas. A node is created the first time its
//! value appears in an edge triple and is never removed; every triple becomes its own [`Edge`],
//! so parallel edges are kept.

use crate::error::{Error, Result};
use rustc_hash::FxBuildHasher;
use std::hash::Hash;

pub mod alg;
mod entries;
mod options;

pub use entries::{Degree, Edge, EdgeId, Node, NodeId};
pub use options::{EdgeSpec, GraphDocument, GraphOptions};

use entries::Incidence;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;
type IndexSet<T> = indexmap::IndexSet<T, FxBuildHasher>;

#[derive(Debug, Clone)]
pub struct Graph<V>
where
    V: Eq + Hash + Clone,
{
    options: GraphOptions,
    nodes: Vec<Node<V>>,
    node_index: HashMap<V, NodeId>,
    edges: Vec<Edge>,
}

impl<V> Default for Graph<V>
where
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new(GraphOptions::default())
    }
}

impl<V> Graph<V>
where
    V: Eq + Hash + Clone,
{
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            nodes: Vec::new(),
            node_index: HashMap::default(),
            edges: Vec::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphOptions { directed: true })
    }

    pub fn undirected() -> Self {
        Self::new(GraphOptions { directed: false })
    }

    pub fn from_edges<I, S>(options: GraphOptions, list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<EdgeSpec<V>>,
    {
        let mut g = Self::new(options);
        g.init(list);
        g
    }

    pub fn from_document(doc: GraphDocument<V>) -> Self {
        Self::from_edges(doc.options, doc.edges)
    }

    /// Adds one edge per triple, creating endpoint nodes on first sight.
    pub fn init<I, S>(&mut self, list: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<EdgeSpec<V>>,
    {
        for spec in list {
            let EdgeSpec { from, to, weight } = spec.into();
            self.add_edge(from, to, weight);
        }
        tracing::debug!(
            directed = self.options.directed,
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "graph initialized"
        );
        self
    }

    pub fn add_edge(&mut self, from: V, to: V, weight: Option<f64>) -> EdgeId {
        let from = self.ensure_node(from);
        let to = self.ensure_node(to);
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge { from, to, weight });
        self.nodes[from.0].attach(id, to, Incidence::Outgoing);
        self.nodes[to.0].attach(id, from, Incidence::Incoming);
        id
    }

    fn ensure_node(&mut self, value: V) -> NodeId {
        if let Some(&id) = self.node_index.get(&value) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(value.clone(), self.options.directed));
        self.node_index.insert(value, id);
        id
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, value: &V) -> bool {
        self.node_index.contains_key(value)
    }

    pub fn node_id(&self, value: &V) -> Option<NodeId> {
        self.node_index.get(value).copied()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<V>> {
        self.nodes.get(id.0)
    }

    pub fn node_by_value(&self, value: &V) -> Option<&Node<V>> {
        self.node_id(value).and_then(|id| self.node(id))
    }

    pub fn value(&self, id: NodeId) -> Option<&V> {
        self.node(id).map(Node::value)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    pub fn node_ids(&self) -> impl ExactSizeIterator<Item = NodeId> + use<V> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn nodes(&self) -> impl ExactSizeIterator<Item = (NodeId, &Node<V>)> {
        self.nodes.iter().enumerate().map(|(ix, n)| (NodeId(ix), n))
    }

    pub fn edges(&self) -> impl ExactSizeIterator<Item = (EdgeId, &Edge)> {
        self.edges.iter().enumerate().map(|(ix, e)| (EdgeId(ix), e))
    }

    /// Nodes one step away along the graph's direction: outgoing targets in a directed graph,
    /// all adjacent nodes in an undirected one.
    pub fn successors(&self, id: NodeId) -> Vec<NodeId> {
        let Some(node) = self.nodes.get(id.0) else {
            return Vec::new();
        };
        if !self.options.directed {
            return node.nexts().collect();
        }
        // First-linked order, parallel edges collapsed.
        let out: IndexSet<NodeId> = node
            .edges()
            .map(|e| &self.edges[e.0])
            .filter(|edge| edge.from == id)
            .map(|edge| edge.to)
            .collect();
        out.into_iter().collect()
    }

    /// Re-keys a per-node result by node value.
    pub fn keyed_by_value<T>(
        &self,
        map: &alg::NodeMap<T>,
    ) -> indexmap::IndexMap<V, T, FxBuildHasher>
    where
        T: Clone,
    {
        map.iter()
            .filter_map(|(&id, t)| self.value(id).map(|v| (v.clone(), t.clone())))
            .collect()
    }

    /// Start node for the algorithms: `start` if it names an existing node, otherwise the
    /// first inserted node. `None` only for an empty graph.
    fn start_node(&self, start: Option<&V>) -> Option<NodeId> {
        start
            .and_then(|v| self.node_id(v))
            .or_else(|| (!self.nodes.is_empty()).then_some(NodeId(0)))
    }

    /// The node reached by walking `edge` away from `node`, honoring direction.
    fn step(&self, edge: &Edge, node: NodeId) -> Option<NodeId> {
        if !self.options.directed {
            return Some(edge.other(node));
        }
        (edge.from == node).then_some(edge.to)
    }

    /// Per-edge weights, indexed by `EdgeId`. Every edge must carry a weight; with
    /// `non_negative` set, negative and NaN weights are rejected as well.
    fn edge_weights(&self, non_negative: bool) -> Result<Vec<f64>> {
        self.edges()
            .map(|(id, e)| match e.weight {
                None => Err(Error::MissingWeight { edge: id }),
                Some(w) if non_negative && (w.is_nan() || w < 0.0) => {
                    Err(Error::NegativeWeight { edge: id, weight: w })
                }
                Some(w) => Ok(w),
            })
            .collect()
    }
}
