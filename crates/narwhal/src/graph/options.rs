//! Graph configuration and serde-loadable graph definitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    pub directed: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self { directed: true }
    }
}

/// One `(from, to, weight?)` triple of a graph definition.
///
/// Deserializes from `{"from": .., "to": .., "weight": ..}` or from a `[from, to]` /
/// `[from, to, weight]` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec<V> {
    pub from: V,
    pub to: V,
    #[serde(default)]
    pub weight: Option<f64>,
}

impl<V> EdgeSpec<V> {
    pub fn new(from: V, to: V, weight: Option<f64>) -> Self {
        Self { from, to, weight }
    }
}

impl<V> From<(V, V)> for EdgeSpec<V> {
    fn from((from, to): (V, V)) -> Self {
        Self::new(from, to, None)
    }
}

impl<V> From<(V, V, f64)> for EdgeSpec<V> {
    fn from((from, to, weight): (V, V, f64)) -> Self {
        Self::new(from, to, Some(weight))
    }
}

impl<V> From<(V, V, Option<f64>)> for EdgeSpec<V> {
    fn from((from, to, weight): (V, V, Option<f64>)) -> Self {
        Self::new(from, to, weight)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument<V> {
    #[serde(default)]
    pub options: GraphOptions,
    pub edges: Vec<EdgeSpec<V>>,
}
