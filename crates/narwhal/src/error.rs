use crate::graph::{EdgeId, NodeId};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Collections(#[from] narwhal_collections::Error),

    #[error("edge {edge:?} has a negative or NaN weight: {weight}")]
    NegativeWeight { edge: EdgeId, weight: f64 },

    #[error("edge {edge:?} has no weight")]
    MissingWeight { edge: EdgeId },

    #[error("graph contains a cycle through node {node:?}")]
    Cycle { node: NodeId },
}

pub type Result<T> = std::result::Result<T, Error>;
