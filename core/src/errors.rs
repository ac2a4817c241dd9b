use thiserror::Error;

use crate::types::{Edge, NodeID};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError {
    #[error("node {0} already exists")]
    DuplicateNode(NodeID),
    #[error("edge {0} already exists")]
    DuplicateEdge(Edge),
    #[error("node {0} is not part of the graph")]
    UnknownNode(NodeID),
    #[error("edge {0} is not part of the graph")]
    UnknownEdge(Edge),
}

pub type Result<T> = std::result::Result<T, GraphError>;
