use crate::{EdgeId, NodeId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("node id already in use: {id}")]
    DuplicateNode { id: String },
    #[error("node {node} does not belong to this graph")]
    UnknownNode { node: NodeId },
    #[error("edge {edge} does not belong to this graph")]
    UnknownEdge { edge: EdgeId },
    #[error("a segment must lead from a source dummy to a target dummy: {from} -> {to}")]
    InvalidSegment { from: NodeId, to: NodeId },
}

pub type Result<T> = std::result::Result<T, Error>;
