use crate::graph::{EdgeId, NodeId};

/// Contract violations of the layering handed to `strata`.
///
/// These indicate a bug in the layer construction upstream; none of them is repaired.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] crate::graph::Error),
    #[error("node {node} does not belong to the graph")]
    UnknownNode { node: NodeId },
    #[error("dummy node {node} has no segment")]
    MissingSegment { node: NodeId },
    #[error("segment {segment} of dummy node {node} is not in any container of the ordering")]
    SegmentNotFound { segment: EdgeId, node: NodeId },
    #[error("neighbour {node} is not part of the fixed layer")]
    NodeNotInFixedLayer { node: NodeId },
    #[error("node {node} is not assigned to a layer")]
    NodeNotLayered { node: NodeId },
    #[error("edge {edge} connects two nodes of the same layer")]
    FlatEdge { edge: EdgeId },
    #[error("edge {edge} points against the layout direction")]
    ReversedEdge { edge: EdgeId },
    #[error("edge {edge} does not end in the next layer")]
    EdgeSkipsLayer { edge: EdgeId },
}

pub type Result<T> = std::result::Result<T, Error>;
