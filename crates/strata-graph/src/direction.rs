//! Direction-relative views of the graph.
//!
//! Layers are always drawn top to bottom. The layout direction decides whether edge sources
//! (`VerticalFromSource`) or edge targets (`VerticalFromSink`) sit on the upper layer, and so
//! which adjacency list is the "top" and which is the "bottom" one.

use crate::{EdgeId, LayoutGraph, NodeId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum LayoutDirection {
    #[default]
    VerticalFromSource,
    VerticalFromSink,
}

impl LayoutDirection {
    pub fn reversed(self) -> Self {
        match self {
            Self::VerticalFromSource => Self::VerticalFromSink,
            Self::VerticalFromSink => Self::VerticalFromSource,
        }
    }

    /// Adjacent nodes in the layer above.
    pub fn top_nodes(self, g: &LayoutGraph, node: NodeId) -> Vec<NodeId> {
        match self {
            Self::VerticalFromSource => g.incoming(node),
            Self::VerticalFromSink => g.outgoing(node),
        }
    }

    /// Adjacent nodes in the layer below.
    pub fn bottom_nodes(self, g: &LayoutGraph, node: NodeId) -> Vec<NodeId> {
        match self {
            Self::VerticalFromSource => g.outgoing(node),
            Self::VerticalFromSink => g.incoming(node),
        }
    }

    pub fn top_node(self, g: &LayoutGraph, edge: EdgeId) -> NodeId {
        match self {
            Self::VerticalFromSource => g[edge].source(),
            Self::VerticalFromSink => g[edge].target(),
        }
    }

    pub fn bottom_node(self, g: &LayoutGraph, edge: EdgeId) -> NodeId {
        match self {
            Self::VerticalFromSource => g[edge].target(),
            Self::VerticalFromSink => g[edge].source(),
        }
    }

    /// Edges attached to the top side of `node`.
    pub fn top_edges(self, g: &LayoutGraph, node: NodeId) -> &[EdgeId] {
        match self {
            Self::VerticalFromSource => g[node].incoming_edges(),
            Self::VerticalFromSink => g[node].outgoing_edges(),
        }
    }

    /// Edges attached to the bottom side of `node`.
    pub fn bottom_edges(self, g: &LayoutGraph, node: NodeId) -> &[EdgeId] {
        match self {
            Self::VerticalFromSource => g[node].outgoing_edges(),
            Self::VerticalFromSink => g[node].incoming_edges(),
        }
    }

    /// Segments reaching `node` from above, i.e. `node` is their lower endpoint.
    pub fn top_segments(
        self,
        g: &LayoutGraph,
        node: NodeId,
    ) -> impl Iterator<Item = EdgeId> + '_ {
        self.top_edges(g, node)
            .iter()
            .copied()
            .filter(move |&e| g[e].is_segment())
    }

    /// Segments leaving `node` downwards, i.e. `node` is their upper endpoint.
    pub fn bottom_segments(
        self,
        g: &LayoutGraph,
        node: NodeId,
    ) -> impl Iterator<Item = EdgeId> + '_ {
        self.bottom_edges(g, node)
            .iter()
            .copied()
            .filter(move |&e| g[e].is_segment())
    }

    /// Whether `node` is the upper endpoint of a segment in this direction.
    pub fn is_upper_dummy(self, g: &LayoutGraph, node: NodeId) -> bool {
        match self {
            Self::VerticalFromSource => g[node].is_source_dummy(),
            Self::VerticalFromSink => g[node].is_target_dummy(),
        }
    }

    /// Whether `node` is the lower endpoint of a segment in this direction.
    pub fn is_lower_dummy(self, g: &LayoutGraph, node: NodeId) -> bool {
        match self {
            Self::VerticalFromSource => g[node].is_target_dummy(),
            Self::VerticalFromSink => g[node].is_source_dummy(),
        }
    }
}
