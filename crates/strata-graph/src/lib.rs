#![forbid(unsafe_code)]

//! Layered graph model used by `strata`.
//!
//! Nodes and edges live in two arenas and are addressed by [`NodeId`] / [`EdgeId`]. The model
//! only records adjacency; layer membership and ordering are owned by the caller (the
//! crossing minimizer consumes layers as explicit node lists).

mod direction;
mod error;

pub use direction::LayoutDirection;
pub use error::{Error, Result};

use rustc_hash::FxHashMap as HashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Role of a node in the layering.
///
/// Source and target dummies are named after the graph direction of the segment they bound:
/// the segment edge leaves a source dummy and enters a target dummy. Which of the two is drawn
/// on top depends on the [`LayoutDirection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    #[default]
    Regular,
    /// Single-layer placeholder of a long edge. Ordered like a regular node.
    EdgeDummy,
    SourceDummy,
    TargetDummy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    id: String,
    kind: NodeKind,
    incoming: Vec<EdgeId>,
    outgoing: Vec<EdgeId>,
}

impl LayoutNode {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_source_dummy(&self) -> bool {
        self.kind == NodeKind::SourceDummy
    }

    pub fn is_target_dummy(&self) -> bool {
        self.kind == NodeKind::TargetDummy
    }

    pub fn is_dummy(&self) -> bool {
        self.kind != NodeKind::Regular
    }

    pub fn incoming_edges(&self) -> &[EdgeId] {
        &self.incoming
    }

    pub fn outgoing_edges(&self) -> &[EdgeId] {
        &self.outgoing
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEdge {
    source: NodeId,
    target: NodeId,
    segment: bool,
}

impl LayoutEdge {
    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    /// `true` for the edge joining a source dummy to its target dummy. Segments may span
    /// several layers.
    pub fn is_segment(&self) -> bool {
        self.segment
    }
}

#[derive(Debug, Clone, Default)]
pub struct LayoutGraph {
    nodes: Vec<LayoutNode>,
    edges: Vec<LayoutEdge>,
    node_index: HashMap<String, NodeId>,
}

impl LayoutGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, id: impl Into<String>) -> Result<NodeId> {
        self.insert_node(id.into(), NodeKind::Regular)
    }

    pub fn add_dummy(&mut self, id: impl Into<String>, kind: NodeKind) -> Result<NodeId> {
        self.insert_node(id.into(), kind)
    }

    fn insert_node(&mut self, id: String, kind: NodeKind) -> Result<NodeId> {
        if self.node_index.contains_key(&id) {
            return Err(Error::DuplicateNode { id });
        }
        let node = NodeId(self.nodes.len());
        self.node_index.insert(id.clone(), node);
        self.nodes.push(LayoutNode {
            id,
            kind,
            incoming: Vec::new(),
            outgoing: Vec::new(),
        });
        Ok(node)
    }

    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> Result<EdgeId> {
        self.insert_edge(source, target, false)
    }

    /// Adds the segment edge between a source dummy and its target dummy.
    pub fn add_segment(&mut self, source: NodeId, target: NodeId) -> Result<EdgeId> {
        let source_node = self.try_node(source)?;
        let target_node = self.try_node(target)?;
        if !source_node.is_source_dummy() || !target_node.is_target_dummy() {
            return Err(Error::InvalidSegment {
                from: source,
                to: target,
            });
        }
        self.insert_edge(source, target, true)
    }

    fn insert_edge(&mut self, source: NodeId, target: NodeId, segment: bool) -> Result<EdgeId> {
        self.try_node(source)?;
        self.try_node(target)?;
        let edge = EdgeId(self.edges.len());
        self.edges.push(LayoutEdge {
            source,
            target,
            segment,
        });
        self.nodes[source.0].outgoing.push(edge);
        self.nodes[target.0].incoming.push(edge);
        Ok(edge)
    }

    /// Moves the head of `edge` to `target`, keeping the edge id and its position in the
    /// source's outgoing list.
    pub fn set_edge_target(&mut self, edge: EdgeId, target: NodeId) -> Result<()> {
        self.try_node(target)?;
        let old = self.edges.get(edge.0).ok_or(Error::UnknownEdge { edge })?.target;
        self.nodes[old.0].incoming.retain(|&e| e != edge);
        self.nodes[target.0].incoming.push(edge);
        self.edges[edge.0].target = target;
        Ok(())
    }

    pub fn node(&self, node: NodeId) -> Option<&LayoutNode> {
        self.nodes.get(node.0)
    }

    pub fn edge(&self, edge: EdgeId) -> Option<&LayoutEdge> {
        self.edges.get(edge.0)
    }

    fn try_node(&self, node: NodeId) -> Result<&LayoutNode> {
        self.nodes.get(node.0).ok_or(Error::UnknownNode { node })
    }

    pub fn has_node(&self, node: NodeId) -> bool {
        node.0 < self.nodes.len()
    }

    pub fn node_id(&self, id: &str) -> Option<NodeId> {
        self.node_index.get(id).copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId)
    }

    /// Distinct predecessors of `node`, in first-seen edge order.
    pub fn incoming(&self, node: NodeId) -> Vec<NodeId> {
        let mut out: Vec<NodeId> = Vec::new();
        for &e in &self[node].incoming {
            let v = self[e].source;
            if !out.contains(&v) {
                out.push(v);
            }
        }
        out
    }

    /// Distinct successors of `node`, in first-seen edge order.
    pub fn outgoing(&self, node: NodeId) -> Vec<NodeId> {
        let mut out: Vec<NodeId> = Vec::new();
        for &e in &self[node].outgoing {
            let w = self[e].target;
            if !out.contains(&w) {
                out.push(w);
            }
        }
        out
    }
}

impl Index<NodeId> for LayoutGraph {
    type Output = LayoutNode;

    fn index(&self, node: NodeId) -> &LayoutNode {
        &self.nodes[node.0]
    }
}

impl Index<EdgeId> for LayoutGraph {
    type Output = LayoutEdge;

    fn index(&self, edge: EdgeId) -> &LayoutEdge {
        &self.edges[edge.0]
    }
}
