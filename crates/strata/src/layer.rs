//! Alternating layers: `[C0, n1, C1, n2, ..., nk, Ck]`.

use crate::container::SegmentContainer;
use crate::graph::{EdgeId, NodeId};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LayerItem {
    Container(SegmentContainer),
    Node(NodeId),
}

/// Ordered layer of nodes interleaved with (possibly empty) segment containers.
///
/// The layer always starts and ends with a container and never holds two nodes or two
/// containers next to each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternatingLayer {
    items: Vec<LayerItem>,
}

impl Default for AlternatingLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AlternatingLayer {
    pub fn new() -> Self {
        Self {
            items: vec![LayerItem::Container(SegmentContainer::new())],
        }
    }

    /// Layer without any segments passing through it.
    pub fn from_nodes(nodes: impl IntoIterator<Item = NodeId>) -> Self {
        let mut layer = Self::new();
        for v in nodes {
            layer.push_node(v);
        }
        layer
    }

    /// Joins `container` into the trailing container.
    pub fn push_container(&mut self, container: &SegmentContainer) {
        if let Some(LayerItem::Container(last)) = self.items.last_mut() {
            last.join(container);
        }
    }

    pub fn push_segment(&mut self, segment: EdgeId) {
        if let Some(LayerItem::Container(last)) = self.items.last_mut() {
            last.push(segment);
        }
    }

    pub fn push_node(&mut self, node: NodeId) {
        self.items.push(LayerItem::Node(node));
        self.items.push(LayerItem::Container(SegmentContainer::new()));
    }

    pub fn items(&self) -> &[LayerItem] {
        &self.items
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.items.iter().filter_map(|item| match item {
            LayerItem::Node(v) => Some(*v),
            LayerItem::Container(_) => None,
        })
    }

    pub fn containers(&self) -> impl Iterator<Item = &SegmentContainer> + '_ {
        self.items.iter().filter_map(|item| match item {
            LayerItem::Container(c) => Some(c),
            LayerItem::Node(_) => None,
        })
    }

    pub fn node_count(&self) -> usize {
        self.items.len() / 2
    }

    pub fn segment_count(&self) -> usize {
        self.containers().map(SegmentContainer::size).sum()
    }

    /// Number of positions the layer occupies: one per node and one per segment.
    pub fn width(&self) -> usize {
        self.node_count() + self.segment_count()
    }
}

impl fmt::Display for AlternatingLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match item {
                LayerItem::Node(v) => write!(f, "{v}")?,
                LayerItem::Container(c) => {
                    f.write_str("[")?;
                    for (j, s) in c.segments().iter().enumerate() {
                        if j > 0 {
                            f.write_str(" ")?;
                        }
                        write!(f, "{s}")?;
                    }
                    f.write_str("]")?;
                }
            }
        }
        Ok(())
    }
}
