//! Direction-specific primitives of the layer crossing minimizer.
//!
//! A down sweep keeps the upper layer fixed and orders the lower one; an up sweep does the
//! opposite. Every primitive is the mirror image of its counterpart, so the template in
//! `minimize` is written once against these functions.

use super::Positions;
use crate::container::{ContainerArena, ContainerId, SegmentContainer};
use crate::crossing::{Item, VirtualSegmentEdge};
use crate::graph::{EdgeId, LayoutDirection, LayoutGraph, NodeId};
use crate::layer::{AlternatingLayer, LayerItem};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sweep {
    /// Upper layer fixed, lower layer free.
    Down,
    /// Lower layer fixed, upper layer free.
    Up,
}

impl Sweep {
    pub fn reversed(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
        }
    }

    /// Dummy whose segment leaves the fixed layer towards the free one.
    fn is_segment_source(self, g: &LayoutGraph, dir: LayoutDirection, v: NodeId) -> bool {
        match self {
            Self::Down => dir.is_upper_dummy(g, v),
            Self::Up => dir.is_lower_dummy(g, v),
        }
    }

    /// Dummy in the free layer whose segment arrives from beyond the fixed layer.
    fn is_segment_target(self, g: &LayoutGraph, dir: LayoutDirection, v: NodeId) -> bool {
        match self {
            Self::Down => dir.is_lower_dummy(g, v),
            Self::Up => dir.is_upper_dummy(g, v),
        }
    }

    /// Segment of a fixed-layer segment source, running into the free layer's gap.
    fn outgoing_segment(self, g: &LayoutGraph, dir: LayoutDirection, v: NodeId) -> Option<EdgeId> {
        match self {
            Self::Down => dir.bottom_segments(g, v).next(),
            Self::Up => dir.top_segments(g, v).next(),
        }
    }

    /// Segment of a free-layer segment target, arriving from the fixed layer's side.
    fn incoming_segment(self, g: &LayoutGraph, dir: LayoutDirection, v: NodeId) -> Option<EdgeId> {
        match self {
            Self::Down => dir.top_segments(g, v).next(),
            Self::Up => dir.bottom_segments(g, v).next(),
        }
    }

    /// Folds the segment sources of `fixed` into their surrounding containers.
    ///
    /// The result alternates containers and nodes like the input layer does; all containers
    /// are fresh roots in `arena`.
    pub(crate) fn remove_segment_sources(
        self,
        g: &LayoutGraph,
        dir: LayoutDirection,
        fixed: &AlternatingLayer,
        arena: &mut ContainerArena,
    ) -> Result<Vec<Item>> {
        let mut out: Vec<Item> = Vec::with_capacity(fixed.items().len());
        let mut current = arena.insert(SegmentContainer::new());

        for item in fixed.items() {
            match *item {
                LayerItem::Container(ref c) => arena.extend(current, c.segments()),
                LayerItem::Node(v) if self.is_segment_source(g, dir, v) => {
                    let segment = self
                        .outgoing_segment(g, dir, v)
                        .ok_or(Error::MissingSegment { node: v })?;
                    arena.push(current, segment);
                }
                LayerItem::Node(v) => {
                    out.push(Item::Container(current));
                    out.push(Item::Node(v));
                    current = arena.insert(SegmentContainer::new());
                }
            }
        }
        out.push(Item::Container(current));

        Ok(out)
    }

    /// Free-layer nodes that are placed by their barycenter.
    pub(crate) fn non_segment_target_nodes(
        self,
        g: &LayoutGraph,
        dir: LayoutDirection,
        free: &[NodeId],
    ) -> Vec<NodeId> {
        free.iter()
            .copied()
            .filter(|&v| !self.is_segment_target(g, dir, v))
            .collect()
    }

    /// Neighbours of `v` on the fixed layer's side.
    fn fixed_neighbours(self, g: &LayoutGraph, dir: LayoutDirection, v: NodeId) -> Vec<NodeId> {
        match self {
            Self::Down => dir.top_nodes(g, v),
            Self::Up => dir.bottom_nodes(g, v),
        }
    }

    /// Mean fixed-layer position of the neighbours of `v`; `0.0` without neighbours.
    pub(crate) fn barycenter(
        self,
        g: &LayoutGraph,
        dir: LayoutDirection,
        v: NodeId,
        positions: &Positions,
    ) -> Result<f64> {
        let neighbours = self.fixed_neighbours(g, dir, v);
        if neighbours.is_empty() {
            return Ok(0.0);
        }

        let mut sum: f64 = 0.0;
        for u in &neighbours {
            let pos = positions
                .get(&Item::Node(*u))
                .ok_or(Error::NodeNotInFixedLayer { node: *u })?;
            sum += *pos as f64;
        }
        Ok(sum / neighbours.len() as f64)
    }

    /// Seats every segment target of `free` inside the container that carries its segment.
    ///
    /// The container is split right before the segment, the segment itself ends at the dummy
    /// and is dropped from the second half. Returns the dummies with the container they were
    /// carved from, in `free` order.
    pub(crate) fn add_segment_targets(
        self,
        g: &LayoutGraph,
        dir: LayoutDirection,
        ordering: &mut Vec<Item>,
        free: &[NodeId],
        arena: &mut ContainerArena,
    ) -> Result<Vec<(NodeId, ContainerId)>> {
        let mut carved: Vec<(NodeId, ContainerId)> = Vec::new();

        for &v in free {
            if !self.is_segment_target(g, dir, v) {
                continue;
            }
            let segment = self
                .incoming_segment(g, dir, v)
                .ok_or(Error::MissingSegment { node: v })?;
            let not_found = Error::SegmentNotFound { segment, node: v };

            let (ix, c) = ordering
                .iter()
                .enumerate()
                .find_map(|(ix, item)| match *item {
                    Item::Container(c) if arena[c].contains(segment) => Some((ix, c)),
                    _ => None,
                })
                .ok_or_else(|| not_found.clone())?;

            let (first, second) = arena.split_at_edge(c, segment).ok_or(not_found)?;
            arena.pop_front(second);

            ordering[ix] = Item::Container(first);
            ordering.insert(ix + 1, Item::Node(v));
            ordering.insert(ix + 2, Item::Container(second));
            carved.push((v, c));
        }

        Ok(carved)
    }

    /// Real edges of `v` towards the fixed layer, with their fixed-layer endpoint.
    pub(crate) fn edges(
        self,
        g: &LayoutGraph,
        dir: LayoutDirection,
        v: NodeId,
    ) -> Vec<(EdgeId, NodeId)> {
        match self {
            Self::Down => dir
                .top_edges(g, v)
                .iter()
                .map(|&e| (e, dir.top_node(g, e)))
                .collect(),
            Self::Up => dir
                .bottom_edges(g, v)
                .iter()
                .map(|&e| (e, dir.bottom_node(g, e)))
                .collect(),
        }
    }

    /// Virtual edge between a free-layer item and the fixed-layer item it continues.
    pub(crate) fn virtual_edge(
        self,
        dir: LayoutDirection,
        fixed: Item,
        free: Item,
        weight: usize,
    ) -> VirtualSegmentEdge {
        match self {
            Self::Down => VirtualSegmentEdge::between(dir, fixed, free, weight),
            Self::Up => VirtualSegmentEdge::between(dir, free, fixed, weight),
        }
    }

    /// Lexicographic sort key of an edge given its upper and lower positions: the free layer
    /// first, then the fixed one.
    pub(crate) fn sort_key(self, top: usize, bottom: usize) -> (usize, usize) {
        match self {
            Self::Down => (bottom, top),
            Self::Up => (top, bottom),
        }
    }

    /// Splits `(near, far)` positions into `(top, bottom)`.
    pub(crate) fn top_bottom(self, near: usize, far: usize) -> (usize, usize) {
        match self {
            Self::Down => (far, near),
            Self::Up => (near, far),
        }
    }
}
