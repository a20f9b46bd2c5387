//! Segment containers.
//!
//! A container bundles the segments (long-edge pieces) that pass between two neighbouring
//! nodes of a layer. Containers are split while the free layer is ordered and joined again when
//! the resulting alternating layer is materialized.

use crate::graph::EdgeId;
use serde::Serialize;
use std::ops::Index;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct SegmentContainer {
    segments: Vec<EdgeId>,
}

impl SegmentContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_segments(segments: impl IntoIterator<Item = EdgeId>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    pub fn size(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn contains(&self, segment: EdgeId) -> bool {
        self.segments.contains(&segment)
    }

    pub fn segments(&self) -> &[EdgeId] {
        &self.segments
    }

    pub fn position(&self, segment: EdgeId) -> Option<usize> {
        self.segments.iter().position(|&s| s == segment)
    }

    /// Splits into `[0, k)` and `[k, size)`. `k` is clamped to `size`.
    pub fn split_at(&self, k: usize) -> (Self, Self) {
        let k = k.min(self.segments.len());
        let (first, second) = self.segments.split_at(k);
        (
            Self::from_segments(first.iter().copied()),
            Self::from_segments(second.iter().copied()),
        )
    }

    /// Splits right before `segment`, which opens the second half. `None` if the segment is not
    /// part of this container.
    pub fn split_at_edge(&self, segment: EdgeId) -> Option<(Self, Self)> {
        self.position(segment).map(|k| self.split_at(k))
    }

    /// Appends the segments of `other`.
    pub fn join(&mut self, other: &SegmentContainer) {
        self.segments.extend_from_slice(&other.segments);
    }

    pub fn push(&mut self, segment: EdgeId) {
        self.segments.push(segment);
    }

    pub fn pop_front(&mut self) -> Option<EdgeId> {
        if self.segments.is_empty() {
            return None;
        }
        Some(self.segments.remove(0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ContainerId(pub usize);

#[derive(Debug, Clone)]
struct Slot {
    container: SegmentContainer,
    parent: Option<ContainerId>,
    root: Option<ContainerId>,
}

/// Owns the containers of one minimizer invocation and records split lineage.
///
/// Splitting never mutates the original container: both halves are new entries whose
/// `parent` is the split container and whose `root` is the topmost ancestor.
#[derive(Debug, Clone, Default)]
pub struct ContainerArena {
    slots: Vec<Slot>,
}

impl ContainerArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn insert(&mut self, container: SegmentContainer) -> ContainerId {
        self.insert_child(container, None)
    }

    fn insert_child(
        &mut self,
        container: SegmentContainer,
        parent: Option<ContainerId>,
    ) -> ContainerId {
        let root = parent.map(|p| self.root(p).unwrap_or(p));
        let id = ContainerId(self.slots.len());
        self.slots.push(Slot {
            container,
            parent,
            root,
        });
        id
    }

    pub fn get(&self, id: ContainerId) -> Option<&SegmentContainer> {
        self.slots.get(id.0).map(|s| &s.container)
    }

    pub fn parent(&self, id: ContainerId) -> Option<ContainerId> {
        self.slots.get(id.0).and_then(|s| s.parent)
    }

    /// Topmost ancestor of `id`, or `None` if `id` was not produced by a split.
    pub fn root(&self, id: ContainerId) -> Option<ContainerId> {
        self.slots.get(id.0).and_then(|s| s.root)
    }

    pub fn split_at(&mut self, id: ContainerId, k: usize) -> (ContainerId, ContainerId) {
        let (first, second) = self[id].split_at(k);
        (
            self.insert_child(first, Some(id)),
            self.insert_child(second, Some(id)),
        )
    }

    pub fn split_at_edge(
        &mut self,
        id: ContainerId,
        segment: EdgeId,
    ) -> Option<(ContainerId, ContainerId)> {
        let k = self[id].position(segment)?;
        Some(self.split_at(id, k))
    }

    /// Appends the segments of `other` to `into`. Lineage of `into` is kept.
    pub fn join(&mut self, into: ContainerId, other: ContainerId) {
        if into == other {
            return;
        }
        let segments = self.slots[other.0].container.segments.clone();
        self.slots[into.0].container.segments.extend(segments);
    }

    pub fn push(&mut self, id: ContainerId, segment: EdgeId) {
        self.slots[id.0].container.push(segment);
    }

    pub fn extend(&mut self, id: ContainerId, segments: &[EdgeId]) {
        self.slots[id.0]
            .container
            .segments
            .extend_from_slice(segments);
    }

    pub fn pop_front(&mut self, id: ContainerId) -> Option<EdgeId> {
        self.slots.get_mut(id.0)?.container.pop_front()
    }
}

impl Index<ContainerId> for ContainerArena {
    type Output = SegmentContainer;

    fn index(&self, id: ContainerId) -> &SegmentContainer {
        &self.slots[id.0].container
    }
}
