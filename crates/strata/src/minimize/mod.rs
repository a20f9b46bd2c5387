//! One-sided layer crossing minimization.
//!
//! The free layer is ordered against a fixed alternating layer with the barycenter heuristic.
//! Long edges are handled as segment containers: the fixed layer's segment sources are folded
//! into containers, barycenter-placed nodes are merged with the containers, and the free
//! layer's segment targets are seated by splitting the container that carries their segment.
//! Afterwards every crossing between the two layers is counted and classified.

mod merge;
mod sweep;

pub use sweep::Sweep;

use crate::container::{ContainerArena, ContainerId};
use crate::crossing::{CrossingEdge, EdgeRef, Item, VirtualEdgeId, VirtualSegmentEdge};
use crate::graph::{EdgeId, LayoutDirection, LayoutGraph, NodeId};
use crate::layer::AlternatingLayer;
use crate::{Error, Result};
use indexmap::IndexSet;
use rustc_hash::{FxBuildHasher, FxHashMap as HashMap};
use std::ops::{Deref, DerefMut};

pub type CrossingSet = IndexSet<CrossingEdge, FxBuildHasher>;

/// Start index of every item of a layer; containers occupy `size()` consecutive indices.
pub(crate) type Positions = HashMap<Item, usize>;

pub(crate) fn positions(items: &[Item], arena: &ContainerArena) -> Positions {
    let mut out: Positions = HashMap::default();
    let mut ix: usize = 0;
    for &item in items {
        out.insert(item, ix);
        ix += match item {
            Item::Node(_) => 1,
            Item::Container(c) => arena[c].size(),
        };
    }
    out
}

/// Reorders a free layer against a fixed neighbouring layer.
pub trait LayerCrossingReduction {
    /// Returns the new ordering of `free`. `fixed` is only read.
    fn reduce_crossings(
        &mut self,
        g: &LayoutGraph,
        fixed: &AlternatingLayer,
        free: &[NodeId],
    ) -> Result<AlternatingLayer>;

    /// Weighted crossing number of the last reduction.
    fn crossing_number(&self) -> usize;

    /// Type-1 conflicts (real edge crossing a segment bundle) of the last reduction.
    fn type1_conflicts(&self) -> &CrossingSet;
}

/// Outcome of one minimizer invocation.
#[derive(Debug, Clone)]
pub struct MinCrossingLayer {
    pub layer: AlternatingLayer,
    pub crossing_number: usize,
    pub crossings: CrossingSet,
    pub type1_conflicts: CrossingSet,
    /// Indexed by [`VirtualEdgeId`].
    pub virtual_edges: Vec<VirtualSegmentEdge>,
    /// Containers referenced by `virtual_edges`.
    pub containers: ContainerArena,
}

impl MinCrossingLayer {
    pub fn virtual_edge(&self, id: VirtualEdgeId) -> Option<&VirtualSegmentEdge> {
        self.virtual_edges.get(id.0)
    }

    /// Real edges taking part in a type-1 conflict, in first-seen order.
    pub fn type1_marked_edges(&self) -> Vec<EdgeId> {
        let mut out: Vec<EdgeId> = Vec::new();
        for c in &self.type1_conflicts {
            if let Some(e) = c.real_edge() {
                if !out.contains(&e) {
                    out.push(e);
                }
            }
        }
        out
    }
}

#[derive(Debug, Clone, Copy)]
struct SweptEdge {
    edge: EdgeRef,
    weight: usize,
    top: usize,
    bottom: usize,
}

#[derive(Debug, Clone)]
pub struct LayerCrossingMinimizer {
    sweep: Sweep,
    direction: LayoutDirection,
    crossing_number: usize,
    type1_conflicts: CrossingSet,
}

impl LayerCrossingMinimizer {
    pub fn new(sweep: Sweep, direction: LayoutDirection) -> Self {
        Self {
            sweep,
            direction,
            crossing_number: 0,
            type1_conflicts: CrossingSet::default(),
        }
    }

    pub fn sweep(&self) -> Sweep {
        self.sweep
    }

    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    /// Orders `free` against `fixed` and counts the resulting crossings.
    ///
    /// Ties between equal barycenters keep the order of `free`, so the result only depends on
    /// the inputs.
    pub fn min_crossing_layer(
        &self,
        g: &LayoutGraph,
        fixed: &AlternatingLayer,
        free: &[NodeId],
    ) -> Result<MinCrossingLayer> {
        let (sweep, dir) = (self.sweep, self.direction);

        for v in fixed.nodes().chain(free.iter().copied()) {
            if !g.has_node(v) {
                return Err(Error::UnknownNode { node: v });
            }
        }

        let mut arena = ContainerArena::new();
        let fixed_items = sweep.remove_segment_sources(g, dir, fixed, &mut arena)?;
        let fixed_positions = positions(&fixed_items, &arena);

        let mut measured: Vec<(NodeId, f64)> = Vec::new();
        for v in sweep.non_segment_target_nodes(g, dir, free) {
            measured.push((v, sweep.barycenter(g, dir, v, &fixed_positions)?));
        }
        measured.sort_by(|a, b| a.1.total_cmp(&b.1));

        let containers: Vec<(ContainerId, f64)> = fixed_items
            .iter()
            .filter_map(|&item| match item {
                Item::Container(c) if !arena[c].is_empty() => {
                    Some((c, fixed_positions[&item] as f64))
                }
                _ => None,
            })
            .collect();

        let mut ordering = merge::merge_join(&mut arena, measured, containers);
        let carved = sweep.add_segment_targets(g, dir, &mut ordering, free, &mut arena)?;

        let (virtual_edges, crossings) =
            self.init_crossings(g, &ordering, &fixed_positions, &carved, &arena)?;

        let mut type1_conflicts = CrossingSet::default();
        let mut crossing_number: usize = 0;
        for c in &crossings {
            crossing_number += c.weight();
            if c.is_type1() {
                type1_conflicts.insert(*c);
            }
        }

        let mut layer = AlternatingLayer::new();
        for item in &ordering {
            match *item {
                Item::Container(c) => layer.push_container(&arena[c]),
                Item::Node(v) => layer.push_node(v),
            }
        }

        tracing::trace!(
            sweep = ?sweep,
            free = free.len(),
            crossing_number,
            type1 = type1_conflicts.len(),
            "layer crossings reduced"
        );

        Ok(MinCrossingLayer {
            layer,
            crossing_number,
            crossings,
            type1_conflicts,
            virtual_edges,
            containers: arena,
        })
    }

    /// Collects the edges between both layers and records every pair whose fixed-layer
    /// endpoints are inverted relative to the free-layer order.
    fn init_crossings(
        &self,
        g: &LayoutGraph,
        ordering: &[Item],
        fixed_positions: &Positions,
        carved: &[(NodeId, ContainerId)],
        arena: &ContainerArena,
    ) -> Result<(Vec<VirtualSegmentEdge>, CrossingSet)> {
        let (sweep, dir) = (self.sweep, self.direction);
        let free_positions = positions(ordering, arena);
        let carved: HashMap<NodeId, ContainerId> = carved.iter().copied().collect();

        let mut virtual_edges: Vec<VirtualSegmentEdge> = Vec::new();
        let mut edges: Vec<SweptEdge> = Vec::new();
        let mut push_virtual = |virtual_edge: VirtualSegmentEdge,
                                near: usize,
                                far: usize,
                                edges: &mut Vec<SweptEdge>| {
            let id = VirtualEdgeId(virtual_edges.len());
            virtual_edges.push(virtual_edge);
            let (top, bottom) = sweep.top_bottom(near, far);
            edges.push(SweptEdge {
                edge: EdgeRef::Virtual(id),
                weight: virtual_edge.weight(),
                top,
                bottom,
            });
        };

        for &item in ordering {
            let near = free_positions[&item];
            match item {
                Item::Node(v) => {
                    if let Some(&c) = carved.get(&v) {
                        let origin = Item::Container(arena.root(c).unwrap_or(c));
                        let far = fixed_positions[&origin];
                        let virtual_edge = sweep.virtual_edge(dir, origin, item, 1);
                        push_virtual(virtual_edge, near, far, &mut edges);
                        continue;
                    }
                    for (e, u) in sweep.edges(g, dir, v) {
                        let far = *fixed_positions
                            .get(&Item::Node(u))
                            .ok_or(Error::NodeNotInFixedLayer { node: u })?;
                        let (top, bottom) = sweep.top_bottom(near, far);
                        edges.push(SweptEdge {
                            edge: EdgeRef::Real(e),
                            weight: 1,
                            top,
                            bottom,
                        });
                    }
                }
                Item::Container(c) => {
                    let size = arena[c].size();
                    if size == 0 {
                        continue;
                    }
                    let origin = Item::Container(arena.root(c).unwrap_or(c));
                    let far = fixed_positions[&origin];
                    let virtual_edge = sweep.virtual_edge(dir, origin, item, size);
                    push_virtual(virtual_edge, near, far, &mut edges);
                }
            }
        }

        edges.sort_by_key(|e| sweep.sort_key(e.top, e.bottom));

        let mut crossings = CrossingSet::default();
        for (i, a) in edges.iter().enumerate() {
            let a_far = sweep.sort_key(a.top, a.bottom).1;
            for b in &edges[i + 1..] {
                let b_far = sweep.sort_key(b.top, b.bottom).1;
                if a_far > b_far {
                    crossings.insert(CrossingEdge::new(a.edge, a.weight, b.edge, b.weight));
                }
            }
        }

        Ok((virtual_edges, crossings))
    }
}

impl LayerCrossingReduction for LayerCrossingMinimizer {
    fn reduce_crossings(
        &mut self,
        g: &LayoutGraph,
        fixed: &AlternatingLayer,
        free: &[NodeId],
    ) -> Result<AlternatingLayer> {
        let result = self.min_crossing_layer(g, fixed, free)?;
        self.crossing_number = result.crossing_number;
        self.type1_conflicts = result.type1_conflicts;
        Ok(result.layer)
    }

    fn crossing_number(&self) -> usize {
        self.crossing_number
    }

    fn type1_conflicts(&self) -> &CrossingSet {
        &self.type1_conflicts
    }
}

/// Minimizer for the top-to-bottom sweep: the upper layer is fixed.
#[derive(Debug, Clone)]
pub struct LayerDownCrossingMinimizer(LayerCrossingMinimizer);

impl LayerDownCrossingMinimizer {
    pub fn new(direction: LayoutDirection) -> Self {
        Self(LayerCrossingMinimizer::new(Sweep::Down, direction))
    }
}

/// Minimizer for the bottom-to-top sweep: the lower layer is fixed.
#[derive(Debug, Clone)]
pub struct LayerUpCrossingMinimizer(LayerCrossingMinimizer);

impl LayerUpCrossingMinimizer {
    pub fn new(direction: LayoutDirection) -> Self {
        Self(LayerCrossingMinimizer::new(Sweep::Up, direction))
    }
}

macro_rules! delegate_reduction {
    ($ty:ty) => {
        impl LayerCrossingReduction for $ty {
            fn reduce_crossings(
                &mut self,
                g: &LayoutGraph,
                fixed: &AlternatingLayer,
                free: &[NodeId],
            ) -> Result<AlternatingLayer> {
                self.0.reduce_crossings(g, fixed, free)
            }

            fn crossing_number(&self) -> usize {
                self.0.crossing_number
            }

            fn type1_conflicts(&self) -> &CrossingSet {
                &self.0.type1_conflicts
            }
        }
    };
}

delegate_reduction!(LayerDownCrossingMinimizer);
delegate_reduction!(LayerUpCrossingMinimizer);

impl Deref for LayerDownCrossingMinimizer {
    type Target = LayerCrossingMinimizer;

    fn deref(&self) -> &LayerCrossingMinimizer {
        &self.0
    }
}

impl DerefMut for LayerDownCrossingMinimizer {
    fn deref_mut(&mut self) -> &mut LayerCrossingMinimizer {
        &mut self.0
    }
}

impl Deref for LayerUpCrossingMinimizer {
    type Target = LayerCrossingMinimizer;

    fn deref(&self) -> &LayerCrossingMinimizer {
        &self.0
    }
}

impl DerefMut for LayerUpCrossingMinimizer {
    fn deref_mut(&mut self) -> &mut LayerCrossingMinimizer {
        &mut self.0
    }
}
