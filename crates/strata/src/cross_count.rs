//! Crossing count of a whole layering of alternating layers.
//!
//! Each layer is expanded into slots: one per node and one per contained segment. Two adjacent
//! layers are then counted with the accumulator tree of Barth, Jünger and Mutzel.

use crate::graph::{EdgeId, LayoutDirection, LayoutGraph, NodeId};
use crate::layer::{AlternatingLayer, LayerItem};
use crate::{Error, Result};
use rustc_hash::FxHashMap as HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Slot {
    Node(NodeId),
    Segment(EdgeId),
}

fn slots(layer: &AlternatingLayer) -> Vec<Slot> {
    let mut out: Vec<Slot> = Vec::with_capacity(layer.width());
    for item in layer.items() {
        match item {
            LayerItem::Node(v) => out.push(Slot::Node(*v)),
            LayerItem::Container(c) => out.extend(c.segments().iter().map(|&s| Slot::Segment(s))),
        }
    }
    out
}

/// Total number of crossings between consecutive layers, listed top to bottom.
pub fn cross_count(
    g: &LayoutGraph,
    direction: LayoutDirection,
    layers: &[AlternatingLayer],
) -> Result<usize> {
    let mut cc: usize = 0;
    for pair in layers.windows(2) {
        cc += two_layer_cross_count(g, direction, &pair[0], &pair[1])?;
    }
    Ok(cc)
}

fn two_layer_cross_count(
    g: &LayoutGraph,
    dir: LayoutDirection,
    north: &AlternatingLayer,
    south: &AlternatingLayer,
) -> Result<usize> {
    let south = slots(south);
    if south.is_empty() {
        return Ok(0);
    }

    let mut south_pos: HashMap<Slot, usize> = HashMap::default();
    for (i, s) in south.iter().enumerate() {
        south_pos.insert(*s, i);
    }

    // Where an edge leaving the north layer lands: its own segment slot while the segment keeps
    // passing, otherwise the node below.
    let land = |e: EdgeId| -> Result<usize> {
        if g[e].is_segment() {
            if let Some(&pos) = south_pos.get(&Slot::Segment(e)) {
                return Ok(pos);
            }
        }
        south_pos
            .get(&Slot::Node(dir.bottom_node(g, e)))
            .copied()
            .ok_or(Error::EdgeSkipsLayer { edge: e })
    };

    let mut south_entries: Vec<usize> = Vec::new();
    for slot in slots(north) {
        let mut entries: Vec<usize> = match slot {
            Slot::Node(v) => dir
                .bottom_edges(g, v)
                .iter()
                .map(|&e| land(e))
                .collect::<Result<_>>()?,
            Slot::Segment(e) => vec![land(e)?],
        };
        entries.sort_unstable();
        south_entries.extend(entries);
    }

    let mut first_index: usize = 1;
    while first_index < south.len() {
        first_index <<= 1;
    }
    let tree_size = 2 * first_index - 1;
    first_index -= 1;
    let mut tree: Vec<usize> = vec![0; tree_size];

    let mut cc: usize = 0;
    for pos in south_entries {
        let mut index = pos + first_index;
        tree[index] += 1;
        let mut weight_sum: usize = 0;
        while index > 0 {
            if index % 2 == 1 {
                weight_sum += tree[index + 1];
            }
            index = (index - 1) >> 1;
            tree[index] += 1;
        }
        cc += weight_sum;
    }

    Ok(cc)
}
