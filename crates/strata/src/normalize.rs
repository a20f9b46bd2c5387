//! Normalize long edges by inserting dummy nodes.
//!
//! After normalization every edge joins two adjacent layers, except segment edges, which run
//! from a source dummy to its target dummy across any number of layers.

use crate::graph::{EdgeId, LayoutDirection, LayoutGraph, NodeId, NodeKind};
use crate::{Error, Result};
use rustc_hash::FxHashMap as HashMap;

fn add_dummy_node(g: &mut LayoutGraph, kind: NodeKind, prefix: &str) -> Result<NodeId> {
    if g.node_id(prefix).is_none() {
        return Ok(g.add_dummy(prefix, kind)?);
    }
    let mut i: usize = 1;
    loop {
        let id = format!("{prefix}{i}");
        if g.node_id(&id).is_none() {
            return Ok(g.add_dummy(id, kind)?);
        }
        i += 1;
    }
}

#[derive(Debug, Clone, Copy)]
struct LongEdge {
    edge: EdgeId,
    target: NodeId,
    source_layer: usize,
    target_layer: usize,
    span: usize,
}

/// Splits every edge spanning more than one layer of `layering`.
///
/// Layers are listed top to bottom. A span of two gets one [`NodeKind::EdgeDummy`]; longer
/// spans get a source dummy below the edge source, a target dummy above the edge target and a
/// segment between the two. The original edge keeps its id and ends in the first dummy. New
/// dummies are appended to their layers.
///
/// All edges are checked before the graph is touched, so on error nothing has changed.
pub fn normalize(
    g: &mut LayoutGraph,
    layering: &mut [Vec<NodeId>],
    direction: LayoutDirection,
) -> Result<()> {
    let mut layer_of: HashMap<NodeId, usize> = HashMap::default();
    for (ix, layer) in layering.iter().enumerate() {
        for &v in layer {
            if !g.has_node(v) {
                return Err(Error::UnknownNode { node: v });
            }
            layer_of.insert(v, ix);
        }
    }

    let mut long_edges: Vec<LongEdge> = Vec::new();
    for e in g.edges() {
        let edge = g[e];
        if edge.is_segment() {
            continue;
        }
        let source_layer = *layer_of
            .get(&edge.source())
            .ok_or(Error::NodeNotLayered {
                node: edge.source(),
            })?;
        let target_layer = *layer_of
            .get(&edge.target())
            .ok_or(Error::NodeNotLayered {
                node: edge.target(),
            })?;

        let (top, bottom) = match direction {
            LayoutDirection::VerticalFromSource => (source_layer, target_layer),
            LayoutDirection::VerticalFromSink => (target_layer, source_layer),
        };
        if top == bottom {
            return Err(Error::FlatEdge { edge: e });
        }
        if top > bottom {
            return Err(Error::ReversedEdge { edge: e });
        }
        if bottom - top > 1 {
            long_edges.push(LongEdge {
                edge: e,
                target: edge.target(),
                source_layer,
                target_layer,
                span: bottom - top,
            });
        }
    }

    // One layer further along the edge, in graph direction.
    let towards_target = |layer: usize| match direction {
        LayoutDirection::VerticalFromSource => layer + 1,
        LayoutDirection::VerticalFromSink => layer - 1,
    };
    let towards_source = |layer: usize| match direction {
        LayoutDirection::VerticalFromSource => layer - 1,
        LayoutDirection::VerticalFromSink => layer + 1,
    };

    let mut dummies: usize = 0;
    for long in &long_edges {
        if long.span == 2 {
            let layer = towards_target(long.source_layer);
            let d = add_dummy_node(g, NodeKind::EdgeDummy, "_d")?;
            layering[layer].push(d);
            g.set_edge_target(long.edge, d)?;
            g.add_edge(d, long.target)?;
            dummies += 1;
            continue;
        }

        let source_dummy_layer = towards_target(long.source_layer);
        let target_dummy_layer = towards_source(long.target_layer);
        let s = add_dummy_node(g, NodeKind::SourceDummy, "_s")?;
        let t = add_dummy_node(g, NodeKind::TargetDummy, "_t")?;
        layering[source_dummy_layer].push(s);
        layering[target_dummy_layer].push(t);

        g.set_edge_target(long.edge, s)?;
        g.add_segment(s, t)?;
        g.add_edge(t, long.target)?;
        dummies += 2;
    }

    tracing::debug!(
        long_edges = long_edges.len(),
        dummies,
        "long edges normalized"
    );

    Ok(())
}
