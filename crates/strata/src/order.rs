//! Layer-by-layer sweep over a whole layering.
//!
//! Down and up sweeps alternate; after every sweep the layering is counted and the best one
//! seen so far is kept.

use crate::cross_count::cross_count;
use crate::graph::{EdgeId, LayoutDirection, LayoutGraph, NodeId};
use crate::layer::AlternatingLayer;
use crate::minimize::{
    CrossingSet, LayerCrossingReduction, LayerDownCrossingMinimizer, LayerUpCrossingMinimizer,
    Sweep,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepOptions {
    /// Upper bound on the number of sweeps. At least one sweep always runs.
    pub max_iterations: usize,
    /// Sweeps in a row without improvement after which the driver gives up.
    pub stale_limit: usize,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            max_iterations: 24,
            stale_limit: 4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SweepResult {
    /// Best layering found, top to bottom.
    pub layers: Vec<AlternatingLayer>,
    /// Crossing count of `layers`.
    pub crossings: usize,
    /// Number of sweeps run.
    pub iterations: usize,
    /// Type-1 conflicts of the best sweep; entry `i` covers the gap below `layers[i]`.
    pub type1_conflicts: Vec<CrossingSet>,
}

impl SweepResult {
    /// Node order of every layer, dummies included.
    pub fn node_order(&self) -> Vec<Vec<NodeId>> {
        node_order(&self.layers)
    }

    /// Real edges taking part in any type-1 conflict, in gap order.
    pub fn type1_marked_edges(&self) -> Vec<EdgeId> {
        let mut out: Vec<EdgeId> = Vec::new();
        for c in self.type1_conflicts.iter().flatten() {
            if let Some(e) = c.real_edge() {
                if !out.contains(&e) {
                    out.push(e);
                }
            }
        }
        out
    }
}

struct SweepOutcome {
    layers: Vec<AlternatingLayer>,
    type1_conflicts: Vec<CrossingSet>,
}

/// Orders every layer of `layering` (listed top to bottom).
///
/// The graph is expected to be normalized: edges join adjacent layers, and only segments
/// span further.
pub fn order(
    g: &LayoutGraph,
    direction: LayoutDirection,
    layering: &[Vec<NodeId>],
    options: &SweepOptions,
) -> Result<SweepResult> {
    for v in layering.iter().flatten() {
        if !g.has_node(*v) {
            return Err(Error::UnknownNode { node: *v });
        }
    }
    if layering.is_empty() {
        return Ok(SweepResult {
            layers: Vec::new(),
            crossings: 0,
            iterations: 0,
            type1_conflicts: Vec::new(),
        });
    }

    let mut down = LayerDownCrossingMinimizer::new(direction);
    let mut up = LayerUpCrossingMinimizer::new(direction);

    let mut best = sweep_down(g, &mut down, layering)?;
    let mut best_cc = cross_count(g, direction, &best.layers)?;
    let mut current = node_order(&best.layers);
    let mut iterations: usize = 1;
    let mut stale: usize = 0;
    tracing::debug!(
        iteration = iterations,
        sweep = ?Sweep::Down,
        crossings = best_cc,
        "layer sweep"
    );

    while best_cc > 0 && stale < options.stale_limit && iterations < options.max_iterations {
        let sweep = if iterations % 2 == 0 {
            Sweep::Down
        } else {
            Sweep::Up
        };
        let outcome = match sweep {
            Sweep::Down => sweep_down(g, &mut down, &current)?,
            Sweep::Up => sweep_up(g, &mut up, &current)?,
        };
        let cc = cross_count(g, direction, &outcome.layers)?;
        iterations += 1;
        current = node_order(&outcome.layers);

        if cc < best_cc {
            best = outcome;
            best_cc = cc;
            stale = 0;
        } else {
            stale += 1;
        }

        tracing::debug!(
            iteration = iterations,
            sweep = ?sweep,
            crossings = cc,
            best = best_cc,
            "layer sweep"
        );
    }

    Ok(SweepResult {
        layers: best.layers,
        crossings: best_cc,
        iterations,
        type1_conflicts: best.type1_conflicts,
    })
}

fn node_order(layers: &[AlternatingLayer]) -> Vec<Vec<NodeId>> {
    layers.iter().map(|l| l.nodes().collect()).collect()
}

fn sweep_down(
    g: &LayoutGraph,
    minimizer: &mut impl LayerCrossingReduction,
    current: &[Vec<NodeId>],
) -> Result<SweepOutcome> {
    let mut layers: Vec<AlternatingLayer> = Vec::with_capacity(current.len());
    let mut type1_conflicts: Vec<CrossingSet> = Vec::with_capacity(current.len());

    layers.push(AlternatingLayer::from_nodes(current[0].iter().copied()));
    for free in &current[1..] {
        let fixed = &layers[layers.len() - 1];
        let layer = minimizer.reduce_crossings(g, fixed, free)?;
        type1_conflicts.push(minimizer.type1_conflicts().clone());
        layers.push(layer);
    }
    type1_conflicts.push(CrossingSet::default());

    Ok(SweepOutcome {
        layers,
        type1_conflicts,
    })
}

fn sweep_up(
    g: &LayoutGraph,
    minimizer: &mut impl LayerCrossingReduction,
    current: &[Vec<NodeId>],
) -> Result<SweepOutcome> {
    let mut layers: Vec<AlternatingLayer> = Vec::with_capacity(current.len());
    let mut type1_conflicts: Vec<CrossingSet> = Vec::with_capacity(current.len());

    let last = current.len() - 1;
    layers.push(AlternatingLayer::from_nodes(current[last].iter().copied()));
    type1_conflicts.push(CrossingSet::default());
    for free in current[..last].iter().rev() {
        let fixed = &layers[layers.len() - 1];
        let layer = minimizer.reduce_crossings(g, fixed, free)?;
        type1_conflicts.push(minimizer.type1_conflicts().clone());
        layers.push(layer);
    }

    layers.reverse();
    type1_conflicts.reverse();
    Ok(SweepOutcome {
        layers,
        type1_conflicts,
    })
}
