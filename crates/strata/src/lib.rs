#![forbid(unsafe_code)]

//! Layer-by-layer crossing minimization for layered graph drawing.
//!
//! Long edges are bundled into segment containers that sit between the nodes of an
//! [`AlternatingLayer`]. A free layer is ordered against a fixed neighbouring layer by
//! [`LayerDownCrossingMinimizer`] or [`LayerUpCrossingMinimizer`]; [`order()`] drives both over a
//! whole layering.
//!
//! The graph model lives in `strata-graph` and is re-exported as [`graph`].

pub use strata_graph as graph;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod container;
pub mod cross_count;
pub mod crossing;
mod error;
pub mod layer;
pub mod minimize;
pub mod normalize;
pub mod order;

pub use container::{ContainerArena, ContainerId, SegmentContainer};
pub use cross_count::cross_count;
pub use crossing::{CrossingEdge, EdgeRef, Item, VirtualEdgeId, VirtualSegmentEdge};
pub use error::{Error, Result};
pub use layer::{AlternatingLayer, LayerItem};
pub use minimize::{
    CrossingSet, LayerCrossingMinimizer, LayerCrossingReduction, LayerDownCrossingMinimizer,
    LayerUpCrossingMinimizer, MinCrossingLayer, Sweep,
};
pub use normalize::normalize;
pub use order::{SweepOptions, SweepResult, order};
