//! Virtual segment edges and crossing records.

use crate::container::ContainerId;
use crate::graph::{EdgeId, LayoutDirection, NodeId};
use std::hash::{Hash, Hasher};

/// Entry of a working ordering: a node or an arena container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Item {
    Node(NodeId),
    Container(ContainerId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtualEdgeId(pub usize);

/// A real graph edge or a virtual segment edge of the same invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EdgeRef {
    Real(EdgeId),
    Virtual(VirtualEdgeId),
}

impl EdgeRef {
    pub fn is_real(self) -> bool {
        matches!(self, Self::Real(_))
    }

    pub fn is_virtual(self) -> bool {
        matches!(self, Self::Virtual(_))
    }
}

/// Synthetic edge standing in for a bundle of segments while counting crossings.
///
/// Endpoints follow the graph direction like real edges do: with `VerticalFromSource` the
/// source is the upper endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualSegmentEdge {
    source: Item,
    target: Item,
    weight: usize,
}

impl VirtualSegmentEdge {
    pub fn new(source: Item, target: Item, weight: usize) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Edge from `upper` down to `lower`, oriented for `direction`.
    pub fn between(direction: LayoutDirection, upper: Item, lower: Item, weight: usize) -> Self {
        match direction {
            LayoutDirection::VerticalFromSource => Self::new(upper, lower, weight),
            LayoutDirection::VerticalFromSink => Self::new(lower, upper, weight),
        }
    }

    pub fn source(&self) -> Item {
        self.source
    }

    pub fn target(&self) -> Item {
        self.target
    }

    /// Number of real segments this edge represents.
    pub fn weight(&self) -> usize {
        self.weight
    }

    /// `true` for the identity edge of a container that was never split.
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }

    pub fn top(&self, direction: LayoutDirection) -> Item {
        match direction {
            LayoutDirection::VerticalFromSource => self.source,
            LayoutDirection::VerticalFromSink => self.target,
        }
    }

    pub fn bottom(&self, direction: LayoutDirection) -> Item {
        match direction {
            LayoutDirection::VerticalFromSource => self.target,
            LayoutDirection::VerticalFromSink => self.source,
        }
    }
}

/// Crossing between two edges. Equality and hashing ignore operand order.
#[derive(Debug, Clone, Copy)]
pub struct CrossingEdge {
    first: EdgeRef,
    second: EdgeRef,
    weight: usize,
}

impl CrossingEdge {
    pub fn new(first: EdgeRef, first_weight: usize, second: EdgeRef, second_weight: usize) -> Self {
        Self {
            first,
            second,
            weight: first_weight * second_weight,
        }
    }

    pub fn first(&self) -> EdgeRef {
        self.first
    }

    pub fn second(&self) -> EdgeRef {
        self.second
    }

    /// Number of real crossings this record stands for.
    pub fn weight(&self) -> usize {
        self.weight
    }

    /// A real edge crossing a segment bundle.
    pub fn is_type1(&self) -> bool {
        self.first.is_real() != self.second.is_real()
    }

    pub fn involves(&self, edge: EdgeRef) -> bool {
        self.first == edge || self.second == edge
    }

    /// The real operand of a type-1 crossing.
    pub fn real_edge(&self) -> Option<EdgeId> {
        match (self.first, self.second) {
            (EdgeRef::Real(e), EdgeRef::Virtual(_)) | (EdgeRef::Virtual(_), EdgeRef::Real(e)) => {
                Some(e)
            }
            _ => None,
        }
    }

    fn ordered(&self) -> (EdgeRef, EdgeRef) {
        if self.first <= self.second {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        }
    }
}

impl PartialEq for CrossingEdge {
    fn eq(&self, other: &Self) -> bool {
        self.ordered() == other.ordered()
    }
}

impl Eq for CrossingEdge {}

impl Hash for CrossingEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered().hash(state);
    }
}
