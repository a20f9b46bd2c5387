//! Merge of barycenter-sorted nodes with position-sorted containers.

use crate::container::{ContainerArena, ContainerId};
use crate::crossing::Item;
use crate::graph::NodeId;

/// Interleaves `nodes` and `containers`, both sorted by ascending measure.
///
/// A node whose measure falls strictly inside a container's span splits the container at
/// `ceil(node - container)`; the remainder continues right after the node with measure
/// `node + 1`.
pub(crate) fn merge_join(
    arena: &mut ContainerArena,
    nodes: Vec<(NodeId, f64)>,
    containers: Vec<(ContainerId, f64)>,
) -> Vec<Item> {
    let mut out: Vec<Item> = Vec::with_capacity(nodes.len() + containers.len() * 2);

    let mut node_stack = nodes;
    node_stack.reverse();
    let mut container_stack = containers;
    container_stack.reverse();

    while let (Some(&(v, node_measure)), Some(&(c, container_measure))) =
        (node_stack.last(), container_stack.last())
    {
        let size = arena[c].size() as f64;

        if node_measure <= container_measure {
            node_stack.pop();
            out.push(Item::Node(v));
        } else if node_measure >= container_measure + size - 1.0 {
            container_stack.pop();
            out.push(Item::Container(c));
        } else {
            node_stack.pop();
            container_stack.pop();

            let k = (node_measure - container_measure).ceil() as usize;
            let (first, second) = arena.split_at(c, k);
            out.push(Item::Container(first));
            out.push(Item::Node(v));
            container_stack.push((second, node_measure + 1.0));
        }
    }

    out.extend(node_stack.into_iter().rev().map(|(v, _)| Item::Node(v)));
    out.extend(
        container_stack
            .into_iter()
            .rev()
            .map(|(c, _)| Item::Container(c)),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::SegmentContainer;
    use crate::graph::EdgeId;

    fn container(arena: &mut ContainerArena, size: usize) -> ContainerId {
        arena.insert(SegmentContainer::from_segments((0..size).map(EdgeId)))
    }

    fn sizes(arena: &ContainerArena, items: &[Item]) -> Vec<String> {
        items
            .iter()
            .map(|item| match *item {
                Item::Node(v) => v.to_string(),
                Item::Container(c) => format!("C{}", arena[c].size()),
            })
            .collect()
    }

    #[test]
    fn node_on_the_container_start_goes_first() {
        let mut arena = ContainerArena::new();
        let c = container(&mut arena, 3);
        let out = merge_join(&mut arena, vec![(NodeId(0), 2.0)], vec![(c, 2.0)]);
        assert_eq!(sizes(&arena, &out), ["n0", "C3"]);
    }

    #[test]
    fn node_on_the_last_container_position_goes_after() {
        let mut arena = ContainerArena::new();
        let c = container(&mut arena, 3);
        // span 2..=4
        let out = merge_join(&mut arena, vec![(NodeId(0), 4.0)], vec![(c, 2.0)]);
        assert_eq!(sizes(&arena, &out), ["C3", "n0"]);
    }

    #[test]
    fn node_inside_the_span_splits_with_ceil() {
        let mut arena = ContainerArena::new();
        let c = container(&mut arena, 4);
        let out = merge_join(&mut arena, vec![(NodeId(0), 2.5)], vec![(c, 2.0)]);
        assert_eq!(sizes(&arena, &out), ["C1", "n0", "C3"]);

        let mut arena = ContainerArena::new();
        let c = container(&mut arena, 4);
        let out = merge_join(&mut arena, vec![(NodeId(0), 3.0)], vec![(c, 2.0)]);
        assert_eq!(sizes(&arena, &out), ["C1", "n0", "C3"]);
    }

    #[test]
    fn remainder_restarts_after_the_node() {
        let mut arena = ContainerArena::new();
        let c = container(&mut arena, 5);
        // span 0..=4; first split at 1, remainder [4 segments] measured 2.0
        let out = merge_join(
            &mut arena,
            vec![(NodeId(0), 1.0), (NodeId(1), 2.0), (NodeId(2), 3.5)],
            vec![(c, 0.0)],
        );
        assert_eq!(
            sizes(&arena, &out),
            ["C1", "n0", "n1", "C2", "n2", "C2"]
        );
    }

    #[test]
    fn leftovers_keep_their_order() {
        let mut arena = ContainerArena::new();
        let a = container(&mut arena, 1);
        let b = container(&mut arena, 2);
        let out = merge_join(
            &mut arena,
            vec![(NodeId(0), 0.0), (NodeId(1), 0.0)],
            vec![(a, 3.0), (b, 4.0)],
        );
        assert_eq!(sizes(&arena, &out), ["n0", "n1", "C1", "C2"]);
    }
}
