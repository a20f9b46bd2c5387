use proptest::prelude::*;
use strata::graph::EdgeId;
use strata::{ContainerArena, SegmentContainer};

fn segs(ids: &[usize]) -> SegmentContainer {
    SegmentContainer::from_segments(ids.iter().map(|&i| EdgeId(i)))
}

#[test]
fn split_at_clamps_to_the_container_size() {
    let c = segs(&[1, 2, 3]);
    let (a, b) = c.split_at(7);
    assert_eq!(a, c);
    assert!(b.is_empty());

    let (a, b) = c.split_at(0);
    assert!(a.is_empty());
    assert_eq!(b, c);
}

#[test]
fn split_at_edge_opens_the_second_half_with_the_edge() {
    let c = segs(&[4, 5, 6]);
    let (a, b) = c.split_at_edge(EdgeId(5)).unwrap();
    assert_eq!(a.segments(), &[EdgeId(4)]);
    assert_eq!(b.segments(), &[EdgeId(5), EdgeId(6)]);
    assert_eq!(c.split_at_edge(EdgeId(9)), None);
}

#[test]
fn pop_front_drains_in_order() {
    let mut c = segs(&[1, 2]);
    assert_eq!(c.pop_front(), Some(EdgeId(1)));
    assert_eq!(c.pop_front(), Some(EdgeId(2)));
    assert_eq!(c.pop_front(), None);
    assert_eq!(c.size(), 0);
}

#[test]
fn arena_split_keeps_the_original_untouched() {
    let mut arena = ContainerArena::new();
    let c = arena.insert(segs(&[1, 2, 3]));
    let (a, b) = arena.split_at_edge(c, EdgeId(3)).unwrap();

    assert_eq!(arena[c].size(), 3);
    assert_eq!(arena[a].segments(), &[EdgeId(1), EdgeId(2)]);
    assert_eq!(arena[b].segments(), &[EdgeId(3)]);
    assert_eq!(arena.parent(a), Some(c));
    assert_eq!(arena.root(b), Some(c));
    assert_eq!(arena.len(), 3);
    assert!(arena.split_at_edge(c, EdgeId(8)).is_none());
}

#[test]
fn arena_join_appends_and_keeps_lineage() {
    let mut arena = ContainerArena::new();
    let c = arena.insert(segs(&[1, 2, 3, 4]));
    let (a, b) = arena.split_at(c, 2);
    let d = arena.insert(segs(&[9]));
    arena.join(a, d);

    assert_eq!(arena[a].segments(), &[EdgeId(1), EdgeId(2), EdgeId(9)]);
    assert_eq!(arena.root(a), Some(c));
    assert_eq!(arena[b].size(), 2);
    assert_eq!(arena.get(d).map(SegmentContainer::size), Some(1));
}

proptest! {
    #[test]
    fn split_then_join_restores_the_container(
        ids in prop::collection::vec(0usize..64, 0..12),
        k in 0usize..16,
    ) {
        let c = SegmentContainer::from_segments(ids.iter().map(|&i| EdgeId(i)));
        let (mut a, b) = c.split_at(k);
        prop_assert_eq!(a.size() + b.size(), c.size());
        prop_assert_eq!(a.size(), k.min(c.size()));
        a.join(&b);
        prop_assert_eq!(a, c);
    }

    #[test]
    fn repeated_arena_splits_keep_one_root(
        len in 1usize..12,
        cuts in prop::collection::vec(0usize..12, 1..6),
    ) {
        let mut arena = ContainerArena::new();
        let origin = arena.insert(SegmentContainer::from_segments((0..len).map(EdgeId)));
        let mut current = origin;
        let mut carried: Vec<EdgeId> = Vec::new();
        for k in cuts {
            let (first, second) = arena.split_at(current, k);
            prop_assert_eq!(arena.root(first), Some(origin));
            prop_assert_eq!(arena.root(second), Some(origin));
            carried.extend_from_slice(arena[first].segments());
            current = second;
        }
        carried.extend_from_slice(arena[current].segments());
        prop_assert_eq!(carried, (0..len).map(EdgeId).collect::<Vec<_>>());
    }
}
