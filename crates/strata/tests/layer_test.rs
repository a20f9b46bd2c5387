use serde_json::json;
use strata::graph::{EdgeId, NodeId};
use strata::{AlternatingLayer, LayerItem, SegmentContainer};

#[test]
fn new_layer_is_a_single_empty_container() {
    let layer = AlternatingLayer::new();
    assert_eq!(
        layer.items(),
        &[LayerItem::Container(SegmentContainer::new())]
    );
    assert_eq!(layer.node_count(), 0);
    assert_eq!(layer.width(), 0);
    assert_eq!(layer, AlternatingLayer::default());
}

#[test]
fn from_nodes_interleaves_empty_containers() {
    let layer = AlternatingLayer::from_nodes([NodeId(2), NodeId(0)]);
    assert_eq!(layer.to_string(), "[] n2 [] n0 []");
    assert_eq!(layer.nodes().collect::<Vec<_>>(), vec![NodeId(2), NodeId(0)]);
    assert_eq!(layer.containers().count(), 3);
}

#[test]
fn push_container_joins_with_the_trailing_container() {
    let mut layer = AlternatingLayer::new();
    layer.push_segment(EdgeId(1));
    layer.push_container(&SegmentContainer::from_segments([EdgeId(2), EdgeId(3)]));
    layer.push_node(NodeId(0));
    layer.push_container(&SegmentContainer::new());
    layer.push_segment(EdgeId(4));

    assert_eq!(layer.to_string(), "[e1 e2 e3] n0 [e4]");
    assert_eq!(layer.node_count(), 1);
    assert_eq!(layer.segment_count(), 4);
    assert_eq!(layer.width(), 5);
}

#[test]
fn layer_serializes_its_items_in_order() {
    let mut layer = AlternatingLayer::from_nodes([NodeId(0)]);
    layer.push_segment(EdgeId(7));
    layer.push_node(NodeId(1));

    let value = serde_json::to_value(&layer).unwrap();
    assert_eq!(
        value,
        json!({
            "items": [
                { "Container": { "segments": [] } },
                { "Node": 0 },
                { "Container": { "segments": [7] } },
                { "Node": 1 },
                { "Container": { "segments": [] } }
            ]
        })
    );
}
