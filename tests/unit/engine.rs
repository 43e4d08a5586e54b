use super::*;
use crate::foundation::geometry::Rect;

fn rects() -> ElementRects {
    ElementRects {
        reference: Rect::new(100.0, 100.0, 100.0, 100.0),
        floating: Rect::new(0.0, 0.0, 50.0, 50.0),
    }
}

#[test]
fn centered_placements_align_side_edges() {
    let rects = rects();
    assert_eq!(placement_coords(&rects, Placement::Bottom), (125.0, 200.0));
    assert_eq!(placement_coords(&rects, Placement::Top), (125.0, 50.0));
    assert_eq!(placement_coords(&rects, Placement::Right), (200.0, 125.0));
    assert_eq!(placement_coords(&rects, Placement::Left), (50.0, 125.0));
}

#[test]
fn start_alignment_shifts_toward_the_leading_edge() {
    let rects = rects();
    assert_eq!(placement_coords(&rects, Placement::TopStart), (100.0, 50.0));
    assert_eq!(placement_coords(&rects, Placement::TopEnd), (150.0, 50.0));
    assert_eq!(placement_coords(&rects, Placement::LeftStart), (50.0, 100.0));
    assert_eq!(placement_coords(&rects, Placement::RightEnd), (200.0, 150.0));
}

#[test]
fn alignment_is_a_no_op_when_sizes_match() {
    let rects = ElementRects {
        reference: Rect::new(10.0, 10.0, 40.0, 40.0),
        floating: Rect::new(0.0, 0.0, 40.0, 40.0),
    };
    assert_eq!(
        placement_coords(&rects, Placement::Bottom),
        placement_coords(&rects, Placement::BottomStart)
    );
}

#[test]
fn middleware_data_merges_objects_shallowly() {
    let mut data = MiddlewareData::default();
    data.merge("inline", serde_json::json!({ "pass": 1, "hit": false }));
    data.merge("inline", serde_json::json!({ "hit": true }));
    assert_eq!(
        data.get("inline"),
        Some(&serde_json::json!({ "pass": 1, "hit": true }))
    );
}

#[test]
fn middleware_data_replaces_non_object_values() {
    let mut data = MiddlewareData::default();
    data.merge("offset", serde_json::json!(1.0));
    data.merge("offset", serde_json::json!(2.0));
    assert_eq!(data.get("offset"), Some(&serde_json::json!(2.0)));
    assert!(data.get("inline").is_none());
    assert!(!data.is_empty());
}
