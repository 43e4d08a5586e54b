use super::*;
use crate::foundation::geometry::Rect;

fn fallback() -> ClientRect {
    Rect::new(0.0, 0.0, 30.0, 20.0).client_rect()
}

fn pad(value: f64) -> SideOffsets {
    SideOffsets::uniform(value)
}

#[test]
fn pointer_inside_a_disjoint_fragment_selects_it() {
    let fragments = [
        ClientRect::from_edges(0.0, 10.0, 10.0, 0.0),
        ClientRect::from_edges(0.0, 30.0, 10.0, 20.0),
    ];
    let resolved = resolve_inline_rect(
        Placement::Bottom,
        fallback(),
        &fragments,
        Some(Point::new(5.0, 5.0)),
        &pad(2.0),
    );
    assert_eq!(resolved, fragments[0]);
}

#[test]
fn pointer_selection_handles_wrapped_fragment_order() {
    // Wrapped text: first fragment ends line one, second starts line two.
    let fragments = [
        ClientRect::from_edges(0.0, 400.0, 10.0, 300.0),
        ClientRect::from_edges(10.0, 100.0, 20.0, 0.0),
    ];
    let resolved = resolve_inline_rect(
        Placement::Bottom,
        fallback(),
        &fragments,
        Some(Point::new(50.0, 15.0)),
        &pad(2.0),
    );
    assert_eq!(resolved, fragments[1]);
}

#[test]
fn pointer_outside_both_disjoint_fragments_falls_back() {
    let fragments = [
        ClientRect::from_edges(0.0, 10.0, 10.0, 0.0),
        ClientRect::from_edges(0.0, 30.0, 10.0, 20.0),
    ];
    let resolved = resolve_inline_rect(
        Placement::Bottom,
        fallback(),
        &fragments,
        Some(Point::new(100.0, 100.0)),
        &pad(2.0),
    );
    assert_eq!(resolved, fallback());
}

#[test]
fn containment_padding_admits_near_miss_pointers() {
    let fragments = [
        ClientRect::from_edges(0.0, 10.0, 10.0, 0.0),
        ClientRect::from_edges(0.0, 30.0, 10.0, 20.0),
    ];
    // One unit right of the first fragment: inside with padding 2, out
    // without it.
    let pointer = Some(Point::new(11.0, 5.0));
    let padded = resolve_inline_rect(Placement::Bottom, fallback(), &fragments, pointer, &pad(2.0));
    assert_eq!(padded, fragments[0]);
    let bare = resolve_inline_rect(Placement::Bottom, fallback(), &fragments, pointer, &pad(0.0));
    assert_eq!(bare, fallback());
}

#[test]
fn top_placement_merge_uses_the_first_fragment_edges() {
    let fragments = [
        ClientRect::from_edges(0.0, 10.0, 10.0, 0.0),
        ClientRect::from_edges(10.0, 20.0, 20.0, 5.0),
    ];
    let merged = resolve_inline_rect(Placement::Top, fallback(), &fragments, None, &pad(2.0));
    assert_eq!(merged, ClientRect::from_edges(0.0, 10.0, 20.0, 0.0));
}

#[test]
fn bottom_placement_merge_uses_the_last_fragment_edges() {
    let fragments = [
        ClientRect::from_edges(0.0, 10.0, 10.0, 0.0),
        ClientRect::from_edges(10.0, 20.0, 20.0, 5.0),
    ];
    let merged = resolve_inline_rect(Placement::Bottom, fallback(), &fragments, None, &pad(2.0));
    assert_eq!(merged, ClientRect::from_edges(0.0, 20.0, 20.0, 5.0));
}

#[test]
fn left_placement_measures_fragments_on_the_leftmost_edge() {
    let fragments = [
        ClientRect::from_edges(0.0, 10.0, 10.0, 0.0),
        ClientRect::from_edges(10.0, 20.0, 20.0, 5.0),
    ];
    let merged = resolve_inline_rect(Placement::Left, fallback(), &fragments, None, &pad(2.0));
    // Only the first fragment touches the leftmost edge; the horizontal span
    // is global.
    assert_eq!(merged, ClientRect::from_edges(0.0, 20.0, 10.0, 0.0));
}

#[test]
fn right_placement_measures_fragments_on_the_rightmost_edge() {
    let fragments = [
        ClientRect::from_edges(0.0, 10.0, 10.0, 0.0),
        ClientRect::from_edges(10.0, 20.0, 20.0, 5.0),
    ];
    let merged = resolve_inline_rect(Placement::Right, fallback(), &fragments, None, &pad(2.0));
    assert_eq!(merged, ClientRect::from_edges(10.0, 20.0, 20.0, 0.0));
}

#[test]
fn disjoint_fragments_without_a_pointer_still_merge() {
    let fragments = [
        ClientRect::from_edges(0.0, 10.0, 10.0, 0.0),
        ClientRect::from_edges(0.0, 30.0, 10.0, 20.0),
    ];
    let merged = resolve_inline_rect(Placement::Bottom, fallback(), &fragments, None, &pad(2.0));
    assert_eq!(merged, ClientRect::from_edges(0.0, 30.0, 10.0, 20.0));
}

#[test]
fn fewer_than_two_fragments_fall_back() {
    let single = [ClientRect::from_edges(0.0, 10.0, 10.0, 0.0)];
    assert_eq!(
        resolve_inline_rect(Placement::Bottom, fallback(), &single, None, &pad(2.0)),
        fallback()
    );
    assert_eq!(
        resolve_inline_rect(Placement::Bottom, fallback(), &[], None, &pad(2.0)),
        fallback()
    );
}
