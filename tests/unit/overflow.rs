use super::*;
use crate::engine::{Elements, MiddlewareData};
use crate::platform::ElementRects;
use crate::foundation::placement::{Placement, Strategy};

struct ClipPlatform {
    clip: Rect,
}

impl Platform for ClipPlatform {
    type Element = ();

    fn element_rects(&self, _: &(), _: &(), _: Strategy) -> PerchResult<ElementRects> {
        Ok(ElementRects::default())
    }

    fn clipping_rect(&self, _: &(), _: &Boundary<()>, _: &RootBoundary) -> PerchResult<Rect> {
        Ok(self.clip)
    }
}

/// Same fixed clipping rect, but element rects live in a space translated
/// from the viewport.
struct ShiftedPlatform {
    clip: Rect,
    shift: (f64, f64),
}

impl Platform for ShiftedPlatform {
    type Element = ();

    fn element_rects(&self, _: &(), _: &(), _: Strategy) -> PerchResult<ElementRects> {
        Ok(ElementRects::default())
    }

    fn clipping_rect(&self, _: &(), _: &Boundary<()>, _: &RootBoundary) -> PerchResult<Rect> {
        Ok(self.clip)
    }

    fn offset_rect_to_viewport(
        &self,
        rect: Rect,
        _offset_parent: Option<&()>,
        _strategy: Strategy,
    ) -> PerchResult<Rect> {
        Ok(Rect {
            x: rect.x + self.shift.0,
            y: rect.y + self.shift.1,
            ..rect
        })
    }
}

fn state_at<'a, P: Platform<Element = ()>>(
    platform: &'a P,
    data: &'a MiddlewareData,
    x: f64,
    y: f64,
    rects: ElementRects,
) -> MiddlewareState<'a, P> {
    MiddlewareState {
        x,
        y,
        placement: Placement::Bottom,
        strategy: Strategy::Absolute,
        rects,
        elements: Elements {
            reference: &(),
            floating: &(),
        },
        platform,
        middleware_data: data,
    }
}

#[test]
fn floating_overflow_is_measured_at_the_running_coordinates() {
    let platform = ClipPlatform {
        clip: Rect::new(0.0, 0.0, 100.0, 100.0),
    };
    let data = MiddlewareData::default();
    let rects = ElementRects {
        reference: Rect::new(40.0, 40.0, 20.0, 20.0),
        floating: Rect::new(0.0, 0.0, 20.0, 20.0),
    };
    let state = state_at(&platform, &data, 90.0, 90.0, rects);

    let overflow = detect_overflow(&state, &OverflowOptions::default()).expect("detects");
    assert_eq!(
        overflow,
        SideOffsets {
            top: -90.0,
            right: 10.0,
            bottom: 10.0,
            left: -90.0,
        }
    );
}

#[test]
fn reference_context_measures_the_reference_rect() {
    let platform = ClipPlatform {
        clip: Rect::new(0.0, 0.0, 100.0, 100.0),
    };
    let data = MiddlewareData::default();
    let rects = ElementRects {
        reference: Rect::new(-10.0, 20.0, 30.0, 30.0),
        floating: Rect::new(0.0, 0.0, 20.0, 20.0),
    };
    let state = state_at(&platform, &data, 0.0, 0.0, rects);

    let options = OverflowOptions {
        element_context: ElementContext::Reference,
        ..OverflowOptions::default()
    };
    let overflow = detect_overflow(&state, &options).expect("detects");
    assert_eq!(overflow.left, 10.0);
    assert_eq!(overflow.right, -80.0);
}

#[test]
fn overflow_is_measured_after_the_viewport_conversion() {
    let platform = ShiftedPlatform {
        clip: Rect::new(0.0, 0.0, 100.0, 100.0),
        shift: (10.0, 10.0),
    };
    let data = MiddlewareData::default();
    let rects = ElementRects {
        reference: Rect::new(40.0, 40.0, 20.0, 20.0),
        floating: Rect::new(0.0, 0.0, 20.0, 20.0),
    };
    let state = state_at(&platform, &data, 90.0, 90.0, rects);

    // The floating rect lands at (100, 100) in viewport space, pushing the
    // right and bottom overflow past the unshifted values.
    let overflow = detect_overflow(&state, &OverflowOptions::default()).expect("detects");
    assert_eq!(
        overflow,
        SideOffsets {
            top: -100.0,
            right: 20.0,
            bottom: 20.0,
            left: -100.0,
        }
    );
}

#[test]
fn padding_inflates_every_side() {
    let platform = ClipPlatform {
        clip: Rect::new(0.0, 0.0, 100.0, 100.0),
    };
    let data = MiddlewareData::default();
    let rects = ElementRects {
        reference: Rect::default(),
        floating: Rect::new(0.0, 0.0, 100.0, 100.0),
    };
    let state = state_at(&platform, &data, 0.0, 0.0, rects);

    let snug = detect_overflow(&state, &OverflowOptions::default()).expect("detects");
    assert_eq!(snug, SideOffsets::uniform(0.0));

    let options = OverflowOptions {
        padding: Padding::Uniform(8.0),
        ..OverflowOptions::default()
    };
    let padded = detect_overflow(&state, &options).expect("detects");
    assert_eq!(padded, SideOffsets::uniform(8.0));
}
