//! Positioning against inline references that span multiple line boxes.
//!
//! A wrapped hyperlink or a multi-range selection renders as several disjoint
//! fragment rects. [`resolve_inline_rect`] derives one representative rect
//! from them, optionally steered by a pointer coordinate; the [`Inline`]
//! middleware feeds that rect back into the pipeline as the reference rect.

use kurbo::Point;
use smallvec::SmallVec;

use crate::engine::{Middleware, MiddlewareReturn, MiddlewareState, Reset, ResetOverrides, ResetRects};
use crate::foundation::error::PerchResult;
use crate::foundation::geometry::{ClientRect, Padding, Rect, SideOffsets, max_of, min_of};
use crate::foundation::placement::{Axis, Placement, Side};
use crate::platform::{ElementRects, Platform};

/// Pointer coordinates can fall up to ~2 units outside the fragment rect that
/// triggered the event (sub-pixel/anti-aliasing discrepancies); padding the
/// containment test by 2 absorbs that.
pub const DEFAULT_INLINE_PADDING: f64 = 2.0;

fn contains_point(rect: &ClientRect, point: Point, padding: &SideOffsets) -> bool {
    point.x > rect.left - padding.left
        && point.x < rect.right + padding.right
        && point.y > rect.top - padding.top
        && point.y < rect.bottom + padding.bottom
}

/// Whether two fragments' horizontal spans neither overlap nor touch.
fn horizontally_disjoint(a: &ClientRect, b: &ClientRect) -> bool {
    a.left > b.right || b.left > a.right
}

/// Derive one representative rect from a reference's fragment rects.
///
/// Priority order:
/// 1. Exactly two horizontally disjoint fragments with a known pointer: the
///    fragment whose padded bounds contain the pointer; neither means the
///    fallback rect. This resolves which line fragment of a wrapped reference
///    the pointer is hovering.
/// 2. Two or more fragments otherwise: merge along the placement's main axis.
/// 3. Fewer than two fragments: the fallback rect, unconditionally.
///
/// Never fails and never mutates its inputs; missing fragment data always
/// degrades to the fallback so positioning never blocks on measurement edge
/// cases.
pub fn resolve_inline_rect(
    placement: Placement,
    fallback: ClientRect,
    fragments: &[ClientRect],
    pointer: Option<Point>,
    padding: &SideOffsets,
) -> ClientRect {
    if fragments.len() == 2
        && horizontally_disjoint(&fragments[0], &fragments[1])
        && let Some(point) = pointer
    {
        return fragments
            .iter()
            .find(|rect| contains_point(rect, point, padding))
            .copied()
            .unwrap_or(fallback);
    }

    if fragments.len() >= 2 {
        return merge_fragments(placement, fragments);
    }

    fallback
}

fn merge_fragments(placement: Placement, fragments: &[ClientRect]) -> ClientRect {
    if placement.main_axis() == Axis::X {
        let first = fragments[0];
        let last = fragments[fragments.len() - 1];
        let is_top = placement.side() == Side::Top;

        // Anchor the horizontal edges to the visually leading fragment in the
        // direction the content reads.
        let top = first.top;
        let bottom = last.bottom;
        let left = if is_top { first.left } else { last.left };
        let right = if is_top { first.right } else { last.right };
        return ClientRect::from_edges(top, right, bottom, left);
    }

    let is_left_side = placement.side() == Side::Left;
    let min_left = min_of(fragments.iter().map(|rect| rect.left));
    let max_right = max_of(fragments.iter().map(|rect| rect.right));
    let measured: SmallVec<[&ClientRect; 4]> = fragments
        .iter()
        .filter(|rect| {
            if is_left_side {
                rect.left == min_left
            } else {
                rect.right == max_right
            }
        })
        .collect();

    // `measured` is non-empty: some fragment attains the min/max edge.
    let top = measured[0].top;
    let bottom = measured[measured.len() - 1].bottom;
    ClientRect::from_edges(top, max_right, bottom, min_left)
}

/// Options for the [`Inline`] middleware.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InlineOptions {
    /// Viewport-relative pointer coordinate used to choose a fragment.
    pub pointer: Option<Point>,
    /// Padding applied to the fragment containment test.
    pub padding: Padding,
}

impl Default for InlineOptions {
    fn default() -> Self {
        Self {
            pointer: None,
            padding: Padding::Uniform(DEFAULT_INLINE_PADDING),
        }
    }
}

/// Middleware that repositions against a multi-fragment inline reference.
///
/// Resolves the reference's fragment rects into one representative rect and
/// resets the pipeline with it as the reference rect. Requests at most one
/// reset per positioning call, marked under its data key, so the pipeline
/// terminates.
#[derive(Clone, Copy, Debug, Default)]
pub struct Inline {
    options: InlineOptions,
}

impl Inline {
    /// Build the middleware with the given options.
    pub fn new(options: InlineOptions) -> Self {
        Self { options }
    }

    /// Build the middleware steered by a pointer coordinate.
    pub fn at_pointer(pointer: Point) -> Self {
        Self {
            options: InlineOptions {
                pointer: Some(pointer),
                ..InlineOptions::default()
            },
        }
    }

    /// The options this middleware was built with.
    pub fn options(&self) -> &InlineOptions {
        &self.options
    }
}

impl<P: Platform> Middleware<P> for Inline {
    fn name(&self) -> &str {
        "inline"
    }

    fn run(&self, state: MiddlewareState<'_, P>) -> PerchResult<MiddlewareReturn> {
        // At most one refinement per call; the marker survives resets.
        if state
            .middleware_data
            .get("inline")
            .and_then(|data| data.get("refined"))
            .is_some()
        {
            return Ok(MiddlewareReturn::default());
        }

        let padding = self.options.padding.normalize();
        let reference = state.rects.reference;

        let offset_parent = state.platform.offset_parent(state.elements.floating)?;
        let converted = state.platform.offset_rect_to_viewport(
            reference,
            offset_parent.as_ref(),
            state.strategy,
        )?;
        let fragments = state.platform.client_rects(state.elements.reference)?;

        let resolved_viewport = resolve_inline_rect(
            state.placement,
            converted.client_rect(),
            &fragments,
            self.options.pointer,
            &padding,
        )
        .rect();

        // Fragment rects are viewport-relative, element rects are not. The
        // viewport conversion is a translation; measure it on the reference
        // rect and map the resolved rect back so the provided rects stay in
        // the element-rects space.
        let resolved = Rect {
            x: resolved_viewport.x - (converted.x - reference.x),
            y: resolved_viewport.y - (converted.y - reference.y),
            width: resolved_viewport.width,
            height: resolved_viewport.height,
        };

        if resolved == reference {
            return Ok(MiddlewareReturn::default());
        }

        Ok(MiddlewareReturn {
            data: Some(serde_json::json!({ "refined": true })),
            reset: Some(Reset::With(ResetOverrides {
                placement: None,
                rects: Some(ResetRects::Provided(ElementRects {
                    reference: resolved,
                    floating: state.rects.floating,
                })),
            })),
            ..MiddlewareReturn::default()
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/middleware/inline.rs"]
mod tests;
