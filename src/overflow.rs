//! Overflow detection against a clipping boundary.
//!
//! The bridge between boundary-aware middleware and the clipping resolver:
//! compares an element's rect with the clipping rect reported by the platform
//! and returns per-side overflow amounts.

use crate::clipping::{Boundary, RootBoundary};
use crate::engine::MiddlewareState;
use crate::foundation::error::PerchResult;
use crate::foundation::geometry::{Padding, Rect, SideOffsets};
use crate::platform::Platform;

/// Which element's rect is measured against the boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ElementContext {
    /// Measure the floating element.
    #[default]
    Floating,
    /// Measure the reference element.
    Reference,
}

impl ElementContext {
    fn flipped(self) -> Self {
        match self {
            Self::Floating => Self::Reference,
            Self::Reference => Self::Floating,
        }
    }
}

/// Options for [`detect_overflow`].
#[derive(Clone, Debug)]
pub struct OverflowOptions<E> {
    /// Clip edges to measure against. Default: the clipping ancestors.
    pub boundary: Boundary<E>,
    /// Outermost clip edge. Default: the viewport.
    pub root_boundary: RootBoundary,
    /// Whose rect is measured. Default: the floating element.
    pub element_context: ElementContext,
    /// Resolve the boundary of the opposite element instead.
    pub alt_boundary: bool,
    /// Virtually inflate the measured rect on each side.
    pub padding: Padding,
}

impl<E> Default for OverflowOptions<E> {
    fn default() -> Self {
        Self {
            boundary: Boundary::ClippingAncestors,
            root_boundary: RootBoundary::Viewport,
            element_context: ElementContext::default(),
            alt_boundary: false,
            padding: Padding::default(),
        }
    }
}

/// How much the configured element overflows the clipping boundary on each
/// side. Positive values overflow; zero or negative values are within bounds.
pub fn detect_overflow<P: Platform>(
    state: &MiddlewareState<'_, P>,
    options: &OverflowOptions<P::Element>,
) -> PerchResult<SideOffsets> {
    let padding = options.padding.normalize();

    let boundary_context = if options.alt_boundary {
        options.element_context.flipped()
    } else {
        options.element_context
    };
    let boundary_element = match boundary_context {
        ElementContext::Floating => state.elements.floating,
        ElementContext::Reference => state.elements.reference,
    };
    let clipping = state
        .platform
        .clipping_rect(boundary_element, &options.boundary, &options.root_boundary)?
        .client_rect();

    let rect = match options.element_context {
        ElementContext::Floating => Rect {
            x: state.x,
            y: state.y,
            width: state.rects.floating.width,
            height: state.rects.floating.height,
        },
        ElementContext::Reference => state.rects.reference,
    };
    let offset_parent = state.platform.offset_parent(state.elements.floating)?;
    let element = state
        .platform
        .offset_rect_to_viewport(rect, offset_parent.as_ref(), state.strategy)?
        .client_rect();

    Ok(SideOffsets {
        top: clipping.top - element.top + padding.top,
        right: element.right - clipping.right + padding.right,
        bottom: element.bottom - clipping.bottom + padding.bottom,
        left: clipping.left - element.left + padding.left,
    })
}

#[cfg(test)]
#[path = "../tests/unit/overflow.rs"]
mod tests;
