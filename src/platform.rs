//! The measurement capability set the engine is injected with.
//!
//! The engine never touches a concrete environment (DOM-like or otherwise); it
//! asks a [`Platform`] for every rect and coordinate-space conversion. Required
//! methods must be implemented; optional methods carry defaults that degrade
//! functionality gracefully so the engine runs against minimal adapters.

use crate::clipping::{Boundary, RootBoundary};
use crate::foundation::error::PerchResult;
use crate::foundation::geometry::{ClientRect, Rect};
use crate::foundation::placement::Strategy;

/// The reference and floating rects in a shared coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementRects {
    /// Rect of the reference (anchor) element.
    pub reference: Rect,
    /// Rect of the floating element.
    pub floating: Rect,
}

/// Measurement capabilities supplied by the embedding environment.
///
/// Implementations are read-only queries and must be safe to call from
/// independent positioning calls concurrently. Calls issued by the engine are
/// consumed strictly in issue order; a call that never returns hangs the
/// pipeline by accepted contract.
pub trait Platform {
    /// Opaque handle to an element in the environment.
    type Element: Clone;

    /// Measure the reference and floating rects in a shared coordinate space
    /// for the given positioning strategy. Required.
    fn element_rects(
        &self,
        reference: &Self::Element,
        floating: &Self::Element,
        strategy: Strategy,
    ) -> PerchResult<ElementRects>;

    /// Compute the maximum area in which `element` remains un-clipped.
    /// Required by boundary-aware middleware; [`crate::clipping::clipping_rect`]
    /// is one valid implementation.
    fn clipping_rect(
        &self,
        element: &Self::Element,
        boundary: &Boundary<Self::Element>,
        root_boundary: &RootBoundary,
    ) -> PerchResult<Rect>;

    /// The element's offset parent, if the environment has that notion.
    ///
    /// The default means "no offset-parent-relative conversion needed".
    fn offset_parent(&self, _element: &Self::Element) -> PerchResult<Option<Self::Element>> {
        Ok(None)
    }

    /// The fragment rects composing the element's rendered shape (one per
    /// line box for wrapped inline content).
    ///
    /// The default (empty) means "treat as a single-rect reference", which
    /// sends the inline resolver down its fallback path.
    fn client_rects(&self, _element: &Self::Element) -> PerchResult<Vec<ClientRect>> {
        Ok(Vec::new())
    }

    /// Convert an offset-parent-relative rect into viewport space.
    ///
    /// The default returns the rect unchanged, meaning the rect is already
    /// viewport-relative.
    fn offset_rect_to_viewport(
        &self,
        rect: Rect,
        _offset_parent: Option<&Self::Element>,
        _strategy: Strategy,
    ) -> PerchResult<Rect> {
        Ok(rect)
    }
}
