//! Clipping-boundary resolution.
//!
//! Folds an ordered list of boundary rects (clipping ancestors plus a root
//! boundary) into the single maximal rect in which an element stays visible.
//! Generic over a [`ClippingEnvironment`] so any element-tree representation
//! can drive it; [`clipping_rect`] is a valid implementation of
//! [`crate::Platform::clipping_rect`].

use crate::foundation::geometry::{ClientRect, Rect, max_of, min_of};

/// Which edges clip the floating element.
#[derive(Clone, Debug, PartialEq)]
pub enum Boundary<E> {
    /// Resolve the element's clipping ancestors dynamically.
    ClippingAncestors,
    /// A single explicit boundary element.
    Element(E),
    /// An explicit ordered list of boundary elements.
    Elements(Vec<E>),
    /// An explicit boundary rect.
    Rect(Rect),
}

impl<E> Default for Boundary<E> {
    fn default() -> Self {
        Self::ClippingAncestors
    }
}

/// The outermost clip edge, appended after all other boundaries.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum RootBoundary {
    /// Clip at the viewport.
    #[default]
    Viewport,
    /// Clip at the whole document.
    Document,
    /// Clip at an explicit rect.
    Rect(Rect),
}

/// Element-tree queries the clipping resolver needs.
///
/// All queries are infallible measurements of an existing tree.
pub trait ClippingEnvironment {
    /// Opaque handle to an element in the tree.
    type Element: Clone;

    /// The element's parent, or `None` at the root.
    fn parent(&self, element: &Self::Element) -> Option<Self::Element>;

    /// Whether the element is a scrollable/overflow-clipping container.
    fn is_clipping_container(&self, element: &Self::Element) -> bool;

    /// Whether the element is the document body. Body is never a clip edge.
    fn is_document_body(&self, element: &Self::Element) -> bool;

    /// Whether `ancestor` geometrically contains `descendant`.
    fn contains(&self, ancestor: &Self::Element, descendant: &Self::Element) -> bool;

    /// Whether the element can escape ancestor clipping via fixed/absolute
    /// positioning. When it can, its offset parent is the clipping anchor.
    fn escapes_clipping(&self, element: &Self::Element) -> bool;

    /// The element's offset parent, if any.
    fn offset_parent(&self, element: &Self::Element) -> Option<Self::Element>;

    /// The element's content box: the border-box rect with the element's own
    /// border and scrollbar inset subtracted. Clipping happens at the content
    /// box, not the border box.
    fn content_box(&self, element: &Self::Element) -> ClientRect;

    /// The viewport rect.
    fn viewport_rect(&self) -> Rect;

    /// The document rect.
    fn document_rect(&self) -> Rect;
}

/// The ordered list of ancestors capable of clipping `element`.
///
/// The effective clipping anchor is the element itself, unless the element
/// escapes clipping, in which case the anchor is its offset parent (no offset
/// parent means nothing clips it short of the root boundary). The walk retains
/// overflow-clipping containers that contain the anchor, skipping the body.
pub fn clipping_ancestors<Env: ClippingEnvironment>(
    env: &Env,
    element: &Env::Element,
) -> Vec<Env::Element> {
    let anchor = if env.escapes_clipping(element) {
        match env.offset_parent(element) {
            Some(parent) => parent,
            None => return Vec::new(),
        }
    } else {
        element.clone()
    };

    let mut ancestors = Vec::new();
    let mut cursor = env.parent(element);
    while let Some(node) = cursor {
        if env.is_clipping_container(&node)
            && !env.is_document_body(&node)
            && env.contains(&node, &anchor)
        {
            ancestors.push(node.clone());
        }
        cursor = env.parent(&node);
    }
    ancestors
}

/// Intersect an ordered, non-empty list of boundary rects.
///
/// Left fold from the first rect: top/left take the max, right/bottom the min,
/// so the accumulator can only shrink or stay equal as boundaries fold in.
/// The result may have negative dimensions when boundaries do not overlap;
/// that is valid "fully clipped" output, not an error.
///
/// Precondition: `rects` holds at least one entry (callers always append the
/// root boundary). An empty input yields [`Rect::ZERO`].
pub fn intersect_client_rects(rects: &[ClientRect]) -> Rect {
    let mut iter = rects.iter();
    let Some(first) = iter.next() else {
        return Rect::ZERO;
    };

    let acc = iter.fold(*first, |acc, rect| {
        ClientRect::from_edges(
            max_of([acc.top, rect.top]),
            min_of([acc.right, rect.right]),
            min_of([acc.bottom, rect.bottom]),
            max_of([acc.left, rect.left]),
        )
    });

    Rect {
        x: acc.left,
        y: acc.top,
        width: acc.right - acc.left,
        height: acc.bottom - acc.top,
    }
}

fn boundary_rect<Env: ClippingEnvironment>(env: &Env, root: RootBoundary) -> ClientRect {
    match root {
        RootBoundary::Viewport => env.viewport_rect().client_rect(),
        RootBoundary::Document => env.document_rect().client_rect(),
        RootBoundary::Rect(rect) => rect.client_rect(),
    }
}

/// Maximum area in which `element` remains un-clipped.
///
/// `boundary` selects the clip edges: the element's resolved clipping
/// ancestors, or an explicit override. `root_boundary` is appended as the
/// final edge, so the fold always sees at least one rect.
pub fn clipping_rect<Env: ClippingEnvironment>(
    env: &Env,
    element: &Env::Element,
    boundary: &Boundary<Env::Element>,
    root_boundary: RootBoundary,
) -> Rect {
    let mut rects: Vec<ClientRect> = match boundary {
        Boundary::ClippingAncestors => clipping_ancestors(env, element)
            .iter()
            .map(|ancestor| env.content_box(ancestor))
            .collect(),
        Boundary::Element(el) => vec![env.content_box(el)],
        Boundary::Elements(els) => els.iter().map(|el| env.content_box(el)).collect(),
        Boundary::Rect(rect) => vec![rect.client_rect()],
    };
    rects.push(boundary_rect(env, root_boundary));

    intersect_client_rects(&rects)
}

#[cfg(test)]
#[path = "../tests/unit/clipping.rs"]
mod tests;
