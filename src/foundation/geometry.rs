//! Axis-aligned rectangle types and the padding model.
//!
//! All geometry is `f64` in a caller-defined coordinate space (viewport- or
//! offset-parent-relative). Rects are top-left anchored; zero-size rects are
//! valid and represent empty measurement.

/// Axis-aligned rectangle, top-left anchored.
///
/// `width` and `height` are non-negative for measured rects. Clipping
/// intersection may produce negative dimensions, which consumers must read as
/// "fully clipped / zero visible area", not as an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// The zero rect at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Create a rect from its top-left corner and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Derive the edge-based representation of this rect.
    pub fn client_rect(self) -> ClientRect {
        ClientRect::from_rect(self)
    }
}

impl From<Rect> for kurbo::Rect {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.x + rect.width, rect.y + rect.height)
    }
}

impl From<kurbo::Rect> for Rect {
    fn from(rect: kurbo::Rect) -> Self {
        Self {
            x: rect.x0,
            y: rect.y0,
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// A [`Rect`] together with its derived edges.
///
/// The redundant fields must satisfy `top = y`, `left = x`,
/// `right = x + width`, `bottom = y + height`. Construct via
/// [`ClientRect::from_rect`] (or [`Rect::client_rect`]) so the invariant holds;
/// mutating one representation without the other is a contract violation.
/// Edge-based math is the natural form at resolver boundaries.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClientRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
    /// Top edge, equal to `y`.
    pub top: f64,
    /// Right edge, equal to `x + width`.
    pub right: f64,
    /// Bottom edge, equal to `y + height`.
    pub bottom: f64,
    /// Left edge, equal to `x`.
    pub left: f64,
}

impl ClientRect {
    /// Derive a `ClientRect` from a [`Rect`].
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            top: rect.y,
            right: rect.x + rect.width,
            bottom: rect.y + rect.height,
            left: rect.x,
        }
    }

    /// Build a `ClientRect` directly from its four edges.
    pub fn from_edges(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
            top,
            right,
            bottom,
            left,
        }
    }

    /// Drop the derived edges, returning the plain [`Rect`].
    pub fn rect(self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Fully-resolved per-side offsets.
///
/// The only padding form the algorithms consume; also the shape of
/// per-side overflow amounts returned by [`crate::detect_overflow`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SideOffsets {
    /// Offset on the top side.
    pub top: f64,
    /// Offset on the right side.
    pub right: f64,
    /// Offset on the bottom side.
    pub bottom: f64,
    /// Offset on the left side.
    pub left: f64,
}

impl SideOffsets {
    /// Identical offset on all four sides.
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// Caller-facing padding: a uniform amount or a per-side partial record.
///
/// Missing sides of the per-side form default to 0. [`Padding::normalize`]
/// produces the [`SideOffsets`] form consumed by the algorithms.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Padding {
    /// The same padding on every side.
    Uniform(f64),
    /// Per-side padding; unspecified sides are 0.
    PerSide {
        /// Top padding.
        #[serde(default)]
        top: f64,
        /// Right padding.
        #[serde(default)]
        right: f64,
        /// Bottom padding.
        #[serde(default)]
        bottom: f64,
        /// Left padding.
        #[serde(default)]
        left: f64,
    },
}

impl Default for Padding {
    fn default() -> Self {
        Self::Uniform(0.0)
    }
}

impl Padding {
    /// Resolve to the full per-side form.
    pub fn normalize(self) -> SideOffsets {
        match self {
            Self::Uniform(value) => SideOffsets::uniform(value),
            Self::PerSide {
                top,
                right,
                bottom,
                left,
            } => SideOffsets {
                top,
                right,
                bottom,
                left,
            },
        }
    }
}

impl From<SideOffsets> for Padding {
    fn from(offsets: SideOffsets) -> Self {
        Self::PerSide {
            top: offsets.top,
            right: offsets.right,
            bottom: offsets.bottom,
            left: offsets.left,
        }
    }
}

/// Maximum of a non-empty sequence of values.
///
/// Callers guard non-emptiness; an empty input yields `NEG_INFINITY`.
pub(crate) fn max_of<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    values.into_iter().fold(f64::NEG_INFINITY, f64::max)
}

/// Minimum of a non-empty sequence of values.
///
/// Callers guard non-emptiness; an empty input yields `INFINITY`.
pub(crate) fn min_of<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    values.into_iter().fold(f64::INFINITY, f64::min)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geometry.rs"]
mod tests;
