//! Sides, alignments, placements and the positioning strategy.

use std::fmt;

/// One side of the reference element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Side {
    /// Above the reference.
    Top,
    /// To the right of the reference.
    Right,
    /// Below the reference.
    Bottom,
    /// To the left of the reference.
    Left,
}

/// Cross-axis alignment of a placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    /// Align with the leading edge of the reference.
    Start,
    /// Align with the trailing edge of the reference.
    End,
}

/// A geometric axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

/// Where the floating element sits relative to the reference: a side plus an
/// optional alignment. Exactly 12 combinations, serialized kebab-case
/// (`"top-start"`, `"bottom"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    /// Centered above.
    Top,
    /// Above, aligned to the start edge.
    TopStart,
    /// Above, aligned to the end edge.
    TopEnd,
    /// Centered to the right.
    Right,
    /// Right, aligned to the start edge.
    RightStart,
    /// Right, aligned to the end edge.
    RightEnd,
    /// Centered below.
    Bottom,
    /// Below, aligned to the start edge.
    BottomStart,
    /// Below, aligned to the end edge.
    BottomEnd,
    /// Centered to the left.
    Left,
    /// Left, aligned to the start edge.
    LeftStart,
    /// Left, aligned to the end edge.
    LeftEnd,
}

impl Default for Placement {
    fn default() -> Self {
        Self::Bottom
    }
}

impl Placement {
    /// All 12 placements, sides in top/right/bottom/left order.
    pub const ALL: [Self; 12] = [
        Self::Top,
        Self::TopStart,
        Self::TopEnd,
        Self::Right,
        Self::RightStart,
        Self::RightEnd,
        Self::Bottom,
        Self::BottomStart,
        Self::BottomEnd,
        Self::Left,
        Self::LeftStart,
        Self::LeftEnd,
    ];

    /// Build a placement from its parts.
    pub fn new(side: Side, alignment: Option<Alignment>) -> Self {
        match (side, alignment) {
            (Side::Top, None) => Self::Top,
            (Side::Top, Some(Alignment::Start)) => Self::TopStart,
            (Side::Top, Some(Alignment::End)) => Self::TopEnd,
            (Side::Right, None) => Self::Right,
            (Side::Right, Some(Alignment::Start)) => Self::RightStart,
            (Side::Right, Some(Alignment::End)) => Self::RightEnd,
            (Side::Bottom, None) => Self::Bottom,
            (Side::Bottom, Some(Alignment::Start)) => Self::BottomStart,
            (Side::Bottom, Some(Alignment::End)) => Self::BottomEnd,
            (Side::Left, None) => Self::Left,
            (Side::Left, Some(Alignment::Start)) => Self::LeftStart,
            (Side::Left, Some(Alignment::End)) => Self::LeftEnd,
        }
    }

    /// The side component of this placement.
    pub fn side(self) -> Side {
        match self {
            Self::Top | Self::TopStart | Self::TopEnd => Side::Top,
            Self::Right | Self::RightStart | Self::RightEnd => Side::Right,
            Self::Bottom | Self::BottomStart | Self::BottomEnd => Side::Bottom,
            Self::Left | Self::LeftStart | Self::LeftEnd => Side::Left,
        }
    }

    /// The alignment component, if any.
    pub fn alignment(self) -> Option<Alignment> {
        match self {
            Self::Top | Self::Right | Self::Bottom | Self::Left => None,
            Self::TopStart | Self::RightStart | Self::BottomStart | Self::LeftStart => {
                Some(Alignment::Start)
            }
            Self::TopEnd | Self::RightEnd | Self::BottomEnd | Self::LeftEnd => Some(Alignment::End),
        }
    }

    /// The axis along which this placement primarily spans the reference's
    /// extended shape: [`Axis::X`] for top/bottom sides, [`Axis::Y`] for
    /// left/right sides.
    pub fn main_axis(self) -> Axis {
        match self.side() {
            Side::Top | Side::Bottom => Axis::X,
            Side::Left | Side::Right => Axis::Y,
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (side, alignment) = (self.side(), self.alignment());
        let side = match side {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        };
        match alignment {
            None => write!(f, "{side}"),
            Some(Alignment::Start) => write!(f, "{side}-start"),
            Some(Alignment::End) => write!(f, "{side}-end"),
        }
    }
}

/// The coordinate-space convention for output coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Offset-parent-relative positioning.
    #[default]
    Absolute,
    /// Viewport-relative positioning.
    Fixed,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/placement.rs"]
mod tests;
