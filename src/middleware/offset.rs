//! Displacing the floating element relative to its placed position.

use crate::engine::{Middleware, MiddlewareReturn, MiddlewareState};
use crate::foundation::error::PerchResult;
use crate::foundation::placement::{Alignment, Axis, Side};
use crate::platform::Platform;

/// Options for the [`Offset`] middleware.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OffsetOptions {
    /// Distance along the placement's side axis, positive away from the
    /// reference.
    pub main_axis: f64,
    /// Skidding along the perpendicular axis; `end`-aligned placements flip
    /// its sign so positive always skids toward the alignment edge.
    pub cross_axis: f64,
}

/// Middleware that offsets the floating element from its base position.
///
/// Pure positional deltas; never resets.
#[derive(Clone, Copy, Debug, Default)]
pub struct Offset {
    options: OffsetOptions,
}

impl Offset {
    /// Build the middleware with the given options.
    pub fn new(options: OffsetOptions) -> Self {
        Self { options }
    }

    /// Offset along the main axis only.
    pub fn distance(main_axis: f64) -> Self {
        Self {
            options: OffsetOptions {
                main_axis,
                cross_axis: 0.0,
            },
        }
    }

    /// The options this middleware was built with.
    pub fn options(&self) -> &OffsetOptions {
        &self.options
    }
}

impl<P: Platform> Middleware<P> for Offset {
    fn name(&self) -> &str {
        "offset"
    }

    fn run(&self, state: MiddlewareState<'_, P>) -> PerchResult<MiddlewareReturn> {
        let side = state.placement.side();
        let main_sign = match side {
            Side::Top | Side::Left => -1.0,
            Side::Bottom | Side::Right => 1.0,
        };
        let cross_sign = match state.placement.alignment() {
            Some(Alignment::End) => -1.0,
            _ => 1.0,
        };

        let main = self.options.main_axis * main_sign;
        let cross = self.options.cross_axis * cross_sign;
        let (dx, dy) = match state.placement.main_axis() {
            // Top/bottom placements push vertically, skid horizontally.
            Axis::X => (cross, main),
            Axis::Y => (main, cross),
        };

        Ok(MiddlewareReturn {
            x: Some(dx),
            y: Some(dy),
            data: Some(serde_json::json!({ "x": dx, "y": dy })),
            ..MiddlewareReturn::default()
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/middleware/offset.rs"]
mod tests;
