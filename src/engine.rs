//! The positioning pipeline engine.
//!
//! [`compute_position`] threads an accumulating state (coordinates, rects,
//! per-middleware data) through an ordered middleware list. Middleware return
//! positional deltas, auxiliary data, or a reset instruction; a reset
//! recomputes the element rects and restarts the whole pipeline from the
//! first middleware, bounded by [`MAX_RESET_PASSES`].

use std::collections::BTreeMap;

use crate::foundation::error::{PerchError, PerchResult};
use crate::foundation::placement::{Alignment, Axis, Placement, Side, Strategy};
use crate::platform::{ElementRects, Platform};

/// Ceiling on pipeline reset passes for one positioning call.
///
/// A middleware must not request more than one reset for the same unchanged
/// state on consecutive passes; exceeding the ceiling fails the call with
/// [`PerchError::InfiniteLoop`]. Tunable: a conservative low-tens bound.
pub const MAX_RESET_PASSES: usize = 25;

/// The reference and floating element handles for one positioning call.
pub struct Elements<'a, E> {
    /// The anchor element the floating element is positioned against.
    pub reference: &'a E,
    /// The element being positioned.
    pub floating: &'a E,
}

impl<E> Clone for Elements<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Elements<'_, E> {}

/// Auxiliary output accumulated per middleware name.
///
/// Values merge shallowly across resets: a middleware re-running after a reset
/// extends its previous JSON object rather than discarding it.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct MiddlewareData(BTreeMap<String, serde_json::Value>);

impl MiddlewareData {
    /// Data recorded by the middleware with the given name, if any.
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.0.get(name)
    }

    /// Whether no middleware has recorded data yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn merge(&mut self, name: &str, value: serde_json::Value) {
        match (self.0.get_mut(name), value) {
            (Some(serde_json::Value::Object(existing)), serde_json::Value::Object(incoming)) => {
                existing.extend(incoming);
            }
            (_, value) => {
                let _ = self.0.insert(name.to_string(), value);
            }
        }
    }
}

/// The threaded pipeline state handed to each middleware invocation.
///
/// Owned by one [`compute_position`] call; never shared across calls.
pub struct MiddlewareState<'a, P: Platform> {
    /// Running x coordinate of the floating element.
    pub x: f64,
    /// Running y coordinate of the floating element.
    pub y: f64,
    /// Current placement (resets may have overridden the requested one).
    pub placement: Placement,
    /// The positioning strategy of this call.
    pub strategy: Strategy,
    /// Current reference/floating rects.
    pub rects: ElementRects,
    /// The element handles of this call.
    pub elements: Elements<'a, P::Element>,
    /// The injected platform.
    pub platform: &'a P,
    /// Data accumulated by middleware that already ran.
    pub middleware_data: &'a MiddlewareData,
}

/// How a middleware asks the engine to restart the pipeline.
#[derive(Clone, Debug, PartialEq)]
pub enum Reset {
    /// Recompute the element rects, keep the current placement.
    Rects,
    /// Restart with the given overrides; anything not overridden is kept.
    With(ResetOverrides),
}

/// Partial state overrides applied before a reset pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResetOverrides {
    /// Replace the current placement.
    pub placement: Option<Placement>,
    /// How to obtain the rects for the next pass; `None` recomputes them.
    pub rects: Option<ResetRects>,
}

/// Rect handling for a reset pass.
#[derive(Clone, Debug, PartialEq)]
pub enum ResetRects {
    /// Measure fresh rects via the platform.
    Recompute,
    /// Use these rects verbatim (e.g. an inline-resolved reference rect).
    Provided(ElementRects),
}

/// A middleware's output for one invocation.
#[derive(Clone, Debug, Default)]
pub struct MiddlewareReturn {
    /// Delta added to the running x coordinate.
    pub x: Option<f64>,
    /// Delta added to the running y coordinate.
    pub y: Option<f64>,
    /// Auxiliary data merged under the middleware's name.
    pub data: Option<serde_json::Value>,
    /// Request to restart the pipeline.
    pub reset: Option<Reset>,
}

/// A named, ordered pipeline stage that reads and adjusts positioning state.
///
/// Middleware run strictly sequentially in list order; each depends on the
/// coordinate state left by its predecessor. A middleware must not assume it
/// runs only once per call: the engine re-invokes the whole list after a
/// reset.
pub trait Middleware<P: Platform> {
    /// Stable name keying this middleware's entry in [`MiddlewareData`].
    fn name(&self) -> &str;

    /// Run one pipeline pass over the current state.
    fn run(&self, state: MiddlewareState<'_, P>) -> PerchResult<MiddlewareReturn>;
}

/// Inputs of a positioning call beyond the element handles.
pub struct ComputePositionConfig<'a, P: Platform> {
    /// Requested placement. Default bottom.
    pub placement: Placement,
    /// Positioning strategy. Default absolute.
    pub strategy: Strategy,
    /// Ordered middleware pipeline. Default empty.
    pub middleware: &'a [&'a dyn Middleware<P>],
}

impl<P: Platform> Default for ComputePositionConfig<'_, P> {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            strategy: Strategy::default(),
            middleware: &[],
        }
    }
}

/// The final position of a floating element.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ComputedPosition {
    /// Final x coordinate.
    pub x: f64,
    /// Final y coordinate.
    pub y: f64,
    /// The placement the pipeline settled on.
    pub placement: Placement,
    /// The strategy of the call, echoed back.
    pub strategy: Strategy,
    /// Accumulated per-middleware data.
    pub middleware_data: MiddlewareData,
}

/// Base coordinates for a placement: side edges aligned, with a cross-axis
/// centering shift replaced by a start/end shift for aligned placements.
fn placement_coords(rects: &ElementRects, placement: Placement) -> (f64, f64) {
    let reference = rects.reference;
    let floating = rects.floating;

    let common_x = reference.x + reference.width / 2.0 - floating.width / 2.0;
    let common_y = reference.y + reference.height / 2.0 - floating.height / 2.0;

    let (mut x, mut y) = match placement.side() {
        Side::Top => (common_x, reference.y - floating.height),
        Side::Bottom => (common_x, reference.y + reference.height),
        Side::Right => (reference.x + reference.width, common_y),
        Side::Left => (reference.x - floating.width, common_y),
    };

    if let Some(alignment) = placement.alignment() {
        let shift = match placement.main_axis() {
            Axis::X => reference.width / 2.0 - floating.width / 2.0,
            Axis::Y => reference.height / 2.0 - floating.height / 2.0,
        };
        let delta = match alignment {
            Alignment::Start => -shift,
            Alignment::End => shift,
        };
        match placement.main_axis() {
            Axis::X => x += delta,
            Axis::Y => y += delta,
        }
    }

    (x, y)
}

/// Compute the position of a floating element relative to a reference element.
///
/// Runs the configured middleware pipeline over platform-measured rects and
/// returns the final coordinates, settled placement and accumulated
/// middleware data. Fails with [`PerchError::InfiniteLoop`] if resets exceed
/// [`MAX_RESET_PASSES`].
#[tracing::instrument(skip_all, fields(placement = %config.placement, strategy = ?config.strategy))]
pub fn compute_position<P: Platform>(
    platform: &P,
    reference: &P::Element,
    floating: &P::Element,
    config: &ComputePositionConfig<'_, P>,
) -> PerchResult<ComputedPosition> {
    let strategy = config.strategy;
    let mut placement = config.placement;
    let mut rects = platform.element_rects(reference, floating, strategy)?;
    let (mut x, mut y) = placement_coords(&rects, placement);
    let mut middleware_data = MiddlewareData::default();
    let elements = Elements {
        reference,
        floating,
    };

    let mut reset_count = 0usize;
    let mut index = 0usize;
    while index < config.middleware.len() {
        let middleware = config.middleware[index];
        let state = MiddlewareState {
            x,
            y,
            placement,
            strategy,
            rects,
            elements,
            platform,
            middleware_data: &middleware_data,
        };
        let ret = middleware.run(state)?;

        if let Some(dx) = ret.x {
            x += dx;
        }
        if let Some(dy) = ret.y {
            y += dy;
        }
        if let Some(data) = ret.data {
            middleware_data.merge(middleware.name(), data);
        }

        if let Some(reset) = ret.reset {
            if reset_count >= MAX_RESET_PASSES {
                return Err(PerchError::InfiniteLoop {
                    middleware: middleware.name().to_string(),
                    passes: reset_count,
                });
            }
            reset_count += 1;
            tracing::trace!(
                middleware = middleware.name(),
                pass = reset_count,
                "pipeline reset"
            );

            let provided = match reset {
                Reset::Rects => None,
                Reset::With(overrides) => {
                    if let Some(next) = overrides.placement {
                        placement = next;
                    }
                    match overrides.rects {
                        Some(ResetRects::Provided(rects)) => Some(rects),
                        Some(ResetRects::Recompute) | None => None,
                    }
                }
            };
            rects = match provided {
                Some(rects) => rects,
                None => platform.element_rects(reference, floating, strategy)?,
            };
            (x, y) = placement_coords(&rects, placement);
            index = 0;
            continue;
        }

        index += 1;
    }

    Ok(ComputedPosition {
        x,
        y,
        placement,
        strategy,
        middleware_data,
    })
}

#[cfg(test)]
#[path = "../tests/unit/engine.rs"]
mod tests;
