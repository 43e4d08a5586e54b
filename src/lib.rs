//! Perch computes the screen position of a floating element (tooltip,
//! popover, menu) relative to a reference element.
//!
//! The engine is a middleware pipeline over platform-measured rects:
//!
//! - Implement [`Platform`] for your environment (or reuse the resolvers in
//!   [`clipping`]).
//! - Call [`compute_position`] with the element handles, a [`Placement`] and
//!   an ordered middleware list.
//! - Middleware adjust the coordinates or reset the pipeline with refined
//!   rects; the final `{x, y, placement, middleware_data}` comes back to you.
//!
//! Everything is created fresh per call; nothing is cached across calls.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod clipping;
pub mod engine;
mod foundation;
pub mod middleware;
pub mod overflow;
pub mod platform;

pub use crate::foundation::error::{PerchError, PerchResult};
pub use crate::foundation::geometry::{ClientRect, Padding, Rect, SideOffsets};
pub use crate::foundation::placement::{Alignment, Axis, Placement, Side, Strategy};

pub use crate::clipping::{Boundary, ClippingEnvironment, RootBoundary};
pub use crate::engine::{
    ComputePositionConfig, ComputedPosition, Elements, MAX_RESET_PASSES, Middleware,
    MiddlewareData, MiddlewareReturn, MiddlewareState, Reset, ResetOverrides, ResetRects,
    compute_position,
};
pub use crate::middleware::inline::{
    DEFAULT_INLINE_PADDING, Inline, InlineOptions, resolve_inline_rect,
};
pub use crate::middleware::offset::{Offset, OffsetOptions};
pub use crate::overflow::{ElementContext, OverflowOptions, detect_overflow};
pub use crate::platform::{ElementRects, Platform};
