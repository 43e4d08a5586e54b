//! Value types shared across the crate: geometry, placements, errors.

pub mod error;
pub mod geometry;
pub mod placement;
