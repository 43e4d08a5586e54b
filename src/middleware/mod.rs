//! Built-in middleware.

pub mod inline;
pub mod offset;
