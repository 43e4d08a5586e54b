//! Crate error type and result alias.

/// Crate-wide result alias.
pub type PerchResult<T> = Result<T, PerchError>;

/// Errors surfaced by the positioning engine.
#[derive(thiserror::Error, Debug)]
pub enum PerchError {
    /// Invalid caller input (malformed config, contract violations).
    #[error("validation error: {0}")]
    Validation(String),

    /// A platform capability call failed.
    #[error("platform error: {0}")]
    Platform(String),

    /// A middleware kept resetting the pipeline for the same state until the
    /// reset ceiling was reached. Fatal for this positioning call.
    #[error("middleware '{middleware}' caused an infinite reset loop after {passes} passes")]
    InfiniteLoop {
        /// Name of the middleware that requested the reset past the ceiling.
        middleware: String,
        /// Number of reset passes the engine ran before giving up.
        passes: usize,
    },

    /// Any other error bubbled through a platform implementation.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PerchError {
    /// Build a [`PerchError::Validation`] from a message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PerchError::Platform`] from a message.
    pub fn platform(msg: impl Into<String>) -> Self {
        Self::Platform(msg.into())
    }
}
