/// Convenience result type used across the crate.
pub type CoverflowResult<T> = Result<T, CoverflowError>;

/// Error taxonomy for the configuration boundary.
///
/// The per-frame path (controller advance, field evaluation) is total and
/// never produces one of these.
#[derive(thiserror::Error, Debug)]
pub enum CoverflowError {
    /// Invalid user-provided configuration or timing data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoverflowError {
    /// Build a [`CoverflowError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CoverflowError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
