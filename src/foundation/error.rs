/// Convenience result type used across typeline.
pub type TypelineResult<T> = Result<T, TypelineError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Timeline synthesis itself never fails on degenerate input; these variants surface at the
/// request boundary (parsing, validation, font loading).
#[derive(thiserror::Error, Debug)]
pub enum TypelineError {
    /// Invalid user-provided request or parameter data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Font metrics could not be loaded or queried.
    #[error("metrics error: {0}")]
    Metrics(String),

    /// A timeline or begin-expression graph is internally inconsistent.
    #[error("timeline error: {0}")]
    Timeline(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TypelineError {
    /// Build a [`TypelineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TypelineError::Metrics`] value.
    pub fn metrics(msg: impl Into<String>) -> Self {
        Self::Metrics(msg.into())
    }

    /// Build a [`TypelineError::Timeline`] value.
    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::Timeline(msg.into())
    }

    /// Build a [`TypelineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
