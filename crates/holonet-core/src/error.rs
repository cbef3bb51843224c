use thiserror::Error;

/// Core error types for Holonet catalog operations
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Resource type \"{0}\" not supported.")]
    UnsupportedKind(String),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Time parsing error: {0}")]
    TimeError(#[from] time::error::Parse),
}

impl CoreError {
    /// Create a new UnsupportedKind error
    pub fn unsupported_kind(kind: impl Into<String>) -> Self {
        Self::UnsupportedKind(kind.into())
    }
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
