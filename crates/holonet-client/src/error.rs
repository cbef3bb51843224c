use thiserror::Error;

/// Failures when fetching a collection from the upstream catalog.
///
/// There are no retries and no partial results: the first failing page
/// fetch aborts the whole collection fetch, since a partial catalog
/// would silently corrupt filter, sort, and pagination downstream.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The network call errored or the upstream returned a non-success status.
    #[error("upstream unavailable: {0}")]
    Unavailable(String),

    /// The response body could not be parsed into the expected page shape.
    #[error("upstream response malformed: {0}")]
    Malformed(String),
}

impl ClientError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}
