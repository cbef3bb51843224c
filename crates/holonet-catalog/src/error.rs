use thiserror::Error;

use holonet_client::ClientError;
use holonet_core::ResourceKind;

/// Errors surfaced by the resolution and transform service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The caller supplied an unusable parameter (e.g. non-positive size).
    #[error("{0}")]
    InvalidArgument(String),

    /// No record in the collection carries the requested identifier.
    #[error("{kind}/{id} not found")]
    NotFound { kind: ResourceKind, id: i64 },

    /// The upstream fetch failed; propagated unmodified from the client.
    #[error(transparent)]
    Upstream(#[from] ClientError),
}

impl CatalogError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
