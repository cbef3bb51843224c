use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use holonet_catalog::CatalogError;

/// High-level API errors mapped to HTTP responses with `{"error": ...}` bodies.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Not Found")]
    NotFound,
    #[error("{0}")]
    BadGateway(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidArgument(msg) => ApiError::BadRequest(msg),
            CatalogError::NotFound { .. } => ApiError::NotFound,
            // Upstream faults surface as 502 with the raw message; there is
            // no redaction between the client and the response body.
            CatalogError::Upstream(e) => ApiError::BadGateway(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::BadRequest(msg) => {
                tracing::debug!(status = %status, error = %msg, "request rejected")
            }
            ApiError::NotFound => {}
            ApiError::BadGateway(msg) | ApiError::Internal(msg) => {
                tracing::warn!(status = %status, error = %msg, "request failed")
            }
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holonet_client::ClientError;
    use holonet_core::ResourceKind;

    #[test]
    fn catalog_errors_map_to_expected_statuses() {
        let err: ApiError = CatalogError::invalid_argument("size must be a positive integer").into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err: ApiError = CatalogError::NotFound {
            kind: ResourceKind::People,
            id: 9,
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Not Found");

        let err: ApiError = CatalogError::Upstream(ClientError::unavailable("boom")).into();
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert!(err.to_string().contains("boom"));
    }
}
