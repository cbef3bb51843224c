use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use holonet_catalog::QueryParams;
use holonet_core::{CoreError, PageEnvelope, ResourceKind};

use crate::base_url::resolve_base_address;
use crate::error::ApiError;
use crate::server::AppState;

/// The list-query surface as it arrives on the wire.
///
/// `page`, `size`, and `film_id` stay strings here so that non-integer
/// values produce the gateway's own 400 message instead of the
/// extractor's rejection.
#[derive(Debug, Default, Deserialize)]
pub struct RawListQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub filter: Option<String>,
    pub name: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    pub size: Option<String>,
    pub film_id: Option<String>,
}

impl RawListQuery {
    fn into_params(self) -> Result<QueryParams, ApiError> {
        let page = parse_int(self.page, "Page and size must be integers")?;
        let size = parse_int(self.size, "Page and size must be integers")?;
        let film_id = parse_int(self.film_id, "film_id must be an integer")?;
        // `filter` wins over its `name` alias when both are present.
        let filter = self.filter.filter(|s| !s.is_empty()).or(self.name);
        Ok(QueryParams {
            filter,
            sort: self.sort,
            page,
            size,
            film_id,
        })
    }
}

fn parse_int(raw: Option<String>, message: &str) -> Result<Option<i64>, ApiError> {
    match raw {
        None => Ok(None),
        Some(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ApiError::bad_request(message)),
    }
}

fn parse_kind(raw: &str) -> Result<ResourceKind, ApiError> {
    raw.parse()
        .map_err(|e: CoreError| ApiError::bad_request(e.to_string()))
}

/// `GET /` — list query with the kind taken from `?type=`, default people.
pub async fn query_root(
    State(state): State<AppState>,
    Query(raw): Query<RawListQuery>,
    headers: HeaderMap,
) -> Result<Json<PageEnvelope>, ApiError> {
    let kind = match raw.kind.as_deref() {
        Some(k) => parse_kind(k)?,
        None => ResourceKind::People,
    };
    run_query(&state, kind, raw, &headers).await
}

/// `GET /{kind}` — list query with the kind taken from the path.
pub async fn query_kind(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(raw): Query<RawListQuery>,
    headers: HeaderMap,
) -> Result<Json<PageEnvelope>, ApiError> {
    let kind = parse_kind(&kind)?;
    run_query(&state, kind, raw, &headers).await
}

async fn run_query(
    state: &AppState,
    kind: ResourceKind,
    raw: RawListQuery,
    headers: &HeaderMap,
) -> Result<Json<PageEnvelope>, ApiError> {
    let params = raw.into_params()?;
    let base = resolve_base_address(headers, state.rewrite_base.as_deref());
    let envelope = state.service.query(kind, &params, &base).await?;
    Ok(Json(envelope))
}

/// `GET /{kind}/{id}` — single-record lookup.
pub async fn get_record(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let kind = parse_kind(&kind)?;
    let id: i64 = id
        .trim()
        .parse()
        .map_err(|_| ApiError::bad_request("ID must be an integer"))?;

    let base = resolve_base_address(&headers, state.rewrite_base.as_deref());
    let record = state.service.get_by_id(kind, id, &base).await?;
    Ok(Json(record))
}

#[derive(Serialize)]
pub struct HealthResponse<'a> {
    status: &'a str,
}

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse { status: "ok" }))
}

/// Fallback for unroutable paths (three-plus segments, non-GET methods).
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
