//! Resolution and transform service.
//!
//! Every operation re-fetches the complete backing collection from the
//! injected [`CatalogClient`] and recomputes from scratch; nothing is
//! cached between requests. List queries run the pipeline in a fixed
//! order: filter, sort, paginate, rewrite.

use std::cmp::Ordering;

use serde_json::Value;
use tracing::debug;

use holonet_client::DynCatalogClient;
use holonet_core::{rewrite_urls, PageEnvelope, PageMeta, ResourceKind};

use crate::error::CatalogError;

/// Pagination limits for list queries.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Page size when the caller does not supply one.
    pub default_page_size: usize,
    /// Requested sizes above this are clamped down, not rejected.
    pub max_page_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}

/// Parameters of a list query, already parsed by the router.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    /// Case-insensitive substring match against the kind's designated field.
    pub filter: Option<String>,
    /// Field to stable-sort ascending by, if present and comparable.
    pub sort: Option<String>,
    /// 1-based page number; values below 1 are clamped to 1.
    pub page: Option<i64>,
    /// Page size; `None` falls back to the configured default.
    pub size: Option<i64>,
    /// Keep only records referencing this film.
    pub film_id: Option<i64>,
}

pub struct CatalogService {
    client: DynCatalogClient,
    upstream_base: String,
    config: CatalogConfig,
}

impl CatalogService {
    /// Build a service around an injected client.
    ///
    /// `upstream_base` is the address prefix that the rewrite step
    /// replaces; it must match the base the client fetches from.
    pub fn new(client: DynCatalogClient, upstream_base: impl Into<String>, config: CatalogConfig) -> Self {
        Self {
            client,
            upstream_base: upstream_base.into(),
            config,
        }
    }

    /// Look up a single record by its trailing numeric identifier.
    ///
    /// Linear scan over the freshly fetched collection; the record's
    /// `url` is its identity, so a match is `url` ending in `/<id>/`.
    pub async fn get_by_id(
        &self,
        kind: ResourceKind,
        id: i64,
        base: &str,
    ) -> Result<Value, CatalogError> {
        let records = self.client.fetch_collection(kind).await?;
        let suffix = format!("/{id}/");

        let mut record = records
            .into_iter()
            .find(|r| record_url(r).is_some_and(|u| u.ends_with(&suffix)))
            .ok_or(CatalogError::NotFound { kind, id })?;

        rewrite_urls(&mut record, &self.upstream_base, base);
        Ok(record)
    }

    /// Run the filter → sort → paginate → rewrite pipeline over `kind`.
    pub async fn query(
        &self,
        kind: ResourceKind,
        params: &QueryParams,
        base: &str,
    ) -> Result<PageEnvelope, CatalogError> {
        let size = params.size.unwrap_or(self.config.default_page_size as i64);
        if size <= 0 {
            return Err(CatalogError::invalid_argument(
                "size must be a positive integer",
            ));
        }
        let size = (size as usize).min(self.config.max_page_size);
        let page = params.page.unwrap_or(1).max(1) as usize;

        let mut records = self.client.fetch_collection(kind).await?;
        let fetched = records.len();

        if let Some(term) = params.filter.as_deref().filter(|t| !t.is_empty()) {
            let needle = term.to_lowercase();
            let field = kind.filter_field();
            records.retain(|r| {
                r.get(field)
                    .and_then(Value::as_str)
                    .is_some_and(|v| v.to_lowercase().contains(&needle))
            });
        }

        if let Some(film_id) = params.film_id {
            retain_in_film(&mut records, kind, film_id);
        }

        if let Some(key) = params.sort.as_deref().filter(|k| !k.is_empty()) {
            sort_records(&mut records, key);
        }

        let total_items = records.len();
        debug!(
            kind = %kind,
            fetched,
            matched = total_items,
            page,
            size,
            "query pipeline applied"
        );

        let meta = PageMeta::new(page, size, total_items);
        let data = paginate(records, page, size);

        let mut envelope = PageEnvelope::new(data, meta);
        for record in &mut envelope.data {
            rewrite_urls(record, &self.upstream_base, base);
        }
        Ok(envelope)
    }
}

fn record_url(record: &Value) -> Option<&str> {
    record.get("url").and_then(Value::as_str)
}

/// Keep only records that reference film `film_id`.
///
/// For the Films kind the record's own `url` is matched; for everything
/// else membership in the `films` cross-reference list is.
fn retain_in_film(records: &mut Vec<Value>, kind: ResourceKind, film_id: i64) {
    let suffix = format!("/films/{film_id}/");
    records.retain(|r| match kind {
        ResourceKind::Films => record_url(r).is_some_and(|u| u.ends_with(&suffix)),
        _ => r
            .get("films")
            .and_then(Value::as_array)
            .is_some_and(|films| {
                films
                    .iter()
                    .filter_map(Value::as_str)
                    .any(|u| u.ends_with(&suffix))
            }),
    });
}

/// Slice out page `page` (1-based) of `size` records.
///
/// No upper clamp on `page`: an out-of-range page is an empty slice.
fn paginate(records: Vec<Value>, page: usize, size: usize) -> Vec<Value> {
    let Some(start) = (page - 1).checked_mul(size) else {
        return Vec::new();
    };
    records.into_iter().skip(start).take(size).collect()
}

/// Sort key classes; values compare only within one class.
#[derive(Debug, PartialEq)]
enum SortKey {
    Str(String),
    Num(f64),
    Bool(bool),
}

impl SortKey {
    fn of(value: Option<&Value>) -> Option<Self> {
        match value {
            // A record missing the field sorts as the empty string.
            None => Some(SortKey::Str(String::new())),
            Some(Value::String(s)) => Some(SortKey::Str(s.clone())),
            Some(Value::Number(n)) => n.as_f64().map(SortKey::Num),
            Some(Value::Bool(b)) => Some(SortKey::Bool(*b)),
            Some(_) => None,
        }
    }

    fn same_class(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (SortKey::Str(_), SortKey::Str(_))
                | (SortKey::Num(_), SortKey::Num(_))
                | (SortKey::Bool(_), SortKey::Bool(_))
        )
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Str(a), SortKey::Str(b)) => a.cmp(b),
            (SortKey::Num(a), SortKey::Num(b)) => a.total_cmp(b),
            (SortKey::Bool(a), SortKey::Bool(b)) => a.cmp(b),
            // Guarded by the comparability check before sorting starts.
            _ => Ordering::Equal,
        }
    }
}

/// Stable-sort ascending by `key`, fail-soft.
///
/// Sorting is silently skipped when the first record lacks the field,
/// when any value is a null/array/object, or when values span more than
/// one type class; in all of those cases the original upstream order is
/// preserved. This mirrors the filter pipeline's contract: a bad sort
/// key degrades the response, it never fails it.
fn sort_records(records: &mut [Value], key: &str) {
    let Some(first) = records.first() else {
        return;
    };
    if first.get(key).is_none() {
        return;
    }

    let mut keys = Vec::with_capacity(records.len());
    for record in records.iter() {
        match SortKey::of(record.get(key)) {
            Some(k) => keys.push(k),
            None => return,
        }
    }
    if keys.windows(2).any(|pair| !pair[0].same_class(&pair[1])) {
        return;
    }

    let mut pairs: Vec<(SortKey, Value)> = keys
        .into_iter()
        .zip(records.iter_mut().map(Value::take))
        .collect();
    pairs.sort_by(|a, b| a.0.compare(&b.0));
    for (slot, (_, value)) in records.iter_mut().zip(pairs) {
        *slot = value;
    }
}
