//! Upstream catalog client.
//!
//! The upstream paginates every collection with a `next` cursor link, so
//! fetching a collection means walking the cursor chain until it runs
//! out. Page fetches within one collection are sequential by necessity:
//! each page's address comes from the previous page's `next` field.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use holonet_core::ResourceKind;

use crate::error::ClientError;

/// Public base address of the upstream catalog.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

/// Default per-request timeout for upstream page fetches.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches one complete logical collection from the upstream catalog.
///
/// Object-safe so the service layer can be handed a test double.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch all records of `kind`, flattening upstream pagination.
    ///
    /// Upstream ordering is preserved within and across pages.
    async fn fetch_collection(&self, kind: ResourceKind) -> Result<Vec<Value>, ClientError>;
}

/// Shared handle to a [`CatalogClient`] implementation.
pub type DynCatalogClient = Arc<dyn CatalogClient>;

/// One page of an upstream collection: `{results, next}`.
#[derive(Debug, Deserialize)]
struct CollectionPage {
    results: Vec<Value>,
    next: Option<String>,
}

/// `reqwest`-backed [`CatalogClient`] against the SWAPI wire protocol.
pub struct SwapiClient {
    base_url: String,
    http: reqwest::Client,
}

impl SwapiClient {
    /// Build a client against `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::unavailable(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// The base address this client fetches from.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_page(&self, url: &str) -> Result<CollectionPage, ClientError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::unavailable(format!("GET {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::unavailable(format!(
                "GET {url} returned status {status}"
            )));
        }

        response
            .json::<CollectionPage>()
            .await
            .map_err(|e| ClientError::malformed(format!("GET {url}: {e}")))
    }
}

#[async_trait]
impl CatalogClient for SwapiClient {
    async fn fetch_collection(&self, kind: ResourceKind) -> Result<Vec<Value>, ClientError> {
        let mut records = Vec::new();
        let mut pages = 0usize;
        let mut next = Some(format!("{}/{}/", self.base_url, kind.collection_path()));

        while let Some(url) = next {
            debug!(kind = %kind, url = %url, "fetching catalog page");
            let page = self.fetch_page(&url).await?;
            records.extend(page.results);
            next = page.next;
            pages += 1;
        }

        debug!(kind = %kind, pages, records = records.len(), "collection fetched");
        Ok(records)
    }
}
