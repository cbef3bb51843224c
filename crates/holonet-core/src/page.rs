use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Pagination metadata attached to every list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl PageMeta {
    /// Build the metadata for a page request.
    ///
    /// `total_pages` is the ceiling of `total_items / per_page`, computed
    /// from the full (pre-slice) item count. `per_page` must be non-zero;
    /// the service layer rejects zero sizes before this is reached.
    pub fn new(current_page: usize, per_page: usize, total_items: usize) -> Self {
        Self {
            current_page,
            per_page,
            total_items,
            total_pages: total_items.div_ceil(per_page),
        }
    }
}

/// The `{data, meta}` wrapper returned for list queries.
///
/// Transient per-request value: built from a filtered slice of the
/// fetched collection, serialized, discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEnvelope {
    pub data: Vec<Value>,
    pub meta: PageMeta,
}

impl PageEnvelope {
    pub fn new(data: Vec<Value>, meta: PageMeta) -> Self {
        Self { data, meta }
    }
}
