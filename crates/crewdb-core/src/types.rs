//! Domain types shared by the catalog and the query engine.

use serde::{Deserialize, Serialize};

/// A worker record as it appears in the catalog source.
///
/// - `id`: unique numeric identity, validated when the catalog is loaded
/// - `name`: display name
/// - `service`: trade label from an open set (e.g., "Electrician")
/// - `price_per_day`: base day rate; the hourly rate is derived from it
/// - `image`: optional display image reference; absent in some records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerRecord {
    pub id: u32,
    pub name: String,
    pub service: String,
    pub price_per_day: u32,
    #[serde(default)]
    pub image: Option<String>,
}

/// A worker enriched with derived display fields.
///
/// Derived fields are recomputed on every query from the base record;
/// nothing here is cached or persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    pub id: u32,
    pub name: String,
    pub service: String,
    pub price_per_day: u32,
    pub image: Option<String>,
    pub hourly_rate: u32,
    pub rating: f32,
    pub location: String,
    pub availability: String,
}

/// Page position metadata returned with every result page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Distinct services present in the whole catalog, with per-service record
/// counts. Always computed from the unfiltered catalog so the caller can
/// offer every service regardless of the active filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facets {
    pub services: Vec<String>,
    pub service_counts: Vec<(String, u64)>,
}

/// One query response: a page of workers plus the metadata needed to render
/// pagination and filter controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerPage {
    pub workers: Vec<Worker>,
    pub pagination: Pagination,
    pub facets: Facets,
}

/// Wire shape for catalog load failures. Query evaluation never fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
