//! The query pipeline: derive, facet, filter, sort, paginate.

use crate::derive::derive;
use crate::params::{QueryParams, SortKey};
use crewdb_core::types::{Facets, Pagination, Worker, WorkerPage, WorkerRecord};
use std::cmp::{Ordering, Reverse};
use tracing::debug;

/// Evaluates queries against an immutable set of base records.
///
/// Every call derives fresh workers and produces a fresh page; the engine
/// never mutates the records it borrows, so concurrent queries against a
/// shared catalog need no coordination.
pub struct QueryEngine<'a> {
    records: &'a [WorkerRecord],
}

impl<'a> QueryEngine<'a> {
    pub fn new(records: &'a [WorkerRecord]) -> Self {
        Self { records }
    }

    /// Run one query. Never fails: malformed paging is clamped and a page
    /// past the end yields an empty page, not an error.
    pub fn query(&self, params: &QueryParams) -> WorkerPage {
        let facets = self.facets();

        let needle = (!params.search.is_empty()).then(|| params.search.to_lowercase());
        let mut matched: Vec<Worker> = self
            .records
            .iter()
            .map(derive)
            .filter(|w| matches(params, needle.as_deref(), w))
            .collect();
        sort_workers(&mut matched, params.sort);

        let page = params.page.max(1);
        let page_size = params.page_size.max(1);
        let total = matched.len();
        let total_pages = total.div_ceil(page_size);
        let start = (page - 1).saturating_mul(page_size);
        let workers = if start < total {
            matched[start..start.saturating_add(page_size).min(total)].to_vec()
        } else {
            Vec::new()
        };
        debug!(total, page, returned = workers.len(), "query evaluated");

        WorkerPage {
            workers,
            pagination: Pagination {
                page,
                page_size,
                total,
                total_pages,
            },
            facets,
        }
    }

    /// Distinct services with record counts, in first-seen catalog order.
    /// Computed from the unfiltered catalog so active filters never narrow
    /// the listing.
    pub fn facets(&self) -> Facets {
        let mut service_counts: Vec<(String, u64)> = Vec::new();
        for record in self.records {
            match service_counts
                .iter_mut()
                .find(|(service, _)| service == &record.service)
            {
                Some((_, count)) => *count += 1,
                None => service_counts.push((record.service.clone(), 1)),
            }
        }
        let services = service_counts
            .iter()
            .map(|(service, _)| service.clone())
            .collect();
        Facets {
            services,
            service_counts,
        }
    }
}

/// Conjunction of the active predicates. `needle` is the pre-lowercased
/// search text, `None` when the text filter is inactive.
fn matches(params: &QueryParams, needle: Option<&str>, worker: &Worker) -> bool {
    if let Some(needle) = needle {
        if !worker.name.to_lowercase().contains(needle)
            && !worker.service.to_lowercase().contains(needle)
        {
            return false;
        }
    }
    if let Some(service) = &params.service {
        if &worker.service != service {
            return false;
        }
    }
    if let Some((min, max)) = params.rate_filter() {
        if worker.hourly_rate < min || worker.hourly_rate > max {
            return false;
        }
    }
    true
}

// Sorts are stable, so ties keep catalog order.
fn sort_workers(workers: &mut [Worker], key: SortKey) {
    match key {
        SortKey::Relevance => {}
        SortKey::PriceLowHigh => workers.sort_by_key(|w| w.hourly_rate),
        SortKey::PriceHighLow => workers.sort_by_key(|w| Reverse(w.hourly_rate)),
        SortKey::Rating => workers.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(Ordering::Equal)
        }),
        SortKey::Newest => workers.sort_by_key(|w| Reverse(w.id)),
    }
}
