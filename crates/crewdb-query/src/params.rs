//! Query input contract.
//!
//! Unset filters are represented as `None`, never as sentinel values; the
//! boundary helpers map transport-level conventions ("all", the full price
//! range) onto the options.

use crewdb_core::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Upper bound of the price-range control; a max at or above this means
/// "no cap".
pub const DEFAULT_MAX_RATE: u32 = 200;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Catalog order, i.e. no reordering.
    #[default]
    Relevance,
    PriceLowHigh,
    PriceHighLow,
    Rating,
    Newest,
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "relevance" => Ok(Self::Relevance),
            "price-low" => Ok(Self::PriceLowHigh),
            "price-high" => Ok(Self::PriceHighLow),
            "rating" => Ok(Self::Rating),
            "newest" => Ok(Self::Newest),
            other => Err(Error::InvalidParameter(format!(
                "unknown sort key '{}'",
                other
            ))),
        }
    }
}

/// Filter, sort and paging inputs for one query.
///
/// - `search`: case-insensitive substring over name and service; empty
///   means no text filter
/// - `service`: exact service match; `None` means all services
/// - `min_rate`/`max_rate`: inclusive hourly-rate bounds; both `None`
///   means the price filter is inactive
/// - `page`/`page_size`: 1-based paging; values below 1 are clamped, not
///   rejected
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    pub search: String,
    pub service: Option<String>,
    pub min_rate: Option<u32>,
    pub max_rate: Option<u32>,
    pub page: usize,
    pub page_size: usize,
    pub sort: SortKey,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            search: String::new(),
            service: None,
            min_rate: None,
            max_rate: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort: SortKey::default(),
        }
    }
}

impl QueryParams {
    /// Map a transport-level service value onto the filter: "all" (or
    /// empty) selects every service.
    pub fn with_service(mut self, service: &str) -> Self {
        self.service = match service {
            "" | "all" => None,
            other => Some(other.to_string()),
        };
        self
    }

    /// Map slider-style price bounds onto the optional filters: the full
    /// default range `[0, 200]` is "no price filter", anything narrower
    /// activates the respective bound.
    pub fn with_rate_bounds(mut self, min: u32, max: u32) -> Self {
        self.min_rate = (min > 0).then_some(min);
        self.max_rate = (max < DEFAULT_MAX_RATE).then_some(max);
        self
    }

    /// Effective inclusive bounds, or `None` when the filter is inactive.
    pub(crate) fn rate_filter(&self) -> Option<(u32, u32)> {
        if self.min_rate.is_none() && self.max_rate.is_none() {
            return None;
        }
        Some((
            self.min_rate.unwrap_or(0),
            self.max_rate.unwrap_or(u32::MAX),
        ))
    }
}
