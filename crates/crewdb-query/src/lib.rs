//! crewdb-query
//!
//! The query pipeline over the worker catalog: derive display fields,
//! compute facets, filter, sort, and paginate. See `engine` for the
//! pipeline itself and `params` for the input contract.

pub mod derive;
pub mod engine;
pub mod params;

pub use engine::QueryEngine;
pub use params::{QueryParams, SortKey, DEFAULT_MAX_RATE, DEFAULT_PAGE_SIZE};
