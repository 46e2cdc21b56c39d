//! Derived display fields.
//!
//! Derivation is a pure function of the base record, recomputed on every
//! query. The rating is pseudo-random but seeded by the record id, so a
//! worker rates identically across queries and processes.

use crewdb_core::types::{Worker, WorkerRecord};
use std::hash::{Hash, Hasher};
use twox_hash::XxHash64;

pub const DEFAULT_LOCATION: &str = "Remote";
pub const DEFAULT_AVAILABILITY: &str = "Available";

/// Expand a base record into its display form.
pub fn derive(record: &WorkerRecord) -> Worker {
    Worker {
        id: record.id,
        name: record.name.clone(),
        service: record.service.clone(),
        price_per_day: record.price_per_day,
        image: record.image.clone(),
        hourly_rate: hourly_rate(record.price_per_day),
        rating: rating_for(record.id),
        location: DEFAULT_LOCATION.to_string(),
        availability: DEFAULT_AVAILABILITY.to_string(),
    }
}

/// Hourly rate from the day rate, assuming an 8-hour day, rounded half-up.
fn hourly_rate(price_per_day: u32) -> u32 {
    (price_per_day + 4) / 8
}

/// Deterministic rating in `[4.0, 5.0]` in steps of 0.1, seeded by id.
fn rating_for(id: u32) -> f32 {
    let mut hasher = XxHash64::with_seed(0);
    id.hash(&mut hasher);
    let hash = hasher.finish();
    4.0 + (hash % 11) as f32 / 10.0
}
