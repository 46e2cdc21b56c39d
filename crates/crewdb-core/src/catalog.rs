//! Catalog loading.
//!
//! The catalog is the immutable base dataset the query engine runs over.
//! It is loaded once, from a single JSON file or from a directory of JSON
//! files merged in sorted path order, and never mutated afterwards.

use crate::error::{Error, Result};
use crate::types::WorkerRecord;
use once_cell::sync::OnceCell;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug)]
pub struct Catalog {
    records: Vec<WorkerRecord>,
}

impl Catalog {
    /// Load from `path`: a file holding a JSON array of records, or a
    /// directory whose `.json` files are merged in sorted path order.
    pub fn open(path: &Path) -> Result<Self> {
        let records = if path.is_dir() {
            Self::read_dir(path)?
        } else {
            Self::read_file(path)?
        };
        Self::from_records(records)
    }

    /// Build a catalog from records already in memory. Duplicate ids mean
    /// a corrupt source and are rejected.
    pub fn from_records(records: Vec<WorkerRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id) {
                return Err(Error::DataUnavailable(format!(
                    "duplicate record id {}",
                    record.id
                )));
            }
        }
        info!(count = records.len(), "catalog loaded");
        Ok(Self { records })
    }

    /// Process-wide catalog, loaded on first use. Concurrent first callers
    /// race on the load but exactly one result is kept.
    pub fn shared(path: &Path) -> Result<&'static Self> {
        static SHARED: OnceCell<Catalog> = OnceCell::new();
        SHARED.get_or_try_init(|| Self::open(path))
    }

    pub fn records(&self) -> &[WorkerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn read_file(path: &Path) -> Result<Vec<WorkerRecord>> {
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::DataUnavailable(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| Error::DataUnavailable(format!("{}: {}", path.display(), e)))
    }

    fn read_dir(root: &Path) -> Result<Vec<WorkerRecord>> {
        let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().to_path_buf())
            .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
            .collect();
        files.sort();
        if files.is_empty() {
            return Err(Error::DataUnavailable(format!(
                "no .json files under {}",
                root.display()
            )));
        }
        let mut records = Vec::new();
        for file in &files {
            records.extend(Self::read_file(file)?);
        }
        Ok(records)
    }
}
