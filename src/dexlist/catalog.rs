//! # Record Catalog
//!
//! The catalog owns every parsed [`Record`] and hands out shared references
//! by 1-based key. Lists never borrow from the catalog past a single insert:
//! each insert clones the record it is given.

use crate::error::{DexError, Result};
use crate::model::Record;
use crate::parse::parse_record;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Default number of records read from a catalog file.
pub const DEFAULT_CATALOG_LIMIT: usize = 801;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Opens and loads the catalog file at `path`.
    pub fn open<P: AsRef<Path>>(path: P, limit: usize) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening catalog");
        let file = File::open(path)?;
        Self::load(BufReader::new(file), limit)
    }

    /// Reads a catalog stream: the first line is a header and is discarded,
    /// blank lines are skipped, and at most `limit` records are kept.
    pub fn load<R: BufRead>(reader: R, limit: usize) -> Result<Self> {
        let mut records = Vec::with_capacity(limit.min(DEFAULT_CATALOG_LIMIT));

        for (idx, line) in reader.lines().enumerate().skip(1) {
            if records.len() >= limit {
                break;
            }
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(parse_record(&line, idx + 1)?);
        }

        info!(records = records.len(), "catalog loaded");
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record for a 1-based external key.
    pub fn lookup(&self, key: usize) -> Result<&Record> {
        key.checked_sub(1)
            .and_then(|idx| self.records.get(idx))
            .ok_or(DexError::KeyOutOfRange {
                key,
                len: self.records.len(),
            })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::PokeType;
    use chrono::NaiveDate;

    /// Builds a minimal record whose only distinguishing data is its id and name.
    pub fn record(id: u16, name: &str) -> Record {
        Record {
            id,
            generation: 1,
            name: name.to_string(),
            description: format!("{} description", name),
            primary_type: PokeType::Normal,
            secondary_type: None,
            abilities: vec![format!("{} ability", name)],
            weight_kg: 1.0,
            height_m: 0.5,
            capture_rate: 45,
            is_legendary: false,
            capture_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default(),
        }
    }

    pub struct CatalogFixture {
        records: Vec<Record>,
    }

    impl Default for CatalogFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogFixture {
        pub fn new() -> Self {
            Self {
                records: Vec::new(),
            }
        }

        /// Appends records named after `names`, keyed 1, 2, 3... in order.
        pub fn with_names(mut self, names: &[&str]) -> Self {
            for name in names {
                let id = self.records.len() as u16 + 1;
                self.records.push(record(id, name));
            }
            self
        }

        pub fn build(self) -> Catalog {
            Catalog::new(self.records)
        }
    }

    /// The three-record catalog `{1: "A", 2: "B", 3: "C"}`.
    pub fn abc() -> Catalog {
        CatalogFixture::new().with_names(&["A", "B", "C"]).build()
    }
}
