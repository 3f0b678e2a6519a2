//! Where archive records come from
//!
//! The archive itself is remote and fallible. [`ExoplanetSource`] is the seam
//! a transport implements; the catalog only ever talks to the trait.

use crate::error::Result;
use crate::record::ArchiveRecord;

pub trait ExoplanetSource {
    /// Most recently discovered planets, newest first, at most `limit`
    fn fetch_recent(&self, limit: usize) -> Result<Vec<ArchiveRecord>>;

    /// First planet whose name contains `name`, if any
    fn search(&self, name: &str) -> Result<Option<ArchiveRecord>>;
}

/// Fixed in-memory set of records
///
/// Serves snapshots loaded from disk and stands in for the archive offline.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<ArchiveRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<ArchiveRecord>) -> Self {
        Self { records }
    }

    /// Load a saved archive JSON response
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(crate::record::parse_records(json)?))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ExoplanetSource for StaticSource {
    fn fetch_recent(&self, limit: usize) -> Result<Vec<ArchiveRecord>> {
        let mut records = self.records.clone();
        // Stable sort keeps snapshot order within a discovery year
        records.sort_by(|a, b| b.disc_year.cmp(&a.disc_year));
        records.truncate(limit);
        Ok(records)
    }

    fn search(&self, name: &str) -> Result<Option<ArchiveRecord>> {
        let needle = name.to_lowercase();
        Ok(self
            .records
            .iter()
            .find(|r| r.pl_name.to_lowercase().contains(&needle))
            .cloned())
    }
}
