//! Raw records as returned by the archive's `ps` (Planetary Systems) table

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One row of the archive's JSON output
///
/// Field names match the archive's column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveRecord {
    /// Planet name, e.g. "Kepler-452 b"
    pub pl_name: String,
    /// Host star name
    pub hostname: String,
    /// Distance to the system (parsecs)
    pub sy_dist: f64,
    /// Planet mass (Earth masses)
    pub pl_bmasse: f64,
    /// Planet radius (Earth radii)
    pub pl_rade: f64,
    /// Orbital period (days)
    pub pl_orbper: f64,
    /// Equilibrium temperature (K)
    pub pl_eqt: f64,
    /// Year of discovery
    pub disc_year: i32,
    /// Discovery technique, e.g. "Transit"
    pub discoverymethod: String,
    /// Planet letter, not selected by every query
    #[serde(default)]
    pub pl_letter: Option<String>,
}

impl ArchiveRecord {
    /// Equilibrium temperature in °C
    pub fn equilibrium_celsius(&self) -> f64 {
        self.pl_eqt - 273.15
    }
}

/// Decode the archive's JSON array response
pub fn parse_records(json: &str) -> Result<Vec<ArchiveRecord>> {
    let records: Vec<ArchiveRecord> = serde_json::from_str(json)?;
    tracing::debug!(count = records.len(), "decoded archive records");
    Ok(records)
}
