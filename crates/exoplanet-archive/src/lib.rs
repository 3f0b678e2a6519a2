//! Exoplanet archive records and catalog summaries
//!
//! The public exoplanet archive is treated as an opaque, fallible data source
//! returning a fixed record shape ([`ArchiveRecord`]). This crate builds the
//! queries, decodes the records, turns them into display-ready
//! [`ExoplanetSummary`] entries and wraps everything in the JSON envelope the
//! catalog endpoints return.

pub mod catalog;
pub mod category;
pub mod config;
pub mod error;
pub mod query;
pub mod record;
pub mod response;
pub mod source;
pub mod summary;

pub use catalog::Catalog;
pub use category::PlanetCategory;
pub use config::ArchiveConfig;
pub use error::{ArchiveError, Result};
pub use query::TapQuery;
pub use record::{ArchiveRecord, parse_records};
pub use response::ApiResponse;
pub use source::{ExoplanetSource, StaticSource};
pub use summary::{ArchiveHabitability, ExoplanetSummary};

#[cfg(test)]
mod catalog_test;
#[cfg(test)]
mod summary_test;
#[cfg(test)]
mod test_fixtures;
