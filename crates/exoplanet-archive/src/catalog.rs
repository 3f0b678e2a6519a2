//! Catalog service over an exoplanet source
//!
//! Translates source results into [`ApiResponse`] envelopes. Source failures
//! are logged and reported as failed responses; they never reach the caller
//! as errors.

use crate::config::ArchiveConfig;
use crate::response::{
    ApiResponse, STATUS_BAD_REQUEST, STATUS_INTERNAL_ERROR, STATUS_NOT_FOUND,
};
use crate::source::ExoplanetSource;
use crate::summary::ExoplanetSummary;

pub struct Catalog<S> {
    source: S,
    config: ArchiveConfig,
}

impl<S: ExoplanetSource> Catalog<S> {
    pub fn new(source: S, config: ArchiveConfig) -> Self {
        Self { source, config }
    }

    pub fn with_defaults(source: S) -> Self {
        Self::new(source, ArchiveConfig::default())
    }

    pub fn config(&self) -> &ArchiveConfig {
        &self.config
    }

    /// Parse a `limit` query parameter, falling back to the configured default
    ///
    /// Mirrors `parseInt`: leading whitespace is skipped and parsing stops at
    /// the first non-digit.
    pub fn parse_limit(&self, raw: Option<&str>) -> usize {
        raw.and_then(|s| {
            let digits: String = s
                .trim_start()
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            digits.parse().ok()
        })
        .unwrap_or(self.config.default_limit)
    }

    /// Most recent discoveries as catalog summaries
    pub fn list(&self, limit: Option<usize>) -> ApiResponse<Vec<ExoplanetSummary>> {
        let limit = limit.unwrap_or(self.config.default_limit);
        match self.source.fetch_recent(limit) {
            Ok(records) => {
                let summaries: Vec<ExoplanetSummary> =
                    records.iter().map(ExoplanetSummary::from_record).collect();
                tracing::info!(count = summaries.len(), limit, "listed exoplanets");
                ApiResponse::list(summaries)
            }
            Err(e) => {
                tracing::warn!(error = %e, limit, "failed to fetch exoplanets");
                ApiResponse::failure(STATUS_INTERNAL_ERROR, "Failed to fetch exoplanets")
            }
        }
    }

    /// Look up a single planet by (partial) name
    pub fn search(&self, name: Option<&str>) -> ApiResponse<ExoplanetSummary> {
        let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
            return ApiResponse::failure(STATUS_BAD_REQUEST, "Planet name is required");
        };

        match self.source.search(name) {
            Ok(Some(record)) => ApiResponse::ok(ExoplanetSummary::from_record(&record)),
            Ok(None) => {
                tracing::debug!(query = name, "no exoplanet matched");
                ApiResponse::failure(STATUS_NOT_FOUND, "Exoplanet not found")
            }
            Err(e) => {
                tracing::warn!(error = %e, query = name, "failed to search exoplanet");
                ApiResponse::failure(STATUS_INTERNAL_ERROR, "Failed to search exoplanet")
            }
        }
    }
}
