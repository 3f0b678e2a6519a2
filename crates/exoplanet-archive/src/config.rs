//! Archive client settings

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// NASA Exoplanet Archive synchronous TAP endpoint
pub const DEFAULT_BASE_URL: &str = "https://exoplanetarchive.ipac.caltech.edu/TAP/sync";

/// Records returned when the caller does not ask for a count
pub const DEFAULT_LIMIT: usize = 50;

/// How long archive responses may be cached (one day)
pub const DEFAULT_CACHE_TTL_SECS: u64 = 86_400;

/// Settings for talking to the archive
///
/// Every field has a default, so an empty TOML document is valid:
///
/// ```
/// use exoplanet_archive::ArchiveConfig;
///
/// let config = ArchiveConfig::from_toml_str("default_limit = 10").unwrap();
/// assert_eq!(config.default_limit, 10);
/// assert_eq!(config.cache_ttl_secs, 86_400);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    pub base_url: String,
    pub default_limit: usize,
    pub cache_ttl_secs: u64,
}

impl ArchiveConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_limit: DEFAULT_LIMIT,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}
