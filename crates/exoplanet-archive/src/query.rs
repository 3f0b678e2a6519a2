//! ADQL queries against the archive's TAP service

use url::Url;

use crate::error::Result;

/// Columns every catalog query selects
pub const SUMMARY_COLUMNS: &str = "pl_name, hostname, sy_dist, pl_bmasse, pl_rade, \
     pl_orbper, pl_eqt, disc_year, discoverymethod";

/// A query against the `ps` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapQuery {
    /// Most recently discovered planets with complete size, distance and
    /// temperature data
    Recent { limit: usize },
    /// First planet whose name contains the given text
    ByName { name: String },
}

impl TapQuery {
    pub fn recent(limit: usize) -> Self {
        Self::Recent { limit }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self::ByName { name: name.into() }
    }

    /// Render the ADQL statement
    ///
    /// # Examples
    /// ```
    /// use exoplanet_archive::TapQuery;
    ///
    /// let adql = TapQuery::by_name("O'Brien").to_adql();
    /// assert!(adql.contains("WHERE pl_name LIKE '%O''Brien%'"));
    /// ```
    pub fn to_adql(&self) -> String {
        match self {
            Self::Recent { limit } => format!(
                "SELECT {SUMMARY_COLUMNS} FROM ps \
                 WHERE pl_bmasse IS NOT NULL AND pl_rade IS NOT NULL \
                 AND sy_dist IS NOT NULL AND pl_eqt IS NOT NULL \
                 ORDER BY disc_year DESC LIMIT {limit}"
            ),
            Self::ByName { name } => format!(
                "SELECT {SUMMARY_COLUMNS} FROM ps WHERE pl_name LIKE '%{}%' LIMIT 1",
                escape_literal(name)
            ),
        }
    }

    /// Full request URL asking for JSON output
    pub fn url(&self, base_url: &str) -> Result<Url> {
        let url = Url::parse_with_params(
            base_url,
            &[("query", self.to_adql().as_str()), ("format", "json")],
        )?;
        Ok(url)
    }
}

/// Escape a value for use inside a single-quoted ADQL string literal
fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}
