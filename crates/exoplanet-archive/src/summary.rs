//! Catalog summaries built from archive records
//!
//! Turns the archive's raw numeric columns into the display-ready strings the
//! catalog pages show, plus a short generated description and a quick
//! temperature-based habitability note.

use serde::{Deserialize, Serialize};

use habitability::export::slugify;

use crate::category::PlanetCategory;
use crate::record::ArchiveRecord;

/// Light-years per parsec
pub const LIGHT_YEARS_PER_PARSEC: f64 = 3.26;

/// Placeholder artwork endpoint
const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=400&width=600&query=";

/// Quick habitability tier from equilibrium temperature and size
///
/// This is a coarse screen for catalog cards and is independent of the
/// full sandbox scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArchiveHabitability {
    /// Radius ≥ 2 R⊕, assumed gaseous
    GasGiant,
    /// 0-50 °C
    Potentially,
    /// 50-150 °C
    MarginallyHot,
    /// −50-0 °C
    MarginallyCold,
    /// Anything hotter or colder
    Extreme,
}

impl ArchiveHabitability {
    /// Largest radius still considered rocky (R⊕, exclusive)
    pub const ROCKY_RADIUS_LIMIT: f64 = 2.0;

    pub fn classify(record: &ArchiveRecord) -> Self {
        if record.pl_rade >= Self::ROCKY_RADIUS_LIMIT {
            return Self::GasGiant;
        }

        match record.equilibrium_celsius().round() as i64 {
            0..=50 => Self::Potentially,
            51..=149 => Self::MarginallyHot,
            -49..=-1 => Self::MarginallyCold,
            _ => Self::Extreme,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::GasGiant => "Not habitable - Gas giant planets cannot support life as we know it.",
            Self::Potentially => {
                "Potentially habitable - Temperature range could allow liquid water on the surface."
            }
            Self::MarginallyHot => {
                "Marginally habitable - Too hot for Earth-like life, but extremophiles might survive."
            }
            Self::MarginallyCold => {
                "Marginally habitable - Cold temperatures, but subsurface oceans might exist."
            }
            Self::Extreme => {
                "Not habitable - Extreme temperatures make life as we know it impossible."
            }
        }
    }
}

/// Display-ready catalog entry for a real exoplanet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExoplanetSummary {
    /// URL slug, e.g. "kepler-452-b"
    pub id: String,
    pub name: String,
    /// Always "real" for archive planets
    #[serde(rename = "type")]
    pub kind: String,
    pub category: PlanetCategory,
    pub description: String,
    pub image: String,
    pub distance: String,
    pub mass: String,
    pub radius: String,
    pub discovery_year: String,
    pub discovery_method: String,
    pub host_star: String,
    pub orbital_period: String,
    pub temperature: String,
    pub habitability: String,
}

impl ExoplanetSummary {
    pub fn from_record(record: &ArchiveRecord) -> Self {
        let category = PlanetCategory::from_radius(record.pl_rade);
        let light_years = (record.sy_dist * LIGHT_YEARS_PER_PARSEC).round() as i64;

        Self {
            id: slugify(&record.pl_name),
            name: record.pl_name.clone(),
            kind: "real".to_string(),
            category,
            description: describe(record, category),
            image: format!(
                "{PLACEHOLDER_IMAGE}{}",
                urlencoding::encode(category.image_query())
            ),
            distance: format!("{} light-years", group_thousands(light_years)),
            mass: format!("{:.2} Earth masses", record.pl_bmasse),
            radius: format!("{:.2} Earth radii", record.pl_rade),
            discovery_year: record.disc_year.to_string(),
            discovery_method: record.discoverymethod.clone(),
            host_star: record.hostname.clone(),
            orbital_period: format!("{:.1} days", record.pl_orbper),
            temperature: format!(
                "{} K ({}°C)",
                record.pl_eqt.round() as i64,
                record.equilibrium_celsius().round() as i64
            ),
            habitability: ArchiveHabitability::classify(record).message().to_string(),
        }
    }
}

/// Generated one-paragraph description
///
/// Mentions the host star, the temperature regime and, for very short or
/// very long years, the orbital period.
pub fn describe(record: &ArchiveRecord, category: PlanetCategory) -> String {
    let temp_c = record.equilibrium_celsius().round();

    let mut desc = format!(
        "A {} exoplanet orbiting {}. ",
        category.name().to_lowercase(),
        record.hostname
    );

    if temp_c > 100.0 {
        desc.push_str("Its close orbit results in extremely high temperatures. ");
    } else if temp_c < -50.0 {
        desc.push_str("Located far from its star, this world experiences frigid temperatures. ");
    } else {
        desc.push_str("This planet orbits within a moderate temperature range. ");
    }

    if record.pl_orbper < 10.0 {
        desc.push_str("It completes an orbit in just days, racing around its host star.");
    } else if record.pl_orbper > 365.0 {
        desc.push_str("Its year is longer than Earth's, taking over a year to complete one orbit.");
    }

    desc
}

/// `1400` → `"1,400"`
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
