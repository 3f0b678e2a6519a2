//! Habitability scoring for user-designed planets
//!
//! This crate scores a planet built in the sandbox (type, mass, radius, orbit,
//! star, atmosphere, water, magnetic field, tectonics, axial tilt) on nine
//! independent factors, sums them into a habitability score and classifies
//! the score into one of five verdicts.
//!
//! ```
//! use habitability::{AtmosphereType, PlanetConfig, evaluate};
//!
//! let venus = PlanetConfig {
//!     name: "Venus".to_string(),
//!     mass: 0.815,
//!     radius: 0.95,
//!     distance: 0.72,
//!     atmosphere: AtmosphereType::CarbonDioxide,
//!     water_coverage_percent: 0.0,
//!     has_magnetic_field: false,
//!     axial_tilt_degrees: 2.6,
//!     ..PlanetConfig::earth_like()
//! };
//! let assessment = evaluate(&venus);
//! assert_eq!(assessment.score, 62.0);
//! ```

pub mod appearance;
pub mod assessment;
pub mod export;
pub mod factor;
pub mod planet_config;
pub mod sandbox;
pub mod star;
pub mod temperature;
pub mod verdict;

// Re-export key types at crate root
pub use appearance::{Color, PlanetAppearance};
pub use assessment::{HabitabilityAssessment, evaluate};
pub use export::{ExportError, PlanetExport};
pub use factor::{Factor, FactorCategory, ScoringFactor};
pub use planet_config::{AtmosphereType, PlanetConfig, PlanetType, StarType};
pub use sandbox::Sandbox;
pub use star::{HabitableZone, ZonePosition};
pub use verdict::Verdict;

#[cfg(test)]
mod factor_test;
