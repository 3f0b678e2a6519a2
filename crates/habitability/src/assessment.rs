//! Habitability assessment of a configured planet
//!
//! [`evaluate`] is a pure function of the configuration: it derives the
//! habitable zone, surface temperature and gravity once, scores the nine
//! factors in a fixed order and classifies the sum. Re-run it whenever the
//! configuration changes; there is no incremental update.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::factor::{
    Factor, ScoringFactor, score_atmosphere, score_axial_tilt, score_habitable_zone, score_mass,
    score_magnetic_field, score_planet_type, score_radius, score_tectonics, score_water_coverage,
};
use crate::planet_config::PlanetConfig;
use crate::temperature::surface_temperature_celsius;
use crate::verdict::Verdict;

/// Result of scoring a planet
///
/// `score` is the unclamped sum of all factor points. The factor maxima add
/// up to 110, so an ideal planet scores above 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct HabitabilityAssessment {
    /// Sum of all factor points
    pub score: f64,
    /// One entry per factor, in evaluation order
    pub factors: Vec<ScoringFactor>,
    pub verdict: Verdict,
    /// Estimated surface temperature (°C)
    pub temperature_celsius: f64,
    /// Surface gravity (Earth g)
    pub surface_gravity_g: f64,
}

impl HabitabilityAssessment {
    /// Highest score the factors can award together
    pub fn max_score() -> f64 {
        Factor::ALL.iter().map(Factor::max_points).sum()
    }

    /// Score rounded to the nearest whole point
    pub fn rounded_score(&self) -> i64 {
        self.score.round() as i64
    }

    /// Entry produced by `factor`
    pub fn factor(&self, factor: Factor) -> Option<&ScoringFactor> {
        self.factors.iter().find(|f| f.factor == factor)
    }

    /// Factors that fell short of their maximum
    pub fn shortfalls(&self) -> impl Iterator<Item = &ScoringFactor> {
        self.factors.iter().filter(|f| !f.is_optimal())
    }
}

/// Score a planet configuration
///
/// Total over well-formed input and never panics. Out-of-range or NaN fields
/// are not validated; they fall through to the "outside the optimal band"
/// branches and produce an unspecified but finite-length result.
///
/// # Examples
/// ```
/// use habitability::{PlanetConfig, Verdict, evaluate};
///
/// let assessment = evaluate(&PlanetConfig::earth_like());
/// assert_eq!(assessment.score, 110.0);
/// assert_eq!(assessment.verdict, Verdict::HighlyHabitable);
/// assert_eq!(assessment.factors.len(), 9);
/// ```
pub fn evaluate(config: &PlanetConfig) -> HabitabilityAssessment {
    let zone = config.star_type.habitable_zone();
    let temperature_celsius = surface_temperature_celsius(config);
    let surface_gravity_g = config.surface_gravity();

    let factors = vec![
        score_planet_type(config),
        score_mass(config),
        score_radius(config),
        score_habitable_zone(config, &zone, temperature_celsius),
        score_atmosphere(config),
        score_water_coverage(config),
        score_magnetic_field(config),
        score_tectonics(config),
        score_axial_tilt(config),
    ];

    let score: f64 = factors.iter().map(|f| f.points).sum();
    let verdict = Verdict::from_score(score);

    tracing::trace!(
        planet = %config.name,
        score,
        verdict = verdict.label(),
        "evaluated planet"
    );

    HabitabilityAssessment {
        score,
        factors,
        verdict,
        temperature_celsius,
        surface_gravity_g,
    }
}
