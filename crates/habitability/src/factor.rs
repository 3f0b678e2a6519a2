//! The nine independent habitability factors
//!
//! Each factor inspects one aspect of a [`PlanetConfig`] and awards between
//! zero and its maximum points, together with a sentence explaining why.
//! Factors never subtract; the overall score is their plain sum.
//!
//! | # | Factor           | Max | Category   |
//! |---|------------------|-----|------------|
//! | 1 | Planet type      | 25  | structure  |
//! | 2 | Mass             | 15  | physical   |
//! | 3 | Radius           | 10  | physical   |
//! | 4 | Habitable zone   | 20  | location   |
//! | 5 | Atmosphere       | 15  | atmosphere |
//! | 6 | Water coverage   | 10  | surface    |
//! | 7 | Magnetic field   | 5   | protection |
//! | 8 | Tectonics        | 5   | geology    |
//! | 9 | Axial tilt       | 5   | climate    |

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::planet_config::{AtmosphereType, PlanetConfig};
use crate::star::{HabitableZone, ZonePosition};

/// Area of planetary science a factor belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum FactorCategory {
    Structure,
    Physical,
    Location,
    Atmosphere,
    Surface,
    Protection,
    Geology,
    Climate,
}

impl FactorCategory {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Structure => "structure",
            Self::Physical => "physical",
            Self::Location => "location",
            Self::Atmosphere => "atmosphere",
            Self::Surface => "surface",
            Self::Protection => "protection",
            Self::Geology => "geology",
            Self::Climate => "climate",
        }
    }
}

impl fmt::Display for FactorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Identity of a scoring factor, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum Factor {
    PlanetType,
    Mass,
    Radius,
    HabitableZone,
    Atmosphere,
    WaterCoverage,
    MagneticField,
    Tectonics,
    AxialTilt,
}

impl Factor {
    /// All factors in the order they are evaluated
    pub const ALL: [Factor; 9] = [
        Factor::PlanetType,
        Factor::Mass,
        Factor::Radius,
        Factor::HabitableZone,
        Factor::Atmosphere,
        Factor::WaterCoverage,
        Factor::MagneticField,
        Factor::Tectonics,
        Factor::AxialTilt,
    ];

    /// Maximum points this factor can award
    pub fn max_points(&self) -> f64 {
        match self {
            Self::PlanetType => 25.0,
            Self::Mass => 15.0,
            Self::Radius => 10.0,
            Self::HabitableZone => 20.0,
            Self::Atmosphere => 15.0,
            Self::WaterCoverage => 10.0,
            Self::MagneticField | Self::Tectonics | Self::AxialTilt => 5.0,
        }
    }

    pub fn category(&self) -> FactorCategory {
        match self {
            Self::PlanetType => FactorCategory::Structure,
            Self::Mass | Self::Radius => FactorCategory::Physical,
            Self::HabitableZone => FactorCategory::Location,
            Self::Atmosphere => FactorCategory::Atmosphere,
            Self::WaterCoverage => FactorCategory::Surface,
            Self::MagneticField => FactorCategory::Protection,
            Self::Tectonics => FactorCategory::Geology,
            Self::AxialTilt => FactorCategory::Climate,
        }
    }
}

/// One scored aspect of a planet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct ScoringFactor {
    /// Which factor produced this entry
    pub factor: Factor,
    /// Explanation shown to the user
    pub description: String,
    /// Points awarded, between 0 and `factor.max_points()`
    pub points: f64,
    pub category: FactorCategory,
}

impl ScoringFactor {
    fn new(factor: Factor, points: f64, description: impl Into<String>) -> Self {
        Self {
            factor,
            description: description.into(),
            points,
            category: factor.category(),
        }
    }

    /// Whether the factor awarded its full points
    pub fn is_optimal(&self) -> bool {
        self.points >= self.factor.max_points()
    }
}

/// Solid surface: only terrestrial worlds qualify (25 pts)
pub fn score_planet_type(config: &PlanetConfig) -> ScoringFactor {
    if config.planet_type.is_rocky() {
        ScoringFactor::new(
            Factor::PlanetType,
            25.0,
            "Rocky planet can support solid surface",
        )
    } else {
        ScoringFactor::new(
            Factor::PlanetType,
            0.0,
            "Gas giants cannot support surface life",
        )
    }
}

/// Atmosphere retention: 0.5-2.0 M⊕ inclusive (15 pts)
pub fn score_mass(config: &PlanetConfig) -> ScoringFactor {
    match config.mass {
        m if (0.5..=2.0).contains(&m) => ScoringFactor::new(
            Factor::Mass,
            15.0,
            "Optimal mass for atmosphere retention",
        ),
        m if m < 0.5 => ScoringFactor::new(
            Factor::Mass,
            0.0,
            "Too small to retain substantial atmosphere",
        ),
        _ => ScoringFactor::new(Factor::Mass, 0.0, "Too massive, likely a gas giant"),
    }
}

/// Surface gravity proxy: full points for 0.8-1.5 R⊕, otherwise 5 points
/// lost per R⊕ away from 1.15 (10 pts)
pub fn score_radius(config: &PlanetConfig) -> ScoringFactor {
    if (0.8..=1.5).contains(&config.radius) {
        ScoringFactor::new(
            Factor::Radius,
            10.0,
            "Size supports Earth-like surface gravity",
        )
    } else {
        let penalty = (config.radius - 1.15).abs() * 5.0;
        // f64::max returns 0.0 for a NaN penalty
        let points = (10.0 - penalty).max(0.0);
        ScoringFactor::new(
            Factor::Radius,
            points,
            "Size affects surface gravity significantly",
        )
    }
}

/// Liquid water zone (20 pts)
///
/// `temperature_c` is only used to explain why a planet outside the zone
/// misses out.
pub fn score_habitable_zone(
    config: &PlanetConfig,
    zone: &HabitableZone,
    temperature_c: f64,
) -> ScoringFactor {
    match zone.position(config.distance) {
        ZonePosition::Within => ScoringFactor::new(
            Factor::HabitableZone,
            20.0,
            "Located in habitable zone (liquid water possible)",
        ),
        ZonePosition::TooClose => ScoringFactor::new(
            Factor::HabitableZone,
            0.0,
            format!("Too close to star ({temperature_c:.0}°C - too hot)"),
        ),
        ZonePosition::TooFar => ScoringFactor::new(
            Factor::HabitableZone,
            0.0,
            format!("Too far from star ({temperature_c:.0}°C - too cold)"),
        ),
    }
}

/// Breathability and greenhouse warming (15 pts)
pub fn score_atmosphere(config: &PlanetConfig) -> ScoringFactor {
    match config.atmosphere {
        AtmosphereType::NitrogenOxygen => ScoringFactor::new(
            Factor::Atmosphere,
            15.0,
            "Breathable atmosphere with greenhouse effect",
        ),
        AtmosphereType::CarbonDioxide => ScoringFactor::new(
            Factor::Atmosphere,
            5.0,
            "Greenhouse gases present but not breathable",
        ),
        AtmosphereType::HydrogenHelium => ScoringFactor::new(
            Factor::Atmosphere,
            0.0,
            "Gas giant atmosphere, unsuitable for life",
        ),
        AtmosphereType::None | AtmosphereType::Other => ScoringFactor::new(
            Factor::Atmosphere,
            0.0,
            "No atmosphere - no protection from radiation",
        ),
    }
}

/// Oceans: 30-90 % is ideal, any water helps (10 pts)
pub fn score_water_coverage(config: &PlanetConfig) -> ScoringFactor {
    let water = config.water_coverage_percent;
    match water {
        w if (30.0..=90.0).contains(&w) => ScoringFactor::new(
            Factor::WaterCoverage,
            10.0,
            format!("Optimal water coverage ({w}%)"),
        ),
        w if w > 0.0 => ScoringFactor::new(
            Factor::WaterCoverage,
            5.0,
            format!("Some water present ({w}%)"),
        ),
        _ => ScoringFactor::new(Factor::WaterCoverage, 0.0, "No liquid water detected"),
    }
}

/// Radiation shielding (5 pts)
pub fn score_magnetic_field(config: &PlanetConfig) -> ScoringFactor {
    if config.has_magnetic_field {
        ScoringFactor::new(
            Factor::MagneticField,
            5.0,
            "Magnetic field protects from solar radiation",
        )
    } else {
        ScoringFactor::new(
            Factor::MagneticField,
            0.0,
            "No magnetic field - vulnerable to radiation",
        )
    }
}

/// Nutrient recycling (5 pts)
pub fn score_tectonics(config: &PlanetConfig) -> ScoringFactor {
    if config.has_tectonic_activity {
        ScoringFactor::new(
            Factor::Tectonics,
            5.0,
            "Tectonic activity recycles nutrients",
        )
    } else {
        ScoringFactor::new(
            Factor::Tectonics,
            0.0,
            "No tectonic activity - limited nutrient cycling",
        )
    }
}

/// Seasons: 15-35° is ideal, a low tilt is acceptable (5 pts)
pub fn score_axial_tilt(config: &PlanetConfig) -> ScoringFactor {
    match config.axial_tilt_degrees {
        t if (15.0..=35.0).contains(&t) => ScoringFactor::new(
            Factor::AxialTilt,
            5.0,
            "Moderate axial tilt creates stable seasons",
        ),
        t if t < 15.0 => ScoringFactor::new(
            Factor::AxialTilt,
            2.0,
            "Low axial tilt - minimal seasonal variation",
        ),
        _ => ScoringFactor::new(
            Factor::AxialTilt,
            0.0,
            "Extreme axial tilt - harsh seasonal extremes",
        ),
    }
}
