//! User-editable planet configuration
//!
//! Everything the sandbox form exposes lives here. The enums mirror the form's
//! option lists; any value the form sends that we do not recognize lands in the
//! `Other` variant, which every lookup table treats as its explicit default.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Broad structural type of the planet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum PlanetType {
    /// Rocky world with a solid surface
    Terrestrial,

    /// Jupiter/Saturn-like hydrogen-helium giant
    GasGiant,

    /// Uranus/Neptune-like volatile-rich giant
    IceGiant,

    /// Unrecognized type, scored as a non-terrestrial world
    #[serde(other)]
    Other,
}

impl PlanetType {
    /// Whether this type has a solid surface that can host life
    pub fn is_rocky(&self) -> bool {
        matches!(self, Self::Terrestrial)
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Terrestrial => "Terrestrial",
            Self::GasGiant => "Gas Giant",
            Self::IceGiant => "Ice Giant",
            Self::Other => "Unknown",
        }
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Host star category
///
/// Luminosity and habitable zone lookups live in [`crate::star`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum StarType {
    /// G-type main sequence star like the Sun
    SunLike,

    /// M-type dwarf, dim and long-lived
    RedDwarf,

    /// Hot, very luminous O/B-type star
    BlueGiant,

    /// Unrecognized star, treated as sun-like
    #[serde(other)]
    Other,
}

impl StarType {
    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::SunLike => "Sun-like",
            Self::RedDwarf => "Red Dwarf",
            Self::BlueGiant => "Blue Giant",
            Self::Other => "Unknown",
        }
    }
}

impl fmt::Display for StarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Dominant atmospheric composition
///
/// Greenhouse multipliers live in [`crate::temperature`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum AtmosphereType {
    /// Earth-like N₂/O₂, breathable
    NitrogenOxygen,

    /// Venus/Mars-like CO₂
    CarbonDioxide,

    /// Primordial H₂/He envelope
    HydrogenHelium,

    /// Airless body
    None,

    /// Unrecognized composition
    #[serde(other)]
    Other,
}

impl AtmosphereType {
    /// Whether there is any gas envelope at all
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::NitrogenOxygen => "N₂/O₂",
            Self::CarbonDioxide => "CO₂",
            Self::HydrogenHelium => "H₂/He",
            Self::None => "None",
            Self::Other => "Unknown",
        }
    }
}

impl fmt::Display for AtmosphereType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A planet as designed in the sandbox
///
/// Ranges are the caller's responsibility: mass, radius and distance must be
/// positive, water coverage within 0-100 and axial tilt within 0-90. Values
/// outside those ranges (including NaN) are not rejected; scoring still
/// completes without panicking but the result carries no meaning.
///
/// # Examples
/// ```
/// use habitability::{AtmosphereType, PlanetConfig, PlanetType};
///
/// let mars = PlanetConfig {
///     name: "Mars".to_string(),
///     mass: 0.107,
///     radius: 0.532,
///     distance: 1.52,
///     atmosphere: AtmosphereType::CarbonDioxide,
///     ..PlanetConfig::earth_like()
/// };
/// assert_eq!(mars.planet_type, PlanetType::Terrestrial);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct PlanetConfig {
    /// Free-text label, not used for scoring
    pub name: String,
    /// Structural type
    #[serde(rename = "type")]
    pub planet_type: PlanetType,
    /// Mass in Earth masses (M⊕)
    pub mass: f64,
    /// Radius in Earth radii (R⊕)
    pub radius: f64,
    /// Orbital distance in AU
    pub distance: f64,
    /// Host star category
    #[serde(rename = "starType")]
    pub star_type: StarType,
    /// Atmospheric composition
    pub atmosphere: AtmosphereType,
    /// Surface water coverage in percent (0-100)
    #[serde(rename = "waterCoverage")]
    pub water_coverage_percent: f64,
    /// Global magnetic field present
    #[serde(rename = "magneticField")]
    pub has_magnetic_field: bool,
    /// Active plate tectonics
    #[serde(rename = "tectonicActivity")]
    pub has_tectonic_activity: bool,
    /// Axial tilt in degrees (0-90)
    #[serde(rename = "axialTilt")]
    pub axial_tilt_degrees: f64,
}

impl PlanetConfig {
    /// Name given to a freshly created design
    pub const DEFAULT_NAME: &'static str = "My Planet";

    /// The Earth-like starting point of the sandbox
    pub fn earth_like() -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            planet_type: PlanetType::Terrestrial,
            mass: 1.0,
            radius: 1.0,
            distance: 1.0,
            star_type: StarType::SunLike,
            atmosphere: AtmosphereType::NitrogenOxygen,
            water_coverage_percent: 70.0,
            has_magnetic_field: true,
            has_tectonic_activity: true,
            axial_tilt_degrees: 23.5,
        }
    }

    /// Surface gravity in Earth g
    ///
    /// g = M / R² in Earth units. Not clamped.
    pub fn surface_gravity(&self) -> f64 {
        self.mass / (self.radius * self.radius)
    }
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self::earth_like()
    }
}
