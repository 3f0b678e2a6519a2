//! Surface temperature estimate
//!
//! Equilibrium (blackbody) temperature from stellar flux, scaled by a simple
//! greenhouse multiplier for the chosen atmosphere:
//!
//! ```text
//! T_eq = 278 K × (L / d²)^0.25
//! T    = T_eq × g − 273        (°C)
//! ```

use crate::planet_config::{AtmosphereType, PlanetConfig};

/// Equilibrium temperature of an Earth-albedo body at 1 AU from the Sun (K)
pub const EARTH_EQUILIBRIUM_K: f64 = 278.0;

/// Kelvin to Celsius offset used for display
pub const KELVIN_OFFSET: f64 = 273.0;

impl AtmosphereType {
    /// Multiplier applied to the equilibrium temperature
    ///
    /// CO₂ traps the most heat, an airless body loses it. Hydrogen-helium and
    /// unrecognized atmospheres leave the equilibrium temperature unchanged.
    pub fn greenhouse_multiplier(&self) -> f64 {
        match self {
            Self::CarbonDioxide => 1.5,
            Self::NitrogenOxygen => 1.1,
            Self::None => 0.7,
            Self::HydrogenHelium | Self::Other => 1.0,
        }
    }
}

/// Equilibrium temperature in Kelvin
///
/// # Arguments
/// * `distance_au` - Orbital distance in AU
/// * `luminosity` - Stellar luminosity in L☉
///
/// # Examples
/// ```
/// use habitability::temperature::equilibrium_temperature;
///
/// assert_eq!(equilibrium_temperature(1.0, 1.0), 278.0);
/// assert!(equilibrium_temperature(0.39, 1.0) > 400.0); // Mercury
/// ```
pub fn equilibrium_temperature(distance_au: f64, luminosity: f64) -> f64 {
    EARTH_EQUILIBRIUM_K * (luminosity / (distance_au * distance_au)).powf(0.25)
}

/// Estimated surface temperature in °C for a configured planet
///
/// # Examples
/// ```
/// use habitability::PlanetConfig;
/// use habitability::temperature::surface_temperature_celsius;
///
/// // 278 K × 1.1 − 273
/// let t = surface_temperature_celsius(&PlanetConfig::earth_like());
/// assert!((t - 32.8).abs() < 1e-9);
/// ```
pub fn surface_temperature_celsius(config: &PlanetConfig) -> f64 {
    let base = equilibrium_temperature(config.distance, config.star_type.luminosity());
    base * config.atmosphere.greenhouse_multiplier() - KELVIN_OFFSET
}
