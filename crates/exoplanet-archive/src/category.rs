//! Size category of an archive planet

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category derived from radius alone
///
/// | Category     | Radius (R⊕) |
/// |--------------|-------------|
/// | Terrestrial  | < 1.25      |
/// | Super-Earth  | 1.25-2.0    |
/// | Neptune-like | 2.0-6.0     |
/// | Gas Giant    | ≥ 6.0       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetCategory {
    #[serde(rename = "Terrestrial")]
    Terrestrial,
    #[serde(rename = "Super-Earth")]
    SuperEarth,
    #[serde(rename = "Neptune-like")]
    NeptuneLike,
    #[serde(rename = "Gas Giant")]
    GasGiant,
}

impl PlanetCategory {
    pub fn from_radius(radius_earth: f64) -> Self {
        match radius_earth {
            r if r < 1.25 => Self::Terrestrial,
            r if r < 2.0 => Self::SuperEarth,
            r if r < 6.0 => Self::NeptuneLike,
            _ => Self::GasGiant,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Terrestrial => "Terrestrial",
            Self::SuperEarth => "Super-Earth",
            Self::NeptuneLike => "Neptune-like",
            Self::GasGiant => "Gas Giant",
        }
    }

    /// Search phrase for the placeholder artwork
    pub fn image_query(&self) -> &'static str {
        match self {
            Self::Terrestrial => "rocky terrestrial exoplanet in space",
            Self::SuperEarth => "super earth exoplanet larger than earth",
            Self::NeptuneLike => "neptune-like ice giant exoplanet blue atmosphere",
            Self::GasGiant => "gas giant exoplanet jupiter-like planet",
        }
    }
}

impl fmt::Display for PlanetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
