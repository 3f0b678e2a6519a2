//! Host star lookups: luminosity and habitable zone
//!
//! The sandbox offers three star categories. Each maps to a fixed luminosity
//! and a fixed habitable zone; unrecognized stars use the sun-like values.
//!
//! # References
//! - Kopparapu et al. (2013) - "Habitable Zones Around Main-Sequence Stars"

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::planet_config::StarType;

impl StarType {
    /// Luminosity in solar luminosities (L☉)
    ///
    /// | Star       | L (L☉)  |
    /// |------------|---------|
    /// | Sun-like   | 1.0     |
    /// | Red dwarf  | 0.05    |
    /// | Blue giant | 10 000  |
    pub fn luminosity(&self) -> f64 {
        match self {
            Self::SunLike => 1.0,
            Self::RedDwarf => 0.05,
            Self::BlueGiant => 10_000.0,
            Self::Other => 1.0,
        }
    }

    /// Habitable zone bounds for this star
    pub fn habitable_zone(&self) -> HabitableZone {
        match self {
            Self::SunLike | Self::Other => HabitableZone::new(0.95, 1.37),
            Self::RedDwarf => HabitableZone::new(0.10, 0.30),
            Self::BlueGiant => HabitableZone::new(5.0, 10.0),
        }
    }
}

/// Orbital distance range where liquid surface water is possible
///
/// Both bounds are in AU and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct HabitableZone {
    /// Inner edge (AU)
    pub inner: f64,
    /// Outer edge (AU)
    pub outer: f64,
}

impl HabitableZone {
    pub fn new(inner: f64, outer: f64) -> Self {
        Self { inner, outer }
    }

    /// Where a planet at `distance_au` sits relative to the zone
    ///
    /// # Examples
    /// ```
    /// use habitability::{StarType, ZonePosition};
    ///
    /// let zone = StarType::SunLike.habitable_zone();
    /// assert_eq!(zone.position(1.0), ZonePosition::Within);
    /// assert_eq!(zone.position(0.72), ZonePosition::TooClose);
    /// assert_eq!(zone.position(1.52), ZonePosition::TooFar);
    /// ```
    pub fn position(&self, distance_au: f64) -> ZonePosition {
        if distance_au >= self.inner && distance_au <= self.outer {
            ZonePosition::Within
        } else if distance_au < self.inner {
            ZonePosition::TooClose
        } else {
            // Also reached for NaN distances
            ZonePosition::TooFar
        }
    }

    /// Whether `distance_au` falls inside the zone
    pub fn contains(&self, distance_au: f64) -> bool {
        self.position(distance_au) == ZonePosition::Within
    }

    /// Zone width in AU
    pub fn width(&self) -> f64 {
        self.outer - self.inner
    }
}

/// Placement of an orbit relative to the habitable zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZonePosition {
    /// Inside the inner edge, too hot for liquid water
    TooClose,
    /// Between the edges
    Within,
    /// Beyond the outer edge, too cold for liquid water
    TooFar,
}
