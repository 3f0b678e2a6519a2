//! Preview colours for a designed planet
//!
//! Derives the flat colours a front-end needs to draw the sandbox preview:
//! a body colour, a darker limb shade, an optional atmospheric glow and the
//! opacity of ocean patches.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::planet_config::{AtmosphereType, PlanetConfig, PlanetType};

/// Pixels per Earth radius in the preview
pub const PIXELS_PER_EARTH_RADIUS: f64 = 60.0;

/// Largest body radius drawn in the preview (pixels)
pub const MAX_DISPLAY_RADIUS: f64 = 120.0;

/// How much darker the limb is than the body colour
pub const LIMB_DARKENING: i32 = -40;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex colour {0:?}, expected #rrggbb")]
pub struct ColorParseError(pub String);

/// 24-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    pub const WHITE: Color = Color::from_u32(0xffffff);

    /// Shift every channel by `amount`, saturating at 0 and 255
    ///
    /// # Examples
    /// ```
    /// use habitability::appearance::Color;
    ///
    /// let steel = Color::from_u32(0x4682b4);
    /// assert_eq!(steel.adjust_brightness(-40).to_string(), "#1e5a8c");
    /// assert_eq!(Color::WHITE.adjust_brightness(40), Color::WHITE);
    /// ```
    pub fn adjust_brightness(&self, amount: i32) -> Self {
        let shift = |c: u8| (i32::from(c) + amount).clamp(0, 255) as u8;
        Self {
            r: shift(self.r),
            g: shift(self.g),
            b: shift(self.b),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError(s.to_string()));
        }
        u32::from_str_radix(hex, 16)
            .map(Self::from_u32)
            .map_err(|_| ColorParseError(s.to_string()))
    }
}

impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Body colour
///
/// Giants are coloured by type; rocky worlds by what covers their surface.
pub fn planet_color(config: &PlanetConfig) -> Color {
    match (config.planet_type, config.atmosphere) {
        (PlanetType::GasGiant, _) => Color::from_u32(0xf4a460),
        (PlanetType::IceGiant, _) => Color::from_u32(0xb0e0e6),
        (_, AtmosphereType::None) => Color::from_u32(0x808080),
        (_, AtmosphereType::CarbonDioxide) => Color::from_u32(0xcd853f),
        _ if config.water_coverage_percent > 50.0 => Color::from_u32(0x4682b4),
        _ => Color::from_u32(0x8b7355),
    }
}

/// Tint of the atmospheric glow
pub fn atmosphere_color(atmosphere: AtmosphereType) -> Color {
    match atmosphere {
        AtmosphereType::NitrogenOxygen => Color::from_u32(0x87ceeb),
        AtmosphereType::CarbonDioxide => Color::from_u32(0xffa500),
        AtmosphereType::HydrogenHelium => Color::from_u32(0xdda0dd),
        AtmosphereType::None | AtmosphereType::Other => Color::WHITE,
    }
}

/// Everything needed to draw the preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct PlanetAppearance {
    #[cfg_attr(feature = "tsify", tsify(type = "string"))]
    pub body: Color,
    /// Shaded edge of the body gradient
    #[cfg_attr(feature = "tsify", tsify(type = "string"))]
    pub limb: Color,
    /// Glow colour, absent for airless worlds
    #[cfg_attr(feature = "tsify", tsify(type = "string | null"))]
    pub atmosphere: Option<Color>,
    /// Ocean patch opacity (0-1), zero for giants
    pub water_opacity: f64,
    /// Body radius in pixels
    pub display_radius: f64,
}

impl PlanetAppearance {
    pub fn from_config(config: &PlanetConfig) -> Self {
        let body = planet_color(config);
        let atmosphere = config
            .atmosphere
            .is_present()
            .then(|| atmosphere_color(config.atmosphere));
        let water_opacity = if config.planet_type.is_rocky() && config.water_coverage_percent > 0.0
        {
            (config.water_coverage_percent / 100.0).clamp(0.0, 1.0)
        } else {
            0.0
        };

        Self {
            body,
            limb: body.adjust_brightness(LIMB_DARKENING),
            atmosphere,
            water_opacity,
            display_radius: (config.radius * PIXELS_PER_EARTH_RADIUS).min(MAX_DISPLAY_RADIUS),
        }
    }
}
