//! One-shot export of a planet design
//!
//! The export merges the configuration with its assessment into a single flat
//! JSON document, the same shape the sandbox's "Export Design" button
//! downloads.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assessment::HabitabilityAssessment;
use crate::planet_config::PlanetConfig;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize planet export: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Flattened configuration plus headline results
///
/// ```json
/// {
///   "name": "My Planet",
///   "type": "terrestrial",
///   ...
///   "habitability": 110.0,
///   "temperature": 32.8,
///   "surfaceGravity": 1.0,
///   "verdict": "Highly Habitable - Excellent conditions for complex life!"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetExport {
    #[serde(flatten)]
    pub config: PlanetConfig,
    /// Habitability score
    pub habitability: f64,
    /// Surface temperature (°C)
    pub temperature: f64,
    /// Surface gravity (Earth g)
    pub surface_gravity: f64,
    /// Full verdict sentence
    pub verdict: String,
}

impl PlanetExport {
    pub fn new(config: &PlanetConfig, assessment: &HabitabilityAssessment) -> Self {
        Self {
            config: config.clone(),
            habitability: assessment.score,
            temperature: assessment.temperature_celsius,
            surface_gravity: assessment.surface_gravity_g,
            verdict: assessment.verdict.to_string(),
        }
    }

    /// Human-readable JSON with two-space indentation
    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Suggested download name, e.g. `"My  Planet"` → `my-planet.json`
    pub fn file_name(&self) -> String {
        format!("{}.json", slugify(&self.config.name))
    }
}

/// Lowercase `name` with each whitespace run collapsed to a single `-`
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }
    slug
}
