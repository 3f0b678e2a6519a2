//! Stateless scoring functions.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use habitability::{PlanetAppearance, PlanetConfig, PlanetExport, StarType, evaluate};

use crate::{from_js, to_js};

/// Export payload: the file contents and a suggested download name
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFile {
    pub file_name: String,
    pub json: String,
}

impl ExportFile {
    pub(crate) fn from_export(export: &PlanetExport) -> Result<Self, JsError> {
        Ok(Self {
            file_name: export.file_name(),
            json: export
                .to_json_pretty()
                .map_err(|e| JsError::new(&e.to_string()))?,
        })
    }
}

/// The sandbox's starting design: an Earth twin named "My Planet".
#[wasm_bindgen]
pub fn earth_like_config() -> Result<JsValue, JsError> {
    to_js(&PlanetConfig::earth_like())
}

/// Score a planet design.
///
/// # Arguments
/// * `config` - Planet configuration object
///
/// # Returns
/// A HabitabilityAssessment with score, factor breakdown, verdict,
/// temperature (°C) and surface gravity (g).
#[wasm_bindgen]
pub fn evaluate_planet(config: JsValue) -> Result<JsValue, JsError> {
    let config: PlanetConfig = from_js(config)?;
    to_js(&evaluate(&config))
}

/// Colours and sizes for drawing the planet preview.
#[wasm_bindgen]
pub fn planet_appearance(config: JsValue) -> Result<JsValue, JsError> {
    let config: PlanetConfig = from_js(config)?;
    to_js(&PlanetAppearance::from_config(&config))
}

/// Build the "Export Design" download for a planet.
///
/// # Returns
/// `{ fileName, json }`, where `json` is the pretty-printed export document.
#[wasm_bindgen]
pub fn export_planet(config: JsValue) -> Result<JsValue, JsError> {
    let config: PlanetConfig = from_js(config)?;
    let export = PlanetExport::new(&config, &evaluate(&config));
    to_js(&ExportFile::from_export(&export)?)
}

/// Habitable zone bounds (AU) for a star type such as `"red-dwarf"`.
#[wasm_bindgen]
pub fn habitable_zone(star_type: JsValue) -> Result<JsValue, JsError> {
    let star_type: StarType = from_js(star_type)?;
    to_js(&star_type.habitable_zone())
}
