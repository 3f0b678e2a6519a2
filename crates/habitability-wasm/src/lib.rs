//! WASM bindings for the planet habitability engine.
//!
//! Exposes scoring, preview colours and export to the web front-end. Planet
//! configurations cross the boundary as plain objects using the form's field
//! names (`type`, `starType`, `waterCoverage`, ...).
//!
//! ## Quick Start (JavaScript)
//!
//! ```javascript
//! import init, { earth_like_config, evaluate_planet } from 'habitability-wasm';
//!
//! await init();
//!
//! const planet = earth_like_config();
//! planet.distance = 1.5;
//! const result = evaluate_planet(planet);
//! console.log(`${result.score}/110 - ${result.verdict}`);
//! ```
//!
//! For an editing session that keeps its own state, see the `sandbox_*`
//! functions.

use serde::Serialize;
use wasm_bindgen::prelude::*;

mod sandbox;
mod scoring;

pub use sandbox::*;
pub use scoring::*;

// =============================================================================
// Serialization helpers
// =============================================================================

pub(crate) fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

pub(crate) fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}
