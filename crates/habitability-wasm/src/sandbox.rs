//! Stateful build-a-planet sessions.
//!
//! Sessions live in thread-local storage (WASM is single-threaded) and are
//! referenced from JavaScript by opaque IDs.

use std::cell::RefCell;
use std::collections::HashMap;

use wasm_bindgen::prelude::*;

use habitability::{PlanetConfig, Sandbox};

use crate::scoring::ExportFile;
use crate::{from_js, to_js};

thread_local! {
    static SANDBOXES: RefCell<HashMap<u32, Sandbox>> = RefCell::new(HashMap::new());
    static NEXT_SANDBOX_ID: RefCell<u32> = const { RefCell::new(0) };
}

fn with_sandbox<R>(
    sandbox_id: u32,
    f: impl FnOnce(&mut Sandbox) -> Result<R, JsError>,
) -> Result<R, JsError> {
    SANDBOXES.with(|sandboxes| {
        let mut sandboxes = sandboxes.borrow_mut();
        let sandbox = sandboxes
            .get_mut(&sandbox_id)
            .ok_or_else(|| JsError::new(&format!("Sandbox {} not found", sandbox_id)))?;
        f(sandbox)
    })
}

/// Start a session from the Earth-like design.
///
/// Returns a sandbox ID for use with the other `sandbox_*` functions.
#[wasm_bindgen]
pub fn sandbox_create() -> u32 {
    let id = NEXT_SANDBOX_ID.with(|next_id| {
        let mut id = next_id.borrow_mut();
        let current = *id;
        *id += 1;
        current
    });

    SANDBOXES.with(|sandboxes| {
        sandboxes.borrow_mut().insert(id, Sandbox::default());
    });

    id
}

/// Delete a session to free memory.
#[wasm_bindgen]
pub fn sandbox_delete(sandbox_id: u32) {
    SANDBOXES.with(|sandboxes| {
        sandboxes.borrow_mut().remove(&sandbox_id);
    });
}

/// Replace the session's design and return the new assessment.
#[wasm_bindgen]
pub fn sandbox_set_config(sandbox_id: u32, config: JsValue) -> Result<JsValue, JsError> {
    let config: PlanetConfig = from_js(config)?;
    with_sandbox(sandbox_id, |sandbox| to_js(sandbox.replace(config)))
}

/// Current design of the session.
#[wasm_bindgen]
pub fn sandbox_config(sandbox_id: u32) -> Result<JsValue, JsError> {
    with_sandbox(sandbox_id, |sandbox| to_js(sandbox.config()))
}

/// Current assessment of the session's design.
#[wasm_bindgen]
pub fn sandbox_assessment(sandbox_id: u32) -> Result<JsValue, JsError> {
    with_sandbox(sandbox_id, |sandbox| to_js(sandbox.assessment()))
}

/// Return the session to the Earth-like design.
#[wasm_bindgen]
pub fn sandbox_reset(sandbox_id: u32) -> Result<JsValue, JsError> {
    with_sandbox(sandbox_id, |sandbox| to_js(sandbox.reset()))
}

/// Export the session's current design as `{ fileName, json }`.
#[wasm_bindgen]
pub fn sandbox_export(sandbox_id: u32) -> Result<JsValue, JsError> {
    with_sandbox(sandbox_id, |sandbox| {
        to_js(&ExportFile::from_export(&sandbox.export())?)
    })
}
