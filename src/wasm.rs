//! WebAssembly bindings.
//!
//! ```javascript
//! import init, { prioritize_task } from 'u-fuzzy';
//!
//! await init();
//! const result = prioritize_task(3, 9, 7);
//! // { score: 81.25, label: "very high", inputs: { days_to_deadline: 3, ... }, clamped: false }
//! ```

use std::sync::OnceLock;

use wasm_bindgen::prelude::*;

use crate::error::FuzzyError;
use crate::priority::PriorityEngine;

impl From<FuzzyError> for JsValue {
    fn from(error: FuzzyError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

fn engine() -> Result<&'static PriorityEngine, JsValue> {
    static ENGINE: OnceLock<Result<PriorityEngine, FuzzyError>> = OnceLock::new();
    ENGINE
        .get_or_init(PriorityEngine::new)
        .as_ref()
        .map_err(|e| JsValue::from(e.clone()))
}

/// Prioritizes one task and returns `{ score, label, inputs }`.
#[wasm_bindgen]
pub fn prioritize_task(
    days_to_deadline: f64,
    importance: f64,
    difficulty: f64,
) -> Result<JsValue, JsValue> {
    let result = engine()?.evaluate(days_to_deadline, importance, difficulty)?;
    serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}
