//! Browser-runtime bindings, compiled only for `wasm32`.
//!
//! The browser gets the exact evaluator the server runs, so displayed and
//! stored results agree by construction instead of by parallel
//! maintenance.

use wasm_bindgen::prelude::*;

/// Evaluates a formula from the browser runtime.
#[wasm_bindgen(js_name = evaluateFormula)]
pub fn evaluate_formula(formula: &str) -> Result<f64, JsError> {
    crate::evaluate(formula).map_err(|e| JsError::new(&e.to_string()))
}

/// Marker check the browser host runs before overriding its own result.
#[wasm_bindgen(js_name = containsExponent)]
pub fn contains_exponent(formula: &str) -> bool {
    crate::contains_exponent(formula)
}
