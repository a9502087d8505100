// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! WASM bindings using wasm-bindgen

use wasm_bindgen::prelude::*;

/// Grade a JSON question/answer pair; returns the JSON result
#[wasm_bindgen(js_name = validateAnswer)]
pub fn validate_json(
    question: &str,
    answer: &str,
    config: Option<String>,
) -> Result<String, JsValue> {
    crate::validate_json(question, answer, config.as_deref())
        .map_err(|e| JsValue::from_str(&format!("Validation error: {}", e)))
}

/// Get library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
