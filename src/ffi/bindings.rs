// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Node.js bindings using napi-rs

#[cfg(feature = "napi")]
use napi::bindgen_prelude::*;
#[cfg(feature = "napi")]
use napi_derive::napi;

/// Grade a JSON question/answer pair; returns the JSON result
#[cfg(feature = "napi")]
#[napi(js_name = "validateAnswer")]
pub fn validate_json(question: String, answer: String, config: Option<String>) -> Result<String> {
    crate::validate_json(&question, &answer, config.as_deref())
        .map_err(|e| Error::from_reason(format!("Validation error: {}", e)))
}

/// Get library version
#[cfg(feature = "napi")]
#[napi]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
