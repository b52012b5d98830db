//! Shared helpers for WASM API operations
//!
//! Serialization across the JS boundary and conversion of Rust errors into
//! thrown JavaScript values.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use wasm_bindgen::prelude::*;

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| js_error(error_context, e))
}

/// Serialize a value to a plain JavaScript object/array with automatic error handling
///
/// Uses the JSON-compatible serializer so maps become plain objects, not `Map`s.
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| js_error(error_context, e))
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Log an error and convert it to a JsValue to be thrown
pub fn js_error(context: &str, err: impl Display) -> JsValue {
    let msg = format!("{}: {}", context, err);
    log::error!("{}", msg);
    JsValue::from_str(&msg)
}
