//! WASM bindings for objcmp-core.
//!
//! Exposes `isEqual` and `diff` to JavaScript via `wasm-bindgen`. All values
//! cross the boundary as JSON strings, so only JSON-expressible data can be
//! compared from JS (no symbols, functions, or prototypes).
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p objcmp-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/objcmp-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/objcmp_wasm.wasm
//! ```

use objcmp_core::{DiffOptions, Value};
use wasm_bindgen::prelude::*;

/// Parse a JSON operand into a comparable value.
fn parse_value(json: &str, label: &str) -> Result<Value, String> {
    serde_json::from_str::<serde_json::Value>(json)
        .map(Value::from)
        .map_err(|e| format!("Invalid {} JSON: {}", label, e))
}

/// Parse optional options JSON (`{"ownPropertiesOnly": bool, "enumerableOnly": bool}`).
/// Missing fields take their defaults.
fn parse_options(json: Option<&str>) -> Result<DiffOptions, String> {
    match json {
        None => Ok(DiffOptions::default()),
        Some(s) if s.trim().is_empty() => Ok(DiffOptions::default()),
        Some(s) => serde_json::from_str(s).map_err(|e| format!("Invalid options JSON: {}", e)),
    }
}

fn is_equal_impl(a: &str, b: &str) -> Result<bool, String> {
    let a = parse_value(a, "first")?;
    let b = parse_value(b, "second")?;
    Ok(objcmp_core::is_equal(&a, &b))
}

fn diff_impl(source: &str, target: &str, options: Option<&str>) -> Result<String, String> {
    let source = parse_value(source, "source")?;
    let target = parse_value(target, "target")?;
    let options = parse_options(options)?;
    let result = objcmp_core::diff(&source, &target, &options).map_err(|e| e.to_string())?;
    serde_json::to_string(&result).map_err(|e| format!("Serialization error: {}", e))
}

/// Structural equality of two JSON documents.
///
/// Throws a JS error if either argument is not valid JSON.
#[wasm_bindgen(js_name = "isEqual")]
pub fn is_equal(a: &str, b: &str) -> Result<bool, JsValue> {
    is_equal_impl(a, b).map_err(|e| JsValue::from_str(&e))
}

/// Classify the keys of two JSON documents.
///
/// Returns a JSON string `{"omittedKeys", "addedKeys", "sharedKeys", "altered"}`.
/// Throws if either document is invalid JSON or is not an object, array, or string.
#[wasm_bindgen]
pub fn diff(source: &str, target: &str, options: Option<String>) -> Result<String, JsValue> {
    diff_impl(source, target, options.as_deref()).map_err(|e| JsValue::from_str(&e))
}
