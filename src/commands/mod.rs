//! Browser Command Wrappers
//!
//! Thin bindings to browser APIs the views depend on, organized by domain.

mod storage;
mod location;

use wasm_bindgen::JsValue;

/// Readable message for a thrown JS value
fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

// Re-export all public items
pub use storage::*;
pub use location::*;
