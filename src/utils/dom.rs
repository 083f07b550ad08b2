//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Window;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Read a global set by the host page (`window.NAME`) as a string.
///
/// Strings are returned as-is, numbers and booleans are stringified.
/// `undefined`, `null` and other types count as unset.
pub fn global_string(name: &str) -> Option<String> {
    let window = window()?;
    let value = Reflect::get(&window, &JsValue::from_str(name)).ok()?;
    js_value_to_string(&value)
}

fn js_value_to_string(value: &JsValue) -> Option<String> {
    if let Some(s) = value.as_string() {
        Some(s)
    } else if let Some(n) = value.as_f64() {
        Some(n.to_string())
    } else {
        value.as_bool().map(|b| b.to_string())
    }
}
