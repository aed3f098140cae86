//! Location Commands
//!
//! Path and query string access through `window.location` and
//! `window.history`.

use wasm_bindgen::JsValue;

use super::js_error;

fn history() -> Result<web_sys::History, String> {
    web_sys::window()
        .ok_or_else(|| "no window".to_string())?
        .history()
        .map_err(|e| js_error(&e))
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Raw `?...` part of the current URL, possibly empty
pub fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Add a history entry for `path` (no reload)
pub fn push_path(path: &str) -> Result<(), String> {
    history()?
        .push_state_with_url(&JsValue::NULL, "", Some(path))
        .map_err(|e| js_error(&e))
}

/// Rewrite the current entry's path, dropping its query string
pub fn replace_path(path: &str) -> Result<(), String> {
    history()?
        .replace_state_with_url(&JsValue::NULL, "", Some(path))
        .map_err(|e| js_error(&e))
}

/// Rewrite the current entry's query string, keeping the path
pub fn replace_query(query: &str) -> Result<(), String> {
    let path = current_path();
    let url = if query.is_empty() {
        path
    } else {
        format!("{}?{}", path, query)
    };
    history()?
        .replace_state_with_url(&JsValue::NULL, "", Some(&url))
        .map_err(|e| js_error(&e))
}
