//! Storage Commands
//!
//! `window.localStorage` as a favorites backend.

use pokedex_core::storage::KeyValueStore;
use pokedex_core::StorageError;

use super::js_error;

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| StorageError::Unavailable(js_error(&e)))?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
}

/// Zero-sized handle; the storage object is looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(js_error(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(js_error(&e)))
    }
}
