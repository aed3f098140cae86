//! Local Favorites Store
//!
//! Whole-list persistence of favorites under a fixed namespace key.
//! Reads never fail and writes only report their failure; callers always
//! proceed with their in-memory state.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use log::{error, warn};

use crate::error::StorageError;
use crate::models::FavoriteEntry;

/// Storage key holding the JSON-serialized favorites list
pub const FAVORITES_KEY: &str = "pokedex_favorites";

/// Minimal string key-value backend (browser localStorage, memory, ...)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory backend. Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
    fail_reads: Rc<Cell<bool>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set` fail (simulates a full quota)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Make every subsequent `get` fail (simulates disabled storage)
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.get() {
            return Err(StorageError::Unavailable("reads disabled".to_string()));
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Write("quota exceeded".to_string()));
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Favorites persistence over any key-value backend
pub struct FavoritesStore<S> {
    backend: S,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read the persisted list; degraded storage yields an empty list
    pub fn read(&self) -> Vec<FavoriteEntry> {
        let raw = match self.backend.get(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("[FAVORITES] Storage unavailable, starting empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<FavoriteEntry>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("[FAVORITES] Ignoring malformed favorites: {}", e);
                Vec::new()
            }
        }
    }

    /// Persist the complete list. A failure is logged and handed back as
    /// a diagnostic; nothing is rolled back.
    pub fn write(&self, entries: &[FavoriteEntry]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(entries).map_err(|e| StorageError::Write(e.to_string()))?;
        self.backend.set(FAVORITES_KEY, &raw).map_err(|e| {
            error!("[FAVORITES] Error saving favorites: {}", e);
            e
        })
    }

    /// Append `entry` unless its id is already stored
    pub fn add(&self, entry: FavoriteEntry) -> Result<(), StorageError> {
        let mut entries = self.read();
        if entries.iter().any(|fav| fav.id == entry.id) {
            return Ok(());
        }
        entries.push(entry);
        self.write(&entries)
    }

    /// Drop the entry with `id`; absent ids are a no-op
    pub fn remove(&self, id: u32) -> Result<(), StorageError> {
        let entries = self.read();
        if !entries.iter().any(|fav| fav.id == id) {
            return Ok(());
        }
        let remaining: Vec<FavoriteEntry> = entries.into_iter().filter(|fav| fav.id != id).collect();
        self.write(&remaining)
    }

    pub fn has(&self, id: u32) -> bool {
        self.read().iter().any(|fav| fav.id == id)
    }
}
