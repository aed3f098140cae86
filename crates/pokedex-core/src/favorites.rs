//! Favorites Registry
//!
//! In-memory favorites list loaded once from the store. Every toggle
//! rewrites the full list; memory stays the source of truth when the
//! write fails.

use log::debug;

use crate::error::StorageError;
use crate::models::FavoriteEntry;
use crate::storage::{FavoritesStore, KeyValueStore};

/// What a toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

pub struct FavoritesRegistry<S> {
    store: FavoritesStore<S>,
    entries: Vec<FavoriteEntry>,
    last_persist_error: Option<StorageError>,
}

impl<S: KeyValueStore> FavoritesRegistry<S> {
    /// Load the registry from persisted state. Duplicate ids left behind
    /// by a hand-edited store keep their first occurrence.
    pub fn load(store: FavoritesStore<S>) -> Self {
        let mut entries: Vec<FavoriteEntry> = Vec::new();
        for entry in store.read() {
            if !entries.iter().any(|fav| fav.id == entry.id) {
                entries.push(entry);
            }
        }
        debug!("[FAVORITES] Loaded {} favorites", entries.len());
        Self {
            store,
            entries,
            last_persist_error: None,
        }
    }

    /// Remove the entry with the same id, or append `entry`
    pub fn toggle(&mut self, entry: FavoriteEntry) -> ToggleOutcome {
        let outcome = match self.entries.iter().position(|fav| fav.id == entry.id) {
            Some(pos) => {
                self.entries.remove(pos);
                ToggleOutcome::Removed
            }
            None => {
                self.entries.push(entry);
                ToggleOutcome::Added
            }
        };
        self.last_persist_error = self.store.write(&self.entries).err();
        outcome
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.entries.iter().any(|fav| fav.id == id)
    }

    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Failure of the most recent write, if it failed
    pub fn last_persist_error(&self) -> Option<&StorageError> {
        self.last_persist_error.as_ref()
    }

    pub fn store(&self) -> &FavoritesStore<S> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, FAVORITES_KEY};
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn registry_with(raw: Option<&str>) -> (FavoritesRegistry<MemoryStore>, MemoryStore) {
        let backend = MemoryStore::new();
        if let Some(raw) = raw {
            backend.insert_raw(FAVORITES_KEY, raw);
        }
        let registry = FavoritesRegistry::load(FavoritesStore::new(backend.clone()));
        (registry, backend)
    }

    #[test]
    fn test_load_from_storage() {
        let (registry, _) = registry_with(Some(r#"[{"id":1,"name":"bulbasaur"},{"id":4,"name":"charmander"}]"#));
        assert_eq!(registry.len(), 2);
        assert!(registry.is_favorite(4));
        assert!(!registry.is_favorite(7));
    }

    #[test]
    fn test_load_drops_duplicate_ids() {
        let (registry, _) = registry_with(Some(r#"[{"id":1,"name":"a"},{"id":1,"name":"b"}]"#));
        assert_eq!(registry.entries(), &[FavoriteEntry::new(1, "a")]);
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let (mut registry, backend) = registry_with(None);

        assert_eq!(registry.toggle(FavoriteEntry::new(25, "pikachu")), ToggleOutcome::Added);
        assert!(registry.is_favorite(25));
        assert_eq!(backend.raw(FAVORITES_KEY).unwrap(), r#"[{"id":25,"name":"pikachu"}]"#);

        assert_eq!(registry.toggle(FavoriteEntry::new(25, "pikachu")), ToggleOutcome::Removed);
        assert!(!registry.is_favorite(25));
        assert_eq!(backend.raw(FAVORITES_KEY).unwrap(), "[]");
    }

    #[test]
    fn test_each_toggle_writes_once() {
        let (mut registry, backend) = registry_with(None);
        registry.toggle(FavoriteEntry::new(1, "bulbasaur"));
        registry.toggle(FavoriteEntry::new(2, "ivysaur"));
        registry.toggle(FavoriteEntry::new(1, "bulbasaur"));
        assert_eq!(backend.write_count(), 3);
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let (mut registry, backend) = registry_with(None);
        backend.set_fail_writes(true);

        registry.toggle(FavoriteEntry::new(1, "bulbasaur"));
        assert!(registry.is_favorite(1));
        assert!(registry.last_persist_error().is_some());
        assert!(backend.raw(FAVORITES_KEY).is_none());

        backend.set_fail_writes(false);
        registry.toggle(FavoriteEntry::new(2, "ivysaur"));
        assert!(registry.last_persist_error().is_none());
        assert_eq!(registry.store().read().len(), 2);
    }

    fn entry_strategy() -> impl Strategy<Value = FavoriteEntry> {
        (1u32..12, "[a-z]{3,8}").prop_map(|(id, name)| FavoriteEntry::new(id, name))
    }

    proptest! {
        #[test]
        fn prop_toggles_never_duplicate_ids(toggles in prop::collection::vec(entry_strategy(), 0..40)) {
            let (mut registry, _) = registry_with(None);
            for entry in toggles {
                registry.toggle(entry);
                let unique: HashSet<u32> = registry.entries().iter().map(|f| f.id).collect();
                prop_assert_eq!(unique.len(), registry.len());
            }
        }

        #[test]
        fn prop_toggle_pair_is_identity(
            existing in prop::collection::vec(entry_strategy(), 0..8),
            name in "[a-z]{3,8}",
        ) {
            let mut initial: Vec<FavoriteEntry> = Vec::new();
            for entry in existing {
                if !initial.iter().any(|f| f.id == entry.id) {
                    initial.push(entry);
                }
            }
            let raw = serde_json::to_string(&initial).unwrap();
            let (mut registry, backend) = registry_with(Some(raw.as_str()));

            // ids 1..12 are the only ones generated above
            let fresh = FavoriteEntry::new(100, name);
            registry.toggle(fresh.clone());
            registry.toggle(fresh);

            prop_assert_eq!(registry.entries(), initial.as_slice());
            prop_assert_eq!(backend.raw(FAVORITES_KEY).unwrap(), raw);
        }
    }
}
