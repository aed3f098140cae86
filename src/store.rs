//! List Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each list page
//! owns one store, fed by its list source's change notifications.

use leptos::prelude::*;
use reactive_stores::Store;

use pokedex_core::pagination::ListSnapshot;
use pokedex_core::{FetchError, ListItem};

/// Rendered state of one infinite list
#[derive(Clone, Debug, Default, Store)]
pub struct ListState {
    /// Accumulated items, before any client-side filtering
    pub items: Vec<ListItem>,
    pub total_count: u32,
    pub loading: bool,
    pub is_fetching_more: bool,
    pub has_more: bool,
    pub error: Option<FetchError>,
}

/// Type alias for the store
pub type ListStore = Store<ListState>;

// ========================
// Store Helper Functions
// ========================

/// Copy a source snapshot into the store, touching only changed fields
pub fn store_apply_snapshot(store: &ListStore, snapshot: &ListSnapshot) {
    if store.items().with_untracked(|items| *items != snapshot.items) {
        store.items().set(snapshot.items.clone());
    }
    if store.total_count().get_untracked() != snapshot.total_count {
        store.total_count().set(snapshot.total_count);
    }
    if store.loading().get_untracked() != snapshot.loading {
        store.loading().set(snapshot.loading);
    }
    if store.is_fetching_more().get_untracked() != snapshot.is_fetching_more {
        store.is_fetching_more().set(snapshot.is_fetching_more);
    }
    if store.has_more().get_untracked() != snapshot.has_more {
        store.has_more().set(snapshot.has_more);
    }
    if store.error().with_untracked(|e| *e != snapshot.error) {
        store.error().set(snapshot.error.clone());
    }
}
