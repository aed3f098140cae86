//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use log::{info, warn};

use pokedex_core::config::AppConfig;
use pokedex_core::favorites::{FavoritesRegistry, ToggleOutcome};
use pokedex_core::storage::FavoritesStore;
use pokedex_core::FavoriteEntry;

use crate::commands::{self, BrowserStorage};
use crate::route::Route;

pub type Favorites = FavoritesRegistry<BrowserStorage>;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Endpoints and tuning, fixed for the app's lifetime
    pub config: StoredValue<AppConfig>,
    /// Current page
    pub route: RwSignal<Route>,
    /// Favorites registry, loaded once from local storage
    favorites: RwSignal<Favorites>,
}

impl AppContext {
    pub fn new(config: AppConfig, route: Route) -> Self {
        let registry = FavoritesRegistry::load(FavoritesStore::new(BrowserStorage));
        info!("[APP] Loaded {} favorites", registry.len());
        Self {
            config: StoredValue::new(config),
            route: RwSignal::new(route),
            favorites: RwSignal::new(registry),
        }
    }

    /// Move to another page, adding a history entry
    pub fn navigate(&self, route: Route) {
        if let Err(e) = commands::push_path(&route.path()) {
            warn!("[APP] pushState failed: {}", e);
        }
        self.route.set(route);
    }

    /// Tracked membership check
    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.with(|r| r.is_favorite(id))
    }

    /// Tracked snapshot of all favorites, in insertion order
    pub fn favorites(&self) -> Vec<FavoriteEntry> {
        self.favorites.with(|r| r.entries().to_vec())
    }

    pub fn toggle_favorite(&self, entry: FavoriteEntry) {
        self.favorites.update(|r| {
            let id = entry.id;
            match r.toggle(entry) {
                ToggleOutcome::Added => info!("[APP] Added favorite {}", id),
                ToggleOutcome::Removed => info!("[APP] Removed favorite {}", id),
            }
            if let Some(e) = r.last_persist_error() {
                warn!("[APP] Favorite {} kept in memory only: {}", id, e);
            }
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
