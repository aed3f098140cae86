//! Pokédex Core
//!
//! Platform-independent catalog logic shared by the browser frontend:
//! favorites persistence, search filtering, debouncing, and the two
//! infinite-pagination list sources (GraphQL offset and REST next-link).

pub mod catalog;
pub mod client;
pub mod config;
pub mod debounce;
pub mod detail;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod models;
pub mod pagination;
pub mod params;
pub mod scroll;
pub mod storage;
pub mod wire;

pub use error::{FetchError, FetchResult, StorageError};
pub use models::{FavoriteEntry, ListItem, SortKey};
