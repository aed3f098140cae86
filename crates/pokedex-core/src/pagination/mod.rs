//! Paginated List Sources
//!
//! Two infinite-list strategies behind one interface: GraphQL offset
//! pagination bounded by an aggregate count, and REST pagination that
//! follows the server's `next` link. Both accumulate items across pages,
//! deduplicated by id, and allow at most one "more" fetch in flight.

mod graphql;
mod rest;

#[cfg(test)]
mod tests;

pub use graphql::{GraphqlListSource, GraphqlPageFetcher, ListPage, PageRequest};
pub use rest::{RestListSource, RestPage, RestPageFetcher};

use std::cell::RefCell;
use std::collections::HashSet;

use async_trait::async_trait;

use crate::catalog::ALL_TYPES;
use crate::error::FetchError;
use crate::models::{ListItem, SortKey};

/// Page size used when the caller does not pick one
pub const DEFAULT_LIMIT: u32 = 20;

/// Parameters that define a result set. Changing any of them restarts
/// pagination from the first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub limit: u32,
    pub search: String,
    pub type_filter: String,
    pub sort_key: SortKey,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            search: String::new(),
            type_filter: ALL_TYPES.to_string(),
            sort_key: SortKey::Name,
        }
    }
}

impl ListQuery {
    pub fn with_limit(limit: u32) -> Self {
        Self { limit, ..Self::default() }
    }
}

/// Observable state of a list source
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListSnapshot {
    pub items: Vec<ListItem>,
    pub total_count: u32,
    /// First page of the current parameter set is in flight
    pub loading: bool,
    /// A subsequent page is in flight
    pub is_fetching_more: bool,
    pub error: Option<FetchError>,
    pub has_more: bool,
}

impl ListSnapshot {
    pub fn can_load_more(&self) -> bool {
        self.has_more && !self.loading && !self.is_fetching_more
    }
}

pub type ListListener = Box<dyn Fn(&ListSnapshot)>;

/// Common contract of both pagination strategies
#[async_trait(?Send)]
pub trait PaginatedListSource {
    fn snapshot(&self) -> ListSnapshot;

    /// Listeners run after every state change and must not subscribe
    /// further listeners from inside the callback.
    fn subscribe(&self, listener: ListListener);

    /// Apply new parameters. Fetches the first page when they differ from
    /// the current ones, or when nothing has been fetched yet.
    async fn set_query(&self, query: ListQuery);

    /// Refetch the first page of the current parameters
    async fn reload(&self);

    /// Fetch the next page. No-op while loading, while another page is in
    /// flight, or when the end has been reached.
    async fn load_more(&self);
}

/// Append `incoming` items whose id is not present yet, keeping order.
/// Returns how many were appended.
pub fn merge_unique(existing: &mut Vec<ListItem>, incoming: impl IntoIterator<Item = ListItem>) -> usize {
    let mut seen: HashSet<u32> = existing.iter().map(|item| item.id).collect();
    let before = existing.len();
    existing.extend(incoming.into_iter().filter(|item| seen.insert(item.id)));
    existing.len() - before
}

/// Snapshot cell with change notification
#[derive(Default)]
pub(crate) struct SourceState {
    snapshot: RefCell<ListSnapshot>,
    listeners: RefCell<Vec<ListListener>>,
}

impl SourceState {
    pub(crate) fn snapshot(&self) -> ListSnapshot {
        self.snapshot.borrow().clone()
    }

    pub(crate) fn with<R>(&self, f: impl FnOnce(&ListSnapshot) -> R) -> R {
        f(&self.snapshot.borrow())
    }

    pub(crate) fn subscribe(&self, listener: ListListener) {
        self.listeners.borrow_mut().push(listener);
    }

    pub(crate) fn update(&self, f: impl FnOnce(&mut ListSnapshot)) {
        f(&mut self.snapshot.borrow_mut());
        let snapshot = self.snapshot();
        for listener in self.listeners.borrow().iter() {
            listener(&snapshot);
        }
    }
}
