//! GraphQL Offset Pagination
//!
//! The next offset is the number of items already accumulated, and
//! `has_more` compares that count with the aggregate row count returned
//! next to each page.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use log::debug;

use super::{merge_unique, ListListener, ListQuery, ListSnapshot, PaginatedListSource, SourceState};
use crate::catalog::ALL_TYPES;
use crate::error::FetchResult;
use crate::filter::MIN_QUERY_LEN;
use crate::models::{ListItem, SortKey};

/// One page request as sent to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u32,
    pub offset: u32,
    /// Name substring; only set for searches of at least 3 characters
    pub search: Option<String>,
    /// Exact type name; `None` means all types
    pub type_filter: Option<String>,
    pub sort_key: SortKey,
}

impl PageRequest {
    pub fn new(query: &ListQuery, offset: u32) -> Self {
        let search = query.search.trim();
        let type_filter = query.type_filter.trim();
        Self {
            limit: query.limit,
            offset,
            search: (search.chars().count() >= MIN_QUERY_LEN).then(|| search.to_string()),
            type_filter: (!type_filter.is_empty() && type_filter != ALL_TYPES).then(|| type_filter.to_string()),
            sort_key: query.sort_key,
        }
    }
}

/// A page of rows plus the aggregate count for the whole filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPage {
    pub items: Vec<ListItem>,
    pub total_count: u32,
}

#[async_trait(?Send)]
pub trait GraphqlPageFetcher {
    async fn fetch_page(&self, request: &PageRequest) -> FetchResult<ListPage>;
}

pub struct GraphqlListSource<F> {
    fetcher: F,
    query: RefCell<ListQuery>,
    /// Bumped on every first-page fetch; replies from older generations are dropped
    generation: Cell<u64>,
    started: Cell<bool>,
    state: SourceState,
}

impl<F: GraphqlPageFetcher> GraphqlListSource<F> {
    pub fn new(fetcher: F, query: ListQuery) -> Self {
        Self {
            fetcher,
            query: RefCell::new(query),
            generation: Cell::new(0),
            started: Cell::new(false),
            state: SourceState::default(),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn query(&self) -> ListQuery {
        self.query.borrow().clone()
    }

    async fn fetch_first_page(&self) {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.started.set(true);

        let request = PageRequest::new(&self.query.borrow(), 0);
        debug!("[GRAPHQL] Loading first page: {:?}", request);
        self.state.update(|s| {
            *s = ListSnapshot {
                loading: true,
                ..ListSnapshot::default()
            };
        });

        let result = self.fetcher.fetch_page(&request).await;
        if self.generation.get() != generation {
            debug!("[GRAPHQL] Dropping first page of stale generation {}", generation);
            return;
        }

        self.state.update(|s| {
            s.loading = false;
            match result {
                Ok(page) => {
                    merge_unique(&mut s.items, page.items);
                    s.total_count = page.total_count;
                    s.has_more = (s.items.len() as u32) < s.total_count;
                }
                Err(e) => s.error = Some(e),
            }
        });
    }
}

#[async_trait(?Send)]
impl<F: GraphqlPageFetcher> PaginatedListSource for GraphqlListSource<F> {
    fn snapshot(&self) -> ListSnapshot {
        self.state.snapshot()
    }

    fn subscribe(&self, listener: ListListener) {
        self.state.subscribe(listener);
    }

    async fn set_query(&self, query: ListQuery) {
        if self.started.get() && *self.query.borrow() == query {
            return;
        }
        *self.query.borrow_mut() = query;
        self.fetch_first_page().await;
    }

    async fn reload(&self) {
        self.fetch_first_page().await;
    }

    async fn load_more(&self) {
        let offset = match self.state.with(|s| s.can_load_more().then(|| s.items.len() as u32)) {
            Some(offset) => offset,
            None => return,
        };
        let generation = self.generation.get();
        let request = PageRequest::new(&self.query.borrow(), offset);
        debug!("[GRAPHQL] Loading more at offset {}", offset);
        self.state.update(|s| {
            s.is_fetching_more = true;
            s.error = None;
        });

        let result = self.fetcher.fetch_page(&request).await;
        if self.generation.get() != generation {
            debug!("[GRAPHQL] Dropping page at offset {} of stale generation", offset);
            return;
        }

        self.state.update(|s| {
            s.is_fetching_more = false;
            match result {
                Ok(page) => {
                    let added = merge_unique(&mut s.items, page.items);
                    debug!("[GRAPHQL] Merged {} new items", added);
                    s.total_count = page.total_count;
                    s.has_more = (s.items.len() as u32) < s.total_count;
                }
                Err(e) => s.error = Some(e),
            }
        });
    }
}
