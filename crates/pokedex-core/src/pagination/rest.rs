//! REST Next-Link Pagination
//!
//! Follows the `next` URL handed back by the server verbatim; a null
//! `next` is the only end-of-list signal. Starting any fetch aborts the
//! one still in flight, so a stale reply can never land after a newer
//! request began.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use futures::future::{AbortHandle, Abortable};
use log::debug;

use super::{merge_unique, ListListener, ListQuery, ListSnapshot, PaginatedListSource, SourceState};
use crate::error::FetchResult;
use crate::models::ListItem;
use crate::wire;

/// One decoded REST list response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestPage {
    pub count: u32,
    pub next: Option<String>,
    pub items: Vec<ListItem>,
}

#[async_trait(?Send)]
pub trait RestPageFetcher {
    async fn fetch_url(&self, url: &str) -> FetchResult<RestPage>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum FetchMode {
    Initial,
    More,
}

pub struct RestListSource<F> {
    fetcher: F,
    base_url: String,
    query: RefCell<ListQuery>,
    next_url: RefCell<Option<String>>,
    /// Abort handle of the fetch currently in flight, tagged with its sequence number
    in_flight: RefCell<Option<(u64, AbortHandle)>>,
    sequence: Cell<u64>,
    started: Cell<bool>,
    state: SourceState,
}

impl<F: RestPageFetcher> RestListSource<F> {
    /// Only `query.limit` shapes the request; search and sort are applied
    /// client side over the accumulated items.
    pub fn new(fetcher: F, base_url: impl Into<String>, query: ListQuery) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
            query: RefCell::new(query),
            next_url: RefCell::new(None),
            in_flight: RefCell::new(None),
            sequence: Cell::new(0),
            started: Cell::new(false),
            state: SourceState::default(),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Next-page URL exactly as the server supplied it
    pub fn next_url(&self) -> Option<String> {
        self.next_url.borrow().clone()
    }

    fn first_page_url(&self) -> String {
        wire::rest_list_url(&self.base_url, self.query.borrow().limit, 0)
    }

    async fn fetch_page(&self, url: String, mode: FetchMode) {
        let sequence = self.sequence.get() + 1;
        self.sequence.set(sequence);

        let (handle, registration) = AbortHandle::new_pair();
        if let Some((previous, handle)) = self.in_flight.replace(Some((sequence, handle))) {
            debug!("[REST] Aborting fetch #{}", previous);
            handle.abort();
        }

        debug!("[REST] Fetch #{} ({:?}): {}", sequence, mode, url);
        self.state.update(|s| {
            match mode {
                FetchMode::Initial => {
                    *s = ListSnapshot {
                        loading: true,
                        ..ListSnapshot::default()
                    };
                }
                FetchMode::More => s.is_fetching_more = true,
            }
            s.error = None;
        });
        if mode == FetchMode::Initial {
            self.next_url.replace(None);
        }

        let result = match Abortable::new(self.fetcher.fetch_url(&url), registration).await {
            Ok(result) => result,
            Err(_aborted) => {
                debug!("[REST] Fetch #{} aborted", sequence);
                return;
            }
        };

        {
            let mut in_flight = self.in_flight.borrow_mut();
            if matches!(*in_flight, Some((current, _)) if current == sequence) {
                *in_flight = None;
            }
        }

        let next = match &result {
            Ok(page) => page.next.clone(),
            Err(_) => self.next_url(),
        };
        self.next_url.replace(next);

        self.state.update(|s| {
            s.loading = false;
            s.is_fetching_more = false;
            match result {
                Ok(page) => {
                    s.total_count = page.count;
                    s.has_more = page.next.is_some();
                    merge_unique(&mut s.items, page.items);
                }
                Err(e) => s.error = Some(e),
            }
        });
    }
}

#[async_trait(?Send)]
impl<F: RestPageFetcher> PaginatedListSource for RestListSource<F> {
    fn snapshot(&self) -> ListSnapshot {
        self.state.snapshot()
    }

    fn subscribe(&self, listener: ListListener) {
        self.state.subscribe(listener);
    }

    async fn set_query(&self, query: ListQuery) {
        let limit_changed = self.query.borrow().limit != query.limit;
        *self.query.borrow_mut() = query;
        if self.started.get() && !limit_changed {
            return;
        }
        self.started.set(true);
        let url = self.first_page_url();
        self.fetch_page(url, FetchMode::Initial).await;
    }

    async fn reload(&self) {
        self.started.set(true);
        let url = self.first_page_url();
        self.fetch_page(url, FetchMode::Initial).await;
    }

    async fn load_more(&self) {
        if !self.state.with(ListSnapshot::can_load_more) {
            return;
        }
        let Some(url) = self.next_url() else {
            return;
        };
        self.fetch_page(url, FetchMode::More).await;
    }
}
