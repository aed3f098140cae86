//! List Source Tests
//!
//! Scripted fetchers replay canned pages; gated replies stay pending
//! until the test releases them, which lets requests overlap.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::{pin_mut, poll};

use super::*;
use crate::error::{FetchError, FetchResult};
use crate::models::ListItem;

enum Reply<T> {
    Ready(FetchResult<T>),
    Gated(oneshot::Receiver<FetchResult<T>>),
}

struct Script<T> {
    replies: RefCell<VecDeque<Reply<T>>>,
    calls: Cell<usize>,
}

impl<T> Script<T> {
    fn new() -> Self {
        Self {
            replies: RefCell::new(VecDeque::new()),
            calls: Cell::new(0),
        }
    }

    fn ready(&self, reply: FetchResult<T>) {
        self.replies.borrow_mut().push_back(Reply::Ready(reply));
    }

    fn gated(&self) -> oneshot::Sender<FetchResult<T>> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(Reply::Gated(rx));
        tx
    }

    async fn next(&self) -> FetchResult<T> {
        self.calls.set(self.calls.get() + 1);
        let reply = self.replies.borrow_mut().pop_front();
        match reply {
            Some(Reply::Ready(result)) => result,
            Some(Reply::Gated(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(FetchError::Network("gate dropped".to_string()))),
            None => Err(FetchError::Network("no scripted reply".to_string())),
        }
    }
}

fn items(range: std::ops::RangeInclusive<u32>) -> Vec<ListItem> {
    range.map(|id| ListItem::new(id, format!("mon-{}", id))).collect()
}

fn ids(snapshot: &ListSnapshot) -> Vec<u32> {
    snapshot.items.iter().map(|i| i.id).collect()
}

// ========================
// GraphQL
// ========================

struct GraphqlScript {
    script: Script<ListPage>,
    requests: RefCell<Vec<PageRequest>>,
}

impl GraphqlScript {
    fn new() -> Self {
        Self {
            script: Script::new(),
            requests: RefCell::new(Vec::new()),
        }
    }

    fn page(&self, items: Vec<ListItem>, total_count: u32) {
        self.script.ready(Ok(ListPage { items, total_count }));
    }
}

#[async_trait(?Send)]
impl GraphqlPageFetcher for GraphqlScript {
    async fn fetch_page(&self, request: &PageRequest) -> FetchResult<ListPage> {
        self.requests.borrow_mut().push(request.clone());
        self.script.next().await
    }
}

fn graphql_source(limit: u32) -> GraphqlListSource<GraphqlScript> {
    GraphqlListSource::new(GraphqlScript::new(), ListQuery::with_limit(limit))
}

#[tokio::test]
async fn test_graphql_first_page() {
    let source = graphql_source(3);
    source.fetcher().page(items(1..=3), 5);

    source.reload().await;
    let snapshot = source.snapshot();
    assert_eq!(ids(&snapshot), vec![1, 2, 3]);
    assert_eq!(snapshot.total_count, 5);
    assert!(snapshot.has_more);
    assert!(!snapshot.loading);
    assert!(snapshot.error.is_none());
}

#[tokio::test]
async fn test_graphql_offset_is_accumulated_count() {
    let source = graphql_source(3);
    source.fetcher().page(items(1..=3), 5);
    source.fetcher().page(items(4..=5), 5);

    source.reload().await;
    source.load_more().await;

    let requests = source.fetcher().requests.borrow();
    assert_eq!(requests[0].offset, 0);
    assert_eq!(requests[1].offset, 3);
    assert_eq!(requests[1].limit, 3);
}

#[tokio::test]
async fn test_graphql_has_more_false_at_total() {
    let source = graphql_source(3);
    source.fetcher().page(items(1..=3), 5);
    source.fetcher().page(items(4..=5), 5);

    source.reload().await;
    source.load_more().await;
    let snapshot = source.snapshot();
    assert_eq!(ids(&snapshot), vec![1, 2, 3, 4, 5]);
    assert!(!snapshot.has_more);

    // Exhausted: no further request
    source.load_more().await;
    assert_eq!(source.fetcher().script.calls.get(), 2);
}

#[tokio::test]
async fn test_graphql_dedupes_repeated_ids() {
    let source = graphql_source(3);
    source.fetcher().page(items(1..=3), 6);
    source.fetcher().page(items(3..=5), 6);

    source.reload().await;
    source.load_more().await;
    let snapshot = source.snapshot();
    assert_eq!(ids(&snapshot), vec![1, 2, 3, 4, 5]);
    assert!(snapshot.has_more);
}

#[tokio::test]
async fn test_graphql_load_more_while_in_flight_is_noop() {
    let source = graphql_source(3);
    source.fetcher().page(items(1..=3), 9);
    source.reload().await;

    let gate = source.fetcher().script.gated();
    let pending = source.load_more();
    pin_mut!(pending);
    assert!(poll!(&mut pending).is_pending());
    assert!(source.snapshot().is_fetching_more);

    source.load_more().await;
    source.load_more().await;
    assert_eq!(source.fetcher().script.calls.get(), 2);

    let _ = gate.send(Ok(ListPage { items: items(4..=6), total_count: 9 }));
    pending.await;
    let snapshot = source.snapshot();
    assert_eq!(ids(&snapshot), vec![1, 2, 3, 4, 5, 6]);
    assert!(!snapshot.is_fetching_more);
}

#[tokio::test]
async fn test_graphql_load_more_while_loading_is_noop() {
    let source = graphql_source(3);
    let gate = source.fetcher().script.gated();

    let first = source.reload();
    pin_mut!(first);
    assert!(poll!(&mut first).is_pending());
    assert!(source.snapshot().loading);

    source.load_more().await;
    assert_eq!(source.fetcher().script.calls.get(), 1);

    let _ = gate.send(Ok(ListPage { items: items(1..=3), total_count: 3 }));
    first.await;
    assert!(!source.snapshot().loading);
}

#[tokio::test]
async fn test_graphql_query_change_resets() {
    let source = graphql_source(3);
    source.fetcher().page(items(1..=3), 9);
    source.fetcher().page(items(4..=6), 9);
    source.fetcher().page(vec![ListItem::new(4, "charmander"), ListItem::new(5, "charmeleon")], 2);

    source.set_query(ListQuery::with_limit(3)).await;
    source.load_more().await;
    assert_eq!(source.snapshot().items.len(), 6);

    let query = ListQuery {
        search: "char".to_string(),
        type_filter: "fire".to_string(),
        ..ListQuery::with_limit(3)
    };
    source.set_query(query.clone()).await;
    let snapshot = source.snapshot();
    assert_eq!(ids(&snapshot), vec![4, 5]);
    assert!(!snapshot.has_more);

    let requests = source.fetcher().requests.borrow();
    let last = requests.last().unwrap();
    assert_eq!(last.offset, 0);
    assert_eq!(last.search.as_deref(), Some("char"));
    assert_eq!(last.type_filter.as_deref(), Some("fire"));
    drop(requests);

    // Same parameters again: nothing refetched
    source.set_query(query).await;
    assert_eq!(source.fetcher().script.calls.get(), 3);
}

#[test]
fn test_graphql_short_search_not_sent() {
    let request = PageRequest::new(
        &ListQuery {
            search: " ch ".to_string(),
            ..ListQuery::default()
        },
        0,
    );
    assert_eq!(request.search, None);
    assert_eq!(request.type_filter, None);
}

#[tokio::test]
async fn test_graphql_stale_generation_dropped() {
    let source = graphql_source(3);
    let stale_gate = source.fetcher().script.gated();
    source.fetcher().page(items(10..=11), 2);

    let stale = source.reload();
    pin_mut!(stale);
    assert!(poll!(&mut stale).is_pending());

    source
        .set_query(ListQuery {
            search: "mon".to_string(),
            ..ListQuery::with_limit(3)
        })
        .await;

    let _ = stale_gate.send(Ok(ListPage { items: items(1..=3), total_count: 100 }));
    stale.await;
    let snapshot = source.snapshot();
    assert_eq!(ids(&snapshot), vec![10, 11]);
    assert_eq!(snapshot.total_count, 2);
}

#[tokio::test]
async fn test_graphql_error_keeps_items() {
    let source = graphql_source(3);
    source.fetcher().page(items(1..=3), 9);
    source.fetcher().script.ready(Err(FetchError::Status {
        status: 500,
        message: "boom".to_string(),
    }));

    source.reload().await;
    source.load_more().await;
    let snapshot = source.snapshot();
    assert_eq!(ids(&snapshot), vec![1, 2, 3]);
    assert!(matches!(snapshot.error, Some(FetchError::Status { status: 500, .. })));
    assert!(!snapshot.loading);
    assert!(!snapshot.is_fetching_more);
}

#[tokio::test]
async fn test_graphql_error_cleared_by_next_page() {
    let source = graphql_source(3);
    source.fetcher().page(items(1..=3), 9);
    source.fetcher().script.ready(Err(FetchError::Network("offline".to_string())));
    source.fetcher().page(items(4..=6), 9);

    source.reload().await;
    source.load_more().await;
    assert!(source.snapshot().error.is_some());

    source.load_more().await;
    let snapshot = source.snapshot();
    assert_eq!(ids(&snapshot), vec![1, 2, 3, 4, 5, 6]);
    assert!(snapshot.error.is_none());
    assert!(snapshot.has_more);
}

#[tokio::test]
async fn test_listeners_see_loading_transitions() {
    let source = graphql_source(3);
    source.fetcher().page(items(1..=3), 3);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = seen.clone();
    source.subscribe(Box::new(move |s| log.borrow_mut().push((s.loading, s.items.len()))));

    source.reload().await;
    assert_eq!(*seen.borrow(), vec![(true, 0), (false, 3)]);
}

// ========================
// REST
// ========================

const BASE: &str = "https://pokeapi.co/api/v2";

struct RestScript {
    script: Script<RestPage>,
    urls: RefCell<Vec<String>>,
}

impl RestScript {
    fn new() -> Self {
        Self {
            script: Script::new(),
            urls: RefCell::new(Vec::new()),
        }
    }

    fn page(&self, items: Vec<ListItem>, next: Option<&str>) {
        self.script.ready(Ok(RestPage {
            count: 1302,
            next: next.map(String::from),
            items,
        }));
    }
}

#[async_trait(?Send)]
impl RestPageFetcher for RestScript {
    async fn fetch_url(&self, url: &str) -> FetchResult<RestPage> {
        self.urls.borrow_mut().push(url.to_string());
        self.script.next().await
    }
}

fn rest_source(limit: u32) -> RestListSource<RestScript> {
    RestListSource::new(RestScript::new(), BASE, ListQuery::with_limit(limit))
}

#[tokio::test]
async fn test_rest_follows_next_link_verbatim() {
    let source = rest_source(2);
    let next = "https://pokeapi.co/api/v2/pokemon?offset=2&limit=2&token=opaque";
    source.fetcher().page(items(1..=2), Some(next));
    source.fetcher().page(items(3..=4), None);

    source.reload().await;
    assert!(source.snapshot().has_more);
    assert_eq!(source.next_url().as_deref(), Some(next));

    source.load_more().await;
    let urls = source.fetcher().urls.borrow();
    assert_eq!(urls[0], "https://pokeapi.co/api/v2/pokemon?limit=2&offset=0");
    assert_eq!(urls[1], next);
    drop(urls);

    let snapshot = source.snapshot();
    assert_eq!(ids(&snapshot), vec![1, 2, 3, 4]);
    assert!(!snapshot.has_more);
    assert_eq!(snapshot.total_count, 1302);

    // Null next is terminal
    source.load_more().await;
    assert_eq!(source.fetcher().script.calls.get(), 2);
}

#[tokio::test]
async fn test_rest_dedupes_repeated_ids() {
    let source = rest_source(3);
    source.fetcher().page(items(1..=3), Some("https://pokeapi.co/api/v2/pokemon?offset=3&limit=3"));
    source.fetcher().page(items(2..=4), None);

    source.reload().await;
    source.load_more().await;
    assert_eq!(ids(&source.snapshot()), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_rest_load_more_while_in_flight_is_noop() {
    let source = rest_source(2);
    source.fetcher().page(items(1..=2), Some("https://pokeapi.co/api/v2/pokemon?offset=2&limit=2"));
    source.reload().await;

    let gate = source.fetcher().script.gated();
    let pending = source.load_more();
    pin_mut!(pending);
    assert!(poll!(&mut pending).is_pending());

    source.load_more().await;
    assert_eq!(source.fetcher().script.calls.get(), 2);

    let _ = gate.send(Ok(RestPage { count: 4, next: None, items: items(3..=4) }));
    pending.await;
    assert_eq!(ids(&source.snapshot()), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_rest_new_fetch_aborts_previous() {
    let source = rest_source(2);
    let stale_gate = source.fetcher().script.gated();
    source.fetcher().page(items(1..=5), None);

    let stale = source.reload();
    pin_mut!(stale);
    assert!(poll!(&mut stale).is_pending());

    // New limit restarts from the first page and aborts the pending one
    source.set_query(ListQuery::with_limit(5)).await;
    assert_eq!(ids(&source.snapshot()), vec![1, 2, 3, 4, 5]);

    let _ = stale_gate.send(Ok(RestPage {
        count: 2,
        next: Some("https://pokeapi.co/api/v2/pokemon?offset=2&limit=2".to_string()),
        items: items(90..=91),
    }));
    stale.await;

    let snapshot = source.snapshot();
    assert_eq!(ids(&snapshot), vec![1, 2, 3, 4, 5]);
    assert!(!snapshot.has_more);
    assert!(!snapshot.loading);
    assert!(snapshot.error.is_none());
    assert_eq!(source.next_url(), None);
}

#[tokio::test]
async fn test_rest_search_change_does_not_refetch() {
    let source = rest_source(2);
    source.fetcher().page(items(1..=2), None);

    source.set_query(ListQuery::with_limit(2)).await;
    source
        .set_query(ListQuery {
            search: "bulb".to_string(),
            sort_key: crate::models::SortKey::Id,
            ..ListQuery::with_limit(2)
        })
        .await;
    assert_eq!(source.fetcher().script.calls.get(), 1);
}

#[tokio::test]
async fn test_rest_error_surfaces_and_keeps_items() {
    let source = rest_source(2);
    let next = "https://pokeapi.co/api/v2/pokemon?offset=2&limit=2";
    source.fetcher().page(items(1..=2), Some(next));
    source.fetcher().script.ready(Err(FetchError::Network("offline".to_string())));

    source.reload().await;
    source.load_more().await;
    let snapshot = source.snapshot();
    assert_eq!(ids(&snapshot), vec![1, 2]);
    assert_eq!(snapshot.error, Some(FetchError::Network("offline".to_string())));
    assert!(!snapshot.is_fetching_more);
    assert_eq!(source.next_url().as_deref(), Some(next));
}

#[test]
fn test_merge_unique() {
    let mut existing = items(1..=3);
    let added = merge_unique(&mut existing, vec![ListItem::new(3, "dup"), ListItem::new(4, "new"), ListItem::new(4, "again")]);
    assert_eq!(added, 1);
    assert_eq!(existing.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(existing[2].name, "mon-3");
}
