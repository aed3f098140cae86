//! REST List Page
//!
//! Follows the REST API's `next` links; search and sort run client side
//! over the items loaded so far.

use leptos::prelude::*;
use leptos::task::spawn_local;

use pokedex_core::client::RestClient;
use pokedex_core::filter::filter_items;
use pokedex_core::pagination::{ListQuery, PaginatedListSource, RestListSource};
use pokedex_core::scroll::ScrollOptions;

use super::{load_more_callback, reload_callback, use_list_source};
use crate::components::{ListContent, ListFilter, ListHeader};
use crate::context::use_app_context;
use crate::hooks::{use_debounced, use_filter_params};
use crate::store::ListStateStoreFields;

#[component]
pub fn RestListPage() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config.get_value();
    let limit = config.page_limit;
    let params = use_filter_params();

    let raw_query = Signal::derive(move || params.state.with(|s| s.query.clone()));
    let debounced = use_debounced(raw_query, config.search_debounce_ms);

    let source = RestListSource::new(RestClient::new(), config.rest_base_uri.clone(), ListQuery::with_limit(limit));
    let (source, store) = use_list_source(source);
    let first_page = source.get_value();
    spawn_local(async move { first_page.reload().await });

    let visible = Memo::new(move |_| {
        let query = debounced.get();
        let sort_key = params.state.with(|s| s.sort_key);
        store.items().with(|items| filter_items(items, &query, sort_key).items)
    });

    view! {
        <div class="list-layout">
            <ListHeader />
            <main class="list-main">
                <ListFilter params=params />
                <ListContent
                    items=visible
                    loading=Signal::derive(move || store.loading().get())
                    fetching_more=Signal::derive(move || store.is_fetching_more().get())
                    error=Signal::derive(move || store.error().get())
                    has_more=Signal::derive(move || store.has_more().get())
                    placeholder_count=limit
                    on_load_more=load_more_callback(source)
                    on_retry=reload_callback(source)
                    scroll_options=ScrollOptions {
                        root_margin: config.scroll_root_margin.clone(),
                        ..ScrollOptions::default()
                    }
                />
            </main>
        </div>
    }
}
