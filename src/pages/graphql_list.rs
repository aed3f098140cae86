//! GraphQL List Page
//!
//! Server-side search, type filter and ordering over offset pagination.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};

use pokedex_core::catalog::{type_options, TypeFetcher};
use pokedex_core::client::GraphqlClient;
use pokedex_core::filter::validate_query;
use pokedex_core::pagination::{GraphqlListSource, PaginatedListSource};
use pokedex_core::scroll::ScrollOptions;

use super::{load_more_callback, reload_callback, use_list_source};
use crate::components::{ListContent, ListFilter, ListHeader, TypeSelector};
use crate::context::use_app_context;
use crate::hooks::{use_debounced, use_filter_params, use_mounted};
use crate::store::ListStateStoreFields;

#[component]
pub fn GraphqlListPage() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config.get_value();
    let limit = config.page_limit;
    let params = use_filter_params();
    let mounted = use_mounted();

    let raw_query = Signal::derive(move || params.state.with(|s| s.query.clone()));
    let debounced = use_debounced(raw_query, config.search_debounce_ms);

    let client = GraphqlClient::new(config.graphql_uri.clone());
    let initial = params.state.with_untracked(|s| s.list_query("", limit));
    let (source, store) = use_list_source(GraphqlListSource::new(client.clone(), initial));

    // Restart from the first page whenever server-side parameters change;
    // unchanged parameters are a no-op inside the source
    Effect::new(move |_| {
        let search = debounced.get();
        let search = if validate_query(&search) { search } else { String::new() };
        let query = params.state.with(|s| s.list_query(&search, limit));
        let source = source.get_value();
        spawn_local(async move { source.set_query(query).await });
    });

    // Type catalog
    let (types, set_types) = signal(type_options(&[]));
    let (loading_types, set_loading_types) = signal(true);
    spawn_local(async move {
        match client.fetch_types().await {
            Ok(names) if mounted.get() => {
                info!("[APP] Loaded {} types", names.len());
                set_types.set(type_options(&names));
            }
            Ok(_) => {}
            Err(e) => warn!("[APP] Type list unavailable: {}", e),
        }
        if mounted.get() {
            set_loading_types.set(false);
        }
    });

    view! {
        <div class="list-layout">
            <ListHeader />
            <main class="list-main">
                <ListFilter params=params>
                    <TypeSelector
                        options=types
                        current_type=Signal::derive(move || params.state.with(|s| s.type_filter.clone()))
                        disabled=loading_types
                        on_change=move |value| params.set_type(value)
                    />
                </ListFilter>
                <ListContent
                    items=Signal::derive(move || store.items().get())
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
