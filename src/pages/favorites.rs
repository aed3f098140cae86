//! Favorites Page
//!
//! Saved favorites with client-side search and sort. Nothing to paginate.

use leptos::prelude::*;

use pokedex_core::filter::filter_items;
use pokedex_core::ListItem;

use crate::components::{ListContent, ListFilter, ListHeader};
use crate::context::use_app_context;
use crate::hooks::{use_debounced, use_filter_params};

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config.get_value();
    let params = use_filter_params();

    let raw_query = Signal::derive(move || params.state.with(|s| s.query.clone()));
    let debounced = use_debounced(raw_query, config.search_debounce_ms);

    let visible = Memo::new(move |_| {
        let query = debounced.get();
        let sort_key = params.state.with(|s| s.sort_key);
        let favorites = ctx.favorites();
        filter_items(&favorites, &query, sort_key)
            .items
            .iter()
            .map(ListItem::from)
            .collect::<Vec<_>>()
    });

    view! {
        <div class="list-layout">
            <ListHeader />
            <main class="list-main">
                <ListFilter params=params />
                <ListContent
                    items=visible
                    loading=false
                    fetching_more=false
                    error=Signal::stored(None)
                    has_more=false
                    placeholder_count=0
                    on_load_more=Callback::new(|_| {})
                />
            </main>
        </div>
    }
}
