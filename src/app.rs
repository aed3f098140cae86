//! Pokédex Frontend App
//!
//! Root component: builds the shared context once and switches pages on
//! the current route.

use leptos::ev;
use leptos::leptos_dom::helpers::window_event_listener;
use leptos::prelude::*;
use log::{info, warn};

use pokedex_core::config::AppConfig;

use crate::commands;
use crate::context::AppContext;
use crate::pages::{DetailPage, FavoritesPage, GraphqlListPage, RestListPage};
use crate::route::Route;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    info!("[APP] GraphQL at {}, REST at {}", config.graphql_uri, config.rest_base_uri);

    // Unknown paths land on the list
    let path = commands::current_path();
    let route = Route::parse(&path);
    if !route.is_canonical(&path) {
        if let Err(e) = commands::replace_path(&route.path()) {
            warn!("[APP] Could not rewrite {}: {}", path, e);
        }
    }

    // Provide context to all children
    let ctx = AppContext::new(config, route);
    provide_context(ctx);

    // Back/forward buttons
    let popstate = window_event_listener(ev::popstate, move |_| {
        ctx.route.set(Route::parse(&commands::current_path()));
    });
    on_cleanup(move || popstate.remove());

    view! {
        <div class="app-layout">
            {move || match ctx.route.get() {
                Route::GraphqlList => view! { <GraphqlListPage /> }.into_any(),
                Route::RestList => view! { <RestListPage /> }.into_any(),
                Route::Favorites => view! { <FavoritesPage /> }.into_any(),
                Route::Detail(id) => view! { <DetailPage raw_id=id /> }.into_any(),
            }}
        </div>
    }
}
