//! Detail Page
//!
//! Single creature by route id. Not-found and transport errors get
//! distinct messages.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;

use pokedex_core::client::GraphqlClient;
use pokedex_core::detail::{lookup_detail, DetailState};

use crate::components::PokemonDetailView;
use crate::context::use_app_context;
use crate::hooks::use_mounted;

#[component]
pub fn DetailPage(#[prop(into)] raw_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let client = GraphqlClient::new(ctx.config.with_value(|c| c.graphql_uri.clone()));
    let mounted = use_mounted();
    let state = RwSignal::new(DetailState::loading());

    spawn_local(async move {
        let result = lookup_detail(&client, Some(raw_id.as_str())).await;
        if let Some(e) = &result.error {
            warn!("[APP] Detail {} failed: {}", raw_id, e);
        }
        if mounted.get() {
            state.set(result);
        }
    });

    view! {
        {move || {
            let current = state.get();
            if current.loading {
                return view! {
                    <div class="detail-status">
                        <div class="list-spinner" role="status" aria-label="Loading"></div>
                    </div>
                }.into_any();
            }
            match (current.pokemon, current.error) {
                (Some(pokemon), _) => view! { <PokemonDetailView pokemon=pokemon /> }.into_any(),
                (None, Some(_)) => view! {
                    <div class="detail-status">
                        <p role="alert">"Could not load this Pokémon, please try again."</p>
                    </div>
                }.into_any(),
                (None, None) => view! {
                    <div class="detail-status">
                        <p>"Pokemon not found!"</p>
                    </div>
                }.into_any(),
            }
        }}
    }
}
