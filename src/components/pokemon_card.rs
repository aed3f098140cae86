//! Pokemon Card Component
//!
//! Grid cell with number, sprite and name; opens the detail page.

use leptos::prelude::*;

use pokedex_core::detail::{format_number, sprite_urls};
use pokedex_core::{FavoriteEntry, ListItem};

use crate::components::{FavoriteToggle, LazyImage};
use crate::context::use_app_context;
use crate::route::Route;

#[component]
pub fn PokemonCard(item: ListItem) -> impl IntoView {
    let ctx = use_app_context();

    let id = item.id;
    let name = item.name.clone();
    let image_url = ctx.config.with_value(|c| sprite_urls(&c.sprites_base, id).list);
    let entry = FavoriteEntry::from(item);

    view! {
        <div class="pokemon-card-wrapper">
            <button
                class="pokemon-card"
                title=name.clone()
                aria-label=format!("View details of {}", name)
                on:click=move |_| ctx.navigate(Route::detail(id))
            >
                <div class="pokemon-card-number">
                    <span>{format_number(id)}</span>
                </div>
                <div class="pokemon-card-image">
                    <LazyImage src=image_url alt=name.clone() width=72 height=72 />
                </div>
                <div class="pokemon-card-name">
                    <span>{name.clone()}</span>
                </div>
            </button>
            <FavoriteToggle
                class="pokemon-card-favorite"
                is_favorite=Signal::derive(move || ctx.is_favorite(id))
                on_toggle=Callback::new(move |_| ctx.toggle_favorite(entry.clone()))
            />
        </div>
    }
}
