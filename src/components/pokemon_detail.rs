//! Pokemon Detail Component
//!
//! Header, artwork with previous/next stepping (also on the arrow keys),
//! and the info panel with types, measurements, moves and stats.

use leptos::ev;
use leptos::leptos_dom::helpers::window_event_listener;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use pokedex_core::detail::{format_number, format_stat, next_id, previous_id, sprite_urls, stat_label, stat_percent, PokemonDetail};

use crate::components::{FavoriteToggle, LazyImage};
use crate::context::use_app_context;
use crate::route::Route;

/// Keys typed into form fields are not navigation
fn is_typing_target(target: Option<web_sys::EventTarget>) -> bool {
    let Some(el) = target.and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok()) else {
        return false;
    };
    matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT") || el.is_content_editable()
}

#[component]
pub fn PokemonDetailView(pokemon: PokemonDetail) -> impl IntoView {
    let ctx = use_app_context();

    let id = pokemon.id;
    let previous = previous_id(id);
    let next = next_id(id);
    let artwork = ctx.config.with_value(|c| sprite_urls(&c.sprites_base, id).detail);
    let theme = format!("--pokemon-background-type: var(--type-{});", pokemon.primary_type());
    let entry = pokemon.favorite_entry();

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if is_typing_target(ev.target()) || ev.alt_key() || ev.ctrl_key() || ev.meta_key() || ev.shift_key() {
            return;
        }
        let target = match ev.key().as_str() {
            "ArrowLeft" => previous,
            "ArrowRight" => next,
            _ => return,
        };
        if let Some(target) = target {
            ev.prevent_default();
            ctx.navigate(Route::detail(target));
        }
    });
    on_cleanup(move || keydown.remove());

    let types = pokemon.types.clone();
    let moves = pokemon.moves.clone();
    let stats = pokemon.stats.clone();

    view! {
        <div class="detail-layout" style=theme>
            <main class="detail-main">
                <header class="detail-header">
                    <button class="detail-back" aria-label="Back to list" on:click=move |_| ctx.navigate(Route::GraphqlList)>
                        "←"
                    </button>
                    <h1 class="detail-title">{pokemon.name.clone()}</h1>
                    <span class="detail-number">{format_number(id)}</span>
                </header>

                // Media with previous/next
                <div class="detail-media">
                    <button
                        class=if previous.is_some() { "detail-step" } else { "detail-step hidden" }
                        aria-label="Previous Pokémon"
                        disabled=previous.is_none()
                        on:click=move |_| {
                            if let Some(target) = previous {
                                ctx.navigate(Route::detail(target));
                            }
                        }
                    >
                        "‹"
                    </button>
                    <LazyImage src=artwork alt=pokemon.name.clone() width=200 height=200 class="detail-image" />
                    <button
                        class=if next.is_some() { "detail-step" } else { "detail-step hidden" }
                        aria-label="Next Pokémon"
                        disabled=next.is_none()
                        on:click=move |_| {
                            if let Some(target) = next {
                                ctx.navigate(Route::detail(target));
                            }
                        }
                    >
                        "›"
                    </button>
                </div>

                // Info
                <div class="detail-info">
                    <FavoriteToggle
                        class="detail-favorite"
                        is_favorite=Signal::derive(move || ctx.is_favorite(id))
                        on_toggle=Callback::new(move |_| ctx.toggle_favorite(entry.clone()))
                    />

                    <div class="detail-types">
                        {types.into_iter().map(|name| view! {
                            <span class="detail-chip" style=format!("--pokemon-background-type: var(--type-{});", name)>
                                {name.clone()}
                            </span>
                        }).collect_view()}
                    </div>

                    <h2 class="detail-section">"About"</h2>
                    <div class="detail-attributes">
                        <div class="detail-attribute">
                            <span>{format!("{} kg", pokemon.weight)}</span>
                            <span class="detail-caption">"Weight"</span>
                        </div>
                        <div class="detail-divider"></div>
                        <div class="detail-attribute">
                            <span>{format!("{} m", pokemon.height)}</span>
                            <span class="detail-caption">"Height"</span>
                        </div>
                        <div class="detail-divider"></div>
                        <div class="detail-attribute">
                            <div class="detail-moves">
                                {moves.into_iter().map(|name| view! { <span>{name}</span> }).collect_view()}
                            </div>
                            <span class="detail-caption">"Moves"</span>
                        </div>
                    </div>

                    <p class="detail-description">{pokemon.description.clone()}</p>

                    <h2 class="detail-section">"Stats"</h2>
                    <div class="detail-stats">
                        {stats.into_iter().map(|stat| view! {
                            <div class="detail-stat">
                                <span class="detail-stat-label">{stat_label(&stat.name).to_string()}</span>
                                <span class="detail-stat-value">{format_stat(stat.base_stat)}</span>
                                <div
                                    class="detail-stat-bar"
                                    role="progressbar"
                                    aria-valuemin="0"
                                    aria-valuemax="100"
                                    aria-valuenow=stat_percent(stat.base_stat).to_string()
                                >
                                    <div class="detail-stat-fill" style=format!("width: {}%;", stat_percent(stat.base_stat))></div>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </main>
        </div>
    }
}
