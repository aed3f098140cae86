//! List Content Component
//!
//! Card grid with loading placeholders, error and empty messages, and the
//! infinite-scroll sentinel.

use leptos::prelude::*;

use pokedex_core::scroll::ScrollOptions;
use pokedex_core::{FetchError, ListItem};

use crate::components::{PokemonCard, ScrollSentinel};

const ERROR_MESSAGE: &str = "There was an error loading the Pokémon list, please try again.";
const EMPTY_MESSAGE: &str = "No Pokémon match the selected filters.";

#[component]
pub fn ListContent(
    #[prop(into)] items: Signal<Vec<ListItem>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] fetching_more: Signal<bool>,
    #[prop(into)] error: Signal<Option<FetchError>>,
    #[prop(into)] has_more: Signal<bool>,
    /// Placeholder cards shown while the first page loads
    placeholder_count: u32,
    on_load_more: Callback<()>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
    #[prop(optional)] scroll_options: ScrollOptions,
) -> impl IntoView {
    let item_count = Signal::derive(move || items.with(Vec::len));
    let is_empty = move || !loading.get() && item_count.get() == 0;
    let scroll_options = StoredValue::new(scroll_options);

    view! {
        <Show
            when=move || error.with(Option::is_none)
            fallback=move || view! {
                <div class="pokemon-grid">
                    <p class="list-message" role="alert">{ERROR_MESSAGE}</p>
                    {on_retry.map(|retry| view! {
                        <button class="list-retry" on:click=move |_| retry.run(())>"Retry"</button>
                    })}
                </div>
            }
        >
            <Show
                when=move || !is_empty()
                fallback=|| view! {
                    <div class="pokemon-grid">
                        <p class="list-message">{EMPTY_MESSAGE}</p>
                    </div>
                }
            >
                <div class="pokemon-grid">
                    <For each=move || items.get() key=|item| item.id let:item>
                        <PokemonCard item=item />
                    </For>
                    <Show when=move || loading.get()>
                        {(0..placeholder_count).map(|_| view! {
                            <div class="pokemon-card skeleton" aria-hidden="true"></div>
                        }).collect_view()}
                    </Show>
                    <Show when=move || fetching_more.get()>
                        <div class="list-spinner" role="status" aria-label="Loading more"></div>
                    </Show>
                    <ScrollSentinel
                        has_more=has_more
                        item_count=item_count
                        on_load_more=on_load_more
                        options=scroll_options.get_value()
                    />
                </div>
            </Show>
        </Show>
    }
}
