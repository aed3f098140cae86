//! Favorite Toggle Component

use leptos::prelude::*;

/// Star button; clicks never bubble to an enclosing card
#[component]
pub fn FavoriteToggle(
    #[prop(into)] is_favorite: Signal<bool>,
    on_toggle: Callback<()>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                let state = if is_favorite.get() { "favorite-toggle is-active" } else { "favorite-toggle" };
                format!("{} {}", state, class).trim_end().to_string()
            }
            aria-pressed=move || is_favorite.get().to_string()
            aria-label=move || if is_favorite.get() { "Remove from favorites" } else { "Add to favorites" }
            on:click=move |ev| {
                ev.stop_propagation();
                on_toggle.run(());
            }
        >
            {move || if is_favorite.get() { "★" } else { "☆" }}
        </button>
    }
}
