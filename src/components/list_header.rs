//! List Header Component
//!
//! Top bar shared by the list pages.

use leptos::prelude::*;

use crate::components::AppLink;
use crate::route::Route;

#[component]
pub fn ListHeader() -> impl IntoView {
    view! {
        <header class="list-header">
            <div class="list-header-container">
                <AppLink route=Route::GraphqlList class="list-header-brand">
                    <h2>"Pokédex"</h2>
                </AppLink>
                <nav class="list-header-nav">
                    <AppLink route=Route::RestList class="list-header-link" label="REST list">
                        "REST"
                    </AppLink>
                    <AppLink route=Route::Favorites class="list-header-link" label="Favorites">
                        "★"
                    </AppLink>
                </nav>
            </div>
        </header>
    }
}
