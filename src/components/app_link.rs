//! App Link Component
//!
//! Anchor that switches pages through history instead of reloading.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::route::Route;

#[component]
pub fn AppLink(
    route: Route,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] label: Option<String>,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();
    let href = route.path();

    let on_click = move |ev: web_sys::MouseEvent| {
        // Let the browser handle new-tab and other modified clicks
        if ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key() {
            return;
        }
        ev.prevent_default();
        ctx.navigate(route.clone());
    };

    view! {
        <a href=href class=class aria-label=label on:click=on_click>
            {children()}
        </a>
    }
}
