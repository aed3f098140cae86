//! Lazy Image Component
//!
//! Native lazy loading with a fixed-size box, a skeleton until the image
//! loads, and a text fallback when it fails.

use leptos::prelude::*;

#[component]
pub fn LazyImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    width: u32,
    height: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let (loaded, set_loaded) = signal(false);
    let (failed, set_failed) = signal(false);

    let root_class = move || {
        let mut classes = vec!["lazy-image"];
        if loaded.get() {
            classes.push("is-loaded");
        }
        if failed.get() {
            classes.push("is-failed");
        }
        if !class.is_empty() {
            classes.push(class.as_str());
        }
        classes.join(" ")
    };
    let fallback_label = alt.clone();

    view! {
        <div class=root_class style=format!("width: {}px; height: {}px;", width, height)>
            <div class="lazy-image-skeleton" aria-hidden="true"></div>
            <Show
                when=move || !failed.get()
                fallback=move || view! {
                    <div class="lazy-image-fallback" role="img" aria-label=fallback_label.clone()>"No image"</div>
                }
            >
                <img
                    class="lazy-image-img"
                    src=src.clone()
                    alt=alt.clone()
                    loading="lazy"
                    decoding="async"
                    width=width.to_string()
                    height=height.to_string()
                    on:load=move |_| set_loaded.set(true)
                    on:error=move |_| set_failed.set(true)
                />
            </Show>
        </div>
    }
}
