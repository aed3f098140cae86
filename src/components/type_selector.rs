//! Type Selector Component
//!
//! Dropdown restricting the list to one creature type.

use leptos::prelude::*;

use pokedex_core::catalog::TypeOption;

/// Type dropdown; the first option is always "all types"
#[component]
pub fn TypeSelector(
    options: ReadSignal<Vec<TypeOption>>,
    #[prop(into)] current_type: Signal<String>,
    #[prop(into)] disabled: Signal<bool>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            class="type-selector"
            aria-label="Filter by type"
            disabled=move || disabled.get()
            prop:value=move || current_type.get()
            on:change=move |ev| on_change(event_target_value(&ev))
        >
            {move || options.get().into_iter().map(|option| {
                let val = option.value.clone();
                let is_selected = move || current_type.get() == val;
                view! {
                    <option value=option.value selected=is_selected>
                        {option.label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
