//! List Filter Component
//!
//! Search box plus a sort popover. Extra controls (the type dropdown) are
//! passed as children and placed between the two.

use leptos::prelude::*;

use pokedex_core::SortKey;

use crate::components::Popover;
use crate::hooks::FilterParams;

const SORT_OPTIONS: &[(SortKey, &str)] = &[(SortKey::Name, "Name"), (SortKey::Id, "Number")];

#[component]
pub fn ListFilter(
    params: FilterParams,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let query = move || params.state.with(|s| s.query.clone());
    let sort_key = move || params.state.with(|s| s.sort_key);

    view! {
        <div class="list-filter">
            <div class="list-filter-search">
                // Invalid text is accepted; it just does not filter
                <input
                    type="search"
                    placeholder="Search"
                    aria-label="Search by name"
                    prop:value=query
                    on:input=move |ev| params.set_search(event_target_value(&ev))
                />
            </div>

            {children.map(|children| children())}

            <Popover
                trigger_label="Sort by"
                align_right=true
                trigger=move || if sort_key() == SortKey::Name { "A" } else { "#" }
            >
                <div class="popover-title">
                    <h3>"Sort by:"</h3>
                </div>
                <div class="popover-content" role="radiogroup">
                    {SORT_OPTIONS.iter().map(|(key, label)| {
                        let key = *key;
                        view! {
                            <label class="radio">
                                <input
                                    type="radio"
                                    name="sort"
                                    value=key.as_str()
                                    prop:checked=move || sort_key() == key
                                    on:change=move |_| params.set_sort(key)
                                />
                                <span>{*label}</span>
                            </label>
                        }
                    }).collect_view()}
                </div>
            </Popover>
        </div>
    }
}
