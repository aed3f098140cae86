//! Popover Component
//!
//! Non-modal dialog anchored to a trigger button. Closes on Escape and on
//! pointer-down outside its root; focus moves into the panel on open and
//! returns to where it was on close.

use leptos::ev;
use leptos::html;
use leptos::leptos_dom::helpers::window_event_listener;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

const FOCUSABLE: &str = "button:not([disabled]), [href], input:not([disabled]), select:not([disabled]), textarea:not([disabled]), [tabindex]:not([tabindex='-1'])";

fn active_element() -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .active_element()?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

/// Focus the first focusable descendant, or the panel itself
fn focus_first(panel: &web_sys::HtmlElement) {
    let first = panel
        .query_selector(FOCUSABLE)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    let _ = match first {
        Some(el) => el.focus(),
        None => panel.focus(),
    };
}

/// Popover with trigger button
///
/// Props:
/// - trigger_label: accessible label of the trigger button
/// - trigger: content rendered inside the trigger button
/// - close_on_select: clicking a button or link inside the panel closes it
/// - align_right: anchor the panel to the trigger's right edge
#[component]
pub fn Popover(
    #[prop(into)] trigger_label: String,
    #[prop(into)] trigger: ViewFn,
    #[prop(optional)] close_on_select: bool,
    #[prop(optional)] align_right: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let root = NodeRef::<html::Div>::new();
    let panel = NodeRef::<html::Div>::new();
    let previous_focus = StoredValue::new_local(None::<web_sys::HtmlElement>);

    let close = move || {
        if !open.get_untracked() {
            return;
        }
        open.set(false);
        previous_focus.try_update_value(|prev| {
            if let Some(el) = prev.take() {
                let _ = el.focus();
            }
        });
    };

    let toggle = move |_| {
        if open.get_untracked() {
            close();
        } else {
            previous_focus.set_value(active_element());
            open.set(true);
        }
    };

    // Panel mounts after `open` flips; move focus once it exists
    Effect::new(move |_| {
        if let Some(el) = panel.get() {
            focus_first(&el);
        }
    });

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if open.get_untracked() && ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    });
    let pointerdown = window_event_listener(ev::pointerdown, move |ev| {
        if !open.get_untracked() {
            return;
        }
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let inside = root
            .get_untracked()
            .map(|el| el.contains(target.as_ref()))
            .unwrap_or(false);
        if !inside {
            close();
        }
    });
    on_cleanup(move || {
        keydown.remove();
        pointerdown.remove();
    });

    let on_panel_click = move |ev: web_sys::MouseEvent| {
        if !close_on_select {
            return;
        }
        let hit = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("button, a").ok().flatten());
        if hit.is_some() {
            close();
        }
    };

    let panel_class = if align_right { "popover-panel align-right" } else { "popover-panel" };

    view! {
        <div class="popover" node_ref=root>
            <button
                class="popover-trigger"
                aria-label=trigger_label
                aria-haspopup="dialog"
                aria-expanded=move || open.get().to_string()
                on:click=toggle
            >
                {trigger.run()}
            </button>
            <Show when=move || open.get()>
                <div
                    class=panel_class
                    role="dialog"
                    tabindex="-1"
                    node_ref=panel
                    on:click=on_panel_click
                >
                    {children()}
                </div>
            </Show>
        </div>
    }
}
