//! Infinite Scroll Sentinel
//!
//! Empty element at the end of a list, watched by an `IntersectionObserver`.
//! Visibility reports go through `ScrollTrigger`, so load-more runs once per
//! time the sentinel scrolls into view while more pages exist.

use leptos::html;
use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use pokedex_core::scroll::{ScrollOptions, ScrollTrigger};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Live observer; the closure must outlive it
struct Observer {
    inner: IntersectionObserver,
    _callback: ObserverCallback,
}

fn observe(
    element: &web_sys::Element,
    options: &ScrollOptions,
    mut on_report: impl FnMut(bool) + 'static,
) -> Result<Observer, String> {
    let callback = ObserverCallback::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
        let visible = entries
            .iter()
            .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
        on_report(visible);
    });

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&options.root_margin);
    init.set_threshold(&JsValue::from_f64(options.threshold));

    let inner = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|e| format!("{:?}", e))?;
    inner.observe(element);
    Ok(Observer {
        inner,
        _callback: callback,
    })
}

/// Sentinel that calls `on_load_more` when scrolled into view
///
/// The observer is rebuilt whenever `has_more` or `item_count` changes, so a
/// sentinel that stays visible after a page lands triggers the next one.
#[component]
pub fn ScrollSentinel(
    #[prop(into)] has_more: Signal<bool>,
    #[prop(into)] item_count: Signal<usize>,
    on_load_more: Callback<()>,
    #[prop(optional)] options: ScrollOptions,
) -> impl IntoView {
    let sentinel = NodeRef::<html::Div>::new();
    let trigger = StoredValue::new_local(ScrollTrigger::new());
    let observer = StoredValue::new_local(None::<Observer>);
    let options = StoredValue::new(options);

    let disconnect = move || {
        observer.try_update_value(|current| {
            if let Some(current) = current.take() {
                current.inner.disconnect();
            }
        });
        trigger.try_update_value(|t| t.detach());
    };

    Effect::new(move |_| {
        let more = has_more.get();
        let count = item_count.get();
        let Some(element) = sentinel.get() else {
            return;
        };
        disconnect();
        if !more {
            return;
        }

        trigger.update_value(|t| t.attach());
        let result = options.with_value(|opts| {
            observe(&element, opts, move |visible| {
                let fire = trigger
                    .try_update_value(|t| t.on_visibility(visible, has_more.get_untracked()))
                    .unwrap_or(false);
                if fire {
                    debug!("[SCROLL] Sentinel visible, loading more");
                    on_load_more.run(());
                }
            })
        });
        match result {
            Ok(current) => {
                debug!("[SCROLL] Observing sentinel after {} items", count);
                observer.set_value(Some(current));
            }
            Err(e) => warn!("[SCROLL] IntersectionObserver unavailable: {}", e),
        }
    });

    on_cleanup(disconnect);

    view! {
        <div class="scroll-sentinel" aria-hidden="true" node_ref=sentinel></div>
    }
}
