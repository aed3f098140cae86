//! View Hooks
//!
//! Browser adapters around the core state machines: a timer-driven
//! debounced signal and URL-mirrored list filters.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use log::{debug, warn};

use pokedex_core::debounce::Debouncer;
use pokedex_core::params::FilterState;
use pokedex_core::SortKey;

use crate::commands;

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Follow `input`, surfacing a value only after it stayed unchanged for
/// `delay_ms`. Each change cancels the pending timer.
pub fn use_debounced(input: Signal<String>, delay_ms: u64) -> ReadSignal<String> {
    let initial = input.get_untracked();
    let (settled, set_settled) = signal(initial.clone());

    let mut debouncer = Debouncer::new(initial, delay_ms);
    debouncer.on_settled(move |value: &String| set_settled.set(value.clone()));
    let debouncer = StoredValue::new_local(debouncer);
    let timer = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let value = input.get();
        let now = now_ms();
        let Some(deadline) = debouncer.try_update_value(|d| d.set(value, now)).flatten() else {
            return;
        };
        let wait = deadline.saturating_sub(now).min(u32::MAX as u64) as u32;
        let timeout = Timeout::new(wait, move || {
            debouncer.try_update_value(|d| {
                d.advance(deadline);
            });
        });
        // Replacing the old Timeout drops and cancels it
        timer.set_value(Some(timeout));
    });

    on_cleanup(move || {
        timer.try_update_value(|t| t.take());
    });

    settled
}

/// Cleared when the calling component unmounts. Async replies check it
/// before writing into reactive state that may be gone.
// Arc rather than Rc: `on_cleanup` requires Send + Sync
#[derive(Clone)]
pub struct Mounted(Arc<AtomicBool>);

impl Mounted {
    pub fn get(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

pub fn use_mounted() -> Mounted {
    let flag = Arc::new(AtomicBool::new(true));
    let cleared = flag.clone();
    on_cleanup(move || cleared.store(false, Ordering::Relaxed));
    Mounted(flag)
}

/// List filters backed by the URL query string
#[derive(Clone, Copy)]
pub struct FilterParams {
    pub state: RwSignal<FilterState>,
}

impl FilterParams {
    fn mirror(&self) {
        let query = self.state.with_untracked(FilterState::to_query_string);
        debug!("[FILTER] ?{}", query);
        if let Err(e) = commands::replace_query(&query) {
            warn!("[FILTER] Could not update URL: {}", e);
        }
    }

    pub fn set_search(&self, term: String) {
        self.state.update(|s| s.set_search(term));
        self.mirror();
    }

    pub fn set_sort(&self, sort_key: SortKey) {
        self.state.update(|s| s.set_sort(sort_key));
        self.mirror();
    }

    pub fn set_type(&self, type_filter: String) {
        self.state.update(|s| s.set_type(type_filter));
        self.mirror();
    }
}

pub fn use_filter_params() -> FilterParams {
    let initial = FilterState::from_query_string(&commands::current_search());
    FilterParams {
        state: RwSignal::new(initial),
    }
}
