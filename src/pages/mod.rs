//! Pages
//!
//! One component per route. List pages wire a source into a `ListStore`.

mod graphql_list;
mod rest_list;
mod favorites;
mod detail;

pub use graphql_list::GraphqlListPage;
pub use rest_list::RestListPage;
pub use favorites::FavoritesPage;
pub use detail::DetailPage;

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use pokedex_core::pagination::PaginatedListSource;

use crate::hooks::use_mounted;
use crate::store::{store_apply_snapshot, ListState, ListStore};

type SourceHandle<S> = StoredValue<Rc<S>, LocalStorage>;

/// Mirror `source` into a fresh store for as long as the page is mounted
fn use_list_source<S: PaginatedListSource + 'static>(source: S) -> (SourceHandle<S>, ListStore) {
    let store = Store::new(ListState::default());
    let mounted = use_mounted();
    source.subscribe(Box::new(move |snapshot| {
        if mounted.get() {
            store_apply_snapshot(&store, snapshot);
        }
    }));
    (StoredValue::new_local(Rc::new(source)), store)
}

fn load_more_callback<S: PaginatedListSource + 'static>(source: SourceHandle<S>) -> Callback<()> {
    Callback::new(move |_| {
        let source = source.get_value();
        spawn_local(async move { source.load_more().await });
    })
}

fn reload_callback<S: PaginatedListSource + 'static>(source: SourceHandle<S>) -> Callback<()> {
    Callback::new(move |_| {
        let source = source.get_value();
        spawn_local(async move { source.reload().await });
    })
}
