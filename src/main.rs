//! Pokédex Frontend Entry Point

mod route;
mod commands;
mod context;
mod store;
mod hooks;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
