//! Todo List Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod models;
mod store;
mod transition;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    mount_to_body(App);
}
