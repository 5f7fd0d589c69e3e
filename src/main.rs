//! Todo & Blog Frontend Entry Point

mod models;
mod tiers;
mod error;
mod config;
mod route;
mod logging;
mod browser;
mod api;
mod auth;
mod blog;
mod session;
mod reorder;
mod context;
mod store;
mod components;
mod app;

#[cfg(test)]
mod testing;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
