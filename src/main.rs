//! On-chain ToDo Frontend Entry Point

mod actions;
mod address;
mod app;
mod chain;
mod components;
mod config;
mod context;
mod contract;
mod models;
mod store;
mod wallet;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
