//! Ply Console Frontend Entry Point

mod models;
mod config;
mod error;
mod api;
mod controllers;
mod drafts;
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
    console_logger::init(log::LevelFilter::Info);
    mount_to_body(App);
}
