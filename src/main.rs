//! Todo List Frontend Entry Point

mod app;
mod board;
mod components;
mod config;
mod context;
mod error;
mod filter;
mod handlers;
mod logger;
mod models;
mod storage;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(config::LOG_LEVEL);
    mount_to_body(App);
}
