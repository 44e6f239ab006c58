//! Activity Board Frontend Entry Point

mod actions;
mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod logging;
mod models;
mod status;
mod store;
mod view_model;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_document();
    logging::init(config.log_level);
    log::info!("[APP] Starting with api_base={}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
