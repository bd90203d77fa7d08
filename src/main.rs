//! Marketplace Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod logging;
mod models;
mod rating;
mod search;
mod sort;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::from_build_env() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    logging::init(config.level_filter());
    if let Some(err) = config_error {
        log::error!("[APP] Ignoring malformed MARKETPLACE_CONFIG: {}", err);
    }
    log::info!("[APP] Starting, api_base={:?}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
