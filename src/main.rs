//! Food Wagen Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod logging;
mod store;

use app::App;
use food_core::{Config, HttpFoodRepository, PageCoordinator};
use leptos::prelude::*;
use tracing::Level;

fn main() {
    console_error_panic_hook::set_once();
    logging::init_logging(Level::DEBUG);

    // Build-time overrides, e.g. FOOD_WAGEN_API_BASE=http://localhost:3000/Food trunk serve
    let config = Config::with_overrides(option_env!("FOOD_WAGEN_API_BASE"), option_env!("FOOD_WAGEN_DEBOUNCE_MS"))
        .unwrap_or_else(|err| {
            tracing::error!(error = %err, "invalid configuration, using defaults");
            Config::default()
        });
    tracing::info!(api_base = %config.api_base, debounce_ms = config.search_debounce_ms, "starting food wagen");

    match HttpFoodRepository::from_config(&config) {
        Ok(repo) => {
            let coordinator = PageCoordinator::with_config(repo, &config);
            mount_to_body(move || view! { <App coordinator=coordinator/> });
        }
        Err(err) => {
            tracing::error!(error = %err, "cannot build food client");
            let message = err.to_string();
            mount_to_body(move || view! { <p class="page-status error">{message}</p> });
        }
    }
}
