#![allow(warnings)]
//! Calorie Tally Frontend Entry Point

mod app;
mod components;
mod context;
mod store;

use app::App;
use leptos::prelude::*;
use tally_core::TallyConfig;

const CONFIG_JSON: &str = include_str!("../config/tally.json");

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match TallyConfig::from_json(CONFIG_JSON) {
        Ok(config) => (config, None),
        Err(e) => (TallyConfig::default(), Some(e)),
    };

    let level = config.level_filter().unwrap_or(log::LevelFilter::Info);
    if rolling_logger::init_logger(&config.title, config.log_capacity, level).is_ok() {
        let _ = rolling_logger::info("Logger ready");
    }
    if let Some(e) = config_error {
        let _ = rolling_logger::error(&format!("[APP] Falling back to default config: {}", e));
    }

    mount_to_body(move || view! { <App config=config /> });
}
