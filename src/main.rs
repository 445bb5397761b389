//! Stockroom Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;

use app::App;
use leptos::prelude::*;

fn main() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        // Recent log history
        for line in rolling_logger::recent_lines() {
            web_sys::console::log_1(&line.into());
        }
    }));
    match rolling_logger::init_logger("Stockroom", 500) {
        Ok(()) => rolling_logger::info("Stockroom starting"),
        Err(e) => web_sys::console::error_1(&format!("Logger already installed: {}", e).into()),
    }
    mount_to_body(App);
}
