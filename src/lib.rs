use log::info;
use wasm_bindgen::prelude::*;

pub mod api;
pub mod config;

pub use config::{api_base, use_config, AppConfig, ConfigProvider, HostClass};

/// One-time frontend setup: panic hook, console logger, and backend
/// endpoint detection. Call before any code that issues API requests;
/// the detected base is fixed for the rest of the page's lifetime.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));

    info!("booking frontend starting, backend at {}", config::api_base());
}
