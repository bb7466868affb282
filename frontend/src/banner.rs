//! Console greeting and page load timing.

use shared::banner::{banner_lines, load_time_message};
use shared::config::BannerSection;
use wasm_bindgen::JsValue;
use web_sys::Window;

pub fn print_banner(config: &BannerSection) {
    if !config.enabled {
        return;
    }
    for line in banner_lines(config) {
        web_sys::console::log_2(
            &JsValue::from_str(&format!("%c{}", line.text)),
            &JsValue::from_str(line.css),
        );
    }
}

pub fn log_load_time(window: &Window) {
    let Some(performance) = window.performance() else {
        return;
    };
    let timing = performance.timing();
    zoon::println!(
        "{}",
        load_time_message(
            timing.navigation_start(),
            timing.dom_content_loaded_event_end(),
        )
    );
}
