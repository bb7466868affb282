//! Loads `PortfolioConfig` from the page.
//!
//! Pages can embed overrides as
//! `<script type="application/toml" id="portfolio-config">…</script>`.

use crate::dom::QueryRoot;
use shared::PortfolioConfig;
use web_sys::Document;

pub const CONFIG_ELEMENT_SELECTOR: &str = "script#portfolio-config";

pub fn load_page_config(document: &Document) -> PortfolioConfig {
    let Some(element) = document.select(CONFIG_ELEMENT_SELECTOR) else {
        return PortfolioConfig::default();
    };
    let content = element.text_content().unwrap_or_default();
    match PortfolioConfig::from_toml(&content) {
        Ok(config) => {
            zoon::println!("[Portfolio] Loaded page config");
            config
        }
        Err(error) => {
            zoon::eprintln!("[Portfolio] {error}, using defaults");
            PortfolioConfig::default()
        }
    }
}
