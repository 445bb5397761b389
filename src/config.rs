//! Store configuration lookup
//!
//! A `<meta name="stockroom-config" content='{"projectId": ...}'>` tag in
//! the host page wins over the values baked in at build time.

use stockroom_core::StoreConfig;

const META_SELECTOR: &str = "meta[name=\"stockroom-config\"]";

pub fn load_store_config() -> StoreConfig {
    if let Some(json) = meta_config() {
        match StoreConfig::from_json(&json) {
            Ok(config) => return config,
            Err(e) => log::warn!("Ignoring stockroom-config meta tag: {}", e),
        }
    }
    StoreConfig::from_build_env()
}

fn meta_config() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.query_selector(META_SELECTOR).ok()??;
    element.get_attribute("content")
}
