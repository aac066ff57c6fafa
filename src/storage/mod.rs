//! The persistence collaborator. The admin core never talks to
//! localStorage directly; `AdminState` calls in here after each mutation
//! and once at session start.

use crate::models::SiteConfig;
use serde::{Deserialize, Serialize};

pub(crate) const CONFIG_KEY: &str = "marigold_site_config";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub(crate) fn load_json<T: for<'de> Deserialize<'de>>(key: &str) -> Option<T> {
    let json = local_storage()?.get_item(key).ok().flatten()?;
    serde_json::from_str(&json).ok()
}

pub(crate) fn save_json<T: Serialize>(key: &str, value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, &json);
        }
    }
}

/// Loads the saved document, or the starter document on first run or when
/// the stored payload no longer parses (schema drift is survivable; the
/// couple's data is not worth a crash).
pub(crate) fn load_config_or_starter() -> SiteConfig {
    if let Some(config) = load_json::<SiteConfig>(CONFIG_KEY) {
        return config;
    }
    if let Some(storage) = local_storage() {
        if matches!(storage.get_item(CONFIG_KEY), Ok(Some(_))) {
            leptos::logging::warn!("stored site config did not parse; starting fresh");
        }
    }
    SiteConfig::starter()
}

pub(crate) fn save_config(config: &SiteConfig) {
    save_json(CONFIG_KEY, config);
}

pub(crate) fn clear_config() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(CONFIG_KEY);
    }
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` +
// wasm-bindgen-test-runner).
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_config_storage_roundtrip() {
        clear_config();

        // First run: starter document.
        let first = load_config_or_starter();
        assert_eq!(first, SiteConfig::starter());

        let mut edited = first.clone();
        edited.couple_names = "June & Henry".to_string();
        save_config(&edited);

        let loaded = load_config_or_starter();
        assert_eq!(loaded.couple_names, "June & Henry");

        clear_config();
        assert_eq!(load_config_or_starter(), SiteConfig::starter());
    }

    #[wasm_bindgen_test]
    fn test_corrupt_payload_falls_back_to_starter() {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(CONFIG_KEY, "{not json");
        }
        assert_eq!(load_config_or_starter(), SiteConfig::starter());
        clear_config();
    }
}
