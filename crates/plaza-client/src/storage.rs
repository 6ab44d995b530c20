//! LocalStorage utilities for client configuration.

use plaza_core::PlazaConfig;

const CONFIG_KEY: &str = "$plaza-live$/config";

fn read_item(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(key).ok()?
}

/// Loads configuration overrides from localStorage.
///
/// Missing, malformed or invalid documents fall back to the defaults.
pub fn load_config() -> PlazaConfig {
    let Some(raw) = read_item(CONFIG_KEY) else {
        return PlazaConfig::default();
    };

    match PlazaConfig::from_json(&raw) {
        Ok(config) => {
            tracing::info!(?config, "Loaded config overrides");
            config
        }
        Err(e) => {
            tracing::warn!("Ignoring stored config: {e}");
            PlazaConfig::default()
        }
    }
}
