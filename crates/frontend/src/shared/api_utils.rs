//! API utilities for frontend-backend communication
//!
//! Resolves the registry API base address: the embedded default config,
//! optionally overridden per browser through localStorage.

use contracts::error::ConfigError;
use contracts::shared::config::{load_config, ApiConfig};

/// localStorage key holding an alternative base address, e.g. `http://10.0.0.5:5000`
pub const API_BASE_STORAGE_KEY: &str = "travel_api_base";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn stored_api_base() -> Option<String> {
    storage().and_then(|s| s.get_item(API_BASE_STORAGE_KEY).ok().flatten())
}

/// Get the API configuration for this browser
///
/// An unusable stored override is logged and ignored.
pub fn api_config() -> Result<ApiConfig, ConfigError> {
    let stored = stored_api_base();
    let config = match load_config(stored.as_deref()) {
        Ok(config) => config,
        Err(e) if stored.is_some() => {
            log::error!("Ignoring {} from localStorage: {}", API_BASE_STORAGE_KEY, e);
            load_config(None)?
        }
        Err(e) => return Err(e),
    };
    Ok(config.api)
}
