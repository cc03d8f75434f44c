use serde::Deserialize;

use crate::error::{BindingError, ConfigError};

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme + host + port of the travel registry backend, no trailing slash
    pub base_url: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://127.0.0.1:5000"
"#;

/// Load configuration
///
/// The embedded default is always parsed first; `override_base` (usually a
/// value the user stored in the browser) replaces the base address when it
/// is present and non-blank.
pub fn load_config(override_base: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = parse_config(DEFAULT_CONFIG)?;

    if let Some(base) = override_base.map(str::trim).filter(|b| !b.is_empty()) {
        log::info!("Using API base override: {}", base);
        config.api.base_url = base.to_string();
    }

    config.api.base_url = normalize_base(&config.api.base_url)?;
    Ok(config)
}

/// Parse a full TOML config document
pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Validate a base address and strip trailing slashes
///
/// Only absolute `http://` / `https://` addresses with a non-empty host part
/// are accepted, so every resolved endpoint is a valid absolute URL.
pub fn normalize_base(raw: &str) -> Result<String, BindingError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"));

    match host {
        Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => {
            Ok(trimmed.to_string())
        }
        _ => Err(BindingError::InvalidBase(raw.to_string())),
    }
}
