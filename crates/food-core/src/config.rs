//! Runtime configuration.

use serde::Deserialize;

use crate::domain::ConfigError;
use crate::validation::is_valid_url;

/// Hosted mock collection the UI talks to by default
pub const DEFAULT_API_BASE: &str = "https://6852821e0594059b23cdd834.mockapi.io/Food";

/// Quiet period before a search box value is considered settled
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 450;

pub const ENV_API_BASE: &str = "FOOD_WAGEN_API_BASE";
pub const ENV_DEBOUNCE_MS: &str = "FOOD_WAGEN_DEBOUNCE_MS";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Base URL of the remote food collection
    pub api_base: String,
    pub search_debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
        }
    }
}

impl Config {
    /// Parse a JSON document; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read overrides from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base = std::env::var(ENV_API_BASE).ok();
        let debounce = std::env::var(ENV_DEBOUNCE_MS).ok();
        Self::with_overrides(api_base.as_deref(), debounce.as_deref())
    }

    /// Apply optional string overrides on top of the defaults.
    ///
    /// The browser build passes `option_env!` values here.
    pub fn with_overrides(api_base: Option<&str>, debounce_ms: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(base) = api_base.map(str::trim).filter(|s| !s.is_empty()) {
            config.api_base = base.to_string();
        }
        if let Some(raw) = debounce_ms.map(str::trim).filter(|s| !s.is_empty()) {
            config.search_debounce_ms = raw
                .parse()
                .map_err(|_| ConfigError::InvalidDebounce(raw.to_string()))?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_url(&self.api_base) {
            return Err(ConfigError::InvalidApiBase(self.api_base.clone()));
        }
        Ok(())
    }

    pub fn search_debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.search_debounce_ms)
    }
}
