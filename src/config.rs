//! Frontend Configuration
//!
//! Build-time settings with defaults. Provided to components via context.

use serde::Deserialize;
use tracing_subscriber::filter::LevelFilter;

/// Default number of cards per page on listing screens
pub const DEFAULT_ITEMS_PER_PAGE: usize = 12;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 300;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for REST calls; empty means same origin
    pub api_base: String,
    pub items_per_page: usize,
    pub sibling_count: u32,
    pub search_debounce_ms: u32,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            sibling_count: leptos_pagination::DEFAULT_SIBLING_COUNT,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Build-time settings: the JSON object in `MARKETPLACE_CONFIG` (if set),
    /// then `MARKETPLACE_API_BASE` / `MARKETPLACE_LOG` on top
    pub fn from_build_env() -> Result<Self, serde_json::Error> {
        let mut config = match option_env!("MARKETPLACE_CONFIG") {
            Some(json) => Self::from_json(json)?,
            None => Self::default(),
        };
        if let Some(base) = option_env!("MARKETPLACE_API_BASE") {
            config.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(level) = option_env!("MARKETPLACE_LOG") {
            config.log_level = level.to_string();
        }
        Ok(config)
    }

    /// Parse a JSON object; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(json)?;
        config.api_base = config.api_base.trim_end_matches('/').to_string();
        Ok(config)
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::INFO)
    }
}
