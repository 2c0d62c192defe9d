use std::env;
use std::time::Duration;

use crate::services::confirmation::DEFAULT_CONFIRMATION_WINDOW;

pub const DEFAULT_LOG_FILTER: &str = "rust_lib_app=debug";

#[derive(Clone, Debug)]
pub struct Config {
    /// How long the "book added" confirmation stays visible
    pub confirmation_window: Duration,
    pub cover_timeout: Duration,
    /// Maximum number of decoded covers kept in memory
    pub cover_cache_capacity: usize,
    pub cover_user_agent: String,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            confirmation_window: DEFAULT_CONFIRMATION_WINDOW,
            cover_timeout: Duration::from_secs(5),
            cover_cache_capacity: 128,
            cover_user_agent: format!("BookCatalog/{}", env!("CARGO_PKG_VERSION")),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            confirmation_window: env::var("CONFIRMATION_WINDOW_MS")
                .ok()
                .and_then(|ms| ms.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.confirmation_window),
            cover_timeout: env::var("COVER_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.cover_timeout),
            cover_cache_capacity: env::var("COVER_CACHE_CAPACITY")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(defaults.cover_cache_capacity),
            cover_user_agent: env::var("COVER_USER_AGENT")
                .unwrap_or(defaults.cover_user_agent),
            log_filter: env::var("LOG_FILTER").unwrap_or(defaults.log_filter),
        }
    }
}
