//! Application configuration.

use serde::{Deserialize, Serialize};

/// Environment variable overriding the backend base URL.
pub const API_BASE_URL_ENV: &str = "REPICK_API_BASE_URL";

/// Configuration for an [`crate::AppCore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backend base URL
    pub api_base_url: String,
    /// Items per page for listing requests
    pub page_size: u32,
    /// Items shown on the trending rail
    pub trending_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            page_size: 20,
            trending_limit: 10,
        }
    }
}

impl AppConfig {
    /// Defaults with the base URL taken from `REPICK_API_BASE_URL` when set.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        match std::env::var(API_BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => config.api_base_url = url,
            _ => {
                tracing::debug!(
                    fallback = %config.api_base_url,
                    "{API_BASE_URL_ENV} not set; using fallback base URL"
                );
            }
        }
        config
    }
}
