//! Operations API connection settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Address of the API during local development.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8001";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL, e.g. `https://koi.example.mx`. Trailing slashes are dropped.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Trim whitespace and trailing slashes from the base URL.
    pub fn normalize(&mut self) {
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();
    }

    /// True when the base URL is not the local development default.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.base_url != DEFAULT_BASE_URL
    }

    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] for a non-HTTP base URL or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.as_str();
        let has_host = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_host {
            return Err(ConfigError::invalid(
                "api.base_url",
                format!("'{url}' must start with http:// or https://"),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "api.timeout_secs",
                "must be greater than 0",
            ));
        }
        Ok(())
    }
}
