//! # koi-api
//!
//! Typed async client for the El Koi operations API.
//!
//! Endpoints are grouped by area:
//! - [`dashboard`]: summary metrics and the daily sales series
//! - [`shift_close`]: shift closes, the last closing balance, late cash counts
//! - [`expenses`]: receipt extraction, expense creation and listing
//!
//! Any non-2xx response becomes [`ApiError::Status`] without reading the body.

pub mod dashboard;
pub mod expenses;
pub mod schemas;
pub mod shift_close;

mod error;
mod http;

pub use error::ApiError;

use std::time::Duration;

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails
    /// to build.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("koi/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an `/api/...` path.
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
