//! Shared HTTP response helpers.
//!
//! Every endpoint treats any non-2xx status the same way: an
//! [`ApiError::Status`] carrying the code and nothing else.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Map a non-success status to [`ApiError::Status`].
pub fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        tracing::debug!(status = status.as_u16(), url = %resp.url(), "API returned error status");
        return Err(ApiError::Status {
            status: status.as_u16(),
        });
    }
    Ok(resp)
}

/// Check the status, then decode the body as `T`.
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let resp = check_response(resp)?;
    let body = resp.text().await?;
    parse_body(&body)
}

pub fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}
