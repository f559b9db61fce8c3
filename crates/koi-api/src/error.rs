//! API client error types.

use thiserror::Error;

/// Errors that can occur when talking to the operations API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (connection refused, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code. The body is not read.
    #[error("API error: {status}")]
    Status { status: u16 },

    /// The response body did not match the expected schema.
    #[error("parse error: {0}")]
    Parse(String),

    /// Reading a file to upload failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Status code for [`ApiError::Status`], if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }

    /// True for 404 responses.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404 })
    }
}
