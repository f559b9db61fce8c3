//! Cross-cutting error types for the El Koi client.
//!
//! Transport and configuration failures live in their own crates
//! (`ApiError`, `ConfigError`); everything raised by form state and domain
//! math is a [`CoreError`]. The binary converges all of them into `anyhow`.

use thiserror::Error;

/// Errors raised by pure domain logic and form state machines.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Input failed client-side validation. No network call was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A submit was requested while the previous one is still pending.
    #[error("a submission is already in progress")]
    SubmissionInFlight,

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// The receipt is neither an image nor a PDF.
    #[error("unsupported receipt file: {0} (expected an image or a PDF)")]
    UnsupportedFile(String),

    /// A wire enum value that does not match any variant.
    #[error("unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    /// Branch id not present in the configured branch list.
    #[error("unknown branch: {0}")]
    UnknownBranch(String),
}

impl CoreError {
    /// Shorthand for [`CoreError::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// True for errors that were caught before any network call.
    #[must_use]
    pub const fn is_client_side(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::UnsupportedFile(_) | Self::SubmissionInFlight
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_errors_are_client_side() {
        assert!(CoreError::validation("vendor is required").is_client_side());
        assert!(CoreError::SubmissionInFlight.is_client_side());
        assert!(CoreError::UnsupportedFile("notes.txt".into()).is_client_side());
    }

    #[test]
    fn state_errors_are_not_client_side() {
        let transition = CoreError::InvalidTransition {
            from: "idle".into(),
            to: "submit".into(),
        };
        assert!(!transition.is_client_side());
        assert!(!CoreError::UnknownBranch("9".into()).is_client_side());
    }
}
