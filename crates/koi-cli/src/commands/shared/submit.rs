use koi_core::CoreError;

/// Convert an error raised while preparing a submission.
///
/// Client-side failures are labeled as never having reached the API.
pub fn rejected(error: CoreError) -> anyhow::Error {
    if error.is_client_side() {
        anyhow::Error::new(error).context("not submitted, nothing was sent to the API")
    } else {
        error.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failure_mentions_nothing_was_sent() {
        let error = rejected(CoreError::validation("opening balance must be greater than 0"));
        let message = format!("{error:#}");
        assert!(message.starts_with("not submitted, nothing was sent to the API"));
        assert!(message.ends_with("opening balance must be greater than 0"));
    }

    #[test]
    fn state_errors_pass_through() {
        let error = rejected(CoreError::InvalidTransition {
            from: "idle".into(),
            to: "submit".into(),
        });
        assert!(!format!("{error:#}").contains("nothing was sent"));
        assert!(error.downcast_ref::<CoreError>().is_some());
    }
}
