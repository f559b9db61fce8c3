use koi_config::{ENV_PREFIX, KoiConfig};

/// Config sections that can be set through `KOI_<SECTION>__<FIELD>`.
const SECTIONS: [&str; 3] = ["API", "GENERAL", "USER"];

/// Common guess for the base URL key, reported on its own.
const API_URL_GUESS: &str = "KOI_API_URL";

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &KoiConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &KoiConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    for section in SECTIONS {
        let single = format!("{ENV_PREFIX}{section}_");
        let double = format!("{ENV_PREFIX}{section}__");
        let mistyped = env_keys
            .iter()
            .filter(|key| {
                key.starts_with(&single) && !key.starts_with(&double) && *key != API_URL_GUESS
            })
            .collect::<Vec<_>>();
        if let Some(first) = mistyped.first() {
            let suggestion = first.replacen(&single, &double, 1);
            warnings.push(format!(
                "{first} is ignored. Use double underscores between section and field (example: {suggestion})."
            ));
        }
    }

    if !config.api.is_remote() && env_keys.iter().any(|key| key == API_URL_GUESS) {
        warnings.push(
            "KOI_API_URL is not read. Set KOI_API__BASE_URL or pass --api-url.".to_string(),
        );
    }

    warnings
}

#[cfg(test)]
mod tests {
    use koi_config::KoiConfig;

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_single_underscore_keys() {
        let config = KoiConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("KOI_API_BASE_URL".to_string(), "http://x".to_string()),
                ("KOI_GENERAL__CHART_WIDTH".to_string(), "30".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("KOI_API__BASE_URL"));
    }

    #[test]
    fn warns_for_unread_api_url() {
        let config = KoiConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![("KOI_API_URL".to_string(), "http://x".to_string())],
        );
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("KOI_API__BASE_URL"));
    }

    #[test]
    fn no_warning_for_correct_keys() {
        let config = KoiConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("KOI_API__BASE_URL".to_string(), "http://x".to_string()),
                ("KOI_LOG".to_string(), "debug".to_string()),
                ("HOME".to_string(), "/root".to_string()),
            ],
        );
        assert!(warnings.is_empty());
    }
}
