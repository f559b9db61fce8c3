use anyhow::Context;
use koi_config::KoiConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration (`.env`, TOML files, `KOI_*`) and apply
/// command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<KoiConfig> {
    let mut config = KoiConfig::load_with_dotenv().context("failed to load koi configuration")?;

    if let Some(url) = flags.api_url.as_deref() {
        config
            .override_base_url(url)
            .with_context(|| format!("invalid --api-url '{url}'"))?;
    }

    tracing::debug!(
        base_url = %config.api.base_url,
        timeout_secs = config.api.timeout_secs,
        branches = config.branches.len(),
        "configuration loaded"
    );
    Ok(config)
}
