use std::time::Duration;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use koi_api::ApiClient;
use koi_config::KoiConfig;
use koi_core::app_state::AppState;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: KoiConfig,
    pub api: ApiClient,
    pub state: AppState,
    pub today: NaiveDate,
}

impl AppContext {
    /// Build the API client and navigation state from configuration.
    ///
    /// `--branch` overrides `general.default_branch`.
    pub fn init(config: KoiConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let api = ApiClient::new(
            config.api.base_url.clone(),
            Duration::from_secs(config.api.timeout_secs),
        )
        .context("failed to build API client")?;

        let mut state = config.app_state()?;
        if let Some(branch) = flags.branch.as_deref() {
            state
                .set_active_branch(branch)
                .with_context(|| format!("invalid --branch '{branch}'"))?;
        }

        Ok(Self {
            config,
            api,
            state,
            today: Local::now().date_naive(),
        })
    }

    /// Active branch name for headers, or its id when unnamed.
    #[must_use]
    pub fn branch_label(&self) -> String {
        self.state.active_branch().map_or_else(
            || self.state.active_branch_id().to_string(),
            |branch| branch.name.clone(),
        )
    }

    #[must_use]
    pub const fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.config.general.reset_delay_ms)
    }
}
