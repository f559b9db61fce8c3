//! # koi-config
//!
//! Layered configuration loading for the El Koi client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`KOI_*` prefix, `__` as separator)
//! 2. Project-level `.koi/config.toml`
//! 3. User-level `~/.config/koi/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `KOI_API__BASE_URL` -> `api.base_url`,
//! `KOI_GENERAL__CHART_WIDTH` -> `general.chart_width`, etc.
//!
//! ```no_run
//! use koi_config::KoiConfig;
//!
//! let config = KoiConfig::load_with_dotenv().expect("config");
//! println!("API: {}", config.api.base_url);
//! ```

mod api;
mod error;
mod general;

pub use api::{ApiConfig, DEFAULT_BASE_URL};
pub use error::ConfigError;
pub use general::{GeneralConfig, MAX_CHART_WIDTH};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use koi_core::app_state::{AppState, Branch, User, default_branches};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "KOI_";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KoiConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default = "default_branches")]
    pub branches: Vec<Branch>,
    #[serde(default)]
    pub user: User,
}

impl Default for KoiConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            general: GeneralConfig::default(),
            branches: default_branches(),
            user: User::default(),
        }
    }
}

impl KoiConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does not read `.env`; see [`Self::load_with_dotenv`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source fails to parse or a value is
    /// out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load `.env` from the working directory, then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract, normalize, and validate a config from any figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let mut config: Self = figment.extract()?;
        config.api.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".koi/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Replace the API base URL, as the `--api-url` flag does.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] if the URL is not HTTP(S).
    pub fn override_base_url(&mut self, url: &str) -> Result<(), ConfigError> {
        self.api.base_url = url.to_string();
        self.api.normalize();
        self.api.validate()
    }

    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] for an invalid API section, a chart width
    /// outside `1..=MAX_CHART_WIDTH`, an empty branch list, or a default branch
    /// that is not listed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        if !(1..=MAX_CHART_WIDTH).contains(&self.general.chart_width) {
            return Err(ConfigError::invalid(
                "general.chart_width",
                format!("must be between 1 and {MAX_CHART_WIDTH}"),
            ));
        }
        if self.branches.is_empty() {
            return Err(ConfigError::invalid(
                "branches",
                "at least one branch is required",
            ));
        }
        if !self
            .branches
            .iter()
            .any(|branch| branch.id == self.general.default_branch)
        {
            return Err(ConfigError::invalid(
                "general.default_branch",
                format!("'{}' is not a configured branch", self.general.default_branch),
            ));
        }
        Ok(())
    }

    /// Startup navigation state with the default branch selected.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] if the default branch is not listed.
    pub fn app_state(&self) -> Result<AppState, ConfigError> {
        AppState::new(
            self.user.clone(),
            self.branches.clone(),
            &self.general.default_branch,
        )
        .map_err(|error| ConfigError::invalid("general.default_branch", error.to_string()))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("koi").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = KoiConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.branches.len(), 3);
        assert_eq!(config.user.name, "Admin Matriz");
    }

    #[test]
    fn default_branch_must_exist() {
        let mut config = KoiConfig::default();
        config.general.default_branch = "9".into();
        assert!(config.validate().is_err());
        assert!(config.app_state().is_err());
    }

    #[test]
    fn override_base_url_normalizes() {
        let mut config = KoiConfig::default();
        config.override_base_url("https://api.elkoi.mx/").unwrap();
        assert_eq!(config.api.base_url, "https://api.elkoi.mx");
        assert!(config.override_base_url("localhost:8001").is_err());
    }
}
