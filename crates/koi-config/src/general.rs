//! General client behavior.

use serde::{Deserialize, Serialize};

/// Milliseconds a submitted expense form stays visible before clearing.
const fn default_reset_delay_ms() -> u64 {
    3000
}

/// Widest text bar chart the client renders.
pub const MAX_CHART_WIDTH: usize = 200;

/// Width of the text bar chart, in characters.
const fn default_chart_width() -> usize {
    40
}

fn default_branch() -> String {
    "1".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u64,

    #[serde(default = "default_chart_width")]
    pub chart_width: usize,

    /// Branch selected at startup when `--branch` is not given.
    #[serde(default = "default_branch")]
    pub default_branch: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            reset_delay_ms: default_reset_delay_ms(),
            chart_width: default_chart_width(),
            default_branch: default_branch(),
        }
    }
}
