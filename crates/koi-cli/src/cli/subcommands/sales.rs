use clap::Subcommand;

use crate::cli::root_commands::PeriodArgs;

/// Sales report commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SalesCommands {
    /// Total sales per day with relative bar heights.
    Daily(PeriodArgs),
}
