use clap::{Args, Subcommand};

use crate::cli::subcommands::{ExpenseCommands, SalesCommands, ShiftCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Summary cards and the monthly sales chart.
    Dashboard(PeriodArgs),
    /// Sales reports.
    Sales {
        #[command(subcommand)]
        action: SalesCommands,
    },
    /// Shift closing (cierre de turno).
    Shift {
        #[command(subcommand)]
        action: ShiftCommands,
    },
    /// Compare a physical cash count with the theoretical balance.
    #[command(name = "cash-count")]
    CashCount(CashCountArgs),
    /// Expense capture and listing.
    Expense {
        #[command(subcommand)]
        action: ExpenseCommands,
    },
    /// List branches, marking the active one.
    Branches,
    /// List navigation routes, marking the current one.
    Routes(RoutesArgs),
}

/// Month/year selection. Missing values default to the current month.
#[derive(Clone, Debug, Default, Args)]
pub struct PeriodArgs {
    /// Month number, 1-12
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,
    #[arg(long)]
    pub year: Option<i32>,
}

#[derive(Clone, Debug, Args)]
pub struct CashCountArgs {
    /// Physically counted cash
    #[arg(long)]
    pub counted: String,
    /// Theoretical balance (defaults to the last closing balance from the API)
    #[arg(long)]
    pub theoretical: Option<f64>,
}

#[derive(Clone, Debug, Args)]
pub struct RoutesArgs {
    /// Path to mark as current (e.g. /arqueo)
    pub path: Option<String>,
}
