use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Expense commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ExpenseCommands {
    /// Read a receipt, apply overrides, and submit.
    Capture(ExpenseCaptureArgs),
    /// Enter an expense manually.
    Add {
        #[command(flatten)]
        fields: ExpenseFieldArgs,
    },
    /// List recorded expenses.
    List {
        /// From date, YYYY-MM-DD
        #[arg(long)]
        from: Option<String>,
        /// To date, YYYY-MM-DD
        #[arg(long)]
        to: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ExpenseCaptureArgs {
    /// Receipt image or PDF
    pub file: PathBuf,
    #[command(flatten)]
    pub fields: ExpenseFieldArgs,
    /// Show the pre-filled form without submitting
    #[arg(long)]
    pub dry_run: bool,
}

/// Expense form fields. On capture they override the extracted values.
#[derive(Clone, Debug, Default, Args)]
pub struct ExpenseFieldArgs {
    #[arg(long)]
    pub vendor: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub total: Option<String>,
    /// efectivo (cash from the safe) or transferencia
    #[arg(long)]
    pub method: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}
