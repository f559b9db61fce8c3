use clap::{Args, Subcommand};

/// Shift-close commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ShiftCommands {
    /// Closing balance of the previous shift.
    #[command(name = "last-balance")]
    LastBalance,
    /// Compute totals and the reconciliation without submitting.
    Preview(ShiftFormArgs),
    /// Validate and submit a shift close.
    Close(ShiftCloseArgs),
    /// List recent shift closes.
    List {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show the shift close for a date (YYYY-MM-DD).
    Get { date: String },
    /// Register a late physical cash count for a date.
    Count {
        date: String,
        #[arg(long)]
        counted: String,
    },
}

/// Fields of the shift-close form. Amounts are taken as typed.
#[derive(Clone, Debug, Default, Args)]
pub struct ShiftFormArgs {
    /// Shift date, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub responsible: Option<String>,
    #[arg(long)]
    pub preparer: Option<String>,
    /// Opening balance (pre-filled from the last close when omitted)
    #[arg(long)]
    pub opening: Option<String>,
    #[arg(long, default_value = "")]
    pub cash_sales: String,
    /// AMOUNT[:CATEGORY[:VOUCHER[:VENDOR[:DESCRIPTION]]]], repeatable
    #[arg(long)]
    pub expense: Vec<String>,
    /// TERMINAL=AMOUNT, repeatable
    #[arg(long)]
    pub tip: Vec<String>,
    /// Physically counted cash
    #[arg(long)]
    pub counted: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ShiftCloseArgs {
    #[command(flatten)]
    pub form: ShiftFormArgs,
}
