use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `koi` binary.
#[derive(Debug, Parser)]
#[command(
    name = "koi",
    version,
    about = "El Koi operations: cash reconciliation, shift close, expenses"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (errors only, no notices or spinners)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Active branch id (defaults to general.default_branch)
    #[arg(short, long, global = true)]
    pub branch: Option<String>,

    /// Override the API base URL for this invocation
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Table coloring: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            branch: self.branch.clone(),
            api_url: self.api_url.clone(),
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{ExpenseCommands, ShiftCommands};
    use super::{Cli, ColorMode, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_table_output() {
        let cli = Cli::try_parse_from(["koi", "routes"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.color, ColorMode::Auto);
        assert!(matches!(cli.command, Commands::Routes(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "koi",
            "dashboard",
            "--format",
            "json",
            "--branch",
            "2",
            "--api-url",
            "http://10.0.0.5:8001",
        ])
        .expect("cli should parse");

        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.format, OutputFormat::Json);
        assert_eq!(flags.branch.as_deref(), Some("2"));
        assert_eq!(flags.api_url.as_deref(), Some("http://10.0.0.5:8001"));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["koi", "--format", "xml", "branches"]).is_err());
    }

    #[test]
    fn shift_close_collects_repeated_flags() {
        let cli = Cli::try_parse_from([
            "koi",
            "shift",
            "close",
            "--responsible",
            "ANAIS",
            "--preparer",
            "SEBASTIAN",
            "--cash-sales",
            "500",
            "--expense",
            "150",
            "--expense",
            "50:COMPRAS_INSUMOS:TICKET:Garrafones",
            "--tip",
            "CLIP=50",
        ])
        .expect("cli should parse");

        let Commands::Shift {
            action: ShiftCommands::Close(args),
        } = cli.command
        else {
            panic!("expected shift close");
        };
        assert_eq!(args.form.expense.len(), 2);
        assert_eq!(args.form.tip, vec!["CLIP=50".to_string()]);
        assert_eq!(args.form.opening, None);
    }

    #[test]
    fn expense_capture_takes_file_and_overrides() {
        let cli = Cli::try_parse_from([
            "koi",
            "expense",
            "capture",
            "ticket.jpg",
            "--method",
            "transferencia",
            "--dry-run",
        ])
        .expect("cli should parse");

        let Commands::Expense {
            action: ExpenseCommands::Capture(args),
        } = cli.command
        else {
            panic!("expected expense capture");
        };
        assert_eq!(args.file.to_string_lossy(), "ticket.jpg");
        assert_eq!(args.fields.method.as_deref(), Some("transferencia"));
        assert!(args.dry_run);
    }
}
