use koi_core::money::format_mxn;
use koi_core::reconciliation::ReconciliationResult;
use serde::Serialize;

use crate::cli::subcommands::ShiftFormArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, print_rows};

#[derive(Debug, Serialize)]
struct PreviewResponse {
    total_expenses: f64,
    total_tips: f64,
    #[serde(flatten)]
    reconciliation: ReconciliationResult,
    summary: String,
    /// Why the form could not be submitted yet, if anything.
    problem: Option<String>,
}

/// Offline reconciliation of a shift form. Makes no API calls.
pub fn run(args: &ShiftFormArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let form = super::build_form(args, ctx.today)?;
    let reconciliation = form.reconciliation();
    let response = PreviewResponse {
        total_expenses: form.total_expenses(),
        total_tips: form.total_tips(),
        reconciliation,
        summary: reconciliation.summary(),
        problem: form.build_submission().err().map(|error| error.to_string()),
    };

    if flags.format != OutputFormat::Table {
        return output(&response, flags.format);
    }

    print_rows(
        &["field", "value"],
        &[
            vec!["expenses".to_string(), format_mxn(response.total_expenses)],
            vec!["tips".to_string(), format_mxn(response.total_tips)],
            vec!["expected".to_string(), format_mxn(reconciliation.expected)],
            vec![
                "difference".to_string(),
                reconciliation
                    .variance
                    .map_or_else(|| "-".to_string(), format_mxn),
            ],
            vec!["status".to_string(), reconciliation.status.to_string()],
        ],
    );
    println!("{}", response.summary);
    if let Some(problem) = &response.problem {
        println!("not ready to submit: {problem}");
    }
    Ok(())
}
