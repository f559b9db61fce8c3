use anyhow::anyhow;
use chrono::NaiveDate;
use koi_core::intake::{ExpenseForm, ExpenseIntake, FormOrigin};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ExpenseCaptureArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;
use crate::ui;

#[derive(Debug, Serialize)]
struct DraftResponse<'a> {
    origin: Option<FormOrigin>,
    form: &'a ExpenseForm,
    scheduled_payment: Option<NaiveDate>,
    notice: Option<&'a str>,
}

/// Read a receipt, pre-fill the form, apply overrides, submit.
///
/// An extraction failure falls back to manual entry with a notice; the
/// override flags then have to supply the fields.
pub async fn run(
    args: &ExpenseCaptureArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let file_name = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow!("'{}' is not a file", args.file.display()))?;

    let mut intake = ExpenseIntake::new(ctx.today, ctx.reset_delay());
    let mime = intake.begin_extraction(&file_name)?;

    let progress = Progress::spinner(&format!("Reading {file_name}..."));
    match ctx.api.extract_receipt(&args.file, mime).await {
        Ok(extraction) => {
            progress.finish_ok("Receipt read");
            tracing::debug!(confidence = extraction.confianza, "receipt extracted");
            intake.complete_extraction(extraction.into())?;
        }
        Err(error) => {
            progress.finish_clear();
            tracing::warn!(%error, "receipt extraction failed");
            intake.fail_extraction(&error.to_string())?;
            if let Some(notice) = intake.notice() {
                ui::notice(notice);
            }
        }
    }

    super::edit_form(&mut intake, &args.fields)?;

    if args.dry_run {
        let form = intake
            .form()
            .ok_or_else(|| anyhow!("no expense form is open"))?;
        return output(
            &DraftResponse {
                origin: intake.origin(),
                form,
                scheduled_payment: intake.scheduled_payment_date(),
                notice: intake.notice(),
            },
            flags.format,
        );
    }

    super::submit(intake, ctx, flags).await
}
