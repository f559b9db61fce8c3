use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ShiftFormArgs;
use crate::commands::shared::submit::rejected;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;
use crate::ui;

/// Validate and submit a shift close.
///
/// Without `--opening` the previous shift's closing balance is used when the
/// API has a positive one.
pub async fn run(
    args: &ShiftFormArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut form = super::build_form(args, ctx.today)?;

    if args.opening.is_none() {
        match ctx.api.last_balance().await {
            Ok(balance) => {
                if form.prefill_opening_balance(balance.prefill_value()) {
                    ui::notice(&format!(
                        "opening balance pre-filled from last close: {}",
                        form.opening_balance
                    ));
                }
            }
            Err(error) => tracing::warn!(%error, "could not load previous closing balance"),
        }
    }

    let payload = form.begin_submit().map_err(rejected)?;
    let progress = Progress::spinner("Submitting shift close...");
    match ctx.api.create_shift_close(&payload).await {
        Ok(record) => {
            form.finish_submit(Ok(()));
            progress.finish_ok(form.success().unwrap_or("shift close recorded"));
            output(&record, flags.format)
        }
        Err(error) => {
            form.finish_submit(Err(error.to_string()));
            progress.finish_err("Shift close failed");
            Err(error).context("failed to submit shift close")
        }
    }
}
