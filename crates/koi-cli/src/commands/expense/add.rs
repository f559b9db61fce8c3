use koi_core::intake::ExpenseIntake;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ExpenseFieldArgs;
use crate::context::AppContext;

/// Manual entry: no receipt, a blank form dated today plus the given fields.
pub async fn run(
    fields: &ExpenseFieldArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut intake = ExpenseIntake::new(ctx.today, ctx.reset_delay());
    intake.start_manual()?;
    super::edit_form(&mut intake, fields)?;
    super::submit(intake, ctx, flags).await
}
