use anyhow::bail;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_required_amount};
use crate::context::AppContext;
use crate::output::output;

/// Register a physical count on a stored shift close.
pub async fn run(
    date: &str,
    counted: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let date = parse_date(date, "date")?;
    let counted = parse_required_amount(counted, "counted cash")?;
    match ctx.api.register_cash_count(date, counted).await {
        Ok(record) => output(&record, flags.format),
        Err(error) if error.is_not_found() => bail!("no shift close for {date}"),
        Err(error) => Err(error.into()),
    }
}
