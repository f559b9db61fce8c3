use anyhow::bail;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_date;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(date: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let date = parse_date(date, "date")?;
    match ctx.api.shift_close(date).await {
        Ok(record) => output(&record, flags.format),
        Err(error) if error.is_not_found() => bail!("no shift close for {date}"),
        Err(error) => Err(error.into()),
    }
}
