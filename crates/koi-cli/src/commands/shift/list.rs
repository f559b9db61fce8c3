use koi_api::shift_close::ShiftCloseQuery;
use koi_core::money::format_mxn;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, print_rows};

pub async fn run(
    month: Option<u32>,
    year: Option<i32>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let closes = ctx
        .api
        .list_shift_closes(ShiftCloseQuery { month, year, limit })
        .await?;
    if flags.format != OutputFormat::Table {
        return output(&closes, flags.format);
    }

    let money = |value: Option<f64>| value.map_or_else(|| "-".to_string(), format_mxn);
    let rows = closes
        .iter()
        .map(|close| {
            vec![
                close.fecha.to_string(),
                close.responsable.clone(),
                format_mxn(close.total_gastos),
                format_mxn(close.saldo_final_esperado),
                money(close.efectivo_fisico),
                money(close.diferencia),
                close
                    .estado
                    .map_or_else(|| "-".to_string(), |estado| estado.to_string()),
            ]
        })
        .collect::<Vec<_>>();
    print_rows(
        &["fecha", "responsable", "gastos", "esperado", "fisico", "diferencia", "estado"],
        &rows,
    );
    Ok(())
}
