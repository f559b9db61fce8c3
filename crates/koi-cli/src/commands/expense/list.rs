use koi_api::expenses::ExpenseQuery;
use koi_core::enums::ExpenseCategory;
use koi_core::money::format_mxn;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::{output, print_rows};

pub async fn run(
    from: Option<&str>,
    to: Option<&str>,
    category: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let query = ExpenseQuery {
        from: from.map(|raw| parse_date(raw, "from date")).transpose()?,
        to: to.map(|raw| parse_date(raw, "to date")).transpose()?,
        category: category
            .map(|raw| parse_enum::<ExpenseCategory>(raw, "expense category"))
            .transpose()?,
    };
    let expenses = ctx.api.list_expenses(query).await?;
    if flags.format != OutputFormat::Table {
        return output(&expenses, flags.format);
    }

    let rows = expenses
        .iter()
        .map(|expense| {
            vec![
                expense.fecha.to_string(),
                expense.proveedor.clone(),
                expense.categoria.to_string(),
                format_mxn(expense.monto),
                expense.metodo_pago.to_string(),
                expense.estado.to_string(),
            ]
        })
        .collect::<Vec<_>>();
    print_rows(
        &["fecha", "proveedor", "categoria", "monto", "metodo", "estado"],
        &rows,
    );
    Ok(())
}
