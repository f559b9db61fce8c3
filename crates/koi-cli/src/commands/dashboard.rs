use koi_api::schemas::DashboardSummary;
use koi_core::money::{format_mxn, format_percent_delta};
use serde::Serialize;

use crate::cli::root_commands::PeriodArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::sales::{ChartRow, chart_rows, print_chart};
use crate::commands::shared::period::resolve_period;
use crate::context::AppContext;
use crate::output::{output, print_rows};
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct DashboardResponse {
    branch: String,
    mes: u32,
    anio: i32,
    summary: DashboardSummary,
    daily_sales: Vec<ChartRow>,
}

/// Card rows shown above the chart.
fn card_rows(summary: &DashboardSummary) -> Vec<Vec<String>> {
    let optional = |value: Option<&str>| value.map_or_else(|| "-".to_string(), str::to_string);
    vec![
        vec![
            "Ventas hoy".to_string(),
            format_mxn(summary.ventas_hoy),
            format_percent_delta(summary.cambio_vs_ayer),
        ],
        vec![
            "Ventas semana".to_string(),
            format_mxn(summary.ventas_semana),
            format_percent_delta(summary.cambio_vs_semana_anterior),
        ],
        vec![
            "Ventas mes".to_string(),
            format_mxn(summary.ventas_mes),
            String::new(),
        ],
        vec![
            "Gastos pendientes".to_string(),
            summary.gastos_pendientes.to_string(),
            String::new(),
        ],
        vec![
            "Estado de caja".to_string(),
            optional(summary.estado_caja.as_deref()),
            optional(summary.ultimo_arqueo.as_deref()),
        ],
        vec![
            "Utilidad mes".to_string(),
            summary.utilidad_mes.map_or_else(|| "-".to_string(), format_mxn),
            String::new(),
        ],
    ]
}

/// Handle `koi dashboard`.
pub async fn handle(
    args: &PeriodArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let (month, year) = resolve_period(args, ctx.today);
    let progress = Progress::spinner("Loading dashboard...");
    let (summary, series) = tokio::join!(
        ctx.api.dashboard_summary(),
        ctx.api.daily_sales(month, year)
    );
    let (summary, series) = match (summary, series) {
        (Ok(summary), Ok(series)) => {
            progress.finish_clear();
            (summary, series)
        }
        (Err(error), _) | (_, Err(error)) => {
            progress.finish_err("Failed to load dashboard");
            return Err(error.into());
        }
    };

    let daily_sales = chart_rows(&series, ctx.config.general.chart_width);
    if flags.format == OutputFormat::Table {
        println!("Dashboard - {}", ctx.branch_label());
        print_rows(&["metric", "value", "change"], &card_rows(&summary));
        println!();
        println!("Ventas diarias {month:02}/{year}");
        print_chart(&daily_sales);
        return Ok(());
    }

    output(
        &DashboardResponse {
            branch: ctx.state.active_branch_id().to_string(),
            mes: month,
            anio: year,
            summary,
            daily_sales,
        },
        flags.format,
    )
}
