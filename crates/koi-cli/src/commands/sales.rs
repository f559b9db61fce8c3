use chrono::NaiveDate;
use koi_api::schemas::DailySales;
use koi_core::chart::{bar_heights, text_bar};
use koi_core::money::format_mxn;
use serde::Serialize;

use crate::cli::subcommands::SalesCommands;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::period::resolve_period;
use crate::context::AppContext;
use crate::output::{output, print_rows};
use crate::progress::Progress;

/// One day of the sales chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub fecha: NaiveDate,
    pub total: f64,
    pub height_pct: f64,
    #[serde(skip)]
    pub bar: String,
}

#[derive(Debug, Serialize)]
struct DailySalesResponse {
    mes: u32,
    anio: i32,
    total: f64,
    days: Vec<ChartRow>,
}

/// Pair each day with its relative bar height.
#[must_use]
pub fn chart_rows(series: &[DailySales], width: usize) -> Vec<ChartRow> {
    let totals = series.iter().map(|day| day.total).collect::<Vec<_>>();
    series
        .iter()
        .zip(bar_heights(&totals))
        .map(|(day, height_pct)| ChartRow {
            fecha: day.fecha,
            total: day.total,
            height_pct: (height_pct * 10.0).round() / 10.0,
            bar: text_bar(height_pct, width),
        })
        .collect()
}

/// Print chart rows as `fecha | total | % | bar`.
pub fn print_chart(rows: &[ChartRow]) {
    let rows = rows
        .iter()
        .map(|row| {
            vec![
                row.fecha.to_string(),
                format_mxn(row.total),
                format!("{:.1}%", row.height_pct),
                row.bar.clone(),
            ]
        })
        .collect::<Vec<_>>();
    print_rows(&["fecha", "total", "%", "chart"], &rows);
}

/// Handle `koi sales`.
pub async fn handle(
    action: &SalesCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SalesCommands::Daily(period) => {
            let (month, year) = resolve_period(period, ctx.today);
            let progress = Progress::spinner("Loading daily sales...");
            let series = match ctx.api.daily_sales(month, year).await {
                Ok(series) => {
                    progress.finish_clear();
                    series
                }
                Err(error) => {
                    progress.finish_err("Failed to load daily sales");
                    return Err(error.into());
                }
            };

            let days = chart_rows(&series, ctx.config.general.chart_width);
            if flags.format == OutputFormat::Table {
                println!("Ventas diarias {month:02}/{year} - {}", ctx.branch_label());
                print_chart(&days);
                return Ok(());
            }
            let total = series.iter().map(|day| day.total).sum();
            output(
                &DailySalesResponse {
                    mes: month,
                    anio: year,
                    total,
                    days,
                },
                flags.format,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day(d: u32, total: f64) -> DailySales {
        DailySales {
            fecha: NaiveDate::from_ymd_opt(2026, 2, d).unwrap(),
            total,
        }
    }

    #[test]
    fn rows_scale_to_series_maximum() {
        let rows = chart_rows(&[day(1, 10_000.0), day(2, 20_000.0), day(3, 5_000.0)], 10);
        let heights = rows.iter().map(|r| r.height_pct).collect::<Vec<_>>();
        assert_eq!(heights, vec![50.0, 100.0, 25.0]);
        assert_eq!(rows[1].bar.chars().count(), 10);
        assert_eq!(rows[0].bar.chars().count(), 5);
    }

    #[test]
    fn all_zero_series_has_empty_bars() {
        let rows = chart_rows(&[day(1, 0.0), day(2, 0.0)], 10);
        assert!(rows.iter().all(|r| r.height_pct == 0.0 && r.bar.is_empty()));
    }
}
