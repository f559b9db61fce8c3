use anyhow::Context;
use koi_core::amount::parse_amount;
use koi_core::money::format_mxn;
use koi_core::reconciliation::{ReconciliationResult, compare_count};
use serde::Serialize;

use crate::cli::root_commands::CashCountArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, print_rows};

#[derive(Debug, Serialize)]
struct CashCountResponse {
    theoretical: f64,
    counted: Option<f64>,
    #[serde(flatten)]
    result: ReconciliationResult,
    summary: String,
}

fn response(theoretical: f64, counted_text: &str) -> CashCountResponse {
    let result = compare_count(theoretical, counted_text);
    CashCountResponse {
        theoretical,
        counted: parse_amount(counted_text),
        summary: result.summary(),
        result,
    }
}

/// Handle `koi cash-count`. Nothing is persisted.
pub async fn handle(
    args: &CashCountArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let theoretical = match args.theoretical {
        Some(value) => value,
        None => {
            ctx.api
                .last_balance()
                .await
                .context("failed to load theoretical balance (pass --theoretical)")?
                .saldo
        }
    };

    let response = response(theoretical, &args.counted);
    if flags.format != OutputFormat::Table {
        return output(&response, flags.format);
    }

    let money = |value: Option<f64>| value.map_or_else(|| "-".to_string(), format_mxn);
    print_rows(
        &["field", "value"],
        &[
            vec!["theoretical".to_string(), format_mxn(response.theoretical)],
            vec!["counted".to_string(), money(response.counted)],
            vec!["difference".to_string(), money(response.result.variance)],
            vec!["status".to_string(), response.result.status.to_string()],
        ],
    );
    println!("{}", response.summary);
    Ok(())
}
