mod close;
mod count;
mod get;
mod last_balance;
mod list;
mod preview;

use chrono::NaiveDate;
use koi_core::shift_close::ShiftCloseForm;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ShiftCommands, ShiftFormArgs};
use crate::commands::shared::parse::{date_or_today, parse_expense_spec, parse_tip};
use crate::context::AppContext;

/// Handle `koi shift`.
pub async fn handle(
    action: &ShiftCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ShiftCommands::LastBalance => last_balance::run(ctx, flags).await,
        ShiftCommands::Preview(form) => preview::run(form, ctx, flags),
        ShiftCommands::Close(args) => close::run(&args.form, ctx, flags).await,
        ShiftCommands::List { month, year, limit } => {
            list::run(*month, *year, *limit, ctx, flags).await
        }
        ShiftCommands::Get { date } => get::run(date, ctx, flags).await,
        ShiftCommands::Count { date, counted } => count::run(date, counted, ctx, flags).await,
    }
}

/// Fill a shift-close form from command-line flags.
///
/// Amount fields stay as typed; the form parses them leniently.
fn build_form(args: &ShiftFormArgs, today: NaiveDate) -> anyhow::Result<ShiftCloseForm> {
    let date = date_or_today(args.date.as_deref(), "date", today)?;
    let mut form = ShiftCloseForm::new(date);
    form.responsible = args.responsible.clone().unwrap_or_default();
    form.preparer = args.preparer.clone().unwrap_or_default();
    form.opening_balance = args.opening.clone().unwrap_or_default();
    form.cash_sales.clone_from(&args.cash_sales);
    form.counted_cash = args.counted.clone().unwrap_or_default();
    form.notes = args.notes.clone().unwrap_or_default();

    for spec in &args.expense {
        form.fill_or_push_expense(parse_expense_spec(spec)?);
    }
    for spec in &args.tip {
        let (terminal, amount) = parse_tip(spec)?;
        form.set_tip(terminal, amount);
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use koi_core::enums::{ExpenseCategory, PaymentTerminal};
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()
    }

    #[test]
    fn flags_fill_the_form() {
        let args = ShiftFormArgs {
            responsible: Some("Ana".into()),
            preparer: Some("Luis".into()),
            opening: Some("1000".into()),
            cash_sales: "5000".into(),
            expense: vec!["200:COMPRAS_INSUMOS".into(), "50".into()],
            tip: vec!["CLIP=150".into()],
            counted: Some("5600".into()),
            ..ShiftFormArgs::default()
        };
        let form = build_form(&args, today()).unwrap();

        assert_eq!(form.date, today());
        assert_eq!(form.expenses().len(), 2);
        assert_eq!(form.expenses()[0].category, ExpenseCategory::ComprasInsumos);
        assert_eq!(form.total_expenses(), 250.0);
        assert_eq!(form.total_tips(), 150.0);
        let tip = form
            .tips()
            .iter()
            .find(|tip| tip.terminal == PaymentTerminal::Clip)
            .unwrap();
        assert_eq!(tip.amount, "150");
        assert_eq!(form.reconciliation().expected, 5_600.0);
    }

    #[test]
    fn explicit_date_is_parsed() {
        let args = ShiftFormArgs {
            date: Some("2026-01-31".into()),
            ..ShiftFormArgs::default()
        };
        let form = build_form(&args, today()).unwrap();
        assert_eq!(form.date, NaiveDate::from_ymd_opt(2026, 1, 31).unwrap());
    }

    #[test]
    fn bad_tip_is_rejected() {
        let args = ShiftFormArgs {
            tip: vec!["PAYPAL=10".into()],
            ..ShiftFormArgs::default()
        };
        assert!(build_form(&args, today()).is_err());
    }
}
