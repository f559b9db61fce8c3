mod add;
mod capture;
mod list;

use std::time::Instant;

use anyhow::{Context, anyhow};
use chrono::NaiveDate;
use koi_api::schemas::ExpenseRecord;
use koi_core::enums::{ExpenseCategory, PaymentMethod};
use koi_core::intake::{ExpenseForm, ExpenseIntake, FormOrigin};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ExpenseCommands, ExpenseFieldArgs};
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::commands::shared::submit::rejected;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;
use crate::ui;

/// Handle `koi expense`.
pub async fn handle(
    action: &ExpenseCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ExpenseCommands::Capture(args) => capture::run(args, ctx, flags).await,
        ExpenseCommands::Add { fields } => add::run(fields, ctx, flags).await,
        ExpenseCommands::List { from, to, category } => {
            list::run(from.as_deref(), to.as_deref(), category.as_deref(), ctx, flags).await
        }
    }
}

#[derive(Debug, Serialize)]
struct ExpenseResponse {
    origin: Option<FormOrigin>,
    expense: ExpenseRecord,
    scheduled_payment: Option<NaiveDate>,
}

/// Apply command-line values on top of whatever the form already holds.
fn apply_overrides(form: &mut ExpenseForm, fields: &ExpenseFieldArgs) -> anyhow::Result<()> {
    if let Some(vendor) = &fields.vendor {
        form.vendor.clone_from(vendor);
    }
    if let Some(category) = fields.category.as_deref() {
        form.category = Some(parse_enum::<ExpenseCategory>(category, "expense category")?);
    }
    if let Some(total) = &fields.total {
        form.total.clone_from(total);
    }
    if let Some(method) = fields.method.as_deref() {
        form.payment_method = parse_enum::<PaymentMethod>(method, "payment method")?;
    }
    if let Some(date) = fields.date.as_deref() {
        form.date = parse_date(date, "date")?;
    }
    if let Some(description) = &fields.description {
        form.description.clone_from(description);
    }
    Ok(())
}

/// Apply overrides to the open form of an intake.
fn edit_form(intake: &mut ExpenseIntake, fields: &ExpenseFieldArgs) -> anyhow::Result<()> {
    let form = intake
        .form_mut()
        .ok_or_else(|| anyhow!("no expense form is open"))?;
    apply_overrides(form, fields)
}

/// Validate and submit the intake's form, then print the stored expense.
async fn submit(
    mut intake: ExpenseIntake,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let payload = intake.begin_submit().map_err(rejected)?;
    let progress = Progress::spinner("Recording expense...");
    match ctx.api.create_expense(&payload).await {
        Ok(expense) => {
            intake.finish_submit(Ok(()), Instant::now());
            progress.finish_ok(intake.success().unwrap_or("expense recorded"));
            if let Some(notice) = intake.disbursement_notice() {
                ui::notice(&notice);
            }
            output(
                &ExpenseResponse {
                    origin: intake.origin(),
                    scheduled_payment: intake.scheduled_payment_date(),
                    expense,
                },
                flags.format,
            )
        }
        Err(error) => {
            intake.finish_submit(Err(error.to_string()), Instant::now());
            progress.finish_err("Expense was not recorded");
            Err(error).context("failed to record expense")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    #[test]
    fn overrides_replace_only_given_fields() {
        let mut form = ExpenseForm::new(today());
        form.vendor = "OCR Vendor".into();
        form.total = "99.5".into();

        let fields = ExpenseFieldArgs {
            category: Some("servicios".into()),
            method: Some("TRANSFERENCIA".into()),
            ..ExpenseFieldArgs::default()
        };
        apply_overrides(&mut form, &fields).unwrap();

        assert_eq!(form.vendor, "OCR Vendor");
        assert_eq!(form.total, "99.5");
        assert_eq!(form.category, Some(ExpenseCategory::Servicios));
        assert_eq!(form.payment_method, PaymentMethod::Transferencia);
        assert!(form.is_scheduled_disbursement());
    }

    #[test]
    fn unknown_category_is_an_error() {
        let mut form = ExpenseForm::new(today());
        let fields = ExpenseFieldArgs {
            category: Some("CASINO".into()),
            ..ExpenseFieldArgs::default()
        };
        assert!(apply_overrides(&mut form, &fields).is_err());
    }

    #[test]
    fn editing_requires_an_open_form() {
        let mut intake = ExpenseIntake::new(today(), std::time::Duration::ZERO);
        assert!(edit_form(&mut intake, &ExpenseFieldArgs::default()).is_err());
        intake.start_manual().unwrap();
        assert!(edit_form(&mut intake, &ExpenseFieldArgs::default()).is_ok());
    }
}
