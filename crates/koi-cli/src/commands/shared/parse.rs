use std::str::FromStr;

use anyhow::{Context, bail};
use chrono::NaiveDate;
use koi_core::amount::parse_amount;
use koi_core::enums::{ExpenseCategory, PaymentTerminal};
use koi_core::shift_close::ExpenseLineInput;

/// Parse a wire enum value (case-insensitive, dashes and spaces allowed).
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse::<T>()
        .with_context(|| format!("invalid {field} '{raw}'"))
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid {field} '{raw}' (expected YYYY-MM-DD)"))
}

/// Parse an optional date, falling back to `today`.
pub fn date_or_today(
    raw: Option<&str>,
    field: &str,
    today: NaiveDate,
) -> anyhow::Result<NaiveDate> {
    raw.map_or(Ok(today), |raw| parse_date(raw, field))
}

/// Parse an amount that must be present and numeric.
pub fn parse_required_amount(raw: &str, field: &str) -> anyhow::Result<f64> {
    parse_amount(raw).with_context(|| format!("invalid {field} '{raw}' (expected a number)"))
}

/// Parse `AMOUNT[:CATEGORY[:VOUCHER[:VENDOR[:DESCRIPTION]]]]` into a form line.
///
/// Omitted parts keep the new-line defaults. The amount stays as typed so the
/// form's lenient parsing applies.
pub fn parse_expense_spec(spec: &str) -> anyhow::Result<ExpenseLineInput> {
    let mut parts = spec.splitn(5, ':').map(str::trim);
    let mut line = ExpenseLineInput {
        amount: parts.next().unwrap_or_default().to_string(),
        ..ExpenseLineInput::default()
    };

    if let Some(category) = parts.next().filter(|part| !part.is_empty()) {
        let category: ExpenseCategory = parse_enum(category, "expense category")?;
        if !ExpenseCategory::SHIFT_CLOSE.contains(&category) {
            bail!("category {category} is not available on a shift close");
        }
        line.category = category;
    }
    if let Some(voucher) = parts.next().filter(|part| !part.is_empty()) {
        line.voucher = parse_enum(voucher, "voucher type")?;
    }
    if let Some(vendor) = parts.next().filter(|part| !part.is_empty()) {
        line.vendor = vendor.to_string();
    }
    if let Some(description) = parts.next() {
        line.description = description.to_string();
    }
    Ok(line)
}

/// Parse `TERMINAL=AMOUNT`.
pub fn parse_tip(spec: &str) -> anyhow::Result<(PaymentTerminal, String)> {
    let Some((terminal, amount)) = spec.split_once('=') else {
        bail!("invalid tip '{spec}' (expected TERMINAL=AMOUNT, e.g. CLIP=150)");
    };
    let terminal: PaymentTerminal = parse_enum(terminal, "payment terminal")?;
    Ok((terminal, amount.trim().to_string()))
}
