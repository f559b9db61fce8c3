//! Currency and percentage formatting.

/// Format an amount as Mexican pesos in `es-MX` style: `$1,234.56`.
///
/// Negative amounts carry a leading minus (`-$50.00`). Non-finite input
/// renders as `$0.00`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_mxn(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0.00".to_string();
    }
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// Format a signed percentage delta with one decimal (`+12.5%`).
///
/// `None` (no comparable prior period) renders as `n/a`.
#[must_use]
pub fn format_percent_delta(delta: Option<f64>) -> String {
    match delta {
        Some(value) if value.is_finite() => format!("{value:+.1}%"),
        _ => "n/a".to_string(),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "$0.00")]
    #[case(5.0, "$5.00")]
    #[case(1250.0, "$1,250.00")]
    #[case(15450.5, "$15,450.50")]
    #[case(1_234_567.891, "$1,234,567.89")]
    #[case(-50.0, "-$50.00")]
    #[case(-0.001, "$0.00")]
    fn formats_pesos(#[case] amount: f64, #[case] expected: &str) {
        assert_eq!(format_mxn(amount), expected);
    }

    #[test]
    fn non_finite_renders_zero() {
        assert_eq!(format_mxn(f64::NAN), "$0.00");
        assert_eq!(format_mxn(f64::INFINITY), "$0.00");
    }

    #[test]
    fn percent_delta_is_signed() {
        assert_eq!(format_percent_delta(Some(12.5)), "+12.5%");
        assert_eq!(format_percent_delta(Some(-3.0)), "-3.0%");
        assert_eq!(format_percent_delta(None), "n/a");
    }
}
