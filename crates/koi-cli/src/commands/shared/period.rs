use chrono::{Datelike, NaiveDate};

use crate::cli::root_commands::PeriodArgs;

/// Resolve `--month/--year`, defaulting each to the current one.
#[must_use]
pub fn resolve_period(args: &PeriodArgs, today: NaiveDate) -> (u32, i32) {
    (
        args.month.unwrap_or_else(|| today.month()),
        args.year.unwrap_or_else(|| today.year()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_use_today() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert_eq!(resolve_period(&PeriodArgs::default(), today), (3, 2026));
        let args = PeriodArgs {
            month: Some(12),
            year: None,
        };
        assert_eq!(resolve_period(&args, today), (12, 2026));
    }
}
