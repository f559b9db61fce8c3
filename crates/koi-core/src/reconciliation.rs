//! Cash reconciliation calculator.
//!
//! ```text
//! expected = opening + cash_sales - expenses - tips
//! variance = counted - expected
//! ```
//!
//! The variance is rounded to whole cents before it is classified, so a
//! one-cent difference is never lost to floating-point noise. Zero cents is
//! balanced; otherwise the sign decides between overage and shortage. Without a physical count
//! there is no variance at all.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::amount::parse_amount;
use crate::enums::CashCountStatus;
use crate::money::format_mxn;

/// Smallest discrepancy that counts as a difference.
pub const CURRENCY_EPSILON: f64 = 0.01;

/// Outcome of comparing a physical count with the expected balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconciliationStatus {
    Balanced,
    Overage,
    Shortage,
    NoCountYet,
}

impl ReconciliationStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::Overage => "overage",
            Self::Shortage => "shortage",
            Self::NoCountYet => "no_count_yet",
        }
    }

    /// The API's stored equivalent. `NoCountYet` has none.
    #[must_use]
    pub const fn as_cash_count_status(self) -> Option<CashCountStatus> {
        match self {
            Self::Balanced => Some(CashCountStatus::Cuadrada),
            Self::Overage => Some(CashCountStatus::Sobrante),
            Self::Shortage => Some(CashCountStatus::Faltante),
            Self::NoCountYet => None,
        }
    }
}

impl fmt::Display for ReconciliationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CashCountStatus> for ReconciliationStatus {
    fn from(status: CashCountStatus) -> Self {
        match status {
            CashCountStatus::Cuadrada => Self::Balanced,
            CashCountStatus::Sobrante => Self::Overage,
            CashCountStatus::Faltante => Self::Shortage,
        }
    }
}

/// Numeric inputs of a reconciliation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationInput {
    pub opening_balance: f64,
    pub cash_sales: f64,
    pub total_expenses: f64,
    pub total_tips: f64,
    /// Physically counted cash. `None` when nothing was entered.
    pub counted: Option<f64>,
}

/// Derived reconciliation figures. Recomputed on every input change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    pub expected: f64,
    pub variance: Option<f64>,
    pub status: ReconciliationStatus,
}

impl ReconciliationResult {
    /// Absolute size of the difference, if a count exists.
    #[must_use]
    pub fn discrepancy(&self) -> Option<f64> {
        self.variance.map(f64::abs)
    }

    /// One-line description such as `Overage: $50.00`.
    #[must_use]
    pub fn summary(&self) -> String {
        match (self.status, self.discrepancy()) {
            (ReconciliationStatus::Balanced, _) => "Balanced".to_string(),
            (ReconciliationStatus::Overage, Some(amount)) => {
                format!("Overage: {}", format_mxn(amount))
            }
            (ReconciliationStatus::Shortage, Some(amount)) => {
                format!("Shortage: {}", format_mxn(amount))
            }
            _ => "No count yet".to_string(),
        }
    }
}

/// Balance the drawer should hold given recorded inflows and outflows.
#[must_use]
pub fn expected_balance(
    opening_balance: f64,
    cash_sales: f64,
    total_expenses: f64,
    total_tips: f64,
) -> f64 {
    opening_balance + cash_sales - total_expenses - total_tips
}

/// Round an amount to the nearest cent.
#[must_use]
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Classify a variance after rounding it to whole cents.
#[must_use]
pub fn classify_variance(variance: f64) -> ReconciliationStatus {
    let cents = (variance / CURRENCY_EPSILON).round();
    if cents.abs() < 0.5 {
        ReconciliationStatus::Balanced
    } else if cents > 0.0 {
        ReconciliationStatus::Overage
    } else {
        ReconciliationStatus::Shortage
    }
}

/// Run the reconciliation for a full set of inputs.
#[must_use]
pub fn reconcile(input: &ReconciliationInput) -> ReconciliationResult {
    let expected = expected_balance(
        input.opening_balance,
        input.cash_sales,
        input.total_expenses,
        input.total_tips,
    );
    compare_with_expected(expected, input.counted)
}

/// Compare a count typed by the user against a theoretical balance.
///
/// Empty or invalid text means no count was entered.
#[must_use]
pub fn compare_count(theoretical: f64, counted_text: &str) -> ReconciliationResult {
    compare_with_expected(theoretical, parse_amount(counted_text))
}

fn compare_with_expected(expected: f64, counted: Option<f64>) -> ReconciliationResult {
    match counted {
        Some(counted) => {
            let variance = round_cents(counted - expected);
            ReconciliationResult {
                expected,
                variance: Some(variance),
                status: classify_variance(variance),
            }
        }
        None => ReconciliationResult {
            expected,
            variance: None,
            status: ReconciliationStatus::NoCountYet,
        },
    }
}
