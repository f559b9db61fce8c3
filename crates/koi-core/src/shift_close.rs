//! Shift-close form state and aggregation.
//!
//! Holds the raw text of every field, derives expense and tip totals, feeds
//! the reconciliation calculator, and turns the form into a validated
//! [`ShiftClose`] payload.
//!
//! Invariants:
//! - The expense list always has at least one line.
//! - There is exactly one tip entry per [`PaymentTerminal`], in
//!   [`PaymentTerminal::ALL`] order.
//! - A submission never leaves the form while another one is pending.

use chrono::NaiveDate;
use serde::Serialize;

use crate::amount::{amount_or_zero, parse_amount, sum_amounts};
use crate::entities::{ExpenseLineItem, ShiftClose, TipEntry};
use crate::enums::{ExpenseCategory, ExpenseClass, PaymentTerminal, VoucherType};
use crate::errors::CoreError;
use crate::reconciliation::{ReconciliationInput, ReconciliationResult, reconcile};

/// Vendor pre-filled on new expense lines.
pub const DEFAULT_VENDOR: &str = "KOI";

/// One editable expense row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseLineInput {
    pub vendor: String,
    pub class: ExpenseClass,
    pub category: ExpenseCategory,
    pub voucher: VoucherType,
    pub description: String,
    pub amount: String,
}

impl Default for ExpenseLineInput {
    fn default() -> Self {
        Self {
            vendor: DEFAULT_VENDOR.to_string(),
            class: ExpenseClass::Nmp,
            category: ExpenseCategory::ComidaPersonal,
            voucher: VoucherType::Vale,
            description: String::new(),
            amount: String::new(),
        }
    }
}

impl ExpenseLineInput {
    /// Convert to a payload line if the amount is strictly positive.
    fn to_line_item(&self) -> Option<ExpenseLineItem> {
        let amount = parse_amount(&self.amount).filter(|value| *value > 0.0)?;
        let description = self.description.trim();
        Some(ExpenseLineItem {
            vendor: self.vendor.trim().to_string(),
            class: self.class,
            category: self.category,
            voucher: self.voucher,
            description: (!description.is_empty()).then(|| description.to_string()),
            amount,
        })
    }
}

/// One editable tip field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TipInput {
    pub terminal: PaymentTerminal,
    pub amount: String,
}

/// The shift-close form.
#[derive(Debug, Clone, Serialize)]
pub struct ShiftCloseForm {
    pub date: NaiveDate,
    pub responsible: String,
    pub preparer: String,
    pub opening_balance: String,
    pub cash_sales: String,
    pub counted_cash: String,
    pub notes: String,
    expenses: Vec<ExpenseLineInput>,
    tips: Vec<TipInput>,
    saving: bool,
    error: Option<String>,
    success: Option<String>,
}

impl ShiftCloseForm {
    /// Empty form for the given shift date with one default expense line.
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            responsible: String::new(),
            preparer: String::new(),
            opening_balance: String::new(),
            cash_sales: String::new(),
            counted_cash: String::new(),
            notes: String::new(),
            expenses: vec![ExpenseLineInput::default()],
            tips: PaymentTerminal::ALL
                .into_iter()
                .map(|terminal| TipInput {
                    terminal,
                    amount: String::new(),
                })
                .collect(),
            saving: false,
            error: None,
            success: None,
        }
    }

    // -- expense lines ------------------------------------------------------

    #[must_use]
    pub fn expenses(&self) -> &[ExpenseLineInput] {
        &self.expenses
    }

    /// Append a default expense line and return its index.
    pub fn add_expense(&mut self) -> usize {
        self.push_expense(ExpenseLineInput::default())
    }

    /// Append a prepared expense line and return its index.
    pub fn push_expense(&mut self, line: ExpenseLineInput) -> usize {
        self.expenses.push(line);
        self.expenses.len() - 1
    }

    /// Remove the line at `index`. The last remaining line is never removed.
    pub fn remove_expense(&mut self, index: usize) -> bool {
        if self.expenses.len() <= 1 || index >= self.expenses.len() {
            return false;
        }
        self.expenses.remove(index);
        true
    }

    pub fn expense_mut(&mut self, index: usize) -> Option<&mut ExpenseLineInput> {
        self.expenses.get_mut(index)
    }

    /// Fill the first line if it is still untouched, otherwise append.
    ///
    /// Lets callers build a form from a list without leaving the initial
    /// blank line behind.
    pub fn fill_or_push_expense(&mut self, line: ExpenseLineInput) -> usize {
        if self.expenses.len() == 1 && self.expenses[0] == ExpenseLineInput::default() {
            self.expenses[0] = line;
            0
        } else {
            self.push_expense(line)
        }
    }

    // -- tips ---------------------------------------------------------------

    #[must_use]
    pub fn tips(&self) -> &[TipInput] {
        &self.tips
    }

    pub fn set_tip(&mut self, terminal: PaymentTerminal, amount: impl Into<String>) {
        if let Some(tip) = self.tips.iter_mut().find(|tip| tip.terminal == terminal) {
            tip.amount = amount.into();
        }
    }

    // -- derived figures ----------------------------------------------------

    #[must_use]
    pub fn total_expenses(&self) -> f64 {
        sum_amounts(self.expenses.iter().map(|line| line.amount.as_str()))
    }

    #[must_use]
    pub fn total_tips(&self) -> f64 {
        sum_amounts(self.tips.iter().map(|tip| tip.amount.as_str()))
    }

    #[must_use]
    pub fn reconciliation_input(&self) -> ReconciliationInput {
        ReconciliationInput {
            opening_balance: amount_or_zero(&self.opening_balance),
            cash_sales: amount_or_zero(&self.cash_sales),
            total_expenses: self.total_expenses(),
            total_tips: self.total_tips(),
            counted: parse_amount(&self.counted_cash),
        }
    }

    #[must_use]
    pub fn reconciliation(&self) -> ReconciliationResult {
        reconcile(&self.reconciliation_input())
    }

    /// Pre-fill the opening balance from the previous shift's closing balance.
    ///
    /// Only applies when the field is still empty and the previous balance is
    /// positive. Returns whether the field changed.
    pub fn prefill_opening_balance(&mut self, previous: Option<f64>) -> bool {
        let Some(balance) = previous.filter(|value| value.is_finite() && *value > 0.0) else {
            return false;
        };
        if !self.opening_balance.trim().is_empty() {
            return false;
        }
        self.opening_balance = balance.to_string();
        true
    }

    // -- submission ---------------------------------------------------------

    /// Validate the form and build the payload without touching form state.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the responsible person or the
    /// preparer is missing, or the opening balance is not positive.
    pub fn build_submission(&self) -> Result<ShiftClose, CoreError> {
        let responsible = self.responsible.trim();
        let preparer = self.preparer.trim();
        if responsible.is_empty() || preparer.is_empty() {
            return Err(CoreError::validation(
                "responsible person and preparer are required",
            ));
        }
        let opening_balance = amount_or_zero(&self.opening_balance);
        if opening_balance <= 0.0 {
            return Err(CoreError::validation(
                "opening balance must be greater than 0",
            ));
        }

        let notes = self.notes.trim();
        Ok(ShiftClose {
            date: self.date,
            responsible: responsible.to_string(),
            preparer: preparer.to_string(),
            opening_balance,
            cash_sales: amount_or_zero(&self.cash_sales),
            expenses: self
                .expenses
                .iter()
                .filter_map(ExpenseLineInput::to_line_item)
                .collect(),
            tips: self
                .tips
                .iter()
                .filter_map(|tip| {
                    parse_amount(&tip.amount)
                        .filter(|value| *value > 0.0)
                        .map(|amount| TipEntry {
                            terminal: tip.terminal,
                            amount,
                        })
                })
                .collect(),
            counted_cash: parse_amount(&self.counted_cash),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }

    /// Start a submission: validate, raise the `saving` flag, clear messages.
    ///
    /// A validation failure is also recorded as the form's error message.
    ///
    /// # Errors
    ///
    /// [`CoreError::SubmissionInFlight`] while a previous submit is pending,
    /// or the validation error from [`Self::build_submission`].
    pub fn begin_submit(&mut self) -> Result<ShiftClose, CoreError> {
        if self.saving {
            return Err(CoreError::SubmissionInFlight);
        }
        self.error = None;
        self.success = None;
        match self.build_submission() {
            Ok(payload) => {
                self.saving = true;
                Ok(payload)
            }
            Err(error) => {
                self.error = Some(error.to_string());
                Err(error)
            }
        }
    }

    /// Record the outcome of the network call and lower the `saving` flag.
    pub fn finish_submit(&mut self, outcome: Result<(), String>) {
        self.saving = false;
        match outcome {
            Ok(()) => {
                self.success = Some("shift close recorded".to_string());
                self.error = None;
            }
            Err(message) => {
                self.error = Some(message);
                self.success = None;
            }
        }
    }

    #[must_use]
    pub const fn is_saving(&self) -> bool {
        self.saving
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconciliation::ReconciliationStatus;
    use pretty_assertions::assert_eq;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 10).unwrap()
    }

    fn filled_form() -> ShiftCloseForm {
        let mut form = ShiftCloseForm::new(date());
        form.responsible = "ANAIS".into();
        form.preparer = "SEBASTIAN".into();
        form.opening_balance = "1000".into();
        form.cash_sales = "500".into();
        form.expense_mut(0).unwrap().amount = "200".into();
        form.set_tip(PaymentTerminal::Parrot, "50");
        form
    }

    #[test]
    fn new_form_has_one_default_line_and_three_tips() {
        let form = ShiftCloseForm::new(date());
        assert_eq!(form.expenses().len(), 1);
        assert_eq!(form.expenses()[0].vendor, "KOI");
        assert_eq!(form.expenses()[0].voucher, VoucherType::Vale);
        let terminals: Vec<_> = form.tips().iter().map(|tip| tip.terminal).collect();
        assert_eq!(terminals, PaymentTerminal::ALL.to_vec());
    }

    #[test]
    fn last_line_cannot_be_removed() {
        let mut form = ShiftCloseForm::new(date());
        assert!(!form.remove_expense(0));
        form.add_expense();
        assert!(form.remove_expense(1));
        assert_eq!(form.expenses().len(), 1);
        assert!(!form.remove_expense(5));
    }

    #[test]
    fn totals_ignore_invalid_amounts() {
        let mut form = ShiftCloseForm::new(date());
        form.expense_mut(0).unwrap().amount = "120.5".into();
        let idx = form.add_expense();
        form.expense_mut(idx).unwrap().amount = "n/a".into();
        let idx = form.add_expense();
        form.expense_mut(idx).unwrap().amount = "79.5".into();
        form.set_tip(PaymentTerminal::Clip, "abc");
        form.set_tip(PaymentTerminal::Getnet, "30");

        assert!((form.total_expenses() - 200.0).abs() < 1e-9);
        assert!((form.total_tips() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn reconciliation_follows_form_fields() {
        let mut form = filled_form();
        assert_eq!(
            form.reconciliation().status,
            ReconciliationStatus::NoCountYet
        );

        form.counted_cash = "1250".into();
        let result = form.reconciliation();
        assert_eq!(result.status, ReconciliationStatus::Balanced);
        assert!((result.expected - 1250.0).abs() < 1e-9);

        form.counted_cash = "1300".into();
        assert_eq!(form.reconciliation().variance, Some(50.0));
    }

    #[test]
    fn prefill_only_fills_empty_field_with_positive_balance() {
        let mut form = ShiftCloseForm::new(date());
        assert!(!form.prefill_opening_balance(None));
        assert!(!form.prefill_opening_balance(Some(0.0)));
        assert!(form.opening_balance.is_empty());

        assert!(form.prefill_opening_balance(Some(1820.5)));
        assert_eq!(form.opening_balance, "1820.5");

        form.opening_balance = "900".into();
        assert!(!form.prefill_opening_balance(Some(1820.5)));
        assert_eq!(form.opening_balance, "900");
    }

    #[test]
    fn submission_requires_people_and_positive_opening() {
        let mut form = filled_form();
        form.preparer = "  ".into();
        assert!(matches!(
            form.build_submission(),
            Err(CoreError::Validation(_))
        ));

        let mut form = filled_form();
        form.opening_balance = "0".into();
        let err = form.build_submission().unwrap_err();
        assert_eq!(
            err,
            CoreError::validation("opening balance must be greater than 0")
        );

        let mut form = filled_form();
        form.opening_balance = String::new();
        assert!(form.build_submission().is_err());
    }

    #[test]
    fn submission_filters_zero_and_invalid_lines() {
        let mut form = filled_form();
        let idx = form.add_expense();
        form.expense_mut(idx).unwrap().amount = "0".into();
        let idx = form.add_expense();
        form.expense_mut(idx).unwrap().amount = "garbage".into();
        form.notes = "   ".into();

        let payload = form.build_submission().unwrap();
        assert_eq!(payload.expenses.len(), 1);
        assert_eq!(payload.expenses[0].amount, 200.0);
        assert_eq!(payload.tips.len(), 1);
        assert_eq!(payload.tips[0].terminal, PaymentTerminal::Parrot);
        assert_eq!(payload.counted_cash, None);
        assert_eq!(payload.notes, None);
    }

    #[test]
    fn saving_flag_blocks_double_submit() {
        let mut form = filled_form();
        assert!(form.begin_submit().is_ok());
        assert!(form.is_saving());
        assert_eq!(form.begin_submit(), Err(CoreError::SubmissionInFlight));

        form.finish_submit(Err("API error: 500".into()));
        assert!(!form.is_saving());
        assert_eq!(form.error(), Some("API error: 500"));

        assert!(form.begin_submit().is_ok());
        assert_eq!(form.error(), None);
        form.finish_submit(Ok(()));
        assert_eq!(form.success(), Some("shift close recorded"));
    }

    #[test]
    fn validation_failure_is_recorded_without_saving() {
        let mut form = ShiftCloseForm::new(date());
        assert!(form.begin_submit().is_err());
        assert!(!form.is_saving());
        assert!(form.error().is_some_and(|msg| msg.contains("required")));
    }

    #[test]
    fn fill_or_push_reuses_untouched_first_line() {
        let mut form = ShiftCloseForm::new(date());
        let line = ExpenseLineInput {
            amount: "45".into(),
            ..ExpenseLineInput::default()
        };
        assert_eq!(form.fill_or_push_expense(line.clone()), 0);
        assert_eq!(form.fill_or_push_expense(line), 1);
        assert_eq!(form.expenses().len(), 2);
    }
}
