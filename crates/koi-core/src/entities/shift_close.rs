use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ExpenseLineItem;
use crate::enums::PaymentTerminal;

/// Tips paid out in cash for one card terminal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TipEntry {
    pub terminal: PaymentTerminal,
    #[serde(rename = "monto")]
    pub amount: f64,
}

/// End-of-shift record combining expenses, tips, and the cash count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftClose {
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "responsable")]
    pub responsible: String,
    #[serde(rename = "elaborado_por")]
    pub preparer: String,
    #[serde(rename = "saldo_inicial")]
    pub opening_balance: f64,
    #[serde(rename = "ventas_efectivo", default)]
    pub cash_sales: f64,
    #[serde(rename = "gastos", default)]
    pub expenses: Vec<ExpenseLineItem>,
    #[serde(rename = "propinas", default)]
    pub tips: Vec<TipEntry>,
    #[serde(rename = "efectivo_fisico", default)]
    pub counted_cash: Option<f64>,
    #[serde(rename = "notas", default)]
    pub notes: Option<String>,
}

impl ShiftClose {
    #[must_use]
    pub fn total_expenses(&self) -> f64 {
        self.expenses.iter().map(|item| item.amount).sum()
    }

    #[must_use]
    pub fn total_tips(&self) -> f64 {
        self.tips.iter().map(|tip| tip.amount).sum()
    }
}

/// Late cash count registered against an existing shift close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashCountUpdate {
    #[serde(rename = "efectivo_fisico")]
    pub counted_cash: f64,
}
