//! End-to-end shift-close scenarios: form edits feed the reconciliation and
//! produce the JSON body the API expects.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;

use koi_core::enums::{ExpenseCategory, PaymentTerminal, VoucherType};
use koi_core::reconciliation::{ReconciliationStatus, compare_count};
use koi_core::shift_close::{ExpenseLineInput, ShiftCloseForm};

fn shift_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()
}

fn evening_shift() -> ShiftCloseForm {
    let mut form = ShiftCloseForm::new(shift_date());
    form.responsible = " ANAIS ".into();
    form.preparer = "SEBASTIAN".into();
    form.prefill_opening_balance(Some(1000.0));
    form.cash_sales = "500".into();

    form.fill_or_push_expense(ExpenseLineInput {
        amount: "150".into(),
        description: "Comida staff".into(),
        ..ExpenseLineInput::default()
    });
    form.push_expense(ExpenseLineInput {
        vendor: "Garrafones".into(),
        category: ExpenseCategory::ComprasInsumos,
        voucher: VoucherType::Ticket,
        amount: "50".into(),
        ..ExpenseLineInput::default()
    });
    form.set_tip(PaymentTerminal::Clip, "50");
    form
}

#[test]
fn balanced_shift_produces_full_payload() {
    let mut form = evening_shift();
    form.counted_cash = "1250".into();

    let result = form.reconciliation();
    assert_eq!(result.status, ReconciliationStatus::Balanced);
    assert_eq!(result.summary(), "Balanced");

    let payload = form.begin_submit().unwrap();
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({
            "fecha": "2026-02-14",
            "responsable": "ANAIS",
            "elaborado_por": "SEBASTIAN",
            "saldo_inicial": 1000.0,
            "ventas_efectivo": 500.0,
            "gastos": [
                {
                    "proveedor": "KOI",
                    "clase": "NMP",
                    "categoria": "COMIDA_PERSONAL",
                    "comprobante": "VALE",
                    "descripcion": "Comida staff",
                    "monto": 150.0
                },
                {
                    "proveedor": "Garrafones",
                    "clase": "NMP",
                    "categoria": "COMPRAS_INSUMOS",
                    "comprobante": "TICKET",
                    "descripcion": "",
                    "monto": 50.0
                }
            ],
            "propinas": [{ "terminal": "CLIP", "monto": 50.0 }],
            "efectivo_fisico": 1250.0,
            "notas": null
        })
    );
}

#[test]
fn overage_is_reported_with_amount() {
    let mut form = evening_shift();
    form.counted_cash = "1300".into();

    let result = form.reconciliation();
    assert_eq!(result.status, ReconciliationStatus::Overage);
    assert_eq!(result.summary(), "Overage: $50.00");
}

#[test]
fn counted_zero_is_a_real_count() {
    let mut form = evening_shift();
    form.counted_cash = "0".into();
    assert_eq!(form.reconciliation().status, ReconciliationStatus::Shortage);

    form.counted_cash = "   ".into();
    assert_eq!(
        form.reconciliation().status,
        ReconciliationStatus::NoCountYet
    );
}

#[test]
fn standalone_count_uses_same_rules() {
    assert_eq!(compare_count(980.0, "979.995").status, ReconciliationStatus::Balanced);
    assert_eq!(compare_count(980.0, "960").summary(), "Shortage: $20.00");
    assert_eq!(compare_count(980.0, "").status, ReconciliationStatus::NoCountYet);
}
