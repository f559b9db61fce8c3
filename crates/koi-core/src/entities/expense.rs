use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{ExpenseCategory, ExpenseClass, PaymentMethod, VoucherType};

/// One cash expense recorded in a shift close.
///
/// The expense date is the shift date, so it is not repeated per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseLineItem {
    #[serde(rename = "proveedor")]
    pub vendor: String,
    #[serde(rename = "clase", default)]
    pub class: ExpenseClass,
    #[serde(rename = "categoria")]
    pub category: ExpenseCategory,
    #[serde(rename = "comprobante")]
    pub voucher: VoucherType,
    #[serde(
        rename = "descripcion",
        default,
        serialize_with = "super::empty_when_none",
        deserialize_with = "super::blank_as_none"
    )]
    pub description: Option<String>,
    #[serde(rename = "monto")]
    pub amount: f64,
}

/// A standalone expense submitted from the intake flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "proveedor")]
    pub vendor: String,
    #[serde(rename = "categoria")]
    pub category: ExpenseCategory,
    #[serde(rename = "monto")]
    pub amount: f64,
    #[serde(rename = "metodo_pago")]
    pub payment_method: PaymentMethod,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn line_item_uses_wire_names() {
        let item = ExpenseLineItem {
            vendor: "KOI".into(),
            class: ExpenseClass::Nmp,
            category: ExpenseCategory::ComidaPersonal,
            voucher: VoucherType::Vale,
            description: None,
            amount: 120.0,
        };
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({
                "proveedor": "KOI",
                "clase": "NMP",
                "categoria": "COMIDA_PERSONAL",
                "comprobante": "VALE",
                "descripcion": "",
                "monto": 120.0
            })
        );
    }

    #[test]
    fn blank_description_reads_as_none() {
        let item: ExpenseLineItem = serde_json::from_value(json!({
            "proveedor": "Mercado",
            "categoria": "COMPRAS_INSUMOS",
            "comprobante": "TICKET",
            "descripcion": "  ",
            "monto": 80.5
        }))
        .unwrap();
        assert_eq!(item.description, None);
        assert_eq!(item.class, ExpenseClass::Nmp);
    }

    #[test]
    fn new_expense_serializes_date_and_method() {
        let expense = NewExpense {
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            vendor: "CFE".into(),
            category: ExpenseCategory::Servicios,
            amount: 2500.5,
            payment_method: PaymentMethod::Transferencia,
            description: Some("Luz marzo".into()),
        };
        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(value["fecha"], "2026-03-14");
        assert_eq!(value["metodo_pago"], "TRANSFERENCIA");
        assert_eq!(value["monto"], 2500.5);
    }
}
