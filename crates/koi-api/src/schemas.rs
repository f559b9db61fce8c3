//! Response schemas for the operations API.
//!
//! Every field the client reads has an explicit default so a missing or
//! `null` value never fails a whole response.

use chrono::NaiveDate;
use koi_core::entities::{ExpenseLineItem, TipEntry};
use koi_core::enums::{CashCountStatus, ExpenseCategory, PaymentMethod, PaymentStatus};
use koi_core::intake::ExtractedFields;
use serde::{Deserialize, Deserializer, Serialize};

/// Treat `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ── Dashboard ──────────────────────────────────────────────────────

/// Precomputed metrics for the dashboard cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ventas_hoy: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ventas_semana: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ventas_mes: f64,
    #[serde(default)]
    pub cambio_vs_ayer: Option<f64>,
    #[serde(default)]
    pub cambio_vs_semana_anterior: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gastos_pendientes: u32,
    #[serde(default)]
    pub estado_caja: Option<String>,
    #[serde(default)]
    pub ultimo_arqueo: Option<String>,
    #[serde(default)]
    pub utilidad_mes: Option<f64>,
}

/// One point of the daily sales series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySales {
    pub fecha: NaiveDate,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: f64,
}

// ── Shift close ────────────────────────────────────────────────────

/// Closing balance of the most recent shift.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LastBalance {
    #[serde(default, deserialize_with = "null_as_default")]
    pub saldo: f64,
    #[serde(default)]
    pub fecha: Option<NaiveDate>,
    #[serde(default)]
    pub estado: Option<CashCountStatus>,
    #[serde(default)]
    pub mensaje: Option<String>,
}

impl LastBalance {
    /// Balance worth pre-filling: only a positive one.
    #[must_use]
    pub fn prefill_value(&self) -> Option<f64> {
        (self.saldo > 0.0).then_some(self.saldo)
    }
}

/// A stored shift close as returned by create/get/list/arqueo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftCloseRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub fecha: NaiveDate,
    #[serde(default, deserialize_with = "null_as_default")]
    pub responsable: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub elaborado_por: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub saldo_inicial: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ventas_efectivo: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_gastos: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub saldo_final_esperado: f64,
    #[serde(default)]
    pub efectivo_fisico: Option<f64>,
    #[serde(default)]
    pub diferencia: Option<f64>,
    #[serde(default)]
    pub estado: Option<CashCountStatus>,
    #[serde(default)]
    pub notas: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gastos: Vec<ExpenseLineItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub propinas: Vec<TipEntry>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ShiftCloseRecord {
    #[must_use]
    pub fn total_tips(&self) -> f64 {
        self.propinas.iter().map(|tip| tip.amount).sum()
    }
}

// ── Expenses ───────────────────────────────────────────────────────

/// Fields read from a receipt by the extraction service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OcrExtraction {
    #[serde(default)]
    pub fecha: Option<String>,
    #[serde(default)]
    pub proveedor: Option<String>,
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub confianza: f64,
}

impl From<OcrExtraction> for ExtractedFields {
    fn from(ocr: OcrExtraction) -> Self {
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        Self {
            date: ocr
                .fecha
                .as_deref()
                .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()),
            vendor: non_blank(ocr.proveedor),
            category: non_blank(ocr.categoria),
            total: ocr.total,
            description: non_blank(ocr.descripcion),
        }
    }
}

/// A stored standalone expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub fecha: NaiveDate,
    #[serde(default, deserialize_with = "null_as_default")]
    pub proveedor: String,
    pub categoria: ExpenseCategory,
    #[serde(default, deserialize_with = "null_as_default")]
    pub monto: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metodo_pago: PaymentMethod,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub comprobante_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub estado: PaymentStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dashboard_defaults_missing_and_null_fields() {
        let summary: DashboardSummary = serde_json::from_str(
            r#"{"ventas_hoy": 15230.5, "ventas_mes": null, "cambio_vs_ayer": 12.5}"#,
        )
        .unwrap();
        assert_eq!(summary.ventas_hoy, 15230.5);
        assert_eq!(summary.ventas_semana, 0.0);
        assert_eq!(summary.ventas_mes, 0.0);
        assert_eq!(summary.cambio_vs_ayer, Some(12.5));
        assert_eq!(summary.cambio_vs_semana_anterior, None);
        assert_eq!(summary.gastos_pendientes, 0);
    }

    #[test]
    fn daily_sales_total_defaults_to_zero() {
        let series: Vec<DailySales> = serde_json::from_str(
            r#"[{"fecha": "2026-02-01", "total": 18400.0}, {"fecha": "2026-02-02", "total": null}]"#,
        )
        .unwrap();
        assert_eq!(series[1].total, 0.0);
        assert!(serde_json::from_str::<Vec<DailySales>>(r#"[{"total": 1}]"#).is_err());
    }

    #[test]
    fn last_balance_without_previous_close() {
        let balance: LastBalance = serde_json::from_str(
            r#"{"saldo": 0.0, "fecha": null, "mensaje": "No hay cierres previos"}"#,
        )
        .unwrap();
        assert_eq!(balance.prefill_value(), None);
        assert_eq!(balance.estado, None);

        let balance: LastBalance = serde_json::from_str(
            r#"{"saldo": 1820.5, "fecha": "2026-02-13", "estado": "FALTANTE"}"#,
        )
        .unwrap();
        assert_eq!(balance.prefill_value(), Some(1820.5));
        assert_eq!(balance.estado, Some(CashCountStatus::Faltante));
    }

    #[test]
    fn ocr_result_maps_to_extracted_fields() {
        let ocr: OcrExtraction = serde_json::from_str(
            r#"{"fecha": "2026-02-27", "proveedor": "CFE", "categoria": "SERVICIOS", "total": 1840.0, "descripcion": "", "confianza": 0.91}"#,
        )
        .unwrap();
        let fields = ExtractedFields::from(ocr);
        assert_eq!(fields.date, NaiveDate::from_ymd_opt(2026, 2, 27));
        assert_eq!(fields.vendor.as_deref(), Some("CFE"));
        assert_eq!(fields.total, Some(1840.0));
        assert_eq!(fields.description, None);
    }

    #[test]
    fn ocr_result_with_unreadable_date() {
        let ocr: OcrExtraction =
            serde_json::from_str(r#"{"fecha": "27/02/2026", "confianza": null}"#).unwrap();
        assert_eq!(ocr.confianza, 0.0);
        assert_eq!(ExtractedFields::from(ocr).date, None);
    }

    #[test]
    fn expense_record_defaults_status() {
        let record: ExpenseRecord = serde_json::from_str(
            r#"{"id": 7, "fecha": "2026-02-27", "proveedor": "CFE", "categoria": "SERVICIOS", "monto": 1840.0, "metodo_pago": "TRANSFERENCIA"}"#,
        )
        .unwrap();
        assert_eq!(record.estado, PaymentStatus::Pendiente);
        assert_eq!(record.metodo_pago, PaymentMethod::Transferencia);
    }
}
