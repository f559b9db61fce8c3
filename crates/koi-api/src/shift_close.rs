//! Shift-close endpoints.

use chrono::NaiveDate;
use koi_core::entities::{CashCountUpdate, ShiftClose};

use crate::schemas::{LastBalance, ShiftCloseRecord};
use crate::{ApiClient, error::ApiError, http::read_json};

/// Filters for listing shift closes. `None` fields are omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShiftCloseQuery {
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub limit: Option<u32>,
}

impl ShiftCloseQuery {
    fn to_query_string(self) -> String {
        let mut params = Vec::new();
        if let Some(month) = self.month {
            params.push(format!("mes={month}"));
        }
        if let Some(year) = self.year {
            params.push(format!("anio={year}"));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={limit}"));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

impl ApiClient {
    /// Closing balance of the previous shift.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status, or a
    /// body that does not match the schema.
    pub async fn last_balance(&self) -> Result<LastBalance, ApiError> {
        let url = self.url("/api/cierre-turno/ultimo-saldo/final");
        read_json(self.http.get(&url).send().await?).await
    }

    /// Submit a shift close.
    ///
    /// # Errors
    ///
    /// Same as [`Self::last_balance`].
    pub async fn create_shift_close(
        &self,
        close: &ShiftClose,
    ) -> Result<ShiftCloseRecord, ApiError> {
        let url = self.url("/api/cierre-turno");
        tracing::info!(
            fecha = %close.date,
            gastos = close.expenses.len(),
            propinas = close.tips.len(),
            "submitting shift close"
        );
        read_json(self.http.post(&url).json(close).send().await?).await
    }

    /// List recent shift closes, newest first.
    ///
    /// # Errors
    ///
    /// Same as [`Self::last_balance`].
    pub async fn list_shift_closes(
        &self,
        query: ShiftCloseQuery,
    ) -> Result<Vec<ShiftCloseRecord>, ApiError> {
        let url = self.url(&format!("/api/cierre-turno{}", query.to_query_string()));
        read_json(self.http.get(&url).send().await?).await
    }

    /// Fetch the shift close for one date.
    ///
    /// # Errors
    ///
    /// Same as [`Self::last_balance`]; a missing date is `Status { status: 404 }`.
    pub async fn shift_close(&self, date: NaiveDate) -> Result<ShiftCloseRecord, ApiError> {
        let url = self.url(&format!("/api/cierre-turno/{date}"));
        read_json(self.http.get(&url).send().await?).await
    }

    /// Register a physical cash count against an existing shift close.
    ///
    /// # Errors
    ///
    /// Same as [`Self::shift_close`].
    pub async fn register_cash_count(
        &self,
        date: NaiveDate,
        counted_cash: f64,
    ) -> Result<ShiftCloseRecord, ApiError> {
        let url = self.url(&format!("/api/cierre-turno/{date}/arqueo"));
        let body = CashCountUpdate { counted_cash };
        tracing::info!(fecha = %date, efectivo_fisico = counted_cash, "registering cash count");
        read_json(self.http.patch(&url).json(&body).send().await?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "id": 41,
        "fecha": "2026-02-14",
        "responsable": "ANAIS",
        "elaborado_por": "SEBASTIAN",
        "saldo_inicial": 1000.0,
        "ventas_efectivo": 500.0,
        "total_gastos": 200.0,
        "saldo_final_esperado": 1250.0,
        "efectivo_fisico": 1300.0,
        "diferencia": 50.0,
        "estado": "SOBRANTE",
        "notas": null,
        "gastos": [
            {"id": 1, "cierre_id": 41, "proveedor": "KOI", "clase": "NMP", "categoria": "COMIDA_PERSONAL", "comprobante": "VALE", "descripcion": "", "monto": 200.0}
        ],
        "propinas": [
            {"id": 1, "cierre_id": 41, "terminal": "CLIP", "monto": 50.0}
        ],
        "created_at": "2026-02-14T23:05:11.204913"
    }"#;

    #[test]
    fn parse_shift_close_record() {
        let record: ShiftCloseRecord = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(record.id, Some(41));
        assert_eq!(record.saldo_final_esperado, 1250.0);
        assert_eq!(record.gastos.len(), 1);
        assert_eq!(record.gastos[0].description, None);
        assert_eq!(record.total_tips(), 50.0);
        assert_eq!(
            record.estado,
            Some(koi_core::enums::CashCountStatus::Sobrante)
        );
    }

    #[test]
    fn query_string_omits_unset_filters() {
        assert_eq!(ShiftCloseQuery::default().to_query_string(), "");
        let query = ShiftCloseQuery {
            month: Some(2),
            year: Some(2026),
            limit: None,
        };
        assert_eq!(query.to_query_string(), "?mes=2&anio=2026");
    }
}
