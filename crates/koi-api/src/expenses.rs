//! Expense endpoints: receipt extraction, creation, listing.

use std::path::Path;

use chrono::NaiveDate;
use koi_core::entities::NewExpense;
use koi_core::enums::ExpenseCategory;

use crate::schemas::{ExpenseRecord, OcrExtraction};
use crate::{ApiClient, error::ApiError, http::read_json};

/// Filters for listing expenses. `None` fields are omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpenseQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub category: Option<ExpenseCategory>,
}

impl ExpenseQuery {
    fn to_query_string(self) -> String {
        let mut params = Vec::new();
        if let Some(from) = self.from {
            params.push(format!("fecha_inicio={from}"));
        }
        if let Some(to) = self.to {
            params.push(format!("fecha_fin={to}"));
        }
        if let Some(category) = self.category {
            params.push(format!("categoria={}", urlencoding::encode(category.as_str())));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

impl ApiClient {
    /// Upload a receipt and return the fields the extraction service read.
    ///
    /// The file goes out as the multipart field `file` with the given MIME
    /// type.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`] if the file cannot be read, otherwise the
    /// usual transport, status, and parse errors.
    pub async fn extract_receipt(
        &self,
        path: &Path,
        mime: &str,
    ) -> Result<OcrExtraction, ApiError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path.file_name().map_or_else(
            || "receipt".to_string(),
            |name| name.to_string_lossy().into_owned(),
        );
        tracing::info!(
            file = %file_name,
            bytes = bytes.len(),
            mime,
            "uploading receipt for extraction"
        );

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let url = self.url("/api/gastos/ocr");
        read_json(self.http.post(&url).multipart(form).send().await?).await
    }

    /// Record a standalone expense.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status, or a
    /// body that does not match the schema.
    pub async fn create_expense(&self, expense: &NewExpense) -> Result<ExpenseRecord, ApiError> {
        let url = self.url("/api/gastos");
        tracing::info!(
            proveedor = %expense.vendor,
            categoria = %expense.category,
            monto = expense.amount,
            "submitting expense"
        );
        read_json(self.http.post(&url).json(expense).send().await?).await
    }

    /// List recorded expenses, newest first.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create_expense`].
    pub async fn list_expenses(
        &self,
        query: ExpenseQuery,
    ) -> Result<Vec<ExpenseRecord>, ApiError> {
        let url = self.url(&format!("/api/gastos{}", query.to_query_string()));
        read_json(self.http.get(&url).send().await?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn expense_query_string() {
        let query = ExpenseQuery {
            from: NaiveDate::from_ymd_opt(2026, 2, 1),
            to: NaiveDate::from_ymd_opt(2026, 2, 28),
            category: Some(ExpenseCategory::Servicios),
        };
        assert_eq!(
            query.to_query_string(),
            "?fecha_inicio=2026-02-01&fecha_fin=2026-02-28&categoria=SERVICIOS"
        );
        assert_eq!(ExpenseQuery::default().to_query_string(), "");
    }

    #[tokio::test]
    async fn missing_receipt_is_io_error() {
        let client =
            ApiClient::new("http://127.0.0.1:9", std::time::Duration::from_secs(1)).unwrap();
        let err = client
            .extract_receipt(Path::new("/definitely/not/here.jpg"), "image/jpeg")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Io(_)));
    }
}
