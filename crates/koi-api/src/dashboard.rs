//! Dashboard metrics and sales reports.

use crate::schemas::{DailySales, DashboardSummary};
use crate::{ApiClient, error::ApiError, http::read_json};

impl ApiClient {
    /// Fetch the precomputed dashboard summary.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the API returns a
    /// non-success status, or the body does not match the schema.
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        let url = self.url("/api/dashboard/resumen");
        tracing::debug!(%url, "fetching dashboard summary");
        read_json(self.http.get(&url).send().await?).await
    }

    /// Fetch total sales per day for one month, ordered by date.
    ///
    /// # Errors
    ///
    /// Same as [`Self::dashboard_summary`].
    pub async fn daily_sales(&self, month: u32, year: i32) -> Result<Vec<DailySales>, ApiError> {
        let url = self.url(&format!(
            "/api/reportes/ventas-diarias?mes={month}&anio={year}"
        ));
        tracing::debug!(%url, "fetching daily sales");
        let series: Vec<DailySales> = read_json(self.http.get(&url).send().await?).await?;
        tracing::debug!(days = series.len(), month, year, "daily sales loaded");
        Ok(series)
    }
}
